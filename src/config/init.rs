use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, save_config, Config};
use crate::scoring::{AttributeWeights, BalanceConfig, REQUIRED_ATTRIBUTES};
use crate::tui::Theme;

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Keep asking until `parse` accepts the answer.
fn prompt_parsed<T, F>(message: &str, default: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        let input = prompt_with_default(message, default)?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    }
}

/// Print text with a typewriter effect, one character at a time.
fn typewriter(text: &str) {
    use std::thread;
    use std::time::Duration;
    for c in text.chars() {
        print!("{}", c);
        std::io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(18));
    }
    println!();
}

pub(crate) fn parse_non_negative(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Ok(_) => Err("must be a non-negative number".to_string()),
        Err(_) => Err(format!("'{}' is not a number", s)),
    }
}

pub(crate) fn parse_probability(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(v) if (0.0..=1.0).contains(&v) => Ok(v),
        Ok(_) => Err("must be between 0 and 1".to_string()),
        Err(_) => Err(format!("'{}' is not a number", s)),
    }
}

pub(crate) fn parse_theme(s: &str) -> Result<Theme, String> {
    match s.to_lowercase().as_str() {
        "auto" => Ok(Theme::Auto),
        "dark" => Ok(Theme::Dark),
        "light" => Ok(Theme::Light),
        other => Err(format!("unknown theme '{}' (auto, dark, light)", other)),
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    typewriter("Team Shuffle Configuration Wizard");
    println!("=================================");
    println!();

    // 1. Roster
    typewriter("Point at the JSON file holding your players. Each entry needs an id, a name, attack, defense and athleticism.");
    let roster = prompt("Roster file (leave empty to pass --roster each time): ")?;
    let roster = if roster.is_empty() {
        None
    } else {
        Some(PathBuf::from(roster))
    };

    // 2. Weights
    println!();
    typewriter("Weights decide how much each attribute counts towards a player's strength.");
    typewriter("A player's score is attack x w_attack + defense x w_defense + athleticism x w_athleticism.");
    let configure_weights = prompt_yes_no("Configure weights? (n keeps all at 1.0)", false)?;
    let weights = if configure_weights {
        let mut weights = AttributeWeights::empty();
        for attribute in REQUIRED_ATTRIBUTES {
            let w = prompt_parsed(&format!("Weight for {}", attribute), "1.0", parse_non_negative)?;
            weights = weights.with(attribute, w);
        }
        Some(weights)
    } else {
        None
    };

    // 3. Balancing knobs
    println!();
    let defaults = BalanceConfig::default();
    typewriter("Near-equal players can swap places in the ranking so repeated shuffles differ.");
    let configure_balance = prompt_yes_no("Tune the shuffle? (n accepts defaults)", false)?;
    let balance = if configure_balance {
        let tie_break_probability = prompt_parsed(
            "Swap probability for near-equal players (0-1)",
            &defaults.tie_break_probability.to_string(),
            parse_probability,
        )?;
        let closeness_window = prompt_parsed(
            "Closeness window as a fraction of the higher score",
            &defaults.closeness_window.to_string(),
            parse_non_negative,
        )?;

        println!();
        typewriter("Players whose attack and defense differ by more than the outlier gap go straight to attack or defense.");
        let outlier_threshold = prompt_parsed(
            "Outlier gap",
            &defaults.outlier_threshold.to_string(),
            |s| {
                s.parse::<i32>()
                    .ok()
                    .filter(|v| *v >= 0)
                    .ok_or_else(|| "must be a non-negative whole number".to_string())
            },
        )?;

        Some(BalanceConfig {
            tie_break_probability,
            closeness_window,
            outlier_threshold,
            ..defaults
        })
    } else {
        None
    };

    // 4. Theme
    println!();
    let theme = prompt_parsed("Pitch view theme (auto, dark, light)", "auto", parse_theme)?;

    // 5. Config path
    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    // Check if file already exists
    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 6. Write config
    let config = Config {
        roster,
        weights,
        balance,
        theme,
    };
    save_config(&config_path, &config)?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `team-shuffle` to build your first matchup.");

    Ok(())
}
