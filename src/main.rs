use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use team_shuffle::balance::{Clusterer, KMeans, NoClustering};
use team_shuffle::config::Config;
use team_shuffle::output::OutputFormat;
use team_shuffle::roster::Player;

const EXIT_SUCCESS: i32 = 0;
const EXIT_ROSTER: i32 = 2;
const EXIT_BALANCE: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Args, Debug, Default, Clone)]
struct MatchupArgs {
    /// Roster JSON file (defaults to `roster` from the config)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Seed for a reproducible shuffle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Balance without similarity clusters
    #[arg(long)]
    no_cluster: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build and print a matchup (default if no subcommand)
    Shuffle {
        #[command(flatten)]
        args: MatchupArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Interactive pitch view
    Tui {
        #[command(flatten)]
        args: MatchupArgs,
    },
    /// Create a config file interactively
    Init,
    /// Check config and roster, reporting every problem
    Validate {
        /// Roster JSON file (defaults to `roster` from the config)
        #[arg(short, long)]
        roster: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "team-shuffle")]
#[command(about = "Split a roster into two balanced teams and place them on the pitch", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/team-shuffle/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "team_shuffle=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string()))
        .with_writer(team_shuffle::stderr_buffer::writer)
        .with_target(false)
        .init();

    let command = cli.command.unwrap_or(Commands::Shuffle {
        args: MatchupArgs::default(),
        format: OutputFormat::Table,
    });
    let config_path = cli.config.map(PathBuf::from);

    match command {
        Commands::Shuffle { args, format } => {
            let config = load_checked_config(config_path);
            let roster = load_checked_roster(args.roster.as_ref(), &config);
            run_shuffle(&roster, &config, &args, format, cli.verbose);
        }
        Commands::Tui { args } => {
            let config = load_checked_config(config_path);
            let roster = load_checked_roster(args.roster.as_ref(), &config);
            let colors = team_shuffle::tui::resolve_theme(config.theme);
            let app = match team_shuffle::tui::App::new(
                roster,
                config.effective_weights(),
                config.effective_balance(),
                !args.no_cluster,
                args.seed,
                colors,
            ) {
                Ok(app) => app,
                Err(e) => {
                    eprintln!("Balancing failed: {}", e);
                    std::process::exit(EXIT_BALANCE);
                }
            };
            if let Err(e) = team_shuffle::tui::run_tui(app).await {
                eprintln!("TUI error: {:#}", e);
                std::process::exit(EXIT_BALANCE);
            }
        }
        Commands::Validate { roster } => {
            let report = check_setup(config_path, roster.as_ref());
            report.print_errors();
            if !report.config_errors.is_empty() {
                std::process::exit(EXIT_CONFIG);
            }
            if !report.roster_errors.is_empty() {
                std::process::exit(EXIT_ROSTER);
            }
            println!("Config OK, {} players in roster", report.players);
        }
        // Runs without loading so a broken config can be replaced
        Commands::Init => {
            if let Err(e) = team_shuffle::config::init::run_init_wizard(config_path) {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load and validate the config, collecting every problem.
/// The config is still returned when only validation failed.
fn read_config(path: Option<PathBuf>) -> (Option<Config>, Vec<String>) {
    let config = match team_shuffle::config::load_config(path) {
        Ok(c) => c,
        Err(e) => return (None, vec![format!("{:#}", e)]),
    };

    match team_shuffle::config::validate_config(&config) {
        Ok(()) => (Some(config), Vec::new()),
        Err(errors) => (Some(config), errors),
    }
}

/// Load and validate the roster, collecting every problem.
fn read_roster(cli_path: Option<&PathBuf>, config: &Config) -> Result<Vec<Player>, Vec<String>> {
    let Some(path) = cli_path.or(config.roster.as_ref()) else {
        return Err(vec![
            "No roster given. Pass --roster <file> or set `roster` in the config.".to_string(),
        ]);
    };

    let players = team_shuffle::roster::load_roster(path).map_err(|e| vec![format!("{:#}", e)])?;
    team_shuffle::roster::validate_roster(&players).map_err(|errors| {
        errors
            .into_iter()
            .map(|e| format!("{}: {}", path.display(), e))
            .collect::<Vec<_>>()
    })?;

    Ok(players)
}

fn print_errors(heading: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    eprintln!("{}:", heading);
    for error in errors {
        eprintln!("  - {}", error);
    }
}

/// Exit with `EXIT_CONFIG` on any config problem.
fn load_checked_config(path: Option<PathBuf>) -> Config {
    match read_config(path) {
        (Some(config), errors) if errors.is_empty() => config,
        (_, errors) => {
            print_errors("Config errors", &errors);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

/// Exit with `EXIT_ROSTER` on any roster problem.
fn load_checked_roster(cli_path: Option<&PathBuf>, config: &Config) -> Vec<Player> {
    match read_roster(cli_path, config) {
        Ok(players) => players,
        Err(errors) => {
            print_errors("Roster errors", &errors);
            std::process::exit(EXIT_ROSTER);
        }
    }
}

/// Everything `validate` found, config and roster together.
struct SetupReport {
    config_errors: Vec<String>,
    roster_errors: Vec<String>,
    players: usize,
}

impl SetupReport {
    fn print_errors(&self) {
        print_errors("Config errors", &self.config_errors);
        print_errors("Roster errors", &self.roster_errors);
    }
}

fn check_setup(config_path: Option<PathBuf>, cli_roster: Option<&PathBuf>) -> SetupReport {
    let (config, config_errors) = read_config(config_path);

    // An unreadable config cannot name a roster; only --roster is checked then
    let roster = match (&config, cli_roster) {
        (Some(config), _) => Some(read_roster(cli_roster, config)),
        (None, Some(_)) => Some(read_roster(cli_roster, &Config::default())),
        (None, None) => None,
    };

    let (players, roster_errors) = match roster {
        Some(Ok(players)) => (players.len(), Vec::new()),
        Some(Err(errors)) => (0, errors),
        None => (0, Vec::new()),
    };

    SetupReport {
        config_errors,
        roster_errors,
        players,
    }
}

fn run_shuffle(roster: &[Player], config: &Config, args: &MatchupArgs, format: OutputFormat, verbose: bool) {
    let kmeans = KMeans::default();
    let clusterer: &dyn Clusterer = if args.no_cluster { &NoClustering } else { &kmeans };

    let matchup = match team_shuffle::matchup::create_matchup(
        roster,
        &config.effective_weights(),
        &config.effective_balance(),
        clusterer,
        args.seed,
    ) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Balancing failed: {}", e);
            std::process::exit(EXIT_BALANCE);
        }
    };

    let use_colors = team_shuffle::output::should_use_colors();
    match format {
        OutputFormat::Table => {
            println!("{}", team_shuffle::output::format_matchup_table(&matchup, use_colors));
        }
        OutputFormat::Tsv => println!("{}", team_shuffle::output::format_tsv(&matchup)),
        OutputFormat::Json => match team_shuffle::output::format_json(&matchup) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize matchup: {}", e);
                std::process::exit(EXIT_BALANCE);
            }
        },
    }

    // Score breakdowns go to stderr so piped output stays clean
    if verbose {
        for sheet in &matchup.teams {
            eprintln!();
            eprintln!("Team {}:", sheet.label);
            for scored in &sheet.scored {
                eprintln!("{}", team_shuffle::output::format_breakdown(scored, false));
            }
        }
    }
}
