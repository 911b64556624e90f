use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::matchup::{Matchup, TeamSheet};
use crate::positions::Zone;
use crate::scoring::ScoredPlayer;

/// How `shuffle` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned, optionally coloured table per team
    #[default]
    Table,
    /// Tab-separated rows for scripting
    Tsv,
    /// Full matchup as JSON
    Json,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with at most one decimal (15, 14.5)
pub fn format_score(score: f64) -> String {
    let formatted = format!("{:.1}", score);
    formatted
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(formatted)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn zone_colored(zone: Zone, text: &str) -> String {
    match zone {
        Zone::Goalkeeper => text.yellow().to_string(),
        Zone::Defense => text.blue().to_string(),
        Zone::Midfield => text.green().to_string(),
        Zone::Attack => text.red().to_string(),
    }
}

/// Format a matchup as one block per team:
/// a header line with label and strength, then one row per player
/// with zone, score, name and coordinates. Keeper first, then defense to attack.
pub fn format_matchup_table(matchup: &Matchup, use_colors: bool) -> String {
    let term_width = get_terminal_width();

    // Zone: 3, score: 6, coords: "(0.50, 1.00)" = 12, separators
    let fixed_width = 2 + 3 + 2 + 6 + 2 + 2 + 12;
    let name_width = match term_width {
        Some(width) if width > fixed_width + 10 => Some(width - fixed_width),
        Some(_) => Some(16),
        None => None,
    };

    let mut blocks: Vec<String> = matchup
        .teams
        .iter()
        .map(|sheet| format_team_block(sheet, name_width, use_colors))
        .collect();

    let footer = format!(
        "seed {}  |  difference {}",
        matchup.seed,
        format_score(matchup.imbalance())
    );
    blocks.push(if use_colors {
        footer.dimmed().to_string()
    } else {
        footer
    });

    blocks.join("\n\n")
}

fn format_team_block(sheet: &TeamSheet, name_width: Option<usize>, use_colors: bool) -> String {
    let header = format!(
        "Team {}  ({} players, strength {})",
        sheet.label,
        sheet.players.len(),
        format_score(sheet.strength)
    );
    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];

    if sheet.players.is_empty() {
        lines.push("  (no players)".to_string());
    }

    for placed in &sheet.players {
        let score = sheet
            .score_of(placed.id)
            .map(|s| format_score(s.score))
            .unwrap_or_else(|| "-".to_string());
        let name = match name_width {
            Some(w) => truncate_name(&placed.name, w),
            None => placed.name.clone(),
        };
        let zone = format!("{:<3}", placed.zone.abbrev());
        let zone = if use_colors {
            zone_colored(placed.zone, &zone)
        } else {
            zone
        };
        lines.push(format!(
            "  {}  {:>6}  {}  ({:.2}, {:.2})",
            zone, score, name, placed.x, placed.y
        ));
    }

    lines.join("\n")
}

/// Format a matchup as tab-separated values for scripting
/// Columns: team, id, name, zone, x, y (no headers, no colors)
pub fn format_tsv(matchup: &Matchup) -> String {
    matchup
        .teams
        .iter()
        .flat_map(|sheet| {
            sheet.players.iter().map(move |p| {
                format!(
                    "{}\t{}\t{}\t{}\t{:.4}\t{:.4}",
                    sheet.label, p.id, p.name, p.zone, p.x, p.y
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON, the shape an external store would persist
pub fn format_json(matchup: &Matchup) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(matchup)?)
}

/// Multi-line breakdown of how a player's score was built (for verbose mode)
pub fn format_breakdown(scored: &ScoredPlayer, use_colors: bool) -> String {
    let title = format!("{} (#{})", scored.player.name, scored.player.id);
    let mut lines = vec![if use_colors {
        title.bold().to_string()
    } else {
        title
    }];
    for c in &scored.breakdown.contributions {
        lines.push(format!(
            "  {:<12} {:>3} x {:<5} = {}",
            c.attribute,
            c.value,
            format_score(c.weight),
            format_score(c.points)
        ));
    }
    lines.push(format!("  Score: {}", format_score(scored.score)));
    lines.join("\n")
}
