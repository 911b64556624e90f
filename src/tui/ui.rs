use ratatui::prelude::*;
use ratatui::widgets::canvas::{Canvas, Line as PitchLine, Rectangle};
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Tabs};

use crate::matchup::TeamLabel;
use crate::output::format_score;
use crate::tui::app::{App, InputMode};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 10 || area.width < 50 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Tabs(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(1), // Tab bar
        Constraint::Fill(1),   // Pitch + table
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let body = Layout::horizontal([Constraint::Fill(1), Constraint::Length(42)]).split(chunks[2]);

    render_title(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    render_pitch(frame, body[0], app);
    render_table(frame, body[1], app);
    render_status_bar(frame, chunks[3], app);

    // Render overlays based on input mode
    match app.input_mode {
        InputMode::SeedInput => render_seed_popup(frame, app),
        InputMode::Help => render_help_popup(frame, app),
        InputMode::ScoreBreakdown => render_breakdown_popup(frame, app),
        InputMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let left = "Team Shuffle";
    let right = format!(
        "seed {}  difference {}",
        app.matchup.seed,
        format_score(app.matchup.imbalance())
    );
    let padding_len = (area.width as usize).saturating_sub(left.len() + right.len());

    let title = Line::from(vec![
        Span::styled(left, Style::default().fg(app.colors.title_color).bold()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right, Style::default().fg(app.colors.muted)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<String> = app
        .matchup
        .teams
        .iter()
        .map(|sheet| format!("Team {} ({})", sheet.label, format_score(sheet.strength)))
        .collect();
    let selected = match app.current_team {
        TeamLabel::A => 0,
        TeamLabel::B => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.colors.tab_inactive_style)
        .highlight_style(app.colors.tab_active_style.reversed())
        .divider(" | ");

    frame.render_widget(tabs, area);
}

/// Draw the current team on a half pitch. Own goal is at the bottom, so the
/// canvas y axis is `1 - y`.
fn render_pitch(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let players = app.current_players();
    let selected_id = app.selected_player().map(|p| p.id);

    let canvas = Canvas::default()
        .block(Block::bordered().border_style(Style::default().fg(colors.pitch_lines)))
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, 1.0])
        .y_bounds([0.0, 1.0])
        .paint(|ctx| {
            // Halfway line and own penalty box
            ctx.draw(&PitchLine::new(0.0, 1.0, 1.0, 1.0, colors.pitch_lines));
            ctx.draw(&Rectangle {
                x: 0.25,
                y: 0.0,
                width: 0.5,
                height: 0.15,
                color: colors.pitch_lines,
            });
            ctx.layer();

            for placed in players {
                let mut style = Style::default().fg(colors.zone_color(placed.zone));
                if Some(placed.id) == selected_id {
                    style = style.fg(colors.marker_selected).bold().reversed();
                }
                let label: String = placed.name.chars().take(10).collect();
                ctx.print(placed.x, 1.0 - placed.y, Span::styled(label, style));
            }
        });

    frame.render_widget(canvas, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut App) {
    let sheet = app.current_sheet();

    if sheet.players.is_empty() {
        let empty_msg = Paragraph::new("No players")
            .alignment(Alignment::Center)
            .block(Block::default());
        frame.render_widget(empty_msg, area);
        return;
    }

    let rows: Vec<Row> = sheet
        .players
        .iter()
        .enumerate()
        .map(|(idx, placed)| {
            let score = sheet
                .score_of(placed.id)
                .map(|s| format_score(s.score))
                .unwrap_or_default();

            // Alternating row background (odd rows get subtle background)
            let row_style = if idx % 2 == 1 {
                Style::default().bg(app.colors.row_alt_bg)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(placed.zone.abbrev())
                    .style(Style::default().fg(app.colors.zone_color(placed.zone))),
                Cell::from(placed.name.clone()),
                Cell::from(format!("{:>5}", score)),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(4), // Zone: "MID"
        Constraint::Fill(1),   // Name
        Constraint::Length(6), // Score
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Zone", "Name", "Score"])
                .style(app.colors.header_style)
                .bottom_margin(1),
        )
        .row_highlight_style(app.colors.row_selected);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Error") || msg.starts_with("Invalid") || msg.starts_with("Nothing") {
            colors.flash_error
        } else {
            colors.flash_success
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let count = format!("{} players", app.matchup.player_count());

        let hints = [
            ("j", "/", "k", ":nav "),
            ("Tab", "", "", ":team "),
            ("s", "", "", ":shuffle "),
            ("e", "", "", ":seed "),
            ("z", "", "", ":undo "),
            ("b", "", "", ":breakdown "),
            ("?", "", "", ":help "),
            ("q", "", "", ":quit"),
        ];

        let mut spans = vec![
            Span::styled(count, Style::default().fg(colors.muted)),
            Span::raw("  "),
        ];
        for (i, (key1, sep, key2, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key1, Style::default().fg(colors.status_key_color)));
            if !sep.is_empty() {
                spans.push(Span::raw(*sep));
                spans.push(Span::styled(*key2, Style::default().fg(colors.status_key_color)));
            }
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(colors.status_bar_bg)),
        area,
    );
}

/// Render the seed input popup
fn render_seed_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(40, 4, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Seed ", app.colors.popup_title))
        .border_style(Style::default().fg(app.colors.popup_border))
        .style(Style::default().bg(app.colors.popup_bg));
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Input line
        Constraint::Length(1), // Help text
    ])
    .split(inner);

    frame.render_widget(Paragraph::new(format!("{}|", app.seed_input)), chunks[0]);
    let help = Paragraph::new("Enter: load | Esc: cancel")
        .style(Style::default().fg(app.colors.muted));
    frame.render_widget(help, chunks[1]);
}

/// Render the score breakdown of the selected player
fn render_breakdown_popup(frame: &mut Frame, app: &App) {
    let Some(scored) = app.selected_score() else {
        return;
    };
    let colors = &app.colors;

    let height = scored.breakdown.contributions.len() as u16 + 5;
    let popup_area = centered_rect_fixed(44, height, frame.area());
    frame.render_widget(Clear, popup_area);

    let title = format!(" {} ", scored.player.name);
    let block = Block::bordered()
        .title(Span::styled(title, colors.popup_title))
        .border_style(Style::default().fg(colors.popup_border))
        .style(Style::default().bg(colors.popup_bg));
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let mut lines: Vec<Line> = scored
        .breakdown
        .contributions
        .iter()
        .map(|c| {
            Line::from(vec![
                Span::styled(format!("{:<12}", c.attribute), Style::default().fg(colors.status_key_color)),
                Span::raw(format!(
                    "{:>3} x {:<5} = {}",
                    c.value,
                    format_score(c.weight),
                    format_score(c.points)
                )),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Score: {}", format_score(scored.score)),
        Style::default().bold(),
    )));
    lines.push(Line::from(Span::styled(
        "b / Esc to close",
        Style::default().fg(colors.muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &App) {
    let colors = &app.colors;
    let popup_area = centered_rect_fixed(50, 14, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Keyboard Shortcuts ", colors.popup_title))
        .border_style(Style::default().fg(colors.popup_border))
        .style(Style::default().bg(colors.popup_bg));
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(colors.status_key_color).bold();
    let entries = [
        ("j / Down      ", "Move down"),
        ("k / Up        ", "Move up"),
        ("Tab           ", "Switch team"),
        ("s             ", "Reshuffle with a fresh seed"),
        ("e             ", "Enter a seed"),
        ("z             ", "Back to the previous seed"),
        ("b             ", "Score breakdown"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(key, text)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*text)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(colors.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect_fixed(40, 4, area);
        assert_eq!(rect, Rect::new(30, 18, 40, 4));
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(5, 5, 20, 3);
        let rect = centered_rect_fixed(40, 10, area);
        assert_eq!(rect, Rect::new(5, 5, 20, 3));
    }
}
