use crate::balance::{Clusterer, KMeans, NoClustering};
use crate::error::BalanceError;
use crate::matchup::{create_matchup, Matchup, TeamLabel, TeamSheet};
use crate::positions::PlacedPlayer;
use crate::roster::Player;
use crate::scoring::{AttributeWeights, BalanceConfig, ScoredPlayer};
use crate::tui::ThemeColors;
use std::collections::VecDeque;
use std::time::Instant;

const MAX_UNDO: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    SeedInput,
    Help,
    ScoreBreakdown,
}

pub struct App {
    pub roster: Vec<Player>,
    pub weights: AttributeWeights,
    pub balance: BalanceConfig,
    pub use_clusters: bool,
    pub matchup: Matchup,
    pub current_team: TeamLabel,
    pub table_state: ratatui::widgets::TableState,
    pub input_mode: InputMode,
    pub seed_input: String,
    pub flash_message: Option<(String, Instant)>,
    /// Seeds of earlier matchups, most recent first
    pub undo_stack: VecDeque<u64>,
    pub should_quit: bool,
    pub colors: ThemeColors,
}

impl App {
    /// Build the first matchup and the view state around it.
    pub fn new(
        roster: Vec<Player>,
        weights: AttributeWeights,
        balance: BalanceConfig,
        use_clusters: bool,
        seed: Option<u64>,
        colors: ThemeColors,
    ) -> Result<Self, BalanceError> {
        let matchup = build_matchup(&roster, &weights, &balance, use_clusters, seed)?;

        let mut app = Self {
            roster,
            weights,
            balance,
            use_clusters,
            matchup,
            current_team: TeamLabel::A,
            table_state: ratatui::widgets::TableState::default(),
            input_mode: InputMode::Normal,
            seed_input: String::new(),
            flash_message: None,
            undo_stack: VecDeque::new(),
            should_quit: false,
            colors,
        };
        app.reset_selection();
        Ok(app)
    }

    pub fn current_sheet(&self) -> &TeamSheet {
        self.matchup.team(self.current_team)
    }

    pub fn current_players(&self) -> &[PlacedPlayer] {
        &self.current_sheet().players
    }

    pub fn next_row(&mut self) {
        let len = self.current_players().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let len = self.current_players().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    pub fn selected_player(&self) -> Option<&PlacedPlayer> {
        self.table_state
            .selected()
            .and_then(|i| self.current_players().get(i))
    }

    /// Score breakdown of the selected player
    pub fn selected_score(&self) -> Option<&ScoredPlayer> {
        let id = self.selected_player()?.id;
        self.current_sheet().score_of(id)
    }

    pub fn push_undo(&mut self, seed: u64) {
        self.undo_stack.push_front(seed);
        if self.undo_stack.len() > MAX_UNDO {
            self.undo_stack.pop_back();
        }
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    /// Replace the matchup with one built from `seed` (fresh when None).
    /// The previous seed goes on the undo stack when `remember` is set.
    fn rebuild(&mut self, seed: Option<u64>, remember: bool) -> Result<(), BalanceError> {
        let matchup = build_matchup(
            &self.roster,
            &self.weights,
            &self.balance,
            self.use_clusters,
            seed,
        )?;
        if remember {
            self.push_undo(self.matchup.seed);
        }
        self.matchup = matchup;
        self.reset_selection();
        Ok(())
    }

    /// Draw a new matchup with a fresh seed
    pub fn reshuffle(&mut self) {
        match self.rebuild(None, true) {
            Ok(()) => self.show_flash(format!("Reshuffled (seed {})", self.matchup.seed)),
            Err(e) => self.show_flash(format!("Error: {}", e)),
        }
    }

    pub fn start_seed_input(&mut self) {
        self.input_mode = InputMode::SeedInput;
        self.seed_input.clear();
    }

    pub fn cancel_seed_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.seed_input.clear();
    }

    /// Rebuild the matchup from the typed seed
    pub fn apply_seed_input(&mut self) {
        let input = self.seed_input.trim().to_string();
        self.input_mode = InputMode::Normal;
        self.seed_input.clear();

        let seed = match input.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                self.show_flash(format!("Invalid seed: '{}'", input));
                return;
            }
        };

        match self.rebuild(Some(seed), true) {
            Ok(()) => self.show_flash(format!("Loaded seed {}", seed)),
            Err(e) => self.show_flash(format!("Error: {}", e)),
        }
    }

    /// Go back to the matchup before the last reshuffle
    pub fn undo_last(&mut self) {
        let seed = match self.undo_stack.pop_front() {
            Some(seed) => seed,
            None => {
                self.show_flash("Nothing to undo".to_string());
                return;
            }
        };

        match self.rebuild(Some(seed), false) {
            Ok(()) => self.show_flash(format!("Restored seed {}", seed)),
            Err(e) => self.show_flash(format!("Error: {}", e)),
        }
    }

    /// Switch between Team A and Team B
    pub fn toggle_team(&mut self) {
        self.current_team = match self.current_team {
            TeamLabel::A => TeamLabel::B,
            TeamLabel::B => TeamLabel::A,
        };
        self.reset_selection();
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn show_score_breakdown(&mut self) {
        if self.selected_player().is_some() {
            self.input_mode = InputMode::ScoreBreakdown;
        }
    }

    pub fn dismiss_score_breakdown(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    fn reset_selection(&mut self) {
        if self.current_players().is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }
}

fn build_matchup(
    roster: &[Player],
    weights: &AttributeWeights,
    balance: &BalanceConfig,
    use_clusters: bool,
    seed: Option<u64>,
) -> Result<Matchup, BalanceError> {
    let kmeans = KMeans::default();
    let clusterer: &dyn Clusterer = if use_clusters { &kmeans } else { &NoClustering };
    create_matchup(roster, weights, balance, clusterer, seed)
}
