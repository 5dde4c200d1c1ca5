use crate::agents::{
    acting_seat, Action, AgentKind, AgentTable, BotAgent, BotProfile, Difficulty,
};
use crate::bidding::Stake;
use crate::game::{Game, Phase};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    NewHand,
    /// Play the card at this position (0-based) in the focused seat's hand.
    PlayCard(usize),
    /// Open the truco stake picker (call, or counter while a raise pends).
    StakeOpen,
    StakeNext,
    StakePrev,
    StakeSubmit,
    StakeCancel,
    /// Accept the pending raise.
    Accept,
    /// Decline the pending raise.
    Decline,
    BotDifficultyNext,
    FocusNext,
    FocusPrev,
    FocusSeat(usize),
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub started: Instant,
    // Core game engine instance
    pub game: Game,
    // UI focus seat index (does not auto-move with action)
    pub focus: usize,
    pub agents: AgentTable,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_players_per_team: usize,
    pub cfg_bot_delay_ms: u64,
    pub bot_delay_ms: u64,
    pub cfg_bot_difficulty: Difficulty,
    pub bot_default_difficulty: Difficulty,
    pub hand_started: bool,
    pub(crate) bot_profiles: Vec<BotProfile>,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    stake_entry: Option<usize>,
    stake_entry_error: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        let per_team = 2;
        let game = Game::new(per_team);
        let default_delay = 500;
        let default_difficulty = Difficulty::Medium;
        let default_profile = Self::default_bot_profile(default_delay, default_difficulty);
        Self {
            scene: Scene::Menu,
            started: Instant::now(),
            game,
            focus: 0,
            agents: AgentTable::for_seats(per_team * 2),
            menu_index: 0,
            cfg_players_per_team: per_team,
            cfg_bot_delay_ms: default_delay,
            bot_delay_ms: default_delay,
            cfg_bot_difficulty: default_difficulty,
            bot_default_difficulty: default_difficulty,
            hand_started: false,
            bot_profiles: vec![default_profile; per_team * 2],
            help_open: false,
            history_open: false,
            history_offset: 0,
            stake_entry: None,
            stake_entry_error: None,
            action_error: None,
            action_error_at: None,
        }
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    fn can_act_for_focus(&self) -> bool {
        if self.scene != Scene::Table || !self.hand_started {
            return false;
        }
        if self.game.players().is_empty() {
            return false;
        }
        if matches!(self.game.phase(), Phase::Resolved) {
            return false;
        }
        self.focus == acting_seat(&self.game)
    }

    fn queue_action(&mut self, action: Action) -> bool {
        if !self.can_act_for_focus() {
            return false;
        }
        self.clear_action_error();
        let _ = self.agents.receive(self.focus, action);
        true
    }

    pub fn stake_entry_active(&self) -> bool {
        self.stake_entry.is_some()
    }

    pub fn stake_entry_selection(&self) -> Option<usize> {
        self.stake_entry
    }

    pub fn stake_entry_error(&self) -> Option<&str> {
        self.stake_entry_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    pub fn bot_profile_label(&self, seat: usize) -> Option<&'static str> {
        if !matches!(self.agents.agent_kind(seat), Some(AgentKind::Bot)) {
            return None;
        }
        let diff = self.bot_profiles.get(seat).map(|p| p.difficulty).unwrap_or(Difficulty::Medium);
        Some(Self::difficulty_label(diff))
    }

    pub fn difficulty_label(difficulty: Difficulty) -> &'static str {
        match difficulty {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Med",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Xprt",
        }
    }

    /// Raise targets currently on offer: everything above the agreed stake,
    /// or above the pending raise when countering.
    pub fn stake_targets(&self) -> Vec<Stake> {
        let floor = match self.game.pending_raise() {
            Some(p) => p.to,
            None => self.game.stake(),
        };
        Stake::RAISES.into_iter().filter(|&s| s > floor).collect()
    }

    /// Whether the picker would counter (a raise pends) or open a call.
    pub fn stake_entry_is_counter(&self) -> bool {
        self.game.pending_raise().is_some()
    }

    fn open_stake_entry(&mut self) -> bool {
        if !self.can_act_for_focus() {
            return false;
        }
        if self.stake_targets().is_empty() {
            self.action_error = Some("The stake cannot go any higher".to_string());
            self.action_error_at = Some(Instant::now());
            return false;
        }
        self.stake_entry = Some(0);
        self.stake_entry_error = None;
        true
    }

    fn stake_entry_next(&mut self) {
        let len = self.stake_targets().len();
        if let (Some(idx), true) = (self.stake_entry, len > 0) {
            self.stake_entry = Some((idx + 1) % len);
        }
        self.stake_entry_error = None;
    }

    fn stake_entry_prev(&mut self) {
        let len = self.stake_targets().len();
        if let (Some(idx), true) = (self.stake_entry, len > 0) {
            self.stake_entry = Some((idx + len - 1) % len);
        }
        self.stake_entry_error = None;
    }

    fn stake_entry_submit(&mut self) -> bool {
        let Some(idx) = self.stake_entry else {
            return false;
        };
        let targets = self.stake_targets();
        let Some(&target) = targets.get(idx) else {
            self.stake_entry = None;
            return false;
        };
        let action = if self.stake_entry_is_counter() {
            Action::Counter(target)
        } else {
            Action::CallTruco(target)
        };
        if self.queue_action(action) {
            self.stake_entry = None;
            self.stake_entry_error = None;
            return true;
        }
        self.stake_entry_error = Some("Action not allowed".to_string());
        false
    }

    fn stake_entry_cancel(&mut self) {
        self.stake_entry = None;
        self.stake_entry_error = None;
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::NewHand => {
                if self.scene == Scene::Table {
                    self.new_hand();
                }
                false
            }
            InputAction::PlayCard(index) => self.queue_action(Action::Play(index)),
            InputAction::Accept => self.queue_action(Action::Accept),
            InputAction::Decline => self.queue_action(Action::Decline),
            InputAction::StakeOpen => self.open_stake_entry(),
            InputAction::StakeNext => {
                self.stake_entry_next();
                false
            }
            InputAction::StakePrev => {
                self.stake_entry_prev();
                false
            }
            InputAction::StakeSubmit => self.stake_entry_submit(),
            InputAction::StakeCancel => {
                self.stake_entry_cancel();
                false
            }
            InputAction::BotDifficultyNext => {
                if self.scene == Scene::Table {
                    self.cycle_focus_bot_difficulty();
                }
                false
            }
            InputAction::FocusNext => {
                if self.scene == Scene::Table {
                    self.focus_next();
                }
                false
            }
            InputAction::FocusPrev => {
                if self.scene == Scene::Table {
                    self.focus_prev();
                }
                false
            }
            InputAction::FocusSeat(idx) => {
                if self.scene == Scene::Table {
                    self.set_focus_current(idx);
                }
                false
            }
        }
    }

    pub fn new_hand(&mut self) {
        if self.hand_started && !matches!(self.game.phase(), Phase::Resolved) {
            return;
        }
        if self.game.winner().is_some() {
            return;
        }
        self.game.deal_hand();
        self.hand_started = true;
        self.history_offset = 0;
        self.stake_entry = None;
        self.clear_action_error();
    }

    pub fn focus_next(&mut self) {
        if self.game.players().is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.game.players().len();
    }

    pub fn focus_prev(&mut self) {
        if self.game.players().is_empty() {
            return;
        }
        let n = self.game.players().len();
        self.focus = (self.focus + n - 1) % n;
    }

    pub fn set_focus_current(&mut self, idx: usize) {
        if self.game.players().is_empty() {
            return;
        }
        let n = self.game.players().len();
        self.focus = idx % n;
    }

    pub fn cycle_focus_bot_difficulty(&mut self) {
        if !matches!(self.agents.agent_kind(self.focus), Some(AgentKind::Bot)) {
            return;
        }
        self.ensure_bot_profiles_len(self.game.players().len());
        let current = self.bot_profiles.get(self.focus).cloned().unwrap_or_else(|| {
            Self::default_bot_profile(self.bot_delay_ms, self.bot_default_difficulty)
        });
        let next_diff = match current.difficulty {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Expert,
            Difficulty::Expert => Difficulty::Easy,
        };
        let mut next = BotProfile::for_difficulty(next_diff);
        next.min_delay_ms = current.min_delay_ms;
        next.max_delay_ms = current.max_delay_ms;
        next.rng_seed = current.rng_seed;
        if self.focus < self.bot_profiles.len() {
            self.bot_profiles[self.focus] = next.clone();
        }
        self.agents.set_agent(self.focus, Some(Box::new(BotAgent::new(next))));
    }

    pub fn agents_on_turn(&mut self) {
        if self.scene != Scene::Table || !self.hand_started {
            return;
        }
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        self.agents.ensure_len(self.game.players().len());
        match self.agents.on_turn(&mut self.game) {
            Ok(true) => self.clear_action_error(),
            Ok(false) => {}
            Err(err) => {
                self.action_error = Some(err.to_string());
                self.action_error_at = Some(Instant::now());
            }
        }
    }
}
