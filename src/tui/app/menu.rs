use crate::agents::{AgentTable, BotAgent, BotProfile, Difficulty, HumanAgent};
use crate::game::Game;

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    PlayersPerTeam,
    BotDifficulty,
    BotDelayMs,
}

const MENU_ITEMS: [MenuItem; 3] =
    [MenuItem::PlayersPerTeam, MenuItem::BotDifficulty, MenuItem::BotDelayMs];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::PlayersPerTeam => {
                format!(
                    "Players per team: {} ({}v{})",
                    app.cfg_players_per_team, app.cfg_players_per_team, app.cfg_players_per_team
                )
            }
            MenuItem::BotDifficulty => {
                format!("Bot Difficulty: {}", AppState::difficulty_label(app.cfg_bot_difficulty))
            }
            MenuItem::BotDelayMs => format!("Bot Delay (ms): {}", app.cfg_bot_delay_ms),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::PlayersPerTeam => {
                if app.cfg_players_per_team < 3 {
                    app.cfg_players_per_team += 1;
                }
            }
            MenuItem::BotDelayMs => {
                app.cfg_bot_delay_ms = app.cfg_bot_delay_ms.saturating_add(100);
            }
            MenuItem::BotDifficulty => {
                app.cfg_bot_difficulty = match app.cfg_bot_difficulty {
                    Difficulty::Easy => Difficulty::Medium,
                    Difficulty::Medium => Difficulty::Hard,
                    Difficulty::Hard => Difficulty::Expert,
                    Difficulty::Expert => Difficulty::Easy,
                };
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::PlayersPerTeam => {
                if app.cfg_players_per_team > 1 {
                    app.cfg_players_per_team -= 1;
                }
            }
            MenuItem::BotDelayMs => {
                app.cfg_bot_delay_ms = app.cfg_bot_delay_ms.saturating_sub(100);
            }
            MenuItem::BotDifficulty => {
                app.cfg_bot_difficulty = match app.cfg_bot_difficulty {
                    Difficulty::Easy => Difficulty::Expert,
                    Difficulty::Medium => Difficulty::Easy,
                    Difficulty::Hard => Difficulty::Medium,
                    Difficulty::Expert => Difficulty::Hard,
                };
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_players_per_team = self.game.players_per_team().max(1);
        self.cfg_bot_delay_ms = self.bot_delay_ms;
        self.cfg_bot_difficulty = self.bot_default_difficulty;
        self.scene = super::Scene::Menu;
    }

    pub fn apply_menu(&mut self) {
        // Ensure invariants
        self.cfg_players_per_team = self.cfg_players_per_team.clamp(1, 3);
        let seats = self.cfg_players_per_team * 2;

        self.bot_delay_ms = self.cfg_bot_delay_ms;
        self.bot_default_difficulty = self.cfg_bot_difficulty;
        let default_profile =
            Self::default_bot_profile(self.bot_delay_ms, self.bot_default_difficulty);
        self.bot_profiles = vec![default_profile; seats];
        self.game = Game::new(self.cfg_players_per_team);
        self.focus = 0;
        self.agents = AgentTable::for_seats(seats);
        self.agents.set_min_action_delay_ms(150);
        self.agents.set_agent(0, Some(Box::new(HumanAgent::new())));
        for i in 1..seats {
            let profile = self.bot_profiles.get(i).cloned().unwrap_or_else(|| {
                Self::default_bot_profile(self.bot_delay_ms, self.bot_default_difficulty)
            });
            self.agents.set_agent(i, Some(Box::new(BotAgent::new(profile))));
        }
        self.hand_started = false;
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }

    pub(crate) fn default_bot_profile(delay_ms: u64, difficulty: Difficulty) -> BotProfile {
        let mut profile = BotProfile::for_difficulty(difficulty);
        profile.min_delay_ms = delay_ms;
        profile.max_delay_ms = delay_ms;
        profile
    }

    pub(crate) fn ensure_bot_profiles_len(&mut self, n: usize) {
        if self.bot_profiles.len() < n {
            let profile = Self::default_bot_profile(self.bot_delay_ms, self.bot_default_difficulty);
            self.bot_profiles.resize(n, profile);
        }
        if self.bot_profiles.len() > n {
            self.bot_profiles.truncate(n);
        }
    }
}
