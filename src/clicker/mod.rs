//! Clicker front end: dispatches player input to the progression engine and
//! turns its results into on-screen feedback.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::progression::{ConfigError, GameConfig, ProgressionEngine};

use actions::{buy_index_for_key, ClickAction, Tab};
use state::ClickerState;

pub struct ClickerGame {
    pub engine: ProgressionEngine,
    pub state: ClickerState,
}

impl ClickerGame {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: ProgressionEngine::new(config)?,
            state: ClickerState::new(),
        })
    }

    /// Returns true when the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let action = match event {
            InputEvent::Click(action) => *action,
            InputEvent::Key(c) => match *c {
                'c' | ' ' => ClickAction::Cookie,
                key => {
                    if let Some(tab) = Tab::from_key(key) {
                        ClickAction::SelectTab(tab)
                    } else if let Some(index) = buy_index_for_key(key) {
                        ClickAction::Buy(index)
                    } else {
                        return false;
                    }
                }
            },
        };
        self.dispatch(action)
    }

    fn dispatch(&mut self, action: ClickAction) -> bool {
        match action {
            ClickAction::Cookie => {
                let report = self.engine.perform_action();
                logic::record_action(&mut self.state, &report);
                true
            }
            ClickAction::SelectTab(tab) => {
                self.state.tab = tab;
                true
            }
            ClickAction::Buy(index) => {
                let Some(id) = self.engine.catalog().upgrades().get(index).map(|u| u.id.clone()) else {
                    return false;
                };
                let result = self.engine.attempt_purchase(&id);
                logic::record_purchase(&mut self.state, &result);
                true
            }
        }
    }

    pub fn advance(&mut self, elapsed_ms: f64) {
        logic::advance(&mut self.state, elapsed_ms);
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.engine.snapshot(), &self.state, f, area, click_state);
    }
}
