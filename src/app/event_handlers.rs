use crossterm::event::{KeyCode, KeyEvent};

use crate::domain::{AgeGroup, Gender};

use super::{App, SetupColumn, UiMode, ui_helpers};

impl App {
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.in_search_modal() {
            self.handle_search_key(key);
            return false;
        }

        match self.ui_mode {
            UiMode::Setup => self.handle_setup_key(key),
            UiMode::Result => self.handle_result_key(key),
            UiMode::SearchModal => false,
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('/') => self.open_search(),
            KeyCode::Char('l') => self.request_suggestion(true),
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                self.setup_column = match self.setup_column {
                    SetupColumn::Age => SetupColumn::Gender,
                    SetupColumn::Gender => SetupColumn::Age,
                };
                self.render_needed = true;
            }
            KeyCode::Up => {
                match self.setup_column {
                    SetupColumn::Age => {
                        self.age_index =
                            ui_helpers::wrap_prev_index(self.age_index, AgeGroup::ALL.len());
                    }
                    SetupColumn::Gender => {
                        self.gender_index =
                            ui_helpers::wrap_prev_index(self.gender_index, Gender::ALL.len());
                    }
                }
                self.render_needed = true;
            }
            KeyCode::Down => {
                match self.setup_column {
                    SetupColumn::Age => {
                        self.age_index =
                            ui_helpers::wrap_next_index(self.age_index, AgeGroup::ALL.len());
                    }
                    SetupColumn::Gender => {
                        self.gender_index =
                            ui_helpers::wrap_next_index(self.gender_index, Gender::ALL.len());
                    }
                }
                self.render_needed = true;
            }
            KeyCode::Char(' ') | KeyCode::Enter => match self.setup_column {
                SetupColumn::Age => self.set_age_group(AgeGroup::ALL[self.age_index]),
                SetupColumn::Gender => self.set_gender(Gender::ALL[self.gender_index]),
            },
            // Filtered pick is gated on complete preferences; the engine's
            // fallback would otherwise silently ignore the filters.
            KeyCode::Char('g') => {
                if self.preferences.is_complete() && !self.is_loading() {
                    self.request_suggestion(false);
                }
            }
            _ => {}
        }
        false
    }

    fn handle_result_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => self.back_to_setup(),
            KeyCode::Char('/') => self.open_search(),
            KeyCode::Char('a') | KeyCode::Char(' ') => {
                if !self.is_loading() {
                    self.request_suggestion(self.lucky);
                }
            }
            KeyCode::Char('l') => {
                if !self.is_loading() {
                    self.request_suggestion(true);
                }
            }
            _ => {}
        }
        false
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_search(),
            KeyCode::Up => {
                let len = self.search.results.len();
                if len > 0 {
                    self.search.selected_index =
                        ui_helpers::wrap_prev_index(self.search.selected_index, len);
                    self.render_needed = true;
                }
            }
            KeyCode::Down => {
                let len = self.search.results.len();
                if len > 0 {
                    self.search.selected_index =
                        ui_helpers::wrap_next_index(self.search.selected_index, len);
                    self.render_needed = true;
                }
            }
            KeyCode::Left => {
                self.search.cycle_category(-1);
                self.refresh_search_results();
            }
            KeyCode::Right => {
                self.search.cycle_category(1);
                self.refresh_search_results();
            }
            KeyCode::Enter => {
                if let Some(activity) = self.search.selected_activity() {
                    self.search.clear();
                    self.ui_mode = UiMode::Result;
                    self.jump_to_activity(activity);
                }
            }
            KeyCode::Char(c) => {
                self.search.query.push(c);
                self.refresh_search_results();
            }
            KeyCode::Backspace => {
                self.search.query.pop();
                self.refresh_search_results();
            }
            _ => {}
        }
    }
}
