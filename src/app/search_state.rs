use crate::{
    catalog::ACTIVITIES,
    domain::{Activity, AgeGroup, Category, Gender},
    search::{SearchQuery, search},
    storage,
};

use super::App;

/// State behind the search overlay. Results are a pure function of
/// (query, category) and get recomputed on every change.
pub(super) struct SearchState {
    pub query: String,
    pub category: Option<Category>,
    pub results: Vec<&'static Activity>,
    pub selected_index: usize,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            category: None,
            results: Vec::new(),
            selected_index: 0,
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.category = None;
        self.results.clear();
        self.selected_index = 0;
    }

    pub fn selected_activity(&self) -> Option<&'static Activity> {
        self.results.get(self.selected_index).copied()
    }

    /// Cycle ALL -> first category -> ... -> last category -> ALL.
    pub fn cycle_category(&mut self, direction: isize) {
        let all = Category::ALL;
        let current = self
            .category
            .and_then(|c| all.iter().position(|&x| x == c))
            .map(|p| p as isize + 1)
            .unwrap_or(0);

        let count = all.len() as isize + 1;
        let next = (current + direction).rem_euclid(count);
        self.category = if next == 0 {
            None
        } else {
            Some(all[(next - 1) as usize])
        };
    }
}

impl App {
    pub(super) fn refresh_search_results(&mut self) {
        let query = SearchQuery {
            text: self.search.query.clone(),
            category: self.search.category,
        };
        self.search.results = search(ACTIVITIES, &self.index, &query);
        self.search.selected_index = 0;
        self.render_needed = true;
    }

    pub(super) fn set_age_group(&mut self, age: AgeGroup) {
        if self.preferences.age_group == Some(age) {
            return;
        }
        self.preferences.age_group = Some(age);
        self.apply_preference_change();
    }

    pub(super) fn set_gender(&mut self, gender: Gender) {
        if self.preferences.gender == Some(gender) {
            return;
        }
        self.preferences.gender = Some(gender);
        self.apply_preference_change();
    }

    /// A preference change discards the shown pick and the anti-repeat
    /// memory, then persists. Write failures are ignored; the in-memory
    /// preferences stay authoritative for this session.
    fn apply_preference_change(&mut self) {
        self.current = None;
        self.suggester.reset();
        let _ = storage::save_preferences(&storage::get_preferences_path(), &self.preferences);
        self.render_needed = true;
    }

    /// Point the setup cursors at the saved preferences, if any.
    pub(super) fn sync_setup_cursor(&mut self) {
        if let Some(age) = self.preferences.age_group {
            if let Some(pos) = AgeGroup::ALL.iter().position(|&a| a == age) {
                self.age_index = pos;
            }
        }
        if let Some(gender) = self.preferences.gender {
            if let Some(pos) = Gender::ALL.iter().position(|&g| g == gender) {
                self.gender_index = pos;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_category_wraps_both_ways() {
        let mut state = SearchState::new();
        assert_eq!(state.category, None);

        state.cycle_category(1);
        assert_eq!(state.category, Some(Category::ALL[0]));

        state.cycle_category(-1);
        assert_eq!(state.category, None);

        state.cycle_category(-1);
        assert_eq!(state.category, Some(Category::ALL[Category::ALL.len() - 1]));

        state.cycle_category(1);
        assert_eq!(state.category, None);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = SearchState::new();
        state.query.push_str("abc");
        state.category = Some(Category::Fun);
        state.selected_index = 3;

        state.clear();

        assert!(state.query.is_empty());
        assert_eq!(state.category, None);
        assert!(state.results.is_empty());
        assert_eq!(state.selected_index, 0);
    }
}
