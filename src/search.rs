use itertools::Itertools;
use strsim::normalized_levenshtein;

use crate::constants::FUZZY_SETTINGS;
use crate::domain::{Activity, Category};

/// Free text plus an optional category restriction. `category: None` means
/// "ALL". Both empty means no search is active at all.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub text: String,
    pub category: Option<Category>,
}

struct IndexedToken {
    token: String,
    char_pos: usize,
}

struct IndexEntry<'a> {
    activity: &'a Activity,
    fields: Vec<Vec<IndexedToken>>,
}

/// Typo-tolerant index over activity text, description, and category
/// labels. Built once; the catalog never changes at runtime.
pub struct SearchIndex<'a> {
    entries: Vec<IndexEntry<'a>>,
}

impl<'a> SearchIndex<'a> {
    pub fn build(catalog: &'a [Activity]) -> Self {
        let entries = catalog
            .iter()
            .map(|activity| {
                let mut fields = vec![tokenize(activity.text)];
                if let Some(description) = activity.description {
                    fields.push(tokenize(description));
                }
                for category in activity.categories {
                    fields.push(tokenize(category.label()));
                }
                IndexEntry { activity, fields }
            })
            .collect();

        Self { entries }
    }

    /// Best matches first; lower score is better. Ties keep catalog order,
    /// so identical queries always produce identical order.
    pub fn query(&self, text: &str) -> Vec<(&'a Activity, f64)> {
        let query_tokens = tokenize(text);
        if query_tokens.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter_map(|entry| {
                entry
                    .fields
                    .iter()
                    .filter_map(|field| field_score(field, &query_tokens))
                    .min_by(|a, b| a.total_cmp(b))
                    .map(|score| (entry.activity, score))
            })
            .sorted_by(|(_, a), (_, b)| a.total_cmp(b))
            .collect()
    }
}

fn tokenize(text: &str) -> Vec<IndexedToken> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0usize;

    for (pos, ch) in lowered.chars().enumerate() {
        if ch.is_alphanumeric() {
            if current.is_empty() {
                start = pos;
            }
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(IndexedToken {
                token: std::mem::take(&mut current),
                char_pos: start,
            });
        }
    }
    if !current.is_empty() {
        tokens.push(IndexedToken {
            token: current,
            char_pos: start,
        });
    }

    tokens
}

/// A field matches only if every query token matches some field token
/// inside the search window. Field score is the mean of the per-token
/// scores.
fn field_score(field: &[IndexedToken], query_tokens: &[IndexedToken]) -> Option<f64> {
    let mut total = 0.0;

    for query_token in query_tokens {
        let best = field
            .iter()
            .filter(|t| t.char_pos <= FUZZY_SETTINGS.window_chars)
            .map(|t| token_score(&query_token.token, &t.token))
            .min_by(|a, b| a.total_cmp(b))?;

        if best > FUZZY_SETTINGS.max_score {
            return None;
        }
        total += best;
    }

    Some(total / query_tokens.len() as f64)
}

/// Normalized edit distance in [0, 1]; 0 is an exact match. Containment
/// scores by the share of missing characters, which favors prefixes of
/// longer words while the user is still typing.
fn token_score(query: &str, field: &str) -> f64 {
    if query == field {
        return 0.0;
    }

    let edit = 1.0 - normalized_levenshtein(query, field);

    if field.contains(query) || query.contains(field) {
        let longer = query.chars().count().max(field.chars().count()) as f64;
        let shorter = query.chars().count().min(field.chars().count()) as f64;
        let containment = (longer - shorter) / longer;
        return edit.min(containment);
    }

    edit
}

/// The four-state query pipeline: no text and no category means no search
/// is active; category alone filters in catalog order; text alone is pure
/// index order; both intersect, keeping index order.
pub fn search<'a>(
    catalog: &'a [Activity],
    index: &SearchIndex<'a>,
    query: &SearchQuery,
) -> Vec<&'a Activity> {
    let text = query.text.trim();

    match (text.is_empty(), query.category) {
        (true, None) => Vec::new(),
        (true, Some(category)) => catalog.iter().filter(|a| a.in_category(category)).collect(),
        (false, None) => index.query(text).into_iter().map(|(a, _)| a).collect(),
        (false, Some(category)) => index
            .query(text)
            .into_iter()
            .map(|(a, _)| a)
            .filter(|a| a.in_category(category))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ACTIVITIES;

    fn query(text: &str, category: Option<Category>) -> SearchQuery {
        SearchQuery {
            text: text.to_string(),
            category,
        }
    }

    #[test]
    fn test_empty_query_is_no_search() {
        let index = SearchIndex::build(ACTIVITIES);
        assert!(search(ACTIVITIES, &index, &query("", None)).is_empty());
        assert!(search(ACTIVITIES, &index, &query("   ", None)).is_empty());
    }

    #[test]
    fn test_category_only_matches_exactly_in_catalog_order() {
        let index = SearchIndex::build(ACTIVITIES);

        for category in Category::ALL {
            let results = search(ACTIVITIES, &index, &query("", Some(category)));
            let expected: Vec<&Activity> = ACTIVITIES
                .iter()
                .filter(|a| a.in_category(category))
                .collect();
            assert_eq!(results, expected, "category {:?}", category);
        }
    }

    #[test]
    fn test_exact_word_finds_activity_first() {
        let index = SearchIndex::build(ACTIVITIES);
        let results = search(ACTIVITIES, &index, &query("מבצר", None));
        assert_eq!(results.first().map(|a| a.id), Some("c1"));
    }

    #[test]
    fn test_typo_tolerance_altered_character() {
        let index = SearchIndex::build(ACTIVITIES);
        // "מבצד" is "מבצר" with the last letter replaced.
        let results = search(ACTIVITIES, &index, &query("מבצד", None));
        assert!(results.iter().any(|a| a.id == "c1"));
    }

    #[test]
    fn test_typo_tolerance_omitted_character() {
        let index = SearchIndex::build(ACTIVITIES);
        let results = search(ACTIVITIES, &index, &query("מבצ", None));
        assert!(results.iter().any(|a| a.id == "c1"));
    }

    #[test]
    fn test_unrelated_text_matches_nothing() {
        let index = SearchIndex::build(ACTIVITIES);
        let results = search(ACTIVITIES, &index, &query("zzzzqqqq", None));
        assert!(results.is_empty());
    }

    #[test]
    fn test_description_is_indexed() {
        let index = SearchIndex::build(ACTIVITIES);
        // "חומץ" appears only in c7's description.
        let results = search(ACTIVITIES, &index, &query("חומץ", None));
        assert!(results.iter().any(|a| a.id == "c7"));
    }

    #[test]
    fn test_category_labels_are_indexed() {
        let index = SearchIndex::build(ACTIVITIES);
        let results = search(ACTIVITIES, &index, &query("בישול", None));
        assert!(
            results
                .iter()
                .any(|a| a.in_category(Category::Cooking))
        );
    }

    #[test]
    fn test_all_query_tokens_must_match() {
        let index = SearchIndex::build(ACTIVITIES);
        // Both words appear together only in c1 ("מבצר ... בסלון"); n22 has
        // "בסלון" but not "מבצר".
        let results = search(ACTIVITIES, &index, &query("מבצר בסלון", None));
        assert!(results.iter().any(|a| a.id == "c1"));
        assert!(!results.iter().any(|a| a.id == "n22"));
    }

    #[test]
    fn test_combined_query_is_subset_of_both_paths() {
        let index = SearchIndex::build(ACTIVITIES);

        let text_only = search(ACTIVITIES, &index, &query("סדרו", None));
        let category_only = search(ACTIVITIES, &index, &query("", Some(Category::Chore)));
        let combined = search(ACTIVITIES, &index, &query("סדרו", Some(Category::Chore)));

        assert!(!combined.is_empty());
        for activity in &combined {
            assert!(text_only.contains(activity));
            assert!(category_only.contains(activity));
        }
    }

    #[test]
    fn test_combined_query_keeps_relevance_order() {
        let index = SearchIndex::build(ACTIVITIES);

        let text_only = search(ACTIVITIES, &index, &query("סדרו", None));
        let combined = search(ACTIVITIES, &index, &query("סדרו", Some(Category::Chore)));

        let positions: Vec<usize> = combined
            .iter()
            .map(|a| text_only.iter().position(|b| b.id == a.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_identical_queries_produce_identical_order() {
        let index = SearchIndex::build(ACTIVITIES);

        let first: Vec<&str> = index.query("סדרו את").iter().map(|(a, _)| a.id).collect();
        let second: Vec<&str> = index.query("סדרו את").iter().map(|(a, _)| a.id).collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_query_scores_are_sorted_ascending() {
        let index = SearchIndex::build(ACTIVITIES);
        let results = index.query("קלפים");
        assert!(!results.is_empty());
        assert!(results.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn test_token_score_prefers_exact_match() {
        assert_eq!(token_score("abc", "abc"), 0.0);
        assert!(token_score("abc", "abd") < token_score("abc", "xyz"));
    }
}
