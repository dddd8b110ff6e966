use std::time::Duration;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::DELAY_SETTINGS;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeGroup {
    Toddler,
    Child,
    Teen,
    Young,
    Adult,
    Senior,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::Toddler,
        AgeGroup::Child,
        AgeGroup::Teen,
        AgeGroup::Young,
        AgeGroup::Adult,
        AgeGroup::Senior,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Toddler => "Toddler (0-5)",
            AgeGroup::Child => "Child (6-12)",
            AgeGroup::Teen => "Teen (13-18)",
            AgeGroup::Young => "Young adult (18-30)",
            AgeGroup::Adult => "Adult (30-60)",
            AgeGroup::Senior => "Senior (60+)",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Boy,
    Girl,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Boy, Gender::Girl];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Boy => "Boy",
            Gender::Girl => "Girl",
        }
    }
}

/// Catalog-side audience tag. `Both` matches any gender preference.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GenderTag {
    Boy,
    Girl,
    Both,
}

impl GenderTag {
    pub fn matches(self, gender: Gender) -> bool {
        match self {
            GenderTag::Both => true,
            GenderTag::Boy => gender == Gender::Boy,
            GenderTag::Girl => gender == Gender::Girl,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, ValueEnum)]
pub enum Category {
    Creative,
    Physical,
    Intellectual,
    Fun,
    Chore,
    Social,
    Outdoors,
    Cooking,
    Music,
    Digital,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Creative,
        Category::Physical,
        Category::Intellectual,
        Category::Fun,
        Category::Chore,
        Category::Social,
        Category::Outdoors,
        Category::Cooking,
        Category::Music,
        Category::Digital,
    ];

    /// Display label. The catalog copy is Hebrew, and the labels double as
    /// search text for the fuzzy index, as in the original data set.
    pub fn label(self) -> &'static str {
        match self {
            Category::Creative => "יצירה",
            Category::Physical => "ספורט ותנועה",
            Category::Intellectual => "מחשבה",
            Category::Fun => "סתם כיף",
            Category::Chore => "מטלות",
            Category::Social => "חברתי",
            Category::Outdoors => "בחוץ",
            Category::Cooking => "בישול",
            Category::Music => "מוזיקה",
            Category::Digital => "דיגיטל",
        }
    }

    /// ASCII name, used by the CLI and as a neutral fallback label.
    pub fn name(self) -> &'static str {
        match self {
            Category::Creative => "creative",
            Category::Physical => "physical",
            Category::Intellectual => "intellectual",
            Category::Fun => "fun",
            Category::Chore => "chore",
            Category::Social => "social",
            Category::Outdoors => "outdoors",
            Category::Cooking => "cooking",
            Category::Music => "music",
            Category::Digital => "digital",
        }
    }
}

/// Opaque display-hint token resolved by the presentation layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Icon(pub &'static str);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Activity {
    pub id: &'static str,
    pub text: &'static str,
    pub categories: &'static [Category],
    pub suitable_ages: &'static [AgeGroup],
    pub suitable_genders: &'static [GenderTag],
    pub description: Option<&'static str>,
    pub icon: Icon,
}

impl Activity {
    pub fn in_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub age_group: Option<AgeGroup>,
    pub gender: Option<Gender>,
}

impl Preferences {
    pub fn is_complete(&self) -> bool {
        self.age_group.is_some() && self.gender.is_some()
    }
}

/// Lucky mode bypasses preferences entirely. Otherwise both criteria must
/// hold, and an unset preference fails every activity, so incomplete
/// preferences always yield an empty set (the suggester's fallback then
/// covers it, same as the original).
pub fn filter_activities<'a>(
    catalog: &'a [Activity],
    prefs: &Preferences,
    lucky: bool,
) -> Vec<&'a Activity> {
    if lucky {
        return catalog.iter().collect();
    }

    catalog
        .iter()
        .filter(|activity| {
            let matches_age = prefs
                .age_group
                .is_some_and(|age| activity.suitable_ages.contains(&age));
            let matches_gender = prefs
                .gender
                .is_some_and(|gender| activity.suitable_genders.iter().any(|t| t.matches(gender)));
            matches_age && matches_gender
        })
        .collect()
}

/// Uniform pick with a single corrective re-roll: if the draw repeats the
/// previous pick and an alternative exists, draw once more from the others.
pub fn select_activity<'a, R: Rng>(
    rng: &mut R,
    candidates: &[&'a Activity],
    previous_id: Option<&str>,
) -> &'a Activity {
    let pick = candidates[rng.gen_range(0..candidates.len())];

    if candidates.len() > 1 && previous_id == Some(pick.id) {
        let others: Vec<&Activity> = candidates
            .iter()
            .copied()
            .filter(|a| a.id != pick.id)
            .collect();
        return others[rng.gen_range(0..others.len())];
    }

    pick
}

/// Orchestrates filter + fallback + selection and remembers the previous
/// pick for the anti-repeat rule.
#[derive(Debug, Default)]
pub struct Suggester {
    previous_id: Option<String>,
}

impl Suggester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suggest<'a, R: Rng>(
        &mut self,
        rng: &mut R,
        catalog: &'a [Activity],
        prefs: &Preferences,
        lucky: bool,
    ) -> &'a Activity {
        let mut candidates = filter_activities(catalog, prefs, lucky);
        if candidates.is_empty() {
            candidates = catalog.iter().collect();
        }

        let pick = select_activity(rng, &candidates, self.previous_id.as_deref());
        self.previous_id = Some(pick.id.to_string());
        pick
    }

    /// Record an activity chosen outside the random path (search jump), so
    /// the next suggestion still avoids an immediate repeat.
    pub fn set_previous(&mut self, id: &str) {
        self.previous_id = Some(id.to_string());
    }

    /// Forget the previous pick. Called when preferences change and the
    /// displayed activity is discarded.
    pub fn reset(&mut self) {
        self.previous_id = None;
    }

    pub fn previous_id(&self) -> Option<&str> {
        self.previous_id.as_deref()
    }
}

/// Pacing only: how long the UI should pretend to think before revealing a
/// suggestion. Carries no data dependency; tests never call it.
pub fn suggestion_delay<R: Rng>(rng: &mut R) -> Duration {
    let jitter = rng.gen_range(0..DELAY_SETTINGS.suggest_jitter_ms);
    Duration::from_millis(DELAY_SETTINGS.suggest_base_ms + jitter)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog::ACTIVITIES;

    const FIXTURE: &[Activity] = &[
        Activity {
            id: "f1",
            text: "kids only",
            categories: &[Category::Fun],
            suitable_ages: &[AgeGroup::Toddler, AgeGroup::Child],
            suitable_genders: &[GenderTag::Both],
            description: None,
            icon: Icon("star"),
        },
        Activity {
            id: "f2",
            text: "girls only",
            categories: &[Category::Creative],
            suitable_ages: &[AgeGroup::Child],
            suitable_genders: &[GenderTag::Girl],
            description: None,
            icon: Icon("gem"),
        },
        Activity {
            id: "f3",
            text: "adults only",
            categories: &[Category::Chore],
            suitable_ages: &[AgeGroup::Adult, AgeGroup::Senior],
            suitable_genders: &[GenderTag::Both],
            description: None,
            icon: Icon("mail"),
        },
    ];

    fn prefs(age: Option<AgeGroup>, gender: Option<Gender>) -> Preferences {
        Preferences {
            age_group: age,
            gender,
        }
    }

    #[test]
    fn test_filter_requires_both_criteria() {
        let result = filter_activities(
            FIXTURE,
            &prefs(Some(AgeGroup::Child), Some(Gender::Girl)),
            false,
        );
        let ids: Vec<&str> = result.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["f1", "f2"]);

        let result = filter_activities(
            FIXTURE,
            &prefs(Some(AgeGroup::Child), Some(Gender::Boy)),
            false,
        );
        let ids: Vec<&str> = result.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["f1"]);
    }

    #[test]
    fn test_filter_unset_preference_matches_nothing() {
        assert!(filter_activities(FIXTURE, &prefs(Some(AgeGroup::Child), None), false).is_empty());
        assert!(filter_activities(FIXTURE, &prefs(None, Some(Gender::Boy)), false).is_empty());
        assert!(filter_activities(FIXTURE, &prefs(None, None), false).is_empty());
    }

    #[test]
    fn test_lucky_bypasses_preferences() {
        let result = filter_activities(FIXTURE, &prefs(None, None), true);
        assert_eq!(result.len(), FIXTURE.len());

        let result = filter_activities(
            FIXTURE,
            &prefs(Some(AgeGroup::Senior), Some(Gender::Boy)),
            true,
        );
        assert_eq!(result.len(), FIXTURE.len());
    }

    #[test]
    fn test_select_never_repeats_with_alternatives() {
        let candidates: Vec<&Activity> = FIXTURE.iter().collect();

        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pick = select_activity(&mut rng, &candidates, Some("f2"));
            assert_ne!(pick.id, "f2", "repeat at seed {}", seed);
        }
    }

    #[test]
    fn test_select_accepts_repeat_for_single_candidate() {
        let candidates: Vec<&Activity> = vec![&FIXTURE[0]];
        let mut rng = StdRng::seed_from_u64(7);
        let pick = select_activity(&mut rng, &candidates, Some("f1"));
        assert_eq!(pick.id, "f1");
    }

    #[test]
    fn test_select_unconstrained_when_previous_absent() {
        let candidates: Vec<&Activity> = FIXTURE.iter().collect();
        let mut rng = StdRng::seed_from_u64(11);
        // Previous is not in the candidate set; any pick is valid.
        let pick = select_activity(&mut rng, &candidates, Some("zz"));
        assert!(candidates.iter().any(|a| a.id == pick.id));
    }

    #[test]
    fn test_suggester_falls_back_to_full_catalog() {
        // Senior + Girl matches nothing in the fixture, so the suggester
        // must still produce something (from the whole set).
        let mut suggester = Suggester::new();
        let mut rng = StdRng::seed_from_u64(3);
        let pick = suggester.suggest(
            &mut rng,
            FIXTURE,
            &prefs(Some(AgeGroup::Teen), Some(Gender::Boy)),
            false,
        );
        assert!(FIXTURE.iter().any(|a| a.id == pick.id));
        assert_eq!(suggester.previous_id(), Some(pick.id));
    }

    #[test]
    fn test_suggester_is_deterministic_for_fixed_seed() {
        let prefs = prefs(Some(AgeGroup::Child), Some(Gender::Girl));

        let mut first = Suggester::new();
        first.set_previous("f1");
        let mut rng = StdRng::seed_from_u64(42);
        let a = first.suggest(&mut rng, FIXTURE, &prefs, false);

        let mut second = Suggester::new();
        second.set_previous("f1");
        let mut rng = StdRng::seed_from_u64(42);
        let b = second.suggest(&mut rng, FIXTURE, &prefs, false);

        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_suggester_avoids_previous_across_calls() {
        let prefs = prefs(Some(AgeGroup::Child), Some(Gender::Girl));
        let mut suggester = Suggester::new();
        let mut rng = StdRng::seed_from_u64(0);

        let mut last = suggester.suggest(&mut rng, FIXTURE, &prefs, false).id;
        for _ in 0..200 {
            let next = suggester.suggest(&mut rng, FIXTURE, &prefs, false).id;
            assert_ne!(next, last);
            last = next;
        }
    }

    #[test]
    fn test_child_girl_candidates_include_c4() {
        let prefs = prefs(Some(AgeGroup::Child), Some(Gender::Girl));
        let result = filter_activities(ACTIVITIES, &prefs, false);

        assert!(result.iter().any(|a| a.id == "c4"));
        for activity in &result {
            assert!(activity.suitable_ages.contains(&AgeGroup::Child));
        }
    }

    #[test]
    fn test_gender_tag_both_matches_everyone() {
        assert!(GenderTag::Both.matches(Gender::Boy));
        assert!(GenderTag::Both.matches(Gender::Girl));
        assert!(GenderTag::Girl.matches(Gender::Girl));
        assert!(!GenderTag::Girl.matches(Gender::Boy));
    }

    #[test]
    fn test_preferences_serde_round_trip() {
        let prefs = Preferences {
            age_group: Some(AgeGroup::Child),
            gender: Some(Gender::Girl),
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains("CHILD"));
        assert!(json.contains("GIRL"));

        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
