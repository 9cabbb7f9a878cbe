//! Property-based tests for the registry
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::HashSet;

use ncc_quiz::core::{normalize_answer, score_attempt};
use proptest::prelude::*;

use crate::common::{memory_registry, strings};

proptest! {
    /// A registered institution can be found under its phone
    #[test]
    fn registered_institution_is_found(
        phone in "[0-9]{3,12}",
        name in "[A-Za-z ]{0,20}"
    ) {
        let registry = memory_registry();
        let created = registry.register_institution(&phone, &name).unwrap();
        prop_assert_eq!(registry.find_institution(&phone), Some(created));
    }

    /// Normalizing twice gives the same answer as normalizing once
    #[test]
    fn normalize_is_idempotent(answer in "[ \\tA-Za-z0-9éÉ]{0,30}") {
        let once = normalize_answer(&answer);
        prop_assert_eq!(normalize_answer(&once), once);
    }

    /// No open quiz shares a name with one the cadet attempted
    #[test]
    fn open_quizzes_exclude_attempted_names(
        names in prop::collection::vec("[a-c]{1,2}", 1..8),
        attempts in prop::collection::vec(any::<prop::sample::Index>(), 0..5)
    ) {
        let registry = memory_registry();
        registry.register_cadet("222", "Asha", "NCC").unwrap();
        for name in &names {
            registry.create_quiz("111", name, strings(&["q"]), strings(&["a"])).unwrap();
        }

        let mut attempted = HashSet::new();
        for index in &attempts {
            let name = index.get(&names);
            registry.submit_attempt("222", name, &["a"]).unwrap();
            attempted.insert(name.clone());
        }

        let open = registry.list_quizzes_excluding("222").unwrap();
        prop_assert!(open.iter().all(|q| !attempted.contains(&q.quiz_name)));
        let expected = names.iter().filter(|n| !attempted.contains(*n)).count();
        prop_assert_eq!(open.len(), expected);
    }

    /// The latest attempt's score replaces any earlier one
    #[test]
    fn reattempt_overwrites_score(
        expected in prop::collection::vec("[a-d]", 1..8),
        first in prop::collection::vec("[a-d]", 0..8),
        second in prop::collection::vec("[a-d]", 0..8)
    ) {
        let registry = memory_registry();
        registry.register_cadet("222", "Asha", "NCC").unwrap();
        let questions = vec!["q".to_string(); expected.len()];
        registry.create_quiz("111", "Q", questions, expected.clone()).unwrap();

        registry.submit_attempt("222", "Q", &first).unwrap();
        let score = registry.submit_attempt("222", "Q", &second).unwrap();

        prop_assert_eq!(score, score_attempt(&expected, &second));
        let cadet = registry.find_cadet("222").unwrap();
        prop_assert_eq!(cadet.scores.get("Q"), Some(&score));
        prop_assert_eq!(cadet.total(), u64::from(score));
    }

    /// Leaderboard totals never increase, and equal totals keep registration order
    #[test]
    fn leaderboard_sorted_with_stable_ties(
        correct in prop::collection::vec(0usize..=5, 0..12)
    ) {
        let registry = memory_registry();
        registry
            .create_quiz("111", "Q", vec!["q".to_string(); 5], vec!["a".to_string(); 5])
            .unwrap();
        for (i, n) in correct.iter().enumerate() {
            let phone = format!("{i}");
            registry.register_cadet(&phone, &format!("c{i:02}"), "NCC").unwrap();
            registry.submit_attempt(&phone, "Q", &vec!["a"; *n]).unwrap();
        }

        let board = registry.leaderboard();
        prop_assert_eq!(board.len(), correct.len());
        for pair in board.windows(2) {
            prop_assert!(pair[0].total >= pair[1].total);
            if pair[0].total == pair[1].total {
                prop_assert!(pair[0].name < pair[1].name);
            }
        }
    }
}
