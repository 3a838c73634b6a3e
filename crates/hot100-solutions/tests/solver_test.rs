//! Solver: configuration-driven dispatch.

use std::sync::Mutex;

use hot100_core::config::{CliOverrides, Hot100Config};
use hot100_core::errors::GroupingError;
use hot100_core::types::{AnagramStrategy, TwoSumStrategy};
use hot100_solutions::Solver;

/// Serializes tests that touch HOME / HOT100_* variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_default_solver() {
    let solver = Solver::default();
    assert_eq!(solver.anagram_strategy(), AnagramStrategy::Sort);
    assert_eq!(solver.two_sum_strategy(), TwoSumStrategy::HashScan);
    assert_eq!(solver.group_anagrams(["Ab", "bA"]).unwrap().len(), 1);
}

#[test]
fn test_solver_from_config() {
    let config = Hot100Config::from_toml(
        "[anagram]\nstrategy = \"count\"\n\n[two_sum]\nstrategy = \"brute_force\"\n",
    )
    .unwrap();
    let solver = Solver::new(&config);

    assert_eq!(solver.anagram_strategy(), AnagramStrategy::Count);
    assert!(matches!(
        solver.group_anagrams(["ab", "Ab"]),
        Err(GroupingError::InvalidCharacter { index: 1, .. })
    ));
    assert_eq!(solver.two_sum(&[1, 2, 3, 4], 5), Some((0, 3)));
}

#[test]
fn test_solver_load_from_project_root() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::TempDir::new().unwrap();
    std::env::set_var("HOME", home.path());
    std::env::remove_var("USERPROFILE");
    std::env::remove_var("HOT100_ANAGRAM_STRATEGY");
    std::env::remove_var("HOT100_TWO_SUM_STRATEGY");

    let root = tempfile::TempDir::new().unwrap();
    std::fs::write(
        root.path().join("hot100.toml"),
        "[two_sum]\nstrategy = \"brute_force\"\n",
    )
    .unwrap();

    let solver = Solver::load(root.path(), None).unwrap();
    assert_eq!(solver.two_sum_strategy(), TwoSumStrategy::BruteForce);

    let cli = CliOverrides {
        two_sum_strategy: Some(TwoSumStrategy::HashScan),
        ..Default::default()
    };
    let solver = Solver::load(root.path(), Some(&cli)).unwrap();
    assert_eq!(solver.two_sum_strategy(), TwoSumStrategy::HashScan);
}

#[test]
fn test_solver_is_shareable_across_threads() {
    let solver = Solver::with_strategies(AnagramStrategy::Count, TwoSumStrategy::HashScan);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || solver.group_anagrams(["eat", "tea", "tan"]).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), vec![vec!["eat", "tea"], vec!["tan"]]);
    }
}
