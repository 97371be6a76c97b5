use knap_algorithms::*;
use knap_challenges::{Challenge, Difficulty, Item, KnapsackError};

fn challenge() -> Challenge {
    Challenge::new(
        10,
        10,
        vec![
            Item::new(1, 5, 5, 10).unwrap(),
            Item::new(2, 4, 4, 9).unwrap(),
            Item::new(3, 3, 3, 8).unwrap(),
        ],
    )
}

#[test]
fn test_algorithm_names() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
    }
    assert!("simplex".parse::<Algorithm>().is_err());
    assert!(Algorithm::Dp.is_exact());
    assert!(!Algorithm::GreedyValuePerSize.is_exact());
}

#[test]
fn test_config_from_json() {
    let config: SolverConfig =
        serde_json::from_str(r#"{"algorithm": "greedy_value_per_size"}"#).unwrap();
    assert_eq!(config.algorithm, Algorithm::GreedyValuePerSize);
    assert_eq!(config.max_table_cells, dp::DEFAULT_MAX_TABLE_CELLS);

    let config: SolverConfig = serde_json::from_str(r#"{"max_table_cells": 64}"#).unwrap();
    assert_eq!(config.algorithm, Algorithm::Dp);
    assert_eq!(config.max_table_cells, 64);

    assert!(serde_json::from_str::<SolverConfig>(r#"{"algorithm": "nope"}"#).is_err());
}

#[test]
fn test_dispatch() {
    let challenge = challenge();
    let solve = |algorithm| {
        let config = SolverConfig {
            algorithm,
            ..SolverConfig::default()
        };
        solve_challenge(&challenge, &config).unwrap().items
    };
    assert_eq!(solve(Algorithm::Dp), vec![1, 2]);
    assert_eq!(solve(Algorithm::Exhaustive), vec![1, 2]);
    assert_eq!(solve(Algorithm::WeightOnly), vec![1, 2]);
    assert_eq!(solve(Algorithm::GreedyValuePerWeight), vec![3, 2]);
    assert_eq!(solve(Algorithm::GreedyValuePerSize), vec![3, 2]);
}

#[test]
fn test_exact_solutions_verify() {
    let difficulty = Difficulty {
        num_items: 18,
        budget: 40,
    };
    for seed in 0u8..4 {
        let challenge = Challenge::generate_instance(&[seed; 32], &difficulty).unwrap();
        let dp_value = challenge
            .verify_solution(&solve_challenge(&challenge, &SolverConfig::default()).unwrap())
            .unwrap()
            .total_value;
        for algorithm in Algorithm::ALL {
            // Weight-only ignores volume, so its selection may exceed the volume limit.
            if algorithm == Algorithm::WeightOnly {
                continue;
            }
            let config = SolverConfig {
                algorithm,
                ..SolverConfig::default()
            };
            let solution = solve_challenge(&challenge, &config).unwrap();
            let evaluation = challenge.verify_solution(&solution).unwrap();
            if algorithm.is_exact() {
                assert_eq!(evaluation.total_value, dp_value);
            } else {
                assert!(evaluation.total_value <= dp_value);
            }
        }
    }
}

#[test]
fn test_exhaustive_rejects_large_catalogs() {
    let items: Vec<Item> = (0..25).map(|i| Item::new(i, 1, 1, 1).unwrap()).collect();
    let config = SolverConfig {
        algorithm: Algorithm::Exhaustive,
        ..SolverConfig::default()
    };
    assert!(matches!(
        solve_challenge(&Challenge::new(5, 5, items), &config),
        Err(KnapsackError::InvalidInput(_))
    ));
}

#[test]
fn test_cell_limit_from_config() {
    let config = SolverConfig {
        algorithm: Algorithm::Dp,
        max_table_cells: 10,
    };
    assert!(matches!(
        solve_challenge(&challenge(), &config),
        Err(KnapsackError::AllocationError { .. })
    ));
}
