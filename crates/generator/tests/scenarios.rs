use prop_lineup_core::{Lean, PropCandidate, Tag};
use prop_lineup_generator::{
    filter_pool, generate, generate_batch, GeneratorConfig, Lineup, MixPreference, PoolFilter,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

// ============================================================
// Test Helpers
// ============================================================

fn prop(player: &str, team: &str, opponent: &str, tag: Tag) -> PropCandidate {
    PropCandidate::new(player, team, opponent, tag).with_sport("nba")
}

fn assert_valid(lineup: &Lineup, lineup_size: usize) {
    assert_eq!(lineup.len(), lineup_size, "wrong size: {lineup:?}");
    assert_eq!(lineup.players().len(), lineup_size, "duplicate player: {lineup:?}");
    assert!(lineup.teams().len() >= 2, "single team: {lineup:?}");
}

/// 24 candidates over four teams, with a few players listed for two props.
fn mixed_pool() -> Vec<PropCandidate> {
    let teams = [("LAL", "BOS"), ("BOS", "LAL"), ("DEN", "MIA"), ("MIA", "DEN")];
    let tags = [Tag::Smash, Tag::MegaSmash, Tag::FadeUnder, Tag::Fade, Tag::MegaFade, Tag::Good];
    (0..24)
        .map(|i| {
            let (team, opp) = teams[i % teams.len()];
            // Players 0-3 repeat as 20-23 to exercise the duplicate-player rule.
            let player = format!("Player {}", if i >= 20 { i - 20 } else { i });
            prop(&player, team, opp, tags[i % tags.len()].clone())
        })
        .collect()
}

// ============================================================
// Scenarios
// ============================================================

#[test]
fn scenario_a_all_overs_more_overs_fills_one_lineup() {
    let pool: Vec<PropCandidate> = (0..6)
        .map(|i| {
            let (team, opp) = if i < 3 { ("LAL", "BOS") } else { ("BOS", "LAL") };
            prop(&format!("P{i}"), team, opp, Tag::Smash)
        })
        .collect();
    let config = GeneratorConfig::new(4, 1, MixPreference::MoreOvers);

    let lineups = generate(&pool, &config, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();

    assert_eq!(lineups.len(), 1);
    assert_valid(&lineups[0], 4);
    assert_eq!(lineups[0].teams().len(), 2);
}

#[test]
fn scenario_b_single_team_pool_yields_nothing() {
    let pool = vec![
        prop("A", "LAL", "BOS", Tag::Smash),
        prop("B", "LAL", "BOS", Tag::FadeUnder),
        prop("C", "LAL", "BOS", Tag::MegaSmash),
    ];
    let config = GeneratorConfig::new(2, 5, MixPreference::Any);

    let lineups = generate(&pool, &config, &mut ChaCha8Rng::seed_from_u64(2)).unwrap();

    assert!(lineups.is_empty());
}

#[test]
fn scenario_c_even_mix_splits_three_and_three() {
    let mut pool = Vec::new();
    for i in 0..5 {
        let (team, opp) = if i % 2 == 0 { ("LAL", "BOS") } else { ("BOS", "LAL") };
        pool.push(prop(&format!("Over {i}"), team, opp, Tag::Smash));
        pool.push(prop(&format!("Under {i}"), opp, team, Tag::FadeUnder));
    }
    let config = GeneratorConfig::new(6, 25, MixPreference::Even);

    let lineups = generate(&pool, &config, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();

    assert!(!lineups.is_empty());
    for lineup in &lineups {
        assert_valid(lineup, 6);
        assert_eq!(lineup.count(Lean::Over), 3);
        assert_eq!(lineup.count(Lean::Under), 3);
    }
}

#[test]
fn skewed_mixes_take_seventy_percent_from_the_favored_side() {
    let mut pool = Vec::new();
    for i in 0..8 {
        let (team, opp) = if i % 2 == 0 { ("LAL", "BOS") } else { ("BOS", "LAL") };
        pool.push(prop(&format!("Over {i}"), team, opp, Tag::Smash));
        pool.push(prop(&format!("Under {i}"), opp, team, Tag::Fade));
    }

    for (mix, overs, unders) in [(MixPreference::MoreOvers, 5, 1), (MixPreference::MoreUnders, 1, 5)] {
        let config = GeneratorConfig::new(6, 20, mix);
        let lineups = generate(&pool, &config, &mut ChaCha8Rng::seed_from_u64(13)).unwrap();

        assert!(!lineups.is_empty(), "{mix}");
        for lineup in &lineups {
            assert_valid(lineup, 6);
            assert_eq!(lineup.count(Lean::Over), overs, "{mix}: {lineup:?}");
            assert_eq!(lineup.count(Lean::Under), unders, "{mix}: {lineup:?}");
        }
    }
}

#[test]
fn oversized_batch_request_on_thin_pool_comes_back_empty() {
    let pool = vec![prop("A", "LAL", "BOS", Tag::Smash)];
    let config = GeneratorConfig::new(2, usize::MAX / 8, MixPreference::Any);

    let batch = generate_batch(&pool, &config, &mut ChaCha8Rng::seed_from_u64(14)).unwrap();

    assert!(batch.lineups.is_empty());
    assert_eq!(batch.stats.requested, usize::MAX / 8);
    assert_eq!(batch.stats.attempts, 0);
}

#[test]
fn scenario_d_nan_matchup_is_never_eligible() {
    let pool = vec![
        prop("Ghost", "TBD", "LAL", Tag::Smash).with_matchup("TBD vs NaN"),
        prop("A", "LAL", "BOS", Tag::Smash),
    ];
    let filters = [
        PoolFilter::default(),
        PoolFilter {
            game: Some("TBD".to_string()),
            ..PoolFilter::default()
        },
        PoolFilter {
            tags: HashSet::from([Tag::Smash]),
            sport: Some("nba".to_string()),
            ..PoolFilter::default()
        },
    ];

    for filter in &filters {
        let filtered = filter_pool(&pool, filter);
        assert!(filtered.iter().all(|c| c.player() != Some("Ghost")), "{filter:?}");
    }
}

#[test]
fn scenario_e_zero_max_lineups_is_empty_not_error() {
    let config = GeneratorConfig::new(4, 0, MixPreference::Even);

    let batch = generate_batch(&mixed_pool(), &config, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();

    assert!(batch.lineups.is_empty());
    assert_eq!(batch.stats.attempts, 0);
}

// ============================================================
// Properties
// ============================================================

#[test]
fn every_lineup_satisfies_invariants_for_all_mixes() {
    let pool = mixed_pool();
    let mixes = [
        MixPreference::Any,
        MixPreference::Even,
        MixPreference::MoreOvers,
        MixPreference::MoreUnders,
        MixPreference::Fixed { overs: 2, unders: 3 },
    ];

    for (seed, mix) in mixes.into_iter().enumerate() {
        for lineup_size in 2..=5 {
            let mut config = GeneratorConfig::new(lineup_size, 30, mix);
            if let MixPreference::Fixed { .. } = mix {
                config.preference = MixPreference::Fixed {
                    overs: lineup_size / 2,
                    unders: lineup_size - lineup_size / 2,
                };
            }
            let mut rng = ChaCha8Rng::seed_from_u64(seed as u64 * 100 + lineup_size as u64);
            let lineups = generate(&pool, &config, &mut rng).unwrap();

            assert!(lineups.len() <= 30);
            for lineup in &lineups {
                assert_valid(lineup, lineup_size);
                assert!(lineup.legs().iter().all(|c| c.lean() != Lean::Excluded));
            }
        }
    }
}

#[test]
fn neutral_tags_never_enter_lineups() {
    let pool = vec![
        prop("A", "LAL", "BOS", Tag::Good),
        prop("B", "BOS", "LAL", Tag::Lean),
        prop("C", "LAL", "BOS", Tag::NoProp),
        prop("D", "BOS", "LAL", Tag::Unsupported),
    ];
    let config = GeneratorConfig::new(2, 10, MixPreference::Any);

    let lineups = generate(&pool, &config, &mut ChaCha8Rng::seed_from_u64(6)).unwrap();

    assert!(lineups.is_empty());
}

#[test]
fn short_supply_is_rejected_not_padded() {
    // Even over 4 legs needs two unders; only one exists.
    let pool = vec![
        prop("A", "LAL", "BOS", Tag::Smash),
        prop("B", "BOS", "LAL", Tag::Smash),
        prop("C", "LAL", "BOS", Tag::MegaSmash),
        prop("D", "BOS", "LAL", Tag::FadeUnder),
    ];
    let config = GeneratorConfig::new(4, 3, MixPreference::Even);

    let batch = generate_batch(&pool, &config, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();

    assert!(batch.lineups.is_empty());
    assert_eq!(batch.stats.skipped, 3);
}

#[test]
fn pools_with_one_team_stay_empty_for_any_batch_size() {
    let pool: Vec<PropCandidate> = (0..10)
        .map(|i| prop(&format!("P{i}"), "DEN", "MIA", if i % 2 == 0 { Tag::Smash } else { Tag::Fade }))
        .collect();

    for max_lineups in [1, 7, 40] {
        for mix in [MixPreference::Any, MixPreference::Even, MixPreference::MoreUnders] {
            let config = GeneratorConfig::new(3, max_lineups, mix);
            let lineups = generate(&pool, &config, &mut ChaCha8Rng::seed_from_u64(8)).unwrap();
            assert!(lineups.is_empty());
        }
    }
}

#[test]
fn caller_pool_is_left_untouched() {
    let pool = mixed_pool();
    let before = pool.clone();
    let config = GeneratorConfig::new(4, 10, MixPreference::Any);

    let _ = generate(&pool, &config, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();

    assert_eq!(pool, before);
}

#[test]
fn same_seed_same_batch() {
    let pool = mixed_pool();
    let config = GeneratorConfig::new(5, 15, MixPreference::MoreOvers);

    let a = generate(&pool, &config, &mut ChaCha8Rng::seed_from_u64(10)).unwrap();
    let b = generate(&pool, &config, &mut ChaCha8Rng::seed_from_u64(10)).unwrap();

    assert_eq!(a, b);
}

#[test]
fn filters_apply_before_partitioning() {
    let pool = vec![
        prop("A", "LAL", "BOS", Tag::Smash).with_home_away("home"),
        prop("B", "BOS", "LAL", Tag::Smash).with_home_away("away"),
        prop("C", "DEN", "MIA", Tag::FadeUnder).with_home_away("home"),
        prop("D", "MIA", "DEN", Tag::FadeUnder).with_home_away("away"),
    ];
    let filter = PoolFilter {
        game: Some("bos vs lal".to_string()),
        ..PoolFilter::default()
    };
    let config = GeneratorConfig::new(2, 5, MixPreference::Any).with_filter(filter);

    let lineups = generate(&pool, &config, &mut ChaCha8Rng::seed_from_u64(11)).unwrap();

    assert_eq!(lineups.len(), 5);
    for lineup in &lineups {
        let players: Vec<&str> = lineup.players().into_iter().collect();
        assert_eq!(players, vec!["A", "B"]);
    }
}

#[test]
fn lineups_may_repeat_across_slots_unless_distinct() {
    let pool = vec![
        prop("A", "LAL", "BOS", Tag::Smash),
        prop("B", "BOS", "LAL", Tag::Smash),
        prop("C", "LAL", "BOS", Tag::Smash),
    ];

    let loose = GeneratorConfig::new(2, 6, MixPreference::Any);
    let lineups = generate(&pool, &loose, &mut ChaCha8Rng::seed_from_u64(12)).unwrap();
    assert_eq!(lineups.len(), 6);

    // Only {A,B} and {B,C} span two teams.
    let strict = loose.with_distinct_lineups(true);
    let lineups = generate(&pool, &strict, &mut ChaCha8Rng::seed_from_u64(12)).unwrap();
    assert_eq!(lineups.len(), 2);
    let sets: HashSet<Vec<&str>> = lineups
        .iter()
        .map(|l| l.players().into_iter().collect())
        .collect();
    assert_eq!(sets.len(), 2);
}
