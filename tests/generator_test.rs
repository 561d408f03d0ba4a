use metro_surffaajat::game::{
    coin_trails::{CoinTrailType, CoinTrails, MAX_SEGMENT_INDEX},
    level::Level,
    obstacles::{ObstacleType, Obstacles},
    track_segment::{CoinSegment, LANES, ObstacleSegment},
};
use rand::{SeedableRng, rngs::StdRng};

use crate::common::test_utils::{ConstantRandom, ScriptedRandom, setup};

mod common;

#[test]
fn obstacles_repeat_until_min_run_length() {
    setup();
    for obstacle in ObstacleType::ALL {
        for run_index in 0..Obstacles::min_repeat(obstacle) {
            for seed in 0..50 {
                let mut rng = StdRng::seed_from_u64(seed);
                assert_eq!(Obstacles::get_next(obstacle, run_index, &mut rng), obstacle);
            }
        }
    }
}

#[test]
fn obstacles_below_min_run_length_draw_nothing() {
    let mut rng = ScriptedRandom::new(&[], &[]);
    Obstacles::get_next(ObstacleType::Train, 0, &mut rng);
    assert_eq!(rng.unit_draws(), 0);
    assert_eq!(rng.index_draws(), 0);
}

#[test]
fn empty_lane_turns_into_train_after_three_rows() {
    let mut rng = ConstantRandom(0.9);
    for run_index in 0..3 {
        assert_eq!(
            Obstacles::get_next(ObstacleType::None, run_index, &mut rng),
            ObstacleType::None
        );
    }
    assert_eq!(
        Obstacles::get_next(ObstacleType::None, 3, &mut rng),
        ObstacleType::TrainStart
    );
}

#[test]
fn low_draw_continues_a_run() {
    let mut rng = ConstantRandom(0.1);
    assert_eq!(Obstacles::get_next(ObstacleType::None, 3, &mut rng), ObstacleType::None);
    assert_eq!(Obstacles::get_next(ObstacleType::Train, 2, &mut rng), ObstacleType::Train);
}

#[test]
fn invalid_obstacle_falls_back_to_empty_lane() {
    setup();
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        for run_index in [0, 10] {
            assert_eq!(
                Obstacles::get_next(ObstacleType::Invalid, run_index, &mut rng),
                ObstacleType::None
            );
        }
    }
    assert_eq!(Obstacles::min_repeat(ObstacleType::Invalid), 0);
}

#[test]
fn draw_equal_to_continue_chance_transitions() {
    let mut rng = ConstantRandom(Obstacles::continue_chance(ObstacleType::None));
    assert_eq!(
        Obstacles::get_next(ObstacleType::None, 3, &mut rng),
        ObstacleType::TrainStart
    );

    let mut rng = ConstantRandom(CoinTrails::continue_chance(CoinTrailType::Low));
    assert_ne!(
        CoinTrails::get_next(CoinTrailType::Low, MAX_SEGMENT_INDEX, 0, &mut rng),
        CoinTrailType::Low
    );
}

#[test]
fn obstacle_rows_play_out_a_whole_train() {
    let mut rng = ConstantRandom(0.9);
    let mut segment = ObstacleSegment::default();
    let mut lane_history = Vec::new();
    for _ in 0..9 {
        segment = segment.get_next(&mut rng);
        lane_history.push((segment[0], segment.run_index(0)));
    }
    assert_eq!(
        lane_history,
        vec![
            (ObstacleType::None, Some(1)),
            (ObstacleType::None, Some(2)),
            (ObstacleType::None, Some(3)),
            (ObstacleType::TrainStart, Some(0)),
            (ObstacleType::Train, Some(0)),
            (ObstacleType::Train, Some(1)),
            (ObstacleType::Train, Some(2)),
            (ObstacleType::TrainEnd, Some(0)),
            (ObstacleType::None, Some(0)),
        ]
    );
    assert!(segment.obstacles().iter().all(|o| *o == ObstacleType::None));
}

#[test]
fn coins_without_continue_chance_always_change_at_last_row() {
    let never_repeating = CoinTrailType::ALL
        .into_iter()
        .filter(|trail| CoinTrails::continue_chance(*trail) == 0.0)
        .collect::<Vec<_>>();
    assert_eq!(never_repeating.len(), 5);

    for trail in never_repeating {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            for count in 0..=LANES {
                assert_ne!(
                    CoinTrails::get_next(trail, MAX_SEGMENT_INDEX, count, &mut rng),
                    trail,
                    "{trail:?} repeated with seed {seed} and count {count}"
                );
            }
        }
    }
}

#[test]
fn coins_hold_their_shape_until_last_row() {
    let mut rng = ScriptedRandom::new(&[], &[]);
    for segment_index in 0..MAX_SEGMENT_INDEX {
        for trail in CoinTrailType::ALL {
            assert_eq!(CoinTrails::get_next(trail, segment_index, 2, &mut rng), trail);
        }
    }
    assert_eq!(rng.unit_draws(), 0);
}

#[test]
fn occupied_row_suppresses_new_trail_unless_draw_is_zero() {
    let mut suppressed = ScriptedRandom::new(&[0.99], &[1]);
    assert_eq!(
        CoinTrails::get_next(CoinTrailType::None, MAX_SEGMENT_INDEX, 2, &mut suppressed),
        CoinTrailType::None
    );

    let mut allowed = ScriptedRandom::new(&[0.99], &[0, 1]);
    assert_eq!(
        CoinTrails::get_next(CoinTrailType::None, MAX_SEGMENT_INDEX, 2, &mut allowed),
        CoinTrailType::High
    );
    assert_eq!(allowed.index_draws(), 2);
}

#[test]
fn empty_row_never_suppresses() {
    let mut rng = ScriptedRandom::new(&[0.99], &[0]);
    assert_eq!(
        CoinTrails::get_next(CoinTrailType::None, MAX_SEGMENT_INDEX, 0, &mut rng),
        CoinTrailType::Low
    );
    assert_eq!(rng.index_draws(), 1);
}

#[test]
fn placement_matches_table() {
    setup();
    let surfaces = [
        ObstacleType::None,
        ObstacleType::TrainStart,
        ObstacleType::Train,
        ObstacleType::TrainEnd,
        ObstacleType::Invalid,
    ];
    for trail in CoinTrailType::ALL {
        for obstacle in surfaces {
            assert_eq!(
                CoinTrails::is_valid_placement(trail, obstacle),
                CoinTrails::valid_on(trail).contains(&obstacle)
            );
        }
    }
    for obstacle in surfaces {
        assert!(!CoinTrails::is_valid_placement(CoinTrailType::Invalid, obstacle));
    }

    assert!(CoinTrails::is_valid_placement(CoinTrailType::Low, ObstacleType::None));
    assert!(!CoinTrails::is_valid_placement(CoinTrailType::Low, ObstacleType::Train));
    assert!(CoinTrails::is_valid_placement(CoinTrailType::High, ObstacleType::Train));
    assert!(!CoinTrails::is_valid_placement(CoinTrailType::High, ObstacleType::None));
    assert!(CoinTrails::is_valid_placement(CoinTrailType::Up, ObstacleType::TrainEnd));
    assert!(!CoinTrails::is_valid_placement(CoinTrailType::Up, ObstacleType::Train));
}

#[test]
fn strafes_off_the_track_collapse() {
    let obstacles = ObstacleSegment::default();
    // two rows of None, then every lane starts a low trail
    let mut rng = ScriptedRandom::new(&[0.9, 0.9, 0.9, 0.9, 0.9, 0.9], &[0, 0, 0, 0, 1, 0, 1, 0, 2]);

    let mut coins = CoinSegment::default();
    for _ in 0..=MAX_SEGMENT_INDEX {
        coins = coins.get_next(&obstacles, &mut rng);
    }
    assert_eq!(coins.coins(), &[CoinTrailType::Low; LANES]);
    assert_eq!(coins.segment_index(), 0);

    for _ in 0..=MAX_SEGMENT_INDEX {
        coins = coins.get_next(&obstacles, &mut rng);
    }
    // lane 0 rolled Left and lane 2 rolled Right; neither has a lane to move into
    assert_eq!(
        coins.coins(),
        &[CoinTrailType::None, CoinTrailType::Left, CoinTrailType::None]
    );
    assert_eq!(coins.count(), 1);
}

#[test]
fn generated_coins_always_sit_on_valid_surfaces() {
    setup();
    for seed in 0..20 {
        let level = Level::with_seed(200, seed);
        for segment in level.segments() {
            for lane in 0..LANES {
                let coin = segment.coins[lane];
                if coin == CoinTrailType::None {
                    continue;
                }
                assert!(CoinTrails::is_valid_placement(coin, segment.obstacles[lane]));
                match coin {
                    CoinTrailType::Left => {
                        assert!(lane > 0);
                        assert!(CoinTrails::is_valid_placement(coin, segment.obstacles[lane - 1]));
                    }
                    CoinTrailType::Right => {
                        assert!(lane + 1 < LANES);
                        assert!(CoinTrails::is_valid_placement(coin, segment.obstacles[lane + 1]));
                    }
                    _ => {}
                }
            }
        }
    }
}
