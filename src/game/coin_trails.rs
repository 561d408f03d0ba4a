//! Coin trail adjacency table, placement rules and trail geometry.
//!
//! A trail is drawn over `MAX_SEGMENT_INDEX + 1` consecutive rows. Its type can
//! only change once the trail reaches its last row, so every shape (a ramp, a
//! strafe, an arc over a train) is laid out completely before the next one starts.

use cgmath::Vector3;

use crate::{
    data_structures::bounding::BoundingCuboid,
    game::{
        obstacles::ObstacleType,
        random::{RandomSource, choose},
    },
    resources::model::ModelType,
};

/// Last row index of a trail shape.
pub const MAX_SEGMENT_INDEX: u32 = 2;

/// Vertical and lateral step between the coins of one trail.
pub const COIN_GAP: f32 = 0.5 / 3.0;

pub const COIN_SIZE: f32 = 0.25;

pub const MODEL_TYPE: ModelType = ModelType::Coin;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CoinTrailType {
    #[default]
    None,
    Low,
    Left,
    Right,
    High,
    Up,
    Apex,
    Down,
    Invalid,
}

impl CoinTrailType {
    pub const ALL: [CoinTrailType; 8] = [
        CoinTrailType::None,
        CoinTrailType::Low,
        CoinTrailType::Left,
        CoinTrailType::Right,
        CoinTrailType::High,
        CoinTrailType::Up,
        CoinTrailType::Apex,
        CoinTrailType::Down,
    ];
}

const VALID_ON_ALL: &[ObstacleType] = &[
    ObstacleType::None,
    ObstacleType::TrainStart,
    ObstacleType::Train,
    ObstacleType::TrainEnd,
    ObstacleType::Invalid,
];
const VALID_ON_GROUND: &[ObstacleType] = &[ObstacleType::None];
const VALID_ON_TRAINS: &[ObstacleType] = &[ObstacleType::TrainStart, ObstacleType::Train, ObstacleType::TrainEnd];

struct CoinTrailEntry {
    continue_chance: f64,
    valid_on: &'static [ObstacleType],
    next: &'static [CoinTrailType],
}

static COIN_TRAILS: [CoinTrailEntry; 8] = [
    // None
    CoinTrailEntry {
        continue_chance: 0.75,
        valid_on: VALID_ON_ALL,
        next: &[CoinTrailType::Low, CoinTrailType::High],
    },
    // Low
    CoinTrailEntry {
        continue_chance: 0.5,
        valid_on: VALID_ON_GROUND,
        next: &[CoinTrailType::None, CoinTrailType::Left, CoinTrailType::Right],
    },
    // Left
    CoinTrailEntry {
        continue_chance: 0.0,
        valid_on: VALID_ON_GROUND,
        next: &[CoinTrailType::None],
    },
    // Right
    CoinTrailEntry {
        continue_chance: 0.0,
        valid_on: VALID_ON_GROUND,
        next: &[CoinTrailType::None],
    },
    // High
    CoinTrailEntry {
        continue_chance: 0.75,
        valid_on: VALID_ON_TRAINS,
        next: &[CoinTrailType::None, CoinTrailType::Up],
    },
    // Up
    CoinTrailEntry {
        continue_chance: 0.0,
        valid_on: &[ObstacleType::TrainEnd],
        next: &[CoinTrailType::Apex],
    },
    // Apex
    CoinTrailEntry {
        continue_chance: 0.0,
        valid_on: VALID_ON_ALL,
        next: &[CoinTrailType::Down],
    },
    // Down
    CoinTrailEntry {
        continue_chance: 0.0,
        valid_on: VALID_ON_ALL,
        next: &[CoinTrailType::High],
    },
];

fn entry(trail: CoinTrailType) -> Option<&'static CoinTrailEntry> {
    let entry = COIN_TRAILS.get(trail as usize);
    if entry.is_none() {
        log::warn!("no coin trail table entry for {:?}", trail);
    }
    entry
}

/// Lookups into the coin trail table.
pub struct CoinTrails;

impl CoinTrails {
    pub fn continue_chance(trail: CoinTrailType) -> f64 {
        entry(trail).map_or(0.0, |e| e.continue_chance)
    }

    pub fn valid_on(trail: CoinTrailType) -> &'static [ObstacleType] {
        entry(trail).map_or(&[], |e| e.valid_on)
    }

    pub fn successors(trail: CoinTrailType) -> &'static [CoinTrailType] {
        entry(trail).map_or(&[], |e| e.next)
    }

    /// Whether `trail` may be laid over a lane holding `obstacle`.
    pub fn is_valid_placement(trail: CoinTrailType, obstacle: ObstacleType) -> bool {
        Self::valid_on(trail).contains(&obstacle)
    }

    /**
     * One step of the chain for a trail at row `segment_index` of its shape.
     *
     * `count` is the number of lanes in the current row that already carry
     * coins. With `count > 0`, a transition is suppressed to `None` unless a
     * draw over `count` comes up zero, which keeps parallel trails rare.
     */
    pub fn get_next<R: RandomSource + ?Sized>(
        current: CoinTrailType,
        segment_index: u32,
        count: usize,
        rng: &mut R,
    ) -> CoinTrailType {
        let Some(e) = entry(current) else {
            return CoinTrailType::None;
        };
        if segment_index < MAX_SEGMENT_INDEX || rng.next_unit() < e.continue_chance {
            return current;
        }
        if count != 0 && rng.next_index(count) != 0 {
            return CoinTrailType::None;
        }
        choose(e.next, rng).copied().unwrap_or(CoinTrailType::None)
    }

    /// Coin centre relative to its lane at row `segment_index`, or `None` if
    /// the trail shows no coin.
    pub fn calculate_position(trail: CoinTrailType, segment_index: u32) -> Option<Vector3<f32>> {
        let i = segment_index as f32;
        let mut position = Vector3::new(0.0, -COIN_GAP, 0.0);
        match trail {
            CoinTrailType::None | CoinTrailType::Invalid => return None,
            CoinTrailType::Low => {}
            CoinTrailType::Left => position.x -= i * COIN_GAP,
            CoinTrailType::Right => position.x += i * COIN_GAP,
            CoinTrailType::High => position.y += 1.0,
            CoinTrailType::Up => position.y += 1.0 + i * COIN_GAP,
            CoinTrailType::Apex => {
                position.y += 2.0;
                if segment_index == 1 {
                    position.y += COIN_GAP;
                }
            }
            CoinTrailType::Down => {
                position.y += 1.0 + MAX_SEGMENT_INDEX.saturating_sub(segment_index) as f32 * COIN_GAP;
            }
        }
        Some(position)
    }

    pub fn aabb(trail: CoinTrailType, segment_index: u32) -> Option<BoundingCuboid> {
        Self::calculate_position(trail, segment_index)
            .map(|position| BoundingCuboid::new(Vector3::new(COIN_SIZE, COIN_SIZE, COIN_SIZE), position))
    }
}
