//! Obstacle adjacency table and its Markov step.
//!
//! Every lane runs an independent chain. A run of one obstacle type lasts at
//! least `min_repeat` rows, then repeats with `continue_chance` per row before
//! moving to one of its successors.

use cgmath::Vector3;

use crate::{
    data_structures::bounding::BoundingCuboid,
    game::random::{RandomSource, choose},
    resources::model::ModelType,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ObstacleType {
    #[default]
    None,
    TrainStart,
    Train,
    TrainEnd,
    Invalid,
}

impl ObstacleType {
    pub const ALL: [ObstacleType; 4] = [
        ObstacleType::None,
        ObstacleType::TrainStart,
        ObstacleType::Train,
        ObstacleType::TrainEnd,
    ];
}

struct ObstacleEntry {
    model: ModelType,
    size: f32,
    min_repeat: u32,
    continue_chance: f64,
    next: &'static [ObstacleType],
}

static OBSTACLES: [ObstacleEntry; 4] = [
    ObstacleEntry {
        model: ModelType::Invalid,
        size: 0.0,
        min_repeat: 3,
        continue_chance: 0.75,
        next: &[ObstacleType::TrainStart],
    },
    ObstacleEntry {
        model: ModelType::TrainFront,
        size: 1.0,
        min_repeat: 0,
        continue_chance: 0.0,
        next: &[ObstacleType::Train],
    },
    ObstacleEntry {
        model: ModelType::TrainCar,
        size: 1.0,
        min_repeat: 2,
        continue_chance: 0.75,
        next: &[ObstacleType::TrainEnd],
    },
    ObstacleEntry {
        model: ModelType::TrainRear,
        size: 1.0,
        min_repeat: 0,
        continue_chance: 0.0,
        next: &[ObstacleType::None],
    },
];

fn entry(obstacle: ObstacleType) -> Option<&'static ObstacleEntry> {
    let entry = OBSTACLES.get(obstacle as usize);
    if entry.is_none() {
        log::warn!("no obstacle table entry for {:?}", obstacle);
    }
    entry
}

/// Lookups into the obstacle table.
pub struct Obstacles;

impl Obstacles {
    pub fn model_type(obstacle: ObstacleType) -> ModelType {
        entry(obstacle).map_or(ModelType::Invalid, |e| e.model)
    }

    /// Axis-aligned bounds of the obstacle around `position`.
    pub fn bounds(obstacle: ObstacleType, position: Vector3<f32>) -> BoundingCuboid {
        match entry(obstacle) {
            Some(e) if e.size > 0.0 => BoundingCuboid::new(Vector3::new(e.size, e.size, e.size), position),
            _ => BoundingCuboid::empty(),
        }
    }

    pub fn min_repeat(obstacle: ObstacleType) -> u32 {
        entry(obstacle).map_or(0, |e| e.min_repeat)
    }

    pub fn continue_chance(obstacle: ObstacleType) -> f64 {
        entry(obstacle).map_or(0.0, |e| e.continue_chance)
    }

    pub fn successors(obstacle: ObstacleType) -> &'static [ObstacleType] {
        entry(obstacle).map_or(&[], |e| e.next)
    }

    /**
     * One step of the chain for a lane that has shown `current` for
     * `run_index` rows.
     *
     * Below the minimum run length the type repeats without consuming a draw.
     * An invalid type falls back to an empty lane.
     */
    pub fn get_next<R: RandomSource + ?Sized>(current: ObstacleType, run_index: u32, rng: &mut R) -> ObstacleType {
        let Some(e) = entry(current) else {
            return ObstacleType::None;
        };
        if run_index < e.min_repeat || rng.next_unit() < e.continue_chance {
            return current;
        }
        choose(e.next, rng).copied().unwrap_or(ObstacleType::Invalid)
    }
}
