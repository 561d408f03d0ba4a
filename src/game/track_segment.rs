//! One row of the track: three obstacle lanes with a coin trail laid over them.
//!
//! Segments are values. Advancing the track never mutates a segment; it builds
//! the following one from it with `get_next`.

use std::ops::Index;

use cgmath::Vector3;

use crate::{
    data_structures::model::Model,
    game::{
        coin_trails::{self, CoinTrailType, CoinTrails, MAX_SEGMENT_INDEX},
        obstacles::{ObstacleType, Obstacles},
        random::RandomSource,
    },
    resources::model::ModelType,
};

/// Number of lanes in a row.
pub const LANES: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObstacleSegment {
    obstacles: [ObstacleType; LANES],
    // rows each lane has shown its current type for
    run_indices: [u32; LANES],
}

impl ObstacleSegment {
    pub const LEN: usize = LANES;

    pub fn get(&self, index: usize) -> Option<ObstacleType> {
        self.obstacles.get(index).copied()
    }

    pub fn run_index(&self, index: usize) -> Option<u32> {
        self.run_indices.get(index).copied()
    }

    pub fn obstacles(&self) -> &[ObstacleType; LANES] {
        &self.obstacles
    }

    /// Steps every lane's chain once. A lane that keeps its type extends its
    /// run, a lane that changes starts a new run at zero.
    pub fn get_next<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self {
        let mut next = Self::default();
        for lane in 0..LANES {
            let current = self.obstacles[lane];
            let obstacle = Obstacles::get_next(current, self.run_indices[lane], rng);
            next.obstacles[lane] = obstacle;
            next.run_indices[lane] = if obstacle == current {
                self.run_indices[lane] + 1
            } else {
                0
            };
        }
        next
    }
}

impl Index<usize> for ObstacleSegment {
    type Output = ObstacleType;

    fn index(&self, index: usize) -> &Self::Output {
        match self.obstacles.get(index) {
            Some(obstacle) => obstacle,
            None => panic!(
                "index {} is not a valid index of ObstacleSegment with length {}",
                index,
                Self::LEN
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoinSegment {
    coins: [CoinTrailType; LANES],
    // shared by all lanes, in 0..=MAX_SEGMENT_INDEX
    segment_index: u32,
}

impl CoinSegment {
    pub const LEN: usize = LANES;

    pub fn get(&self, index: usize) -> Option<CoinTrailType> {
        self.coins.get(index).copied()
    }

    pub fn segment_index(&self) -> u32 {
        self.segment_index
    }

    pub fn coins(&self) -> &[CoinTrailType; LANES] {
        &self.coins
    }

    /// Lanes that currently carry coins.
    pub fn count(&self) -> usize {
        self.coins.iter().filter(|c| **c != CoinTrailType::None).count()
    }

    /**
     * Steps every lane's trail over the already generated `next_obstacles`.
     *
     * A trail that cannot sit on the obstacle in its lane collapses to `None`.
     * Strafes also need the lane they move into to be inside the track and to
     * accept them.
     */
    pub fn get_next<R: RandomSource + ?Sized>(&self, next_obstacles: &ObstacleSegment, rng: &mut R) -> Self {
        let count = self.count();
        let mut next = Self {
            coins: [CoinTrailType::None; LANES],
            segment_index: if self.segment_index != MAX_SEGMENT_INDEX {
                self.segment_index + 1
            } else {
                0
            },
        };

        for lane in 0..LANES {
            let trail = CoinTrails::get_next(self.coins[lane], self.segment_index, count, rng);
            let placeable = |lane: usize| CoinTrails::is_valid_placement(trail, next_obstacles[lane]);

            let valid = placeable(lane)
                && match trail {
                    CoinTrailType::Left => lane > 0 && placeable(lane - 1),
                    CoinTrailType::Right => lane + 1 < LANES && placeable(lane + 1),
                    _ => true,
                };
            next.coins[lane] = if valid { trail } else { CoinTrailType::None };
        }
        next
    }
}

impl Index<usize> for CoinSegment {
    type Output = CoinTrailType;

    fn index(&self, index: usize) -> &Self::Output {
        match self.coins.get(index) {
            Some(coin) => coin,
            None => panic!(
                "index {} is not a valid index of CoinSegment with length {}",
                index,
                Self::LEN
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackSegment {
    pub obstacles: ObstacleSegment,
    pub coins: CoinSegment,
}

impl TrackSegment {
    /// Generates obstacles first, then lays coins over them.
    pub fn get_next<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self {
        let obstacles = self.obstacles.get_next(rng);
        let coins = self.coins.get_next(&obstacles, rng);
        Self { obstacles, coins }
    }

    /// Lane order for drawing: outermost lanes first, the centre lane last.
    pub fn draw_order() -> impl Iterator<Item = usize> {
        (0..LANES).map(|i| if i % 2 == 0 { i / 2 } else { LANES - i / 2 - 1 })
    }

    /**
     * Models for this row at `z == 0`, in draw order.
     *
     * Each lane yields its obstacle (if any) followed by its coin (if any).
     * Lanes are spaced one unit apart, centred on `x == 0`.
     */
    pub fn models(&self) -> Vec<Model> {
        let mut models = Vec::with_capacity(LANES * 2);
        for lane in Self::draw_order() {
            let x = lane as f32 - (LANES / 2) as f32;

            let obstacle_model = Obstacles::model_type(self.obstacles[lane]);
            if obstacle_model != ModelType::Invalid {
                models.push(Model::at(obstacle_model, Vector3::new(x, 0.0, 0.0)));
            }

            if let Some(position) = CoinTrails::calculate_position(self.coins[lane], self.coins.segment_index) {
                models.push(Model::at(
                    coin_trails::MODEL_TYPE,
                    Vector3::new(position.x + x, position.y, position.z),
                ));
            }
        }
        models
    }
}
