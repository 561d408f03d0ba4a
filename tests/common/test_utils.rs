use std::collections::VecDeque;

use metro_surffaajat::{
    data_structures::render_buffer::PolygonSlot, flow::init_logger, game::random::RandomSource,
};

/// Random source replaying fixed draws.
///
/// Unit draws come from `units`, index draws from `indices` (reduced modulo
/// `len`). Running out of either falls back to `0`, so a test only has to
/// script the draws it cares about.
pub(crate) struct ScriptedRandom {
    units: VecDeque<f64>,
    indices: VecDeque<usize>,
    unit_draws: usize,
    index_draws: usize,
}

impl ScriptedRandom {
    pub fn new(units: &[f64], indices: &[usize]) -> Self {
        Self {
            units: units.iter().copied().collect(),
            indices: indices.iter().copied().collect(),
            unit_draws: 0,
            index_draws: 0,
        }
    }

    pub fn unit_draws(&self) -> usize {
        self.unit_draws
    }

    pub fn index_draws(&self) -> usize {
        self.index_draws
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.unit_draws += 1;
        self.units.pop_front().unwrap_or(0.0)
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.index_draws += 1;
        self.indices.pop_front().unwrap_or(0) % len
    }
}

/// Every unit draw returns the wrapped value, every index draw returns `0`.
pub(crate) struct ConstantRandom(pub f64);

impl RandomSource for ConstantRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }

    fn next_index(&mut self, _: usize) -> usize {
        0
    }
}

pub(crate) fn slots(count: usize) -> Vec<PolygonSlot> {
    vec![PolygonSlot::default(); count]
}

pub(crate) fn setup() {
    init_logger();
}
