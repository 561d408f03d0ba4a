//! Scrolling window over generated track.
//!
//! A [`Level`] keeps exactly `size` track segments. Segments sit one unit apart
//! along -z. As time passes the whole window slides toward the camera, and each
//! time it has moved a full unit a fresh segment is generated at the far end
//! while the nearest one drops out.

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    data_structures::{
        circular_buffer::CircularBuffer, color::Color, render_buffer::Drawable,
    },
    game::{random::RandomSource, track_segment::TrackSegment},
    render::{RenderError, RenderLayer, Renderer},
};

pub const DEFAULT_LEVEL_SIZE: usize = 10;

pub struct Level<R: RandomSource = StdRng> {
    size: usize,
    tracks: CircularBuffer<TrackSegment>,
    // scroll progress towards the next segment, in [0, 1)
    offset: f32,
    accent: Color,
    rng: R,
}

impl Level<StdRng> {
    /// Level seeded from OS entropy.
    pub fn new(size: usize) -> Self {
        Self::with_rng(size, StdRng::from_entropy())
    }

    /// Reproducible level: equal seeds generate equal tracks.
    pub fn with_seed(size: usize, seed: u64) -> Self {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> Level<R> {
    pub fn with_rng(size: usize, mut rng: R) -> Self {
        let mut tracks = CircularBuffer::new(size);
        if size > 0 {
            tracks.add(TrackSegment::default());
        }
        while tracks.len() < size {
            let Some(next) = tracks.back().map(|back| back.get_next(&mut rng)) else {
                break;
            };
            tracks.add(next);
        }
        log::debug!("generated level with {} segments", tracks.len());

        Self {
            size,
            tracks,
            offset: 0.0,
            accent: Color::SKY_BLUE,
            rng,
        }
    }

    /// Colour the far end of the track fades to.
    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Segments from nearest (oldest) to farthest (newest).
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &TrackSegment> + ExactSizeIterator + '_ {
        self.tracks.iter()
    }

    /// Advances the scroll by `dt` segments. At most one segment is appended
    /// per call.
    pub fn update(&mut self, dt: f32) {
        self.offset += dt;
        if self.offset < 1.0 {
            return;
        }
        self.offset -= 1.0;

        if let Some(next) = self.tracks.back().map(|back| back.get_next(&mut self.rng)) {
            log::trace!("appending segment {:?}", next);
            self.tracks.add(next);
        }
    }

    /// Tint for a segment at depth `z`: white at `z == 0`, the accent colour at
    /// the far end of the window.
    pub fn tint_at(&self, z: f32) -> Color {
        let far = 1.0 - self.size as f32;
        let depth = if far < 0.0 { z / far } else { 0.0 };
        Color::lerp(Color::WHITE, self.accent, depth)
    }

    /// Submits every segment's models, farthest segment first.
    pub fn render<L: RenderLayer, D: Drawable>(
        &self,
        renderer: &mut Renderer<L, D>,
        layer: L,
    ) -> Result<(), RenderError> {
        let mut z = -(self.size as f32) + self.offset;

        for segment in self.tracks.iter().rev() {
            z += 1.0;
            let tint = self.tint_at(z);

            for mut model in segment.models() {
                model.position.z = z;
                model.tint = tint;
                renderer.submit(&model, layer)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_seeds_generate_equal_tracks() {
        let a = Level::with_seed(20, 42);
        let b = Level::with_seed(20, 42);
        assert!(a.segments().eq(b.segments()));
    }

    #[test]
    fn first_segment_is_empty() {
        let level = Level::with_seed(5, 3);
        assert_eq!(level.segments().next(), Some(&TrackSegment::default()));
    }

    #[test]
    fn zero_sized_level_stays_empty() {
        let mut level = Level::with_seed(0, 3);
        level.update(2.0);
        assert!(level.is_empty());
    }
}
