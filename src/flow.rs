//! Frame driver and the host callback seam.
//!
//! A "flow" is one piece of game state that is updated and rendered every
//! frame. The host owns the loop. Each tick it measures elapsed time with a
//! [`FrameClock`] and hands it to [`run_frame`], which drives every flow through
//! the renderer's frame protocol.
//!
//! # User-facing types
//!
//! - [`GraphicsFlow<L, D>`] is the trait for updatable, renderable game state
//! - [`TrackFlow`] is the endless track itself
//!
//! # Lifecycle
//!
//! Each frame follows this pattern:
//! 1. `on_update` on every flow with the frame's `dt`
//! 2. `begin_render` with the context's camera
//! 3. `on_render` on every flow
//! 4. `end_render`, hiding every slot nobody drew into

use anyhow::Context as _;
use instant::{Duration, Instant};

use crate::{
    context::Context,
    data_structures::render_buffer::Drawable,
    game::level::Level,
    render::{Layer, RenderError, RenderLayer, Renderer},
};

pub trait GraphicsFlow<L: RenderLayer, D: Drawable> {
    /// Set up state that depends on the configuration.
    ///
    /// This is the only hook allowed to change the context, e.g. to move the
    /// camera to a start position.
    fn on_init(&mut self, ctx: &mut Context<L, D>);

    /// Called every frame with the elapsed time `dt`.
    fn on_update(&mut self, ctx: &Context<L, D>, dt: Duration);

    /// Submit this flow's models. A frame is always in progress here.
    fn on_render(&self, renderer: &mut Renderer<L, D>) -> Result<(), RenderError>;
}

/// Calls `on_init` on every flow.
pub fn init_flows<L: RenderLayer, D: Drawable>(
    ctx: &mut Context<L, D>,
    flows: &mut [Box<dyn GraphicsFlow<L, D>>],
) {
    for flow in flows.iter_mut() {
        flow.on_init(ctx);
    }
}

/**
 * Runs one complete frame.
 *
 * The frame is always closed again, even when a flow fails to render, so the
 * next call starts from a clean renderer. The first render error is returned.
 */
pub fn run_frame<L: RenderLayer, D: Drawable>(
    ctx: &mut Context<L, D>,
    flows: &mut [Box<dyn GraphicsFlow<L, D>>],
    dt: Duration,
) -> anyhow::Result<()> {
    for flow in flows.iter_mut() {
        flow.on_update(ctx, dt);
    }

    ctx.renderer
        .begin_render(ctx.camera.clone())
        .context("Unable to begin frame")?;

    let rendered = flows
        .iter()
        .enumerate()
        .try_for_each(|(i, flow)| {
            flow.on_render(&mut ctx.renderer)
                .with_context(|| format!("Flow {} failed to render", i))
        });

    ctx.renderer.end_render().context("Unable to end frame")?;
    rendered
}

/// The scrolling track on [`Layer::Default`].
pub struct TrackFlow {
    seed: Option<u64>,
    level: Option<Level>,
}

impl TrackFlow {
    pub fn new() -> Self {
        Self {
            seed: None,
            level: None,
        }
    }

    /// Track with reproducible generation.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            level: None,
        }
    }

    /// `None` until `on_init` ran.
    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }
}

impl Default for TrackFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Drawable> GraphicsFlow<Layer, D> for TrackFlow {
    fn on_init(&mut self, ctx: &mut Context<Layer, D>) {
        let size = ctx.config.level_size;
        let level = match self.seed {
            Some(seed) => Level::with_seed(size, seed),
            None => Level::new(size),
        };
        self.level = Some(level.with_accent(ctx.config.accent));
    }

    fn on_update(&mut self, ctx: &Context<Layer, D>, dt: Duration) {
        if let Some(level) = self.level.as_mut() {
            level.update(dt.as_secs_f32() * ctx.config.scroll_speed);
        }
    }

    fn on_render(&self, renderer: &mut Renderer<Layer, D>) -> Result<(), RenderError> {
        match &self.level {
            Some(level) => level.render(renderer, Layer::Default),
            None => {
                log::warn!("you attempted to render a TrackFlow before on_init");
                Ok(())
            }
        }
    }
}

/// Measures wall time between frames.
pub struct FrameClock {
    last_time: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_time: Instant::now(),
        }
    }

    /// Time since the previous tick (or since construction).
    pub fn tick(&mut self) -> Duration {
        let dt = self.last_time.elapsed();
        self.last_time = Instant::now();
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Installs `env_logger`. Safe to call more than once.
pub fn init_logger() {
    if let Err(e) = env_logger::try_init() {
        log::debug!("logger already initialised: {}", e);
    }
}
