//! The frame loop: quit check, advance, composite, pace, present.

use anyhow::Result;

use crate::backend::{Present, QuitSignal, Ticker};
use crate::config::RollConfig;
use crate::core::{
    Bitmap, Compositor, Font, FrameReport, Layout, Markup, RollError, RollState, Scene,
    ScrollAnimator,
};
use crate::types::Rect;

/// How a roll ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollOutcome {
    /// Every fragment scrolled off the top.
    Completed { frames: u64 },
    /// A quit was requested first.
    Aborted { frames: u64 },
}

impl RollOutcome {
    pub fn frames(self) -> u64 {
        match self {
            RollOutcome::Completed { frames } | RollOutcome::Aborted { frames } => frames,
        }
    }
}

pub struct FrameLoop<F: Font> {
    font: F,
    animator: ScrollAnimator,
    compositor: Compositor,
    frames: u64,
}

impl<F: Font> FrameLoop<F> {
    /// Parse and lay out the scene text. Nothing is drawn yet.
    ///
    /// `background` should be the viewport's size in cells under `config.grid`.
    pub fn new(
        config: &RollConfig,
        scene: Scene,
        font: F,
        background: Bitmap,
        viewport: Rect,
    ) -> Result<Self, RollError> {
        config.validate()?;

        let markup = Markup::new(config.marker, config.emphasis);
        let layout = Layout::for_font(&font, viewport)?;
        let queue = layout.lay_out(&font, markup.parse(&scene.text))?;
        let animator = ScrollAnimator::new(queue, viewport, scene.color, config.step)?;
        let compositor = Compositor::new(config.grid, viewport, background, scene.layers);

        Ok(Self {
            font,
            animator,
            compositor,
            frames: 0,
        })
    }

    pub fn animator(&self) -> &ScrollAnimator {
        &self.animator
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Composite the next frame without presenting it.
    pub fn render_frame(&mut self) -> Result<FrameReport, RollError> {
        self.compositor.begin_frame();
        let compositor = &mut self.compositor;
        let report = self
            .animator
            .advance(&self.font, |bitmap, rect| compositor.draw(bitmap, rect.origin()))?;
        self.compositor.draw_layers(report.offset);
        self.frames += 1;

        tracing::trace!(
            frame = self.frames,
            offset = report.offset,
            drawn = report.drawn,
            remaining = self.animator.queue().len(),
            "frame"
        );
        Ok(report)
    }

    /// Run until the roll is done or a quit is observed.
    ///
    /// The last composited frame is always presented once more on exit.
    pub fn run<P, Q, T>(&mut self, presenter: &mut P, quit: &mut Q, ticker: &mut T) -> Result<RollOutcome>
    where
        P: Present,
        Q: QuitSignal,
        T: Ticker,
    {
        tracing::info!(
            fragments = self.animator.queue().len(),
            layers = self.compositor.layers().len(),
            "roll starting"
        );

        let outcome = loop {
            if self.animator.state() == RollState::Done {
                break RollOutcome::Completed {
                    frames: self.frames,
                };
            }
            if quit.poll_quit() {
                break RollOutcome::Aborted {
                    frames: self.frames,
                };
            }

            self.render_frame()?;
            ticker.tick();
            presenter.present(self.compositor.frame())?;
        };

        presenter.present(self.compositor.frame())?;
        tracing::info!(?outcome, offset = self.animator.offset(), "roll finished");
        Ok(outcome)
    }
}
