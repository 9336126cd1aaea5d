//! Scroll animator: one accumulator, one queue, two states.

use crate::bitmap::Bitmap;
use crate::error::RollError;
use crate::font::Font;
use crate::fragment::FragmentQueue;
use crate::types::{Rect, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollState {
    Running,
    /// Every fragment has left the top of the viewport. Terminal.
    Done,
}

/// What one [`ScrollAnimator::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub offset: i32,
    pub drawn: usize,
    pub culled: usize,
    pub state: RollState,
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    queue: FragmentQueue,
    viewport: Rect,
    color: Rgb,
    step: i32,
    offset: i32,
    state: RollState,
}

impl ScrollAnimator {
    /// `step` is the upward distance per tick and must be positive.
    pub fn new(queue: FragmentQueue, viewport: Rect, color: Rgb, step: i32) -> Result<Self, RollError> {
        if step <= 0 {
            return Err(RollError::InvalidStep(step));
        }
        let state = if queue.is_empty() {
            RollState::Done
        } else {
            RollState::Running
        };
        Ok(Self {
            queue,
            viewport,
            color,
            step,
            offset: 0,
            state,
        })
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn state(&self) -> RollState {
        self.state
    }

    pub fn queue(&self) -> &FragmentQueue {
        &self.queue
    }

    /// Upper bound on the ticks needed to reach [`RollState::Done`].
    pub fn max_ticks(&self) -> usize {
        let span = self.queue.max_bottom().unwrap_or(0).max(0) + self.viewport.height;
        (span / self.step) as usize + 1
    }

    /// Scroll one step, cull what left the top and submit what is visible.
    ///
    /// `submit` receives fragments in queue order with their on-screen rect.
    /// Does nothing once the roll is done.
    pub fn advance<F: Font>(
        &mut self,
        font: &F,
        mut submit: impl FnMut(&Bitmap, Rect),
    ) -> Result<FrameReport, RollError> {
        if self.state == RollState::Done {
            return Ok(self.report(0, 0));
        }

        self.offset -= self.step;
        let offset = self.offset;

        let mut culled = 0;
        while let Some(front) = self.queue.front() {
            if front.rect().translate(0, offset).bottom() >= 0 {
                break;
            }
            self.queue.pop_front();
            culled += 1;
        }
        if culled > 0 {
            tracing::debug!(culled, remaining = self.queue.len(), offset, "culled fragments");
        }

        let mut drawn = 0;
        let viewport_bottom = self.viewport.bottom();
        for frag in self.queue.iter_mut() {
            let rect = frag.rect().translate(0, offset);
            // Above the viewport but behind a taller front; culled later.
            if rect.bottom() < 0 {
                continue;
            }
            // Everything after this is further down.
            if rect.top() >= viewport_bottom {
                break;
            }
            submit(frag.bitmap(font, self.color)?, rect);
            drawn += 1;
        }

        if self.queue.is_empty() {
            self.state = RollState::Done;
        }
        Ok(self.report(drawn, culled))
    }

    fn report(&self, drawn: usize, culled: usize) -> FrameReport {
        FrameReport {
            offset: self.offset,
            drawn,
            culled,
            state: self.state,
        }
    }
}
