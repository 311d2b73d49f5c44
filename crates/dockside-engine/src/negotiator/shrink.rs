use dockside_common::{Edge, Rect};
use serde::{Deserialize, Serialize};

use super::containing_screen;

/// Signed width change applied to one edge of the tracked window.
///
/// Positive values move the leading edge toward the trailing side, negative
/// values move the trailing edge toward the leading side. Either way the
/// window loses `amount()` of width. Zero means no adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShrinkAdjustment(f64);

impl ShrinkAdjustment {
    pub const NONE: Self = Self(0.0);

    pub fn leading(amount: f64) -> Self {
        Self(amount.max(0.0))
    }

    pub fn trailing(amount: f64) -> Self {
        Self(-amount.max(0.0))
    }

    pub fn signed(self) -> f64 {
        self.0
    }

    pub fn amount(self) -> f64 {
        self.0.abs()
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Edge the adjustment is applied to, `None` when zero.
    pub fn edge(self) -> Option<Edge> {
        if self.0 > 0.0 {
            Some(Edge::Leading)
        } else if self.0 < 0.0 {
            Some(Edge::Trailing)
        } else {
            None
        }
    }

    /// Shrink `frame` by this adjustment.
    pub fn apply(self, frame: Rect) -> Rect {
        match self.edge() {
            Some(Edge::Leading) => Rect::new(
                frame.x + self.amount(),
                frame.y,
                frame.width - self.amount(),
                frame.height,
            ),
            Some(Edge::Trailing) => {
                Rect::new(frame.x, frame.y, frame.width - self.amount(), frame.height)
            }
            None => frame,
        }
    }

    /// Grow `frame` back by this adjustment, without any clamping.
    pub fn reverse(self, frame: Rect) -> Rect {
        match self.edge() {
            Some(Edge::Leading) => Rect::new(
                frame.x - self.amount(),
                frame.y,
                frame.width + self.amount(),
                frame.height,
            ),
            Some(Edge::Trailing) => {
                Rect::new(frame.x, frame.y, frame.width + self.amount(), frame.height)
            }
            None => frame,
        }
    }

    /// Frame to write back when the companion goes away.
    ///
    /// Reverses the adjustment on the window's *current* frame and clamps
    /// the result horizontally to the screen the window is on. Returns
    /// `None` when there is nothing to restore, when the window is on no
    /// screen, or when the clamped result would not grow the current frame;
    /// a restore never makes the window smaller.
    pub fn restore(self, current: Rect, screens: &[Rect]) -> Option<Rect> {
        if self.is_zero() {
            return None;
        }
        let screen = containing_screen(current, screens)?;
        let reversed = self.reverse(current);
        let min_x = reversed.min_x().max(screen.min_x());
        let max_x = reversed.max_x().min(screen.max_x());
        let restored = Rect::new(min_x, reversed.y, max_x - min_x, reversed.height);
        if restored == current || !restored.contains_rect(&current) {
            return None;
        }
        Some(restored)
    }
}
