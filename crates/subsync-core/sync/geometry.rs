//! Layout geometry consumed by the scroll computation
//!
//! The engine never measures anything itself. A rendering adapter reports
//! the scroll pane and block positions at evaluation time, in the same
//! coordinate space (usually viewport pixels).

use crate::align::BlockId;

/// Vertical extent of a laid-out element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top edge
    pub top: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Create a rect from its top edge and height
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Vertical center
    #[must_use]
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Source of element positions for scroll centering
pub trait LayoutGeometry {
    /// Scroll container bounds, or `None` if not laid out
    fn pane_rect(&self) -> Option<Rect>;

    /// Bounds of a rendered block, or `None` if it is not in the layout
    fn block_rect(&self, id: BlockId) -> Option<Rect>;
}

/// Geometry for headless use; never produces a scroll delta
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLayout;

impl LayoutGeometry for NoLayout {
    fn pane_rect(&self) -> Option<Rect> {
        None
    }

    fn block_rect(&self, _id: BlockId) -> Option<Rect> {
        None
    }
}

/// Fixed-height rows stacked inside a scrolling pane
///
/// Models a transcript list where every block renders at the same height.
/// Keeps its own scroll offset so applying a delta moves later rects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformLayout {
    /// Pane bounds
    pub pane: Rect,
    /// Height of every block row
    pub row_height: f64,
    /// Current scroll offset, never negative
    pub scroll_top: f64,
}

impl UniformLayout {
    /// Create an unscrolled layout
    #[must_use]
    pub const fn new(pane: Rect, row_height: f64) -> Self {
        Self {
            pane,
            row_height,
            scroll_top: 0.0,
        }
    }

    /// Apply a relative scroll, clamping at the top of the content
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_top = (self.scroll_top + delta).max(0.0);
    }
}

impl LayoutGeometry for UniformLayout {
    fn pane_rect(&self) -> Option<Rect> {
        Some(self.pane)
    }

    fn block_rect(&self, id: BlockId) -> Option<Rect> {
        let top = self.pane.top + id.index() as f64 * self.row_height - self.scroll_top;
        Some(Rect::new(top, self.row_height))
    }
}

/// Relative scroll that centers `block` inside `pane`
///
/// `(block.top - pane.top) - pane.height / 2 + block.height / 2`
#[must_use]
pub fn scroll_delta(pane: Rect, block: Rect) -> f64 {
    (block.top - pane.top) - pane.height / 2.0 + block.height / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_centers_block() {
        let pane = Rect::new(100.0, 400.0);
        let block = Rect::new(500.0, 40.0);
        let delta = scroll_delta(pane, block);
        assert_eq!(delta, 220.0);
        assert_eq!(block.center() - delta, pane.center());
    }

    #[test]
    fn centered_block_needs_no_scroll() {
        assert_eq!(
            scroll_delta(Rect::new(0.0, 100.0), Rect::new(40.0, 20.0)),
            0.0
        );
    }

    #[test]
    fn uniform_rows_follow_scroll() {
        let mut layout = UniformLayout::new(Rect::new(0.0, 100.0), 20.0);
        assert_eq!(layout.block_rect(BlockId(3)), Some(Rect::new(60.0, 20.0)));
        layout.scroll_by(30.0);
        assert_eq!(layout.block_rect(BlockId(3)), Some(Rect::new(30.0, 20.0)));
        layout.scroll_by(-100.0);
        assert_eq!(layout.scroll_top, 0.0);
    }

    #[test]
    fn no_layout_reports_nothing() {
        assert!(NoLayout.pane_rect().is_none());
        assert!(NoLayout.block_rect(BlockId(0)).is_none());
    }
}
