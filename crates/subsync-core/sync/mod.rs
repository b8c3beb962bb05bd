//! Playback synchronization
//!
//! Maps a continuous playback cursor onto the block list. Each time update
//! yields a [`SyncOutcome`] describing what should happen: either a loop
//! seek, or a highlight and scroll update. The computation is pure
//! ([`evaluate`]); [`SyncController`] owns the blocks and the state between
//! ticks, and a [`SyncView`] adapter applies outcomes to a real UI.
//!
//! # Example
//!
//! ```rust
//! use subsync_core::{
//!     align::align,
//!     parser::parse_srt,
//!     sync::{NoLayout, SyncController, SyncOutcome},
//! };
//!
//! let cues = parse_srt("00:00:01,000 --> 00:00:03,000\nHello");
//! let mut sync = SyncController::new(align(cues.as_slice(), &[]));
//!
//! let outcome = sync.on_time_update(1.5, &NoLayout);
//! assert_eq!(outcome.active_block().map(|id| id.index()), Some(0));
//!
//! sync.toggle_loop();
//! assert_eq!(sync.on_time_update(3.2, &NoLayout), SyncOutcome::Seek { to: 1.0 });
//! ```

mod geometry;

pub use geometry::{scroll_delta, LayoutGeometry, NoLayout, Rect, UniformLayout};

use crate::align::{block_by_id, Block, BlockId};
use crate::Result;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interval of the block the cursor was last inside
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoopAnchor {
    /// Block the anchor was taken from
    pub id: BlockId,
    /// Block start in seconds
    pub start: f64,
    /// Block end in seconds
    pub end: f64,
}

impl From<&Block> for LoopAnchor {
    fn from(block: &Block) -> Self {
        Self {
            id: block.id,
            start: block.start,
            end: block.end,
        }
    }
}

/// State carried between time updates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SyncState {
    /// Whether the anchor block repeats
    pub is_looping: bool,
    /// Block containing the cursor on the last update
    pub active_block: Option<BlockId>,
    /// Last block the cursor was inside; survives gaps between blocks
    pub loop_anchor: Option<LoopAnchor>,
}

/// Effect of one time update
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "action", rename_all = "snake_case"))]
pub enum SyncOutcome {
    /// Jump back to `to` and resume playback; nothing is redrawn
    Seek {
        /// Target time in seconds
        to: f64,
    },

    /// Clear highlights, then highlight and center the active block
    Render {
        /// Block to highlight, if the cursor is inside one
        active_block: Option<BlockId>,
        /// Relative scroll centering the active block, when geometry is known
        scroll_delta: Option<f64>,
    },
}

impl SyncOutcome {
    /// Block to highlight
    #[must_use]
    pub const fn active_block(&self) -> Option<BlockId> {
        match self {
            Self::Render { active_block, .. } => *active_block,
            Self::Seek { .. } => None,
        }
    }

    /// Scroll to apply
    #[must_use]
    pub const fn scroll_delta(&self) -> Option<f64> {
        match self {
            Self::Render { scroll_delta, .. } => *scroll_delta,
            Self::Seek { .. } => None,
        }
    }

    /// Loop seek target
    #[must_use]
    pub const fn seek_to(&self) -> Option<f64> {
        match self {
            Self::Seek { to } => Some(*to),
            Self::Render { .. } => None,
        }
    }

    /// Apply a render outcome to a view; seek outcomes leave it untouched
    pub fn render<V: SyncView + ?Sized>(&self, view: &mut V) {
        if let Self::Render {
            active_block,
            scroll_delta,
        } = *self
        {
            view.clear_highlights();
            if let Some(id) = active_block {
                view.highlight(id);
                if let Some(delta) = scroll_delta {
                    view.scroll_by(delta);
                }
            }
        }
    }
}

/// Rendering adapter for sync outcomes
pub trait SyncView {
    /// Remove the highlight from every block
    fn clear_highlights(&mut self);

    /// Highlight one block
    fn highlight(&mut self, id: BlockId);

    /// Scroll the pane by a relative amount
    fn scroll_by(&mut self, delta: f64);
}

/// First block containing `time`, in sequence order
#[must_use]
pub fn find_active(blocks: &[Block], time: f64) -> Option<&Block> {
    blocks.iter().find(|block| block.contains(time))
}

/// Compute the next state and outcome for a time update
///
/// Does not assume time moves forward; any `time` may follow any other.
#[must_use]
pub fn evaluate<G: LayoutGeometry + ?Sized>(
    time: f64,
    blocks: &[Block],
    state: &SyncState,
    geometry: &G,
) -> (SyncState, SyncOutcome) {
    let active = find_active(blocks, time);
    let mut next = SyncState {
        active_block: active.map(|block| block.id),
        ..*state
    };
    if let Some(block) = active {
        next.loop_anchor = Some(LoopAnchor::from(block));
    }

    if next.is_looping {
        if let Some(anchor) = next.loop_anchor {
            if time > anchor.end {
                return (next, SyncOutcome::Seek { to: anchor.start });
            }
        }
    }

    let scroll_delta = active.and_then(|block| {
        let pane = geometry.pane_rect()?;
        let rect = geometry.block_rect(block.id)?;
        Some(scroll_delta(pane, rect))
    });

    (
        next,
        SyncOutcome::Render {
            active_block: next.active_block,
            scroll_delta,
        },
    )
}

/// Seek target for a click on `block`
///
/// Clicking the block already under the cursor does nothing, so a click
/// never restarts the line being listened to.
#[must_use]
pub fn click_seek(block: &Block, current_time: f64) -> Option<f64> {
    if block.contains(current_time) {
        None
    } else {
        Some(block.start)
    }
}

/// Owner of the block list and sync state for one alignment
#[derive(Debug, Clone, Default)]
pub struct SyncController {
    blocks: Vec<Block>,
    state: SyncState,
}

impl SyncController {
    /// Create a controller for a freshly aligned block list
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            state: SyncState::default(),
        }
    }

    /// Current blocks
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &SyncState {
        &self.state
    }

    /// Whether loop mode is on
    #[must_use]
    pub const fn is_looping(&self) -> bool {
        self.state.is_looping
    }

    /// Replace the block list after a track change
    ///
    /// Ids from the previous list are meaningless now, so the active block
    /// and anchor are cleared. Loop mode is a user preference and is kept.
    pub fn reset(&mut self, blocks: Vec<Block>) {
        self.blocks = blocks;
        self.state = SyncState {
            is_looping: self.state.is_looping,
            ..SyncState::default()
        };
    }

    /// Process a time update
    pub fn on_time_update<G: LayoutGeometry + ?Sized>(
        &mut self,
        time: f64,
        geometry: &G,
    ) -> SyncOutcome {
        let (next, outcome) = evaluate(time, &self.blocks, &self.state, geometry);
        if next.active_block != self.state.active_block {
            debug!(time, from = ?self.state.active_block, to = ?next.active_block, "active block changed");
        }
        if let SyncOutcome::Seek { to } = outcome {
            debug!(time, to, "loop seek");
        }
        self.state = next;
        outcome
    }

    /// First block containing `time`
    #[must_use]
    pub fn find_active(&self, time: f64) -> Option<&Block> {
        find_active(&self.blocks, time)
    }

    /// Seek target for a click on the block with `id`
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::BlockNotFound`](crate::CoreError::BlockNotFound)
    /// if `id` is not part of the current alignment.
    pub fn click(&self, id: BlockId, current_time: f64) -> Result<Option<f64>> {
        Ok(click_seek(block_by_id(&self.blocks, id)?, current_time))
    }

    /// Flip loop mode and return the new value
    pub fn toggle_loop(&mut self) -> bool {
        self.state.is_looping = !self.state.is_looping;
        self.state.is_looping
    }
}
