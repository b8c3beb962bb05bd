//! # subsync core
//!
//! Dual-track subtitle alignment and playback synchronization engine.
//! Parses SubRip text, merges two independently timed tracks into display
//! blocks, and maps a continuous playback cursor onto those blocks with
//! highlight, scroll and loop behavior.
//!
//! ## Features
//!
//! - **Permissive SRT parsing**: malformed blocks are dropped, never raised
//! - **Overlap alignment**: one block per primary cue, first overlapping
//!   secondary cue wins
//! - **Pure sync engine**: time updates produce plain outcome values; UI
//!   adapters apply them through traits
//! - **Word annotation**: clickable word spans with stable lookup keys
//!
//! ## Quick Start
//!
//! ```rust
//! use subsync_core::{align, parse_srt, NoLayout, SyncController};
//!
//! let primary = parse_srt("1\n00:00:01,000 --> 00:00:03,000\nHola mundo\n");
//! let secondary = parse_srt("1\n00:00:01,200 --> 00:00:02,900\nHello world\n");
//!
//! let blocks = align(primary.as_slice(), secondary.as_slice());
//! let mut sync = SyncController::new(blocks);
//!
//! let outcome = sync.on_time_update(2.0, &NoLayout);
//! let active = outcome.active_block().and_then(|id| sync.blocks().get(id.index()));
//! assert_eq!(active.map(|b| b.secondary_text.as_str()), Some("Hello world"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod align;
pub mod annotate;
pub mod parser;
pub mod sync;
pub mod utils;

pub use align::{align, Block, BlockId, LineKind};
pub use annotate::{annotate, resolve_click, WordLookup};
pub use parser::{parse_srt, Cue, CueSequence};
pub use sync::{LayoutGeometry, NoLayout, SyncController, SyncOutcome, SyncState, SyncView};
pub use utils::{decode_text, CoreError};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for core operations, using the crate's unified `CoreError`.
pub type Result<T> = core::result::Result<T, CoreError>;
