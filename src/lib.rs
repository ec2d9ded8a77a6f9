//! Spaced-repetition scheduling core for a personal vocabulary trainer.
//!
//! The crate covers the algorithmic heart of a study tool and nothing
//! else: turning remember/forget outcomes into a per-entry difficulty,
//! review interval, and due date, plus the transient queue that sequences
//! one interactive review pass. Record management (browse, search, study
//! lists, on-disk persistence, seed import) lives behind the
//! [`store::EntryStore`] trait.
//!
//! Components:
//! - [`srs::performance`] — forget history → normalized success score
//! - [`srs::scheduler`] — success score + entry state → new difficulty,
//!   interval, due date
//! - [`review`] — remember/forget state machine over the
//!   consecutive-success counter
//! - [`session`] — recirculating in-session review queue
//! - [`engine`] — facade tying the above to an [`store::EntryStore`]

pub mod config;
pub mod engine;
pub mod review;
pub mod session;
pub mod srs;
pub mod store;
pub mod types;

pub use config::SrsConfig;
pub use engine::{EngineError, ReviewResult, StudyEngine};
pub use session::SessionQueue;
pub use srs::{performance_score, reschedule};
pub use store::{EntryStore, MemoryStore, StoreError};
pub use types::{Entry, Status, StudyMetrics};
