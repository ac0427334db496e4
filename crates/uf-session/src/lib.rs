//! uf-session: per-session state for unitflow.
//!
//! One `Session` lives for one interactive session and owns the conversion
//! history. It is an explicit context object passed into the operations
//! that need it, never process-global state.

pub mod history;

pub use history::{HistoryEntry, Session};
