//! CLI command handlers.

mod sync;

pub use sync::{run_sync, source_for};
