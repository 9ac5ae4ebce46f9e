pub mod config;
pub mod error;
pub mod logging;

pub mod document;
pub mod link;
pub mod normalize;
pub mod pipeline;
pub mod source;
pub mod storage;

pub use error::SyncError;
pub use normalize::{normalize_lines, ProxyUri};
pub use pipeline::{sync, sync_at, OutputPaths, SyncReport};
