// This module re-exports important pieces for convenience,
// so we can "use crate::config::*" easily.
pub mod config;
pub mod logging;
pub mod metrics;
pub mod page;

pub use config::*;
pub use logging::*;
pub use metrics::*;
pub use page::*;
