//! Library exports for hellometrics, shared between the binary and tests.

pub mod config;
pub mod metrics;
pub mod pages;
pub mod routes;
pub mod startup;
pub mod state;
pub mod utils;
