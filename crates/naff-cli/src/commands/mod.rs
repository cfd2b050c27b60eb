//! CLI command implementations.

pub mod batch;
pub mod common;
pub mod harmonics;
pub mod profiles;
pub mod tune;
