//! Utility modules for network access.
//!
//! Provides:
//! - [`post_json`] - JSON POST over the Fetch API with timeout
//! - [`race_with_timeout`] - Promise racing primitive used to bound requests

mod fetch;

pub use fetch::{RaceResult, post_json, race_with_timeout};
