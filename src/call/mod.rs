//! Call records and dashboard statistics
//!
//! This module provides the data the dashboard is built from:
//! - `Call`: one simulated phone call and its transcript
//! - `Message`: a single caller or agent utterance
//! - `CallStats`: aggregate counters updated as calls move through their lifecycle

mod model;
mod stats;

pub use model::{time_label, Call, CallStatus, Message, Role};
pub use stats::CallStats;
