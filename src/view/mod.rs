//! Dashboard rendering
//!
//! A tera template rendered from a `DashboardSnapshot`. Nothing here touches
//! agent state; the HTTP layer takes a snapshot and hands it over.

mod format;
mod html;

pub use format::{format_duration, initials, status_label};
pub use html::DashboardView;
