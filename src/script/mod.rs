//! Conversation scripting
//!
//! A call's life is a fixed timeline: ring, answer, five transcript lines,
//! then wrap-up. The agent's single "smart" step is picking a reply pool by
//! keyword from the caller's opening line.

mod responses;
mod timeline;

pub use responses::{
    agent_reply, ResponsePool, AGENT_CLOSING_LINE, CALLER_ACK_LINE, CALLER_GOODBYE_LINE,
};
pub use timeline::{ScriptStep, Timeline, TimelineStep};
