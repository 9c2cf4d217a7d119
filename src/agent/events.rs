use serde::Serialize;

use crate::call::{Call, Message};

/// State changes published to dashboard subscribers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    AgentToggled { active: bool },
    CallRinging { call: Call },
    CallAnswered { call_id: String },
    MessageAppended { call_id: String, message: Message },
    CallCompleted { call_id: String, duration: u32 },
    CallMissed { call_id: String },
}

impl DashboardEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            DashboardEvent::AgentToggled { .. } => "agent_toggled",
            DashboardEvent::CallRinging { .. } => "call_ringing",
            DashboardEvent::CallAnswered { .. } => "call_answered",
            DashboardEvent::MessageAppended { .. } => "message_appended",
            DashboardEvent::CallCompleted { .. } => "call_completed",
            DashboardEvent::CallMissed { .. } => "call_missed",
        }
    }
}
