use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a call
///
/// The normal flow is `Incoming` → `Active` → `Completed`. `Missed` is only
/// reached when the agent goes offline while a call is still ringing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    Incoming,
    Active,
    Completed,
    Missed,
}

impl CallStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CallStatus::Incoming => "incoming",
            CallStatus::Active => "active",
            CallStatus::Completed => "completed",
            CallStatus::Missed => "missed",
        }
    }

    /// Whether `next` is a legal successor of this status
    pub fn can_become(self, next: CallStatus) -> bool {
        matches!(
            (self, next),
            (CallStatus::Incoming, CallStatus::Active)
                | (CallStatus::Incoming, CallStatus::Missed)
                | (CallStatus::Active, CallStatus::Completed)
        )
    }
}

/// Who spoke a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Caller,
    Agent,
}

/// A single transcript line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,

    /// Wall-clock label, e.g. "09:41 AM"
    pub time: String,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            time: time_label(Local::now()),
        }
    }
}

/// A simulated phone call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    /// Unique call identifier (e.g., "call-5f0c...")
    pub id: String,

    /// Caller's display name
    pub caller: String,

    /// Caller's phone number, "+1 (AAA) PPP-LLLL"
    pub phone: String,

    /// When the call rang, as a wall-clock label
    pub time: String,

    /// Call length in seconds; zero until the call completes
    pub duration: u32,

    pub status: CallStatus,

    /// Transcript in the order lines were spoken
    pub transcript: Vec<Message>,
}

impl Call {
    /// Create a freshly ringing call
    pub fn incoming(caller: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: format!("call-{}", uuid::Uuid::new_v4()),
            caller: caller.into(),
            phone: phone.into(),
            time: time_label(Local::now()),
            duration: 0,
            status: CallStatus::Incoming,
            transcript: Vec::new(),
        }
    }
}

/// Format a timestamp as a 12-hour "hh:mm AM" label
pub fn time_label(at: DateTime<Local>) -> String {
    at.format("%I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn incoming_call_starts_empty() {
        let call = Call::incoming("Sarah Johnson", "+1 (555) 123-4567");
        assert!(call.id.starts_with("call-"));
        assert_eq!(call.status, CallStatus::Incoming);
        assert_eq!(call.duration, 0);
        assert!(call.transcript.is_empty());
    }

    #[test]
    fn time_label_uses_twelve_hour_clock() {
        let morning = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
        let evening = Local.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap();
        assert_eq!(time_label(morning), "09:05 AM");
        assert_eq!(time_label(evening), "06:30 PM");
    }

    #[test]
    fn status_transitions() {
        assert!(CallStatus::Incoming.can_become(CallStatus::Active));
        assert!(CallStatus::Incoming.can_become(CallStatus::Missed));
        assert!(CallStatus::Active.can_become(CallStatus::Completed));
        assert!(!CallStatus::Active.can_become(CallStatus::Missed));
        assert!(!CallStatus::Completed.can_become(CallStatus::Active));
        assert!(!CallStatus::Missed.can_become(CallStatus::Active));
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&CallStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }
}
