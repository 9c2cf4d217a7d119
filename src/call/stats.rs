use serde::{Deserialize, Serialize};

/// Aggregate dashboard statistics
///
/// `avg_duration` is the floored arithmetic mean over every completed call,
/// including the one that just completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallStats {
    /// Calls that reached the agent, answered or missed
    pub total_calls: u32,

    /// Calls the agent picked up
    pub answered_calls: u32,

    /// Calls whose conversation finished
    pub completed_calls: u32,

    /// Calls that rang out while the agent went offline
    pub missed_calls: u32,

    /// Average completed-call duration in seconds
    pub avg_duration: u32,

    /// Fixed satisfaction percentage
    pub satisfaction: u8,

    /// Sum of completed-call durations in seconds
    pub total_talk_secs: u64,
}

impl CallStats {
    pub fn new(satisfaction: u8) -> Self {
        Self {
            total_calls: 0,
            answered_calls: 0,
            completed_calls: 0,
            missed_calls: 0,
            avg_duration: 0,
            satisfaction,
            total_talk_secs: 0,
        }
    }

    pub fn record_answered(&mut self) {
        self.total_calls += 1;
        self.answered_calls += 1;
    }

    pub fn record_missed(&mut self) {
        self.total_calls += 1;
        self.missed_calls += 1;
    }

    pub fn record_completed(&mut self, duration_secs: u32) {
        self.completed_calls += 1;
        self.total_talk_secs += u64::from(duration_secs);
        let avg = self.total_talk_secs / u64::from(self.completed_calls);
        self.avg_duration = u32::try_from(avg).unwrap_or(u32::MAX);
    }
}

impl Default for CallStats {
    fn default() -> Self {
        Self::new(98)
    }
}
