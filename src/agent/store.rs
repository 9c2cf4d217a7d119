use serde::Serialize;

use crate::call::{Call, CallStats, CallStatus, Message};

/// Everything the dashboard shows, at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub agent_active: bool,

    /// The call currently being handled, if any
    pub active_call: Option<Call>,

    /// Call history, newest first
    pub calls: Vec<Call>,

    pub stats: CallStats,
}

/// Dashboard state holder
///
/// History is the single source of truth for every call; `ringing` and
/// `active` only point into it. Each transition returns `false` and leaves
/// the state untouched when the call it targets is not the one expected,
/// which is how stale timeline steps become no-ops.
#[derive(Debug, Clone)]
pub struct DashboardState {
    agent_active: bool,
    calls: Vec<Call>,
    ringing: Option<String>,
    active: Option<String>,
    stats: CallStats,
    history_limit: usize,
}

impl DashboardState {
    pub fn new(satisfaction: u8, history_limit: usize) -> Self {
        Self {
            agent_active: false,
            calls: Vec::new(),
            ringing: None,
            active: None,
            stats: CallStats::new(satisfaction),
            history_limit: history_limit.max(1),
        }
    }

    pub fn agent_active(&self) -> bool {
        self.agent_active
    }

    /// Returns whether the flag changed
    pub fn set_agent_active(&mut self, active: bool) -> bool {
        let changed = self.agent_active != active;
        self.agent_active = active;
        changed
    }

    pub fn ringing_call_id(&self) -> Option<&str> {
        self.ringing.as_deref()
    }

    pub fn active_call_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// A new call may ring only while the agent is on and the line is free
    pub fn can_ring(&self) -> bool {
        self.agent_active && self.active.is_none() && self.ringing.is_none()
    }

    pub fn call(&self, call_id: &str) -> Option<&Call> {
        self.calls.iter().find(|c| c.id == call_id)
    }

    pub fn stats(&self) -> &CallStats {
        &self.stats
    }

    /// Put a new incoming call at the top of history
    pub fn ring(&mut self, call: Call) -> bool {
        if !self.can_ring() || call.status != CallStatus::Incoming {
            return false;
        }

        self.ringing = Some(call.id.clone());
        self.calls.insert(0, call);
        self.calls.truncate(self.history_limit);
        true
    }

    /// Pick up the ringing call; counts it as received and answered
    pub fn answer(&mut self, call_id: &str) -> bool {
        if self.ringing.as_deref() != Some(call_id) || self.active.is_some() {
            return false;
        }
        if !self.transition(call_id, CallStatus::Active) {
            return false;
        }

        self.ringing = None;
        self.active = Some(call_id.to_string());
        self.stats.record_answered();
        true
    }

    pub fn append_message(&mut self, call_id: &str, message: Message) -> bool {
        if self.active.as_deref() != Some(call_id) {
            return false;
        }

        match self.call_mut(call_id) {
            Some(call) => {
                call.transcript.push(message);
                true
            }
            None => false,
        }
    }

    /// Close out the active call with its final duration
    pub fn complete(&mut self, call_id: &str, duration_secs: u32) -> bool {
        if self.active.as_deref() != Some(call_id) {
            return false;
        }
        if !self.transition(call_id, CallStatus::Completed) {
            return false;
        }

        if let Some(call) = self.call_mut(call_id) {
            call.duration = duration_secs;
        }
        self.active = None;
        self.stats.record_completed(duration_secs);
        true
    }

    /// Drop a call that rang but was never picked up
    pub fn miss(&mut self, call_id: &str) -> bool {
        if self.ringing.as_deref() != Some(call_id) {
            return false;
        }
        if !self.transition(call_id, CallStatus::Missed) {
            return false;
        }

        self.ringing = None;
        self.stats.record_missed();
        true
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            agent_active: self.agent_active,
            active_call: self.active.as_deref().and_then(|id| self.call(id)).cloned(),
            calls: self.calls.clone(),
            stats: self.stats.clone(),
        }
    }

    fn call_mut(&mut self, call_id: &str) -> Option<&mut Call> {
        self.calls.iter_mut().find(|c| c.id == call_id)
    }

    fn transition(&mut self, call_id: &str, next: CallStatus) -> bool {
        match self.call_mut(call_id) {
            Some(call) if call.status.can_become(next) => {
                call.status = next;
                true
            }
            _ => false,
        }
    }
}
