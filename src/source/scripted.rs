use std::collections::VecDeque;

use super::backend::CallSource;
use super::catalog::CALLER_MESSAGES;

/// Deterministic call source that replays queued values
///
/// Each queue is consumed front to back; once a queue runs dry the source
/// falls back to a fixed default so a long-running test never stalls.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    rings: VecDeque<bool>,
    callers: VecDeque<String>,
    phones: VecDeque<String>,
    openings: VecDeque<String>,
    durations: VecDeque<u32>,
    ring_when_exhausted: bool,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            rings: VecDeque::new(),
            callers: VecDeque::new(),
            phones: VecDeque::new(),
            openings: VecDeque::new(),
            durations: VecDeque::new(),
            ring_when_exhausted: true,
        }
    }

    pub fn with_rings(mut self, rings: impl IntoIterator<Item = bool>) -> Self {
        self.rings.extend(rings);
        self
    }

    /// Never ring once the queued ring decisions are used up
    pub fn quiet_when_exhausted(mut self) -> Self {
        self.ring_when_exhausted = false;
        self
    }

    pub fn with_callers<S: Into<String>>(mut self, callers: impl IntoIterator<Item = S>) -> Self {
        self.callers.extend(callers.into_iter().map(Into::into));
        self
    }

    pub fn with_phones<S: Into<String>>(mut self, phones: impl IntoIterator<Item = S>) -> Self {
        self.phones.extend(phones.into_iter().map(Into::into));
        self
    }

    pub fn with_openings<S: Into<String>>(mut self, openings: impl IntoIterator<Item = S>) -> Self {
        self.openings.extend(openings.into_iter().map(Into::into));
        self
    }

    pub fn with_durations(mut self, durations: impl IntoIterator<Item = u32>) -> Self {
        self.durations.extend(durations);
        self
    }
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CallSource for ScriptedSource {
    fn should_ring(&mut self) -> bool {
        self.rings.pop_front().unwrap_or(self.ring_when_exhausted)
    }

    fn caller_name(&mut self) -> String {
        self.callers
            .pop_front()
            .unwrap_or_else(|| "Test Caller".to_string())
    }

    fn phone_number(&mut self) -> String {
        self.phones
            .pop_front()
            .unwrap_or_else(|| "+1 (555) 555-0100".to_string())
    }

    fn opening_line(&mut self) -> String {
        self.openings
            .pop_front()
            .unwrap_or_else(|| CALLER_MESSAGES[0].to_string())
    }

    fn call_duration(&mut self) -> u32 {
        self.durations.pop_front().unwrap_or(60)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
