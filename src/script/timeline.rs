use std::time::Duration;

use super::responses::{agent_reply, AGENT_CLOSING_LINE, CALLER_ACK_LINE, CALLER_GOODBYE_LINE};
use crate::call::Role;
use crate::config::ScriptConfig;

/// One thing that happens to a call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// Pick up the ringing call
    Answer,
    /// Append a transcript line
    Say { role: Role, text: String },
    /// Assign a duration and move the call to history as completed
    Finish,
}

/// A step and its offset from the moment the call rang
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStep {
    pub at: Duration,
    pub step: ScriptStep,
}

/// Ordered steps for a single call, run under one cancellation token
#[derive(Debug, Clone)]
pub struct Timeline {
    steps: Vec<TimelineStep>,
}

impl Timeline {
    /// Build the fixed ring-to-wrap-up script for a call
    pub fn for_call(script: &ScriptConfig, answer_delay: Duration, opening_line: &str) -> Self {
        let after_answer = |ms: u64| answer_delay + Duration::from_millis(ms);
        let say = |role: Role, text: &str| ScriptStep::Say {
            role,
            text: text.to_string(),
        };

        let goodbye_at = after_answer(script.caller_goodbye_ms);

        let steps = vec![
            TimelineStep {
                at: answer_delay,
                step: ScriptStep::Answer,
            },
            TimelineStep {
                at: after_answer(script.caller_open_ms),
                step: say(Role::Caller, opening_line),
            },
            TimelineStep {
                at: after_answer(script.agent_reply_ms),
                step: say(Role::Agent, agent_reply(opening_line)),
            },
            TimelineStep {
                at: after_answer(script.caller_ack_ms),
                step: say(Role::Caller, CALLER_ACK_LINE),
            },
            TimelineStep {
                at: after_answer(script.agent_close_ms),
                step: say(Role::Agent, AGENT_CLOSING_LINE),
            },
            TimelineStep {
                at: goodbye_at,
                step: say(Role::Caller, CALLER_GOODBYE_LINE),
            },
            TimelineStep {
                at: goodbye_at + Duration::from_millis(script.wrap_up_ms),
                step: ScriptStep::Finish,
            },
        ];

        Self { steps }
    }

    pub fn steps(&self) -> &[TimelineStep] {
        &self.steps
    }

    /// Offset of the last step
    pub fn total_duration(&self) -> Duration {
        self.steps.last().map(|s| s.at).unwrap_or_default()
    }
}
