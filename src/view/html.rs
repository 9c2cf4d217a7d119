use std::collections::HashMap;

use serde::Serialize;
use tera::{Context, Tera, Value};

use super::format::{format_duration, initials, status_label};
use crate::agent::DashboardSnapshot;
use crate::call::{Call, Message, Role};

const TEMPLATE_NAME: &str = "dashboard.html";
const TEMPLATE: &str = include_str!("../../templates/dashboard.html");

/// Sender label shown on the agent's transcript lines
const AGENT_SENDER: &str = "AI Agent";

/// A call as the page shows it
#[derive(Debug, Serialize)]
struct CallRow<'a> {
    id: &'a str,
    caller: &'a str,
    initials: String,
    phone: &'a str,
    time: &'a str,
    status: &'static str,
    status_label: &'static str,
    duration: u32,
}

impl<'a> From<&'a Call> for CallRow<'a> {
    fn from(call: &'a Call) -> Self {
        Self {
            id: &call.id,
            caller: &call.caller,
            initials: initials(&call.caller),
            phone: &call.phone,
            time: &call.time,
            status: call.status.as_str(),
            status_label: status_label(call.status),
            duration: call.duration,
        }
    }
}

/// One transcript bubble
#[derive(Debug, Serialize)]
struct TranscriptLine<'a> {
    class: &'static str,
    sender: &'a str,
    time: &'a str,
    text: &'a str,
}

impl<'a> TranscriptLine<'a> {
    fn new(call: &'a Call, message: &'a Message) -> Self {
        let (class, sender) = match message.role {
            Role::Caller => ("caller", call.caller.as_str()),
            Role::Agent => ("agent", AGENT_SENDER),
        };
        Self {
            class,
            sender,
            time: &message.time,
            text: &message.text,
        }
    }
}

/// Server-rendered dashboard page
///
/// The template is compiled once. Tera autoescapes every value because the
/// template name ends in `.html`, so caller-supplied text never reaches the
/// page as markup.
pub struct DashboardView {
    tera: Tera,
}

impl DashboardView {
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        tera.register_filter("duration", duration_filter);
        Ok(Self { tera })
    }

    /// Render the whole page for one snapshot
    pub fn render(&self, snapshot: &DashboardSnapshot, title: &str) -> tera::Result<String> {
        self.tera.render(TEMPLATE_NAME, &page_context(snapshot, title))
    }
}

fn page_context(snapshot: &DashboardSnapshot, title: &str) -> Context {
    let live_call = snapshot.active_call.as_ref();
    let transcript: Vec<TranscriptLine> = live_call
        .map(|call| {
            call.transcript
                .iter()
                .map(|message| TranscriptLine::new(call, message))
                .collect()
        })
        .unwrap_or_default();
    let calls: Vec<CallRow> = snapshot.calls.iter().map(CallRow::from).collect();

    let mut context = Context::new();
    context.insert("title", title);
    context.insert("agent_active", &snapshot.agent_active);
    context.insert("stats", &snapshot.stats);
    context.insert("live_call", &live_call.map(CallRow::from));
    context.insert("transcript", &transcript);
    context.insert("calls", &calls);
    context
}

/// `{{ seconds | duration }}` renders whole seconds as "m:ss"
fn duration_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let seconds = value
        .as_u64()
        .ok_or_else(|| tera::Error::msg(format!("duration expects whole seconds, got {}", value)))?;
    let seconds = u32::try_from(seconds).unwrap_or(u32::MAX);
    Ok(Value::String(format_duration(seconds)))
}
