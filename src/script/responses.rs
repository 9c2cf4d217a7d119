use serde::Serialize;

pub const CALLER_ACK_LINE: &str = "That's helpful, thank you.";
pub const AGENT_CLOSING_LINE: &str =
    "You're welcome! Is there anything else I can help you with?";
pub const CALLER_GOODBYE_LINE: &str = "No, that's all. Thanks for your help!";

const ORDER: [&str; 3] = [
    "I'd be happy to help you track your order! Let me look that up for you.",
    "I can see your order is currently being processed and will be shipped within 2-3 business days.",
    "Is there anything else I can help you with regarding your order?",
];

const HOURS: [&str; 3] = [
    "Of course! Our business hours are Monday through Friday, 9 AM to 6 PM.",
    "We're also open on Saturdays from 10 AM to 4 PM.",
    "Would you like me to schedule an appointment during these hours?",
];

const APPOINTMENT: [&str; 3] = [
    "Absolutely, I can help you reschedule your appointment.",
    "I have availability on Tuesday and Thursday next week. Which works better for you?",
    "Great, I've rescheduled your appointment. You'll receive a confirmation shortly.",
];

const SERVICES: [&str; 3] = [
    "I'd love to tell you about our services!",
    "We offer comprehensive solutions tailored to your needs.",
    "Would you like me to send you a detailed brochure via email?",
];

const DEFAULT: [&str; 5] = [
    "Thank you for calling! I'm your AI assistant and I'm here to help.",
    "I understand. Let me assist you with that right away.",
    "Is there anything else I can help you with today?",
    "Thank you for your patience. I've noted your request.",
    "I'll make sure this is handled promptly for you.",
];

/// Canned reply pools the agent answers from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponsePool {
    Order,
    Hours,
    Appointment,
    Services,
    Default,
}

impl ResponsePool {
    /// Pick the pool for a caller's opening line; first keyword match wins
    pub fn classify(opening_line: &str) -> Self {
        let line = opening_line.to_lowercase();
        if line.contains("order") {
            ResponsePool::Order
        } else if line.contains("hour") {
            ResponsePool::Hours
        } else if line.contains("appointment") || line.contains("reschedule") {
            ResponsePool::Appointment
        } else if line.contains("service") {
            ResponsePool::Services
        } else {
            ResponsePool::Default
        }
    }

    pub fn lines(self) -> &'static [&'static str] {
        match self {
            ResponsePool::Order => &ORDER,
            ResponsePool::Hours => &HOURS,
            ResponsePool::Appointment => &APPOINTMENT,
            ResponsePool::Services => &SERVICES,
            ResponsePool::Default => &DEFAULT,
        }
    }

    /// The reply the agent leads with
    pub fn first_reply(self) -> &'static str {
        match self {
            ResponsePool::Order => ORDER[0],
            ResponsePool::Hours => HOURS[0],
            ResponsePool::Appointment => APPOINTMENT[0],
            ResponsePool::Services => SERVICES[0],
            ResponsePool::Default => DEFAULT[0],
        }
    }
}

/// The agent's reply to a caller's opening line
pub fn agent_reply(opening_line: &str) -> &'static str {
    ResponsePool::classify(opening_line).first_reply()
}
