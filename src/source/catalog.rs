//! Fixed tables the simulation draws callers and opening lines from

pub const CALLER_NAMES: [&str; 12] = [
    "Sarah Johnson",
    "Mike Chen",
    "Emily Davis",
    "David Wilson",
    "Jennifer Brown",
    "Robert Taylor",
    "Amanda Miller",
    "Christopher Lee",
    "Jessica Martinez",
    "Daniel Anderson",
    "Ashley Thomas",
    "Matthew Jackson",
];

pub const CALLER_MESSAGES: [&str; 10] = [
    "Hi, I'm calling about my recent order. Can you help me track it?",
    "Hello, I have a question about your business hours.",
    "Hey, I need to reschedule my appointment for next week.",
    "Hi there, I'm interested in your services. Can you tell me more?",
    "Good morning, I'm calling to follow up on my previous inquiry.",
    "Hello, I'd like to make a reservation for this weekend.",
    "Hi, I have a complaint about a product I purchased.",
    "Hey, can you help me with my account settings?",
    "Good afternoon, I'm calling about the job posting.",
    "Hi, I need technical support with your app.",
];

/// Format the three parts of a North American number
pub fn format_phone(area_code: u16, prefix: u16, line: u16) -> String {
    format!("+1 ({}) {}-{}", area_code, prefix, line)
}
