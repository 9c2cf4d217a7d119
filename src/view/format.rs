use crate::call::CallStatus;

/// Seconds as "m:ss"
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// First letter of each word in a caller's name
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

pub fn status_label(status: CallStatus) -> &'static str {
    match status {
        CallStatus::Incoming => "📞 Incoming",
        CallStatus::Active => "🟢 Active",
        CallStatus::Completed => "✓ Completed",
        CallStatus::Missed => "✗ Missed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(90), "1:30");
        assert_eq!(format_duration(605), "10:05");
    }

    #[test]
    fn caller_initials() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("Christopher  Lee"), "CL");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn every_status_has_a_label() {
        assert!(status_label(CallStatus::Missed).contains("Missed"));
        assert!(status_label(CallStatus::Completed).contains("Completed"));
    }
}
