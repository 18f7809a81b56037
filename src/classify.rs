//! Event-type classification.
//!
//! Time-clock labels are free text.  They are mapped once, at ingestion,
//! onto a closed set of kinds so that the record builder never has to
//! look at raw strings.

use serde::{Deserialize, Serialize};

const CHECK_IN_MARKERS: [&str; 2] = ["เข้า", "Check-in"];
const CHECK_OUT_MARKERS: [&str; 2] = ["เลิก", "Check-out"];
const BREAK_MARKERS: [&str; 2] = ["พัก", "Break"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    CheckIn,
    CheckOut,
    Break,
    /// Label matching no known marker, kept verbatim.
    Other(String),
}

impl EventKind {
    /// Classify a label by substring.  Check-in markers take precedence,
    /// then check-out, then break.
    pub fn classify(label: &str) -> Self {
        if contains_any(label, &CHECK_IN_MARKERS) {
            EventKind::CheckIn
        } else if contains_any(label, &CHECK_OUT_MARKERS) {
            EventKind::CheckOut
        } else if contains_any(label, &BREAK_MARKERS) {
            EventKind::Break
        } else {
            EventKind::Other(label.to_string())
        }
    }

    pub fn is_check_in(&self) -> bool {
        matches!(self, EventKind::CheckIn)
    }

    pub fn is_check_out(&self) -> bool {
        matches!(self, EventKind::CheckOut)
    }
}

fn contains_any(label: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| label.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thai_and_english_labels() {
        assert_eq!(EventKind::classify("เข้างาน"), EventKind::CheckIn);
        assert_eq!(EventKind::classify("Check-in (gate 2)"), EventKind::CheckIn);
        assert_eq!(EventKind::classify("เลิกงาน"), EventKind::CheckOut);
        assert_eq!(EventKind::classify("Check-out"), EventKind::CheckOut);
        assert_eq!(EventKind::classify("พักเที่ยง"), EventKind::Break);
    }

    #[test]
    fn unknown_labels_keep_their_text() {
        assert_eq!(
            EventKind::classify("ตรวจตรา"),
            EventKind::Other("ตรวจตรา".to_string())
        );
        // Markers are case sensitive.
        assert_eq!(
            EventKind::classify("check-in"),
            EventKind::Other("check-in".to_string())
        );
    }

    #[test]
    fn check_in_wins_over_other_markers() {
        assert_eq!(EventKind::classify("เข้า/เลิก"), EventKind::CheckIn);
    }
}
