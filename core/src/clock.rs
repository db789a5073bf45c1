//! Wall-clock stamps in the desk's stored text format.

use chrono::Local;

/// Format for registration dates, complaint dates, and activity entries.
/// Lexicographic order equals chronological order, which the dashboard
/// relies on when merging feeds.
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date-only format for bill payment dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn timestamp() -> String {
    Local::now().format(STAMP_FORMAT).to_string()
}

pub fn date_stamp() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_shapes() {
        assert_eq!(timestamp().len(), 19);
        assert_eq!(date_stamp().len(), 10);
    }
}
