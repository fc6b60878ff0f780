//! Check-in desk state
//!
//! Staff pick the event day, arm the scanner and submit one code per scan.
//! Hand-held scanners type the decoded pass into the focused input and
//! finish with Enter, so a scan arrives as a submitted line of text.

/// Event day a scan is recorded against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanDay {
    Day1,
    Day2,
    Day3,
}

impl ScanDay {
    pub const ALL: [ScanDay; 3] = [ScanDay::Day1, ScanDay::Day2, ScanDay::Day3];

    /// Backend path for this day's check-ins
    pub fn api_path(self) -> &'static str {
        match self {
            ScanDay::Day1 => "/api/registers/day1",
            ScanDay::Day2 => "/api/registers/day2",
            ScanDay::Day3 => "/api/registers/day3",
        }
    }
}

impl std::fmt::Display for ScanDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanDay::Day1 => write!(f, "DAY1"),
            ScanDay::Day2 => write!(f, "DAY2"),
            ScanDay::Day3 => write!(f, "DAY3"),
        }
    }
}

pub const SELECT_DAY_FIRST: &str = "Please select a day before scanning";
pub const SCAN_FAILED: &str = "Scan failed";

/// Outcome of one check-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResult {
    Success {
        message: String,
        name: String,
        reg_num: String,
    },
    Error {
        message: String,
    },
}

impl ScanResult {
    /// Error result, falling back to the generic message when blank
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            SCAN_FAILED.to_string()
        } else {
            message
        };
        ScanResult::Error { message }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ScanResult::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            ScanResult::Success { message, .. } | ScanResult::Error { message } => message,
        }
    }
}

/// A code accepted for submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingScan {
    pub day: ScanDay,
    pub reg_num: String,
}

#[derive(Debug, Clone, Default)]
pub struct ScanDesk {
    day: Option<ScanDay>,
    scanning: bool,
    submitting: bool,
    /// Text typed by the scanner so far
    pub input: String,
    result: Option<ScanResult>,
    count: u64,
}

impl ScanDesk {
    pub fn day(&self) -> Option<ScanDay> {
        self.day
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn result(&self) -> Option<&ScanResult> {
        self.result.as_ref()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Switch day: stops scanning and clears the previous result
    ///
    /// Returns whether the day changed.
    pub fn select_day(&mut self, day: ScanDay) -> bool {
        let changed = self.day != Some(day);
        self.day = Some(day);
        self.scanning = false;
        self.input.clear();
        self.result = None;
        if changed {
            self.count = 0;
            tracing::info!("Check-in day set to {}", day);
        }
        changed
    }

    /// Arm the scanner for a single code
    pub fn start_scan(&mut self) -> Result<(), &'static str> {
        if self.day.is_none() {
            return Err(SELECT_DAY_FIRST);
        }
        if self.scanning || self.submitting {
            return Ok(());
        }
        self.scanning = true;
        self.input.clear();
        self.result = None;
        Ok(())
    }

    pub fn stop_scan(&mut self) {
        self.scanning = false;
        self.input.clear();
    }

    /// Accept the typed code; disarms the scanner
    ///
    /// Returns `None` when not armed or the code is blank.
    pub fn submit(&mut self) -> Option<PendingScan> {
        let day = self.day?;
        if !self.scanning || self.submitting {
            return None;
        }
        let reg_num = self.input.trim().to_string();
        if reg_num.is_empty() {
            return None;
        }
        self.scanning = false;
        self.submitting = true;
        self.input.clear();
        Some(PendingScan { day, reg_num })
    }

    /// Record a check-in outcome for `day`
    ///
    /// Results for a day that is no longer selected are dropped.
    pub fn finish(&mut self, day: ScanDay, result: ScanResult) -> bool {
        self.submitting = false;
        if self.day != Some(day) {
            tracing::debug!("Dropping {} result after day change", day);
            return false;
        }
        self.result = Some(result);
        true
    }

    pub fn set_count(&mut self, day: ScanDay, count: u64) {
        if self.day == Some(day) {
            self.count = count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_paths() {
        assert_eq!(ScanDay::Day1.api_path(), "/api/registers/day1");
        assert_eq!(ScanDay::Day2.api_path(), "/api/registers/day2");
        assert_eq!(ScanDay::Day3.api_path(), "/api/registers/day3");
        assert_eq!(ScanDay::Day3.to_string(), "DAY3");
    }

    #[test]
    fn scan_requires_day() {
        let mut desk = ScanDesk::default();
        assert_eq!(desk.start_scan(), Err(SELECT_DAY_FIRST));
        assert!(!desk.is_scanning());
    }

    #[test]
    fn single_scan_disarms() {
        let mut desk = ScanDesk::default();
        desk.select_day(ScanDay::Day2);
        desk.start_scan().unwrap();
        desk.input = " EV2026-0042 \n".into();

        let pending = desk.submit().unwrap();
        assert_eq!(pending.day, ScanDay::Day2);
        assert_eq!(pending.reg_num, "EV2026-0042");
        assert!(!desk.is_scanning());
        assert!(desk.is_submitting());

        desk.input = "EV2026-0043".into();
        assert!(desk.submit().is_none());
    }

    #[test]
    fn blank_or_unarmed_submit_ignored() {
        let mut desk = ScanDesk::default();
        desk.select_day(ScanDay::Day1);
        desk.input = "EV1".into();
        assert!(desk.submit().is_none());

        desk.start_scan().unwrap();
        desk.input = "   ".into();
        assert!(desk.submit().is_none());
        assert!(desk.is_scanning());
    }

    #[test]
    fn day_change_stops_scan_and_clears_result() {
        let mut desk = ScanDesk::default();
        desk.select_day(ScanDay::Day1);
        desk.start_scan().unwrap();
        desk.input = "EV1".into();
        desk.submit();
        desk.finish(ScanDay::Day1, ScanResult::error("Already checked in"));
        desk.set_count(ScanDay::Day1, 12);
        assert!(desk.result().is_some());

        assert!(desk.select_day(ScanDay::Day3));
        assert!(desk.result().is_none());
        assert_eq!(desk.count(), 0);

        desk.start_scan().unwrap();
        assert!(!desk.select_day(ScanDay::Day3));
        assert!(!desk.is_scanning());
    }

    #[test]
    fn stale_result_dropped_after_day_change() {
        let mut desk = ScanDesk::default();
        desk.select_day(ScanDay::Day1);
        desk.start_scan().unwrap();
        desk.input = "EV1".into();
        desk.submit();
        desk.select_day(ScanDay::Day2);
        assert!(!desk.finish(ScanDay::Day1, ScanResult::error("late")));
        assert!(desk.result().is_none());
        assert!(!desk.is_submitting());

        desk.set_count(ScanDay::Day1, 40);
        assert_eq!(desk.count(), 0);
    }

    #[test]
    fn blank_error_falls_back() {
        assert_eq!(ScanResult::error("").message(), SCAN_FAILED);
        assert_eq!(ScanResult::error("Invalid pass").message(), "Invalid pass");
        assert!(!ScanResult::error("x").is_success());
    }
}
