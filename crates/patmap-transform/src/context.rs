use chrono::{Local, NaiveDate};

/// Run-wide inputs to resolution that do not come from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionContext {
    /// Reference date for age calculations.
    pub today: NaiveDate,
    /// Whether raw field values may appear in diagnostics.
    pub log_data: bool,
}

impl ResolutionContext {
    /// Context anchored at the local wall-clock date.
    pub fn today() -> Self {
        Self::at(Local::now().date_naive())
    }

    /// Context anchored at a fixed date.
    pub fn at(today: NaiveDate) -> Self {
        Self {
            today,
            log_data: false,
        }
    }

    #[must_use]
    pub fn with_log_data(mut self, enable: bool) -> Self {
        self.log_data = enable;
        self
    }

    /// Returns `value` when data logging is enabled, otherwise a redacted token.
    pub fn redact<'a>(&self, value: &'a str) -> &'a str {
        if self.log_data {
            value
        } else {
            patmap_model::REDACTED_VALUE
        }
    }
}

impl Default for ResolutionContext {
    fn default() -> Self {
        Self::today()
    }
}
