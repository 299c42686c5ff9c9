use serde::Deserialize;

/// Public holiday feed document, only the England and Wales division is imported
#[derive(Clone, Debug, Deserialize)]
pub struct HolidayFeed {
    #[serde(rename = "england-and-wales")]
    pub england_and_wales: HolidayDivision,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HolidayDivision {
    pub division: String,
    pub events: Vec<HolidayEntry>,
}

/// A single dated holiday, `date` is formatted `YYYY-MM-DD`
#[derive(Clone, Debug, Deserialize)]
pub struct HolidayEntry {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub bunting: bool,
}

/// Outcome of a single holiday sync run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Entries in the imported division
    pub fetched: usize,
    /// Entries dropped because their date could not be parsed
    pub skipped: usize,
    /// Events inserted, entries already stored are not counted
    pub created: usize,
}
