use crate::dates::{iso_date, Timestamp};
use crate::format::format_amount;
use crate::stats::{ChannelStats, Stats};
use crate::window::PeriodLabel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

/// One parsed measurement line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Original `DD.MM.YYYY` text; grouping key and display form.
    pub date_text: String,
    pub date: NaiveDate,
    /// Time token as written in the file; never validated.
    pub time_text: String,
    pub timestamp: Timestamp,
    pub primary_amount: u64,
    pub secondary_amount: u64,
}

impl Entry {
    pub fn total_amount(&self) -> u64 {
        self.primary_amount.saturating_add(self.secondary_amount)
    }
}

/// Totals for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBucket {
    pub date_text: String,
    #[serde(rename = "iso_date", serialize_with = "serialize_iso")]
    pub date: NaiveDate,
    pub primary_total: u64,
    pub secondary_total: u64,
    pub combined_total: u64,
    pub entry_count: usize,
}

fn serialize_iso<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&iso_date(*date))
}

#[derive(Debug, Deserialize)]
pub struct IntervalRequest {
    pub days: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct UploadParams {
    pub name: Option<String>,
}

/// Statistics for one channel, raw and pre-formatted.
#[derive(Debug, Serialize)]
pub struct ChannelView {
    pub total: u64,
    pub average: u64,
    pub max: u64,
    pub max_date: Option<String>,
    pub total_text: String,
    pub average_text: String,
    pub max_text: String,
}

#[derive(Debug, Serialize)]
pub struct StatsView {
    pub days: usize,
    pub primary: ChannelView,
    pub secondary: ChannelView,
    pub combined: ChannelView,
}

/// Everything the page needs to redraw after any call.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub loaded: bool,
    pub file_name: Option<String>,
    pub warning_count: usize,
    pub interval_days: usize,
    pub start_index: usize,
    pub total_days: usize,
    pub label: PeriodLabel,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub days: Vec<DailyBucket>,
    pub stats: StatsView,
}

impl From<&Stats> for StatsView {
    fn from(stats: &Stats) -> Self {
        Self {
            days: stats.days,
            primary: (&stats.primary).into(),
            secondary: (&stats.secondary).into(),
            combined: (&stats.combined).into(),
        }
    }
}

impl From<&ChannelStats> for ChannelView {
    fn from(stats: &ChannelStats) -> Self {
        Self {
            total: stats.total,
            average: stats.average,
            max: stats.max,
            max_date: stats.max_date.clone(),
            total_text: format_amount(stats.total),
            average_text: format_amount(stats.average),
            max_text: format_amount(stats.max),
        }
    }
}
