use crate::models::DailyBucket;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::ops::Range;
use tracing::debug;

/// Interval presets offered by the page.
pub const INTERVAL_PRESETS: [usize; 3] = [7, 14, 30];

pub const DEFAULT_INTERVAL: NonZeroUsize = match NonZeroUsize::new(7) {
    Some(days) => days,
    None => unreachable!(),
};

/// A fixed-width page over a daily series of `len` buckets.
///
/// `start` never goes below 0, and for a non-empty series always points at an
/// existing bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    interval: NonZeroUsize,
    start: usize,
    len: usize,
}

impl PeriodWindow {
    pub fn new(interval: NonZeroUsize) -> Self {
        Self {
            interval,
            start: 0,
            len: 0,
        }
    }

    /// Binds the window to a freshly loaded series and shows its latest page.
    pub fn rebind(&mut self, len: usize) {
        self.len = len;
        self.start = 0;
        self.reset_to_latest();
    }

    pub fn interval(&self) -> usize {
        self.interval.get()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn set_interval(&mut self, interval: NonZeroUsize) {
        self.interval = interval;
        self.reset_to_latest();
    }

    pub fn reset_to_latest(&mut self) {
        if self.is_empty() {
            return;
        }
        self.start = self.len.saturating_sub(self.interval());
        debug!(start = self.start, interval = self.interval(), "window reset to latest");
    }

    pub fn page_previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.start = self.start.saturating_sub(self.interval());
        debug!(start = self.start, "window moved back");
    }

    pub fn page_next(&mut self) {
        if self.is_empty() {
            return;
        }
        let last_start = self.len.saturating_sub(self.interval());
        self.start = last_start.min(self.start + self.interval());
        debug!(start = self.start, "window moved forward");
    }

    /// Index range of the visible buckets; shorter than the interval at the tail.
    pub fn range(&self) -> Range<usize> {
        let end = (self.start + self.interval()).min(self.len);
        self.start.min(end)..end
    }

    pub fn current_slice<'a>(&self, series: &'a [DailyBucket]) -> &'a [DailyBucket] {
        let Range { start, end } = self.range();
        let end = end.min(series.len());
        &series[start.min(end)..end]
    }

    pub fn is_at_start(&self) -> bool {
        self.start == 0
    }

    pub fn is_at_latest(&self) -> bool {
        self.start + self.interval() >= self.len
    }

    pub fn label(&self, series: &[DailyBucket]) -> PeriodLabel {
        PeriodLabel::for_slice(self.current_slice(series), self.is_at_latest())
    }
}

impl Default for PeriodWindow {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

/// What the period caption should say. Kept as data so the page can word it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodLabel {
    /// No log has been loaded yet.
    NoData,
    /// The window holds no buckets.
    Empty,
    /// The window reaches the most recent day.
    Latest { days: usize },
    Range { first: String, last: String },
}

impl PeriodLabel {
    pub fn for_slice(slice: &[DailyBucket], at_latest: bool) -> Self {
        match (slice.first(), slice.last()) {
            (Some(_), Some(_)) if at_latest => Self::Latest { days: slice.len() },
            (Some(first), Some(last)) => Self::Range {
                first: first.date_text.clone(),
                last: last.date_text.clone(),
            },
            _ => Self::Empty,
        }
    }
}
