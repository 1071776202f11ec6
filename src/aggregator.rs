use crate::models::{DailyBucket, Entry};
use std::collections::BTreeMap;

/// Groups entries by their date text and sums each channel per day.
///
/// Output is ordered by calendar date. An empty input yields an empty series.
pub fn aggregate(entries: &[Entry]) -> Vec<DailyBucket> {
    let mut days: BTreeMap<&str, DailyBucket> = BTreeMap::new();

    for entry in entries {
        let bucket = days
            .entry(entry.date_text.as_str())
            .or_insert_with(|| DailyBucket {
                date_text: entry.date_text.clone(),
                date: entry.date,
                primary_total: 0,
                secondary_total: 0,
                combined_total: 0,
                entry_count: 0,
            });
        bucket.primary_total = bucket.primary_total.saturating_add(entry.primary_amount);
        bucket.secondary_total = bucket
            .secondary_total
            .saturating_add(entry.secondary_amount);
        bucket.combined_total = bucket.combined_total.saturating_add(entry.total_amount());
        bucket.entry_count += 1;
    }

    let mut series: Vec<DailyBucket> = days.into_values().collect();
    series.sort_by_key(|bucket| bucket.date);
    series
}
