use crate::models::DailyBucket;

/// Summary of one measurement channel over a slice of days.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelStats {
    pub total: u64,
    /// `total / days`, rounded half up.
    pub average: u64,
    pub max: u64,
    /// Day of the first maximum; `None` when no day is above zero.
    pub max_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub days: usize,
    pub primary: ChannelStats,
    pub secondary: ChannelStats,
    pub combined: ChannelStats,
}

pub fn summarize(slice: &[DailyBucket]) -> Stats {
    Stats {
        days: slice.len(),
        primary: summarize_channel(slice, |day| day.primary_total),
        secondary: summarize_channel(slice, |day| day.secondary_total),
        combined: summarize_channel(slice, |day| day.combined_total),
    }
}

fn summarize_channel(slice: &[DailyBucket], value: impl Fn(&DailyBucket) -> u64) -> ChannelStats {
    let mut stats = ChannelStats::default();
    let mut max_day: Option<&DailyBucket> = None;

    for day in slice {
        let amount = value(day);
        stats.total = stats.total.saturating_add(amount);
        if amount > stats.max {
            stats.max = amount;
            max_day = Some(day);
        }
    }

    stats.average = rounded_average(stats.total, slice.len());
    stats.max_date = max_day.map(|day| day.date_text.clone());
    stats
}

fn rounded_average(total: u64, days: usize) -> u64 {
    if days == 0 {
        return 0;
    }
    let days = days as u128;
    ((u128::from(total) * 2 + days) / (days * 2)) as u64
}
