use crate::aggregator::aggregate;
use crate::errors::{LineWarning, PipelineError};
use crate::models::{DailyBucket, Entry};
use crate::parser::parse;
use crate::stats::{summarize, Stats};
use crate::window::{PeriodLabel, PeriodWindow};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::info;

/// A fully validated log, ready to be swapped into a [`Dashboard`].
#[derive(Debug, Clone)]
pub struct LoadedLog {
    pub entries: Arc<[Entry]>,
    pub series: Arc<[DailyBucket]>,
    pub warnings: Vec<LineWarning>,
}

/// Decodes uploaded bytes as UTF-8 text, dropping a leading byte-order mark.
pub fn decode(bytes: &[u8]) -> Result<&str, PipelineError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}

/// Parses and aggregates raw log text without touching any existing state.
pub fn load_file(raw: &str) -> Result<LoadedLog, PipelineError> {
    let parsed = parse(raw)?;
    let series = aggregate(&parsed.entries);
    info!(
        entries = parsed.entries.len(),
        days = series.len(),
        warnings = parsed.warnings.len(),
        "log parsed"
    );
    Ok(LoadedLog {
        entries: parsed.entries.into(),
        series: series.into(),
        warnings: parsed.warnings,
    })
}

/// The one dataset the application works on, plus where the user is looking.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    log: Option<LoadedLog>,
    file_name: Option<String>,
    window: PeriodWindow,
}

impl Dashboard {
    pub fn new(interval: NonZeroUsize) -> Self {
        Self {
            log: None,
            file_name: None,
            window: PeriodWindow::new(interval),
        }
    }

    /// Replaces the dataset wholesale and jumps to the latest page.
    pub fn replace(&mut self, log: LoadedLog, file_name: Option<String>) {
        self.window.rebind(log.series.len());
        self.log = Some(log);
        self.file_name = file_name;
    }

    pub fn is_loaded(&self) -> bool {
        self.log.is_some()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn warning_count(&self) -> usize {
        self.log.as_ref().map_or(0, |log| log.warnings.len())
    }

    pub fn series(&self) -> &[DailyBucket] {
        match &self.log {
            Some(log) => log.series.as_ref(),
            None => &[],
        }
    }

    pub fn window(&self) -> &PeriodWindow {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut PeriodWindow {
        &mut self.window
    }

    pub fn current_slice(&self) -> &[DailyBucket] {
        self.window.current_slice(self.series())
    }

    pub fn label(&self) -> PeriodLabel {
        if self.is_loaded() {
            self.window.label(self.series())
        } else {
            PeriodLabel::NoData
        }
    }

    pub fn stats(&self) -> Stats {
        summarize(self.current_slice())
    }
}
