use crate::errors::PipelineError;
use crate::pipeline::{decode, load_file, LoadedLog};
use std::path::Path;
use tokio::fs;

/// Reads a log file from disk and runs it through the pipeline.
pub async fn read_log(path: &Path) -> Result<LoadedLog, PipelineError> {
    let bytes = fs::read(path).await.map_err(|source| PipelineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    load_file(decode(&bytes)?)
}

pub fn display_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
