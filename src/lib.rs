pub mod aggregator;
pub mod app;
pub mod config;
pub mod dates;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod window;

pub use app::router;
pub use config::Config;
pub use pipeline::{load_file, Dashboard, LoadedLog};
pub use state::AppState;
pub use storage::read_log;
