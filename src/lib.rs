pub mod collector;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod ignore;
pub mod logger;
pub mod writer;

pub use collector::{run_collector, RunOutcome};
pub use config::CollectorConfig;
pub use discovery::discover;
pub use errors::CollectError;
pub use ignore::should_exclude;
pub use writer::write_contents;
