use crate::config::CollectorConfig;
use crate::discovery::{FileDiscoverer, SourceKind};
use crate::errors::CollectError;
use crate::ignore::ExclusionFilter;
use crate::writer::{ContentWriter, FileContentWriter, WriteReport};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing matched; no output file was created.
    NoFiles,
    Complete(WriteReport),
    /// The output was written but some files were skipped.
    Partial(WriteReport),
}

impl RunOutcome {
    pub fn report(&self) -> Option<&WriteReport> {
        match self {
            RunOutcome::NoFiles => None,
            RunOutcome::Complete(report) | RunOutcome::Partial(report) => Some(report),
        }
    }
}

pub async fn run_collector(config: &CollectorConfig) -> Result<RunOutcome, CollectError> {
    info!("Root path: {}", config.root.display());
    info!(
        "Searching for Java/Kotlin/Gradle files in: {}",
        config.search_paths.join(" ")
    );
    info!("Output will be written to: {}", config.output.display());

    let discoverer = FileDiscoverer::new(ExclusionFilter::default())?;
    let files = discoverer.discover(&config.search_paths, &config.root);

    if files.is_empty() {
        info!("No Java, Kotlin, or Gradle files found!");
        return Ok(RunOutcome::NoFiles);
    }

    info!("Found {} files to process", files.len());
    for (kind, count) in count_by_kind(&discoverer, &files) {
        debug!("{}: {} files", kind, count);
    }

    let writer = FileContentWriter::new(&config.output_path(), &config.root);
    let report = writer.write_contents(&files).await?;

    info!(
        "Java/Kotlin/Gradle contents have been written to {}",
        config.output.display()
    );

    if report.is_complete() {
        Ok(RunOutcome::Complete(report))
    } else {
        warn!(
            "{} of {} files could not be read and were skipped",
            report.skipped.len(),
            files.len()
        );
        Ok(RunOutcome::Partial(report))
    }
}

fn count_by_kind(discoverer: &FileDiscoverer, files: &[PathBuf]) -> BTreeMap<SourceKind, usize> {
    let mut counts = BTreeMap::new();
    for file in files {
        if let Some(kind) = discoverer.classify(file) {
            *counts.entry(kind).or_insert(0) += 1;
        }
    }
    counts
}
