use crate::errors::CollectError;
use crate::ignore::ExclusionFilter;
use glob::Pattern;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// The kinds of source files picked up by discovery, keyed by file name glob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    Java,
    Kotlin,
    Gradle,
    GradleKotlinDsl,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Java,
        SourceKind::Kotlin,
        SourceKind::Gradle,
        SourceKind::GradleKotlinDsl,
    ];

    pub fn glob(&self) -> &'static str {
        match self {
            SourceKind::Java => "*.java",
            SourceKind::Kotlin => "*.kt",
            SourceKind::Gradle => "*.gradle",
            SourceKind::GradleKotlinDsl => "*.gradle.kts",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Java => "Java",
            SourceKind::Kotlin => "Kotlin",
            SourceKind::Gradle => "Gradle",
            SourceKind::GradleKotlinDsl => "Gradle Kotlin DSL",
        };
        f.write_str(name)
    }
}

pub struct FileDiscoverer {
    patterns: Vec<(SourceKind, Pattern)>,
    filter: ExclusionFilter,
}

impl FileDiscoverer {
    pub fn new(filter: ExclusionFilter) -> Result<Self, CollectError> {
        let patterns = SourceKind::ALL
            .into_iter()
            .map(|kind| -> Result<_, CollectError> { Ok((kind, Pattern::new(kind.glob())?)) })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FileDiscoverer { patterns, filter })
    }

    /// Finds every tracked source file beneath `root/search_path` for each
    /// search path, sorted by path bytes. Overlapping search paths yield
    /// duplicates.
    pub fn discover<S: AsRef<str>>(&self, search_paths: &[S], root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for search_path in search_paths {
            let full_path = root.join(search_path.as_ref());
            if !full_path.exists() {
                warn!(
                    "Path {} does not exist, skipping...",
                    full_path.display()
                );
                continue;
            }

            debug!("Searching {:?}", full_path);
            self.collect_from(&full_path, root, &mut files);
        }

        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        files
    }

    /// Classifies a path by its file name. Globs are anchored, so
    /// `build.gradle.kts` is only ever `GradleKotlinDsl`.
    pub fn classify<P: AsRef<Path>>(&self, path: P) -> Option<SourceKind> {
        let file_name = path.as_ref().file_name()?.to_string_lossy();
        self.patterns
            .iter()
            .find(|(_, pattern)| pattern.matches(&file_name))
            .map(|(kind, _)| *kind)
    }

    /// Exclusion rules only see the part of the path below `root`.
    fn collect_from(&self, dir: &Path, root: &Path, files: &mut Vec<PathBuf>) {
        for entry in WalkDir::new(dir).min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Error walking {}: {}", dir.display(), e);
                    continue;
                }
            };

            let kind = match self.classify(entry.path()) {
                Some(kind) => kind,
                None => continue,
            };

            let path = entry.path();
            if !path.is_file() {
                trace!("Skipping non-file {:?}", path);
                continue;
            }
            if self.filter.should_exclude(path.strip_prefix(root).unwrap_or(path)) {
                continue;
            }

            trace!("Found {} file {:?}", kind, path);
            files.push(path.to_path_buf());
        }
    }
}

/// Discovers files with the default exclusion rules.
pub fn discover<S: AsRef<str>>(
    search_paths: &[S],
    root: &Path,
) -> Result<Vec<PathBuf>, CollectError> {
    let discoverer = FileDiscoverer::new(ExclusionFilter::default())?;
    Ok(discoverer.discover(search_paths, root))
}
