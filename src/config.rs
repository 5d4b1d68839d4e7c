use crate::errors::CollectError;
use std::path::{Component, Path, PathBuf};

/// Environment variable naming the project root.
pub const ROOT_ENV_VAR: &str = "MELOS_ROOT_PATH";
pub const DEFAULT_SEARCH_PATH: &str = "android";
pub const DEFAULT_OUTPUT: &str = "all_java_kotlin_gradle_contents.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    pub root: PathBuf,
    pub search_paths: Vec<String>,
    pub output: PathBuf,
}

impl CollectorConfig {
    /// Builds a config from a whitespace separated list of search paths.
    /// A missing root falls back to the current directory.
    pub fn new(
        root: Option<PathBuf>,
        search_paths: &str,
        output: impl Into<PathBuf>,
    ) -> Result<Self, CollectError> {
        let root = resolve_root(root)?;
        let search_paths = split_search_paths(search_paths);
        let output = output.into();
        if output.as_os_str().is_empty() {
            return Err(CollectError::ConfigError(
                "output file name must not be empty".to_string(),
            ));
        }

        Ok(CollectorConfig {
            root,
            search_paths,
            output,
        })
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }
}

pub fn split_search_paths(search_paths: &str) -> Vec<String> {
    search_paths.split_whitespace().map(str::to_owned).collect()
}

/// Absolute form of `root` (or of the current directory), without resolving
/// symlinks.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf, CollectError> {
    let cwd = std::env::current_dir().map_err(|e| {
        CollectError::ConfigError(format!("cannot determine current directory: {}", e))
    })?;
    let root = match root {
        Some(root) if root.is_absolute() => root,
        Some(root) => cwd.join(root),
        None => cwd,
    };
    Ok(strip_cur_dir(&root))
}

fn strip_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
