use std::borrow::Cow;
use std::path::{Component, Path};
use tracing::trace;

/// A single exclusion check applied to a discovered file path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionRule {
    /// Some directory component of the path equals the name.
    DirectoryNamed(&'static str),
    /// The file name starts with the prefix.
    FileNameStartsWith(&'static str),
    /// The file name equals the name, at any depth.
    FileNameEquals(&'static str),
}

/// Build output, generated sources, wrapper scripts, example folders and
/// generated resource classes.
pub const DEFAULT_EXCLUSIONS: &[ExclusionRule] = &[
    ExclusionRule::DirectoryNamed("build"),
    ExclusionRule::DirectoryNamed("generated"),
    ExclusionRule::DirectoryNamed(".gradle"),
    ExclusionRule::FileNameStartsWith("gradlew"),
    ExclusionRule::FileNameStartsWith("gradle-wrapper."),
    ExclusionRule::DirectoryNamed("example"),
    ExclusionRule::FileNameEquals("R.java"),
    ExclusionRule::FileNameEquals("R.kt"),
    ExclusionRule::FileNameEquals("BuildConfig.java"),
    ExclusionRule::FileNameEquals("BuildConfig.kt"),
    ExclusionRule::FileNameEquals("Manifest.java"),
];

impl ExclusionRule {
    pub fn matches(&self, path: &Path) -> bool {
        let mut names: Vec<Cow<'_, str>> = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy()),
                _ => None,
            })
            .collect();
        let file_name = match names.pop() {
            Some(name) => name,
            None => return false,
        };

        match *self {
            ExclusionRule::DirectoryNamed(dir) => names.iter().any(|name| name == dir),
            ExclusionRule::FileNameStartsWith(prefix) => file_name.starts_with(prefix),
            ExclusionRule::FileNameEquals(name) => file_name == name,
        }
    }
}

pub struct ExclusionFilter {
    rules: Vec<ExclusionRule>,
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        ExclusionFilter::new(DEFAULT_EXCLUSIONS.to_vec())
    }
}

impl ExclusionFilter {
    pub fn new(rules: Vec<ExclusionRule>) -> Self {
        ExclusionFilter { rules }
    }

    pub fn should_exclude<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        match self.rules.iter().find(|rule| rule.matches(path)) {
            Some(rule) => {
                trace!("Excluding {:?} by {:?}", path, rule);
                true
            }
            None => false,
        }
    }
}

/// Checks a path against [`DEFAULT_EXCLUSIONS`].
pub fn should_exclude<P: AsRef<Path>>(path: P) -> bool {
    ExclusionFilter::default().should_exclude(path)
}
