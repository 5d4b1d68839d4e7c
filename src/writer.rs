use crate::errors::CollectError;
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs::{self as async_fs, File};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, error, info, trace};

/// Prefix placed in front of every relative path in a block header.
pub const PROJECT_FOLDER: &str = "project_folder";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: String,
}

/// What happened to each input file during a write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub processed: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

impl WriteReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[async_trait]
pub trait ContentWriter {
    async fn write_contents(&self, files: &[PathBuf]) -> Result<WriteReport, CollectError>;
}

pub struct FileContentWriter {
    output_path: PathBuf,
    root: PathBuf,
}

impl FileContentWriter {
    pub fn new(output_path: &Path, root: &Path) -> Self {
        FileContentWriter {
            output_path: output_path.to_path_buf(),
            root: root.to_path_buf(),
        }
    }

    async fn render_block(&self, file_path: &Path) -> Result<(String, String), CollectError> {
        let relative = relative_path(file_path, &self.root)?;
        let bytes = async_fs::read(file_path)
            .await
            .map_err(|e| CollectError::FileReadError(file_path.display().to_string(), e.to_string()))?;
        trace!("Read {} bytes from {:?}", bytes.len(), file_path);
        let block = format_block(&relative, &decode_text(&bytes));
        Ok((relative, block))
    }

    fn output_error(&self, err: std::io::Error) -> CollectError {
        CollectError::OutputWriteError(self.output_path.display().to_string(), err.to_string())
    }
}

#[async_trait]
impl ContentWriter for FileContentWriter {
    async fn write_contents(&self, files: &[PathBuf]) -> Result<WriteReport, CollectError> {
        debug!("Opening output file {:?}", self.output_path);
        let file = File::create(&self.output_path).await.map_err(|e| {
            CollectError::OutputOpenError(self.output_path.display().to_string(), e.to_string())
        })?;
        let mut output = BufWriter::new(file);
        let mut report = WriteReport::default();

        for file_path in files {
            match self.render_block(file_path).await {
                Ok((relative, block)) => {
                    output
                        .write_all(block.as_bytes())
                        .await
                        .map_err(|e| self.output_error(e))?;
                    info!("Processed: {}", relative);
                    report.processed.push(file_path.clone());
                }
                Err(e) => {
                    error!("Error processing {}: {}", file_path.display(), e);
                    report.skipped.push(SkippedFile {
                        path: file_path.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        output.flush().await.map_err(|e| self.output_error(e))?;
        Ok(report)
    }
}

/// Writes one block per file to `output_path`, truncating it first.
pub async fn write_contents(
    files: &[PathBuf],
    output_path: &Path,
    root: &Path,
) -> Result<WriteReport, CollectError> {
    let writer = FileContentWriter::new(output_path, root);
    writer.write_contents(files).await
}

/// `path` relative to `root`, joined with `/`.
pub fn relative_path(path: &Path, root: &Path) -> Result<String, CollectError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        CollectError::PathError(format!(
            "{} is not under {}",
            path.display(),
            root.display()
        ))
    })?;

    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();
    Ok(parts.join("/"))
}

/// Lossy UTF-8 decoding with `\r\n` and bare `\r` folded into `\n`.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if !text.contains('\r') {
        return text.into_owned();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

pub fn format_block(relative_path: &str, content: &str) -> String {
    let mut block = String::with_capacity(content.len() + relative_path.len() + 40);
    block.push_str("\n---\n");
    block.push_str(&format!("File: {}/{}\n", PROJECT_FOLDER, relative_path));
    block.push_str("---\n\n");
    block.push_str(content);
    block.push_str("\n\n");
    block
}
