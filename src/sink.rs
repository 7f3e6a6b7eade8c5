//! Artifact sinks.
//!
//! # Design Decisions
//! - A sink only ever receives fully rendered artifacts
//! - Files are replaced by rename so a reader never sees a half-written file
//! - Both files are staged before either is renamed into place

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::pipeline::Artifacts;

/// Errors writing artifacts.
#[derive(Debug, Error)]
#[error("failed to write {path}: {source}")]
pub struct SinkError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Destination for rendered artifacts.
pub trait Sink {
    fn accept(&mut self, artifacts: &Artifacts) -> Result<(), SinkError>;
}

/// Writes the zone and location text to two files.
#[derive(Debug, Clone)]
pub struct FileSink {
    zone_path: PathBuf,
    location_path: PathBuf,
}

impl FileSink {
    pub fn new(zone_path: impl Into<PathBuf>, location_path: impl Into<PathBuf>) -> Self {
        Self {
            zone_path: zone_path.into(),
            location_path: location_path.into(),
        }
    }
}

impl Sink for FileSink {
    fn accept(&mut self, artifacts: &Artifacts) -> Result<(), SinkError> {
        let zone_tmp = stage_file(&self.zone_path, &artifacts.zones)?;
        let location_tmp = match stage_file(&self.location_path, &artifacts.locations) {
            Ok(tmp) => tmp,
            Err(e) => {
                let _ = fs::remove_file(&zone_tmp);
                return Err(e);
            }
        };

        tracing::info!(path = %self.zone_path.display(), "Writing zones");
        if let Err(e) = commit_file(&zone_tmp, &self.zone_path) {
            let _ = fs::remove_file(&zone_tmp);
            let _ = fs::remove_file(&location_tmp);
            return Err(e);
        }

        tracing::info!(path = %self.location_path.display(), "Writing locations");
        commit_file(&location_tmp, &self.location_path).inspect_err(|_| {
            let _ = fs::remove_file(&location_tmp);
        })
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Write `content` next to `path` without touching `path` itself.
fn stage_file(path: &Path, content: &str) -> Result<PathBuf, SinkError> {
    let wrap = |source| SinkError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }

    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, content) {
        let _ = fs::remove_file(&tmp);
        return Err(wrap(e));
    }
    Ok(tmp)
}

fn commit_file(tmp: &Path, path: &Path) -> Result<(), SinkError> {
    fs::rename(tmp, path).map_err(|source| SinkError {
        path: path.to_path_buf(),
        source,
    })
}

/// Keeps the last accepted artifacts in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub last: Option<Artifacts>,
}

impl Sink for MemorySink {
    fn accept(&mut self, artifacts: &Artifacts) -> Result<(), SinkError> {
        self.last = Some(artifacts.clone());
        Ok(())
    }
}

/// Writes both artifacts to a stream, separated by a blank line.
#[derive(Debug)]
pub struct WriterSink<W> {
    label: PathBuf,
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(label: impl Into<PathBuf>, writer: W) -> Self {
        Self {
            label: label.into(),
            writer,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new("<stdout>", std::io::stdout())
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn accept(&mut self, artifacts: &Artifacts) -> Result<(), SinkError> {
        writeln!(self.writer, "{}\n\n{}", artifacts.zones, artifacts.locations)
            .and_then(|_| self.writer.flush())
            .map_err(|source| SinkError {
                path: self.label.clone(),
                source,
            })
    }
}
