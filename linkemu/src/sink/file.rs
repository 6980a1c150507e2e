// linkemu/src/sink/file.rs

//! Image sink writing one file per print

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::sink::{ImageSink, SinkHandle};
use crate::{Error, Result};

struct OpenFile {
    file: File,
    partial: PathBuf,
    written: u64,
}

/// Writes each print job to its own file in `dir`. Data goes to
/// `print_NNNN.part` and is renamed to `print_NNNN.jpg` on commit.
pub struct FileSink {
    dir: PathBuf,
    next_id: u64,
    open: HashMap<SinkHandle, OpenFile>,
    last_committed: Option<PathBuf>,
    committed_count: u64,
}

impl FileSink {
    /// Create the directory if needed. Numbering continues after the
    /// highest existing `print_NNNN.jpg`.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        let next_id = highest_print_number(&dir)?.map_or(1, |n| n + 1);
        Ok(Self {
            dir,
            next_id,
            open: HashMap::new(),
            last_committed: None,
            committed_count: 0,
        })
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the most recent committed print.
    pub fn last_committed(&self) -> Option<&Path> {
        self.last_committed.as_deref()
    }

    /// Prints committed by this sink.
    pub fn committed_count(&self) -> u64 {
        self.committed_count
    }

    fn final_path(&self, handle: SinkHandle) -> PathBuf {
        self.dir.join(format!("print_{:04}.jpg", handle.0))
    }
}

fn highest_print_number(dir: &Path) -> Result<Option<u64>> {
    let mut highest = None;
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name();
        let number = name
            .to_str()
            .and_then(|n| n.strip_prefix("print_"))
            .and_then(|n| n.strip_suffix(".jpg"))
            .and_then(|n| n.parse::<u64>().ok());
        if let Some(n) = number {
            highest = highest.max(Some(n));
        }
    }
    Ok(highest)
}

impl ImageSink for FileSink {
    fn open(&mut self, declared_size: u32) -> Result<SinkHandle> {
        let handle = SinkHandle(self.next_id);
        self.next_id += 1;
        let partial = self.dir.join(format!("print_{:04}.part", handle.0));
        let file = File::create(&partial)?;
        debug!(
            "file sink: {} opened for {} bytes at {}",
            handle,
            declared_size,
            partial.display()
        );
        self.open.insert(
            handle,
            OpenFile {
                file,
                partial,
                written: 0,
            },
        );
        Ok(handle)
    }

    fn write(&mut self, handle: SinkHandle, _chunk_index: u32, bytes: &[u8]) -> Result<()> {
        let f = self
            .open
            .get_mut(&handle)
            .ok_or_else(|| Error::Sink(format!("unknown handle {}", handle)))?;
        f.file.write_all(bytes)?;
        f.written += bytes.len() as u64;
        Ok(())
    }

    fn finalize(&mut self, handle: SinkHandle, commit: bool) -> Result<()> {
        let OpenFile {
            mut file,
            partial,
            written,
        } = self
            .open
            .remove(&handle)
            .ok_or_else(|| Error::Sink(format!("unknown handle {}", handle)))?;

        if commit {
            file.flush()?;
            drop(file);
            let target = self.final_path(handle);
            fs::rename(&partial, &target)?;
            info!("file sink: saved {} bytes to {}", written, target.display());
            self.last_committed = Some(target);
            self.committed_count += 1;
        } else {
            drop(file);
            if let Err(e) = fs::remove_file(&partial) {
                warn!("file sink: could not remove {}: {}", partial.display(), e);
            }
            debug!("file sink: {} discarded after {} bytes", handle, written);
        }
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        for (_, f) in self.open.drain() {
            let _ = fs::remove_file(&f.partial);
        }
    }
}
