//! Append-only file output shared by all threads.

use super::{Message, Output};
use crate::internal;
use crate::line::EOL;
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Lines are appended under a mutex, one `write_all` each.
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileOutput {
    /// Opens `path` for appending, creating it and its parent directories.
    /// A leading `~` is expanded.
    ///
    /// # Errors
    /// [`crate::Error::OutputOpen`] when the directory or file can't be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = expand(path.as_ref());
        let open_err = |source| crate::Error::OutputOpen {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(open_err)?;
            internal::debug(format_args!("created directory {}", parent.display()));
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(open_err)?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn expand(path: &Path) -> PathBuf {
    path.to_str().map_or_else(
        || path.to_path_buf(),
        |s| PathBuf::from(shellexpand::tilde(s).as_ref()),
    )
}

impl Output for FileOutput {
    fn write(&self, msg: &mut Message<'_, '_>) -> Result<(), crate::Error> {
        let line = msg.terminate(EOL);
        // write_all retries on EINTR
        self.file.lock().write_all(line)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.file.lock().flush()?;
        Ok(())
    }
}
