// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::DirBuilder;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::Error;
use crate::append::Append;

/// A builder to configure and create a [`SingleFile`] appender.
///
/// The directory is created if missing. An existing log file is opened for append; a missing
/// one is created. On unix, both the directory and a newly created file get `mode`, which
/// defaults to `0o700` and is subject to the process umask.
#[derive(Debug)]
pub struct SingleFileBuilder {
    dir: PathBuf,
    filename: String,
    mode: u32,
}

impl SingleFileBuilder {
    /// Create a new builder for `<dir>/<filename>`.
    pub fn new(dir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            filename: filename.into(),
            mode: 0o700,
        }
    }

    /// Sets the permission bits used when creating the directory and the file.
    ///
    /// Ignored on non-unix platforms.
    pub fn mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Return the path the appender writes to.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    /// Build the [`SingleFile`] appender.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, or the log file cannot be created
    /// or opened.
    pub fn build(self) -> Result<SingleFile, Error> {
        if !self.dir.exists() {
            let mut builder = DirBuilder::new();
            builder.recursive(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::DirBuilderExt;
                builder.mode(self.mode);
            }
            builder.create(&self.dir).map_err(|err| {
                Error::from_path_io_error("failed to create log directory", &self.dir, err)
            })?;
        }

        let path = self.path();
        let file = if path.exists() {
            open_options(self.mode)
                .open(&path)
                .map_err(|err| Error::from_path_io_error("failed to open log file", &path, err))?
        } else {
            open_options(self.mode)
                .create(true)
                .open(&path)
                .map_err(|err| Error::from_path_io_error("failed to create log file", &path, err))?
        };

        Ok(SingleFile {
            path,
            file: Mutex::new(file),
        })
    }
}

fn open_options(mode: u32) -> OpenOptions {
    let mut options = OpenOptions::new();
    options.append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    options
}

/// An appender that writes log lines to a single file.
///
/// # Examples
///
/// ```no_run
/// use linelog::append::SingleFileBuilder;
///
/// let file = SingleFileBuilder::new("/var/log/my_service", "app.log")
///     .build()
///     .unwrap();
///
/// let logger = linelog::builder().append(file).build();
/// logger.error().msg("This log will be written to a file.");
/// ```
#[derive(Debug)]
pub struct SingleFile {
    path: PathBuf,
    file: Mutex<File>,
}

impl SingleFile {
    /// Return the path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Append for SingleFile {
    fn append(&self, line: &[u8]) -> Result<(), Error> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(line).map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.flush().map_err(Error::from_io_error)
    }
}
