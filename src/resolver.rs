use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// What the root path turned out to be.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    /// Direct file entries, in directory-listing order.
    Directory(Vec<PathBuf>),
}

/// 1-based position of a file within a directory batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub total: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct QueuedFile {
    pub path: PathBuf,
    pub position: Option<Position>,
}

/// Classify `path`. Subdirectories are not descended into and entries are
/// kept in the order `read_dir` yields them.
pub fn resolve(path: &Path) -> Result<Input> {
    if path.is_file() {
        debug!("resolved {} as a single file", path.display());
        return Ok(Input::File(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(Error::InvalidRootPath(path.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry_path = entry?.path();
        if entry_path.is_file() {
            files.push(entry_path);
        }
    }
    debug!("resolved {} as a directory with {} files", path.display(), files.len());
    Ok(Input::Directory(files))
}

impl Input {
    pub fn queue(self) -> Vec<QueuedFile> {
        match self {
            Input::File(path) => vec![QueuedFile {
                path,
                position: None,
            }],
            Input::Directory(files) => {
                let total = files.len();
                files
                    .into_iter()
                    .enumerate()
                    .map(|(i, path)| QueuedFile {
                        path,
                        position: Some(Position {
                            index: i + 1,
                            total,
                        }),
                    })
                    .collect()
            }
        }
    }
}
