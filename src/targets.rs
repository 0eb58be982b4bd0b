use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;

/// Directory under the working directory holding the images.
pub const IMG_DIR: &str = "img";

/// Inputs, processed in this order.
pub const TARGETS: [&str; 2] = ["home-light.png", "home-dark.png"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Present,
    Missing,
}

pub fn image_dir(cwd: &Path) -> PathBuf {
    cwd.join(IMG_DIR)
}

/// Create `path` and its parents. Failures are logged, not returned.
pub fn ensure_dir(path: &Path) {
    if let Err(e) = fs::create_dir_all(path) {
        warn!("could not create {path:?}: {e}");
    }
}

/// Missing when the path or one of its parents does not exist as a directory;
/// other stat failures are errors.
pub fn presence(path: &Path) -> Result<Presence> {
    match fs::metadata(path) {
        Ok(_) => Ok(Presence::Present),
        Err(e) if is_absent(&e) => Ok(Presence::Missing),
        Err(e) => Err(e).with_context(|| format!("checking {path:?}")),
    }
}

fn is_absent(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}
