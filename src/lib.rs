//! Turns the site's PNG hero images into AVIF and WebP siblings.
//!
//! Each target in [`targets::TARGETS`] under the image directory is trimmed of
//! its uniform border and then written out twice: a lossy AVIF and a lossless
//! WebP. Missing targets are skipped; the first conversion failure stops the run.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;

pub mod convert;
pub mod targets;
pub mod trim;

pub use convert::{convert_one, Conversion, EncodeSettings};
pub use targets::{Presence, TARGETS};

pub const PREFIX: &str = "[optimize-images]";

#[derive(Debug, Default)]
pub struct Summary {
    pub processed: Vec<(PathBuf, Conversion)>,
    pub skipped: Vec<String>,
}

/// Process `names` under `dir` in order, reporting progress to `out` and skips to `warn`.
pub fn run(
    dir: &Path,
    names: &[&str],
    settings: &EncodeSettings,
    out: &mut impl Write,
    warn: &mut impl Write,
) -> Result<Summary> {
    targets::ensure_dir(dir);
    let mut summary = Summary::default();

    for &name in names {
        let input = dir.join(name);
        if targets::presence(&input)? == Presence::Missing {
            writeln!(warn, "{PREFIX} Skip missing: {name}")?;
            summary.skipped.push(name.to_string());
            continue;
        }

        writeln!(out, "{PREFIX} Processing {name}…")?;
        let res = convert_one(&input, settings)?;
        writeln!(
            out,
            "{PREFIX} Wrote {} and {}",
            file_name(&res.avif),
            file_name(&res.webp)
        )?;
        summary.processed.push((input, res));
    }

    if summary.processed.is_empty() {
        writeln!(out, "{PREFIX} No targets processed")?;
    }
    debug!(
        "{} processed, {} skipped",
        summary.processed.len(),
        summary.skipped.len()
    );
    Ok(summary)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
