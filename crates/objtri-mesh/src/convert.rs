use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use objtri_core::{ObjTriError, Result};

use crate::triangulate::{triangulate_str, ConversionStats};

/// Triangulate the OBJ file at `source` into `target`.
///
/// The source is read completely and closed before `target` is created or
/// truncated, so a missing source never leaves a target behind and
/// `source == target` is safe. If writing fails, a target file this call
/// created is removed; a pre-existing file, symlink or device is left alone.
pub fn convert(source: impl AsRef<Path>, target: impl AsRef<Path>) -> Result<ConversionStats> {
    let source = source.as_ref();
    let target = target.as_ref();

    let input = fs::read_to_string(source).map_err(|e| ObjTriError::reading(source, e))?;
    let (output, stats) = triangulate_str(&input);
    drop(input);

    write_target(target, &output)?;

    tracing::debug!(
        source = %source.display(),
        target = %target.display(),
        lines_read = stats.lines_read,
        lines_written = stats.lines_written,
        quads_split = stats.quads_split,
        "converted"
    );
    Ok(stats)
}

fn write_target(target: &Path, output: &str) -> Result<()> {
    // Only a file this call brings into existence may be removed on failure.
    let existed = fs::symlink_metadata(target).is_ok();
    let file = File::create(target).map_err(|e| ObjTriError::writing(target, e))?;
    let written = write_output(file, output);
    finish_target(target, existed, written)
}

fn write_output(file: File, output: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    writer.write_all(output.as_bytes())?;
    writer.flush()
}

fn finish_target(target: &Path, existed: bool, written: io::Result<()>) -> Result<()> {
    let Err(e) = written else {
        return Ok(());
    };
    if !existed {
        discard_partial(target);
    }
    Err(ObjTriError::writing(target, e))
}

/// Remove a half-written target, but never a symlink, device or directory.
fn discard_partial(target: &Path) {
    let is_regular = fs::symlink_metadata(target)
        .map(|meta| meta.file_type().is_file())
        .unwrap_or(false);
    if !is_regular {
        return;
    }
    if let Err(cleanup) = fs::remove_file(target) {
        tracing::warn!(
            path = %target.display(),
            error = %cleanup,
            "could not remove partial target"
        );
    }
}
