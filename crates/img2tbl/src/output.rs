use std::path::{Path, PathBuf};

/// Derive the output file name for an input image.
///
/// Takes the base name of `input` (everything after the last separator,
/// so a trailing separator gives an empty base name and `..` is kept
/// as-is), drops everything from its last `.` on and appends `.html`.
/// The directory part of `input` is discarded, so the result is relative
/// to the current working directory. A base name without any `.` yields
/// `.html`.
pub fn output_file_name<P: AsRef<Path>>(input: P) -> PathBuf {
    let full = input.as_ref().to_string_lossy();
    let base = full.rsplit(std::path::is_separator).next().unwrap_or_default();
    let stem = match base.rfind('.') {
        Some(dot) => &base[..dot],
        None => "",
    };
    PathBuf::from(format!("{stem}.html"))
}
