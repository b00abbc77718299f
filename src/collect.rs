//! Image discovery
//!
//! Lists a single directory (no recursion) and keeps the files whose name
//! ends with a recognized image extension. Files are not decoded here, so a
//! corrupt `.png` is still collected and only skipped at composition time.

use std::fs;
use std::path::{Path, PathBuf};
use crate::error::{Error, Result};

/// Extensions recognized as images, compared case-insensitively
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Whether the file name ends with `.` plus one of [`IMAGE_EXTENSIONS`]
///
/// Matches on the name's tail rather than [`Path::extension`], so a file
/// named just `.png` counts too.
pub fn is_supported_image(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    let name = name.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| {
        name.strip_suffix(ext)
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

/// Collect image files from `dir`, sorted by full path
///
/// An empty result is not an error; the caller decides how to report it.
/// A missing directory is.
pub fn collect_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort();
    tracing::info!(count = images.len(), dir = %dir.display(), "collected images");

    Ok(images)
}
