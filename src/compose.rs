//! Page composition
//!
//! Turns one batch of image paths into one fixed-size RGB canvas.

use std::path::{Path, PathBuf};
use image::imageops::{self, FilterType};
use image::{ImageReader, Rgb, RgbImage};
use crate::error::Result;
use crate::layout::GridLayout;
use crate::progress::BuildProgress;

/// Background color of every page
pub const PAGE_BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// An image that was left out of its cell
#[derive(Debug, Clone)]
pub struct SkippedImage {
    /// Position of the image within its batch
    pub index: usize,
    /// Path of the image file
    pub path: PathBuf,
    /// Why it could not be placed
    pub reason: String,
}

/// One rendered page
#[derive(Debug, Clone)]
pub struct Page {
    /// The composited page bitmap, always the full layout size
    pub canvas: RgbImage,
    /// Batch indices of the images that were placed
    pub placed: Vec<usize>,
    /// Images that failed and left their cell blank
    pub skipped: Vec<SkippedImage>,
}

impl Page {
    /// Number of images the page was composed from, placed or not
    pub fn batch_len(&self) -> usize {
        self.placed.len() + self.skipped.len()
    }
}

/// Allocate a blank white page for `layout`
pub fn blank_page(layout: &GridLayout) -> RgbImage {
    RgbImage::from_pixel(layout.page_width, layout.page_height, PAGE_BACKGROUND)
}

/// Compose one page from `batch`
///
/// Images are stretched to the cell size (aspect ratio is not preserved) with
/// a Lanczos filter and pasted in row-major order. An image that cannot be
/// opened is reported and skipped; its cell stays white.
pub fn compose_page(
    batch: &[PathBuf],
    layout: &GridLayout,
    progress: &dyn BuildProgress,
) -> Page {
    let mut canvas = blank_page(layout);
    let mut placed = Vec::with_capacity(batch.len());
    let mut skipped = Vec::new();

    for (idx, path) in batch.iter().enumerate() {
        match place_image(&mut canvas, path, idx, layout) {
            Ok(()) => placed.push(idx),
            Err(e) => {
                let reason = e.to_string();
                tracing::warn!(path = %path.display(), error = %reason, "skipping image");
                progress.on_image_error(path, &reason);
                skipped.push(SkippedImage {
                    index: idx,
                    path: path.clone(),
                    reason,
                });
            }
        }
    }

    Page {
        canvas,
        placed,
        skipped,
    }
}

fn place_image(canvas: &mut RgbImage, path: &Path, idx: usize, layout: &GridLayout) -> Result<()> {
    let (width, height) = layout.target_size();
    // Sniff the format from content so a mislabeled file still decodes
    let resized = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .resize_exact(width, height, FilterType::Lanczos3)
        .to_rgb8();

    let (x, y) = layout.paste_position(idx);
    tracing::debug!(
        path = %path.display(),
        idx,
        x,
        y,
        "placing image"
    );
    imageops::replace(canvas, &resized, x as i64, y as i64);

    Ok(())
}
