//! End-to-end build: collect, paginate, write

use std::path::PathBuf;
use crate::collect::collect_images;
use crate::error::Result;
use crate::layout::GridLayout;
use crate::paginate::paginate;
use crate::pdf::{write_pdf, WriteOptions};
use crate::progress::BuildProgress;

/// Options for building a PDF from a folder of images
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory scanned for images
    pub input_dir: PathBuf,
    /// Output PDF file path
    pub output_path: PathBuf,
    /// Page grid
    pub layout: GridLayout,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("images"),
            output_path: PathBuf::from("screenshots.pdf"),
            layout: GridLayout::default(),
        }
    }
}

/// How a build finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The PDF was written
    Written {
        output: PathBuf,
        pages: usize,
        images: usize,
        skipped: usize,
    },
    /// The input directory held no recognized image files
    NoImages,
    /// Images were found but no pages came out of them
    NoPages,
}

/// Build a PDF from every image in `options.input_dir`
///
/// Nothing is written when there are no images or no pages; those cases are
/// returned as [`BuildOutcome::NoImages`] and [`BuildOutcome::NoPages`].
/// Images that fail to load are skipped and reported through `progress`.
///
/// # Example
///
/// ```no_run
/// use image_grid_pdf::{create_pdf_from_images, BuildOptions, BuildOutcome, NoProgress};
///
/// let outcome = create_pdf_from_images(&BuildOptions::default(), &NoProgress)
///     .expect("Failed to build PDF");
///
/// if let BuildOutcome::Written { pages, .. } = outcome {
///     println!("{} pages", pages);
/// }
/// ```
pub fn create_pdf_from_images(
    options: &BuildOptions,
    progress: &dyn BuildProgress,
) -> Result<BuildOutcome> {
    options.layout.validate()?;

    let images = collect_images(&options.input_dir)?;
    if images.is_empty() {
        return Ok(BuildOutcome::NoImages);
    }
    progress.on_images_found(images.len());

    let pages = paginate(&images, &options.layout, progress);
    if pages.is_empty() {
        return Ok(BuildOutcome::NoPages);
    }

    let write_options = WriteOptions {
        dpi: options.layout.dpi,
        title: options
            .output_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned()),
    };
    write_pdf(&pages, &options.output_path, &write_options)?;

    Ok(BuildOutcome::Written {
        output: options.output_path.clone(),
        pages: pages.len(),
        images: images.len(),
        skipped: pages.iter().map(|page| page.skipped.len()).sum(),
    })
}
