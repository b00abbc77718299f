//! Image Grid PDF Library
//!
//! Batches a folder of images into a single paginated PDF.
//! This library provides functionality to:
//! - Collect image files from a directory
//! - Lay images out on fixed-size pages in a rows x columns grid
//! - Write the composed pages as a multi-page PDF
//! - Read basic metadata back from a PDF
//!
//! # Example
//!
//! ```no_run
//! use image_grid_pdf::{create_pdf_from_images, BuildOptions, NoProgress};
//! use std::path::PathBuf;
//!
//! let options = BuildOptions {
//!     input_dir: PathBuf::from("screenshots"),
//!     output_path: PathBuf::from("screenshots.pdf"),
//!     ..Default::default()
//! };
//!
//! create_pdf_from_images(&options, &NoProgress).expect("Failed to build PDF");
//! ```

pub mod error;
pub mod collect;
pub mod compose;
pub mod layout;
pub mod paginate;
pub mod pdf;
pub mod pipeline;
pub mod progress;

// Re-export commonly used items
pub use error::{Error, Result};
pub use compose::{Page, SkippedImage};
pub use layout::GridLayout;
pub use pipeline::{create_pdf_from_images, BuildOptions, BuildOutcome};
pub use progress::{BuildProgress, NoProgress};
