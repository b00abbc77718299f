//! Progress notifications for a build
//!
//! The library never prints. Callers that want console notices (the CLI does)
//! implement [`BuildProgress`] and pass it to
//! [`create_pdf_from_images`](crate::pipeline::create_pdf_from_images).
//! All methods default to no-ops.

use std::path::Path;

/// Receives events as images are collected, composed and written
pub trait BuildProgress {
    /// Called once after the input directory has been scanned
    fn on_images_found(&self, count: usize) {
        let _ = count;
    }

    /// Called when an image could not be opened or processed and was skipped
    fn on_image_error(&self, path: &Path, error: &str) {
        let _ = (path, error);
    }

    /// Called after each page is composed
    ///
    /// `page_num` is 1-indexed; `image_count` is the batch size including
    /// any images that were skipped.
    fn on_page_created(&self, page_num: usize, image_count: usize) {
        let _ = (page_num, image_count);
    }
}

/// Progress sink that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl BuildProgress for NoProgress {}
