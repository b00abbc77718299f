//! Splitting the image list into pages

use std::path::PathBuf;
use crate::compose::{compose_page, Page};
use crate::layout::GridLayout;
use crate::progress::BuildProgress;

/// Number of pages needed for `image_count` images at `per_page` images each
pub fn page_count(image_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    image_count.div_ceil(per_page)
}

/// Compose `images` into pages of at most `layout.images_per_page` each
///
/// Order is preserved: batch N holds images `N*k .. (N+1)*k`, and pages are
/// returned in batch order. The last page may hold fewer images.
pub fn paginate(images: &[PathBuf], layout: &GridLayout, progress: &dyn BuildProgress) -> Vec<Page> {
    if layout.images_per_page == 0 {
        return Vec::new();
    }

    let mut pages = Vec::with_capacity(page_count(images.len(), layout.images_per_page));

    for batch in images.chunks(layout.images_per_page) {
        let page = compose_page(batch, layout, progress);
        pages.push(page);

        let page_num = pages.len();
        tracing::debug!(page = page_num, images = batch.len(), "created page");
        progress.on_page_created(page_num, batch.len());
    }

    pages
}
