//! Page grid calculations
//!
//! All page geometry is in pixels with the origin at the top-left corner of
//! the page, which is how the composited canvas is addressed. Conversion to
//! PDF points only happens when a page is written out.

use crate::error::{Error, Result};

/// A4 width in pixels at 300 DPI
pub const A4_WIDTH_PX: u32 = 2480;
/// A4 height in pixels at 300 DPI
pub const A4_HEIGHT_PX: u32 = 3508;
/// Resolution the default page size is expressed in
pub const DEFAULT_DPI: u32 = 300;

/// Convert a pixel count rendered at `dpi` to PDF points (1/72 inch)
pub fn px_to_pt(pixels: u32, dpi: u32) -> f32 {
    pixels as f32 * 72.0 / dpi as f32
}

/// Where one image of a batch lands on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPlacement {
    /// Grid row (0-based, top to bottom)
    pub row: u32,
    /// Grid column (0-based, left to right)
    pub col: u32,
    /// Left edge of the cell in pixels
    pub x: u32,
    /// Top edge of the cell in pixels
    pub y: u32,
}

/// Grid configuration for composing pages
///
/// Images fill the grid in row-major order. Every image is stretched to
/// `cell - border` in both dimensions; the border gap is only inserted on
/// the top edge of cells below the first row and the left edge of cells
/// right of the first column, so the outer page edge has no border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Page width in pixels
    pub page_width: u32,
    /// Page height in pixels
    pub page_height: u32,
    /// Number of grid rows
    pub rows: u32,
    /// Number of grid columns
    pub cols: u32,
    /// Gap between adjacent cells in pixels
    pub border: u32,
    /// Maximum number of images placed on one page
    pub images_per_page: usize,
    /// Resolution used when writing the page into the PDF
    pub dpi: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH_PX,
            page_height: A4_HEIGHT_PX,
            rows: 4,
            cols: 2,
            border: 2,
            images_per_page: 8,
            dpi: DEFAULT_DPI,
        }
    }
}

impl GridLayout {
    /// Width and height of one grid cell
    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_width(), self.cell_height())
    }

    /// Width of one grid cell
    pub fn cell_width(&self) -> u32 {
        self.page_width / self.cols
    }

    /// Height of one grid cell
    pub fn cell_height(&self) -> u32 {
        self.page_height / self.rows
    }

    /// Number of cells on a page
    pub fn capacity(&self) -> usize {
        (self.rows as usize).saturating_mul(self.cols as usize)
    }

    /// Size every image is resized to before pasting
    pub fn target_size(&self) -> (u32, u32) {
        let (width, height) = self.cell_size();
        (width - self.border, height - self.border)
    }

    /// Cell for the image at batch index `idx`
    pub fn cell_position(&self, idx: usize) -> CellPlacement {
        let idx = idx as u32;
        let row = idx / self.cols;
        let col = idx % self.cols;
        CellPlacement {
            row,
            col,
            x: col * self.cell_width(),
            y: row * self.cell_height(),
        }
    }

    /// Top-left pixel where the resized image at batch index `idx` is pasted
    pub fn paste_position(&self, idx: usize) -> (u32, u32) {
        let cell = self.cell_position(idx);
        let x = cell.x + if cell.col > 0 { self.border } else { 0 };
        let y = cell.y + if cell.row > 0 { self.border } else { 0 };
        (x, y)
    }

    /// Page width and height in points at the configured resolution
    pub fn page_size_pt(&self) -> (f32, f32) {
        (
            px_to_pt(self.page_width, self.dpi),
            px_to_pt(self.page_height, self.dpi),
        )
    }

    /// Check that the grid can actually hold `images_per_page` images
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidLayout(format!(
                "grid must have at least one row and column (got {}x{})",
                self.rows, self.cols
            )));
        }
        if self.images_per_page == 0 {
            return Err(Error::InvalidLayout(
                "images per page must be at least 1".to_string(),
            ));
        }
        if self.images_per_page > self.capacity() {
            return Err(Error::InvalidLayout(format!(
                "{} images per page do not fit a {}x{} grid",
                self.images_per_page, self.rows, self.cols
            )));
        }
        if self.border >= self.cell_width() || self.border >= self.cell_height() {
            return Err(Error::InvalidLayout(format!(
                "border of {}px leaves no room in a {}x{} cell",
                self.border,
                self.cell_width(),
                self.cell_height()
            )));
        }
        if self.dpi == 0 {
            return Err(Error::InvalidLayout("DPI must be positive".to_string()));
        }
        Ok(())
    }
}
