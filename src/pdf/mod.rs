//! PDF output and inspection

pub mod create;
pub mod metadata;

// Re-export commonly used items
pub use create::{write_pdf, WriteOptions};
pub use metadata::{count_pages, extract_metadata, PdfMetadata};
