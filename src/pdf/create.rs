//! Multi-page PDF creation from composed pages using lopdf

use std::path::Path;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use crate::compose::Page;
use crate::error::{Error, Result};
use crate::layout::{px_to_pt, DEFAULT_DPI};

/// Name the page image is registered under in each page's resources
const PAGE_IMAGE_NAME: &str = "Im0";

/// Options for writing pages to a PDF
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Resolution the page bitmaps are placed at
    pub dpi: u32,
    /// Document title stored in the Info dictionary
    pub title: Option<String>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            title: None,
        }
    }
}

/// Write `pages` to `output` as a single PDF, one bitmap per page
///
/// Each page bitmap becomes an RGB image XObject drawn over the whole page.
/// The MediaBox is the bitmap size converted to points at `options.dpi`, so
/// a 2480x3508 page at 300 DPI comes out as A4.
///
/// # Example
///
/// ```no_run
/// use image_grid_pdf::compose::blank_page;
/// use image_grid_pdf::layout::GridLayout;
/// use image_grid_pdf::pdf::{write_pdf, WriteOptions};
/// use image_grid_pdf::Page;
/// use std::path::Path;
///
/// let page = Page {
///     canvas: blank_page(&GridLayout::default()),
///     placed: vec![],
///     skipped: vec![],
/// };
///
/// write_pdf(&[page], Path::new("blank.pdf"), &WriteOptions::default())
///     .expect("Failed to write PDF");
/// ```
pub fn write_pdf(pages: &[Page], output: &Path, options: &WriteOptions) -> Result<()> {
    if pages.is_empty() {
        return Err(Error::General("No pages to write".to_string()));
    }
    if options.dpi == 0 {
        return Err(Error::General("DPI must be positive".to_string()));
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut page_ids: Vec<ObjectId> = Vec::with_capacity(pages.len());
    for page in pages {
        let page_id = add_page(&mut doc, pages_id, page, options.dpi)?;
        page_ids.push(page_id);
    }

    // Create Pages object
    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    let mut pages_object = Dictionary::new();
    pages_object.set("Type", Object::Name(b"Pages".to_vec()));
    pages_object.set("Count", Object::Integer(page_ids.len() as i64));
    pages_object.set("Kids", Object::Array(kids));
    doc.objects.insert(pages_id, Object::Dictionary(pages_object));

    // Create Catalog
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut info = Dictionary::new();
    if let Some(title) = &options.title {
        info.set("Title", Object::string_literal(title.as_str()));
    }
    info.set(
        "Producer",
        Object::string_literal(concat!("image-grid-pdf ", env!("CARGO_PKG_VERSION"))),
    );
    let info_id = doc.add_object(info);
    doc.trailer.set("Info", Object::Reference(info_id));

    // Raw RGB is large; flate it before saving
    doc.compress();
    doc.save(output)?;

    tracing::info!(pages = pages.len(), output = %output.display(), "wrote PDF");

    Ok(())
}

/// Add one page (image XObject, content stream, page dictionary) to `doc`
fn add_page(doc: &mut Document, pages_id: ObjectId, page: &Page, dpi: u32) -> Result<ObjectId> {
    let (width_px, height_px) = page.canvas.dimensions();
    let width_pt = px_to_pt(width_px, dpi);
    let height_pt = px_to_pt(height_px, dpi);

    let mut image_dict = Dictionary::new();
    image_dict.set("Type", Object::Name(b"XObject".to_vec()));
    image_dict.set("Subtype", Object::Name(b"Image".to_vec()));
    image_dict.set("Width", Object::Integer(width_px as i64));
    image_dict.set("Height", Object::Integer(height_px as i64));
    image_dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    image_dict.set("BitsPerComponent", Object::Integer(8));
    let image_id = doc.add_object(Stream::new(image_dict, page.canvas.as_raw().clone()));

    // Scale the unit image square up to the full page
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Real(width_pt),
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(height_pt),
                    Object::Integer(0),
                    Object::Integer(0),
                ],
            ),
            Operation::new("Do", vec![Object::Name(PAGE_IMAGE_NAME.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));

    let mut xobjects = Dictionary::new();
    xobjects.set(PAGE_IMAGE_NAME, Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(pages_id));
    page_dict.set(
        "MediaBox",
        vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width_pt),
            Object::Real(height_pt),
        ],
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(doc.add_object(page_dict))
}
