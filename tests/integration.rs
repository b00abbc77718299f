//! Integration tests for the image grid PDF library

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use image_grid_pdf::pdf::{count_pages, extract_metadata};
use image_grid_pdf::{create_pdf_from_images, BuildOptions, BuildOutcome, BuildProgress, GridLayout, NoProgress};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A layout small enough to keep tests fast, with the default 4x2 grid
fn small_layout() -> GridLayout {
    GridLayout {
        page_width: 124,
        page_height: 176,
        ..Default::default()
    }
}

/// Write `count` small solid-color PNGs named 00.png, 01.png, ...
fn write_images(dir: &Path, count: usize) {
    for i in 0..count {
        let shade = (i * 20) as u8;
        RgbImage::from_pixel(16, 12, Rgb([shade, 64, 200]))
            .save(dir.join(format!("{i:02}.png")))
            .expect("Failed to write test image");
    }
}

fn options_for(temp_dir: &TempDir, layout: GridLayout) -> BuildOptions {
    let input_dir = temp_dir.path().join("images");
    fs::create_dir_all(&input_dir).expect("Failed to create input directory");
    BuildOptions {
        input_dir,
        output_path: temp_dir.path().join("screenshots.pdf"),
        layout,
    }
}

#[derive(Default)]
struct RecordingProgress {
    found: RefCell<Option<usize>>,
    errors: RefCell<Vec<PathBuf>>,
    pages: RefCell<Vec<(usize, usize)>>,
}

impl BuildProgress for RecordingProgress {
    fn on_images_found(&self, count: usize) {
        *self.found.borrow_mut() = Some(count);
    }

    fn on_image_error(&self, path: &Path, _error: &str) {
        self.errors.borrow_mut().push(path.to_path_buf());
    }

    fn on_page_created(&self, page_num: usize, image_count: usize) {
        self.pages.borrow_mut().push((page_num, image_count));
    }
}

#[test]
fn test_page_count_matches_batches() {
    for (image_count, expected_pages) in [(1, 1), (8, 1), (9, 2), (10, 2), (17, 3)] {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let options = options_for(&temp_dir, small_layout());
        write_images(&options.input_dir, image_count);

        let outcome = create_pdf_from_images(&options, &NoProgress).expect("Failed to build PDF");
        assert_eq!(
            outcome,
            BuildOutcome::Written {
                output: options.output_path.clone(),
                pages: expected_pages,
                images: image_count,
                skipped: 0,
            }
        );

        let page_count = count_pages(&options.output_path).expect("Failed to count pages");
        assert_eq!(
            page_count, expected_pages,
            "{} images should give {} pages, got {}",
            image_count, expected_pages, page_count
        );
    }
}

#[test]
fn test_ten_images_progress() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let options = options_for(&temp_dir, small_layout());
    write_images(&options.input_dir, 10);

    let progress = RecordingProgress::default();
    create_pdf_from_images(&options, &progress).expect("Failed to build PDF");

    assert_eq!(*progress.found.borrow(), Some(10));
    assert_eq!(*progress.pages.borrow(), vec![(1, 8), (2, 2)]);
    assert!(progress.errors.borrow().is_empty());
}

#[test]
fn test_empty_directory_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let options = options_for(&temp_dir, small_layout());
    fs::write(options.input_dir.join("notes.txt"), b"not an image").unwrap();

    let progress = RecordingProgress::default();
    let outcome = create_pdf_from_images(&options, &progress).expect("Empty input is not an error");

    assert_eq!(outcome, BuildOutcome::NoImages);
    assert!(!options.output_path.exists(), "No PDF should be written");
    assert!(progress.found.borrow().is_none());
}

#[test]
fn test_bad_image_is_skipped() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let options = options_for(&temp_dir, small_layout());
    write_images(&options.input_dir, 8);
    let broken = options.input_dir.join("03.png");
    fs::write(&broken, b"this is not a png").unwrap();

    let progress = RecordingProgress::default();
    let outcome = create_pdf_from_images(&options, &progress).expect("Bad image must not abort");

    match outcome {
        BuildOutcome::Written { pages, images, skipped, .. } => {
            assert_eq!(pages, 1);
            assert_eq!(images, 8);
            assert_eq!(skipped, 1);
        }
        other => panic!("Expected a written PDF, got {:?}", other),
    }
    assert_eq!(*progress.errors.borrow(), vec![broken]);
    assert_eq!(count_pages(&options.output_path).unwrap(), 1);
}

#[test]
fn test_mixed_formats_and_case() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let options = options_for(&temp_dir, small_layout());
    let dir = &options.input_dir;

    RgbImage::from_pixel(10, 10, Rgb([10, 20, 30]))
        .save_with_format(dir.join("PHOTO.JPG"), ImageFormat::Jpeg)
        .unwrap();
    RgbImage::from_pixel(10, 10, Rgb([10, 20, 30]))
        .save(dir.join("scan.bmp"))
        .unwrap();
    RgbaImage::from_pixel(10, 10, Rgba([200, 0, 0, 128]))
        .save(dir.join("overlay.png"))
        .unwrap();
    fs::write(dir.join("notes.txt"), b"skip me").unwrap();

    let progress = RecordingProgress::default();
    let outcome = create_pdf_from_images(&options, &progress).expect("Failed to build PDF");

    assert_eq!(*progress.found.borrow(), Some(3));
    assert!(progress.errors.borrow().is_empty());
    assert!(matches!(outcome, BuildOutcome::Written { pages: 1, images: 3, .. }));
}

#[test]
fn test_default_layout_writes_a4_pages() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let options = options_for(&temp_dir, GridLayout::default());
    write_images(&options.input_dir, 1);

    create_pdf_from_images(&options, &NoProgress).expect("Failed to build PDF");

    let metadata = extract_metadata(&options.output_path).expect("Failed to read metadata");
    assert_eq!(metadata.page_count, 1);
    assert_eq!(metadata.title.as_deref(), Some("screenshots"));
    assert!(metadata.producer.unwrap_or_default().starts_with("image-grid-pdf"));

    let (width, height) = metadata.page_size.expect("Page should have a MediaBox");
    assert!((width - 595.2).abs() < 0.01, "unexpected width {}", width);
    assert!((height - 841.92).abs() < 0.01, "unexpected height {}", height);
}

#[test]
fn test_rerun_is_deterministic() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let options = options_for(&temp_dir, small_layout());
    write_images(&options.input_dir, 5);

    let images = image_grid_pdf::collect::collect_images(&options.input_dir).unwrap();
    let first = image_grid_pdf::paginate::paginate(&images, &options.layout, &NoProgress);
    let second = image_grid_pdf::paginate::paginate(&images, &options.layout, &NoProgress);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.placed, b.placed);
        assert_eq!(a.canvas, b.canvas);
    }
}
