//! Image Grid PDF CLI tool
//!
//! A command-line tool for batching a folder of images into a paginated PDF.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

use image_grid_pdf::pdf::extract_metadata;
use image_grid_pdf::{create_pdf_from_images, BuildOptions, BuildOutcome, BuildProgress, GridLayout};

/// Image Grid PDF - Lay out a folder of images as a multi-page PDF
#[derive(Parser)]
#[command(name = "image-grid-pdf")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Build screenshots.pdf from ./images (8 per page, 4 rows x 2 columns)
    image-grid-pdf

    # Build from another folder and open the result
    image-grid-pdf build shots -o shots.pdf --open

    # Six images per page in a 3x2 grid
    image-grid-pdf build shots --rows 3 --cols 2

    # Only five images on each 3x2 page
    image-grid-pdf build shots --rows 3 --cols 2 --per-page 5

    # Show information about a PDF
    image-grid-pdf info screenshots.pdf")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a PDF from the images in a folder (the default command)
    Build(BuildArgs),

    /// Show information about a PDF file
    Info {
        /// PDF file to inspect
        input: PathBuf,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Folder containing png/jpg/jpeg/bmp/gif images
    #[arg(default_value = "images")]
    input: PathBuf,

    /// Output PDF file path
    #[arg(short, long, default_value = "screenshots.pdf")]
    output: PathBuf,

    /// Number of images per page [default: rows x cols]
    #[arg(long)]
    per_page: Option<usize>,

    /// Grid rows per page
    #[arg(long, default_value_t = 4)]
    rows: u32,

    /// Grid columns per page
    #[arg(long, default_value_t = 2)]
    cols: u32,

    /// Gap between images in pixels
    #[arg(long, default_value_t = 2)]
    border: u32,

    /// Open the output file after creation
    #[arg(long)]
    open: bool,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("images"),
            output: PathBuf::from("screenshots.pdf"),
            per_page: None,
            rows: 4,
            cols: 2,
            border: 2,
            open: false,
        }
    }
}

/// Prints build progress to the console
struct ConsoleProgress;

impl BuildProgress for ConsoleProgress {
    fn on_images_found(&self, count: usize) {
        println!("Found {} images", count);
    }

    fn on_image_error(&self, path: &Path, error: &str) {
        eprintln!("Error processing {}: {}", path.display(), error);
    }

    fn on_page_created(&self, page_num: usize, image_count: usize) {
        println!("Created page {} with {} images", page_num, image_count);
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Some(Commands::Build(args)) => cmd_build(args),
        None => cmd_build(BuildArgs::default()),
        Some(Commands::Info { input }) => cmd_info(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Open a file with the system default application
fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()?;
    }
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.display().to_string()])
            .spawn()?;
    }
    Ok(())
}

/// Grid from the CLI arguments; a full grid per page unless `--per-page` is given
fn grid_layout(args: &BuildArgs) -> GridLayout {
    GridLayout {
        rows: args.rows,
        cols: args.cols,
        border: args.border,
        images_per_page: args
            .per_page
            .unwrap_or_else(|| (args.rows as usize).saturating_mul(args.cols as usize)),
        ..Default::default()
    }
}

/// Build a PDF from a folder of images
fn cmd_build(args: BuildArgs) -> Result<()> {
    let layout = grid_layout(&args);
    let options = BuildOptions {
        input_dir: args.input,
        output_path: args.output,
        layout,
    };

    let outcome = create_pdf_from_images(&options, &ConsoleProgress)
        .with_context(|| format!("Failed to build PDF from {}", options.input_dir.display()))?;

    match outcome {
        BuildOutcome::Written { output, pages, skipped, .. } => {
            println!("\nPDF created successfully: {}", output.display());
            println!("Total pages: {}", pages);
            if skipped > 0 {
                println!("Skipped images: {}", skipped);
            }

            if args.open {
                open_file(&output)?;
            }
        }
        BuildOutcome::NoImages => println!("No images found in the folder!"),
        BuildOutcome::NoPages => println!("No pages created!"),
    }

    Ok(())
}

/// Show information about a PDF
fn cmd_info(input: PathBuf) -> Result<()> {
    let metadata = extract_metadata(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    println!("File: {}", input.display());
    println!("Pages: {}", metadata.page_count);

    if let Some((width, height)) = metadata.page_size {
        println!("Page size: {:.2} x {:.2} pt", width, height);
    }
    if let Some(title) = metadata.title {
        println!("Title: {}", title);
    }
    if let Some(producer) = metadata.producer {
        println!("Producer: {}", producer);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_match_default_layout() {
        assert_eq!(grid_layout(&BuildArgs::default()), GridLayout::default());
    }

    #[test]
    fn test_per_page_follows_grid() {
        let args = BuildArgs {
            rows: 3,
            cols: 2,
            ..Default::default()
        };
        let layout = grid_layout(&args);
        assert_eq!(layout.images_per_page, 6);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_explicit_per_page_wins() {
        let cli = Cli::parse_from(["image-grid-pdf", "build", "shots", "--rows", "3", "--per-page", "5"]);
        let Some(Commands::Build(args)) = cli.command else {
            panic!("expected the build command");
        };
        let layout = grid_layout(&args);
        assert_eq!(layout.rows, 3);
        assert_eq!(layout.images_per_page, 5);
        assert_eq!(args.input, PathBuf::from("shots"));
    }
}
