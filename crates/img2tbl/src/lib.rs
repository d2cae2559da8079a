//! # img2tbl
//!
//! Turn a raster image into an HTML document that draws the image with one
//! table cell per pixel. Every distinct color becomes one CSS class.
//!
//! ## Quick Start
//!
//! ### Converting an image file
//!
//! ```ignore
//! use img2tbl::{tablify, TablifyOptions};
//!
//! let opts = TablifyOptions {
//!     max_size: Some(64),
//!     ..TablifyOptions::default()
//! };
//! let html = tablify("logo.png", &opts)?;
//! std::fs::write("logo.html", html)?;
//! ```
//!
//! ### Converting an in-memory image
//!
//! ```ignore
//! use img2tbl::{tablify_image, TablifyOptions};
//!
//! let img = image::DynamicImage::new_rgb8(2, 2);
//! let doc = tablify_image(&img, &TablifyOptions::default());
//! assert_eq!(doc.colors.len(), 1);
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod color_table;
pub mod output;
pub mod resize;
pub mod tablify;
pub mod template;

pub use color_table::{Color, ColorTable};
pub use output::output_file_name;
pub use resize::target_size;
pub use tablify::{render_bitmap, tablify, tablify_image, Document, TablifyOptions};
pub use template::DOCUMENT_TEMPLATE;

/// Errors that can occur while converting an image.
#[derive(Debug, Error)]
pub enum TablifyError {
    /// The input file could not be opened or read
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input could not be recognized or decoded as an image
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for tablify operations.
pub type Result<T> = core::result::Result<T, TablifyError>;
