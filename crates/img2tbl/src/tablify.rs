//! Image to HTML table conversion.
//!
//! The bitmap is scanned in raster order (top to bottom, left to right).
//! Every pixel becomes a `<td>` tagged with the class of its color, and
//! the [`ColorTable`] collected along the way becomes the stylesheet.

use std::fmt::Write;
use std::ops::Deref;
use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageReader, Pixel};

use crate::color_table::{Color, ColorTable};
use crate::{resize, template, Result, TablifyError};

/// Options controlling how an image is turned into a table.
#[derive(Clone, Debug)]
pub struct TablifyOptions {
    /// Bound on the longer side. Larger images are downscaled (bicubic),
    /// keeping their aspect ratio.
    pub max_size: Option<u32>,

    /// Width and height of each table cell in CSS pixels.
    pub cell_size: u32,

    /// Spaces per nesting level. Zero emits the stylesheet and the table on
    /// a single line each.
    pub indent: usize,

    /// Keep the alpha channel and emit `rgba(...)` rules instead of
    /// flattening the image to RGB.
    pub keep_alpha: bool,
}

impl Default for TablifyOptions {
    fn default() -> Self {
        Self {
            max_size: None,
            cell_size: 1,
            indent: 0,
            keep_alpha: false,
        }
    }
}

/// A rendered page together with what went into it.
#[derive(Clone, Debug)]
pub struct Document {
    /// Width of the table in cells (after any resize).
    pub width: u32,
    /// Height of the table in rows (after any resize).
    pub height: u32,
    /// Colors in class order.
    pub colors: ColorTable,
    /// The full HTML document.
    pub html: String,
}

impl Document {
    /// Consume the document, keeping only the HTML.
    pub fn into_html(self) -> String {
        self.html
    }
}

/// Read the image at `path` and convert it into an HTML document.
///
/// # Errors
/// [`TablifyError::Io`] if the file cannot be opened or read, and
/// [`TablifyError::Image`] if its contents are not a decodable image.
///
/// # Example
/// ```ignore
/// use img2tbl::{tablify, TablifyOptions};
///
/// let html = tablify("pixel.png", &TablifyOptions::default())?;
/// assert!(html.contains("<td class=c0></td>"));
/// ```
#[must_use = "this returns the generated HTML"]
pub fn tablify<P: AsRef<Path>>(path: P, opts: &TablifyOptions) -> Result<String> {
    let path = path.as_ref();
    let io_err = |source| TablifyError::Io {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?
        .decode()?;

    Ok(tablify_image(&img, opts).into_html())
}

/// Convert an already decoded image.
///
/// The image is coerced to RGB (or RGBA with `keep_alpha`) before the
/// optional resize.
pub fn tablify_image(img: &DynamicImage, opts: &TablifyOptions) -> Document {
    let coerced = if opts.keep_alpha {
        DynamicImage::ImageRgba8(img.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(img.to_rgb8())
    };

    match resize::constrain(coerced, opts.max_size) {
        DynamicImage::ImageRgb8(buf) => render_bitmap(&buf, opts.cell_size, opts.indent),
        DynamicImage::ImageRgba8(buf) => render_bitmap(&buf, opts.cell_size, opts.indent),
        other => render_bitmap(&other.to_rgb8(), opts.cell_size, opts.indent),
    }
}

/// Scan `bitmap` and render the document.
///
/// Luma bitmaps are expanded to RGB per pixel.
pub fn render_bitmap<P, C>(bitmap: &ImageBuffer<P, C>, cell_size: u32, indent: usize) -> Document
where
    P: Pixel<Subpixel = u8>,
    C: Deref<Target = [u8]>,
{
    let (width, height) = bitmap.dimensions();
    let pad = " ".repeat(indent);
    let newline = if indent > 0 { "\n" } else { "" };
    let row_pad = pad.repeat(3);
    let cell_pad = pad.repeat(4);

    let mut colors = ColorTable::new();
    let cells = width as usize * height as usize;
    let mut table = String::with_capacity(cells * (20 + cell_pad.len()));

    for y in 0..height {
        table.push_str(&row_pad);
        table.push_str("<tr>");
        table.push_str(newline);
        for x in 0..width {
            let pixel = bitmap.get_pixel(x, y);
            let color = Color::from_channels(pixel.channels())
                .unwrap_or_else(|| Color::Rgb(pixel.to_rgb().0));
            let idx = colors.intern(color);
            table.push_str(&cell_pad);
            // Writing into a String cannot fail.
            let _ = write!(table, "<td class=c{idx}></td>");
            table.push_str(newline);
        }
        table.push_str(&row_pad);
        table.push_str("</tr>");
        table.push_str(newline);
    }

    let mut css = String::with_capacity(colors.len() * (48 + row_pad.len()));
    colors.write_css(&mut css, &row_pad, newline);

    let html = template::render(template::DOCUMENT_TEMPLATE, cell_size, &css, &table);

    tracing::debug!(
        width,
        height,
        colors = colors.len(),
        bytes = html.len(),
        "rendered table"
    );

    Document {
        width,
        height,
        colors,
        html,
    }
}
