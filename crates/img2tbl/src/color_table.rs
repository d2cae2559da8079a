//! First-seen-order registry mapping pixel colors to CSS class names.

use std::collections::HashMap;
use std::fmt::{self, Write};

/// A pixel color as read from the bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl Color {
    /// Build a color from a pixel's channels.
    ///
    /// Four or more channels produce [`Color::Rgba`], exactly three produce
    /// [`Color::Rgb`]. Pixels with fewer channels (luma) carry no RGB triple
    /// and yield `None`; expand them with [`image::Pixel::to_rgb`] first.
    pub fn from_channels(channels: &[u8]) -> Option<Self> {
        match *channels {
            [r, g, b, a, ..] => Some(Color::Rgba([r, g, b, a])),
            [r, g, b] => Some(Color::Rgb([r, g, b])),
            _ => None,
        }
    }
}

/// CSS color value: `rgb(r,g,b)` or `rgba(r,g,b,p)`.
///
/// The alpha byte is rescaled to `100 * a / 255.0` and printed as a float
/// that always carries a fractional part (`255` becomes `100.0`).
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgb([r, g, b]) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba([r, g, b, a]) => {
                let percent = f64::from(100 * u32::from(a)) / 255.0;
                write!(f, "rgba({r},{g},{b},{percent:?})")
            }
        }
    }
}

/// Insertion-ordered map from [`Color`] to class index.
///
/// The n-th distinct color registered gets index `n` (class `c{n}`).
/// Entries are never removed or renumbered.
#[derive(Clone, Debug, Default)]
pub struct ColorTable {
    index: HashMap<Color, usize>,
    order: Vec<Color>,
}

impl ColorTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the class index for `color`, registering it if unseen.
    pub fn intern(&mut self, color: Color) -> usize {
        if let Some(&idx) = self.index.get(&color) {
            return idx;
        }
        let idx = self.order.len();
        self.index.insert(color, idx);
        self.order.push(color);
        idx
    }

    /// Class index of an already registered color.
    pub fn get(&self, color: &Color) -> Option<usize> {
        self.index.get(color).copied()
    }

    /// Number of distinct colors registered.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` before the first color is registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Colors in the order they were first registered.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Color)> {
        self.order.iter().enumerate()
    }

    /// Append one `.c{n}{background-color:...}` rule per entry to `out`.
    ///
    /// Each rule is preceded by `prefix` and followed by `newline`.
    pub fn write_css(&self, out: &mut String, prefix: &str, newline: &str) {
        for (idx, color) in self.iter() {
            out.push_str(prefix);
            // Writing into a String cannot fail.
            let _ = write!(out, ".c{idx}{{background-color:{color}}}");
            out.push_str(newline);
        }
    }
}
