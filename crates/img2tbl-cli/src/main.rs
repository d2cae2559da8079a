//! img2tbl - Convert an image to an HTML table
//!
//! Writes `<name>.html` into the current directory, one table cell per pixel.

use clap::Parser;
use img2tbl::{output_file_name, tablify, TablifyOptions};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "img2tbl")]
#[command(version)]
#[command(about = "Convert an image to an HTML table", long_about = None)]
struct Cli {
    /// Image path
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Max image size (width and height)
    #[arg(long)]
    max_size: Option<u32>,

    /// Table cell width and height
    #[arg(long, default_value = "1")]
    cell_size: u32,

    /// Format the resulting HTML
    #[arg(long)]
    format: bool,

    /// Keep the alpha channel (emits rgba() colors)
    #[arg(long)]
    keep_alpha: bool,

    /// Output HTML file (default: input base name with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())?;
    Ok(())
}

impl Cli {
    fn options(&self) -> TablifyOptions {
        TablifyOptions {
            max_size: self.max_size,
            cell_size: self.cell_size,
            indent: if self.format { 2 } else { 0 },
            keep_alpha: self.keep_alpha,
        }
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| output_file_name(&self.path))
    }
}

/// Convert the input and write the HTML, returning the path written.
///
/// The output file is only created once the conversion has succeeded.
fn run(cli: Cli) -> Result<PathBuf, Box<dyn Error>> {
    let opts = cli.options();

    tracing::info!(
        input = %cli.path.display(),
        max_size = ?opts.max_size,
        cell_size = opts.cell_size,
        indent = opts.indent,
        "Converting image"
    );

    let html = tablify(&cli.path, &opts)
        .map_err(|e| format!("Failed to convert '{}': {}", cli.path.display(), e))?;

    let out_path = cli.output_path();
    fs::write(&out_path, &html)
        .map_err(|e| format!("Failed to write '{}': {}", out_path.display(), e))?;

    tracing::info!(
        output = %out_path.display(),
        bytes = html.len(),
        "Written HTML table"
    );

    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["img2tbl"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("arguments should parse")
    }

    fn write_png(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]))
            .save(&path)
            .expect("Failed to write test image");
        path
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["pic.png"]);
        let opts = cli.options();
        assert_eq!(opts.max_size, None);
        assert_eq!(opts.cell_size, 1);
        assert_eq!(opts.indent, 0);
        assert!(!opts.keep_alpha);
    }

    #[test]
    fn test_flags_map_to_options() {
        let cli = parse(&[
            "pic.png",
            "--max-size",
            "40",
            "--cell-size",
            "3",
            "--format",
            "--keep-alpha",
        ]);
        let opts = cli.options();
        assert_eq!(opts.max_size, Some(40));
        assert_eq!(opts.cell_size, 3);
        assert_eq!(opts.indent, 2);
        assert!(opts.keep_alpha);
    }

    #[test]
    fn test_output_path_derived_from_base_name() {
        let cli = parse(&["some/dir/pic.final.png"]);
        assert_eq!(cli.output_path(), PathBuf::from("pic.final.html"));
    }

    #[test]
    fn test_output_flag_overrides_derived_name() {
        let cli = parse(&["pic.png", "-o", "elsewhere/out.htm"]);
        assert_eq!(cli.output_path(), PathBuf::from("elsewhere/out.htm"));
    }

    #[test]
    fn test_run_writes_formatted_html() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "pic.png");
        let out = dir.path().join("pic.html");

        let cli = parse(&[
            input.to_str().unwrap(),
            "--format",
            "-o",
            out.to_str().unwrap(),
        ]);
        let written = run(cli).expect("conversion should succeed");
        assert_eq!(written, out);

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.contains("      <tr>\n"));
        assert!(html.contains("        <td class=c0></td>\n"));
        assert!(html.contains("      .c0{background-color:rgb(10,20,30)}\n"));
    }

    #[test]
    fn test_run_overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "pic.png");
        let out = dir.path().join("pic.html");
        fs::write(&out, "stale").unwrap();

        run(parse(&[input.to_str().unwrap(), "-o", out.to_str().unwrap()])).unwrap();

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_failed_conversion_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.png");
        let out = dir.path().join("missing.html");

        let err = run(parse(&[missing.to_str().unwrap(), "-o", out.to_str().unwrap()]))
            .unwrap_err();
        assert!(err.to_string().contains("missing.png"));
        assert!(!out.exists(), "no output file should be created");
    }

    #[test]
    fn test_undecodable_input_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("notes.txt");
        fs::write(&input, b"not an image").unwrap();
        let out = dir.path().join("notes.html");

        assert!(run(parse(&[input.to_str().unwrap(), "-o", out.to_str().unwrap()])).is_err());
        assert!(!out.exists(), "no output file should be created");
    }
}
