//! HTML document template.

/// The page wrapping the stylesheet and the table.
///
/// Placeholders: `{cell_size}`, `{css}` and `{table}`.
pub const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <style type="text/css">
      td { width:{cell_size}px; height:{cell_size}px; }
{css}
    </style>
  </head>
  <body>
    <table border="0" cellpadding="0" cellspacing="0">
{table}
    </table>
  </body>
</html>
"#;

/// Fill the placeholders of `template` in a single pass.
///
/// Unknown `{...}` sequences (like the `td { ... }` rule) are copied through
/// untouched, and substituted text is never rescanned.
pub fn render(template: &str, cell_size: u32, css: &str, table: &str) -> String {
    let mut out = String::with_capacity(template.len() + css.len() + table.len() + 16);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        rest = if let Some(after) = tail.strip_prefix("{cell_size}") {
            out.push_str(&cell_size.to_string());
            after
        } else if let Some(after) = tail.strip_prefix("{css}") {
            out.push_str(css);
            after
        } else if let Some(after) = tail.strip_prefix("{table}") {
            out.push_str(table);
            after
        } else {
            out.push('{');
            &tail[1..]
        };
    }
    out.push_str(rest);

    out
}
