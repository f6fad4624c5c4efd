use crate::error::{HccdError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const HEAD_OPEN: &str = "<!doctype html><html><head>\
<meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\"></meta>\
<link rel=\"stylesheet\" type=\"text/css\" href=\"";

const PRINT_STYLE: &str = concat!(
    "body {\n",
    "    margin: 10mm;\n",
    "}\n",
    "\n",
    "table.page {\n",
    "    border: 0mm;\n",
    "    page-break-after: always;    \n",
    "    border-spacing: 0;\n",
    "    border-collapse: collapse;\n",
    "    display:block;        \n",
    "    clear: both;\n",
    "}\n",
    "\n",
    "table.page td {\n",
    "    padding: 0;\n",
    "}\n",
);

const FOOTER: &str = "</body></html>";

/// Wrap the paginated body in a full HTML document
///
/// `stylesheet_href` is written into the link element as given; the embedded
/// print style follows it so page breaks apply whatever the card CSS says.
pub fn build_document(body: &str, stylesheet_href: &str) -> String {
    let mut doc = String::with_capacity(
        HEAD_OPEN.len() + stylesheet_href.len() + PRINT_STYLE.len() + body.len() + 64,
    );
    doc.push_str(HEAD_OPEN);
    doc.push_str(stylesheet_href);
    doc.push_str("\"><style>");
    doc.push_str(PRINT_STYLE);
    doc.push_str("</style>\n</head><body>");
    doc.push_str(body);
    doc.push_str(FOOTER);
    doc
}

/// Replace `target` with `document`
///
/// The content goes to a temporary file in the same directory first and is
/// renamed over the target, so readers never see a half-written sheet.
pub fn write_document(target: &Path, document: &str) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(document.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(target)
        .map_err(|e| HccdError::IoError(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_document_shape() {
        let doc = build_document("<table class=\"page\"></table>", "cards.css");

        assert!(doc.starts_with("<!doctype html><html><head>"));
        assert!(doc.contains("charset=UTF-8"));
        assert!(doc.contains("href=\"cards.css\"><style>body {\n    margin: 10mm;\n}"));
        assert!(doc.contains("page-break-after: always;"));
        assert!(doc.contains("table.page td {\n    padding: 0;\n}\n</style>\n</head><body>"));
        assert!(doc.ends_with("<body><table class=\"page\"></table></body></html>"));
    }

    #[test]
    fn test_empty_body() {
        let doc = build_document("", "x.css");
        assert!(doc.ends_with("</head><body></body></html>"));
        assert!(!doc.contains("<table"));
    }

    #[test]
    fn test_write_document_overwrites() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("cards-GENERATED.html");
        fs::write(&target, "old content that is longer").unwrap();

        write_document(&target, "new").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_write_document_missing_dir() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing/cards-GENERATED.html");
        let err = write_document(&target, "x").unwrap_err();
        assert!(matches!(err, HccdError::IoError(_)));
    }
}
