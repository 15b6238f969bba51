//! `@font-face` extraction from Google Fonts CSS API responses.
//!
//! The responses use a narrow, flat subset of CSS, so a handful of cached
//! patterns is enough: no nested braces, one quoted family name and one
//! `src: url(...)` per block.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::error::{Error, Result};

/// Matches a complete `@font-face { ... }` block.
static FONT_FACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@font-face\s*\{[^}]+\}").unwrap());

/// Captures the quoted family name after `font-family:`.
static FAMILY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"font-family:\s*['"]([A-Za-z _-]+)['"]"#).unwrap());

/// Captures the first `url(...)` after `src:`.
static SRC_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"src:\s*url\(([^)]+)\)").unwrap());

/// A font binary referenced by the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    /// Family name with its first space replaced by `_`. Used as the directory name.
    pub font_name: String,
    /// Absolute source URL.
    pub url: String,
    /// Last path segment of `url`.
    pub file_name: String,
}

impl FontFile {
    pub fn new(family: &str, url: &str) -> Self {
        let file_name = url.rsplit('/').next().unwrap_or(url).to_string();
        Self { font_name: family.replacen(' ', "_", 1), url: url.to_string(), file_name }
    }

    /// Path of the downloaded file relative to the stylesheet.
    pub fn local_path(&self) -> String {
        format!("{}/{}", self.font_name, self.file_name)
    }

    /// Replace every `url(<source>)` in `css` with `url(<local path>)`.
    pub fn rewrite(&self, css: &str) -> String {
        css.replace(&format!("url({})", self.url), &format!("url({})", self.local_path()))
    }
}

/// Font files in first-seen order, unique by URL.
#[derive(Debug, Default, Clone)]
pub struct FontFiles {
    files: IndexMap<String, FontFile>,
}

impl FontFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `file` unless one with the same URL is already present.
    ///
    /// Returns whether the file was added.
    pub fn push(&mut self, file: FontFile) -> bool {
        if self.files.contains_key(&file.url) {
            return false;
        }
        self.files.insert(file.url.clone(), file);
        true
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FontFile> {
        self.files.values()
    }
}

impl<'a> IntoIterator for &'a FontFiles {
    type Item = &'a FontFile;
    type IntoIter = indexmap::map::Values<'a, String, FontFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.values()
    }
}

/// Parse a single `@font-face` block.
pub fn parse_font_face(block: &str) -> Result<FontFile> {
    let family = FAMILY_RE
        .captures(block)
        .map(|c| c[1].to_string())
        .ok_or_else(|| Error::MissingFamily { block: block.to_string() })?;
    let url = SRC_URL_RE
        .captures(block)
        .map(|c| c[1].to_string())
        .ok_or_else(|| Error::MissingSource { block: block.to_string() })?;
    Ok(FontFile::new(&family, &url))
}

/// Collect the unique font files referenced by `css`.
///
/// Fails with [`Error::NoFontFaces`] when the stylesheet has no `@font-face`
/// block, and with a typed error for the first malformed block.
pub fn extract_font_faces(css: &str) -> Result<FontFiles> {
    let mut files = FontFiles::new();
    let mut blocks = 0;
    for m in FONT_FACE_RE.find_iter(css) {
        blocks += 1;
        files.push(parse_font_face(m.as_str())?);
    }
    if blocks == 0 {
        return Err(Error::NoFontFaces);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_WEIGHTS: &str = "\
/* latin */
@font-face {
  font-family: 'Open Sans';
  font-style: normal;
  font-weight: 400;
  src: url(https://fonts.gstatic.com/s/opensans/v40/regular.ttf) format('truetype');
}
/* latin */
@font-face {
  font-family: 'Open Sans';
  font-style: normal;
  font-weight: 700;
  src: url(https://fonts.gstatic.com/s/opensans/v40/bold.ttf) format('truetype');
}
";

    #[test]
    fn test_extracts_every_block() {
        let files = extract_font_faces(TWO_WEIGHTS).unwrap();
        let files: Vec<_> = files.iter().cloned().collect();
        assert_eq!(
            files,
            vec![
                FontFile {
                    font_name: "Open_Sans".into(),
                    url: "https://fonts.gstatic.com/s/opensans/v40/regular.ttf".into(),
                    file_name: "regular.ttf".into(),
                },
                FontFile {
                    font_name: "Open_Sans".into(),
                    url: "https://fonts.gstatic.com/s/opensans/v40/bold.ttf".into(),
                    file_name: "bold.ttf".into(),
                },
            ]
        );
    }

    #[test]
    fn test_compact_block() {
        let files = extract_font_faces("@font-face{font-family:'Open Sans';src:url(https://x/o.woff2)}")
            .unwrap();
        let file = files.iter().next().unwrap();
        assert_eq!(file.font_name, "Open_Sans");
        assert_eq!(file.url, "https://x/o.woff2");
        assert_eq!(file.file_name, "o.woff2");
    }

    #[test]
    fn test_duplicate_urls_keep_first_seen_order() {
        let css = "\
@font-face { font-family: 'B'; src: url(https://x/b.ttf); }
@font-face { font-family: 'A'; src: url(https://x/a.ttf); }
@font-face { font-family: 'B'; src: url(https://x/b.ttf); }
@font-face { font-family: 'C'; src: url(https://x/a.ttf); }
";
        let files = extract_font_faces(css).unwrap();
        let urls: Vec<_> = files.iter().map(|f| f.url.as_str()).collect();
        assert_eq!(urls, ["https://x/b.ttf", "https://x/a.ttf"]);
        assert_eq!(files.iter().nth(1).unwrap().font_name, "A");
    }

    #[test]
    fn test_only_first_space_is_replaced() {
        let file = FontFile::new("Source Code Pro", "https://x/scp.ttf");
        assert_eq!(file.font_name, "Source_Code Pro");
    }

    #[test]
    fn test_no_font_faces() {
        let err = extract_font_faces("body { color: red; }").unwrap_err();
        assert!(matches!(err, Error::NoFontFaces));
    }

    #[test]
    fn test_malformed_blocks_are_typed_errors() {
        let err = extract_font_faces("@font-face { src: url(https://x/a.ttf); }").unwrap_err();
        assert!(matches!(err, Error::MissingFamily { .. }));

        let err = extract_font_faces("@font-face { font-family: 'A'; }").unwrap_err();
        assert!(matches!(err, Error::MissingSource { .. }));
    }

    #[test]
    fn test_push_reports_duplicates() {
        let mut files = FontFiles::new();
        assert!(files.push(FontFile::new("A", "https://x/a.ttf")));
        assert!(!files.push(FontFile::new("B", "https://x/a.ttf")));
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_rewrite_replaces_all_occurrences() {
        let file = FontFile::new("Lato", "https://x/lato.ttf");
        let css = "a{src:url(https://x/lato.ttf)} b{src:url(https://x/lato.ttf)} c{src:url(https://x/other.ttf)}";
        assert_eq!(
            file.rewrite(css),
            "a{src:url(Lato/lato.ttf)} b{src:url(Lato/lato.ttf)} c{src:url(https://x/other.ttf)}"
        );
    }
}
