//! `@font-face` block parsing and generation.
//!
//! # Responsibilities
//! - Extract `@font-face { ... }` blocks from upstream CSS
//! - Pull the fixed declaration set out of each block
//! - Serialize records back to CSS that this parser accepts again
//!
//! # Design Decisions
//! - Regex-based extraction instead of a CSS parser: the upstream API emits
//!   a single known shape, one declaration per line
//! - A missing required declaration is a fatal parse error, not a skipped
//!   block; the upstream contract is trusted, so a mismatch must surface

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ProxyError, ProxyResult};

static FONT_FACE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)@font-face \{.*?\}").expect("invalid font-face block regex")
});

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*([a-z-]+): (.*);$").expect("invalid declaration regex")
});

/// One `@font-face` block, values kept as raw declaration text.
///
/// `family` keeps the surrounding quotes (`'Open Sans'`) exactly as the
/// upstream emitted them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFace {
    pub family: String,
    pub style: String,
    pub weight: String,
    pub display: Option<String>,
    pub src: String,
    pub unicode_range: Option<String>,
}

/// Parse all `@font-face` blocks out of a CSS document, in source order.
pub fn parse_css(css: &str) -> ProxyResult<Vec<FontFace>> {
    FONT_FACE_BLOCK
        .find_iter(css)
        .map(|block| parse_block(block.as_str()))
        .collect()
}

fn parse_block(block: &str) -> ProxyResult<FontFace> {
    Ok(FontFace {
        family: required_field(block, "font-family")?,
        style: required_field(block, "font-style")?,
        weight: required_field(block, "font-weight")?,
        display: find_field(block, "font-display").map(str::to_string),
        src: required_field(block, "src")?,
        unicode_range: find_field(block, "unicode-range").map(str::to_string),
    })
}

fn required_field(block: &str, field: &'static str) -> ProxyResult<String> {
    find_field(block, field)
        .map(str::to_string)
        .ok_or(ProxyError::MalformedCss { field })
}

fn find_field<'b>(block: &'b str, field: &str) -> Option<&'b str> {
    DECLARATION
        .captures_iter(block)
        .find(|captures| &captures[1] == field)
        .and_then(|captures| captures.get(2))
        .map(|value| value.as_str())
}

/// Serialize records back to CSS.
///
/// Declarations come out in a fixed order with the optional ones omitted
/// when absent; blocks are joined by a single newline. The output parses
/// again with [`parse_css`].
pub fn generate_css(faces: &[FontFace]) -> String {
    faces
        .iter()
        .map(|face| {
            let mut lines = Vec::with_capacity(8);
            lines.push("@font-face {".to_string());
            lines.push(format!("  font-family: {};", face.family));
            lines.push(format!("  font-style: {};", face.style));
            lines.push(format!("  font-weight: {};", face.weight));
            if let Some(display) = &face.display {
                lines.push(format!("  font-display: {display};"));
            }
            lines.push(format!("  src: {};", face.src));
            if let Some(range) = &face.unicode_range {
                lines.push(format!("  unicode-range: {range};"));
            }
            lines.push("}".to_string());
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
