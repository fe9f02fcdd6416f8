// crates/placedb-core/src/text.rs

//! # Description Normalizer
//!
//! Placemark descriptions are loosely formatted HTML fragments written by
//! hand in Google My Maps. This module pulls the few structured fields we
//! care about out of them and then produces a plain-text remainder.
//!
//! Each extractor is total: it either finds its pattern or reports absence.
//! Cleaning is a separate pass over the original text and always runs after
//! every extractor has seen it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Won sign that prefixes a price range.
pub const PRICE_GLYPH: char = '₩';

static IMG_SRC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<img\s+[^>]*?src="([^"]+)""#).expect("valid img regex"));

// Hours stop at the price glyph and vice versa, so the two never overlap.
static HOURS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"⏰\x{FE0F}?\s*([^<\n₩]+)").expect("valid hours regex"));

static PRICE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"₩\s*([^<\n⏰]+)").expect("valid price regex"));

static INSTAGRAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"https://www\.instagram\.com/[^\s<>"']+"#).expect("valid instagram regex")
});

/// Markup rules, applied in order: images, line breaks, then any other tag.
static MARKUP_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    compile_rules(&[
        (r"(?i)<img[^>]*>", ""),
        (r"(?i)<br\s*/?>", "\n"),
        (r"<[^>]+>", ""),
    ])
});

/// Boilerplate and already-extracted substrings, applied to tag-free text.
static BOILERPLATE_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    compile_rules(&[
        // App download footer appended to every placemark by the map author.
        (r"(?s)◼\x{FE0F}?\s*Korehalal Trip App Download.*?id6736513932", ""),
        (r"Android\s*:\s*https://play\.google\.com\S+", ""),
        (r"iOS\s*:\s*https://apps\.apple\.com\S+", ""),
        (r"(?s)🚲\s*Delivery Link:.*?viewform\S*", ""),
        (r"https://forms\.gle/\S+", ""),
        (r"https://www\.instagram\.com\S*", ""),
        (r"⏰[^\n₩]*", ""),
        (r"₩[^\n⏰]*", ""),
    ])
});

fn compile_rules(rules: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    rules
        .iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("valid cleaning regex"),
                *replacement,
            )
        })
        .collect()
}

/// Structured fields found in a description plus the cleaned remainder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionFields {
    pub image_url: Option<String>,
    pub opening_hours: Option<String>,
    pub price_range: Option<String>,
    pub instagram_url: Option<String>,
    /// Plain text, one non-empty trimmed line per source line. May be empty.
    pub description: String,
}

/// First `<img src="…">` URL.
pub fn extract_image_url(raw: &str) -> Option<String> {
    IMG_SRC
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Text after the first clock glyph, up to a tag, newline or price.
pub fn extract_opening_hours(raw: &str) -> Option<String> {
    HOURS
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Text after the first won sign, re-prefixed with the glyph.
pub fn extract_price_range(raw: &str) -> Option<String> {
    PRICE
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(|s| format!("{PRICE_GLYPH}{s}"))
}

/// First Instagram profile or post URL.
pub fn extract_instagram_url(raw: &str) -> Option<String> {
    INSTAGRAM.find(raw).map(|m| m.as_str().to_string())
}

/// Strips markup, boilerplate and the extracted substrings, then collapses
/// the text to trimmed non-empty lines.
pub fn clean_description(raw: &str) -> String {
    let mut text = apply_rules(&MARKUP_RULES, raw);
    text = decode_entities(&text);
    text = apply_rules(&BOILERPLATE_RULES, &text);

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn apply_rules(rules: &[(Regex, &'static str)], input: &str) -> String {
    let mut text = input.to_string();
    for (pattern, replacement) in rules {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    text
}

/// Decodes the handful of entities that survive inside CDATA bodies.
///
/// `&lt;`/`&gt;` are left alone so decoding can never reintroduce a tag.
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Runs every extractor, then the cleaning pass.
pub fn parse_description(raw: &str) -> DescriptionFields {
    DescriptionFields {
        image_url: extract_image_url(raw),
        opening_hours: extract_opening_hours(raw),
        price_range: extract_price_range(raw),
        instagram_url: extract_instagram_url(raw),
        description: clean_description(raw),
    }
}
