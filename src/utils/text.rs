// file: src/utils/text.rs
// description: slug, filename and emoji helpers shared by generators and audio
// reference: https://github.com/jdecked/twemoji

use crate::utils::patterns::{HYPHEN_RUN, MARKUP_TAG, NON_SLUG_CHAR, WHITESPACE_RUN};

const TWEMOJI_BASE: &str = "https://cdn.jsdelivr.net/gh/jdecked/twemoji@latest/assets/72x72";
const DEFAULT_EMOJI_CODE: &str = "1f4da";

/// Lowercase, drop everything but `[a-z0-9]`, whitespace and hyphens, then
/// collapse whitespace and hyphen runs into single hyphens.
fn slug_core(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept = NON_SLUG_CHAR.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&kept, "-");
    HYPHEN_RUN.replace_all(&hyphenated, "-").into_owned()
}

/// Slug used for derived audio filenames. Markup is removed first and the
/// result is capped at `max_len` characters.
pub fn slugify(text: &str, max_len: usize) -> String {
    let plain = strip_markup(text);
    truncate_chars(&slug_core(&plain), max_len)
}

/// Filename stem for clips that carry no pre-assigned audio reference.
pub fn sanitize_filename(text: &str) -> String {
    truncate_chars(&slug_core(text), 60)
}

/// Deterministic identifier: `"Biology Chapter 3!"` becomes `"biology-chapter-3"`.
pub fn identifier(name: &str) -> String {
    slug_core(name).trim_matches('-').to_string()
}

pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").into_owned()
}

pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Twemoji PNG for an emoji sequence. Variation selectors are dropped and the
/// remaining code points are joined with `-`, matching the CDN file names.
pub fn emoji_image_url(emoji: &str) -> String {
    let code = emoji
        .chars()
        .map(|c| c as u32)
        .filter(|&cp| cp != 0xFE0E && cp != 0xFE0F)
        .map(|cp| format!("{:x}", cp))
        .collect::<Vec<_>>()
        .join("-");

    let code = if code.is_empty() {
        DEFAULT_EMOJI_CODE.to_string()
    } else {
        code
    };

    format!("{}/{}.png", TWEMOJI_BASE, code)
}
