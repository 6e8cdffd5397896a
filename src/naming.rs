//! Filename-derived metadata for generated gallery items.
//!
//! The generator never reads image contents. Everything it knows about an
//! item comes from the file name and the category table:
//!
//! - `hero-shot_01.webp` → alt text "Hero Shot 01"
//! - third file in the `vfx-3d` category → id `vfx-3d-003`
//!
//! The stem → label conversion is a convenience default, not a contract.
//! Odd stems produce odd labels; that is accepted behavior.

/// Convert a filename stem into a readable label.
///
/// Runs of `-` and `_` become a single space, the result is trimmed, and the
/// first character of every word is uppercased. Other characters are kept
/// as they are, so `wide_Angle` → "Wide Angle" and `DSC_0042` → "DSC 0042".
pub fn stem_to_alt(stem: &str) -> String {
    let mut spaced = String::with_capacity(stem.len());
    let mut in_separator = false;
    for c in stem.chars() {
        if c == '-' || c == '_' {
            if !in_separator {
                spaced.push(' ');
            }
            in_separator = true;
        } else {
            spaced.push(c);
            in_separator = false;
        }
    }

    let mut label = String::with_capacity(spaced.len());
    let mut prev_is_word = false;
    for c in spaced.trim().chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
        prev_is_word = is_word;
    }
    label
}

/// Build an item id from a category prefix and a 1-based sequence number.
///
/// Numbers are zero-padded to three digits; larger numbers keep all digits.
pub fn sequence_id(prefix: &str, n: usize) -> String {
    format!("{prefix}-{n:03}")
}

/// URL-safe directory name for a display label: lowercase ASCII
/// alphanumerics, everything else collapsed to single dashes.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() {
        "collection".to_string()
    } else {
        trimmed.to_string()
    }
}
