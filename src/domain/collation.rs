//! Spanish-aware name ordering
//!
//! Names compare letter by letter with case and accents folded away first,
//! `ñ` sorting between `n` and `o`. Only when two names are equal at that
//! level do accents decide, and after that case (lowercase first).

use std::cmp::Ordering;

/// Fold one character to its primary weight.
fn primary_weight(c: char) -> u32 {
    let base = match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => return ('n' as u32) * 2 + 1,
        other => other.to_lowercase().next().unwrap_or(other),
    };
    (base as u32) * 2
}

/// Accent-sensitive, case-insensitive weight.
fn secondary_weight(c: char) -> u32 {
    c.to_lowercase().next().unwrap_or(c) as u32
}

/// Lowercase sorts before uppercase.
fn tertiary_weight(c: char) -> u8 {
    if c.is_uppercase() {
        1
    } else {
        0
    }
}

/// Compare two display names the way a Spanish reader expects them sorted.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight))
        .then_with(|| a.chars().map(secondary_weight).cmp(b.chars().map(secondary_weight)))
        .then_with(|| a.chars().map(tertiary_weight).cmp(b.chars().map(tertiary_weight)))
}
