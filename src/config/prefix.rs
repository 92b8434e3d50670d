//! Metric-key prefix derivation from an application name.
//!
//! The prefix is built in four passes: underscore-casing, accent folding
//! through a fixed substitution table, whitespace replacement and removal
//! of every character that is not an ASCII word character.

/// Derive the metric-key prefix for `app_name`.
///
/// The result only contains ASCII letters, digits and underscores.
pub fn metric_prefix(app_name: &str) -> String {
    without_accent(&underscore(app_name))
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Convert `text` to lowercase words joined by single underscores.
///
/// "MyApp" becomes "my_app", "HTTPServer" becomes "http_server" and
/// "my-app v2" becomes "my_app_v2". Letters are classified by Unicode, so
/// accented letters are kept (and lowercased) rather than treated as
/// separators. Combining marks stay attached to their letter.
pub fn underscore(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev: Option<char> = None;

    for (i, &c) in chars.iter().enumerate() {
        // A mark stays with its letter; marks after a separator are dropped.
        if is_combining_mark(c) {
            if prev.is_some_and(char::is_alphanumeric) {
                out.push(c);
            }
            continue;
        }

        if !c.is_alphanumeric() {
            // Runs of separators collapse into one underscore, never leading.
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            prev = Some(c);
            continue;
        }

        if let Some(p) = prev.filter(|_| c.is_uppercase()) {
            let next_is_lower = chars[i + 1..]
                .iter()
                .find(|n| !is_combining_mark(**n))
                .is_some_and(|n| n.is_lowercase());
            let word_boundary = p.is_lowercase() || p.is_numeric();
            let acronym_end = p.is_uppercase() && next_is_lower;
            if word_boundary || acronym_end {
                out.push('_');
            }
        }

        out.extend(c.to_lowercase());
        prev = Some(c);
    }

    let trimmed = out.trim_end_matches('_').len();
    out.truncate(trimmed);
    out
}

// Combining diacritical blocks, as produced by decomposed (NFD) input.
fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

/// Replace every character found in the accent table with its ASCII letter.
///
/// Only the accented Latin letters listed in `fold_accent` are folded;
/// anything else (`ß`, `æ`, non-Latin scripts) is left alone here and
/// dropped by [`metric_prefix`].
pub fn without_accent(text: &str) -> String {
    text.chars().map(fold_accent).collect()
}

/// Fixed substitution table of 181 accented letters.
fn fold_accent(c: char) -> char {
    match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă'
        | 'Ą' => 'A',
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă'
        | 'ą' => 'a',
        'Ç' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => 'C',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'Ð' | 'Ď' | 'Đ' => 'D',
        'ð' | 'ď' | 'đ' => 'd',
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę'
        | 'Ě' => 'E',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę'
        | 'ě' => 'e',
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => 'G',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'Ĥ' | 'Ħ' => 'H',
        'ĥ' | 'ħ' => 'h',
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į'
        | 'İ' => 'I',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į'
        | 'ı' => 'i',
        'Ĵ' => 'J',
        'ĵ' => 'j',
        'Ķ' => 'K',
        'ķ' | 'ĸ' => 'k',
        'Ĺ' | 'Ļ' | 'Ľ' | 'Ŀ' | 'Ł' => 'L',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' | 'Ŋ' => 'N',
        'ñ' | 'ń' | 'ņ' | 'ň' | 'ŉ' | 'ŋ' => 'n',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ŏ'
        | 'Ő' => 'O',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ'
        | 'ő' => 'o',
        'Ŕ' | 'Ŗ' | 'Ř' => 'R',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => 'S',
        'ś' | 'ŝ' | 'ş' | 'š' | 'ſ' => 's',
        'Ţ' | 'Ť' | 'Ŧ' => 'T',
        'ţ' | 'ť' | 'ŧ' => 't',
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů'
        | 'Ű' | 'Ų' => 'U',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů'
        | 'ű' | 'ų' => 'u',
        'Ŵ' => 'W',
        'ŵ' => 'w',
        'Ý' | 'Ŷ' | 'Ÿ' => 'Y',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}
