//! Markup removal for question text.
//!
//! Definition values may carry inline HTML (`<strong>`, `<em>`, links).
//! Quiz questions quote the raw prose, so tags are dropped and the common
//! entities are decoded. This is a tag stripper, not an HTML sanitizer:
//! no nesting rules, no script awareness, just "remove the angle-bracket
//! markup and give back the text".

/// Strip HTML tags from `html` and decode common entities.
///
/// Tag contents are dropped wholesale; quoted attribute values may contain
/// `>` without ending the tag early. An unterminated tag swallows the rest
/// of the input. Named entities (`&amp;` `&lt;` `&gt;` `&quot;` `&apos;`
/// `&nbsp;`) and numeric references (`&#39;`, `&#x2192;`) are decoded; a
/// non-breaking space becomes a plain space. Anything unrecognized is kept
/// literally.
#[must_use]
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut at = 0;

    while at < html.len() {
        let rest = &html[at..];
        if let Some(inside) = rest.strip_prefix('<') {
            match tag_end(inside) {
                Some(close) => at += 1 + close + 1,
                None => break,
            }
        } else if rest.starts_with('&') {
            match decode_entity(rest) {
                Some((decoded, consumed)) => {
                    out.push(decoded);
                    at += consumed;
                }
                None => {
                    out.push('&');
                    at += 1;
                }
            }
        } else if let Some(c) = rest.chars().next() {
            out.push(c);
            at += c.len_utf8();
        }
    }

    out
}

/// Byte offset of the `>` closing a tag, given the text after `<`.
/// Honors single and double quoting inside the tag.
fn tag_end(inside: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in inside.char_indices() {
        match quote {
            None => match c {
                '>' => return Some(i),
                '"' | '\'' => quote = Some(c),
                _ => {}
            },
            Some(q) if c == q => quote = None,
            Some(_) => {}
        }
    }
    None
}

/// Decode one entity at the start of `rest` (which begins with `&`).
/// Returns the decoded char and the bytes consumed, or `None` when this
/// `&` does not start a recognizable entity.
fn decode_entity(rest: &str) -> Option<(char, usize)> {
    let semi = rest.find(';')?;
    if semi > 9 {
        return None;
    }
    let body = &rest[1..semi];
    let decoded = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        numeric => {
            let digits = numeric.strip_prefix('#')?;
            let code = if let Some(hex) = digits.strip_prefix(['x', 'X']) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                digits.parse::<u32>().ok()?
            };
            char::from_u32(code)?
        }
    };
    Some((decoded, semi + 1))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
