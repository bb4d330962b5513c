//! Identifier minting for categories and terms.
//!
//! Ids are `<prefix>-<unix-millis>-<suffix>` where the suffix is random
//! lowercase base-36. The suffix keeps ids unique when several terms are
//! created within the same millisecond (bulk add).

use chrono::Utc;
use rand::Rng;

const SUFFIX_LEN: usize = 8;
const SUFFIX_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Mint a fresh term id, e.g. `term-1731955000123-k3v09qlz`.
#[must_use]
pub fn new_term_id() -> String {
    mint("term", &mut rand::thread_rng())
}

/// Mint a fresh category id, e.g. `cat-1731955000123-ab12cd34`.
#[must_use]
pub fn new_category_id() -> String {
    mint("cat", &mut rand::thread_rng())
}

fn mint(prefix: &str, rng: &mut impl Rng) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| char::from(SUFFIX_CHARS[rng.gen_range(0..SUFFIX_CHARS.len())]))
        .collect();
    format!("{prefix}-{millis}-{suffix}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_id_shape(id: &str, prefix: &str) {
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts.len(), 3, "id must have three parts: {id}");
        assert_eq!(parts[0], prefix);
        assert!(parts[1].parse::<i64>().is_ok(), "millis part must be numeric: {id}");
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(
            parts[2].bytes().all(|b| SUFFIX_CHARS.contains(&b)),
            "suffix must be lowercase base-36: {id}"
        );
    }

    #[test]
    fn term_ids_have_expected_shape() {
        assert_id_shape(&new_term_id(), "term");
    }

    #[test]
    fn category_ids_have_expected_shape() {
        assert_id_shape(&new_category_id(), "cat");
    }

    #[test]
    fn rapid_minting_stays_unique() {
        let ids: HashSet<String> = (0..256).map(|_| new_term_id()).collect();
        assert_eq!(ids.len(), 256, "suffix must disambiguate same-millisecond ids");
    }
}
