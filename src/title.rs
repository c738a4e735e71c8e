//! Display titles for new conversations
//!
//! Titles follow `Chat`, `Chat 2`, `Chat 3`, ... and the lowest free one wins.

use std::collections::HashSet;

const BASE_TITLE: &str = "Chat";

/// Allocate the lowest-numbered title not used by any of `existing`.
///
/// The probe has no upper bound; it ends because `existing` is finite.
#[must_use]
pub fn allocate_title<'a>(existing: impl IntoIterator<Item = &'a str>) -> String {
    let taken: HashSet<&str> = existing.into_iter().collect();
    if !taken.contains(BASE_TITLE) {
        return BASE_TITLE.to_string();
    }

    let mut n: u64 = 2;
    loop {
        let candidate = format!("{BASE_TITLE} {n}");
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}
