//! Finding `companion:` directives in free text.

use std::sync::LazyLock;

use regex::Regex;

/// One directive per line. The keyword is matched case-insensitively; list and
/// quote markers in front of it are tolerated.
static COMPANION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*>]\s*)*(?i:companion):(?P<reference>.*)$")
        .expect("companion line pattern is valid")
});

/// Yields the trimmed text after `companion:` for every directive line of
/// `description`, in document order.
///
/// The iterator is lazy and can be cloned to restart the scan.
pub fn extract_references(description: &str) -> impl Iterator<Item = &str> + Clone {
    description.lines().filter_map(|line| {
        COMPANION_LINE
            .captures(line)
            .and_then(|caps| caps.name("reference"))
            .map(|m| m.as_str().trim())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_is_case_insensitive() {
        let description = "Companion: a#1\ncompanion: b#2\nCOMPANION: c#3";
        let refs: Vec<_> = extract_references(description).collect();
        assert_eq!(refs, ["a#1", "b#2", "c#3"]);
    }

    #[test]
    fn lines_without_keyword_yield_nothing() {
        let description = "Fixes the session pallet.\n\npolkadot#42 is related\ncompanions are welcome";
        assert_eq!(extract_references(description).count(), 0);
    }

    #[test]
    fn keeps_document_order_and_trims() {
        let description = "Intro\n- companion:   https://github.com/paritytech/polkadot/pull/42  \r\n\
                           some text\n> Companion: cumulus#7\n";
        let refs: Vec<_> = extract_references(description).collect();
        assert_eq!(refs, ["https://github.com/paritytech/polkadot/pull/42", "cumulus#7"]);
    }

    #[test]
    fn iterator_restarts_when_cloned() {
        let refs = extract_references("companion: a#1\ncompanion: b#2");
        let first: Vec<_> = refs.clone().collect();
        let second: Vec<_> = refs.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_directive_is_still_yielded() {
        let refs: Vec<_> = extract_references("companion:").collect();
        assert_eq!(refs, [""]);
    }
}
