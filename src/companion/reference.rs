//! Parsing a single companion reference.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::CompanionReference;
use crate::error::CheckError;

/// `https://<host>/<org>/<repo>/pull/<number>`, optionally followed by a sub-path.
static URL_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https://(?P<host>[^/\s]+)/(?P<org>[^/\s]+)/(?P<repo>[^/\s]+)/pull/(?P<number>\d+)(?:[/?#]\S*)?$",
    )
    .expect("companion url pattern is valid")
});

/// `<repo>#<number>`.
static SHORT_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<repo>[^#/\s]+)#(?P<number>\d+)$").expect("companion short pattern is valid")
});

/// Parses `raw` as a URL or short companion reference.
///
/// The URL form is tried first. Its organization must equal `expected_org`;
/// the short form is always relative to `expected_org`.
///
/// # Errors
///
/// Returns [`CheckError::CompanionFormat`] when neither form matches, the
/// number does not fit, or the URL points at another organization.
pub fn parse_reference(raw: &str, expected_org: &str) -> Result<CompanionReference, CheckError> {
    let format_error = |reason: String| CheckError::CompanionFormat { raw: raw.to_string(), reason };

    if let Some(caps) = URL_FORM.captures(raw) {
        let org = &caps["org"];
        if org != expected_org {
            return Err(format_error(format!(
                "organization {org:?} does not match expected {expected_org:?}"
            )));
        }
        return reference_from(&caps, raw);
    }

    if let Some(caps) = SHORT_FORM.captures(raw) {
        return reference_from(&caps, raw);
    }

    Err(format_error(
        "expected https://<host>/<org>/<repo>/pull/<number> or <repo>#<number>".to_string(),
    ))
}

fn reference_from(caps: &Captures<'_>, raw: &str) -> Result<CompanionReference, CheckError> {
    let number = caps["number"].parse::<u64>().map_err(|e| CheckError::CompanionFormat {
        raw: raw.to_string(),
        reason: format!("invalid change number: {e}"),
    })?;
    Ok(CompanionReference { repository: caps["repo"].to_string(), number })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form() {
        let reference = parse_reference("polkadot#42", "paritytech").unwrap();
        assert_eq!(reference, CompanionReference { repository: "polkadot".into(), number: 42 });
    }

    #[test]
    fn url_form() {
        let reference =
            parse_reference("https://github.com/paritytech/cumulus/pull/7", "paritytech").unwrap();
        assert_eq!(reference, CompanionReference { repository: "cumulus".into(), number: 7 });
    }

    #[test]
    fn url_form_with_sub_path() {
        let reference =
            parse_reference("https://github.com/paritytech/cumulus/pull/7/files", "paritytech")
                .unwrap();
        assert_eq!(reference.number, 7);
    }

    #[test]
    fn url_form_from_other_organization_is_rejected() {
        let err = parse_reference("https://github.com/otherorg/x/pull/1", "paritytech").unwrap_err();
        match err {
            CheckError::CompanionFormat { reason, .. } => assert!(reason.contains("otherorg")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unrecognized_text_is_rejected() {
        for raw in ["", "polkadot", "polkadot#", "#42", "poll/adot#42", "polkadot #42", "polkadot#4x"] {
            assert!(
                matches!(parse_reference(raw, "paritytech"), Err(CheckError::CompanionFormat { .. })),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn overflowing_number_is_a_format_error() {
        let err = parse_reference("polkadot#99999999999999999999999", "paritytech").unwrap_err();
        assert!(err.to_string().contains("invalid change number"));
    }
}
