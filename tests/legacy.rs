//! Integration tests for the legacy rule set.

use mdhtml::{Dialect, convert_legacy, convert_with};

#[macro_use]
mod prelude;
use prelude::*;

#[rstest]
#[case::plain("plain text")]
#[case::bullet("* a")]
#[case::numbered("1. a")]
fn test_unmarked_lines_pass_through(#[case] line: &str) {
    assert_eq!(convert_legacy(line), line);
}

#[test]
fn test_emphasis_uses_italic_tag() {
    assert_eq!(convert_legacy("*a* and _b_"), "<i>a</i> and <i>b</i>");
}

#[test]
fn test_bold_and_strike() {
    assert_eq!(
        convert_legacy("**a** ~~b~~"),
        "<strong>a</strong> <del>b</del>"
    );
}

#[test]
fn test_header_is_not_anchored() {
    assert_eq!(convert_legacy("issue #5"), "issue <h1>5</h1>");
}

#[test]
fn test_images_are_not_recognised() {
    assert_eq!(convert_legacy("![a](b)"), r#"!<a href="b">a</a>"#);
}

#[test]
fn test_blockquotes_collapse() {
    assert_eq!(convert_legacy("> a\n> b"), "<blockquote>a\nb</blockquote>");
}

#[test]
fn test_reconversion_is_not_idempotent() {
    let once = convert_legacy("# C#");
    assert_eq!(once, "<h1>C#</h1>");
    assert_ne!(convert_legacy(&once), once);
}

#[test]
fn test_convert_with_legacy_matches_convert_legacy() {
    let input = doc!["# T", "> q", "*e*"];
    assert_eq!(convert_with(&input, Dialect::Legacy), convert_legacy(&input));
}
