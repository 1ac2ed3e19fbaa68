//! Integration tests for converters built from caller-supplied tables.

use mdhtml::{Converter, FixUp, Flags, Pattern, PatternError, Rule};

#[macro_use]
mod prelude;
use prelude::*;

fn shout(groups: &[&str]) -> String {
    format!("<b>{}</b>", groups[0].trim().to_uppercase())
}

#[fixture]
fn converter() -> Converter {
    let rules = vec![
        Rule::template(
            "mark",
            &Pattern::parse_delimited("/==(.*?)==/g").expect("valid literal"),
            "<mark>$1</mark>",
        )
        .expect("valid rule"),
        Rule::transform(
            "shout",
            &Pattern::parse_delimited(r"/^\n!(.*)/").expect("valid literal"),
            shout,
        )
        .expect("valid rule"),
    ];
    let fixes = vec![
        FixUp::new(
            &Pattern::parse_delimited(r"#</b>\n<b>#g").expect("valid literal"),
            " ",
        )
        .expect("valid fix-up"),
    ];
    Converter::new(rules, fixes)
}

#[rstest]
fn test_template_rule_from_literal(converter: Converter) {
    assert_eq!(converter.convert("a ==b== c ==d=="), "a <mark>b</mark> c <mark>d</mark>");
}

#[rstest]
fn test_transform_rule_and_fix_up(converter: Converter) {
    assert_eq!(converter.convert("!hey\n!you\nquiet"), doc!["<b>HEY YOU</b>", "quiet"]);
}

#[test]
fn test_first_match_only_without_global_flag() {
    let rule = Rule::template("dash", &Pattern::new("-", Flags::NONE), "+").expect("valid rule");
    let converter = Converter::new(vec![rule], Vec::new());
    assert_eq!(converter.convert("a-b-c"), "a+b-c");
}

#[test]
fn test_invalid_pattern_is_reported() {
    let err = Rule::template("broken", &Pattern::global("[a-"), "x").unwrap_err();
    assert!(matches!(err, PatternError::Syntax { .. }));
}

#[test]
fn test_unknown_flag_is_reported() {
    let err = Pattern::parse_delimited("/a/q").unwrap_err();
    assert_eq!(err.to_string(), "unknown pattern flag `q`");
}
