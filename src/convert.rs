//! Line and document drivers.

use std::sync::LazyLock;

use crate::{
    error::PatternError,
    rules::{Dialect, FixUp, Rule},
};

static STANDARD: LazyLock<Converter> = LazyLock::new(|| {
    Converter::for_dialect(Dialect::Standard).expect("standard rule table compiles")
});

static LEGACY: LazyLock<Converter> = LazyLock::new(|| {
    Converter::for_dialect(Dialect::Legacy).expect("legacy rule table compiles")
});

/// An ordered rule table plus the fix-ups run over the joined document.
#[derive(Debug, Clone)]
pub struct Converter {
    rules: Vec<Rule>,
    fixes: Vec<FixUp>,
}

impl Converter {
    /// Build a converter from already compiled tables.
    #[must_use]
    pub fn new(rules: Vec<Rule>, fixes: Vec<FixUp>) -> Self {
        Self { rules, fixes }
    }

    /// Compile a converter from one of the built-in dialects.
    ///
    /// Prefer [`Converter::standard`] or [`Converter::legacy`], which compile
    /// once per process.
    ///
    /// # Errors
    /// Returns [`PatternError`] if a table entry does not compile.
    pub fn for_dialect(dialect: Dialect) -> Result<Self, PatternError> {
        let (rules, fixes) = dialect.tables()?;
        Ok(Self::new(rules, fixes))
    }

    /// The shared standard-dialect converter.
    ///
    /// # Panics
    /// Panics on first use if the built-in table fails to compile.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// The shared legacy-dialect converter.
    ///
    /// # Panics
    /// Panics on first use if the built-in table fails to compile.
    #[must_use]
    pub fn legacy() -> &'static Self {
        &LEGACY
    }

    /// The shared converter for `dialect`.
    #[must_use]
    pub fn builtin(dialect: Dialect) -> &'static Self {
        match dialect {
            Dialect::Standard => Self::standard(),
            Dialect::Legacy => Self::legacy(),
        }
    }

    /// Run every rule, in order, over a single line.
    ///
    /// Each rule sees the working line trimmed and wrapped in `\n` so block
    /// rules can anchor on the line start. The result is trimmed.
    #[must_use]
    pub fn convert_line(&self, line: &str) -> String {
        let mut line = line.trim().to_string();
        for rule in &self.rules {
            let wrapped = format!("\n{}\n", line.trim());
            if let Some(out) = rule.apply(&wrapped) {
                log::trace!("rule `{}` rewrote {wrapped:?} to {out:?}", rule.name());
                line = out;
            }
        }
        line.trim().to_string()
    }

    /// Convert a whole document.
    ///
    /// Lines are converted independently, rejoined with `\n`, and then every
    /// fix-up runs once over the joined text.
    #[must_use]
    pub fn convert(&self, input: &str) -> String {
        let lines: Vec<String> = input.split('\n').map(|l| self.convert_line(l)).collect();
        log::debug!(
            "converted {} lines with {} rules; applying {} fix-ups",
            lines.len(),
            self.rules.len(),
            self.fixes.len()
        );
        let joined = self
            .fixes
            .iter()
            .fold(lines.join("\n"), |doc, fix| fix.apply(&doc));
        joined.trim().to_string()
    }
}

/// Convert `input` to HTML with the standard rule set.
///
/// # Examples
///
/// ```
/// assert_eq!(mdhtml::convert("# Hello"), "<h1>Hello</h1>");
/// assert_eq!(mdhtml::convert("plain"), "<p>plain</p>");
/// ```
#[must_use]
pub fn convert(input: &str) -> String {
    Converter::standard().convert(input)
}

/// Convert `input` with the legacy rule set.
#[must_use]
pub fn convert_legacy(input: &str) -> String {
    Converter::legacy().convert(input)
}

/// Convert `input` with the built-in rule set for `dialect`.
#[must_use]
pub fn convert_with(input: &str, dialect: Dialect) -> String {
    Converter::builtin(dialect).convert(input)
}

#[cfg(test)]
mod tests {
    use rayon::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::pattern::Pattern;

    #[rstest]
    #[case::h1("# Hello", "<h1>Hello</h1>")]
    #[case::h3("### Hi", "<h3>Hi</h3>")]
    #[case::image("![cat](c.png)", r#"<img src="c.png" alt="cat" />"#)]
    #[case::strike("~~gone~~ now", "<del>gone</del> now")]
    #[case::quote(r#"he said :"hi":"#, "<p>he said <q>hi</q></p>")]
    #[case::ordered("12. twelve", "<ol>\n<li>twelve</li>\n</ol>")]
    #[case::blockquote(">  quoted", "<blockquote>quoted</blockquote>")]
    #[case::padded("   plain text  ", "<p>plain text</p>")]
    #[case::blank("   ", "")]
    fn converts_single_lines(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(Converter::standard().convert_line(line), expected);
    }

    #[test]
    fn list_marker_is_not_emphasis() {
        assert_eq!(
            Converter::standard().convert_line("* *bold*"),
            "<ul>\n<li><em>bold</em></li>\n</ul>"
        );
    }

    #[test]
    fn header_level_comes_from_first_match() {
        // Unanchored, so two headers can share a line. The transform runs once
        // and its output replaces both matches.
        let rule = Rule::transform("header", &Pattern::global(r"(#+) (\w+)"), |g| {
            format!("<h{0}>{1}</h{0}>", g[0].len(), g[1])
        })
        .expect("valid pattern");
        let converter = Converter::new(vec![rule], Vec::new());
        assert_eq!(
            converter.convert_line("# a ### b"),
            "<h1>a</h1> <h1>a</h1>"
        );
    }

    #[test]
    fn empty_tables_only_trim() {
        let converter = Converter::new(Vec::new(), Vec::new());
        assert_eq!(converter.convert("  a  \n b "), "a\nb");
    }

    #[test]
    fn builtin_converters_are_shared() {
        assert!(std::ptr::eq(Converter::builtin(Dialect::Standard), Converter::standard()));
        assert!(std::ptr::eq(Converter::builtin(Dialect::Legacy), Converter::legacy()));
    }

    #[test]
    fn parallel_conversions_match_sequential() {
        let docs: Vec<String> = (0..64)
            .map(|i| format!("# Title {i}\n* item {i}\n* **bold** {i}\n> q\n> r\ntext _{i}_"))
            .collect();
        let sequential: Vec<String> = docs.iter().map(|d| convert(d)).collect();
        let parallel: Vec<String> = docs.par_iter().map(|d| convert(d)).collect();
        assert_eq!(sequential, parallel);
    }
}
