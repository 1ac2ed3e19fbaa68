//! Conversion rules and the built-in rule tables.
//!
//! Rule order matters: each rule sees the output of the ones before it. The
//! tables run structural rules (headers, images, links) first, then inline
//! marks, then the line-anchored block rules, which rely on the `\n` the
//! driver wraps around every line.

use std::borrow::Cow;

use crate::{
    error::PatternError,
    pattern::{Flags, Matcher, Pattern},
    template::Template,
};

/// Computes a replacement from the capture groups of a line's first match.
///
/// The slice holds groups 1 and up, or the whole match when the pattern has
/// no groups.
pub type Transform = fn(&[&str]) -> String;

/// How a rule rewrites its matches.
#[derive(Debug, Clone)]
pub enum Replacement {
    Template(Template),
    Transform(Transform),
}

/// One entry in a rule table.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    matcher: Matcher,
    replacement: Replacement,
}

impl Rule {
    /// Build a rule whose matches are rewritten with `template`.
    ///
    /// # Errors
    /// Returns [`PatternError`] if `pattern` does not compile.
    pub fn template(
        name: &'static str,
        pattern: &Pattern,
        template: &str,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            name,
            matcher: pattern.compile()?,
            replacement: Replacement::Template(Template::parse(template)),
        })
    }

    /// Build a rule whose replacement is computed by `transform`.
    ///
    /// # Errors
    /// Returns [`PatternError`] if `pattern` does not compile.
    pub fn transform(
        name: &'static str,
        pattern: &Pattern,
        transform: Transform,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            name,
            matcher: pattern.compile()?,
            replacement: Replacement::Transform(transform),
        })
    }

    /// Name used in log output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn replacement(&self) -> &Replacement {
        &self.replacement
    }

    /// Apply the rule to `subject`, or return `None` if nothing matches.
    ///
    /// A transform runs once, on the first match, and its output replaces
    /// every match the pattern's flags select.
    #[must_use]
    pub fn apply(&self, subject: &str) -> Option<String> {
        let groups = self.matcher.first_groups(subject)?;
        let template = match &self.replacement {
            Replacement::Template(t) => Cow::Borrowed(t),
            Replacement::Transform(f) => Cow::Owned(Template::literal(f(&groups))),
        };
        Some(self.matcher.replace(subject, &template))
    }
}

/// A whole-document rewrite run after the per-line pass.
#[derive(Debug, Clone)]
pub struct FixUp {
    matcher: Matcher,
    template: Template,
}

impl FixUp {
    /// Build a fix-up rewriting every match of `pattern` with `template`.
    ///
    /// # Errors
    /// Returns [`PatternError`] if `pattern` does not compile.
    pub fn new(pattern: &Pattern, template: &str) -> Result<Self, PatternError> {
        Ok(Self {
            matcher: pattern.compile()?,
            template: Template::parse(template),
        })
    }

    /// Rewrite the joined document.
    #[must_use]
    pub fn apply(&self, document: &str) -> String {
        self.matcher.replace(document, &self.template)
    }
}

/// The built-in rule sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Headers, images, links, inline marks, lists, blockquotes and paragraphs.
    #[default]
    Standard,
    /// The earlier rule set: no images, lists or paragraphs, and `<i>` for
    /// emphasis.
    Legacy,
}

impl Dialect {
    /// Compile the rule and fix-up tables for this dialect.
    ///
    /// # Errors
    /// Returns [`PatternError`] if a table entry does not compile.
    pub fn tables(self) -> Result<(Vec<Rule>, Vec<FixUp>), PatternError> {
        match self {
            Self::Standard => Ok((standard_rules()?, standard_fixes()?)),
            Self::Legacy => Ok((legacy_rules()?, legacy_fixes()?)),
        }
    }
}

const LINK: &str = r"\[([^\[\]]+)\]\(([^()]+)\)";
const STRIKE: &str = r"(~~)(.*?)~~";
const QUOTE: &str = r#":"(.*?)":"#;
const BLOCKQUOTE: &str = r"\n>(.*)";

fn standard_rules() -> Result<Vec<Rule>, PatternError> {
    let paragraph = Pattern::new(
        r"\A\n.+\n\z",
        Flags {
            dot_matches_newline: true,
            ..Flags::GLOBAL
        },
    );
    Ok(vec![
        Rule::transform("header", &Pattern::global(r"\n(#+)(.*)"), header)?,
        Rule::template(
            "image",
            &Pattern::global(r"!\[([^\[\]]+)\]\(([^()]+)\)"),
            r#"<img src="\2" alt="\1" />"#,
        )?,
        Rule::template("link", &Pattern::global(LINK), r#"<a href="\2">\1</a>"#)?,
        Rule::template(
            "bold",
            &Pattern::global(r"\*\*(\S(?:.*?\S)?)\*\*|__(\S(?:.*?\S)?)__"),
            "<strong>${1}${2}</strong>",
        )?,
        Rule::template(
            "emphasis",
            &Pattern::global(r"\*(\S(?:.*?\S)?)\*|_(\S(?:.*?\S)?)_"),
            "<em>${1}${2}</em>",
        )?,
        Rule::template("strike", &Pattern::global(STRIKE), r"<del>\2</del>")?,
        Rule::template("quote", &Pattern::global(QUOTE), r"<q>\1</q>")?,
        Rule::transform("unordered list", &Pattern::global(r"\n\*(.*)"), unordered_item)?,
        Rule::transform("ordered list", &Pattern::global(r"\n[0-9]+\.(.*)"), ordered_item)?,
        Rule::transform("blockquote", &Pattern::global(BLOCKQUOTE), blockquote)?,
        Rule::transform("paragraph", &paragraph, paragraph_line)?,
    ])
}

fn standard_fixes() -> Result<Vec<FixUp>, PatternError> {
    Ok(vec![
        FixUp::new(&Pattern::global(r"</ul>\n<ul>"), "\n")?,
        FixUp::new(&Pattern::global(r"</ol>\n<ol>"), "\n")?,
        FixUp::new(&Pattern::global(r"</blockquote>\n<blockquote>"), "\n")?,
    ])
}

fn legacy_rules() -> Result<Vec<Rule>, PatternError> {
    Ok(vec![
        Rule::transform("header", &Pattern::global(r"(#+)(.*)"), header)?,
        Rule::template("link", &Pattern::global(LINK), r#"<a href="\2">\1</a>"#)?,
        Rule::template(
            "bold",
            &Pattern::global(r"\*\*(.*?)\*\*|__(.*?)__"),
            "<strong>${1}${2}</strong>",
        )?,
        Rule::template(
            "emphasis",
            &Pattern::global(r"\*(.*?)\*|_(.*?)_"),
            "<i>${1}${2}</i>",
        )?,
        Rule::template("strike", &Pattern::global(STRIKE), r"<del>\2</del>")?,
        Rule::template("quote", &Pattern::global(QUOTE), r"<q>\1</q>")?,
        Rule::transform("blockquote", &Pattern::global(BLOCKQUOTE), blockquote)?,
    ])
}

fn legacy_fixes() -> Result<Vec<FixUp>, PatternError> {
    Ok(vec![FixUp::new(
        &Pattern::global(r"</blockquote>\n<blockquote>"),
        "\n",
    )?])
}

fn group<'a>(groups: &[&'a str], idx: usize) -> &'a str {
    groups.get(idx).copied().unwrap_or_default()
}

fn header(groups: &[&str]) -> String {
    let level = group(groups, 0).len();
    format!("<h{level}>{}</h{level}>", group(groups, 1).trim())
}

fn unordered_item(groups: &[&str]) -> String {
    format!("<ul>\n<li>{}</li>\n</ul>", group(groups, 0).trim())
}

fn ordered_item(groups: &[&str]) -> String {
    format!("<ol>\n<li>{}</li>\n</ol>", group(groups, 0).trim())
}

fn blockquote(groups: &[&str]) -> String {
    format!("<blockquote>{}</blockquote>", group(groups, 0).trim())
}

// Lines that already open with a tag were claimed by an earlier rule.
fn paragraph_line(groups: &[&str]) -> String {
    let line = group(groups, 0).trim();
    if line.starts_with('<') {
        line.to_string()
    } else {
        format!("\n<p>{line}</p>\n")
    }
}
