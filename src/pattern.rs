//! Pattern descriptions and the generic substitution primitive.
//!
//! A [`Pattern`] is a regular expression body plus a small set of [`Flags`].
//! Compiling it yields a [`Matcher`], which finds matches and rewrites them
//! through a [`Template`].

use std::{fmt, ops::Range};

use regex::{Regex, RegexBuilder};

use crate::{error::PatternError, template::Template};

/// Matching switches carried alongside a pattern body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent regex switch"
)]
pub struct Flags {
    /// Replace every non-overlapping match instead of only the first (`g`).
    pub global: bool,
    /// `i`
    pub case_insensitive: bool,
    /// `m`
    pub multi_line: bool,
    /// `s`
    pub dot_matches_newline: bool,
}

impl Flags {
    pub const NONE: Self = Self {
        global: false,
        case_insensitive: false,
        multi_line: false,
        dot_matches_newline: false,
    };

    pub const GLOBAL: Self = Self {
        global: true,
        ..Self::NONE
    };

    /// Parse a flag suffix such as `"gi"`.
    ///
    /// # Errors
    /// Returns [`PatternError::UnknownFlag`] for any letter outside `gims`.
    pub fn parse(suffix: &str) -> Result<Self, PatternError> {
        let mut flags = Self::NONE;
        for flag in suffix.chars() {
            match flag {
                'g' => flags.global = true,
                'i' => flags.case_insensitive = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_matches_newline = true,
                _ => return Err(PatternError::UnknownFlag { flag }),
            }
        }
        Ok(flags)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (set, letter) in [
            (self.global, 'g'),
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_newline, 's'),
        ] {
            if set {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// An uncompiled pattern: a regex body and its flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    body: String,
    flags: Flags,
}

impl Pattern {
    /// A pattern from a regex body and flags.
    #[must_use]
    pub fn new(body: impl Into<String>, flags: Flags) -> Self {
        Self {
            body: body.into(),
            flags,
        }
    }

    /// Shorthand for a pattern with only the `g` flag.
    #[must_use]
    pub fn global(body: impl Into<String>) -> Self {
        Self::new(body, Flags::GLOBAL)
    }

    /// Parse the delimiter-wrapped notation `/body/flags`.
    ///
    /// The first character is the delimiter. The body runs up to its last
    /// occurrence and the flags follow it.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdhtml::Pattern;
    /// let p = Pattern::parse_delimited(r"/\*(.*?)\*/g").unwrap();
    /// assert_eq!(p.body(), r"\*(.*?)\*");
    /// assert!(p.flags().global);
    /// ```
    ///
    /// # Errors
    /// Returns [`PatternError::Unterminated`] when the closing delimiter is
    /// missing, or [`PatternError::UnknownFlag`] for an unsupported flag.
    pub fn parse_delimited(literal: &str) -> Result<Self, PatternError> {
        let unterminated = || PatternError::Unterminated {
            literal: literal.to_string(),
        };
        let delimiter = literal.chars().next().ok_or_else(unterminated)?;
        let open = delimiter.len_utf8();
        let close = literal.rfind(delimiter).filter(|&i| i >= open).ok_or_else(unterminated)?;
        let flags = Flags::parse(&literal[close + open..])?;
        Ok(Self::new(&literal[open..close], flags))
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Compile into a [`Matcher`].
    ///
    /// # Errors
    /// Returns [`PatternError::Syntax`] if the body is not a valid regex.
    pub fn compile(&self) -> Result<Matcher, PatternError> {
        let regex = RegexBuilder::new(&self.body)
            .case_insensitive(self.flags.case_insensitive)
            .multi_line(self.flags.multi_line)
            .dot_matches_new_line(self.flags.dot_matches_newline)
            .build()
            .map_err(|source| PatternError::Syntax {
                body: self.body.clone(),
                source,
            })?;
        Ok(Matcher {
            pattern: self.clone(),
            regex,
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.body, self.flags)
    }
}

/// A compiled [`Pattern`].
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: Pattern,
    regex: Regex,
}

impl Matcher {
    /// The pattern this matcher was compiled from.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Whether `subject` contains at least one match.
    #[must_use]
    pub fn is_match(&self, subject: &str) -> bool {
        self.regex.is_match(subject)
    }

    /// Capture groups of the first match.
    ///
    /// Yields groups 1 and up when the pattern has capture groups, otherwise
    /// the whole match alone. Non-participating groups come back empty.
    #[must_use]
    pub fn first_groups<'s>(&self, subject: &'s str) -> Option<Vec<&'s str>> {
        let caps = self.regex.captures(subject)?;
        let text = |m: Option<regex::Match<'s>>| m.map_or("", |m| m.as_str());
        let groups = if caps.len() > 1 {
            caps.iter().skip(1).map(text).collect()
        } else {
            vec![text(caps.get(0))]
        };
        Some(groups)
    }

    /// Rewrite the matches in `subject` with `template`.
    ///
    /// Every match is rewritten when the pattern is global, otherwise only the
    /// first. Replacements are spliced from the last match backwards so earlier
    /// byte ranges stay valid.
    #[must_use]
    pub fn replace(&self, subject: &str, template: &Template) -> String {
        let limit = if self.pattern.flags.global { usize::MAX } else { 1 };
        let spans: Vec<(Range<usize>, String)> = self
            .regex
            .captures_iter(subject)
            .take(limit)
            .filter_map(|caps| caps.get(0).map(|m| (m.range(), template.expand(&caps))))
            .collect();
        let mut out = subject.to_string();
        for (range, text) in spans.into_iter().rev() {
            out.replace_range(range, &text);
        }
        out
    }
}
