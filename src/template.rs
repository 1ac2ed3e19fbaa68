//! Replacement templates with positional capture-group placeholders.
//!
//! Three placeholder notations are recognised: `${n}` takes any number of
//! digits, while `$n` and `\n` take exactly one digit. Anything else, including
//! a lone `$` or `\`, is literal text.

use regex::Captures;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Text(String),
    Group(usize),
}

/// A parsed replacement template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Parse `source`, turning placeholders into group references.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdhtml::Template;
    /// let t = Template::parse(r#"<a href="\2">${1}</a>"#);
    /// assert_eq!(t.group_count(), 2);
    /// ```
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let mut pieces = Vec::new();
        let mut text = String::new();
        let mut rest = source;
        while let Some(ch) = rest.chars().next() {
            if let Some((group, consumed)) = placeholder(rest) {
                if !text.is_empty() {
                    pieces.push(Piece::Text(std::mem::take(&mut text)));
                }
                pieces.push(Piece::Group(group));
                rest = &rest[consumed..];
                continue;
            }
            text.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
        if !text.is_empty() {
            pieces.push(Piece::Text(text));
        }
        Self { pieces }
    }

    /// A template that always expands to `text`, placeholders included.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        let pieces = if text.is_empty() {
            Vec::new()
        } else {
            vec![Piece::Text(text)]
        };
        Self { pieces }
    }

    /// Number of group references in the template.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|p| matches!(p, Piece::Group(_)))
            .count()
    }

    /// Expand the template against one match.
    ///
    /// Groups that are absent from the pattern or did not take part in the
    /// match expand to nothing.
    #[must_use]
    pub fn expand(&self, caps: &Captures<'_>) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Text(t) => out.push_str(t),
                Piece::Group(n) => out.push_str(caps.get(*n).map_or("", |m| m.as_str())),
            }
        }
        out
    }
}

/// Recognise a placeholder at the start of `s`, returning the group index and
/// the number of bytes it occupies.
fn placeholder(s: &str) -> Option<(usize, usize)> {
    if let Some(inner) = s.strip_prefix("${") {
        let close = inner.find('}')?;
        let digits = &inner[..close];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let group = digits.parse().ok()?;
        return Some((group, close + 3));
    }
    let mut bytes = s.bytes();
    match bytes.next()? {
        b'$' | b'\\' => {}
        _ => return None,
    }
    let digit = bytes.next().filter(u8::is_ascii_digit)?;
    Some((usize::from(digit - b'0'), 2))
}
