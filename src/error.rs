//! Error type for pattern descriptions.

/// A rule pattern could not be parsed or compiled.
///
/// The built-in rule tables are constants, so for them this only surfaces while
/// the tables themselves are being edited. Caller-supplied tables receive it
/// from [`crate::Pattern::compile`] and the rule constructors.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("pattern literal `{literal}` has no closing delimiter")]
    Unterminated { literal: String },
    #[error("unknown pattern flag `{flag}`")]
    UnknownFlag { flag: char },
    #[error("pattern `{body}` does not compile")]
    Syntax {
        body: String,
        #[source]
        source: regex::Error,
    },
}
