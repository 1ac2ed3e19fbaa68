//! Utility helpers shared across integration tests.

/// Join string slices into a single `\n`-separated document.
///
/// Keeps multi-line inputs and expected outputs readable one line per
/// argument.
#[allow(unused_macros)]
macro_rules! doc {
    ($($line:expr),* $(,)?) => {
        [$($line),*].join("\n")
    };
}
