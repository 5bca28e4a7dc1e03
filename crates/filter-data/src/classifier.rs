//! Line classification for the single scanning pass.
//!
//! Every input line falls into exactly one class. The rules are checked in
//! order and the first match wins, so a line containing both `" manager"`
//! and `"build"` is still a manager line.

/// Substring marking a per-manager backoff report line.
pub const MANAGER_MARKER: &str = " manager";
/// Substring marking build-system noise to discard.
pub const BUILD_MARKER: &str = "build";
/// Substring marking bracketed trace output to discard.
pub const BRACKET_MARKER: &str = "[";

/// The category a line falls into, in rule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Carries a manager id and backoff time; consumed, never echoed.
    Manager,
    /// Build noise; discarded silently.
    Build,
    /// Bracketed trace output; discarded silently.
    Bracket,
    /// Everything else; echoed to the output verbatim.
    PassThrough,
}

/// Classify one line. First matching rule wins.
pub fn classify(line: &str) -> LineClass {
    if line.contains(MANAGER_MARKER) {
        LineClass::Manager
    } else if line.contains(BUILD_MARKER) {
        LineClass::Build
    } else if line.contains(BRACKET_MARKER) {
        LineClass::Bracket
    } else {
        LineClass::PassThrough
    }
}
