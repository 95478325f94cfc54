//! Tokenizing and re-wrapping of directive command lines such as `ExecStart`.
//!
//! Splitting is lexical: runs of whitespace and backslashes separate tokens.
//! Quoted arguments containing spaces are not kept together.

/// Continuation used when a command line is written one argument per line.
pub const DEFAULT_CONTINUATION: &str = " \\\n    ";

/// How a command line is laid out over physical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLineLayout {
    /// Tokens per physical line; `0` keeps everything on one line.
    pub wrap_every: usize,
    /// Separator placed between physical lines.
    pub continuation: String,
}

impl CommandLineLayout {
    pub fn single_line() -> Self {
        Self { wrap_every: 0, continuation: DEFAULT_CONTINUATION.to_string() }
    }

    /// Recover the layout of an existing value.
    ///
    /// A value without a continuation stays on one line. Otherwise the width is
    /// the token count of the first physical line and the continuation reuses
    /// the indentation of the second one. `fallback` is only consulted when the
    /// first line carries no tokens or no continuation line follows; it never
    /// wraps a value that was written on one line.
    pub fn detect(raw: &str, fallback: &CommandLineLayout) -> Self {
        let mut lines = raw.lines();
        let Some(first) = lines.next() else {
            return Self::single_line();
        };
        if !first.trim_end().ends_with('\\') {
            return Self::single_line();
        }

        let first_width = deserialize(first).len();
        let wrap_every = if first_width == 0 { fallback.wrap_every } else { first_width };

        let continuation = match lines.find(|line| !line.trim().is_empty()) {
            Some(second) => {
                let indent_len = second.len() - second.trim_start().len();
                format!(" \\\n{}", &second[..indent_len])
            }
            None => fallback.continuation.clone(),
        };

        Self { wrap_every, continuation }
    }
}

impl Default for CommandLineLayout {
    fn default() -> Self {
        Self { wrap_every: 1, continuation: DEFAULT_CONTINUATION.to_string() }
    }
}

/// Split a command line into tokens on whitespace and `\` characters.
pub fn deserialize(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == '\\' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tokens with single spaces, breaking the line after every
/// `wrap_every` tokens with `continuation`.
pub fn serialize(tokens: &[String], wrap_every: usize, continuation: &str) -> String {
    if wrap_every == 0 {
        return tokens.join(" ");
    }
    tokens.chunks(wrap_every).map(|chunk| chunk.join(" ")).collect::<Vec<_>>().join(continuation)
}

/// Serialize using a [`CommandLineLayout`].
pub fn serialize_with_layout(tokens: &[String], layout: &CommandLineLayout) -> String {
    serialize(tokens, layout.wrap_every, &layout.continuation)
}
