//! Idempotent enforcement of mandatory command-line flags.

/// A flag that must be present on a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandatoryFlag {
    /// Prefix identifying the flag, including the `=`.
    pub prefix: &'static str,
    /// Value appended after the prefix when the flag is missing.
    pub default_value: &'static str,
}

/// Flags the kubelet must run with, applied in this order.
pub const KUBELET_MANDATORY_FLAGS: &[MandatoryFlag] = &[
    MandatoryFlag { prefix: "--container-runtime=", default_value: "remote" },
    MandatoryFlag {
        prefix: "--container-runtime-endpoint=",
        default_value: "unix:///run/containerd/containerd.sock",
    },
];

/// Append `prefix + default_value` unless a token already starts with `prefix`.
///
/// Existing tokens are never rewritten or deduplicated.
pub fn ensure_string_with_prefix(
    mut tokens: Vec<String>,
    prefix: &str,
    default_value: &str,
) -> Vec<String> {
    if !tokens.iter().any(|token| token.starts_with(prefix)) {
        tokens.push(format!("{}{}", prefix, default_value));
    }
    tokens
}

/// Apply every flag in `flags`, in order.
pub fn ensure_flags(tokens: Vec<String>, flags: &[MandatoryFlag]) -> Vec<String> {
    flags.iter().fold(tokens, |tokens, flag| {
        ensure_string_with_prefix(tokens, flag.prefix, flag.default_value)
    })
}
