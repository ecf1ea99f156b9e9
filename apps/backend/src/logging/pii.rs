use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Unanchored email pattern used to find addresses embedded in free text
/// (database error messages, request payload fragments).
fn embedded_email() -> &'static Regex {
    static EMBEDDED_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
    });
    &EMBEDDED_EMAIL
}

/// Masks every email address in `input`: keeps the first character of the
/// local part and the full domain, e.g. `ann@x.com` -> `a***@x.com`.
pub fn redact(input: &str) -> String {
    embedded_email()
        .replace_all(input, |caps: &regex::Captures| {
            let full_match = &caps[0];
            match full_match.split_once('@') {
                Some((local, domain)) => match local.chars().next() {
                    Some(first) => format!("{first}***@{domain}"),
                    None => format!("@{domain}"),
                },
                None => full_match.to_string(),
            }
        })
        .into_owned()
}

/// Wrapper that redacts its contents whenever it is formatted, so it can be
/// dropped straight into `tracing` fields: `email = %Redacted(&email)`.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
