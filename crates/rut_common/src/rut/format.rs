//! Display formatting: `12345678` + `5` becomes `12.345.678-5`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical display form of a validated RUT
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormattedRut(String);

impl FormattedRut {
    pub(crate) fn from_display(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedRut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormattedRut {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Group `body` in threes from the right with dots and append `-check`.
///
/// Dots already present in `body` are kept: a new dot is only inserted
/// while the segment before the first dot is longer than three characters,
/// so the output never starts with a dot and re-formatting is a no-op.
pub fn format(body: &str, check: char) -> String {
    let mut code: Vec<char> = body.chars().collect();

    loop {
        let head = code.iter().position(|&c| c == '.').unwrap_or(code.len());
        if head <= 3 {
            break;
        }
        code.insert(head - 3, '.');
    }

    let mut out: String = code.into_iter().collect();
    out.push('-');
    out.push(check);
    out
}

/// Format a compact code whose last character is the check character.
pub fn format_compact(code: &str) -> Option<String> {
    let mut chars = code.chars();
    let check = chars.next_back()?;
    Some(format(chars.as_str(), check))
}
