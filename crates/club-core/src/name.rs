//! Client identity.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// A client's name: a non-empty token over `[a-z0-9_-]`.
///
/// Names are immutable once parsed.  `ClientName` implements `Borrow<str>`
/// so name-keyed maps can be queried with a plain `&str`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ClientName(String);

impl ClientName {
    /// Validate and wrap `s`.
    pub fn parse(s: &str) -> CoreResult<Self> {
        if is_valid_name(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(invalid_name(s))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid_name(s: &str) -> CoreError {
    CoreError::Parse(format!("invalid client name {s:?}: expected one or more of [a-z0-9_-]"))
}

fn is_valid_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}

impl FromStr for ClientName {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClientName {
    type Error = CoreError;

    fn try_from(s: String) -> CoreResult<Self> {
        if is_valid_name(&s) {
            Ok(Self(s))
        } else {
            Err(invalid_name(&s))
        }
    }
}

impl From<ClientName> for String {
    fn from(name: ClientName) -> String {
        name.0
    }
}

impl Borrow<str> for ClientName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
