use serde::Deserialize;
use std::fmt;

/// A gitignore template as advertised by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Template {
    pub name: String,
    pub download_url: String,
}

/// A template the user picked, together with its downloaded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTemplate {
    pub name: String,
    pub text: String,
}

/// Identifies one in-flight download so late results can be matched or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FetchToken(pub u64);

impl FetchToken {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for FetchToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    pub token: FetchToken,
    pub name: String,
    pub started: bool,
}
