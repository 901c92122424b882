/// A piece of SQL supplied by the caller and inserted into a statement
/// as-is.
///
/// Fragments are not escaped or parameterized. Only pass text that the
/// application controls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SqlFragment(String);

impl SqlFragment {
    pub fn new(sql: impl Into<String>) -> SqlFragment {
        SqlFragment(sql.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the fragment has no SQL text at all.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for SqlFragment {
    fn from(src: &str) -> SqlFragment {
        SqlFragment::new(src)
    }
}

impl From<String> for SqlFragment {
    fn from(src: String) -> SqlFragment {
        SqlFragment(src)
    }
}

impl From<&String> for SqlFragment {
    fn from(src: &String) -> SqlFragment {
        SqlFragment(src.clone())
    }
}

impl AsRef<str> for SqlFragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SqlFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
