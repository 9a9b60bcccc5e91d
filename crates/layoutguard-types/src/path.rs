use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical tree path used in findings and reports.
///
/// Tree paths are rooted at the scanned subdirectory, not the filesystem:
/// - segments separated by `/` only; `\` is an ordinary name character
///   (host separators are handled in [`TreePath::from_relative`])
/// - always a leading `/`
/// - no trailing `/` except for the root itself
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct TreePath(String);

impl Default for TreePath {
    fn default() -> Self {
        TreePath::root()
    }
}

impl TreePath {
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().to_string();
        if !v.starts_with('/') {
            v.insert(0, '/');
        }
        while v.len() > 1 && v.ends_with('/') {
            v.pop();
        }
        Self(v)
    }

    /// Build a tree path from a filesystem path relative to the scanned directory.
    pub fn from_relative(rel: &Utf8Path) -> Self {
        let joined = rel
            .components()
            .map(|c| c.as_str())
            .filter(|c| !matches!(*c, "" | "." | "/"))
            .collect::<Vec<_>>()
            .join("/");
        TreePath::new(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Path segments without the leading root.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    pub fn file_name(&self) -> Option<&str> {
        self.segments().last()
    }

    pub fn join(&self, segment: &str) -> TreePath {
        if self.is_root() {
            TreePath::new(segment)
        } else {
            TreePath::new(format!("{}/{}", self.0, segment.trim_start_matches('/')))
        }
    }
}

impl AsRef<str> for TreePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TreePath {
    fn from(value: &str) -> Self {
        TreePath::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_anchors_and_drops_trailing_slash() {
        assert_eq!(TreePath::new("communication/foo").as_str(), "/communication/foo");
        assert_eq!(TreePath::new("/lifecycle/").as_str(), "/lifecycle");
        assert_eq!(TreePath::new("").as_str(), "/");
        assert!(TreePath::new("/").is_root());
    }

    #[test]
    fn from_relative_drops_dot_components() {
        let p = TreePath::from_relative(Utf8Path::new("./dir/nested/.hidden"));
        assert_eq!(p.as_str(), "/dir/nested/.hidden");
        assert_eq!(p.file_name(), Some(".hidden"));
    }

    #[test]
    fn backslash_is_part_of_a_segment() {
        let p = TreePath::new("/communication/a\\b");
        assert_eq!(p.as_str(), "/communication/a\\b");
        assert_eq!(p.segments().collect::<Vec<_>>(), vec!["communication", "a\\b"]);
    }

    #[cfg(unix)]
    #[test]
    fn from_relative_keeps_backslash_names_on_unix() {
        let p = TreePath::from_relative(Utf8Path::new("communication/a\\b"));
        assert_eq!(p.as_str(), "/communication/a\\b");
    }

    #[test]
    fn join_handles_root() {
        assert_eq!(TreePath::root().join("a").as_str(), "/a");
        assert_eq!(TreePath::new("/a").join("b").as_str(), "/a/b");
    }
}
