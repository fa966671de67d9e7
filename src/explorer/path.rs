// src/explorer/path.rs
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SEPARATOR: char = '/';

/// A rooted, `/`-delimited navigation location.
///
/// Segments are folder ids. The path never checks them against a tree, so
/// it only means something next to the tree snapshot it was built from.
/// Navigation returns a new value and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ExplorerPath {
    raw: String,
}

impl ExplorerPath {
    pub fn root() -> Self {
        ExplorerPath { raw: SEPARATOR.to_string() }
    }

    /// Builds a path from a raw string, normalised to `/a/b/`.
    /// Empty input (or only separators) is the root.
    pub fn new(initial: &str) -> Self {
        let segments: Vec<&str> = split_segments(initial).collect();
        Self::from_segments(&segments)
    }

    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        if segments.is_empty() {
            return Self::root();
        }
        let mut raw = String::from(SEPARATOR);
        for segment in segments {
            raw.push_str(segment.as_ref());
            raw.push(SEPARATOR);
        }
        ExplorerPath { raw }
    }

    /// Appends `segment` and a trailing separator. The segment is taken
    /// verbatim; keeping it non-empty and separator-free is up to the caller.
    pub fn descend(&self, segment: impl AsRef<str>) -> Self {
        let mut raw = self.raw.clone();
        raw.push_str(segment.as_ref());
        raw.push(SEPARATOR);
        ExplorerPath { raw }
    }

    /// Appends the raw form of another path. Doubled separators that this
    /// produces are ignored by [`segments`](Self::segments).
    pub fn descend_path(&self, other: &ExplorerPath) -> Self {
        self.descend(&other.raw)
    }

    pub fn ascend(&self) -> Self {
        let mut segments = self.segments();
        if segments.len() <= 1 {
            return Self::root();
        }
        segments.pop();
        Self::from_segments(&segments)
    }

    pub fn segments(&self) -> Vec<&str> {
        split_segments(&self.raw).collect()
    }

    pub fn depth(&self) -> usize {
        split_segments(&self.raw).count()
    }

    pub fn is_root(&self) -> bool {
        self.depth() == 0
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Raw internal string, used as-is for the breadcrumb label.
    pub fn to_display_string(&self) -> String {
        self.raw.clone()
    }
}

fn split_segments(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(SEPARATOR).filter(|s| !s.is_empty())
}

impl Default for ExplorerPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for ExplorerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<String> for ExplorerPath {
    fn from(raw: String) -> Self {
        ExplorerPath::new(&raw)
    }
}

impl From<ExplorerPath> for String {
    fn from(path: ExplorerPath) -> Self {
        path.raw
    }
}

impl From<&str> for ExplorerPath {
    fn from(raw: &str) -> Self {
        ExplorerPath::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_root_defaults() {
        assert_eq!(ExplorerPath::root().as_str(), "/");
        assert_eq!(ExplorerPath::default().as_str(), "/");
        assert_eq!(ExplorerPath::new("").as_str(), "/");
        assert_eq!(ExplorerPath::new("///").as_str(), "/");
        assert!(ExplorerPath::root().is_root());
    }

    #[test]
    fn test_new_normalises() {
        assert_eq!(ExplorerPath::new("a/b").as_str(), "/a/b/");
        assert_eq!(ExplorerPath::new("//a//b").as_str(), "/a/b/");
        assert_eq!(ExplorerPath::new("/a/").segments(), vec!["a"]);
    }

    #[test]
    fn test_descend_is_non_destructive() {
        let root = ExplorerPath::root();
        let child = root.descend("pics").descend("jan");
        assert_eq!(root.as_str(), "/");
        assert_eq!(child.as_str(), "/pics/jan/");
        assert_eq!(child.segments(), vec!["pics", "jan"]);
        assert_eq!(child.depth(), 2);
    }

    #[test]
    fn test_descend_path_drops_empty_components() {
        let base = ExplorerPath::new("/a/");
        let other = ExplorerPath::new("/b/c/");
        let joined = base.descend_path(&other);
        assert_eq!(joined.as_str(), "/a//b/c//");
        assert_eq!(joined.segments(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ascend() {
        let path = ExplorerPath::new("/a/b/c/");
        assert_eq!(path.ascend().as_str(), "/a/b/");
        assert_eq!(path.ascend().ascend().as_str(), "/a/");
        assert_eq!(path.ascend().ascend().ascend().as_str(), "/");
    }

    #[test]
    fn test_ascend_at_root_stays_at_root() {
        let root = ExplorerPath::root();
        assert_eq!(root.ascend().as_str(), "/");
        assert_eq!(root.ascend().ascend().as_str(), "/");
    }

    #[test]
    fn test_display_is_raw() {
        let path = ExplorerPath::root().descend("x1");
        assert_eq!(path.to_string(), "/x1/");
        assert_eq!(path.to_display_string(), "/x1/");
    }

    #[test]
    fn test_deserialize_normalises() {
        let path: ExplorerPath = serde_json::from_str("\"a/b\"").unwrap();
        assert_eq!(path, ExplorerPath::new("a/b"));
        assert_eq!(path.as_str(), "/a/b/");

        let root: ExplorerPath = serde_json::from_str("\"\"").unwrap();
        assert!(root.is_root());
    }

    #[test]
    fn test_serialize_is_raw_string() {
        let path = ExplorerPath::root().descend("x1");
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"/x1/\"");
    }

    fn segment() -> impl Strategy<Value = String> {
        "[a-z0-9-]{1,12}"
    }

    proptest! {
        #[test]
        fn prop_segments_match_descended(segs in prop::collection::vec(segment(), 0..8)) {
            let path = segs.iter().fold(ExplorerPath::root(), |p, s| p.descend(s));
            let got: Vec<String> = path.segments().iter().map(|s| s.to_string()).collect();
            prop_assert_eq!(got, segs);
        }

        #[test]
        fn prop_ascend_undoes_descend(
            segs in prop::collection::vec(segment(), 0..8),
            extra in segment(),
        ) {
            let path = ExplorerPath::from_segments(&segs);
            let back = path.descend(&extra).ascend();
            prop_assert_eq!(back.as_str(), path.as_str());
        }
    }
}
