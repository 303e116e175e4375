//! Environment context types.
//!
//! Defines the data structures detectors produce.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Everything the detectors know about one directory.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Environment {
    /// Directory the detection ran in.
    pub dir: String,
    /// Git repository status.
    pub git: Option<GitStatus>,
    /// Go toolchain version.
    pub go: Option<GoVersion>,
    /// Active Kubernetes context.
    pub kube_context: Option<String>,
}

/// A kind of change present somewhere in the working tree.
///
/// Variant order is the order glyphs are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChangeFlag {
    Untracked,
    Staged,
    Modified,
    Renamed,
    Deleted,
    Unmerged,
}

impl ChangeFlag {
    /// Prompt glyph for this flag.
    pub fn glyph(self) -> &'static str {
        match self {
            ChangeFlag::Untracked => "?",
            ChangeFlag::Staged => "+",
            ChangeFlag::Modified => "!",
            ChangeFlag::Renamed => "»",
            ChangeFlag::Deleted => "✘",
            ChangeFlag::Unmerged => "=",
        }
    }
}

/// Glyph for a non-empty stash. Rendered between Deleted and Unmerged.
pub const STASH_GLYPH: &str = "$";

/// Relation of the local branch to its upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AheadBehind {
    #[default]
    None,
    Ahead,
    Behind,
    Diverged,
}

impl AheadBehind {
    pub fn from_flags(ahead: bool, behind: bool) -> Self {
        match (ahead, behind) {
            (true, true) => AheadBehind::Diverged,
            (true, false) => AheadBehind::Ahead,
            (false, true) => AheadBehind::Behind,
            (false, false) => AheadBehind::None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            AheadBehind::None => "",
            AheadBehind::Ahead => "⇡",
            AheadBehind::Behind => "⇣",
            AheadBehind::Diverged => "⇕",
        }
    }
}

/// Git repository status information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GitStatus {
    /// Current branch name.
    pub branch: String,
    /// Change kinds present in the working tree or index.
    pub flags: BTreeSet<ChangeFlag>,
    /// Upstream relation.
    pub ahead_behind: AheadBehind,
    /// Whether `refs/stash` exists.
    pub has_stash: bool,
}

impl GitStatus {
    /// Format the status as a compact glyph string (e.g., "?!$⇡").
    ///
    /// Empty when nothing is set.
    pub fn indicator(&self) -> String {
        let mut s = String::new();
        for flag in self.flags.iter().filter(|f| **f != ChangeFlag::Unmerged) {
            s.push_str(flag.glyph());
        }
        if self.has_stash {
            s.push_str(STASH_GLYPH);
        }
        if self.flags.contains(&ChangeFlag::Unmerged) {
            s.push_str(ChangeFlag::Unmerged.glyph());
        }
        s.push_str(self.ahead_behind.glyph());
        s
    }
}

/// Go toolchain version, by the shape of `go version` output it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoVersion {
    /// `go version go1.21.5 linux/amd64`
    Release(String),
    /// `go version devel go1.22-3f8f929d60 Tue Oct 3 ... linux/amd64`
    Development(String),
}

impl GoVersion {
    pub fn version(&self) -> &str {
        match self {
            GoVersion::Release(v) | GoVersion::Development(v) => v,
        }
    }
}
