//! Git repository detection.
//!
//! Status comes from `git status --porcelain -b`. The first line is the branch
//! header (`## main...origin/main [ahead 1]`), every other line is a two
//! character status code followed by a path.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::context::{AheadBehind, ChangeFlag, GitStatus};
use crate::error::ExecError;
use crate::exec::CommandRunner;

/// Shortest output that still holds a branch header.
const MIN_OUTPUT_LEN: usize = 4;

/// Header prefix before the branch name.
const HEADER_PREFIX_LEN: usize = 3;

/// Header text for a branch without commits.
const INITIAL_PREFIX: &str = "No commits yet on ";

static UNTRACKED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\?\? ").expect("Invalid untracked regex"));
static STAGED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(A[ MDAU] |M[ MD] |UA)").expect("Invalid staged regex")
});
static MODIFIED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ MARC]M ").expect("Invalid modified regex"));
static RENAMED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^R[ MD]").expect("Invalid renamed regex"));
static DELETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([MARCDU ]D|D[ UM]) ").expect("Invalid deleted regex")
});
static UNMERGED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(U[UDA]|AA|DD|[DA]U) ").expect("Invalid unmerged regex")
});

static AHEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^## .*ahead").expect("Invalid ahead regex"));
static BEHIND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^## .*behind").expect("Invalid behind regex"));

/// Status code patterns, matched against any line of the output.
fn classifiers() -> [(ChangeFlag, &'static Regex); 6] {
    [
        (ChangeFlag::Untracked, &*UNTRACKED),
        (ChangeFlag::Staged, &*STAGED),
        (ChangeFlag::Modified, &*MODIFIED),
        (ChangeFlag::Renamed, &*RENAMED),
        (ChangeFlag::Deleted, &*DELETED),
        (ChangeFlag::Unmerged, &*UNMERGED),
    ]
}

/// Detect git repository status in `dir`.
///
/// `Ok(None)` when `dir` is not a repository, git is not installed, or the
/// output carries no branch header.
pub async fn detect(
    runner: &dyn CommandRunner,
    dir: &Path,
) -> Result<Option<GitStatus>, ExecError> {
    let (output, has_stash) = tokio::join!(
        runner.output("git", &["status", "--porcelain", "-b"], dir),
        has_stash(runner, dir),
    );

    let output = match output {
        Ok(out) => out,
        Err(e) if e.is_absence() => {
            debug!(error = %e, "no git status");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    Ok(parse_porcelain(&output).map(|status| GitStatus {
        has_stash,
        ..status
    }))
}

/// Check whether a stash reference exists.
async fn has_stash(runner: &dyn CommandRunner, dir: &Path) -> bool {
    runner
        .output("git", &["rev-parse", "--verify", "--quiet", "refs/stash"], dir)
        .await
        .is_ok()
}

/// Parse porcelain-with-branch output into a status summary.
///
/// Flags are a presence bitmap: a code seen on any number of lines sets its
/// flag once. Patterns overlap, so one path can set several flags.
/// Returns `None` for output too short to hold a branch header.
pub fn parse_porcelain(output: &[u8]) -> Option<GitStatus> {
    if output.len() < MIN_OUTPUT_LEN {
        return None;
    }

    let text = String::from_utf8_lossy(output);
    let header = text.lines().next().unwrap_or_default();

    let flags = classifiers()
        .into_iter()
        .filter(|(_, re)| re.is_match(&text))
        .map(|(flag, _)| flag)
        .collect();

    let ahead = AHEAD.is_match(header);
    let behind = BEHIND.is_match(header);

    Some(GitStatus {
        branch: parse_branch(output),
        flags,
        ahead_behind: AheadBehind::from_flags(ahead, behind),
        has_stash: false,
    })
}

/// Branch name: header bytes after `## ` up to the first `.` or newline.
fn parse_branch(output: &[u8]) -> String {
    let end = output
        .iter()
        .position(|b| *b == b'.' || *b == b'\n')
        .unwrap_or(output.len());

    if end <= HEADER_PREFIX_LEN {
        return String::new();
    }

    let branch = String::from_utf8_lossy(&output[HEADER_PREFIX_LEN..end]);
    branch
        .strip_prefix(INITIAL_PREFIX)
        .unwrap_or(&branch)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::time::Duration;

    fn flags(status: &GitStatus) -> Vec<ChangeFlag> {
        status.flags.iter().copied().collect()
    }

    #[test]
    fn test_ahead() {
        let status = parse_porcelain(b"## main...origin/main [ahead 2]\n").unwrap();
        assert_eq!(status.branch, "main");
        assert_eq!(status.ahead_behind, AheadBehind::Ahead);
        assert!(status.flags.is_empty());
    }

    #[test]
    fn test_behind() {
        let status = parse_porcelain(b"## dev...origin/dev [behind 4]\n").unwrap();
        assert_eq!(status.branch, "dev");
        assert_eq!(status.ahead_behind, AheadBehind::Behind);
    }

    #[test]
    fn test_diverged() {
        let status = parse_porcelain(b"## main...origin/main [ahead 1, behind 3]\n").unwrap();
        assert_eq!(status.ahead_behind, AheadBehind::Diverged);
    }

    #[test]
    fn test_no_upstream() {
        let status = parse_porcelain(b"## feature\n").unwrap();
        assert_eq!(status.branch, "feature");
        assert_eq!(status.ahead_behind, AheadBehind::None);
    }

    #[test]
    fn test_initial_commit_prefix_stripped() {
        let status = parse_porcelain(b"## No commits yet on main").unwrap();
        assert_eq!(status.branch, "main");
    }

    #[test]
    fn test_short_input_is_empty() {
        assert_eq!(parse_porcelain(b""), None);
        assert_eq!(parse_porcelain(b"## "), None);
    }

    #[test]
    fn test_branch_stops_at_dot() {
        let status = parse_porcelain(b"## release-1.2...origin/release-1.2\n").unwrap();
        assert_eq!(status.branch, "release-1");
    }

    #[test]
    fn test_ahead_only_read_from_header() {
        let output = b"## main\n?? ahead.txt\n?? behind.txt\n";
        let status = parse_porcelain(output).unwrap();
        assert_eq!(status.ahead_behind, AheadBehind::None);
        assert_eq!(flags(&status), vec![ChangeFlag::Untracked]);
    }

    #[test]
    fn test_each_classifier() {
        let cases: &[(&[u8], ChangeFlag)] = &[
            (b"## main\n?? new.rs\n", ChangeFlag::Untracked),
            (b"## main\nA  added.rs\n", ChangeFlag::Staged),
            (b"## main\n M edited.rs\n", ChangeFlag::Modified),
            (b"## main\nR  old.rs -> new.rs\n", ChangeFlag::Renamed),
            (b"## main\n D gone.rs\n", ChangeFlag::Deleted),
            (b"## main\nUU conflict.rs\n", ChangeFlag::Unmerged),
        ];
        for (output, expected) in cases {
            let status = parse_porcelain(output).unwrap();
            assert!(
                status.flags.contains(expected),
                "{:?} not set for {:?}",
                expected,
                String::from_utf8_lossy(output)
            );
        }
    }

    #[test]
    fn test_all_classifiers_in_one_output() {
        let output = b"## main\n?? a\nA  b\n M c\nR  d -> e\n D f\nUU g\n";
        let status = parse_porcelain(output).unwrap();
        assert_eq!(
            flags(&status),
            vec![
                ChangeFlag::Untracked,
                ChangeFlag::Staged,
                ChangeFlag::Modified,
                ChangeFlag::Renamed,
                ChangeFlag::Deleted,
                ChangeFlag::Unmerged,
            ]
        );
    }

    #[test]
    fn test_flag_set_once_for_many_lines() {
        let output = b"## main\n M a.rs\n M b.rs\n M c.rs\n?? x\n?? y\n";
        let status = parse_porcelain(output).unwrap();
        assert_eq!(
            flags(&status),
            vec![ChangeFlag::Untracked, ChangeFlag::Modified]
        );
        assert_eq!(status.indicator(), "?!");
    }

    #[test]
    fn test_renamed_and_modified_both_set() {
        let output = b"## main\nRM old.rs -> new.rs\n";
        let status = parse_porcelain(output).unwrap();
        assert_eq!(flags(&status), vec![ChangeFlag::Modified, ChangeFlag::Renamed]);
    }

    #[test]
    fn test_order_independent_of_line_order() {
        let output = b"## main...origin/main [ahead 1]\nUU c.rs\n D b.rs\n?? a.rs\nA  d.rs\n";
        let status = parse_porcelain(output).unwrap();
        assert_eq!(status.indicator(), "?+✘=⇡");
    }

    /// Runner answering from a table keyed by the joined argument list.
    struct FakeRunner {
        answers: HashMap<String, Result<Vec<u8>, fn() -> ExecError>>,
    }

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn output(
            &self,
            _program: &str,
            args: &[&str],
            _cwd: &Path,
        ) -> Result<Vec<u8>, ExecError> {
            match self.answers.get(&args.join(" ")) {
                Some(Ok(out)) => Ok(out.clone()),
                Some(Err(make)) => Err(make()),
                None => Err(not_a_repo()),
            }
        }
    }

    fn not_a_repo() -> ExecError {
        ExecError::Spawn {
            program: "git".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
    }

    fn timed_out() -> ExecError {
        ExecError::TimedOut {
            program: "git".to_string(),
            timeout: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn test_detect_with_stash() {
        let mut answers = HashMap::new();
        answers.insert(
            "status --porcelain -b".to_string(),
            Ok(b"## main\n M a.rs\nUU b.rs\n".to_vec()),
        );
        answers.insert(
            "rev-parse --verify --quiet refs/stash".to_string(),
            Ok(b"abc123\n".to_vec()),
        );
        let runner = FakeRunner { answers };

        let status = detect(&runner, Path::new(".")).await.unwrap().unwrap();
        assert!(status.has_stash);
        assert_eq!(status.indicator(), "!$=");
    }

    #[tokio::test]
    async fn test_detect_not_a_repository() {
        let runner = FakeRunner {
            answers: HashMap::new(),
        };
        assert_eq!(detect(&runner, Path::new(".")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_detect_timeout_is_error() {
        let mut answers = HashMap::new();
        answers.insert(
            "status --porcelain -b".to_string(),
            Err(timed_out as fn() -> ExecError),
        );
        let runner = FakeRunner { answers };
        assert!(detect(&runner, Path::new(".")).await.is_err());
    }
}
