//! One-shot environment scan for diagnostics.

use std::path::Path;

use tracing::warn;

use crate::context::Environment;
use crate::detectors::{git, go, kube};
use crate::exec::CommandRunner;

/// Run every detector against `dir` concurrently.
///
/// Detector errors are logged and leave their field unset.
pub async fn scan(runner: &dyn CommandRunner, dir: &Path, home: &Path) -> Environment {
    let (git_status, go_version) = tokio::join!(git::detect(runner, dir), go::detect(runner, dir));

    let git = git_status.unwrap_or_else(|e| {
        warn!(error = %e, "git detection failed");
        None
    });
    let go = go_version.unwrap_or_else(|e| {
        warn!(error = %e, "go detection failed");
        None
    });
    let kube_context = kube::current_context(home).unwrap_or_else(|e| {
        warn!(error = %e, "kubeconfig detection failed");
        None
    });

    Environment {
        dir: dir.display().to_string(),
        git,
        go,
        kube_context,
    }
}
