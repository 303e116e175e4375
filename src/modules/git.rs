//! Git branch and status.

use std::sync::Arc;

use async_trait::async_trait;
use space_context::{CommandRunner, GitStatus, detectors::git};

use super::{Module, ModuleError, ModuleId};
use crate::context::Context;
use crate::style::{BOLD, BOLD_RESET, FG_RESET, fg};

/// Powerline branch glyph.
const BRANCH_GLYPH: char = '\u{e0a0}';

pub struct GitModule {
    runner: Arc<dyn CommandRunner>,
}

impl GitModule {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl Module for GitModule {
    fn id(&self) -> ModuleId {
        ModuleId::Git
    }

    async fn render(&self, ctx: &Context) -> Result<String, ModuleError> {
        let status = git::detect(self.runner.as_ref(), &ctx.working_dir).await?;
        Ok(status.as_ref().map(fragment).unwrap_or_default())
    }
}

fn fragment(status: &GitStatus) -> String {
    let mut out = format!(
        "{} on{}{}{} {} {}{}{}",
        fg("white"),
        FG_RESET,
        fg("magenta"),
        BOLD,
        BRANCH_GLYPH,
        status.branch,
        BOLD_RESET,
        FG_RESET
    );

    let indicator = status.indicator();
    if !indicator.is_empty() {
        out.push_str(&format!(" {}[{}]{}", fg("red"), indicator, FG_RESET));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::testing::{self, CannedRunner};

    #[tokio::test]
    async fn test_branch_and_flags() {
        // The canned runner also answers the stash probe
        let module = GitModule::new(Arc::new(CannedRunner(Some(
            "## main...origin/main [ahead 2]\n M src/lib.rs\n?? notes.md\n",
        ))));
        let out = module.render(&testing::default_context()).await.unwrap();
        assert_eq!(
            out,
            "%F{white} on%f%F{magenta}%B \u{e0a0} main%b%f %F{red}[?!$⇡]%f"
        );
    }

    #[test]
    fn test_clean_tree_has_no_brackets() {
        let status = GitStatus {
            branch: "main".to_string(),
            ..Default::default()
        };
        assert_eq!(
            fragment(&status),
            "%F{white} on%f%F{magenta}%B \u{e0a0} main%b%f"
        );
    }

    #[tokio::test]
    async fn test_not_a_repository() {
        let module = GitModule::new(Arc::new(CannedRunner(None)));
        let out = module.render(&testing::default_context()).await.unwrap();
        assert_eq!(out, "");
    }

    #[tokio::test]
    async fn test_header_too_short() {
        let module = GitModule::new(Arc::new(CannedRunner(Some("##"))));
        let out = module.render(&testing::default_context()).await.unwrap();
        assert_eq!(out, "");
    }
}
