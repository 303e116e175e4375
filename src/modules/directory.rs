//! Current directory name.

use std::path::Path;

use async_trait::async_trait;

use super::{Module, ModuleError, ModuleId};
use crate::context::Context;
use crate::style::{BOLD, BOLD_RESET, FG_RESET, fg};

pub struct DirectoryModule;

#[async_trait]
impl Module for DirectoryModule {
    fn id(&self) -> ModuleId {
        ModuleId::Directory
    }

    async fn render(&self, ctx: &Context) -> Result<String, ModuleError> {
        let dir = display_name(&ctx.working_dir, &ctx.home);
        Ok(format!(
            "{} in{} {}{}{}{}{}",
            fg("white"),
            FG_RESET,
            fg("cyan"),
            BOLD,
            dir,
            BOLD_RESET,
            FG_RESET
        ))
    }
}

/// `~` for the home directory, otherwise the last path segment.
fn display_name(dir: &Path, home: &Path) -> String {
    if dir == home {
        return "~".to_string();
    }
    match dir.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => dir.display().to_string(),
    }
}
