//! Exit status of the last command.

use async_trait::async_trait;

use super::{Module, ModuleError, ModuleId};
use crate::context::Context;
use crate::style::{BG_RESET, BOLD, BOLD_RESET, FG_RESET, bg, fg};

pub struct StatusModule;

#[async_trait]
impl Module for StatusModule {
    fn id(&self) -> ModuleId {
        ModuleId::Status
    }

    async fn render(&self, ctx: &Context) -> Result<String, ModuleError> {
        let (color, glyph) = if ctx.status == 0 {
            ("green", '✓')
        } else {
            ("red", '✗')
        };
        Ok(format!(
            "{}{}{} {} {}{}{}",
            BOLD,
            bg("black"),
            fg(color),
            glyph,
            BG_RESET,
            FG_RESET,
            BOLD_RESET
        ))
    }
}
