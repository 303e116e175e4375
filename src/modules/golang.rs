//! Go toolchain version, shown inside Go modules.

use std::sync::Arc;

use async_trait::async_trait;
use space_context::{CommandRunner, detectors::go};

use super::{Module, ModuleError, ModuleId};
use crate::context::Context;
use crate::style::{FG_RESET, fg};

pub struct GolangModule {
    runner: Arc<dyn CommandRunner>,
}

impl GolangModule {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl Module for GolangModule {
    fn id(&self) -> ModuleId {
        ModuleId::Golang
    }

    async fn render(&self, ctx: &Context) -> Result<String, ModuleError> {
        let version = go::detect(self.runner.as_ref(), &ctx.working_dir).await?;
        Ok(version
            .map(|v| format!("{} Go v{}{}", fg("cyan"), v.version(), FG_RESET))
            .unwrap_or_default())
    }
}
