//! Active Kubernetes context.

use async_trait::async_trait;
use space_context::detectors::kube;

use super::{Module, ModuleError, ModuleId};
use crate::context::Context;
use crate::style::{BOLD, BOLD_RESET, FG_RESET, fg};

pub struct KubernetesModule;

#[async_trait]
impl Module for KubernetesModule {
    fn id(&self) -> ModuleId {
        ModuleId::Kubernetes
    }

    async fn render(&self, ctx: &Context) -> Result<String, ModuleError> {
        let current = kube::current_context(&ctx.home)?;
        Ok(current.map(|name| fragment(&name)).unwrap_or_default())
    }
}

fn fragment(name: &str) -> String {
    format!("{}{} ☸ {}{}{}", BOLD, fg("blue"), name, BOLD_RESET, FG_RESET)
}
