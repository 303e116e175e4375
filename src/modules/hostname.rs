//! Short hostname, with an SSH marker for remote sessions.

use async_trait::async_trait;

use super::{Module, ModuleError, ModuleId};
use crate::context::Context;
use crate::style::{BG_RESET, FG_RESET, bg, fg};

/// Marker shown before the hostname inside SSH sessions.
const SSH_GLYPH: char = '\u{fd3d}';

pub struct HostnameModule;

#[async_trait]
impl Module for HostnameModule {
    fn id(&self) -> ModuleId {
        ModuleId::Hostname
    }

    async fn render(&self, ctx: &Context) -> Result<String, ModuleError> {
        let host = hostname::get().map_err(ModuleError::Hostname)?;
        Ok(fragment(&host.to_string_lossy(), ctx.in_ssh))
    }
}

fn fragment(host: &str, in_ssh: bool) -> String {
    let mut out = String::new();
    if in_ssh {
        out.push_str(&format!("{} {}{}", bg("black"), SSH_GLYPH, BG_RESET));
    }
    out.push_str(&format!(
        "{}{} {}{}{}",
        bg("black"),
        fg("white"),
        short_hostname(host),
        BG_RESET,
        FG_RESET
    ));
    out
}

/// Hostname up to the first `.`.
fn short_hostname(host: &str) -> &str {
    host.split('.').next().unwrap_or(host)
}
