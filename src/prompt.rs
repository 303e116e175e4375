//! Prompt orchestration.
//!
//! All modules run concurrently against one shared [`Context`]. Rendering
//! waits for every module to finish, then stitches fragments together in
//! layout order, so the output never depends on which module finished first.

use std::collections::HashMap;
use std::sync::Arc;

use space_context::CommandRunner;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::context::Context;
use crate::modules::{self, Module, ModuleError, ModuleId};
use crate::style;

/// One piece of the prompt layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// A module's fragment (empty when the module is missing or failed).
    Module(ModuleId),
    Newline,
    /// Closing arrows in the accent color.
    Trailer,
}

/// Two-line layout: context on the first line, host and status on the second.
pub const STANDARD_LAYOUT: &[Segment] = &[
    Segment::Newline,
    Segment::Module(ModuleId::User),
    Segment::Module(ModuleId::Kubernetes),
    Segment::Module(ModuleId::Directory),
    Segment::Module(ModuleId::Git),
    Segment::Module(ModuleId::Golang),
    Segment::Module(ModuleId::Took),
    Segment::Newline,
    Segment::Module(ModuleId::Hostname),
    Segment::Module(ModuleId::Status),
    Segment::Trailer,
];

pub struct Prompt {
    modules: Vec<Arc<dyn Module>>,
    layout: Vec<Segment>,
    color: String,
}

impl Prompt {
    pub fn new(modules: Vec<Arc<dyn Module>>, layout: &[Segment], color: &str) -> Self {
        Self {
            modules,
            layout: layout.to_vec(),
            color: color.to_string(),
        }
    }

    /// The standard modules in the standard layout.
    pub fn standard(runner: Arc<dyn CommandRunner>, color: &str) -> Self {
        Self::new(modules::standard(runner), STANDARD_LAYOUT, color)
    }

    /// Render the prompt for `ctx`.
    pub async fn render(&self, ctx: Arc<Context>) -> String {
        let fragments = self.run_modules(ctx).await;
        self.assemble(&fragments)
    }

    /// Run every module in its own task and wait for all of them.
    ///
    /// Failed or panicked modules yield an empty fragment.
    async fn run_modules(&self, ctx: Arc<Context>) -> HashMap<ModuleId, String> {
        let handles: Vec<(ModuleId, JoinHandle<Result<String, ModuleError>>)> = self
            .modules
            .iter()
            .map(|module| {
                let module = Arc::clone(module);
                let ctx = Arc::clone(&ctx);
                let id = module.id();
                (id, tokio::spawn(async move { module.render(&ctx).await }))
            })
            .collect();

        let mut fragments = HashMap::with_capacity(handles.len());
        for (id, handle) in handles {
            let fragment = match handle.await {
                Ok(Ok(fragment)) => fragment,
                Ok(Err(e)) => {
                    warn!(module = %id, error = %e, "module failed");
                    String::new()
                }
                Err(e) => {
                    warn!(module = %id, error = %e, "module task aborted");
                    String::new()
                }
            };
            debug!(module = %id, empty = fragment.is_empty(), "module finished");
            fragments.insert(id, fragment);
        }
        fragments
    }

    fn assemble(&self, fragments: &HashMap<ModuleId, String>) -> String {
        let mut out = String::new();
        for segment in &self.layout {
            match segment {
                Segment::Module(id) => {
                    if let Some(fragment) = fragments.get(id) {
                        out.push_str(fragment);
                    }
                }
                Segment::Newline => out.push('\n'),
                Segment::Trailer => out.push_str(&style::trailer(&self.color)),
            }
        }
        out
    }
}
