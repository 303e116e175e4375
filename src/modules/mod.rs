//! Prompt modules.
//!
//! A module inspects one facet of the environment and renders a styled
//! fragment. An empty fragment means the module has nothing to show.
//! Modules never see each other's output.

mod directory;
mod git;
mod golang;
mod hostname;
mod kubernetes;
mod status;
mod took;
mod user;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use space_context::{CommandRunner, ExecError};
use thiserror::Error;

use crate::context::Context;

pub use directory::DirectoryModule;
pub use git::GitModule;
pub use golang::GolangModule;
pub use hostname::HostnameModule;
pub use kubernetes::KubernetesModule;
pub use status::StatusModule;
pub use took::{TookModule, format_duration};
pub use user::UserModule;

/// Identifies a module's slot in the prompt layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleId {
    User,
    Kubernetes,
    Directory,
    Git,
    Golang,
    Took,
    Hostname,
    Status,
}

impl ModuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleId::User => "user",
            ModuleId::Kubernetes => "kubernetes",
            ModuleId::Directory => "directory",
            ModuleId::Git => "git",
            ModuleId::Golang => "golang",
            ModuleId::Took => "took",
            ModuleId::Hostname => "hostname",
            ModuleId::Status => "status",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ModuleError {
    #[error(transparent)]
    Detect(#[from] space_context::Error),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error("getting hostname: {0}")]
    Hostname(#[source] std::io::Error),

    #[error("get current user: {0}")]
    User(#[source] nix::Error),
}

#[async_trait]
pub trait Module: Send + Sync {
    fn id(&self) -> ModuleId;

    /// Render this module's fragment for `ctx`.
    async fn render(&self, ctx: &Context) -> Result<String, ModuleError>;
}

/// The eight standard modules. External commands go through `runner`.
pub fn standard(runner: Arc<dyn CommandRunner>) -> Vec<Arc<dyn Module>> {
    vec![
        Arc::new(UserModule),
        Arc::new(KubernetesModule),
        Arc::new(DirectoryModule),
        Arc::new(GitModule::new(Arc::clone(&runner))),
        Arc::new(GolangModule::new(runner)),
        Arc::new(HostnameModule),
        Arc::new(StatusModule),
        Arc::new(TookModule),
    ]
}
