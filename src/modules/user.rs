//! Privileged user marker.

use async_trait::async_trait;
use nix::unistd::{Uid, User};

use super::{Module, ModuleError, ModuleId};
use crate::context::Context;
use crate::style::{FG_RESET, fg};

/// Only this account is called out in the prompt.
const PRIVILEGED_USER: &str = "root";

pub struct UserModule;

#[async_trait]
impl Module for UserModule {
    fn id(&self) -> ModuleId {
        ModuleId::User
    }

    async fn render(&self, _ctx: &Context) -> Result<String, ModuleError> {
        let user = User::from_uid(Uid::current()).map_err(ModuleError::User)?;
        Ok(user.map(|u| fragment(&u.name)).unwrap_or_default())
    }
}

fn fragment(name: &str) -> String {
    if name != PRIVILEGED_USER {
        return String::new();
    }
    format!("{} {}{}", fg("red"), name, FG_RESET)
}
