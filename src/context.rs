use crate::api::Me;

use doomstack::{here, Doom, ResultExt, Top};

#[derive(Doom)]
pub enum ContextError {
    #[doom(description("No identity: sign in first"))]
    SignedOut,
}

/// Identity of the signed-in user, handed explicitly to the code that
/// needs it. Populated on sign-in, cleared on sign-out.
#[derive(Debug, Clone, Default)]
pub struct Context {
    me: Option<Me>,
}

impl Context {
    pub fn new() -> Self {
        Context::default()
    }

    pub fn sign_in(&mut self, me: Me) {
        self.me = Some(me);
    }

    pub fn sign_out(&mut self) -> Option<Me> {
        self.me.take()
    }

    pub fn is_signed_in(&self) -> bool {
        self.me.is_some()
    }

    pub fn me(&self) -> Result<&Me, Top<ContextError>> {
        self.me
            .as_ref()
            .ok_or_else(|| ContextError::SignedOut.into_top())
            .spot(here!())
    }
}
