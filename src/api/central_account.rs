use crate::{
    api::{issue, Account, Authenticated, Me, Page},
    call::{Call, Reply},
    session::{Caller, UsageError},
};

use doomstack::Top;

use serde_json::json;

/// Endpoints of the central (unsharded) account service. None of these
/// carry a region, so they cannot join a regional batch.
pub struct CentralAccountEndpoints<'a, C: Caller> {
    caller: &'a C,
}

impl<'a, C> CentralAccountEndpoints<'a, C>
where
    C: Caller,
{
    pub(in crate::api) fn new(caller: &'a C) -> Self {
        CentralAccountEndpoints { caller }
    }

    pub fn get_regions(&self) -> Result<Reply<Vec<String>>, Top<UsageError>> {
        issue(self.caller, Call::get("/api/v1/centralAccount/getRegions"))
    }

    pub fn get_account(&self, name: &str) -> Result<Reply<Account>, Top<UsageError>> {
        issue(
            self.caller,
            Call::get("/api/v1/centralAccount/getAccount").args(json!({ "name": name })),
        )
    }

    pub fn get_accounts(&self, accounts: &[&str]) -> Result<Reply<Vec<Account>>, Top<UsageError>> {
        issue(
            self.caller,
            Call::get("/api/v1/centralAccount/getAccounts").args(json!({ "accounts": accounts })),
        )
    }

    pub fn search_accounts(&self, prefix: &str) -> Result<Reply<Vec<Account>>, Top<UsageError>> {
        issue(
            self.caller,
            Call::get("/api/v1/centralAccount/searchAccounts")
                .args(json!({ "nameOrDisplayNameStartsWith": prefix })),
        )
    }

    pub fn get_me(&self) -> Result<Reply<Me>, Top<UsageError>> {
        issue(self.caller, Call::get("/api/v1/centralAccount/getMe"))
    }

    pub fn get_my_accounts(
        &self,
        after: Option<&str>,
        limit: u32,
    ) -> Result<Reply<Page<Account>>, Top<UsageError>> {
        issue(
            self.caller,
            Call::get("/api/v1/centralAccount/getMyAccounts")
                .args(json!({ "after": after, "limit": limit })),
        )
    }

    pub fn authenticate(
        &self,
        email: &str,
        pwd: &str,
    ) -> Result<Reply<Authenticated>, Top<UsageError>> {
        issue(
            self.caller,
            Call::post("/api/v1/centralAccount/authenticate")
                .args(json!({ "email": email, "pwdTry": pwd })),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn register(
        &self,
        name: &str,
        email: &str,
        pwd: &str,
        region: &str,
        language: &str,
        display_name: Option<&str>,
        theme: u8,
    ) -> Result<Reply<()>, Top<UsageError>> {
        issue(
            self.caller,
            Call::post("/api/v1/centralAccount/register").args(json!({
                "name": name,
                "email": email,
                "pwd": pwd,
                "region": region,
                "language": language,
                "displayName": display_name,
                "theme": theme,
            })),
        )
    }

    pub fn create_account(
        &self,
        name: &str,
        region: &str,
        display_name: Option<&str>,
    ) -> Result<Reply<Account>, Top<UsageError>> {
        issue(
            self.caller,
            Call::post("/api/v1/centralAccount/createAccount").args(json!({
                "name": name,
                "region": region,
                "displayName": display_name,
            })),
        )
    }

    pub fn delete_account(&self, account: &str) -> Result<Reply<()>, Top<UsageError>> {
        issue(
            self.caller,
            Call::post("/api/v1/centralAccount/deleteAccount").args(json!({ "account": account })),
        )
    }
}
