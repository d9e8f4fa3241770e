mod account;
mod central_account;
mod entities;
mod project;
mod task;
mod time_log;

pub use account::AccountEndpoints;
pub use central_account::CentralAccountEndpoints;
pub use entities::{
    Account, Activity, Ancestor, Authenticated, Me, Member, Page, Project, ProjectMember, Task,
    TimeLog,
};
pub use project::ProjectEndpoints;
pub use task::TaskEndpoints;
pub use time_log::TimeLogEndpoints;

use crate::{
    call::{Call, Reply},
    session::{Caller, UsageError},
};

use doomstack::Top;

use serde_json::Value;

/// Typed wrappers over the remote API's `v1` endpoints. Works the same
/// over a `Direct` session (one exchange per call) or a `Batch` (all
/// calls in one exchange on `send`).
pub struct Api<C: Caller> {
    caller: C,
}

impl<C> Api<C>
where
    C: Caller,
{
    pub fn new(caller: C) -> Self {
        Api { caller }
    }

    pub fn caller(&self) -> &C {
        &self.caller
    }

    pub fn into_caller(self) -> C {
        self.caller
    }

    pub fn central_account(&self) -> CentralAccountEndpoints<'_, C> {
        CentralAccountEndpoints::new(&self.caller)
    }

    pub fn account<'a>(
        &'a self,
        region: &'a str,
        shard: &'a str,
        account: &'a str,
    ) -> AccountEndpoints<'a, C> {
        AccountEndpoints::new(&self.caller, Scope::new(region, shard, account))
    }

    pub fn project<'a>(
        &'a self,
        region: &'a str,
        shard: &'a str,
        account: &'a str,
    ) -> ProjectEndpoints<'a, C> {
        ProjectEndpoints::new(&self.caller, Scope::new(region, shard, account))
    }

    pub fn task<'a>(
        &'a self,
        region: &'a str,
        shard: &'a str,
        account: &'a str,
    ) -> TaskEndpoints<'a, C> {
        TaskEndpoints::new(&self.caller, Scope::new(region, shard, account))
    }

    pub fn time_log<'a>(
        &'a self,
        region: &'a str,
        shard: &'a str,
        account: &'a str,
    ) -> TimeLogEndpoints<'a, C> {
        TimeLogEndpoints::new(&self.caller, Scope::new(region, shard, account))
    }
}

/// Where a regional call lands: the account's region, the shard holding
/// it, and the account itself. Shards travel as given and are coerced to
/// numbers when the call is registered.
#[derive(Clone, Copy)]
struct Scope<'a> {
    region: &'a str,
    shard: &'a str,
    account: &'a str,
}

impl<'a> Scope<'a> {
    fn new(region: &'a str, shard: &'a str, account: &'a str) -> Self {
        Scope {
            region,
            shard,
            account,
        }
    }

    fn issue<C, T>(
        &self,
        caller: &C,
        call: Call,
        mut args: Value,
    ) -> Result<Reply<T>, Top<UsageError>>
    where
        C: Caller,
    {
        if let Value::Object(members) = &mut args {
            members.insert("shard".to_string(), Value::from(self.shard));
            members.insert("account".to_string(), Value::from(self.account));
        }

        issue(caller, call.args(args).region(self.region))
    }
}

fn issue<C, T>(caller: &C, call: Call) -> Result<Reply<T>, Top<UsageError>>
where
    C: Caller,
{
    caller.call(call).map(Reply::cast)
}
