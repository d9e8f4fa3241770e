use crate::{
    api::{Activity, Member, Page, Scope},
    call::{Call, Reply},
    session::{Caller, UsageError},
};

use doomstack::Top;

use serde_json::json;

pub struct AccountEndpoints<'a, C: Caller> {
    caller: &'a C,
    scope: Scope<'a>,
}

impl<'a, C> AccountEndpoints<'a, C>
where
    C: Caller,
{
    pub(in crate::api) fn new(caller: &'a C, scope: Scope<'a>) -> Self {
        AccountEndpoints { caller, scope }
    }

    /// The signed-in user's membership of this account.
    pub fn get_me(&self) -> Result<Reply<Member>, Top<UsageError>> {
        self.scope
            .issue(self.caller, Call::get("/api/v1/account/getMe"), json!({}))
    }

    pub fn get_members(
        &self,
        role: Option<u8>,
        name_contains: Option<&str>,
        after: Option<&str>,
        limit: u32,
    ) -> Result<Reply<Page<Member>>, Top<UsageError>> {
        let mut args = json!({ "limit": limit });

        if let Some(role) = role {
            args["role"] = json!(role);
        }

        if let Some(name_contains) = name_contains {
            args["nameContains"] = json!(name_contains);
        }

        if let Some(after) = after {
            args["after"] = json!(after);
        }

        self.scope
            .issue(self.caller, Call::get("/api/v1/account/getMembers"), args)
    }

    pub fn get_activities(
        &self,
        item: Option<&str>,
        member: Option<&str>,
        limit: u32,
    ) -> Result<Reply<Vec<Activity>>, Top<UsageError>> {
        let mut args = json!({ "limit": limit });

        if let Some(item) = item {
            args["item"] = json!(item);
        }

        if let Some(member) = member {
            args["member"] = json!(member);
        }

        self.scope
            .issue(self.caller, Call::get("/api/v1/account/getActivities"), args)
    }

    pub fn set_member_role(&self, member: &str, role: u8) -> Result<Reply<()>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::post("/api/v1/account/setMemberRole"),
            json!({ "member": member, "role": role }),
        )
    }

    pub fn set_public_projects_enabled(&self, enabled: bool) -> Result<Reply<()>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::post("/api/v1/account/setPublicProjectsEnabled"),
            json!({ "publicProjectsEnabled": enabled }),
        )
    }

    pub fn get_public_projects_enabled(&self) -> Result<Reply<bool>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::get("/api/v1/account/getPublicProjectsEnabled"),
            json!({}),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::Api,
        session::Direct,
        transport::{test::MockTransport, Response},
        wire::{BatchResponse, ItemResponse},
    };

    use serde_json::json;

    #[tokio::test]
    async fn account_reads_share_a_batch() {
        let transport = MockTransport::new(|exchange| {
            let envelope = exchange.payload.clone().unwrap();

            for key in ["0", "1"] {
                assert_eq!(envelope[key]["region"], json!("euw"));
                assert_eq!(envelope[key]["args"]["shard"], json!(3));
                assert_eq!(envelope[key]["args"]["account"], json!("acc"));
            }

            assert_eq!(envelope["1"]["args"]["limit"], json!(10));
            assert!(envelope["1"]["args"].get("role").is_none());

            let mut response = BatchResponse::default();
            response.insert(
                "0".to_string(),
                ItemResponse {
                    code: 200,
                    body: json!(true),
                },
            );
            response.insert(
                "1".to_string(),
                ItemResponse {
                    code: 200,
                    body: json!({"members": [], "more": true}),
                },
            );

            Some(Response::new(200, serde_json::to_value(response).unwrap()))
        });

        let direct = Direct::new(transport.clone(), Default::default());
        let api = Api::new(direct.batch(Some("euw".to_string())));
        let account = api.account("euw", "3", "acc");

        let enabled = account.get_public_projects_enabled().unwrap();
        let members = account.get_members(None, None, None, 10).unwrap();

        let tally = api.caller().send().unwrap().await.unwrap();

        assert_eq!(tally.fulfilled, 2);
        assert!(enabled.await.unwrap());
        assert!(members.await.unwrap().more);
        assert_eq!(transport.count(), 1);
    }
}
