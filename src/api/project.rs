use crate::{
    api::{Activity, Page, Project, ProjectMember, Scope},
    call::{Call, Reply},
    session::{Caller, UsageError},
};

use doomstack::Top;

use serde_json::json;

pub struct ProjectEndpoints<'a, C: Caller> {
    caller: &'a C,
    scope: Scope<'a>,
}

impl<'a, C> ProjectEndpoints<'a, C>
where
    C: Caller,
{
    pub(in crate::api) fn new(caller: &'a C, scope: Scope<'a>) -> Self {
        ProjectEndpoints { caller, scope }
    }

    pub fn get(&self, project: &str) -> Result<Reply<Project>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::get("/api/v1/project/get"),
            json!({ "project": project }),
        )
    }

    /// Lists the account's projects, oldest first.
    pub fn get_set(
        &self,
        is_archived: bool,
        name_contains: Option<&str>,
        after: Option<&str>,
        limit: u32,
    ) -> Result<Reply<Page<Project>>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::get("/api/v1/project/getSet"),
            json!({
                "isArchived": is_archived,
                "nameContains": name_contains,
                "sortBy": "createdOn",
                "sortDir": "asc",
                "after": after,
                "limit": limit,
            }),
        )
    }

    pub fn get_members(
        &self,
        project: &str,
        after: Option<&str>,
        limit: u32,
    ) -> Result<Reply<Page<ProjectMember>>, Top<UsageError>> {
        let mut args = json!({ "project": project, "limit": limit });

        if let Some(after) = after {
            args["after"] = json!(after);
        }

        self.scope
            .issue(self.caller, Call::get("/api/v1/project/getMembers"), args)
    }

    pub fn get_activities(
        &self,
        project: &str,
        limit: u32,
    ) -> Result<Reply<Vec<Activity>>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::get("/api/v1/project/getActivities"),
            json!({ "project": project, "limit": limit }),
        )
    }

    pub fn create(
        &self,
        name: &str,
        description: Option<&str>,
        is_parallel: bool,
        is_public: bool,
    ) -> Result<Reply<Project>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::post("/api/v1/project/create"),
            json!({
                "name": name,
                "description": description,
                "isParallel": is_parallel,
                "isPublic": is_public,
                "members": [],
            }),
        )
    }

    pub fn delete(&self, project: &str) -> Result<Reply<()>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::post("/api/v1/project/delete"),
            json!({ "project": project }),
        )
    }

    pub fn set_is_archived(
        &self,
        project: &str,
        is_archived: bool,
    ) -> Result<Reply<()>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::post("/api/v1/project/setIsArchived"),
            json!({ "project": project, "isArchived": is_archived }),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::Api,
        session::{Direct, EnvelopeForm, SessionSettings, UsageError},
        transport::{test::MockTransport, Method, Response},
    };

    use serde_json::json;

    #[tokio::test]
    async fn address_form_batch_refuses_project_writes() {
        let transport = MockTransport::new(|_| None);

        let settings = SessionSettings {
            form: EnvelopeForm::Address,
            ..Default::default()
        };

        let direct = Direct::new(transport, settings);
        let api = Api::new(direct.batch(Some("use".to_string())));

        let result = api.project("use", "0", "acc").delete("p0");

        assert!(matches!(
            result.err().unwrap().top(),
            UsageError::WriteInReadOnlyBatch
        ));

        assert!(api.caller().is_empty());
    }

    #[tokio::test]
    async fn direct_write_sends_scoped_payload() {
        let transport = MockTransport::new(|exchange| {
            assert_eq!(exchange.method, Method::Post);
            assert_eq!(exchange.address, "/api/v1/project/setIsArchived?region=use");
            Some(Response::new(200, json!(null)))
        });

        let api = Api::new(Direct::new(transport.clone(), Default::default()));

        api.project("use", "7", "acc")
            .set_is_archived("p0", true)
            .unwrap()
            .await
            .unwrap();

        let payload = transport.exchanges().remove(0).payload.unwrap();

        assert_eq!(
            payload,
            json!({"shard": 7, "account": "acc", "project": "p0", "isArchived": true})
        );
    }
}
