use crate::{
    api::{Ancestor, Scope, Task},
    call::{Call, Reply},
    session::{Caller, UsageError},
};

use doomstack::Top;

use serde_json::json;

pub struct TaskEndpoints<'a, C: Caller> {
    caller: &'a C,
    scope: Scope<'a>,
}

impl<'a, C> TaskEndpoints<'a, C>
where
    C: Caller,
{
    pub(in crate::api) fn new(caller: &'a C, scope: Scope<'a>) -> Self {
        TaskEndpoints { caller, scope }
    }

    pub fn get(&self, project: &str, tasks: &[&str]) -> Result<Reply<Vec<Task>>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::get("/api/v1/task/get"),
            json!({ "project": project, "tasks": tasks }),
        )
    }

    /// Children of `parent` in sibling order, starting after
    /// `from_sibling` when given.
    pub fn get_children(
        &self,
        project: &str,
        parent: &str,
        from_sibling: Option<&str>,
        limit: u32,
    ) -> Result<Reply<Vec<Task>>, Top<UsageError>> {
        let mut args = json!({ "project": project, "parent": parent, "limit": limit });

        if let Some(from_sibling) = from_sibling {
            args["fromSibling"] = json!(from_sibling);
        }

        self.scope
            .issue(self.caller, Call::get("/api/v1/task/getChildren"), args)
    }

    pub fn get_ancestors(
        &self,
        project: &str,
        task: &str,
        limit: u32,
    ) -> Result<Reply<Vec<Ancestor>>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::get("/api/v1/task/getAncestorTasks"),
            json!({ "project": project, "task": task, "limit": limit }),
        )
    }

    pub fn create(
        &self,
        project: &str,
        parent: &str,
        previous_sibling: Option<&str>,
        name: &str,
        is_abstract: bool,
    ) -> Result<Reply<Task>, Top<UsageError>> {
        let mut args = json!({
            "project": project,
            "parent": parent,
            "name": name,
            "isAbstract": is_abstract,
        });

        if let Some(previous_sibling) = previous_sibling {
            args["previousSibling"] = json!(previous_sibling);
        }

        self.scope
            .issue(self.caller, Call::post("/api/v1/task/create"), args)
    }

    pub fn set_name(
        &self,
        project: &str,
        task: &str,
        name: &str,
    ) -> Result<Reply<()>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::post("/api/v1/task/setName"),
            json!({ "project": project, "task": task, "name": name }),
        )
    }

    pub fn move_to(
        &self,
        project: &str,
        task: &str,
        new_parent: &str,
        new_previous_sibling: Option<&str>,
    ) -> Result<Reply<()>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::post("/api/v1/task/move"),
            json!({
                "project": project,
                "task": task,
                "newParent": new_parent,
                "newPreviousSibling": new_previous_sibling,
            }),
        )
    }

    pub fn delete(&self, project: &str, task: &str) -> Result<Reply<()>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::post("/api/v1/task/delete"),
            json!({ "project": project, "task": task }),
        )
    }
}
