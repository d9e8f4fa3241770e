use crate::{
    api::{Page, Scope, TimeLog},
    call::{Call, Reply},
    session::{Caller, UsageError},
};

use doomstack::Top;

use serde_json::json;

pub struct TimeLogEndpoints<'a, C: Caller> {
    caller: &'a C,
    scope: Scope<'a>,
}

impl<'a, C> TimeLogEndpoints<'a, C>
where
    C: Caller,
{
    pub(in crate::api) fn new(caller: &'a C, scope: Scope<'a>) -> Self {
        TimeLogEndpoints { caller, scope }
    }

    /// Time logged on `project` (narrowed to `task` when given), most
    /// recent first.
    pub fn get(
        &self,
        project: &str,
        task: Option<&str>,
        after: Option<&str>,
        limit: u32,
    ) -> Result<Reply<Page<TimeLog>>, Top<UsageError>> {
        let mut args = json!({ "project": project, "sortDir": "desc", "limit": limit });

        if let Some(task) = task {
            args["task"] = json!(task);
        }

        if let Some(after) = after {
            args["after"] = json!(after);
        }

        self.scope
            .issue(self.caller, Call::get("/api/v1/timeLog/get"), args)
    }

    pub fn create(
        &self,
        project: &str,
        task: &str,
        duration: u64,
        note: Option<&str>,
    ) -> Result<Reply<TimeLog>, Top<UsageError>> {
        let mut args = json!({ "project": project, "task": task, "duration": duration });

        if let Some(note) = note {
            args["note"] = json!(note);
        }

        self.scope
            .issue(self.caller, Call::post("/api/v1/timeLog/create"), args)
    }

    pub fn set_duration(
        &self,
        project: &str,
        time_log: &str,
        duration: u64,
    ) -> Result<Reply<()>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::post("/api/v1/timeLog/setDuration"),
            json!({ "project": project, "timeLog": time_log, "duration": duration }),
        )
    }

    pub fn delete(&self, project: &str, time_log: &str) -> Result<Reply<()>, Top<UsageError>> {
        self.scope.issue(
            self.caller,
            Call::post("/api/v1/timeLog/delete"),
            json!({ "project": project, "timeLog": time_log }),
        )
    }
}
