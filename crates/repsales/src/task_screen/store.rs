//! Store implementation for the task list screen.

use super::command::TaskCommand;
use super::error::TaskScreenError;
use crate::context::Backend;
use crate::fetch::{self, FetchPolicy};
use crate::model::{CreateTaskRequest, CreateTaskResponse, Task};
use crate::samples;
use async_trait::async_trait;
use screen_flow::ScreenStore;
use tracing::debug;

/// State of the task list screen.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    loaded: bool,
    notice: Option<String>,
    last_create: Option<CreateTaskResponse>,
}

/// What the task screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSnapshot {
    pub tasks: Vec<Task>,
    /// False until the first load completes, so the UI can tell "no tasks"
    /// apart from "not yet loaded".
    pub loaded: bool,
    /// Non-fatal banner text when sample data is being shown.
    pub notice: Option<String>,
    /// Outcome of the most recent create attempt, until dismissed.
    pub last_create: Option<CreateTaskResponse>,
}

#[async_trait]
impl ScreenStore for TaskStore {
    type Command = TaskCommand;
    type Snapshot = TaskSnapshot;
    type SubmitRequest = CreateTaskRequest;
    type SubmitOutcome = CreateTaskResponse;
    type Context = Backend;
    type Error = TaskScreenError;

    async fn load(&mut self, ctx: &Backend) -> Result<(), TaskScreenError> {
        let outcome = match ctx.api.get_tasks().await {
            // An account with nothing configured yet gets the sample set too,
            // so the screen is never blank on first run.
            Ok(tasks) if tasks.is_empty() && ctx.fetch_policy == FetchPolicy::Fallback => {
                debug!("Backend returned no tasks, serving sample data");
                Ok(samples::tasks())
            }
            other => other,
        };

        let loaded = fetch::resolve("tasks", outcome, ctx.fetch_policy, samples::tasks)
            .map_err(TaskScreenError::Fetch)?;
        self.tasks = loaded.records;
        self.notice = loaded.notice;
        self.loaded = true;
        Ok(())
    }

    fn apply(&mut self, command: TaskCommand) -> Result<(), TaskScreenError> {
        match command {
            TaskCommand::DismissCreateResult => self.last_create = None,
        }
        Ok(())
    }

    async fn submit(
        &mut self,
        request: CreateTaskRequest,
        ctx: &Backend,
    ) -> Result<CreateTaskResponse, TaskScreenError> {
        let response = match ctx.api.create_task(&request).await {
            Ok(response) => response,
            // Surfaced verbatim; a create is never recovered silently.
            Err(e) => CreateTaskResponse::failure(e.to_string()),
        };

        if response.success {
            // The backend owns task state; a successful create means the
            // local list is stale, so reload it wholesale.
            self.load(ctx).await?;
        }

        self.last_create = Some(response.clone());
        Ok(response)
    }

    fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot {
            tasks: self.tasks.clone(),
            loaded: self.loaded,
            notice: self.notice.clone(),
            last_create: self.last_create.clone(),
        }
    }
}
