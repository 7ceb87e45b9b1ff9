//! # Task Client
//!
//! Provides a high-level API for interacting with the task screen actor.
//! It wraps a `ScreenClient<TaskStore>` and exposes domain-specific methods.

use crate::model::{CreateTaskRequest, CreateTaskResponse};
use crate::task_screen::{TaskCommand, TaskScreenError, TaskSnapshot, TaskStore};
use async_trait::async_trait;
use screen_flow::{FlowError, ScreenClient, ScreenHandle};
use tracing::{debug, instrument};

/// Client for interacting with the task screen actor.
#[derive(Clone)]
pub struct TaskClient {
    inner: ScreenClient<TaskStore>,
}

impl TaskClient {
    pub fn new(inner: ScreenClient<TaskStore>) -> Self {
        Self { inner }
    }

    /// Creates a task on the backend.
    ///
    /// On success the screen reloads its list before answering; a failed
    /// create comes back as an unsuccessful response with the error text.
    #[instrument(skip(self, request))]
    pub async fn create_task(
        &self,
        request: CreateTaskRequest,
    ) -> Result<CreateTaskResponse, TaskScreenError> {
        debug!("Sending create_task to screen actor");
        self.inner
            .submit(request)
            .await
            .map_err(<Self as ScreenHandle<TaskStore>>::map_error)
    }

    /// Clears the outcome of the last create attempt from the view.
    #[instrument(skip(self))]
    pub async fn dismiss_create_result(&self) -> Result<TaskSnapshot, TaskScreenError> {
        self.inner
            .apply(TaskCommand::DismissCreateResult)
            .await
            .map_err(<Self as ScreenHandle<TaskStore>>::map_error)
    }
}

#[async_trait]
impl ScreenHandle<TaskStore> for TaskClient {
    type Error = TaskScreenError;

    fn inner(&self) -> &ScreenClient<TaskStore> {
        &self.inner
    }

    fn map_error(e: FlowError) -> Self::Error {
        TaskScreenError::ScreenCommunication(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screen_flow::mock::{create_mock_client, expect_submit};

    #[tokio::test]
    async fn test_create_task_round_trip() {
        let (client, mut receiver) = create_mock_client::<TaskStore>(10);
        let task_client = TaskClient::new(client);

        let create_task = tokio::spawn(async move {
            task_client
                .create_task(CreateTaskRequest::new(
                    "Call back Medcom LLC",
                    "Discuss the renewed supply agreement",
                ))
                .await
        });

        let (request, responder) = expect_submit(&mut receiver)
            .await
            .expect("Expected Submit request");
        assert_eq!(request.name, "Call back Medcom LLC");

        responder
            .send(Ok(CreateTaskResponse {
                success: true,
                id: Some("42".to_string()),
                message: Some("created".to_string()),
                task: None,
                error: None,
            }))
            .unwrap();

        let response = create_task.await.unwrap().unwrap();
        assert!(response.success);
        assert_eq!(response.id.as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn test_actor_failure_maps_to_screen_communication() {
        let (client, mut receiver) = create_mock_client::<TaskStore>(10);
        let task_client = TaskClient::new(client);

        let create_task = tokio::spawn(async move {
            task_client
                .create_task(CreateTaskRequest::new("Follow up", "Quarterly check-in"))
                .await
        });

        let (_request, responder) = expect_submit(&mut receiver)
            .await
            .expect("Expected Submit request");
        responder.send(Err(FlowError::ActorClosed)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(
            result,
            Err(TaskScreenError::ScreenCommunication(_))
        ));
    }
}
