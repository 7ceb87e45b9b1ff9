//! Integration tests: fetch recovery policy across the screens.

use repsales::api::{ApiError, MockApi};
use repsales::fetch::FetchPolicy;
use repsales::lifecycle::SalesApp;
use repsales::model::{CreateTaskRequest, CreateTaskResponse};
use repsales::samples;
use repsales::task_screen::TaskScreenError;
use screen_flow::ScreenHandle;
use std::sync::Arc;

#[tokio::test]
async fn test_network_failure_serves_the_exact_sample_set() {
    let api = Arc::new(MockApi::new());
    api.queue_tasks(Err(ApiError::Network("connection refused".to_string())));

    let app = SalesApp::new(api.clone());
    let view = app.tasks.refresh().await.unwrap();

    // The fallback is the fixed sample set, not an empty list
    assert_eq!(view.tasks, samples::tasks());
    assert!(view.loaded);
    assert!(view.notice.unwrap().contains("connection refused"));

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_task_list_also_falls_back() {
    let api = Arc::new(MockApi::new());
    api.queue_tasks(Ok(Vec::new()));

    let app = SalesApp::new(api.clone());
    let view = app.tasks.refresh().await.unwrap();

    assert_eq!(view.tasks, samples::tasks());
    // Not an error condition, so no banner
    assert!(view.notice.is_none());

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_propagate_policy_raises_instead_of_recovering() {
    let api = Arc::new(MockApi::new());
    api.queue_tasks(Err(ApiError::Network("connection refused".to_string())));

    let app = SalesApp::with_policy(api.clone(), FetchPolicy::Propagate);
    let result = app.tasks.refresh().await;

    match result {
        Err(TaskScreenError::ScreenCommunication(message)) => {
            assert!(message.contains("connection refused"));
        }
        other => panic!("Expected a propagated fetch failure, got {other:?}"),
    }

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_malformed_response_is_never_masked_by_sample_data() {
    let api = Arc::new(MockApi::new());
    api.queue_products(Err(ApiError::Decode("expected a list".to_string())));

    let app = SalesApp::new(api.clone());
    let result = app.deal.refresh().await;

    // Even under the fallback policy a decode error propagates
    assert!(result.is_err());

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_products_fall_back_on_server_errors() {
    let api = Arc::new(MockApi::new());
    api.queue_products(Err(ApiError::Server {
        status: 502,
        body: "bad gateway".to_string(),
    }));

    let app = SalesApp::new(api.clone());
    let view = app.deal.refresh().await.unwrap();

    assert_eq!(view.products, samples::products());
    assert!(view.notice.is_some());

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_successful_create_reloads_the_task_list() {
    let api = Arc::new(MockApi::new());
    api.queue_tasks(Ok(samples::tasks()));
    api.queue_task_create(Ok(CreateTaskResponse {
        success: true,
        id: Some("42".to_string()),
        message: Some("created".to_string()),
        task: None,
        error: None,
    }));
    // The reload triggered by the successful create
    api.queue_tasks(Ok(samples::tasks()));

    let app = SalesApp::new(api.clone());
    app.tasks.refresh().await.unwrap();

    let response = app
        .tasks
        .create_task(CreateTaskRequest::new("Follow up", "Quarterly check-in"))
        .await
        .unwrap();
    assert!(response.success);
    assert_eq!(api.task_create_calls(), 1);

    let view = app.tasks.view().await.unwrap();
    assert_eq!(view.last_create, Some(response));

    // Dismissing clears the outcome but keeps the list
    let view = app.tasks.dismiss_create_result().await.unwrap();
    assert!(view.last_create.is_none());
    assert!(!view.tasks.is_empty());

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_create_is_surfaced_verbatim() {
    let api = Arc::new(MockApi::new());
    api.queue_tasks(Ok(samples::tasks()));
    api.queue_task_create(Err(ApiError::Server {
        status: 400,
        body: "name is required".to_string(),
    }));

    let app = SalesApp::new(api.clone());
    app.tasks.refresh().await.unwrap();

    let response = app
        .tasks
        .create_task(CreateTaskRequest::new("", ""))
        .await
        .unwrap();

    assert!(!response.success);
    assert!(response.error.unwrap().contains("name is required"));
    // No silent reload on failure
    assert_eq!(api.task_create_calls(), 1);

    app.shutdown().await.unwrap();
}
