use async_trait::async_trait;
use screen_flow::{FlowError, ScreenActor, ScreenStore};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

// --- Test Store ---
//
// A minimal "inbox" screen: loads a fixed message list from its context,
// filters it with a query command, and submits an acknowledgement counter.

#[derive(Default)]
struct Inbox {
    messages: Vec<String>,
    query: String,
    acked: u32,
}

#[derive(Debug)]
enum InboxCommand {
    SetQuery(String),
    ClearQuery,
}

#[derive(Debug, Clone, PartialEq)]
struct InboxSnapshot {
    visible: Vec<String>,
    acked: u32,
}

#[derive(Debug)]
struct Ack;

struct InboxContext {
    backend: Vec<String>,
    loads: Arc<AtomicU32>,
}

#[derive(Debug, thiserror::Error)]
#[error("Inbox error")]
struct InboxError;

#[async_trait]
impl ScreenStore for Inbox {
    type Command = InboxCommand;
    type Snapshot = InboxSnapshot;
    type SubmitRequest = Ack;
    type SubmitOutcome = u32;
    type Context = InboxContext;
    type Error = InboxError;

    async fn load(&mut self, ctx: &InboxContext) -> Result<(), InboxError> {
        ctx.loads.fetch_add(1, Ordering::SeqCst);
        self.messages = ctx.backend.clone();
        Ok(())
    }

    fn apply(&mut self, command: InboxCommand) -> Result<(), InboxError> {
        match command {
            InboxCommand::SetQuery(q) => self.query = q,
            InboxCommand::ClearQuery => self.query.clear(),
        }
        Ok(())
    }

    async fn submit(&mut self, _request: Ack, _ctx: &InboxContext) -> Result<u32, InboxError> {
        self.acked += 1;
        Ok(self.acked)
    }

    fn snapshot(&self) -> InboxSnapshot {
        let needle = self.query.to_lowercase();
        let visible = self
            .messages
            .iter()
            .filter(|m| needle.is_empty() || m.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        InboxSnapshot {
            visible,
            acked: self.acked,
        }
    }
}

// --- Test ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let loads = Arc::new(AtomicU32::new(0));
    let context = InboxContext {
        backend: vec![
            "Invoice overdue".to_string(),
            "Welcome aboard".to_string(),
            "Invoice paid".to_string(),
        ],
        loads: loads.clone(),
    };

    // Start actor
    let (actor, client) = ScreenActor::<Inbox>::new(10);
    tokio::spawn(actor.run(context));

    // 1. Load replaces the base collection and answers with the derived view
    let view = client.load().await.unwrap();
    assert_eq!(view.visible.len(), 3);
    assert_eq!(loads.load(Ordering::SeqCst), 1);

    // 2. Apply a query; the answer is already recomputed
    let view = client
        .apply(InboxCommand::SetQuery("invoice".into()))
        .await
        .unwrap();
    assert_eq!(view.visible.len(), 2);

    // 3. Snapshot reads without mutating
    let again = client.snapshot().await.unwrap();
    assert_eq!(again, view);

    // 4. Submit flows through the same sequential loop
    let acked = client.submit(Ack).await.unwrap();
    assert_eq!(acked, 1);

    // 5. Clearing the query restores the full collection
    let view = client.apply(InboxCommand::ClearQuery).await.unwrap();
    assert_eq!(view.visible.len(), 3);
    assert_eq!(view.acked, 1);
}

#[tokio::test]
async fn test_reload_is_last_writer_wins() {
    let loads = Arc::new(AtomicU32::new(0));
    let context = InboxContext {
        backend: vec!["One".to_string()],
        loads: loads.clone(),
    };

    let (actor, client) = ScreenActor::<Inbox>::new(10);
    tokio::spawn(actor.run(context));

    // Two loads queue behind each other; both complete, state reflects the last
    client.load().await.unwrap();
    let view = client.load().await.unwrap();
    assert_eq!(view.visible, vec!["One".to_string()]);
    assert_eq!(loads.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let loads = Arc::new(AtomicU32::new(0));
    let context = InboxContext {
        backend: Vec::new(),
        loads,
    };

    let (actor, client) = ScreenActor::<Inbox>::new(10);
    let handle = tokio::spawn(actor.run(context));

    // Dropping every other client and draining the queue shuts the actor down
    let extra = client.clone();
    drop(extra);
    client.snapshot().await.unwrap();
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_store_error_surfaces_as_flow_error() {
    // A store whose load always fails
    #[derive(Default)]
    struct Broken;

    #[derive(Debug)]
    enum NoCommand {}

    #[derive(Debug, thiserror::Error)]
    #[error("backend unreachable")]
    struct BrokenError;

    #[async_trait]
    impl ScreenStore for Broken {
        type Command = NoCommand;
        type Snapshot = ();
        type SubmitRequest = ();
        type SubmitOutcome = ();
        type Context = ();
        type Error = BrokenError;

        async fn load(&mut self, _ctx: &()) -> Result<(), BrokenError> {
            Err(BrokenError)
        }

        fn apply(&mut self, command: NoCommand) -> Result<(), BrokenError> {
            match command {}
        }

        async fn submit(&mut self, _request: (), _ctx: &()) -> Result<(), BrokenError> {
            Ok(())
        }

        fn snapshot(&self) {}
    }

    let (actor, client) = ScreenActor::<Broken>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.load().await.unwrap_err();
    match err {
        FlowError::Store(inner) => assert!(inner.to_string().contains("unreachable")),
        other => panic!("expected Store error, got {other:?}"),
    }
}
