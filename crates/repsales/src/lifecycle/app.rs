//! Runtime orchestrator for the sales client.

use crate::api::SalesApi;
use crate::clients::{ContragentClient, DealClient, TaskClient};
use crate::context::Backend;
use crate::fetch::FetchPolicy;
use crate::{contragent_screen, deal_screen, task_screen};
use std::sync::Arc;
use tracing::info;

/// The running application: one actor per screen over a shared backend.
///
/// # Architecture
///
/// Three independent screen actors run behind the typed clients:
/// - **Task screen**: the task list and the create-task round trip
/// - **Contragent screen**: the searchable, sortable counterparty directory
/// - **Deal screen**: the product catalog, the cart, and the checkout
///
/// Each screen owns its own state; nothing is shared between them apart from
/// the backend handle, so there is no cross-screen locking to reason about.
///
/// # Example
///
/// ```ignore
/// let api = Arc::new(HttpSalesApi::new(config)?);
/// let app = SalesApp::new(api);
///
/// app.deal.refresh().await?;
/// app.deal.add_to_cart(product_id).await?;
/// let outcome = app.deal.place_order().await?;
///
/// app.shutdown().await?;
/// ```
pub struct SalesApp {
    /// Client for the task list screen
    pub tasks: TaskClient,

    /// Client for the contragent directory screen
    pub contragents: ContragentClient,

    /// Client for the deal workspace screen
    pub deal: DealClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl SalesApp {
    /// Spawns every screen actor over the given backend with the default
    /// fallback policy.
    pub fn new(api: Arc<dyn SalesApi>) -> Self {
        Self::with_policy(api, FetchPolicy::default())
    }

    /// Spawns every screen actor with an explicit fetch policy.
    pub fn with_policy(api: Arc<dyn SalesApi>, fetch_policy: FetchPolicy) -> Self {
        let backend = Backend::with_policy(api, fetch_policy);

        let (task_actor, task_client) = task_screen::new();
        let (contragent_actor, contragent_client) = contragent_screen::new();
        let (deal_actor, deal_client) = deal_screen::new();

        let handles = vec![
            tokio::spawn(task_actor.run(backend.clone())),
            tokio::spawn(contragent_actor.run(backend.clone())),
            tokio::spawn(deal_actor.run(backend)),
        ];

        info!("Sales client started");

        Self {
            tasks: TaskClient::new(task_client),
            contragents: ContragentClient::new(contragent_client),
            deal: DealClient::new(deal_client),
            handles,
        }
    }

    /// Shuts the application down gracefully.
    ///
    /// Dropping the clients closes every actor's channel; awaiting the
    /// handles then lets each actor drain its queue and exit.
    pub async fn shutdown(self) -> Result<(), String> {
        let Self {
            tasks,
            contragents,
            deal,
            handles,
        } = self;
        drop(tasks);
        drop(contragents);
        drop(deal);

        for handle in handles {
            handle.await.map_err(|e| e.to_string())?;
        }

        info!("Sales client stopped");
        Ok(())
    }
}
