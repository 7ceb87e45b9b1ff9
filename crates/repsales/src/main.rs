//! Demo driver for the sales client core.
//!
//! Loads every screen against the configured backend (or the built-in sample
//! sets when it is unreachable), walks a small deal through the cart and the
//! checkout, and creates a follow-up task.

use repsales::api::HttpSalesApi;
use repsales::config::ApiConfig;
use repsales::lifecycle::{setup_tracing, SalesApp};
use repsales::model::CreateTaskRequest;
use repsales::view::contragents::ContragentSort;
use screen_flow::ScreenHandle;
use std::sync::Arc;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting sales client");

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Backend not configured, using local demo settings");
            ApiConfig {
                base_url: "http://localhost:8055/sales".to_string(),
                username: "demo".to_string(),
                password: "demo".to_string(),
                timeout_secs: 10,
            }
        }
    };

    let api = Arc::new(HttpSalesApi::new(config).map_err(|e| e.to_string())?);
    let app = SalesApp::new(api);

    // Load every screen; an unreachable backend serves the sample sets
    let span = tracing::info_span!("initial_load");
    async {
        let tasks = app.tasks.refresh().await.map_err(|e| e.to_string())?;
        info!(count = tasks.tasks.len(), "Tasks loaded");
        if let Some(next) = tasks.tasks.first() {
            info!(name = %next.name, due = %next.execution_date_display(), "First task");
        }

        app.contragents.refresh().await.map_err(|e| e.to_string())?;
        let directory = app
            .contragents
            .sort_by(ContragentSort::TotalSum)
            .await
            .map_err(|e| e.to_string())?;
        info!(count = directory.contragents.len(), "Contragents loaded");
        if let Some(top) = directory.contragents.first() {
            info!(
                name = %top.name,
                segment = %top.segment,
                last_order = %top.last_order_display(),
                "Top contragent by total sum"
            );
        }

        let catalog = app.deal.refresh().await.map_err(|e| e.to_string())?;
        info!(count = catalog.products.len(), "Products loaded");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Walk a small deal: fill the cart and place the order
    let span = tracing::info_span!("order_processing");
    let outcome = async {
        let catalog = app.deal.view().await.map_err(|e| e.to_string())?;
        for product in catalog.products.iter().take(2) {
            app.deal
                .add_to_cart(product.product_id.clone())
                .await
                .map_err(|e| e.to_string())?;
        }

        let cart_view = app
            .deal
            .set_comment("Demo order from the client core")
            .await
            .map_err(|e| e.to_string())?;
        info!(
            total = cart_view.cart_total,
            items = cart_view.cart_item_count,
            "Cart assembled"
        );

        app.deal.place_order().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await;

    match outcome {
        Ok(submission) => info!(?submission, "Order submission resolved"),
        Err(e) => error!(error = %e, "Order flow failed"),
    }

    // Create a follow-up task
    let request = CreateTaskRequest {
        important: Some(true),
        ..CreateTaskRequest::new(
            "Call back Medcom LLC",
            "Discuss the renewed supply agreement",
        )
    };
    match app.tasks.create_task(request).await {
        Ok(response) if response.success => info!(id = ?response.id, "Task created"),
        Ok(response) => warn!(error = ?response.error, "Task create rejected"),
        Err(e) => error!(error = %e, "Task create failed"),
    }

    // Shutdown gracefully
    app.shutdown().await
}
