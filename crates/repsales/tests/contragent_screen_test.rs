//! Integration tests: real contragent screen actor with a scripted backend.

use repsales::api::MockApi;
use repsales::lifecycle::SalesApp;
use repsales::model::Contragent;
use repsales::view::contragents::ContragentSort;
use screen_flow::ScreenHandle;
use std::sync::Arc;

fn contragent(name: &str, kind: &str, orders: u32, total: f64) -> Contragent {
    Contragent {
        name: name.to_string(),
        kind: kind.to_string(),
        address: format!("{name} office"),
        last_order: "20.11.2024 14:30:00".to_string(),
        average_check: if orders == 0 { 0.0 } else { total / f64::from(orders) },
        orders_count: orders,
        total_orders_sum: total,
        segment: "Regular client".to_string(),
    }
}

#[tokio::test]
async fn test_total_sum_sort_orders_the_directory() {
    let api = Arc::new(MockApi::new());
    api.queue_contragents(Ok(vec![
        contragent("ACME", "Company", 5, 1000.0),
        contragent("Zeta", "Sole proprietor", 10, 5000.0),
    ]));

    let app = SalesApp::new(api.clone());
    app.contragents.refresh().await.unwrap();

    // Blank query, no categorical filters, sort by total sum descending
    let view = app
        .contragents
        .sort_by(ContragentSort::TotalSum)
        .await
        .unwrap();

    let names: Vec<&str> = view.contragents.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "ACME"]);

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_filters_narrow_and_clear_restores() {
    let api = Arc::new(MockApi::new());
    api.queue_contragents(Ok(vec![
        contragent("ACME", "Company", 5, 1000.0),
        contragent("Beta", "Company", 2, 300.0),
        contragent("Zeta", "Sole proprietor", 10, 5000.0),
    ]));

    let app = SalesApp::new(api.clone());
    app.contragents.refresh().await.unwrap();

    app.contragents
        .filter_by_kind(Some("Company".to_string()))
        .await
        .unwrap();
    let view = app.contragents.search("beta").await.unwrap();
    assert_eq!(view.contragents.len(), 1);
    assert_eq!(view.contragents[0].name, "Beta");

    // Clearing the filters restores the full directory; the sort key stays
    app.contragents
        .sort_by(ContragentSort::OrdersCount)
        .await
        .unwrap();
    let view = app.contragents.clear_filters().await.unwrap();
    assert_eq!(view.contragents.len(), 3);
    assert_eq!(view.criteria.sort, ContragentSort::OrdersCount);
    let names: Vec<&str> = view.contragents.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "ACME", "Beta"]);

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_snapshot_carries_filter_facets() {
    let api = Arc::new(MockApi::new());
    api.queue_contragents(Ok(vec![
        contragent("Zeta", "Sole proprietor", 10, 5000.0),
        contragent("ACME", "Company", 5, 1000.0),
    ]));

    let app = SalesApp::new(api.clone());
    let view = app.contragents.refresh().await.unwrap();

    assert_eq!(
        view.available_kinds,
        vec!["Company".to_string(), "Sole proprietor".to_string()]
    );
    assert_eq!(view.available_segments, vec!["Regular client".to_string()]);

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_no_results_is_distinct_from_not_loaded() {
    let api = Arc::new(MockApi::new());
    api.queue_contragents(Ok(vec![contragent("ACME", "Company", 5, 1000.0)]));

    let app = SalesApp::new(api.clone());

    // Before the first load
    let view = app.contragents.view().await.unwrap();
    assert!(!view.loaded);
    assert!(view.contragents.is_empty());

    // After a load with a query matching nothing
    app.contragents.refresh().await.unwrap();
    let view = app.contragents.search("no such name").await.unwrap();
    assert!(view.loaded);
    assert!(view.contragents.is_empty());

    app.shutdown().await.unwrap();
}
