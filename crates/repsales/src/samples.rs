//! Fixed fallback collections.
//!
//! Served when a bulk read fails, so every screen has something to render
//! instead of a blocking error state. The contents are deliberately stable:
//! the fallback tests and the offline demo rely on them verbatim.

use crate::model::{Contragent, Product, Task};

/// Sample task list.
pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            date: "23.06.2025 13:53:45".to_string(),
            description: "Contract sign-off for the renewed supply agreement".to_string(),
            status: "Overdue".to_string(),
            producer: "Program".to_string(),
            execution_date: "23.06.2025 0:00:00".to_string(),
            name: "Agreement with Medcom LLC".to_string(),
            important: true,
        },
        Task {
            date: "18.11.2025 12:00:00".to_string(),
            description: "Prepare the commercial proposal".to_string(),
            status: "Assigned".to_string(),
            producer: "Program".to_string(),
            execution_date: "21.11.2025 0:00:00".to_string(),
            name: "Proposal for Ivanov SP".to_string(),
            important: false,
        },
        Task {
            date: "15.11.2024 10:00:00".to_string(),
            description: "Follow-up call scheduled for the current month".to_string(),
            status: "InProgress".to_string(),
            producer: "Program".to_string(),
            execution_date: "20.11.2024 0:00:00".to_string(),
            name: "Call Daisy Trade".to_string(),
            important: false,
        },
    ]
}

/// Sample contragent directory.
pub fn contragents() -> Vec<Contragent> {
    vec![
        Contragent {
            name: "Daisy Trade LLC".to_string(),
            kind: "Company".to_string(),
            address: "1 Pushkin St, Moscow".to_string(),
            last_order: "20.11.2024 14:30:00".to_string(),
            average_check: 150000.0,
            orders_count: 12,
            total_orders_sum: 1800000.0,
            segment: "VIP client".to_string(),
        },
        Contragent {
            name: "Ivanov SP".to_string(),
            kind: "Sole proprietor".to_string(),
            address: "10 Nevsky Ave, St Petersburg".to_string(),
            last_order: "15.11.2024 10:15:00".to_string(),
            average_check: 75000.0,
            orders_count: 8,
            total_orders_sum: 600000.0,
            segment: "Regular client".to_string(),
        },
    ]
}

/// Sample product catalog.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            name: "Distal end cutter with safety holder (up to .022\"x.028\")".to_string(),
            stock_count: 4,
            price: Some(24719.0),
            price_wholesale: None,
            article: "65510".to_string(),
            product_id: "adfb5132-ddd9-11ea-81cc-309c23aaf74e".to_string(),
            category: "Instruments".to_string(),
        },
        Product {
            name: "Kim multiloop archwire pliers with cutter".to_string(),
            stock_count: 2,
            price: Some(23697.0),
            price_wholesale: None,
            article: "64303".to_string(),
            product_id: "617c0be8-ddda-11ea-81cc-309c23aaf74e".to_string(),
            category: "Instruments".to_string(),
        },
        Product {
            name: "Ligature cutter TS-15".to_string(),
            stock_count: 1,
            price: Some(16473.0),
            price_wholesale: None,
            article: "60015".to_string(),
            product_id: "c1f8b148-f348-11ea-81da-309c23aaf74e".to_string(),
            category: "Instruments".to_string(),
        },
    ]
}
