//! Source integration tests with a real MySQL database
//!
//! These tests require a live MySQL database seeded with the three source
//! relations. Set MYSQL_TEST_URL environment variable to run.

use retail_etl::config::{RelationNames, SourceConfig, SourceKind};
use retail_etl::source::SourceEngine;

/// Get test connection string from environment or skip
fn get_test_connection() -> Option<String> {
    std::env::var("MYSQL_TEST_URL").ok()
}

fn test_source(conn_str: String) -> SourceConfig {
    SourceConfig {
        engine: SourceKind::Mysql,
        connection_string: Some(conn_str),
        host: None,
        port: None,
        database: None,
        user: None,
        password: None,
        relations: RelationNames::default(),
    }
}

#[test]
fn test_mysql_connection() {
    let Some(conn_str) = get_test_connection() else {
        println!("Skipping: MYSQL_TEST_URL not set");
        return;
    };

    let engine = SourceEngine::connect(&test_source(conn_str));
    assert!(
        engine.is_ok(),
        "Failed to create engine: {:?}",
        engine.err()
    );

    let engine = engine.unwrap();
    let check = engine.check_connection();
    assert!(check.is_ok(), "Connection check failed: {:?}", check.err());

    println!("Connection check passed!");
}

#[test]
fn test_mysql_fetch_source_relations() {
    let Some(conn_str) = get_test_connection() else {
        println!("Skipping: MYSQL_TEST_URL not set");
        return;
    };

    let engine = SourceEngine::connect(&test_source(conn_str)).unwrap();

    for relation in ["list_orders", "order_details", "sales_target"] {
        let rows = engine.fetch_relation(relation);
        assert!(
            rows.is_ok(),
            "Failed to fetch {relation}: {:?}",
            rows.err()
        );
        println!("{relation}: {} rows", rows.unwrap().len());
    }
}
