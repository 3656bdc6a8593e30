// ABOUTME: Integration tests for data access over an in-memory SQLite handle
// ABOUTME: Covers fetch modes, counting, inserts, NULL handling, and error severities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use readme_site::database::{
    count_where, execute, fetch_all, fetch_single, insert, list_all, DatabaseError, FetchMode,
    RowSet, Value,
};

#[tokio::test]
async fn test_fetch_single_returns_typed_columns() {
    let mut handle = common::create_seeded_handle().await.unwrap();

    let row = fetch_single(
        &mut handle,
        "SELECT id, title, body, rating, created_at FROM posts WHERE id = ?",
        vec![1.into()],
    )
    .await
    .unwrap()
    .expect("post 1 exists");

    assert_eq!(
        row.column_names().collect::<Vec<_>>(),
        vec!["id", "title", "body", "rating", "created_at"]
    );
    assert_eq!(row.get("id"), Some(&Value::Integer(1)));
    assert_eq!(row.get_text("title"), Some("First post"));
    assert_eq!(row.get_text("body"), Some("Hello & welcome"));
    assert_eq!(row.get("rating"), Some(&Value::Float(4.5)));
    assert_eq!(row.get_text("created_at"), Some("2024-03-01 12:00:00"));
}

#[tokio::test]
async fn test_null_column_is_present_but_empty() {
    let mut handle = common::create_seeded_handle().await.unwrap();

    let row = fetch_single(
        &mut handle,
        "SELECT title, body FROM posts WHERE title = ?",
        vec!["Second post".into()],
    )
    .await
    .unwrap()
    .unwrap();

    assert!(row.contains("body"));
    assert_eq!(row.get("body"), None);
    assert_eq!(serde_json::to_value(&row).unwrap()["body"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_duplicate_column_names_keep_last_value() {
    let mut handle = common::create_test_handle().await.unwrap();

    let row = fetch_single(&mut handle, "SELECT 1 AS id, 'x' AS name, 2 AS id", Vec::new())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(row.len(), 2);
    assert_eq!(row.column_names().collect::<Vec<_>>(), vec!["id", "name"]);
    assert_eq!(row.get_i64("id"), Some(2));
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json, serde_json::json!({"id": 2, "name": "x"}));
}

#[tokio::test]
async fn test_invalid_utf8_text_is_decoded_lossily() {
    let mut handle = common::create_test_handle().await.unwrap();

    let row = fetch_single(
        &mut handle,
        "SELECT CAST(x'41ff42' AS TEXT) AS t, x'41ff42' AS b",
        Vec::new(),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(row.get_text("t"), Some("A\u{fffd}B"));
    assert_eq!(row.get_text("b"), Some("A\u{fffd}B"));
}

#[tokio::test]
async fn test_fetch_single_without_match_is_none() {
    let mut handle = common::create_seeded_handle().await.unwrap();

    let row = fetch_single(&mut handle, "SELECT * FROM posts WHERE id = ?", vec![99.into()])
        .await
        .unwrap();
    assert!(row.is_none());
}

#[tokio::test]
async fn test_fetch_all_preserves_order() {
    let mut handle = common::create_seeded_handle().await.unwrap();

    let rows = fetch_all(
        &mut handle,
        "SELECT title FROM posts WHERE user_id = ? ORDER BY id DESC",
        vec![1.into()],
    )
    .await
    .unwrap()
    .unwrap();

    let titles: Vec<_> = rows.iter().filter_map(|row| row.get_text("title")).collect();
    assert_eq!(titles, vec!["Second post", "First post"]);
}

#[tokio::test]
async fn test_fetch_all_without_match_is_empty_list() {
    let mut handle = common::create_seeded_handle().await.unwrap();

    let rows = fetch_all(&mut handle, "SELECT * FROM posts WHERE user_id = ?", vec![42.into()])
        .await
        .unwrap();
    assert_eq!(rows.map(|rows| rows.len()), Some(0));
}

#[tokio::test]
async fn test_execute_shapes_result_by_mode() {
    let mut handle = common::create_seeded_handle().await.unwrap();
    let query = "SELECT id FROM likes WHERE post_id = ? ORDER BY id";

    let single = execute(&mut handle, query, vec![1.into()], FetchMode::Single)
        .await
        .unwrap();
    assert!(matches!(single, Some(RowSet::Single(ref row)) if row.get_i64("id") == Some(1)));

    let all = execute(&mut handle, query, vec![1.into()], FetchMode::All)
        .await
        .unwrap();
    assert!(matches!(all, Some(RowSet::All(ref rows)) if rows.len() == 3));
}

#[tokio::test]
async fn test_query_without_params_runs_unbound() {
    let mut handle = common::create_seeded_handle().await.unwrap();

    let row = fetch_single(&mut handle, "SELECT COUNT(*) AS total FROM posts", Vec::new())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.get_i64("total"), Some(2));
}

#[tokio::test]
async fn test_count_where_counts_matching_rows() {
    let mut handle = common::create_seeded_handle().await.unwrap();

    assert_eq!(
        count_where(&mut handle, "likes", "post_id", 1).await.unwrap(),
        Some(3)
    );
    assert_eq!(
        count_where(&mut handle, "likes", "post_id", 2).await.unwrap(),
        Some(0)
    );
    assert_eq!(
        count_where(&mut handle, "users", "login", "ann").await.unwrap(),
        Some(1)
    );
}

#[tokio::test]
async fn test_count_where_on_empty_table_is_zero() {
    let mut handle = common::create_test_handle().await.unwrap();
    insert(
        &mut handle,
        "CREATE TABLE subscriptions (user_id INTEGER, author_id INTEGER)",
        Vec::new(),
    )
    .await
    .unwrap();

    assert_eq!(
        count_where(&mut handle, "subscriptions", "author_id", 1)
            .await
            .unwrap(),
        Some(0)
    );
}

#[tokio::test]
async fn test_count_where_rejects_unsafe_identifiers() {
    let mut handle = common::create_seeded_handle().await.unwrap();

    let err = count_where(&mut handle, "likes; DROP TABLE likes", "post_id", 1)
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::InvalidIdentifier { .. }));
    assert!(err.is_fatal());

    let err = count_where(&mut handle, "likes", "post_id = 1 OR 1", 1)
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::InvalidIdentifier { .. }));

    // table survived
    assert_eq!(
        count_where(&mut handle, "likes", "post_id", 1).await.unwrap(),
        Some(3)
    );
}

#[tokio::test]
async fn test_insert_returns_new_row_id() {
    let mut handle = common::create_seeded_handle().await.unwrap();

    let id = insert(
        &mut handle,
        "INSERT INTO users (email, login) VALUES (?, ?)",
        vec!["bob@example.com".into(), "bob".into()],
    )
    .await
    .unwrap();
    assert_eq!(id, Some(2));
}

#[tokio::test]
async fn test_constraint_violation_is_recoverable() {
    let mut handle = common::create_seeded_handle().await.unwrap();

    let id = insert(
        &mut handle,
        "INSERT INTO users (email, login) VALUES (?, ?)",
        vec!["ann@example.com".into(), "ann-again".into()],
    )
    .await
    .unwrap();
    assert_eq!(id, None);

    // handle is still usable afterwards
    assert_eq!(
        count_where(&mut handle, "users", "email", "ann@example.com")
            .await
            .unwrap(),
        Some(1)
    );
}

#[tokio::test]
async fn test_list_all_returns_every_row() {
    let mut handle = common::create_seeded_handle().await.unwrap();

    let likes = list_all(&mut handle, "likes").await.unwrap().unwrap();
    assert_eq!(likes.len(), 3);
    assert!(likes.iter().all(|row| row.get_i64("post_id") == Some(1)));

    assert!(matches!(
        list_all(&mut handle, "likes l").await,
        Err(DatabaseError::InvalidIdentifier { .. })
    ));
}

#[tokio::test]
async fn test_malformed_query_is_fatal() {
    let mut handle = common::create_seeded_handle().await.unwrap();

    let err = fetch_all(&mut handle, "SELEC * FROM posts", Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Prepare { .. }));
    assert!(err.is_fatal());

    let err = fetch_all(&mut handle, "SELECT * FROM missing_table", Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Prepare { .. }));
}

#[tokio::test]
async fn test_parameter_count_mismatch_is_fatal() {
    let mut handle = common::create_seeded_handle().await.unwrap();

    let err = fetch_single(
        &mut handle,
        "SELECT * FROM posts WHERE id = ? AND user_id = ?",
        vec![1.into()],
    )
    .await
    .unwrap_err();

    match &err {
        DatabaseError::Bind {
            signature,
            expected,
            provided,
            ..
        } => {
            assert_eq!(signature, "i");
            assert_eq!(*expected, 2);
            assert_eq!(*provided, 1);
        }
        other => panic!("expected bind error, got {other:?}"),
    }
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_handle_close_releases_connection() {
    let handle = common::create_seeded_handle().await.unwrap();
    handle.close().await.unwrap();
}
