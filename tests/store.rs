//! Quote store integration tests

mod common;

use std::collections::HashSet;

use common::{memory_store, stored_texts};
use random_quotes::{error::StorageError, models::quotes::NewQuote};

fn one_two_three() -> Vec<NewQuote> {
    vec![
        NewQuote::new("One", "A"),
        NewQuote::new("Two", "B"),
        NewQuote::new("Three", "C"),
    ]
}

#[tokio::test]
async fn new_store_is_empty() {
    let store = memory_store().await;

    assert_eq!(store.count().await.unwrap(), 0);
    assert_eq!(store.pick_random().await.unwrap(), None);
}

#[tokio::test]
async fn insert_then_pick_returns_a_stored_quote() {
    let store = memory_store().await;

    let inserted = store.insert_all(&one_two_three()).await.unwrap();
    assert_eq!(inserted, 3);
    assert_eq!(store.count().await.unwrap(), 3);

    let texts: HashSet<&str> = ["One", "Two", "Three"].into_iter().collect();
    for _ in 0..20 {
        let quote = store.pick_random().await.unwrap().unwrap();
        assert!(texts.contains(quote.text.as_str()), "unexpected quote {quote:?}");
    }
}

#[tokio::test]
async fn auto_assigned_ids_are_unique() {
    let store = memory_store().await;
    store.insert_all(&one_two_three()).await.unwrap();

    let ids = sqlx::query_scalar::<_, i64>("SELECT id FROM quotes;")
        .fetch_all(store.pool())
        .await
        .unwrap();
    let unique: HashSet<i64> = ids.iter().copied().collect();

    assert_eq!(ids.len(), 3);
    assert_eq!(unique.len(), 3);
}

#[tokio::test]
async fn author_is_optional() {
    let store = memory_store().await;
    store
        .insert_all(&[NewQuote {
            id: Some(7),
            text: "Nobody said this".into(),
            author: None,
        }])
        .await
        .unwrap();

    let quote = store.pick_random().await.unwrap().unwrap();
    assert_eq!(quote.id, 7);
    assert_eq!(quote.author, None);
}

#[tokio::test]
async fn empty_text_rejects_the_whole_batch() {
    let store = memory_store().await;

    let mut records = one_two_three();
    records.push(NewQuote::new("   ", "Whitespace"));

    let err = store.insert_all(&records).await.unwrap_err();
    assert!(matches!(err, StorageError::EmptyText { index: 3 }));
    assert_eq!(err.to_string(), "quote at batch index 3 (0-based) has empty text");
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn duplicate_explicit_id_rolls_back() {
    let store = memory_store().await;

    let records = vec![
        NewQuote {
            id: Some(1),
            text: "First".into(),
            author: None,
        },
        NewQuote {
            id: Some(2),
            text: "Second".into(),
            author: None,
        },
        NewQuote {
            id: Some(1),
            text: "First again".into(),
            author: None,
        },
    ];

    let err = store.insert_all(&records).await.unwrap_err();
    assert!(matches!(err, StorageError::DuplicateId(1)));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn explicit_id_colliding_with_existing_row_is_rejected() {
    let store = memory_store().await;
    store.insert_all(&one_two_three()).await.unwrap();

    let err = store
        .insert_all(&[NewQuote {
            id: Some(2),
            text: "Collides".into(),
            author: None,
        }])
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::DuplicateId(2)));
    assert_eq!(stored_texts(&store).await, vec!["One", "Two", "Three"]);
}

#[tokio::test]
async fn insert_if_empty_only_writes_once() {
    let store = memory_store().await;

    let first = store.insert_all_if_empty(&one_two_three()).await.unwrap();
    assert_eq!(first, Some(3));

    let second = store.insert_all_if_empty(&one_two_three()).await.unwrap();
    assert_eq!(second, None);
    assert_eq!(store.count().await.unwrap(), 3);
}
