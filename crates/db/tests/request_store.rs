use rust_decimal::Decimal;

use matreq_core::domain::request::RequestStatus;
use matreq_core::store::RequestStore;
use matreq_db::fixtures::{sample_draft, sample_request, seed_requests};
use matreq_db::migrations;
use matreq_db::{connect_with_settings, DbPool, SqlRequestStore};

async fn test_pool() -> DbPool {
    let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("connect");
    migrations::run_pending(&pool).await.expect("migrate");
    pool
}

#[tokio::test]
async fn submitted_request_round_trips_through_sqlite() {
    let store = SqlRequestStore::new(test_pool().await);
    let mut draft = sample_draft();

    let request = draft.submit(&store).await.expect("submit valid draft");

    let found = store.find_by_id(&request.id).await.expect("find_by_id");
    assert_eq!(found, Some(request.clone()));
    assert_eq!(request.quantity, Decimal::from(12));
    assert_eq!(request.status, RequestStatus::Pending);
}

#[tokio::test]
async fn fractional_quantity_survives_storage_exactly() {
    let store = SqlRequestStore::new(test_pool().await);
    let mut request = sample_request();
    request.quantity = Decimal::new(25, 1);

    store.insert(&request).await.expect("insert");
    let found = store.find_by_id(&request.id).await.expect("find_by_id").expect("present");

    assert_eq!(found.quantity, Decimal::new(25, 1));
}

#[tokio::test]
async fn consecutive_submits_persist_distinct_records() {
    let store = SqlRequestStore::new(test_pool().await);

    let mut draft = sample_draft();
    let first = draft.submit(&store).await.expect("first submit");

    let mut draft = sample_draft();
    let second = draft.submit(&store).await.expect("second submit");

    assert_ne!(first.id, second.id);
    let recent = store.list_recent(10).await.expect("list_recent");
    assert_eq!(recent.len(), 2);
}

#[tokio::test]
async fn list_recent_honors_the_limit() {
    let store = SqlRequestStore::new(test_pool().await);
    seed_requests(&store, 5).await.expect("seed");

    let recent = store.list_recent(3).await.expect("list_recent");
    assert_eq!(recent.len(), 3);
}

#[tokio::test]
async fn find_by_id_returns_none_for_unknown_request() {
    let store = SqlRequestStore::new(test_pool().await);
    let unknown = sample_request();

    let found = store.find_by_id(&unknown.id).await.expect("find_by_id");
    assert_eq!(found, None);
}

#[tokio::test]
async fn duplicate_id_insert_surfaces_a_store_error() {
    let store = SqlRequestStore::new(test_pool().await);
    let request = sample_request();

    store.save(request.clone()).await.expect("first save");
    let error = store.save(request).await.expect_err("duplicate id");

    assert!(matches!(error, matreq_core::errors::StoreError::Persistence(_)));
}
