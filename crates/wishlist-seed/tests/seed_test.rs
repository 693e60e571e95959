use std::sync::Arc;

use wishlist_api::{AppStateInner, HashParams, Passwords};
use wishlist_seed::{SeedConfig, run};
use wishlist_store::Store;

#[tokio::test]
async fn test_seed_against_live_server() {
    let passwords = Passwords::new(HashParams {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap();
    let app = wishlist_api::router(Arc::new(AppStateInner::new(Store::new(), passwords)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });

    let report = run(&SeedConfig {
        base_url: format!("http://{addr}"),
        items: 3,
    })
    .await
    .unwrap();

    assert_eq!(report.items.len(), 3);
    assert_eq!(report.shared_with_friend, 1);
    assert!(report.summary().contains(&report.username));
}
