use std::sync::Arc;

use shelf_store::{InMemoryProductStore, PostgresProductStore, ProductStore};

#[tokio::main]
async fn main() {
    shelf_observability::init();

    let store: Arc<dyn ProductStore> = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = sqlx::PgPool::connect(&url)
                .await
                .expect("failed to connect to DATABASE_URL");
            Arc::new(PostgresProductStore::new(pool))
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using non-persistent in-memory store");
            Arc::new(InMemoryProductStore::new())
        }
    };

    let app = shelf_api::app::build_app(store);

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
