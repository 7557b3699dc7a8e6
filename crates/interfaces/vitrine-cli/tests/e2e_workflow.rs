use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use camino::Utf8PathBuf;
use chrono::Utc;
use tempfile::tempdir;

use vitrine_cli::commands;
use vitrine_core::{NewProduct, Product, ProductPatch, UpdateProduct};

#[derive(Default)]
struct ApiState {
    products: Vec<Product>,
    next_id: u64,
}

type Shared = Arc<Mutex<ApiState>>;

fn envelope(data: &impl serde::Serialize) -> String {
    format!(
        r#"{{"status":"success","message":"ok","data":{}}}"#,
        serde_json::to_string(data).unwrap()
    )
}

async fn create_product(State(state): State<Shared>, body: String) -> (StatusCode, String) {
    let input: NewProduct = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(_) => return (StatusCode::BAD_REQUEST, String::new()),
    };
    let mut guard = state.lock().unwrap();
    guard.next_id += 1;
    let now = Utc::now();
    let product = Product {
        id: format!("p-{}", guard.next_id),
        name: input.name,
        category: input.category,
        description: input.description,
        price: input.price,
        image_url: input.image_url,
        is_trend: false,
        keywords: input.keywords,
        trending_percentage: None,
        created_at: now,
        updated_at: now,
    };
    guard.products.push(product.clone());
    (StatusCode::OK, envelope(&product))
}

async fn list_products(State(state): State<Shared>) -> (StatusCode, String) {
    let guard = state.lock().unwrap();
    (StatusCode::OK, envelope(&guard.products))
}

async fn get_product(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> (StatusCode, String) {
    let guard = state.lock().unwrap();
    match guard.products.iter().find(|p| p.id == id) {
        Some(p) => (StatusCode::OK, envelope(p)),
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}

async fn update_product(
    State(state): State<Shared>,
    Path(id): Path<String>,
    body: String,
) -> (StatusCode, String) {
    let input: UpdateProduct = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(_) => return (StatusCode::BAD_REQUEST, String::new()),
    };
    let mut guard = state.lock().unwrap();
    match guard.products.iter_mut().find(|p| p.id == id) {
        Some(p) => {
            p.name = input.name;
            p.category = input.category;
            p.description = input.description;
            p.price = input.price;
            p.image_url = input.image_url;
            p.is_trend = input.is_trend.unwrap_or(p.is_trend);
            p.keywords = input.keywords.or_else(|| p.keywords.clone());
            p.trending_percentage = input.trending_percentage.or(p.trending_percentage);
            p.updated_at = Utc::now();
            (StatusCode::OK, envelope(p))
        }
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}

async fn delete_product(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> (StatusCode, String) {
    let mut guard = state.lock().unwrap();
    let before = guard.products.len();
    guard.products.retain(|p| p.id != id);
    if guard.products.len() == before {
        (StatusCode::NOT_FOUND, String::new())
    } else {
        (StatusCode::OK, String::new())
    }
}

async fn start_mock_api() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let state: Shared = Arc::default();
    let app = Router::new()
        .route("/api/product", post(create_product).get(list_products))
        .route(
            "/api/product/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

#[tokio::test(flavor = "multi_thread")]
async fn full_catalog_lifecycle_workflow() {
    let (addr, server_handle) = start_mock_api().await;
    let api_url = format!("http://{addr}/api");

    // Phase 1: create one product manually
    let created = commands::cmd_add(
        &api_url,
        NewProduct {
            name: "Widget".into(),
            category: "Electronics".into(),
            description: "Small widget".into(),
            price: 9.99,
            image_url: String::new(),
            keywords: Some("widget,gadget".into()),
        },
    )
    .await
    .expect("Phase 1 add failed");
    assert!(!created.id.is_empty(), "Server must assign the id");
    assert_eq!(
        created.image_url,
        vitrine_config::PLACEHOLDER_IMAGE_URL,
        "Empty image URL must fall back to the placeholder"
    );

    // Phase 2: validation rejects before the network
    let err = commands::cmd_add(
        &api_url,
        NewProduct {
            name: String::new(),
            category: "Electronics".into(),
            description: "d".into(),
            price: 1.0,
            image_url: String::new(),
            keywords: None,
        },
    )
    .await
    .expect_err("Phase 2 should reject a blank name");
    assert!(err.to_string().contains("Validation failed"));

    // Phase 3: CSV import, one row with a broken price
    let work_dir = tempdir().unwrap();
    let csv_path =
        Utf8PathBuf::from_path_buf(work_dir.path().join("products.csv")).unwrap();
    std::fs::write(
        &csv_path,
        "name,description,category,price,imageUrl\n\
         Gizmo,Round gizmo,Toys & Games,19.99,http://x/b.png\n\
         Doohickey,Spare doohickey,Other,4.50,http://x/c.png\n\
         Whatsit,Odd whatsit,Other,cheap,http://x/d.png\n",
    )
    .unwrap();

    let report = commands::cmd_import(&api_url, csv_path)
        .await
        .expect("Phase 3 import failed");
    assert_eq!(report.successful, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("Whatsit:"));

    // Phase 4: list shows everything created so far
    let listed = commands::cmd_list(&api_url)
        .await
        .expect("Phase 4 list failed");
    assert_eq!(listed.len(), 3);

    // Phase 5: fetch round-trips the created values
    let fetched = commands::cmd_get(&api_url, &created.id)
        .await
        .expect("Phase 5 get failed")
        .expect("Product must exist");
    assert_eq!(fetched.name, "Widget");
    assert_eq!(fetched.price, 9.99);
    assert_eq!(fetched.keywords.as_deref(), Some("widget,gadget"));

    // Phase 6: partial update becomes a full replacement
    let updated = commands::cmd_update(
        &api_url,
        &created.id,
        ProductPatch {
            price: Some(12.50),
            is_trend: Some(true),
            trending_percentage: Some(45),
            ..Default::default()
        },
    )
    .await
    .expect("Phase 6 update failed");
    assert_eq!(updated.price, 12.50);
    assert!(updated.is_trend);
    assert_eq!(updated.name, "Widget", "Unpatched fields must survive");

    // Phase 7: delete, then absence is a plain None
    commands::cmd_delete(&api_url, &created.id)
        .await
        .expect("Phase 7 delete failed");
    let gone = commands::cmd_get(&api_url, &created.id)
        .await
        .expect("Phase 7 get failed");
    assert!(gone.is_none());

    let remaining = commands::cmd_list(&api_url)
        .await
        .expect("Phase 7 list failed");
    assert_eq!(remaining.len(), 2);

    server_handle.abort();
}

#[tokio::test]
async fn template_round_trips_through_import_parsing() {
    let work_dir = tempdir().unwrap();
    let out = Utf8PathBuf::from_path_buf(work_dir.path().join("template.csv")).unwrap();

    commands::cmd_template(Some(out.clone())).expect("template write failed");

    let text = std::fs::read_to_string(&out).unwrap();
    let rows =
        vitrine_core::csv::parse_products_csv(&text, vitrine_config::PLACEHOLDER_IMAGE_URL)
            .expect("template must parse");
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn list_against_a_dead_server_reports_the_error() {
    // Nothing listens here; the store records the failure and the
    // command surfaces it.
    let err = commands::cmd_list("http://127.0.0.1:1/api")
        .await
        .expect_err("list must fail");
    assert!(err.to_string().contains("Failed to fetch products"));
}
