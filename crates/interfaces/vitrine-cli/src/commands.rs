use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use camino::Utf8PathBuf;
use indicatif::{ProgressBar, ProgressStyle};

use vitrine_api::HttpProductGateway;
use vitrine_app_core::generation::{generate_campaign, GENERATION_TICK};
use vitrine_app_core::importer::{import_rows, ImportReport};
use vitrine_app_core::{NotificationStore, Notifier, ProductStore};
use vitrine_core::csv::{parse_products_csv, template};
use vitrine_core::validate::validate_new_product;
use vitrine_core::{NewProduct, Platform, Product, ProductPatch};

pub fn build_store(api_url: &str) -> Result<ProductStore> {
    let gateway = HttpProductGateway::new(reqwest::Client::new(), api_url)
        .context("Failed to build API client")?;
    Ok(ProductStore::new(Arc::new(gateway)))
}

fn print_product(product: &Product) {
    println!("   {} | {}", product.id, product.name);
    println!("      Category: {}", product.category);
    println!("      Price:    {:.2}", product.price);
    if product.is_trend {
        let pct = product.trending_percentage.unwrap_or(0);
        println!("      Trending: +{pct}%");
    }
    if let Some(keywords) = &product.keywords {
        println!("      Keywords: {keywords}");
    }
}

pub async fn cmd_list(api_url: &str) -> Result<Vec<Product>> {
    let store = build_store(api_url)?;
    store.fetch_products().await;

    let state = store.state();
    if let Some(error) = state.error {
        bail!(error);
    }

    println!(":: {} products", state.products.len());
    for product in &state.products {
        print_product(product);
    }
    Ok(state.products)
}

pub async fn cmd_get(api_url: &str, id: &str) -> Result<Option<Product>> {
    let store = build_store(api_url)?;
    let found = store.get_product_by_id(id).await?;
    match &found {
        Some(product) => {
            println!(":: Product {id}");
            print_product(product);
            println!("      Description: {}", product.description);
            println!("      Image:       {}", product.image_url);
        }
        None => println!(":: Product {id} not found"),
    }
    Ok(found)
}

pub async fn cmd_add(api_url: &str, mut input: NewProduct) -> Result<Product> {
    if input.image_url.is_empty() {
        input.image_url = vitrine_config::PLACEHOLDER_IMAGE_URL.to_string();
    }
    validate_new_product(&input).map_err(|e| anyhow::anyhow!("Validation failed: {e}"))?;

    let store = build_store(api_url)?;
    let created = store.add_product(input).await?;
    println!(":: Created product {}", created.id);
    print_product(&created);
    Ok(created)
}

pub async fn cmd_update(api_url: &str, id: &str, patch: ProductPatch) -> Result<Product> {
    let store = build_store(api_url)?;
    // The store merges over its cache, so populate it first.
    store.fetch_products().await;
    if let Some(error) = store.state().error {
        bail!(error);
    }

    let updated = store.update_product(id, patch).await?;
    println!(":: Updated product {id}");
    print_product(&updated);
    Ok(updated)
}

pub async fn cmd_delete(api_url: &str, id: &str) -> Result<()> {
    let store = build_store(api_url)?;
    store.delete_product(id).await?;
    println!(":: Deleted product {id}");
    Ok(())
}

pub async fn cmd_import(api_url: &str, file: Utf8PathBuf) -> Result<ImportReport> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {file}"))?;
    let rows = parse_products_csv(&text, vitrine_config::PLACEHOLDER_IMAGE_URL)?;

    println!(":: Importing {} products from {}", rows.len(), file);
    let store = build_store(api_url)?;

    let pb = ProgressBar::new(rows.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")
            .unwrap(),
    );

    let mut report = ImportReport::default();
    for row in &rows {
        pb.set_message(row.name.clone());
        let partial = import_rows(&store, std::slice::from_ref(row)).await;
        report.successful += partial.successful;
        report.failed += partial.failed;
        report.errors.extend(partial.errors);
        pb.inc(1);
    }
    pb.finish_with_message("done");

    println!("\n:: Import Result");
    println!("   Successful: {}", report.successful);
    println!("   Failed:     {}", report.failed);
    for error in &report.errors {
        println!("   ! {error}");
    }

    if report.successful > 0 {
        let notifications = NotificationStore::new();
        Notifier::new(notifications.clone()).bulk_products_imported(report.successful);
        println!("   Unread notifications: {}", notifications.unread_count());
    }

    Ok(report)
}

pub fn cmd_categories() {
    println!(":: Available categories");
    for category in vitrine_config::CATEGORIES {
        println!("   {category}");
    }
}

pub fn cmd_template(output: Option<Utf8PathBuf>) -> Result<()> {
    let csv = template();
    if let Some(out) = output {
        std::fs::write(&out, csv).with_context(|| format!("Failed to write {out}"))?;
        println!(":: Saved template to {out}");
    } else {
        print!("{csv}");
    }
    Ok(())
}

pub async fn cmd_generate(api_url: &str, id: &str, platforms: Vec<Platform>) -> Result<()> {
    let store = build_store(api_url)?;
    let Some(product) = store.get_product_by_id(id).await? else {
        bail!("Product {id} not found");
    };

    println!(":: Generating campaign for {}", product.name);
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let worker_store = store.clone();
    let worker_product = product.clone();
    let worker_platforms = platforms.clone();
    let worker = tokio::spawn(async move {
        generate_campaign(
            &worker_store,
            &worker_product,
            &worker_platforms,
            GENERATION_TICK,
        )
        .await
    });

    while !worker.is_finished() {
        if let Some(progress) = store.state().generation {
            pb.set_message(format!(
                "{} ({}/{})",
                progress.current_task, progress.step, progress.total_steps
            ));
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    let content = worker.await?;
    pb.finish_with_message("Generation complete.");

    if let Some(facebook) = &content.facebook {
        println!("\n:: Facebook\n{}", facebook.post);
        println!("   [image] {}", facebook.image_description);
    }
    if let Some(instagram) = &content.instagram {
        println!("\n:: Instagram\n{}", instagram.post);
        println!("   [image] {}", instagram.image_description);
    }
    if let Some(youtube) = &content.youtube {
        println!("\n:: YouTube\n{}", youtube.script);
        println!("   [thumbnail] {}", youtube.thumbnail_description);
    }

    Ok(())
}

pub fn cmd_simulate(count: usize) -> Result<()> {
    let store = NotificationStore::new();
    for _ in 0..count {
        store.simulate_new_notifications();
    }

    let state = store.state();
    println!(
        ":: {} notifications ({} unread)",
        state.notifications.len(),
        state.unread_count
    );
    for n in &state.notifications {
        let marker = if n.is_read { " " } else { "*" };
        println!("   [{marker}] {} - {}", n.title, n.message);
    }
    Ok(())
}
