// Storefront catalog demo
//
// This binary:
// - Loads configuration from the environment (and .env)
// - Sets up logging and the site settings
// - Loads the catalog (JSON file or built-in sample set)
// - Runs one query and prints the visible product list
//
// Usage: neo_catalog '{"categories":["lighting"],"sort":"price-asc"}'

fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use neo_catalog::config::AppConfig;
    use neo_catalog::storefront::api::site;
    use neo_catalog::storefront::display;
    use neo_catalog::{Catalog, FilterSpec};
    use tracing_subscriber::EnvFilter;

    // Load environment variables
    dotenv::dotenv().ok();
    let config = AppConfig::from_env();

    // Initialize logging; RUST_LOG wins over CATALOG_LOG
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    site::init_site(config.site_settings());

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("could not load catalog from {}", path.display()))?,
        None => {
            tracing::info!("CATALOG_PATH not set, using the built-in sample set");
            Catalog::sample()
        }
    };

    let filters: FilterSpec = match std::env::args().nth(1) {
        Some(json) => serde_json::from_str(&json).context("filter argument is not a valid FilterSpec")?,
        None => FilterSpec::default(),
    };

    let results = catalog.search(&filters);
    let settings = site::site();

    println!("{} [{}]", settings.title, settings.direction.as_str());
    println!("{} / {}", results.total_count, catalog.len());

    if results.is_empty() {
        println!("{}", display::EMPTY_RESULTS_MESSAGE);
    }

    for product in &results.results {
        let stock = if product.in_stock { "" } else { " (ناموجود)" };
        println!(
            "#{} {}{} | {} | {} | {}",
            product.id,
            product.title,
            stock,
            display::price_label(product.price),
            display::rating_label(product.rating),
            display::card_badges(product).join("، ")
        );
    }

    for facet in results.category_facets.iter().chain(&results.tag_facets) {
        println!("  {}: {}", facet.value, facet.count);
    }

    println!("{}", settings.current_copyright_line());
    Ok(())
}
