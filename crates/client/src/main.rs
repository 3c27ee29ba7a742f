//! `storefront` command-line entry point.

use clap::Parser;

use storefront_catalog::{FilterConfig, SortOrder};
use storefront_client::render::render;
use storefront_client::{HttpCatalogSource, Storefront, StorefrontConfig, startup_events};
use storefront_core::ProductId;

/// Browse the catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about)]
struct Args {
    /// Case-insensitive title search.
    #[arg(long, default_value = "")]
    search: String,

    /// Exact category label to show.
    #[arg(long, default_value = "")]
    category: String,

    /// Price ordering: `low-high` or `high-low`. Anything else keeps catalog order.
    #[arg(long, default_value = "")]
    sort: String,

    /// Catalog API base URL (overrides STOREFRONT_API_URL).
    #[arg(long)]
    api_url: Option<String>,

    /// Put one unit of this product id in the cart (repeatable); shows the cart.
    #[arg(long = "add", value_name = "PRODUCT_ID")]
    add: Vec<u64>,

    /// Print the view as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let args = Args::parse();
    let config = StorefrontConfig::from_env().with_api_url(args.api_url.clone());
    tracing::info!(api_url = %config.api_url, "starting storefront");

    let source = HttpCatalogSource::new(config.api_url);
    let mut storefront = Storefront::new();
    storefront.load(&source).await;

    let filters = FilterConfig {
        search: args.search,
        category: args.category,
        sort: SortOrder::from_label(&args.sort),
    };
    let add: Vec<ProductId> = args.add.iter().copied().map(ProductId::new).collect();
    for event in startup_events(filters, &add) {
        storefront.handle(event);
    }

    let view = storefront.view();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render(&view));
    }

    Ok(())
}
