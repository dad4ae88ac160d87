//! Cartwise CLI
//!
//! Prices a fixture order against one promotion, or against the best of all
//! registered promotions, and prints a receipt.

use std::{io, path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cartwise::{
    fixtures::Fixture,
    pricing::to_cents,
    promotions::{
        Promotion,
        best::BestPromotion,
        promotion,
        registry::PromotionRegistry,
        types::{BulkItemPromotion, FidelityPromotion, LargeOrderPromotion},
    },
    receipt::Receipt,
};

#[derive(Debug, Parser)]
#[command(name = "cartwise", about = "Price an order with the best promotion", long_about = None)]
struct Cli {
    /// Directory holding fixture sets
    #[arg(long, env = "CARTWISE_FIXTURES", default_value = "./fixtures")]
    fixtures: PathBuf,

    /// Order set to load from `<fixtures>/orders/<set>.yml`
    #[arg(short, long, default_value = "fruit")]
    set: String,

    /// Customer key within the order set
    #[arg(short, long)]
    customer: String,

    /// Cart key within the order set
    #[arg(long, default_value = "fruit")]
    cart: String,

    /// Promotion to bind to the order
    #[arg(short, long, value_enum, default_value_t = PromotionChoice::Best)]
    promotion: PromotionChoice,

    /// Log output format
    #[arg(long, value_enum, env = "CARTWISE_LOG_FORMAT", default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PromotionChoice {
    None,
    Fidelity,
    BulkItem,
    LargeOrder,
    Best,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Compact,
    Json,
}

fn init_subscriber(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .init(),
    }
}

fn bind_promotion(
    choice: PromotionChoice,
    registry: &Arc<PromotionRegistry>,
) -> Result<Option<Promotion>> {
    Ok(match choice {
        PromotionChoice::None => None,
        PromotionChoice::Fidelity => Some(promotion(FidelityPromotion::default())),
        PromotionChoice::BulkItem => Some(promotion(BulkItemPromotion::default())),
        PromotionChoice::LargeOrder => Some(promotion(LargeOrderPromotion::default())),
        PromotionChoice::Best => Some(promotion(BestPromotion::new(Arc::clone(registry))?)),
    })
}

/// Cartwise CLI
#[expect(clippy::print_stdout, reason = "CLI output")]
pub fn main() -> Result<()> {
    let cli = Cli::parse();

    init_subscriber(cli.log_format);

    let registry = Arc::new(PromotionRegistry::with_defaults());

    let mut fixture = Fixture::with_base_path(cli.fixtures.clone());
    fixture.load_orders(&cli.set)?;

    let promotion = bind_promotion(cli.promotion, &registry)?;
    let order = fixture.order(&cli.customer, &cli.cart, promotion)?;

    info!(customer = %order.customer().name, lines = order.cart().len(), "pricing order");

    for (key, discount) in registry.evaluate(&order) {
        let name = registry.meta(key).map_or("<unknown>", |meta| meta.name.as_str());

        println!("{name:>12}: {}", to_cents(discount));
    }

    println!("\n{order}");

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    Receipt::from_order(&order, fixture.currency()?).write_to(&mut handle)?;

    Ok(())
}
