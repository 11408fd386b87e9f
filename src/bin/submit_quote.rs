use casa_configurator::core::selection::MAX_QUANTITY_STEP;
use casa_configurator::utils::logger;
use casa_configurator::{Catalog, QuoteClient, SelectionStore};
use clap::Parser;

#[derive(Parser)]
#[command(name = "submit-quote")]
#[command(about = "Send a quote request to a running backend")]
struct Args {
    /// Backend base URL
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Device and quantity, e.g. --item switch_1=2 (repeatable)
    #[arg(short, long = "item")]
    items: Vec<String>,

    #[arg(long, default_value = "")]
    switch_brand: String,

    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long, default_value = "")]
    notes: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_item(raw: &str) -> anyhow::Result<(&str, u32)> {
    let (id, quantity) = match raw.split_once('=') {
        Some((id, quantity)) => (id, quantity.parse()?),
        None => (raw, 1),
    };
    anyhow::ensure!(
        quantity <= MAX_QUANTITY_STEP,
        "quantity for '{}' must be at most {}",
        id,
        MAX_QUANTITY_STEP
    );
    Ok((id, quantity))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let mut selection = SelectionStore::new(Catalog::builtin());
    for raw in &args.items {
        let (id, quantity) = parse_item(raw)?;
        for _ in 0..quantity {
            selection.increment(id)?;
        }
    }

    let contact = selection.contact_mut();
    contact.switch_brand = args.switch_brand;
    contact.name = args.name;
    contact.email = args.email;
    contact.phone = args.phone;
    contact.notes = args.notes;

    tracing::debug!("📦 {} devices selected", selection.total_count());
    let client = QuoteClient::new(&args.url)?;

    let health = client.health().await?;
    println!("🩺 Backend status: {}", health.status);

    let request = selection.to_quote_request();
    let ack = client.submit(&request).await?;
    println!("✅ {} ({} equipamentos)", ack.message, selection.total_count());

    Ok(())
}
