use wishlist_seed::{SeedConfig, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wishlist_seed=info".into()),
        )
        .init();

    let config = SeedConfig::from_env()?;
    let report = run(&config).await?;

    println!();
    println!("=== Added Wishlist items ===");
    println!("{}", report.summary());

    Ok(())
}
