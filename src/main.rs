use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inference_up::{AppConfig, Cli, InferenceClient, UpRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_cli(Cli::parse())?;
    tracing::debug!(?config, "configuration loaded");

    let request = UpRequest::build(
        &config.base_url,
        &config.model,
        config.tensor_parallel_size,
    );
    println!("{}", request.curl_command());

    let response = InferenceClient::new().up(&request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn,hyper=warn,reqwest=warn".into());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
