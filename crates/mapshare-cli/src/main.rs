mod render;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mapshare_core::{InputClassification, MapItem, SharedPayload};
use mapshare_places::{LocationResolver, ResolveError};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mapshare")]
#[command(about = "Turn a shared map link or place into a location card")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show how a shared link would be handled, without any network access
    Classify { url: String },
    /// Resolve a shared link into a location card
    Resolve {
        url: String,
        /// Print the record as JSON instead of a card
        #[arg(long)]
        json: bool,
    },
    /// Build a location card from a place the map application already knows
    MapItem {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = mapshare_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let resolver = LocationResolver::from_config(&config)?;

    match cli.command {
        Commands::Classify { url } => {
            println!("{}", resolver.classify(&SharedPayload::url(url)));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Resolve { url, json } => {
            let payload = SharedPayload::url(url);
            if resolver.classify(&payload) == InputClassification::GoogleShortLink {
                config.require_places_api_key()?;
            }
            share(&resolver, &payload, json).await
        }
        Commands::MapItem {
            name,
            address,
            phone,
            url,
            lat,
            lng,
            json,
        } => {
            let item = MapItem {
                name,
                address,
                phone,
                url,
                latitude: lat,
                longitude: lng,
            };
            share(&resolver, &SharedPayload::MapItem(item), json).await
        }
    }
}

/// Resolves one payload and renders the outcome.
///
/// Ctrl-C while the lookup is running dismisses the share and cancels the
/// in-flight request.
async fn share(
    resolver: &LocationResolver,
    payload: &SharedPayload,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let kind = resolver.classify(payload);
    let outcome = if matches!(
        kind,
        InputClassification::GenericLink | InputClassification::Undefined
    ) {
        tracing::debug!(kind = %kind, "dismissing share");
        Err(ResolveError::Unsupported(kind))
    } else {
        let cancel = CancellationToken::new();
        let dismiss = cancel.clone();
        let watcher = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                dismiss.cancel();
            }
        });

        eprintln!("{}", render::LOADING);
        let outcome = resolver.resolve_cancellable(payload, &cancel).await;
        watcher.abort();
        outcome
    };

    if let Err(e) = &outcome {
        if !matches!(e, ResolveError::Unsupported(_) | ResolveError::Cancelled) {
            tracing::warn!(kind = %kind, error = %e, "share could not be resolved");
        }
    }

    let shown = render::present(&outcome, json)?;
    if shown.to_stderr {
        eprintln!("{}", shown.text);
    } else {
        println!("{}", shown.text);
    }

    Ok(if shown.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
