use acl_shard_replicator::assignment::strategy::IdStrategy;
use acl_shard_replicator::config::{GeneratorConfig, RetryConfig};
use acl_shard_replicator::generator::handlers::{GeneratorState, router};
use acl_shard_replicator::topology::provider::{
    HttpTopologyProvider, StaticTopologyProvider, TopologyProvider,
};
use acl_shard_replicator::topology::types::Topology;
use clap::Parser;
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;

/// Replicates ACL documents onto every shard of a collection.
#[derive(Parser, Debug)]
#[command(name = "acl-shard-replicator")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address the HTTP API listens on.
    #[arg(long, default_value = "127.0.0.1:6000")]
    bind: SocketAddr,

    /// Comma-separated partition names of a static topology.
    #[arg(long, value_delimiter = ',', required_unless_present = "cluster_state_url")]
    partitions: Vec<String>,

    /// Base URL of a node serving the cluster state. Takes precedence over `--partitions`.
    #[arg(long)]
    cluster_state_url: Option<String>,

    /// Candidate ids probed per document before giving up.
    #[arg(long)]
    attempt_budget: Option<NonZeroU32>,

    /// Default id strategy: `literal` or `hashed`.
    #[arg(long)]
    strategy: Option<IdStrategy>,

    /// Retries around a failed cluster-state fetch.
    #[arg(long)]
    topology_retries: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let mut config = GeneratorConfig::from_env();
    if let Some(budget) = args.attempt_budget {
        config.attempt_budget = budget;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }

    let mut retry = RetryConfig::from_env();
    if let Some(retries) = args.topology_retries {
        retry.max_retries = retries;
    }

    let provider: Arc<dyn TopologyProvider> = match &args.cluster_state_url {
        Some(url) => {
            tracing::info!("Reading topology from {}", url);
            Arc::new(HttpTopologyProvider::new(url, retry.request_timeout))
        }
        None => {
            let topology = Topology::new(args.partitions.clone())?;
            tracing::info!(
                "Using static topology with {} partitions: {:?}",
                topology.partition_count(),
                topology.partitions()
            );
            Arc::new(StaticTopologyProvider::hash_range(topology))
        }
    };

    tracing::info!(
        "Attempt budget {}, {} strategy, {} topology retries",
        config.attempt_budget,
        config.strategy,
        retry.max_retries
    );

    let app = router(GeneratorState::new(provider, retry, config));

    tracing::info!("HTTP server listening on {}", args.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
