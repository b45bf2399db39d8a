use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use grid_bench::utils::file_io;
use grid_bench::Attachment;
use grid_bench::BenchmarkConfig;
use grid_bench::BenchmarkDriver;
use grid_bench::ClusterBenchmark;
use grid_bench::ClusterView;
use grid_bench::LocalCluster;
use grid_bench::LocalConnector;
use grid_bench::Result;
use grid_bench::Settings;
use tracing::error;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<()> {
    let settings = Settings::load(None)?;

    // Initializing Logs
    let _guard = init_observability(settings.cluster.node_id, &settings.cluster.log_dir)?;

    let cfg = BenchmarkConfig {
        command_line: std::env::args().skip(1).collect(),
        ..settings.benchmark.clone()
    };

    // An embedded cluster: real deployments hand the driver their own
    // connector instead.
    let cluster = Arc::new(LocalCluster::new());
    let connector = Arc::new(LocalConnector::new(Arc::clone(&cluster)));
    let mut benchmark =
        ClusterBenchmark::new(settings.cluster.clone(), Attachment::Connect(connector));

    info!("Joining cluster. Waiting for quorum or CTRL+C signal...");
    tokio::select! {
        result = benchmark.set_up(&cfg) => {
            if let Err(e) = result {
                error!("benchmark setup failed: {:?}", e);
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl+C detected.");
            println!("Exiting program.");
            return Ok(());
        }
    }

    let view = benchmark.cluster()?;
    info!("quorum reached: {} member(s) online", view.member_count());
    println!(
        "{}\n  Members online: {}",
        benchmark.description(&cfg),
        view.member_count()
    );

    benchmark.tear_down().await?;

    println!("Exiting program.");
    Ok(())
}

fn init_observability(
    node_id: u32,
    log_dir: &PathBuf,
) -> Result<WorkerGuard> {
    let log_file = file_io::open_file_for_append(Path::new(log_dir).join(format!("{}/b.log", node_id)))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);
    let base_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::from_default_env());
    tracing_subscriber::registry().with(base_subscriber).init();

    Ok(guard)
}
