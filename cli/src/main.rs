//! Graph Animator CLI
//!
//! Generates seeded random graphs and plays traversals over them, printing
//! every draw call as a line of text.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{ContentArrangement, Table};
use graph_animator::algo::{Algorithm, FrontierStrategy, RelaxationLabels};
use graph_animator::graph::{create_randomized_graph, Graph, VertexId};
use graph_animator::render::{RecordingRenderer, RenderAdapter, TextRenderer};
use graph_animator::scheduler::RunReport;
use graph_animator::session::{RunOutcome, Session};
use graph_animator::AnimatorConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graph-animator", version, about = "Animated graph traversals")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Dfs,
    Bfs,
    Dijkstra,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Dfs => Algorithm::DepthFirst,
            AlgorithmArg::Bfs => Algorithm::BreadthFirst,
            AlgorithmArg::Dijkstra => Algorithm::ShortestPath,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FrontierArg {
    Linear,
    Heap,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a traversal over a seeded random graph
    Run {
        /// Traversal to play
        #[arg(long, short, default_value = "dfs")]
        algorithm: AlgorithmArg,

        /// Start vertex id
        #[arg(long, short, default_value_t = 0)]
        start: usize,

        /// Random graph seed
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Pause between steps in milliseconds (overrides the config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Shortest-path frontier
        #[arg(long)]
        frontier: Option<FrontierArg>,

        /// Keep only final shortest-path tree edges labelled as relaxed
        #[arg(long)]
        tree_labels: bool,

        /// Print every draw call while the traversal plays
        #[arg(long)]
        draw: bool,
    },
    /// Print a seeded random graph
    Generate {
        /// Random graph seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Serialize)]
struct RunOutput<'a> {
    report: &'a RunReport,
    graph: &'a Graph,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("graph_animator=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match load_config(cli.config.as_ref()) {
        Ok(config) => match cli.command {
            Commands::Run {
                algorithm,
                start,
                seed,
                delay_ms,
                frontier,
                tree_labels,
                draw,
            } => {
                let mut config = config;
                if let Some(ms) = delay_ms {
                    config.step_delay_ms = ms;
                }
                if let Some(frontier) = frontier {
                    config.shortest_path.frontier = match frontier {
                        FrontierArg::Linear => FrontierStrategy::LinearScan,
                        FrontierArg::Heap => FrontierStrategy::BinaryHeap,
                    };
                }
                if tree_labels {
                    config.shortest_path.labels = RelaxationLabels::ShortestPathTree;
                }
                run_traversal(&config, algorithm.into(), VertexId::new(start), seed, draw, cli.format).await
            }
            Commands::Generate { seed } => run_generate(&config, seed, cli.format),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AnimatorConfig> {
    match path {
        Some(path) => AnimatorConfig::load(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(AnimatorConfig::default()),
    }
}

fn generate(config: &AnimatorConfig, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    create_randomized_graph(&config.random_graph(), &mut rng)
}

async fn run_traversal(
    config: &AnimatorConfig,
    algorithm: Algorithm,
    start: VertexId,
    seed: u64,
    draw: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let graph = generate(config, seed);
    if !graph.has_vertex(start) {
        bail!(
            "start vertex {} does not exist, seed {} produced {} vertices",
            start.index(),
            seed,
            graph.vertex_count()
        );
    }
    info!("Seed {} produced {} vertices and {} edges", seed, graph.vertex_count(), graph.edge_count());

    let session = Session::with_config(graph, config);
    let mut renderer: Box<dyn RenderAdapter + Send> = if draw {
        Box::new(
            TextRenderer::new(std::io::stdout(), config.vertex_radius).with_background(config.palette.background),
        )
    } else {
        Box::new(RecordingRenderer::new())
    };

    let report = match session.run(algorithm, start, renderer.as_mut()).await? {
        RunOutcome::Completed(report) => report,
        RunOutcome::Rejected => bail!("a traversal is already running"),
    };
    let graph = session.snapshot().await;

    match format {
        OutputFormat::Json => {
            let output = RunOutput {
                report: &report,
                graph: &graph,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table => {
            println!("{} from vertex {} in {} steps", report.algorithm, start.index(), report.steps);
            println!("{}", vertex_table(&graph, Some(&report)));
            println!("{}", edge_table(&graph));
        }
    }
    Ok(())
}

fn run_generate(config: &AnimatorConfig, seed: u64, format: OutputFormat) -> anyhow::Result<()> {
    let graph = generate(config, seed);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&graph)?),
        OutputFormat::Table => {
            println!("{}", vertex_table(&graph, None));
            println!("{}", edge_table(&graph));
            println!("{} vertices, {} edges", graph.vertex_count(), graph.edge_count());
        }
    }
    Ok(())
}

fn vertex_table(graph: &Graph, report: Option<&RunReport>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["vertex", "position", "state", "annotation"]);

    for vertex in graph.vertices() {
        let annotation = report
            .and_then(|r| r.annotations.get(vertex.id.index()).copied().flatten())
            .map(|a| a.to_string())
            .unwrap_or_default();
        table.add_row(vec![
            vertex.id.index().to_string(),
            vertex.position.to_string(),
            vertex.state.to_string(),
            annotation,
        ]);
    }
    table
}

fn edge_table(graph: &Graph) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["edge", "from", "to", "weight", "directed", "state"]);

    for edge in graph.edges() {
        table.add_row(vec![
            edge.id.index().to_string(),
            edge.vertex0.index().to_string(),
            edge.vertex1.index().to_string(),
            edge.weight.to_string(),
            edge.directed.to_string(),
            edge.state.to_string(),
        ]);
    }
    table
}
