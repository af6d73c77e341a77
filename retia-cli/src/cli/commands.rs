//! Argument parsing and command execution for the retia CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use retia_core::{
    AttachmentRule, DEFAULT_SEED, Graph, GraphError, NodeId, ProbabilityMatrix, Topology,
    community_block_graph, grow, independent_edge_graph, seeded_source, small_world_graph,
};
use retia_metrics::{
    MetricsError, PageRankConfig, betweenness_centrality, closeness_centrality, degree_histogram,
    pagerank,
};
use retia_providers_edgelist::{EdgeListError, EdgeListProvider};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::render::{
    AnalyzeSummary, ExecutionSummary, GenerateSummary, GraphStats, GrowthReport, NodeReport,
};

const DEFAULT_LINKS: usize = 1;
const DEFAULT_PREFERENTIAL_FRACTION: f64 = 0.5;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "retia",
    about = "Generate synthetic networks and analyse edge lists."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a random network, optionally growing it afterwards.
    Generate(GenerateCommand),
    /// Load a `source,target` edge list and report centrality measures.
    Analyze(AnalyzeCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Seed for the random source.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// List every edge after the summary.
    #[arg(long)]
    pub edges: bool,

    /// Optional growth step applied to the generated network.
    #[command(flatten)]
    pub growth: GrowthArgs,

    /// Model used to build the initial network.
    #[command(subcommand)]
    pub model: ModelCommand,
}

/// Growth step applied after generation.
#[derive(Debug, Args, Clone)]
pub struct GrowthArgs {
    /// Attachment rule; growth is skipped when omitted.
    #[arg(long = "grow", value_enum)]
    pub rule: Option<GrowthRule>,

    /// Number of nodes to attach.
    #[arg(long = "new-nodes", default_value_t = 0, requires = "rule")]
    pub new_nodes: usize,

    /// Links drawn by each new node.
    #[arg(long, default_value_t = DEFAULT_LINKS, requires = "rule")]
    pub links: usize,

    /// Share of links drawn preferentially by the `price` rule.
    #[arg(
        long = "preferential-fraction",
        default_value_t = DEFAULT_PREFERENTIAL_FRACTION,
        requires = "rule"
    )]
    pub preferential_fraction: f64,
}

impl GrowthArgs {
    fn attachment_rule(&self) -> Option<AttachmentRule> {
        self.rule.map(|rule| match rule {
            GrowthRule::Uniform => AttachmentRule::Uniform,
            GrowthRule::Preferential => AttachmentRule::Preferential,
            GrowthRule::Price => AttachmentRule::Price {
                preferential_fraction: self.preferential_fraction,
            },
        })
    }
}

/// Attachment rules selectable with `--grow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GrowthRule {
    /// Targets drawn uniformly without replacement.
    Uniform,
    /// Targets drawn proportionally to degree.
    Preferential,
    /// Preferential share first, uniform remainder.
    Price,
}

/// Random network models.
#[derive(Debug, Subcommand, Clone)]
pub enum ModelCommand {
    /// Independent edges with a fixed probability.
    ErdosRenyi(ErdosRenyiArgs),
    /// Ring lattice with random rewiring.
    SmallWorld(SmallWorldArgs),
    /// Stochastic block model over consecutive communities.
    Community(CommunityArgs),
}

impl ModelCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::ErdosRenyi(_) => "erdos-renyi",
            Self::SmallWorld(_) => "small-world",
            Self::Community(_) => "community",
        }
    }
}

/// Arguments for the independent-edge model.
#[derive(Debug, Args, Clone)]
pub struct ErdosRenyiArgs {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,
    /// Probability of each possible edge.
    #[arg(long)]
    pub probability: f64,
}

/// Arguments for the small-world model.
#[derive(Debug, Args, Clone)]
pub struct SmallWorldArgs {
    /// Number of nodes on the ring.
    #[arg(long)]
    pub nodes: usize,
    /// Lattice neighbours per node, split evenly between both sides.
    #[arg(long)]
    pub neighbours: usize,
    /// Probability of rewiring each lattice edge.
    #[arg(long)]
    pub rewire: f64,
}

/// Arguments for the community block model.
#[derive(Debug, Args, Clone)]
pub struct CommunityArgs {
    /// Comma-separated community sizes.
    #[arg(long, value_delimiter = ',', required = true)]
    pub sizes: Vec<usize>,
    /// Probability matrix rows separated by `;`, entries by `,`.
    #[arg(long)]
    pub matrix: String,
}

/// Options accepted by the `analyze` command.
#[derive(Debug, Args, Clone)]
pub struct AnalyzeCommand {
    /// Path to a delimited edge list with `source` and `target` columns.
    pub path: PathBuf,

    /// Comma-separated nodes to report (defaults to every node).
    #[arg(long, value_delimiter = ',')]
    pub nodes: Vec<NodeId>,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening an input.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The `--matrix` argument could not be parsed.
    #[error("invalid probability matrix: {reason}")]
    InvalidMatrix {
        /// Why parsing failed.
        reason: String,
    },
    /// A node requested with `--nodes` is absent from the edge list.
    #[error("node {node} is not in the edge list")]
    UnknownNode {
        /// The requested node.
        node: NodeId,
    },
    /// Generation or growth failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// A metric could not be computed.
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    /// Edge-list import failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
}

impl CliError {
    /// Returns a stable machine-readable code, delegating to wrapped errors.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::InvalidMatrix { .. } => "CLI_INVALID_MATRIX",
            Self::UnknownNode { .. } => "CLI_UNKNOWN_NODE",
            Self::Graph(err) => err.code().as_str(),
            Self::Metrics(err) => err.code().as_str(),
            Self::EdgeList(err) => err.code().as_str(),
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when parsing an argument, generation, import or a
/// metric fails.
///
/// # Examples
/// ```
/// use retia_cli::cli::{
///     Cli, Command, ErdosRenyiArgs, ExecutionSummary, GenerateCommand, GrowthArgs,
///     ModelCommand, run_cli,
/// };
///
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         seed: 7,
///         edges: false,
///         growth: GrowthArgs {
///             rule: None,
///             new_nodes: 0,
///             links: 1,
///             preferential_fraction: 0.5,
///         },
///         model: ModelCommand::ErdosRenyi(ErdosRenyiArgs {
///             nodes: 12,
///             probability: 1.0,
///         }),
///     }),
/// };
/// let ExecutionSummary::Generate(summary) = run_cli(cli)? else {
///     unreachable!("generate yields a generation summary");
/// };
/// assert_eq!(summary.edge_count, 66);
/// # Ok::<(), retia_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Generate(command) => {
            span.record("command", field::display("generate"));
            run_generate(command).map(ExecutionSummary::Generate)
        }
        Command::Analyze(command) => {
            span.record("command", field::display("analyze"));
            run_analyze(command).map(ExecutionSummary::Analyze)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(model = command.model.name(), seed = command.seed),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GenerateSummary, CliError> {
    let GenerateCommand {
        seed,
        edges,
        growth,
        model,
    } = command;
    let mut rng = seeded_source(seed);

    let (mut graph, communities) = match &model {
        ModelCommand::ErdosRenyi(args) => (
            independent_edge_graph(args.nodes, args.probability, &mut rng)?,
            None,
        ),
        ModelCommand::SmallWorld(args) => (
            small_world_graph(args.nodes, args.neighbours, args.rewire, &mut rng)?,
            None,
        ),
        ModelCommand::Community(args) => {
            let matrix = ProbabilityMatrix::new(parse_matrix(&args.matrix)?)?;
            let generated = community_block_graph(&args.sizes, &matrix, &mut rng)?;
            (generated.graph, Some(generated.communities))
        }
    };

    let growth = match growth.attachment_rule() {
        Some(rule) => {
            let outcome = grow(&mut graph, rule, growth.new_nodes, growth.links, &mut rng)?;
            Some(GrowthReport {
                rule: rule.name(),
                nodes_added: outcome.nodes.len(),
                edges_added: outcome.edges_added,
            })
        }
        None => None,
    };

    let summary = GenerateSummary {
        model: model.name(),
        seed,
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        degree_histogram: degree_histogram(&graph),
        stats: GraphStats::compute(&graph)?,
        community_sizes: communities.map(|communities| communities.sizes().to_vec()),
        growth,
        edges: edges.then(|| graph.edges().collect()),
    };
    info!(
        nodes = summary.node_count,
        edges = summary.edge_count,
        "network generated"
    );
    Ok(summary)
}

/// Parses `"0.5,0.1;0.1,0.5"` into matrix rows.
pub(super) fn parse_matrix(raw: &str) -> Result<Vec<Vec<f64>>, CliError> {
    raw.split(';')
        .map(|row| {
            row.split(',')
                .map(|entry| {
                    let entry = entry.trim();
                    entry.parse::<f64>().map_err(|err| CliError::InvalidMatrix {
                        reason: format!("`{entry}` is not a number: {err}"),
                    })
                })
                .collect()
        })
        .collect()
}

#[instrument(
    name = "cli.analyze",
    err,
    skip(command),
    fields(path = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_analyze(command: AnalyzeCommand) -> Result<AnalyzeSummary, CliError> {
    let AnalyzeCommand { path, nodes, name } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let data_source = derive_data_source_name(&path, name.as_deref());
    let provider = EdgeListProvider::try_from_reader(data_source, open_reader(&path)?)?;
    let graph = provider.graph();
    let requested = requested_nodes(graph, nodes)?;

    let closeness = closeness_centrality(graph);
    let betweenness = betweenness_centrality(graph);
    let ranks = pagerank(graph, PageRankConfig::default())?;
    let reports = requested
        .into_iter()
        .map(|node| NodeReport {
            node,
            degree: graph.degree(node),
            closeness: closeness.get(&node).copied().unwrap_or_default(),
            betweenness: betweenness.get(&node).copied().unwrap_or_default(),
            pagerank: ranks.get(&node).copied().unwrap_or_default(),
        })
        .collect();

    let summary = AnalyzeSummary {
        data_source: provider.name().to_owned(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        nodes: reports,
        stats: GraphStats::compute(graph)?,
    };
    info!(
        data_source = summary.data_source.as_str(),
        nodes = summary.node_count,
        "edge list analysed"
    );
    Ok(summary)
}

fn requested_nodes(graph: &Graph, nodes: Vec<NodeId>) -> Result<Vec<NodeId>, CliError> {
    if nodes.is_empty() {
        return Ok(graph.nodes().collect());
    }
    match nodes.iter().find(|&&node| !graph.contains_node(node)) {
        Some(&node) => Err(CliError::UnknownNode { node }),
        None => Ok(nodes),
    }
}

#[instrument(name = "cli.open_reader", err)]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map_or_else(|| "edge_list".to_owned(), ToOwned::to_owned)
}
