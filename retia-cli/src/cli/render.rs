//! Command summaries and their text rendering.

use std::io::{self, Write};

use retia_core::{NodeId, Topology};
use retia_metrics::{
    MetricsError, average_clustering, average_shortest_path_length, mean_degree_connectivity,
};

use super::CliError;

/// Outcome of a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Result of `generate`.
    Generate(GenerateSummary),
    /// Result of `analyze`.
    Analyze(AnalyzeSummary),
}

/// Graph-wide averages; `None` where the measure is undefined, such as path
/// lengths on a disconnected graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStats {
    pub mean_degree_connectivity: Option<f64>,
    pub average_clustering: Option<f64>,
    pub average_shortest_path_length: Option<f64>,
}

impl GraphStats {
    /// Computes every average for `graph`.
    ///
    /// # Errors
    /// Returns [`CliError::Metrics`] for failures other than an empty or
    /// disconnected graph.
    pub fn compute<T: Topology>(graph: &T) -> Result<Self, CliError> {
        Ok(Self {
            mean_degree_connectivity: defined(mean_degree_connectivity(graph))?,
            average_clustering: defined(average_clustering(graph))?,
            average_shortest_path_length: defined(average_shortest_path_length(graph))?,
        })
    }
}

fn defined(result: Result<f64, MetricsError>) -> Result<Option<f64>, CliError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(MetricsError::EmptyGraph | MetricsError::Disconnected { .. }) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Growth step applied by `generate --grow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthReport {
    pub rule: &'static str,
    pub nodes_added: usize,
    pub edges_added: usize,
}

/// Summary of a generated network.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub model: &'static str,
    pub seed: u64,
    pub node_count: usize,
    pub edge_count: usize,
    /// Node counts indexed by degree.
    pub degree_histogram: Vec<usize>,
    pub stats: GraphStats,
    /// Community sizes for block models.
    pub community_sizes: Option<Vec<usize>>,
    pub growth: Option<GrowthReport>,
    /// Every edge as `(low, high)`, present when `--edges` was given.
    pub edges: Option<Vec<(NodeId, NodeId)>>,
}

/// Per-node measures reported by `analyze`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeReport {
    pub node: NodeId,
    pub degree: usize,
    pub closeness: f64,
    pub betweenness: f64,
    pub pagerank: f64,
}

/// Summary of an analysed edge list.
#[derive(Debug, Clone)]
pub struct AnalyzeSummary {
    pub data_source: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes: Vec<NodeReport>,
    pub stats: GraphStats,
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use retia_cli::cli::{AnalyzeSummary, ExecutionSummary, GraphStats, render_summary};
///
/// let summary = ExecutionSummary::Analyze(AnalyzeSummary {
///     data_source: "demo".into(),
///     node_count: 0,
///     edge_count: 0,
///     nodes: Vec::new(),
///     stats: GraphStats {
///         mean_degree_connectivity: None,
///         average_clustering: None,
///         average_shortest_path_length: None,
///     },
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("data source: demo\n"));
/// assert!(text.contains("average clustering: undefined\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generate(summary) => render_generate(summary, &mut writer),
        ExecutionSummary::Analyze(summary) => render_analyze(summary, &mut writer),
    }
}

fn render_generate(summary: &GenerateSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "model: {}", summary.model)?;
    writeln!(writer, "seed: {}", summary.seed)?;
    if let Some(sizes) = &summary.community_sizes {
        let sizes: Vec<String> = sizes.iter().map(ToString::to_string).collect();
        writeln!(writer, "communities: {}", sizes.join(","))?;
    }
    if let Some(growth) = &summary.growth {
        writeln!(
            writer,
            "growth: {} (+{} nodes, +{} edges)",
            growth.rule, growth.nodes_added, growth.edges_added
        )?;
    }
    writeln!(writer, "nodes: {}", summary.node_count)?;
    writeln!(writer, "edges: {}", summary.edge_count)?;
    render_stats(&summary.stats, &mut writer)?;
    writeln!(writer, "degree\tcount")?;
    for (degree, &count) in summary.degree_histogram.iter().enumerate() {
        if count > 0 {
            writeln!(writer, "{degree}\t{count}")?;
        }
    }
    if let Some(edges) = &summary.edges {
        writeln!(writer, "source\ttarget")?;
        for (source, target) in edges {
            writeln!(writer, "{source}\t{target}")?;
        }
    }
    Ok(())
}

fn render_analyze(summary: &AnalyzeSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "nodes: {}", summary.node_count)?;
    writeln!(writer, "edges: {}", summary.edge_count)?;
    render_stats(&summary.stats, &mut writer)?;
    writeln!(writer, "node\tdegree\tcloseness\tbetweenness\tpagerank")?;
    for report in &summary.nodes {
        writeln!(
            writer,
            "{}\t{}\t{:.6}\t{:.6}\t{:.6}",
            report.node, report.degree, report.closeness, report.betweenness, report.pagerank
        )?;
    }
    Ok(())
}

fn render_stats(stats: &GraphStats, mut writer: impl Write) -> io::Result<()> {
    for (label, value) in [
        ("mean degree connectivity", stats.mean_degree_connectivity),
        ("average clustering", stats.average_clustering),
        (
            "average shortest path length",
            stats.average_shortest_path_length,
        ),
    ] {
        match value {
            Some(value) => writeln!(writer, "{label}: {value:.6}")?,
            None => writeln!(writer, "{label}: undefined")?,
        }
    }
    Ok(())
}
