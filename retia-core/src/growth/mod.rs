//! Incremental growth of an existing graph under attachment rules.
//!
//! Every rule appends `new_node_count` nodes one at a time. Each new node
//! takes the next id from the graph's monotonic counter and is linked to
//! targets drawn from the nodes present before it (earlier nodes of the same
//! call included). Preconditions are checked before the first mutation.

mod preferential;
mod price;
mod uniform;

pub use self::{
    preferential::preferential_attachment, price::price_attachment, uniform::uniform_attachment,
};

use tracing::{info, instrument};

use crate::{Graph, NodeId, RandomSource, Result, Topology, error::GraphError};

/// Attachment rule applied by [`grow`].
///
/// # Examples
/// ```
/// use retia_core::AttachmentRule;
///
/// let rule = AttachmentRule::Price { preferential_fraction: 0.7 };
/// assert_eq!(rule.name(), "price");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttachmentRule {
    /// Targets are distinct nodes drawn uniformly.
    Uniform,
    /// Targets are drawn with replacement, proportional to degree.
    Preferential,
    /// A `preferential_fraction` share of links is preferential, the rest uniform.
    Price {
        /// Share of each node's links drawn preferentially, in `[0, 1]`.
        preferential_fraction: f64,
    },
}

impl AttachmentRule {
    /// Returns a short, stable name for logs and summaries.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Preferential => "preferential",
            Self::Price { .. } => "price",
        }
    }
}

/// Summary of a growth call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrowthOutcome {
    /// Ids of the appended nodes in insertion order.
    pub nodes: Vec<NodeId>,
    /// Number of distinct edges the call created.
    pub edges_added: usize,
}

/// Grows `graph` in place under `rule`.
///
/// # Errors
/// Propagates the errors of the selected rule.
///
/// # Examples
/// ```
/// use retia_core::{AttachmentRule, Graph, Topology, grow, seeded_source};
///
/// let mut graph = Graph::with_nodes(4);
/// let outcome = grow(&mut graph, AttachmentRule::Uniform, 3, 2, &mut seeded_source(5))?;
/// assert_eq!(outcome.nodes, [4, 5, 6]);
/// assert_eq!(graph.edge_count(), 6);
/// # Ok::<(), retia_core::GraphError>(())
/// ```
#[instrument(
    name = "growth.grow",
    skip(graph, rule, rng),
    fields(rule = rule.name(), existing_nodes = graph.node_count()),
    err,
)]
pub fn grow<R>(
    graph: &mut Graph,
    rule: AttachmentRule,
    new_node_count: usize,
    links_per_node: usize,
    rng: &mut R,
) -> Result<GrowthOutcome>
where
    R: RandomSource + ?Sized,
{
    let outcome = match rule {
        AttachmentRule::Uniform => uniform_attachment(graph, new_node_count, links_per_node, rng),
        AttachmentRule::Preferential => {
            preferential_attachment(graph, new_node_count, links_per_node, rng)
        }
        AttachmentRule::Price {
            preferential_fraction,
        } => price_attachment(
            graph,
            new_node_count,
            links_per_node,
            preferential_fraction,
            rng,
        ),
    }?;
    info!(
        added_nodes = outcome.nodes.len(),
        edges_added = outcome.edges_added,
        "graph grown"
    );
    Ok(outcome)
}

/// Split of one node's links between the two draw kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LinkPlan {
    pub(crate) preferential: usize,
    pub(crate) uniform: usize,
}

/// Shared driver: appends nodes and links each one to the drawn targets.
pub(crate) fn attach_nodes<R>(
    graph: &mut Graph,
    new_node_count: usize,
    plan: LinkPlan,
    rng: &mut R,
) -> Result<GrowthOutcome>
where
    R: RandomSource + ?Sized,
{
    check_plan(graph, new_node_count, plan)?;

    let mut outcome = GrowthOutcome {
        nodes: Vec::with_capacity(new_node_count),
        edges_added: 0,
    };
    for _ in 0..new_node_count {
        let existing: Vec<NodeId> = graph.nodes().collect();
        let targets = draw_targets(graph, &existing, plan, rng)?;

        let node = graph.add_next_node()?;
        for target in targets {
            if graph.add_edge(node, target)? {
                outcome.edges_added += 1;
            }
        }
        outcome.nodes.push(node);
    }
    Ok(outcome)
}

fn check_plan(graph: &Graph, new_node_count: usize, plan: LinkPlan) -> Result<()> {
    if new_node_count == 0 {
        return Ok(());
    }
    let available = graph.node_count();
    if plan.uniform > available {
        return Err(GraphError::invalid(
            crate::error::Parameter::LinksPerNode,
            format!(
                "{} uniform links requested but only {available} nodes exist",
                plan.uniform
            ),
        ));
    }
    if plan.preferential > 0 && graph.nodes().all(|node| graph.degree(node) == 0) {
        return Err(GraphError::SamplingExhausted {
            context: "degree-weighted targets",
        });
    }
    Ok(())
}

fn draw_targets<R>(
    graph: &Graph,
    existing: &[NodeId],
    plan: LinkPlan,
    rng: &mut R,
) -> Result<Vec<NodeId>>
where
    R: RandomSource + ?Sized,
{
    let weights: Vec<usize> = if plan.preferential > 0 {
        existing.iter().map(|&node| graph.degree(node)).collect()
    } else {
        Vec::new()
    };
    let preferential = rng.sample_weighted(&weights, plan.preferential)?;
    let uniform = rng.sample_distinct(existing.len(), plan.uniform)?;

    preferential
        .into_iter()
        .chain(uniform)
        .map(|index| {
            existing
                .get(index)
                .copied()
                .ok_or(GraphError::SamplingExhausted {
                    context: "attachment target index",
                })
        })
        .collect()
}
