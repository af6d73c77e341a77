//! Delimited `source,target` edge-list reader.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use retia_core::{Graph, NodeId, Topology};
use tracing::{info, instrument};

use crate::errors::EdgeListError;

/// Column names and delimiter used to read an edge list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeListOptions {
    source_column: String,
    target_column: String,
    delimiter: u8,
}

impl Default for EdgeListOptions {
    fn default() -> Self {
        Self {
            source_column: "source".to_owned(),
            target_column: "target".to_owned(),
            delimiter: b',',
        }
    }
}

impl EdgeListOptions {
    /// Returns options for `source,target` columns separated by commas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads endpoints from the named header columns instead.
    #[must_use]
    pub fn with_columns(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source_column = source.into();
        self.target_column = target.into();
        self
    }

    /// Splits fields on `delimiter` instead of a comma.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn source_column(&self) -> &str {
        &self.source_column
    }

    #[must_use]
    pub fn target_column(&self) -> &str {
        &self.target_column
    }

    #[must_use]
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

/// Graph imported from a delimited edge list.
///
/// Nodes are created on first mention; repeated rows describe the same
/// undirected edge and are absorbed.
#[derive(Clone, Debug)]
pub struct EdgeListProvider {
    name: String,
    graph: Graph,
    records: usize,
}

impl EdgeListProvider {
    /// Reads a comma-separated edge list with `source` and `target` columns.
    ///
    /// # Errors
    /// See [`EdgeListProvider::try_from_reader_with`].
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    ///
    /// use retia_core::Topology;
    /// use retia_providers_edgelist::EdgeListProvider;
    ///
    /// let input = "source,target\n1,2\n2,5\n";
    /// let provider = EdgeListProvider::try_from_reader("demo", Cursor::new(input))?;
    /// assert_eq!(provider.graph().node_count(), 3);
    /// assert!(provider.graph().has_edge(5, 2));
    /// # Ok::<(), retia_providers_edgelist::EdgeListError>(())
    /// ```
    pub fn try_from_reader<R: Read>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, EdgeListError> {
        Self::try_from_reader_with(name, reader, &EdgeListOptions::default())
    }

    /// Reads an edge list using explicit column names and delimiter.
    ///
    /// # Errors
    /// Returns [`EdgeListError::MissingColumn`] when the header lacks a
    /// configured column, [`EdgeListError::InvalidNodeId`] or
    /// [`EdgeListError::SelfLoop`] for a bad record,
    /// [`EdgeListError::Csv`] for malformed text and
    /// [`EdgeListError::EmptyInput`] when the input has no header or no
    /// record follows it.
    pub fn try_from_reader_with<R: Read>(
        name: impl Into<String>,
        reader: R,
        options: &EdgeListOptions,
    ) -> Result<Self, EdgeListError> {
        let name = name.into();
        let (graph, records) = read_edges(&name, reader, options)?;
        Ok(Self {
            name,
            graph,
            records,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the imported graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Number of data records read, duplicates included.
    #[must_use]
    pub fn records(&self) -> usize {
        self.records
    }

    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

#[instrument(name = "providers.edgelist.read", skip(reader, options), err)]
fn read_edges<R: Read>(
    name: &str,
    reader: R,
    options: &EdgeListOptions,
) -> Result<(Graph, usize), EdgeListError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(EdgeListError::EmptyInput);
    }
    let source_index = column_index(&headers, &options.source_column)?;
    let target_index = column_index(&headers, &options.target_column)?;

    let mut graph = Graph::new();
    let mut records = 0_usize;
    for (offset, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(offset as u64 + 2, csv::Position::line);
        let source = parse_node(&record, source_index, line)?;
        let target = parse_node(&record, target_index, line)?;
        if source == target {
            return Err(EdgeListError::SelfLoop { line, node: source });
        }
        for node in [source, target] {
            if !graph.contains_node(node) {
                graph.add_node(node)?;
            }
        }
        graph.add_edge(source, target)?;
        records += 1;
    }

    if records == 0 {
        return Err(EdgeListError::EmptyInput);
    }
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        records,
        "edge list imported"
    );
    Ok((graph, records))
}

fn column_index(headers: &StringRecord, column: &str) -> Result<usize, EdgeListError> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| EdgeListError::MissingColumn {
            column: column.to_owned(),
        })
}

fn parse_node(record: &StringRecord, index: usize, line: u64) -> Result<NodeId, EdgeListError> {
    let value = record.get(index).unwrap_or_default();
    value
        .parse::<NodeId>()
        .map_err(|_| EdgeListError::InvalidNodeId {
            line,
            value: value.to_owned(),
        })
}
