//! # Pair List
//!
//! The pair-list format consists of lines `u v` representing the undirected
//! edge `{u, v}`. Any line that does not hold exactly two integer tokens is
//! skipped. Vertices occur only as edge endpoints, so isolated vertices do
//! not survive a write/read round trip.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Result, Write},
    path::Path,
};

use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
    ops::{EdgeView, GraphFromParts},
    Edge, Vertex,
};

/// A reader for the pair-list format
#[derive(Debug, Clone, Default)]
pub struct PairListReader;

impl PairListReader {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }

    /// Reads a graph from the given reader, skipping every line that is not
    /// an integer pair. Both endpoints of each accepted edge are added as
    /// vertices.
    ///
    /// # Errors
    /// Returns an error only if reading lines from `reader` fails.
    pub fn try_read_graph<G, R>(&self, reader: R) -> Result<G>
    where
        G: GraphFromParts,
        R: BufRead,
    {
        let mut edges = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let tokens = line.split_whitespace().collect_vec();

            if let [a, b] = tokens[..] {
                match (a.parse::<Vertex>(), b.parse::<Vertex>()) {
                    (Ok(a), Ok(b)) => edges.push(Edge(a, b)),
                    _ => debug!(%line, "skipping pair line with non-integer token"),
                }
            } else if !tokens.is_empty() {
                debug!(%line, "skipping line without exactly two tokens");
            }
        }

        Ok(G::from_parts(std::iter::empty(), edges))
    }
}

/// Trait for creating graphs from pair lists.
/// Implemented for every conforming representation.
pub trait PairListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_pair_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_pair_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_pair_list(BufReader::new(File::open(path)?))
    }

    /// Reads the graph from a given file, degrading any IO failure to an
    /// empty graph with no vertices and no edges
    fn read_pair_list_file<P: AsRef<Path>>(path: P) -> Self;
}

impl<G: GraphFromParts> PairListRead for G {
    fn try_read_pair_list<R: BufRead>(reader: R) -> Result<Self> {
        PairListReader::new().try_read_graph(reader)
    }

    fn read_pair_list_file<P: AsRef<Path>>(path: P) -> Self {
        match Self::try_read_pair_list_file(path) {
            Ok(graph) => graph,
            Err(error) => {
                warn!(%error, "pair list unreadable, falling back to empty graph");
                Self::new()
            }
        }
    }
}

/// A writer for the pair-list format
#[derive(Debug, Clone, Default)]
pub struct PairListWriter;

impl PairListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }

    /// Writes all (normalized) edges of the graph, one `u v` line each
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn try_write_graph<G, W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        G: EdgeView,
        W: Write,
    {
        for Edge(u, v) in graph.edges() {
            writeln!(writer, "{u} {v}")?;
        }
        Ok(())
    }
}

/// Trait for writing a graph as a pair list.
/// Implemented for every conforming representation.
pub trait PairListWrite {
    /// Tries to write the graph to a writer
    fn try_write_pair_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_pair_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl<G: EdgeView> PairListWrite for G {
    fn try_write_pair_list<W: Write>(&self, writer: W) -> Result<()> {
        PairListWriter::new().try_write_graph(self, writer)
    }

    fn try_write_pair_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_pair_list(BufWriter::new(File::create(path)?))
    }
}
