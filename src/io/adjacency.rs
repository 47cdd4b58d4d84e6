//! # Adjacency-Description Format
//!
//! Reader and writer for `key:comma,separated,neighbors` lines. The format
//! carries keys and adjacency only; payloads are supplied when turning a
//! parsed description into a graph.

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use itertools::Itertools;

use super::{io_error, raise_error_unless};
use crate::graph::Graph;

/// The parsed content of an adjacency description: keys and neighbor lists
/// in input order, without payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphDescription {
    keys: Vec<String>,
    adjacency: Vec<Vec<String>>,
}

impl GraphDescription {
    /// Returns the keys in input order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the neighbor lists, positionally parallel to [`keys`](Self::keys).
    pub fn adjacency(&self) -> &[Vec<String>] {
        &self.adjacency
    }

    /// Returns the number of described vertices.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns *true* if no vertex was described.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Builds a graph by zipping the description with one payload per vertex.
    ///
    /// ** Panics if `payloads` differs in length from the description **
    pub fn into_graph<D>(self, payloads: Vec<D>) -> Graph<String, D> {
        Graph::new(self.keys, payloads, self.adjacency)
    }

    /// Builds a graph deriving each payload from its key.
    pub fn into_graph_with<D, F>(self, mut payload_of: F) -> Graph<String, D>
    where
        F: FnMut(&str) -> D,
    {
        let payloads = self.keys.iter().map(|k| payload_of(k)).collect();
        Graph::new(self.keys, payloads, self.adjacency)
    }
}

/// A reader for the adjacency-description format.
#[derive(Debug, Clone)]
pub struct AdjacencyReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for AdjacencyReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl AdjacencyReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> AdjacencyReader {
        self.comment_identifier = c.into();
        self
    }

    /// Parses an adjacency description from the given reader.
    ///
    /// Blank lines and comment lines are skipped. Empty neighbor tokens
    /// (trailing commas, `key:` with nothing after it) are dropped.
    ///
    /// # Errors
    /// Returns `InvalidData` for a line without `:` or a repeated key.
    pub fn try_read<R: BufRead>(&self, reader: R) -> Result<GraphDescription> {
        let mut description = GraphDescription::default();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with(&self.comment_identifier) {
                continue;
            }

            let Some((key, neighbors)) = line.split_once(':') else {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Missing ':' in line: {line}")
                ));
            };

            raise_error_unless!(
                !description.keys.iter().any(|k| k == key),
                ErrorKind::InvalidData,
                format!("Duplicate key: {key}")
            );

            description.keys.push(key.to_string());
            description.adjacency.push(
                neighbors
                    .split(',')
                    .filter(|token| !token.is_empty())
                    .map(String::from)
                    .collect(),
            );
        }

        Ok(description)
    }

    /// Parses an adjacency description from a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or its content is not
    /// a valid adjacency description.
    pub fn try_read_file<P: AsRef<Path>>(&self, path: P) -> Result<GraphDescription> {
        self.try_read(BufReader::new(File::open(path)?))
    }
}

/// A writer for the adjacency-description format.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyWriter;

impl AdjacencyWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }

    /// Writes the graph in store order, one `key:neighbors` line per vertex.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    pub fn try_write<K, D, W>(&self, graph: &Graph<K, D>, mut writer: W) -> Result<()>
    where
        K: Ord + Clone + Display,
        W: Write,
    {
        for vertex in graph.vertices() {
            writeln!(
                writer,
                "{}:{}",
                vertex.key(),
                vertex.neighbors().iter().join(",")
            )?;
        }
        Ok(())
    }

    /// Writes the graph to a file in the adjacency-description format.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or writing fails.
    pub fn try_write_file<K, D, P>(&self, graph: &Graph<K, D>, path: P) -> Result<()>
    where
        K: Ord + Clone + Display,
        P: AsRef<Path>,
    {
        self.try_write(graph, BufWriter::new(File::create(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_description() {
        let input = "s:t,u\nt:\nu:s\n";
        let description = AdjacencyReader::new().try_read(input.as_bytes()).unwrap();

        assert_eq!(description.keys(), ["s", "t", "u"]);
        assert_eq!(
            description.adjacency(),
            [vec!["t".to_string(), "u".to_string()], vec![], vec!["s".to_string()]]
        );

        let g = description.into_graph_with(|k| format!("{k} data"));
        assert_eq!(g.get(&"s".to_string()).unwrap().payload(), "s data");
        assert!(g.has_edge(&"u".to_string(), &"s".to_string()));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let input = "# a comment\n\ns:t\nt:\n";
        let description = AdjacencyReader::new().try_read(input.as_bytes()).unwrap();
        assert_eq!(description.keys(), ["s", "t"]);
    }

    #[test]
    fn empty_neighbor_tokens_are_dropped() {
        let input = "s:t,\nt:\n";
        let description = AdjacencyReader::new().try_read(input.as_bytes()).unwrap();
        assert_eq!(description.adjacency()[0], ["t"]);
        assert!(description.adjacency()[1].is_empty());
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let err = AdjacencyReader::new()
            .try_read("a:\na:\n".as_bytes())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn missing_colon_is_rejected() {
        let err = AdjacencyReader::new()
            .try_read("ab\n".as_bytes())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn payloads_by_position() {
        let description = AdjacencyReader::new()
            .try_read("a:b\nb:\n".as_bytes())
            .unwrap();
        let g = description.into_graph(vec![10, 20]);
        assert_eq!(*g.get(&"a".to_string()).unwrap().payload(), 10);
        assert_eq!(*g.get(&"b".to_string()).unwrap().payload(), 20);
    }

    #[test]
    fn round_trip() {
        let input = "a:b,c\nb:c\nc:\n";
        let g = AdjacencyReader::new()
            .try_read(input.as_bytes())
            .unwrap()
            .into_graph_with(|_| ());

        let mut buffer = Vec::new();
        AdjacencyWriter::new().try_write(&g, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), input);
    }
}
