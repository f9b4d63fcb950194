//! Format dispatch and file output for named graphs.
//!
//! Each named graph is written to its own file in the output directory:
//! ```text
//! {dir}/
//!   Lookup_Stijl.ttl
//!   Kerken_op_de_kaart.ttl
//! ```

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use rio_api::formatter::{QuadsFormatter, TriplesFormatter};
use rio_turtle::{NQuadsFormatter, NTriplesFormatter, TriGFormatter, TurtleFormatter};
use rio_xml::RdfXmlFormatter;
use sqlrdf_core::{Graph, NamedGraph, NamedNode};

use crate::error::Result;
use crate::format::RdfFormat;
use crate::{model, trix};

/// Indentation of pretty RDF/XML output.
const PRETTY_XML_INDENT: usize = 2;

/// Serializes named graphs in one output format under one namespace.
#[derive(Debug, Clone)]
pub struct GraphWriter {
    format: RdfFormat,
    namespace: String,
}

impl GraphWriter {
    pub fn new(format: RdfFormat, namespace: &str) -> Self {
        Self {
            format,
            namespace: namespace.to_string(),
        }
    }

    pub fn format(&self) -> RdfFormat {
        self.format
    }

    /// IRI naming a graph in quad formats: the namespace followed by the
    /// percent-encoded graph name.
    pub fn graph_iri(&self, name: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("{}{}", self.namespace, percent_encode(name)))
    }

    /// Serialize `graph` into `out`. Quad formats carry the graph IRI.
    pub fn write<W: Write>(&self, graph: &NamedGraph, out: &mut W) -> Result<()> {
        let triples = &graph.graph;
        match self.format {
            RdfFormat::NTriples => format_triples(&mut NTriplesFormatter::new(&mut *out), triples)?,
            RdfFormat::Turtle | RdfFormat::N3 => {
                let mut formatter = TurtleFormatter::new(&mut *out);
                format_triples(&mut formatter, triples)?;
                formatter.finish()?;
            }
            RdfFormat::Xml | RdfFormat::PrettyXml => {
                let mut formatter = if self.format == RdfFormat::PrettyXml {
                    RdfXmlFormatter::with_indentation(&mut *out, PRETTY_XML_INDENT)?
                } else {
                    RdfXmlFormatter::new(&mut *out)?
                };
                format_triples(&mut formatter, triples)?;
                formatter.finish()?;
            }
            RdfFormat::NQuads => {
                let graph_iri = self.graph_iri(&graph.name);
                format_quads(&mut NQuadsFormatter::new(&mut *out), triples, &graph_iri)?;
            }
            RdfFormat::TriG => {
                let graph_iri = self.graph_iri(&graph.name);
                let mut formatter = TriGFormatter::new(&mut *out);
                format_quads(&mut formatter, triples, &graph_iri)?;
                formatter.finish()?;
            }
            RdfFormat::TriX => trix::write(triples, &self.graph_iri(&graph.name), out)?,
        }
        Ok(())
    }

    /// Serialize `graph` into a string.
    pub fn render(&self, graph: &NamedGraph) -> Result<String> {
        let mut out = Vec::new();
        self.write(graph, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Write `graph` to `{dir}/{name}{extension}`, creating `dir` if needed.
    /// Returns the path of the written file.
    pub fn write_file(&self, dir: &Path, graph: &NamedGraph) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}{}", graph.name, self.format.extension()));

        let mut out = BufWriter::new(File::create(&path)?);
        self.write(graph, &mut out)?;
        out.flush()?;

        tracing::debug!(
            graph = %graph.name,
            triples = graph.graph.len(),
            path = %path.display(),
            "Graph written"
        );
        Ok(path)
    }
}

fn format_triples<F>(formatter: &mut F, graph: &Graph) -> io::Result<()>
where
    F: TriplesFormatter<Error = io::Error>,
{
    for triple in graph.iter() {
        formatter.format(&model::triple(triple))?;
    }
    Ok(())
}

fn format_quads<F>(formatter: &mut F, graph: &Graph, graph_iri: &NamedNode) -> io::Result<()>
where
    F: QuadsFormatter<Error = io::Error>,
{
    for triple in graph.iter() {
        formatter.format(&model::quad(triple, graph_iri))?;
    }
    Ok(())
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn percent_encode(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for byte in name.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
