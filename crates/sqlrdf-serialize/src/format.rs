//! Supported output formats and their file extensions.

use std::fmt;
use std::str::FromStr;

use crate::error::SerializeError;

/// Serialization formats, named as on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RdfFormat {
    N3,
    NQuads,
    NTriples,
    PrettyXml,
    TriG,
    TriX,
    #[default]
    Turtle,
    Xml,
}

impl RdfFormat {
    /// Every format, in command-line order.
    pub const ALL: [RdfFormat; 8] = [
        RdfFormat::N3,
        RdfFormat::NQuads,
        RdfFormat::NTriples,
        RdfFormat::PrettyXml,
        RdfFormat::TriG,
        RdfFormat::TriX,
        RdfFormat::Turtle,
        RdfFormat::Xml,
    ];

    /// Command-line names of every format.
    pub const NAMES: [&'static str; 8] = [
        "n3",
        "nquads",
        "ntriples",
        "pretty-xml",
        "trig",
        "trix",
        "turtle",
        "xml",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::N3 => "n3",
            Self::NQuads => "nquads",
            Self::NTriples => "ntriples",
            Self::PrettyXml => "pretty-xml",
            Self::TriG => "trig",
            Self::TriX => "trix",
            Self::Turtle => "turtle",
            Self::Xml => "xml",
        }
    }

    /// File extension, including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::N3 => ".n3",
            Self::NQuads => ".nq",
            Self::NTriples => ".nt",
            Self::PrettyXml | Self::Xml => ".xml",
            Self::TriG => ".trig",
            Self::TriX => ".trix",
            Self::Turtle => ".ttl",
        }
    }

    /// Whether the format records the graph name alongside the triples.
    pub fn is_quad_format(&self) -> bool {
        matches!(self, Self::NQuads | Self::TriG | Self::TriX)
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RdfFormat {
    type Err = SerializeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SerializeError::UnknownFormat(s.to_string()))
    }
}
