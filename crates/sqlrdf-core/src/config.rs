//! Mapping configuration: which tables become which classes, and which
//! columns draw their values from lookup tables.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (SQLITE2RDF__MAPPING__ prefix)
//! 2. Config file (`[mapping]` section of sqlite2rdf.toml)
//! 3. The built-in "Kerken op de kaart" profile

use std::collections::BTreeMap;

use oxrdf::{Literal, NamedNode};
use serde::Deserialize;

use crate::error::{CoreError, Result};

/// Dataset-level metadata written at the top of the domain graph.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DatasetDescription {
    pub label: String,
    #[serde(default)]
    pub description: String,
}

impl DatasetDescription {
    /// Name of the domain graph: the label with spaces replaced by underscores.
    pub fn graph_name(&self) -> String {
        self.label.replace(' ', "_")
    }
}

impl Default for DatasetDescription {
    fn default() -> Self {
        Self {
            label: "Kerken op de kaart".to_string(),
            description: "Nederlandse kerken die tussen 1800 en 1970 gebouwd zijn, \
                          verzamelt door Herman Wesselink tijdens zijn promotietraject \
                          aan de Vrije Universiteit Amsterdam."
                .to_string(),
        }
    }
}

/// How one domain table maps onto the graph.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TableMapping {
    /// Table name as it appears in the database.
    pub name: String,

    /// Class name; rows become instances of `namespace + class`.
    pub class: String,

    /// Column name → lookup table whose concepts replace the column's values.
    #[serde(default)]
    pub links: BTreeMap<String, String>,
}

impl TableMapping {
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            links: BTreeMap::new(),
        }
    }

    pub fn with_link(mut self, column: impl Into<String>, lookup: impl Into<String>) -> Self {
        self.links.insert(column.into(), lookup.into());
        self
    }

    /// Lookup table configured for `column`, compared case-insensitively.
    pub fn lookup_for(&self, column: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|(col, _)| col.eq_ignore_ascii_case(column))
            .map(|(_, lookup)| lookup.as_str())
    }
}

/// Top-level mapping configuration.
///
/// Loaded from the `[mapping]` section of `sqlite2rdf.toml` or
/// `SQLITE2RDF__MAPPING__` environment variables.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MappingConfig {
    /// Base namespace for node, class, and predicate IRIs.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// The table whose rows are the referenceable entities.
    pub main_table: String,

    /// Identifier column of the main table.
    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// Tables whose name starts with this prefix are controlled vocabularies.
    #[serde(default = "default_lookup_prefix")]
    pub lookup_prefix: String,

    /// Language tag for class and dataset labels.
    #[serde(default = "default_label_language")]
    pub label_language: String,

    #[serde(default)]
    pub dataset: DatasetDescription,

    /// Domain tables in conversion order.
    #[serde(default)]
    pub tables: Vec<TableMapping>,
}

fn default_namespace() -> String {
    "http://rdf.example.org/".to_string()
}

fn default_id_column() -> String {
    "ID".to_string()
}

fn default_lookup_prefix() -> String {
    "Lookup_".to_string()
}

fn default_label_language() -> String {
    "nl".to_string()
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            main_table: "01_Hoofdtabel_Kerken".to_string(),
            id_column: default_id_column(),
            lookup_prefix: default_lookup_prefix(),
            label_language: default_label_language(),
            dataset: DatasetDescription::default(),
            tables: vec![
                TableMapping::new("01_Hoofdtabel_Kerken", "Kerk").with_link("stijl", "Lookup_Stijl"),
                TableMapping::new("011_Naam_Kerk", "Naamgeving"),
                TableMapping::new("012_Denominatie", "Denominatie"),
                TableMapping::new("013_Architect", "Architect"),
                TableMapping::new("014_Bronnen", "Bron"),
            ],
        }
    }
}

impl MappingConfig {
    /// Load the mapping from `<file_prefix>.toml` (optional) and the environment.
    ///
    /// A missing `[mapping]` section yields the built-in profile; a present but
    /// malformed one is an error.
    pub fn load(file_prefix: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("SQLITE2RDF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        match cfg.get::<MappingConfig>("mapping") {
            Ok(mapping) => {
                tracing::debug!(file_prefix, "Loaded mapping configuration");
                Ok(mapping)
            }
            Err(config::ConfigError::NotFound(_)) => {
                tracing::debug!(file_prefix, "No mapping section, using built-in profile");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the base namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Namespace for concept schemes and concepts.
    pub fn vocab_namespace(&self) -> String {
        format!("{}vocab/", self.namespace)
    }

    pub fn is_lookup_table(&self, table: &str) -> bool {
        table.starts_with(&self.lookup_prefix)
    }

    pub fn table(&self, name: &str) -> Option<&TableMapping> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Class name for `table`, or `UnmappedTable` if it is not configured.
    pub fn class_of(&self, table: &str) -> Result<&str> {
        self.table(table)
            .map(|t| t.class.as_str())
            .ok_or_else(|| CoreError::UnmappedTable(table.to_string()))
    }

    /// Lookup table configured for `table.column`, if any.
    pub fn lookup_for(&self, table: &str, column: &str) -> Option<&str> {
        self.table(table).and_then(|t| t.lookup_for(column))
    }

    /// Configured domain tables other than the main table, in declared order.
    pub fn secondary_tables(&self) -> impl Iterator<Item = &TableMapping> {
        self.tables.iter().filter(move |t| t.name != self.main_table)
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.namespace.trim().is_empty() {
            return Err(CoreError::Config("namespace must not be empty".to_string()));
        }
        NamedNode::new(self.namespace.as_str())?;
        Literal::new_language_tagged_literal("", self.label_language.as_str())?;
        if self.id_column.is_empty() {
            return Err(CoreError::Config("id_column must not be empty".to_string()));
        }
        if self.lookup_prefix.is_empty() {
            return Err(CoreError::Config("lookup_prefix must not be empty".to_string()));
        }
        if self.table(&self.main_table).is_none() {
            return Err(CoreError::MainTableUnmapped(self.main_table.clone()));
        }

        for (idx, table) in self.tables.iter().enumerate() {
            if table.class.trim().is_empty() {
                return Err(CoreError::Config(format!(
                    "table {} has an empty class name",
                    table.name
                )));
            }
            if self.is_lookup_table(&table.name) {
                return Err(CoreError::Config(format!(
                    "lookup table {} cannot be mapped to a class",
                    table.name
                )));
            }
            if self.tables[..idx].iter().any(|t| t.name == table.name) {
                return Err(CoreError::Config(format!(
                    "table {} is mapped more than once",
                    table.name
                )));
            }
            for (column, lookup) in &table.links {
                if !self.is_lookup_table(lookup) {
                    return Err(CoreError::UnknownLookupTable {
                        table: table.name.clone(),
                        column: column.clone(),
                        lookup: lookup.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
