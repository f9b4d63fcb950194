//! One conversion run: lookup tables, then the main table, then every
//! secondary table, all against the same source and mapping.

use sqlrdf_core::{CoreError, Graph, MappingConfig, NamedGraph};
use sqlrdf_source::{RelationalSource, Table};

use crate::dataset::describe_dataset;
use crate::entity::{EntityConverter, ReferenceMap};
use crate::error::Result;
use crate::linker::link_by_ordinal;
use crate::mint::NodeMinter;
use crate::vocabulary::{skosify, VocabularyMap};

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Vocabulary graphs in table-name order, followed by the domain graph.
    pub graphs: Vec<NamedGraph>,
    /// Main-table identifier → entity node.
    pub references: ReferenceMap,
    /// Lookup table → concept nodes.
    pub vocabulary: VocabularyMap,
}

impl Conversion {
    /// The combined domain graph (always the last graph).
    pub fn domain_graph(&self) -> Option<&NamedGraph> {
        self.graphs.last()
    }

    /// Graph named `name`, if any.
    pub fn graph(&self, name: &str) -> Option<&NamedGraph> {
        self.graphs.iter().find(|g| g.name == name)
    }
}

/// Convert every table of `source` according to `config`.
///
/// The mapping is validated first. A non-lookup table in the database that
/// has no class mapping is a configuration error, and so is a column link to
/// a lookup table the database does not contain.
pub fn assemble<S: RelationalSource>(
    source: &S,
    config: &MappingConfig,
    minter: &mut NodeMinter,
) -> Result<Conversion> {
    config.validate()?;

    let (mut lookups, domain): (Vec<String>, Vec<String>) = source
        .table_names()?
        .into_iter()
        .partition(|name| config.is_lookup_table(name));
    lookups.sort();

    if let Some(unmapped) = domain.iter().find(|name| config.table(name).is_none()) {
        return Err(CoreError::UnmappedTable(unmapped.clone()).into());
    }
    for mapping in &config.tables {
        if let Some((column, lookup)) = mapping.links.iter().find(|(_, l)| !lookups.contains(*l)) {
            return Err(CoreError::MissingLookupTable {
                table: mapping.name.clone(),
                column: column.to_string(),
                lookup: lookup.to_string(),
            }
            .into());
        }
    }

    tracing::info!(
        lookup_tables = lookups.len(),
        domain_tables = domain.len(),
        "Tables partitioned"
    );

    // ── Vocabularies ──
    let vocab_namespace = config.vocab_namespace();
    let mut vocabulary = VocabularyMap::new();
    let mut graphs = Vec::with_capacity(lookups.len() + 1);

    for name in &lookups {
        let table = read(source, name)?;
        let graph = skosify(name, &table.rows, &vocab_namespace, minter, &mut vocabulary);
        graphs.push(NamedGraph::new(name.as_str(), graph));
    }

    // ── Domain ──
    let converter = EntityConverter::new(config, &vocabulary);
    let mut domain_graph = Graph::new();
    describe_dataset(config, &mut domain_graph);

    let main = read(source, &config.main_table)?;
    let references = converter.convert_main(&main, minter, &mut domain_graph)?;

    for mapping in config.secondary_tables() {
        let table = read(source, &mapping.name)?;
        let nodes = converter.convert_secondary(&table, minter, &mut domain_graph)?;
        let predicate = converter.predicate(&mapping.class);
        let linked = link_by_ordinal(&references, &predicate, &nodes, &mut domain_graph);

        tracing::info!(
            table = %mapping.name,
            rows = nodes.len(),
            linked,
            "Secondary table converted"
        );
    }

    let domain_name = config.dataset.graph_name();
    tracing::info!(
        graph = %domain_name,
        triples = domain_graph.len(),
        references = references.len(),
        "Domain graph assembled"
    );
    graphs.push(NamedGraph::new(domain_name, domain_graph));

    Ok(Conversion {
        graphs,
        references,
        vocabulary,
    })
}

fn read<S: RelationalSource>(source: &S, name: &str) -> Result<Table> {
    tracing::info!(table = name, "Converting {name}");
    let table = source.read_table(name)?;
    if table.columns.is_empty() {
        tracing::warn!(table = name, "Table is absent or has no columns");
    }
    Ok(table)
}
