//! End-to-end conversion of SQLite databases built on disk.

use std::path::Path;

use rusqlite::Connection;
use sqlrdf_convert::{assemble, persist, ConvertError, NodeMinter};
use sqlrdf_core::vocab::{rdf, rdfs, skos, xsd};
use sqlrdf_core::{
    integer_literal, string_literal, CoreError, Graph, Literal, MappingConfig, NamedNode,
    NamedNodeRef, Subject, TableMapping, Term,
};
use sqlrdf_serialize::{GraphWriter, RdfFormat};
use sqlrdf_source::SqliteSource;

const NS: &str = "http://rdf.example.org/";

fn create_db(path: &Path, sql: &str) -> SqliteSource {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(sql).unwrap();
    drop(conn);
    SqliteSource::open(path).unwrap()
}

fn churches_db(dir: &Path) -> SqliteSource {
    create_db(
        &dir.join("kerken.sqlite"),
        r#"
        CREATE TABLE "01_Hoofdtabel_Kerken" (ID INTEGER, naam TEXT, stijl TEXT, bouwjaar INTEGER);
        INSERT INTO "01_Hoofdtabel_Kerken" VALUES (1, 'Sint-Jan', 'Gotisch', 1880);
        INSERT INTO "01_Hoofdtabel_Kerken" VALUES (2, 'Onze Lieve Vrouwe', 'Onbekend', NULL);

        CREATE TABLE "013_Architect" (naam TEXT);
        INSERT INTO "013_Architect" VALUES ('Cuypers');
        INSERT INTO "013_Architect" VALUES ('Kropholler');

        CREATE TABLE "Lookup_Stijl" (stijl TEXT);
        INSERT INTO "Lookup_Stijl" VALUES ('gotisch');
        INSERT INTO "Lookup_Stijl" VALUES ('neoromaans');
        "#,
    )
}

fn iri(value: impl Into<String>) -> NamedNode {
    NamedNode::new_unchecked(value)
}

fn objects(graph: &Graph, node: &NamedNode, predicate: &str) -> Vec<Term> {
    graph
        .objects(node, NamedNodeRef::new_unchecked(predicate))
        .cloned()
        .collect()
}

fn count_predicate(graph: &Graph, predicate: &str) -> usize {
    graph
        .iter()
        .filter(|t| t.predicate.as_str() == predicate)
        .count()
}

fn linked_node(term: &Term) -> &NamedNode {
    match term {
        Term::NamedNode(node) => node,
        other => panic!("expected a node, got {other}"),
    }
}

#[test]
fn test_lookup_values_become_concept_references() {
    let dir = tempfile::tempdir().unwrap();
    let source = churches_db(dir.path());
    let mut minter = NodeMinter::sequential();
    let conversion = assemble(&source, &MappingConfig::default(), &mut minter).unwrap();
    let domain = &conversion.domain_graph().unwrap().graph;

    let stijl = format!("{NS}stijl");
    let gotisch = conversion.vocabulary.resolve("Lookup_Stijl", "GOTISCH").unwrap();
    assert_eq!(
        objects(domain, &conversion.references[&1], &stijl),
        vec![Term::NamedNode(gotisch.clone())]
    );
    assert_eq!(
        objects(domain, &conversion.references[&2], &stijl),
        vec![Term::Literal(string_literal("Onbekend"))]
    );

    // The concept itself lives in the vocabulary graph, not the domain graph.
    let vocab = &conversion.graph("Lookup_Stijl").unwrap().graph;
    assert!(vocab
        .objects(gotisch, rdf::TYPE)
        .any(|o| o == &Term::NamedNode(skos::CONCEPT.into_owned())));
    assert!(gotisch.as_str().starts_with("http://rdf.example.org/vocab/"));
}

#[test]
fn test_secondary_rows_link_from_matching_main_rows() {
    let dir = tempfile::tempdir().unwrap();
    let source = churches_db(dir.path());
    let mut minter = NodeMinter::sequential();
    let conversion = assemble(&source, &MappingConfig::default(), &mut minter).unwrap();
    let domain = &conversion.domain_graph().unwrap().graph;

    let architect = format!("{NS}architect");
    for (id, name) in [(1, "Cuypers"), (2, "Kropholler")] {
        let linked = objects(domain, &conversion.references[&id], &architect);
        assert_eq!(linked.len(), 1, "main row {id} must link one architect");
        let node = linked_node(&linked[0]);
        assert_eq!(
            objects(domain, node, &format!("{NS}naam")),
            vec![Term::Literal(string_literal(name))]
        );
    }
}

#[test]
fn test_main_table_without_id_column_yields_no_entities() {
    let dir = tempfile::tempdir().unwrap();
    let source = create_db(
        &dir.path().join("zonder_id.sqlite"),
        r#"
        CREATE TABLE "01_Hoofdtabel_Kerken" (naam TEXT);
        INSERT INTO "01_Hoofdtabel_Kerken" VALUES ('Sint-Jan');
        CREATE TABLE "013_Architect" (naam TEXT);
        INSERT INTO "013_Architect" VALUES ('Cuypers');
        CREATE TABLE "Lookup_Stijl" (stijl TEXT);
        "#,
    );
    let mut minter = NodeMinter::sequential();
    let conversion = assemble(&source, &MappingConfig::default(), &mut minter).unwrap();
    let domain = &conversion.domain_graph().unwrap().graph;

    assert!(conversion.references.is_empty());
    let kerk = Term::NamedNode(iri(format!("{NS}Kerk")));
    assert_eq!(domain.subjects(rdf::TYPE, &kerk).count(), 0);
    // The architect is converted, just not linked.
    let architect = Term::NamedNode(iri(format!("{NS}Architect")));
    assert_eq!(domain.subjects(rdf::TYPE, &architect).count(), 1);
    assert_eq!(count_predicate(domain, &format!("{NS}architect")), 0);
}

#[test]
fn test_null_integers_produce_no_statement() {
    let dir = tempfile::tempdir().unwrap();
    let source = churches_db(dir.path());
    let mut minter = NodeMinter::sequential();
    let conversion = assemble(&source, &MappingConfig::default(), &mut minter).unwrap();
    let domain = &conversion.domain_graph().unwrap().graph;

    let bouwjaar = format!("{NS}bouwjaar");
    assert_eq!(
        objects(domain, &conversion.references[&1], &bouwjaar),
        vec![Term::Literal(integer_literal(1880))]
    );
    assert!(objects(domain, &conversion.references[&2], &bouwjaar).is_empty());

    // ID, naam, stijl for row 2 plus type and label.
    let row2 = Subject::NamedNode(conversion.references[&2].clone());
    assert_eq!(domain.iter().filter(|t| t.subject == row2).count(), 5);
    let id = objects(domain, &conversion.references[&2], &format!("{NS}id"));
    assert_eq!(
        id,
        vec![Term::Literal(Literal::new_typed_literal("2", xsd::INTEGER))]
    );
}

#[test]
fn test_ordinal_linking_skips_missing_identifiers() {
    let dir = tempfile::tempdir().unwrap();
    let source = create_db(
        &dir.path().join("gaten.sqlite"),
        r#"
        CREATE TABLE "01_Hoofdtabel_Kerken" (ID INTEGER);
        INSERT INTO "01_Hoofdtabel_Kerken" VALUES (1);
        INSERT INTO "01_Hoofdtabel_Kerken" VALUES (3);
        CREATE TABLE "014_Bronnen" (titel TEXT);
        INSERT INTO "014_Bronnen" VALUES ('a');
        INSERT INTO "014_Bronnen" VALUES ('b');
        INSERT INTO "014_Bronnen" VALUES ('c');
        CREATE TABLE "Lookup_Stijl" (stijl TEXT);
        "#,
    );
    let mut minter = NodeMinter::sequential();
    let conversion = assemble(&source, &MappingConfig::default(), &mut minter).unwrap();
    let domain = &conversion.domain_graph().unwrap().graph;

    let bron = format!("{NS}bron");
    assert_eq!(count_predicate(domain, &bron), 2);

    let third = objects(domain, &conversion.references[&3], &bron);
    assert_eq!(
        objects(domain, linked_node(&third[0]), rdfs::LABEL.as_str()),
        vec![Term::Literal(string_literal("Bron 3"))]
    );
}

#[test]
fn test_real_identifiers_are_not_truncated_into_links() {
    let dir = tempfile::tempdir().unwrap();
    let source = create_db(
        &dir.path().join("reeel.sqlite"),
        r#"
        CREATE TABLE "01_Hoofdtabel_Kerken" (ID REAL);
        INSERT INTO "01_Hoofdtabel_Kerken" VALUES (1.5);
        INSERT INTO "01_Hoofdtabel_Kerken" VALUES (2.9);
        CREATE TABLE "013_Architect" (naam TEXT);
        INSERT INTO "013_Architect" VALUES ('Cuypers');
        INSERT INTO "013_Architect" VALUES ('Kropholler');
        CREATE TABLE "Lookup_Stijl" (stijl TEXT);
        "#,
    );
    let mut minter = NodeMinter::sequential();
    let conversion = assemble(&source, &MappingConfig::default(), &mut minter).unwrap();
    let domain = &conversion.domain_graph().unwrap().graph;

    assert!(conversion.references.is_empty());
    assert_eq!(count_predicate(domain, &format!("{NS}architect")), 0);
    let kerk = Term::NamedNode(iri(format!("{NS}Kerk")));
    assert_eq!(domain.subjects(rdf::TYPE, &kerk).count(), 2);
}

#[test]
fn test_sequential_minting_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let source = churches_db(dir.path());
    let config = MappingConfig::default();
    let writer = GraphWriter::new(RdfFormat::NTriples, NS);

    let render = || {
        let mut minter = NodeMinter::sequential();
        let conversion = assemble(&source, &config, &mut minter).unwrap();
        conversion
            .graphs
            .iter()
            .map(|g| writer.render(g).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(render(), render());
}

#[test]
fn test_every_format_writes_one_file_per_graph() {
    let dir = tempfile::tempdir().unwrap();
    let source = churches_db(dir.path());
    let config = MappingConfig::default();
    let mut minter = NodeMinter::default();
    let conversion = assemble(&source, &config, &mut minter).unwrap();

    for format in RdfFormat::ALL {
        let out = dir.path().join(format.name());
        let writer = GraphWriter::new(format, &config.namespace);
        let paths = persist::write_graphs(&writer, &out, &conversion.graphs).unwrap();

        assert_eq!(
            paths,
            vec![
                out.join(format!("Lookup_Stijl{}", format.extension())),
                out.join(format!("Kerken_op_de_kaart{}", format.extension())),
            ]
        );
        for path in &paths {
            let text = std::fs::read_to_string(path).unwrap();
            assert!(!text.is_empty(), "{} is empty", path.display());
        }
    }
}

#[test]
fn test_unmapped_domain_table_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let source = create_db(
        &dir.path().join("extra.sqlite"),
        r#"
        CREATE TABLE "01_Hoofdtabel_Kerken" (ID INTEGER);
        CREATE TABLE "02_Klokken" (ID INTEGER);
        CREATE TABLE "Lookup_Stijl" (stijl TEXT);
        "#,
    );
    let mut minter = NodeMinter::sequential();
    let err = assemble(&source, &MappingConfig::default(), &mut minter).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Mapping(CoreError::UnmappedTable(ref name)) if name == "02_Klokken"
    ));
}

#[test]
fn test_misspelled_lookup_link_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let source = churches_db(dir.path());
    let mut config = MappingConfig::default();
    config.tables[0] =
        TableMapping::new("01_Hoofdtabel_Kerken", "Kerk").with_link("stijl", "Lookup_Stil");

    let mut minter = NodeMinter::sequential();
    let err = assemble(&source, &config, &mut minter).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Mapping(CoreError::MissingLookupTable { ref column, ref lookup, .. })
            if column == "stijl" && lookup == "Lookup_Stil"
    ));
}

#[test]
fn test_custom_mapping_from_scratch() {
    let dir = tempfile::tempdir().unwrap();
    let source = create_db(
        &dir.path().join("people.sqlite"),
        r#"
        CREATE TABLE people (ID INTEGER, country TEXT);
        INSERT INTO people VALUES (10, 'nl');
        CREATE TABLE Lookup_Country (name TEXT);
        INSERT INTO Lookup_Country VALUES ('NL');
        "#,
    );
    let config = MappingConfig {
        namespace: "http://data.example.com/".to_string(),
        main_table: "people".to_string(),
        tables: vec![TableMapping::new("people", "Person").with_link("Country", "Lookup_Country")],
        ..MappingConfig::default()
    };

    let mut minter = NodeMinter::sequential();
    let conversion = assemble(&source, &config, &mut minter).unwrap();
    let domain = &conversion.domain_graph().unwrap().graph;

    let person = &conversion.references[&10];
    assert!(person.as_str().starts_with("http://data.example.com/"));
    let country = objects(domain, person, "http://data.example.com/country");
    assert_eq!(
        linked_node(&country[0]).as_str(),
        "http://data.example.com/vocab/n1"
    );
}
