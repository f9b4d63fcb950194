//! TriX writer on top of quick-xml. The rio formatters do not cover TriX.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use sqlrdf_core::{Graph, NamedNode, Subject, Term};

use crate::error::{xml_error, Result};

const TRIX_NS: &str = "http://www.w3.org/2004/03/trix/trix-1/";

/// Write `graph` as a single-graph TriX document named `graph_iri`.
pub fn write<W: Write>(graph: &Graph, graph_iri: &NamedNode, out: &mut W) -> Result<()> {
    let mut writer = Writer::new_with_indent(&mut *out, b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(xml_error)?;

    let mut root = BytesStart::new("TriX");
    root.push_attribute(("xmlns", TRIX_NS));
    writer.write_event(Event::Start(root)).map_err(xml_error)?;
    writer
        .write_event(Event::Start(BytesStart::new("graph")))
        .map_err(xml_error)?;
    text_element(&mut writer, BytesStart::new("uri"), graph_iri.as_str())?;

    for triple in graph.iter() {
        writer
            .write_event(Event::Start(BytesStart::new("triple")))
            .map_err(xml_error)?;
        match &triple.subject {
            Subject::NamedNode(node) => {
                text_element(&mut writer, BytesStart::new("uri"), node.as_str())?
            }
            Subject::BlankNode(node) => {
                text_element(&mut writer, BytesStart::new("id"), node.as_str())?
            }
        }
        text_element(&mut writer, BytesStart::new("uri"), triple.predicate.as_str())?;
        write_object(&mut writer, &triple.object)?;
        writer
            .write_event(Event::End(BytesEnd::new("triple")))
            .map_err(xml_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("graph")))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("TriX")))
        .map_err(xml_error)?;
    writer.into_inner().write_all(b"\n")?;
    Ok(())
}

fn write_object<W: Write>(writer: &mut Writer<W>, object: &Term) -> Result<()> {
    match object {
        Term::NamedNode(node) => text_element(writer, BytesStart::new("uri"), node.as_str()),
        Term::BlankNode(node) => text_element(writer, BytesStart::new("id"), node.as_str()),
        Term::Literal(lit) => {
            let start = match lit.language() {
                Some(language) => {
                    let mut start = BytesStart::new("plainLiteral");
                    start.push_attribute(("xml:lang", language));
                    start
                }
                None => {
                    let mut start = BytesStart::new("typedLiteral");
                    start.push_attribute(("datatype", lit.datatype().as_str()));
                    start
                }
            };
            text_element(writer, start, lit.value())
        }
    }
}

fn text_element<W: Write>(writer: &mut Writer<W>, start: BytesStart<'_>, text: &str) -> Result<()> {
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start)).map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    writer.write_event(Event::End(end)).map_err(xml_error)?;
    Ok(())
}
