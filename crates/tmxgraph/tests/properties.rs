//! Property tests: determinism, placeholders and entity identity

use proptest::prelude::*;
use tmxgraph::{entity_id, extract, run, ExtractConfig};

fn requirement_diagram(names: &[String], dangling: &str) -> String {
    let mut body = String::from(
        r#"<xmi:XMI xmlns:xmi="http://www.omg.org/XMI"><contents name="Reqs" stereotype="SysmlRequirementDiagram">"#,
    );
    for (i, name) in names.iter().enumerate() {
        body.push_str(&format!(
            r#"<nodes xmi:id="n{i}" stereotype="&lt;&lt;requirement&gt;&gt;" name="{name}"/>"#
        ));
    }
    for i in 1..names.len() {
        body.push_str(&format!(
            r#"<connections source="n{}" target="n{i}" stereotype="&lt;&lt;refine&gt;&gt;"/>"#,
            i - 1
        ));
    }
    body.push_str(&format!(r#"<connections source="{dangling}" target="n0"/>"#));
    body.push_str("</contents></xmi:XMI>");
    body
}

proptest! {
    #[test]
    fn prop_extraction_is_deterministic(
        names in prop::collection::vec("[A-Za-z][A-Za-z0-9 ]{0,12}", 1..8),
    ) {
        let input = requirement_diagram(&names, "missing");
        let first = extract(&input).unwrap().to_json_pretty().unwrap();
        let second = extract(&input).unwrap().to_json_pretty().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_one_triple_per_connection(
        names in prop::collection::vec("[A-Za-z][A-Za-z0-9]{0,12}", 1..8),
    ) {
        let input = requirement_diagram(&names, "missing");
        let extraction = run(&input, &ExtractConfig::default()).unwrap();
        prop_assert_eq!(extraction.triples.len(), names.len());
        for (i, triple) in extraction.triples.iter().take(names.len() - 1).enumerate() {
            prop_assert_eq!(&triple.subject, &names[i]);
            prop_assert_eq!(triple.relation.as_str(), "Refine");
            prop_assert_eq!(&triple.object, &names[i + 1]);
        }
    }

    #[test]
    fn prop_unresolved_ids_become_placeholders(id in "x[a-zA-Z0-9_-]{0,20}") {
        let names = vec!["Root".to_string()];
        let input = requirement_diagram(&names, &id);
        let extraction = run(&input, &ExtractConfig::default()).unwrap();
        let triple = extraction.triples.iter().last().unwrap();
        prop_assert_eq!(triple.subject.clone(), format!("unknown node (id: {id})"));
        prop_assert_eq!(triple.object.as_str(), "Root");
        prop_assert_eq!(extraction.report.unresolved_count(), 1);
    }

    #[test]
    fn prop_shared_names_share_entity_ids(name in "[A-Za-z][A-Za-z0-9]{0,16}") {
        let names = vec![name.clone(), name.clone()];
        let graph = extract(&requirement_diagram(&names, "missing")).unwrap();
        let record = &graph.triples[0];
        prop_assert_eq!(&record.head.id, &record.tail.id);
        prop_assert_eq!(record.head.id.clone(), entity_id(&name));
        prop_assert_eq!(graph.triples[1].tail.id.clone(), entity_id(&name));
    }

    #[test]
    fn prop_entity_id_is_hex_sha256(name in ".{0,40}") {
        let id = entity_id(&name);
        prop_assert_eq!(id.len(), 64);
        prop_assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        prop_assert_eq!(id, entity_id(&name));
    }
}
