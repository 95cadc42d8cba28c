//! Fatal and non-fatal conditions across a run

use tmxgraph::{run, Document, ExtractConfig, ExtractError};

fn wrap(body: &str) -> String {
    format!(
        r#"<xmi:XMI xmlns:xmi="http://www.omg.org/XMI" xmlns:trufun="http://www.trufun.net">{body}</xmi:XMI>"#
    )
}

fn fatal(input: &str) -> bool {
    match run(input, &ExtractConfig::default()) {
        Ok(_) => false,
        Err(err) => matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::MalformedDocument { .. })
        ),
    }
}

#[test]
fn test_malformed_documents_abort() {
    assert!(fatal(""));
    assert!(fatal("not xml at all"));
    assert!(fatal("<a><b></a>"));
    assert!(fatal("<a>"));
    assert!(fatal(r#"<a x="1" x="2"/>"#));
    assert!(fatal("<a/><b/>"));
    assert!(fatal("<a/>junk"));
    assert!(fatal("junk<a/>"));
    assert!(fatal(&format!("{}trailing", wrap(""))));
    assert!(!fatal(&format!("<?xml version=\"1.0\"?>\n{}\n", wrap(""))));
}

#[test]
fn test_malformed_error_reports_position() {
    let err = Document::parse("<root>\n  <open>\n</root>").unwrap_err();
    assert!(err.is_fatal());
    assert!(err.to_string().starts_with("Malformed document"));
}

#[test]
fn test_non_fatal_diagnostics() {
    let diagnostics = [
        ExtractError::unresolved("d", "x"),
        ExtractError::unrecognized_node("d", "n", "TWidget"),
        ExtractError::MissingInteraction { diagram: "s".into() },
        ExtractError::DepthLimitExceeded {
            diagram: "d".into(),
            limit: 3,
        },
    ];
    assert!(diagnostics.iter().all(|d| !d.is_fatal()));
}

#[test]
fn test_unrecognized_container_is_skipped_not_fatal() {
    let input = wrap(
        r#"<contents xmi:id="g" name="Plan" xmi:type="trufun:TGanttDiagram">
            <nodes xmi:id="a" name="A"/>
            <nodes xmi:id="b" name="B"/>
            <connections source="a" target="b"/>
        </contents>
        <contents name="Uses" xmi:type="trufun:TUseCaseDiagram">
            <nodes xmi:id="u" xmi:type="trufun:TUseCaseNode" name="Drive"/>
            <nodes xmi:id="p" xmi:type="trufun:TActorNode" name="Driver"/>
            <connections source="p" target="u" xmi:type="trufun:TAssociationConnection"/>
        </contents>"#,
    );
    let extraction = run(&input, &ExtractConfig::default()).unwrap();
    assert_eq!(extraction.triples.len(), 1);
    assert_eq!(extraction.report.skipped.len(), 1);
    assert_eq!(extraction.report.skipped[0].name, "Plan");
    assert_eq!(
        extraction
            .report
            .count_where(|d| matches!(d, ExtractError::UnrecognizedDiagramKind { .. })),
        1
    );
}

#[test]
fn test_unknown_node_type_falls_back_to_generic_name() {
    let input = wrap(
        r#"<contents name="Uses" xmi:type="trufun:TUseCaseDiagram">
            <nodes xmi:id="u" xmi:type="trufun:TUseCaseNode" name="Drive"/>
            <nodes xmi:id="w" xmi:type="trufun:TWidgetNode" name="Dial"/>
            <connections source="w" target="u" xmi:type="trufun:TDependencyConnection"/>
        </contents>"#,
    );
    let extraction = run(&input, &ExtractConfig::default()).unwrap();
    let triple = &extraction.triples.as_slice()[0];
    assert!(triple.subject.starts_with("other node ("));
    assert!(triple.subject.contains("Dial"));
    assert_eq!(triple.relation, "Dependency");
    assert_eq!(triple.object, "Drive");
    assert_eq!(
        extraction
            .report
            .count_where(|d| matches!(d, ExtractError::UnrecognizedNodeType { id, .. } if id == "w")),
        1
    );
}

#[test]
fn test_sequence_without_interaction_is_skipped() {
    let input = wrap(
        r#"<contents name="Loose" xmi:type="trufun:TSequenceDiagram">
            <nodes xmi:id="l" xmi:type="trufun:TLifelineNode_SD" name="a"/>
            <connections source="l" target="l" xmi:type="trufun:TMessageConnection_SD"/>
        </contents>"#,
    );
    let extraction = run(&input, &ExtractConfig::default()).unwrap();
    assert!(extraction.triples.is_empty());
    assert!(extraction.report.diagrams.is_empty());
    assert_eq!(extraction.report.skipped[0].name, "Loose");
}

#[test]
fn test_depth_limit_keeps_connections() {
    let input = wrap(
        r#"<contents name="Deep" xmi:type="trufun:TStateMachineDiagram">
            <nodes xmi:id="a" xmi:type="trufun:TCompositeStateNode" name="A">
                <nodes xmi:id="r" xmi:type="trufun:TRegionNode">
                    <nodes xmi:id="b" xmi:type="trufun:TCompositeStateNode" name="B"/>
                </nodes>
            </nodes>
            <connections source="a" target="b"/>
        </contents>"#,
    );
    let config = ExtractConfig::default().with_max_depth(2);
    let extraction = run(&input, &config).unwrap();
    let triple = &extraction.triples.as_slice()[0];
    assert_eq!(triple.subject, "A");
    assert_eq!(triple.object, "unknown node (id: b)");
    assert_eq!(
        extraction
            .report
            .count_where(|d| matches!(d, ExtractError::DepthLimitExceeded { limit: 2, .. })),
        1
    );
}

#[test]
fn test_very_deep_nesting_does_not_overflow() {
    let depth = 1000;
    let mut body = String::from(r#"<contents name="Deep" xmi:type="trufun:TStateMachineDiagram">"#);
    for i in 0..depth {
        body.push_str(&format!(
            r#"<nodes xmi:id="s{i}" xmi:type="trufun:TCompositeStateNode" name="S{i}">"#
        ));
    }
    body.push_str(&"</nodes>".repeat(depth));
    body.push_str(r#"<connections source="s0" target="s1"/></contents>"#);

    let extraction = run(&wrap(&body), &ExtractConfig::default()).unwrap();
    let triple = &extraction.triples.as_slice()[0];
    assert_eq!((triple.subject.as_str(), triple.object.as_str()), ("S0", "S1"));
}

#[test]
fn test_connections_without_both_endpoints_are_ignored() {
    let input = wrap(
        r#"<contents name="Uses" xmi:type="trufun:TUseCaseDiagram">
            <nodes xmi:id="u" xmi:type="trufun:TUseCaseNode" name="Drive"/>
            <connections source="u"/>
            <connections target="u"/>
        </contents>"#,
    );
    let extraction = run(&input, &ExtractConfig::default()).unwrap();
    assert!(extraction.triples.is_empty());
}

#[test]
fn test_nested_namespace_declarations_are_honored() {
    let input = r#"<root xmlns:xmi="http://www.omg.org/XMI">
        <wrapper xmlns:sm="http://www.trufun.net">
            <contents name="States" xmi:type="sm:TStateMachineDiagram">
                <nodes xmi:id="i" xmi:type="sm:TInitialStateNode"/>
                <nodes xmi:id="f" xmi:type="sm:TFinalStateNode"/>
                <connections source="i" target="f"/>
            </contents>
        </wrapper>
    </root>"#;
    let document = Document::parse(input).unwrap();
    assert_eq!(document.namespaces.get("sm"), Some("http://www.trufun.net"));

    let extraction = run(input, &ExtractConfig::default()).unwrap();
    let triple = &extraction.triples.as_slice()[0];
    assert_eq!(
        (triple.subject.as_str(), triple.relation.as_str(), triple.object.as_str()),
        ("initial state", "Transition", "final state")
    );
}

#[test]
fn test_redeclared_xmi_prefix_keeps_endpoint_names() {
    let input = r#"<xmi:XMI xmlns:xmi="http://www.omg.org/XMI">
        <contents xmi:id="d" name="Reqs" stereotype="SysmlRequirementDiagram">
            <nodes xmi:id="r1" name="R1" stereotype="&lt;&lt;requirement&gt;&gt;"/>
            <nodes xmi:id="r2" name="R2" stereotype="&lt;&lt;requirement&gt;&gt;"/>
            <connections source="r1" target="r2" stereotype="&lt;&lt;derive&gt;&gt;"/>
        </contents>
        <extension xmlns:xmi="http://www.omg.org/spec/XMI/20131001"/>
    </xmi:XMI>"#;
    let extraction = run(input, &ExtractConfig::default()).unwrap();
    let rendered: Vec<String> = extraction
        .triples
        .as_slice()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered, vec!["(R1, Derive, R2)"]);
    assert!(!extraction.report.has_diagnostics());
}

#[test]
fn test_unnamed_recognized_node_is_not_reported_as_unrecognized() {
    let input = wrap(
        r#"<contents name="C" xmi:type="trufun:TClassDiagram">
            <nodes xmi:id="c" xmi:type="trufun:TClassNode"/>
            <nodes xmi:id="d" xmi:type="trufun:TClassNode" name="D"/>
            <connections source="c" target="d" xmi:type="trufun:TGeneralizeConnection"/>
        </contents>"#,
    );
    let extraction = run(&input, &ExtractConfig::default()).unwrap();
    let triple = &extraction.triples.as_slice()[0];
    assert_eq!(triple.subject, "class (c)");
    assert_eq!(triple.object, "D");
    assert_eq!(
        extraction
            .report
            .count_where(|d| matches!(d, ExtractError::UnrecognizedNodeType { .. })),
        0
    );
}
