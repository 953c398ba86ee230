#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use rdf_protocol::params::{DEFAULT_GRAPH_URI, NAMED_GRAPH_URI, USING_GRAPH_URI};
use rdf_protocol::{
    effective_dataset, resolve_from_query, resolve_from_request, resolve_from_update,
    resolve_from_update_request, DatasetDescription, EffectiveDataset, ParseFailure, Query,
    RequestDataset, Update,
};
use std::collections::HashMap;
use std::error::Error;

const QUERY_WITH_DATASET: &str = r#"
PREFIX ex: <http://example.com/>
SELECT ?s
FROM <http://example.com/g1>
FROM <http://example.com/g2>
FROM NAMED <http://example.com/n1>
WHERE { ?s ?p ?o }
"#;

fn request(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[test]
fn test_query_without_dataset_clauses() -> Result<(), Box<dyn Error>> {
    let query = Query::parse("SELECT * WHERE { ?s ?p ?o }", None)?;
    let description = resolve_from_query(&query);
    assert!(description.is_empty());
    assert_eq!(description, DatasetDescription::default());
    assert_ne!(
        RequestDataset::Described(description),
        resolve_from_request(&request(&[]))
    );
    Ok(())
}

#[test]
fn test_query_with_dataset_clauses() -> Result<(), Box<dyn Error>> {
    let query = Query::parse(QUERY_WITH_DATASET, None)?;
    let description = resolve_from_query(&query);
    assert_eq!(
        description.default_graph_uris(),
        ["http://example.com/g1", "http://example.com/g2"]
    );
    assert_eq!(description.named_graph_uris(), ["http://example.com/n1"]);
    Ok(())
}

#[test]
fn test_ask_and_construct_queries() -> Result<(), Box<dyn Error>> {
    let ask = Query::parse("ASK FROM NAMED <http://example.com/n> { }", None)?;
    assert_eq!(
        resolve_from_query(&ask).named_graph_uris(),
        ["http://example.com/n"]
    );

    let construct = Query::parse(
        "CONSTRUCT { ?s ?p ?o } FROM <http://example.com/g> WHERE { ?s ?p ?o }",
        None,
    )?;
    assert_eq!(
        resolve_from_query(&construct).default_graph_uris(),
        ["http://example.com/g"]
    );
    Ok(())
}

#[test]
fn test_request_parameters_supersede_query_clauses() -> Result<(), Box<dyn Error>> {
    let query = Query::parse(QUERY_WITH_DATASET, None)?;
    let params = request(&[(NAMED_GRAPH_URI, "http://example.com/request")]);

    let dataset = effective_dataset(resolve_from_request(&params), resolve_from_query(&query));

    assert_eq!(
        dataset,
        EffectiveDataset::Request(DatasetDescription::new(
            Vec::new(),
            vec!["http://example.com/request".to_owned()]
        ))
    );
    Ok(())
}

#[test]
fn test_blank_parameters_fall_back_to_query_clauses() -> Result<(), Box<dyn Error>> {
    let query = Query::parse(QUERY_WITH_DATASET, None)?;
    let params = request(&[(DEFAULT_GRAPH_URI, ""), (NAMED_GRAPH_URI, "")]);

    let dataset = effective_dataset(resolve_from_request(&params), resolve_from_query(&query));

    assert_eq!(dataset, EffectiveDataset::Query(resolve_from_query(&query)));
    Ok(())
}

#[test]
fn test_map_parameters() {
    let mut params = HashMap::new();
    params.insert(
        DEFAULT_GRAPH_URI.to_owned(),
        vec![
            "http://g1".to_owned(),
            String::new(),
            "http://g2".to_owned(),
        ],
    );

    let RequestDataset::Described(description) = resolve_from_request(&params) else {
        panic!("expected a dataset description");
    };
    assert_eq!(description.default_graph_uris(), ["http://g1", "http://g2"]);
    assert!(description.named_graph_uris().is_empty());
}

#[test]
fn test_update_using_clauses() -> Result<(), Box<dyn Error>> {
    let update = Update::parse(
        "DELETE { ?s ?p ?o } USING <http://example.com/g> USING NAMED <http://example.com/n> WHERE { ?s ?p ?o }",
        None,
    )?;
    assert_eq!(
        resolve_from_update(&update),
        [DatasetDescription::new(
            vec!["http://example.com/g".to_owned()],
            vec!["http://example.com/n".to_owned()]
        )]
    );
    Ok(())
}

#[test]
fn test_update_with_clause_selects_default_graph() -> Result<(), Box<dyn Error>> {
    let update = Update::parse(
        "WITH <http://example.com/w> DELETE { ?s ?p ?o } WHERE { ?s ?p ?o }",
        None,
    )?;
    assert_eq!(
        resolve_from_update(&update),
        [DatasetDescription::new(
            vec!["http://example.com/w".to_owned()],
            Vec::new()
        )]
    );
    Ok(())
}

#[test]
fn test_update_using_clauses_stay_with_their_operation() -> Result<(), Box<dyn Error>> {
    let update = Update::parse(
        r#"
        INSERT DATA { <http://example.com/s> <http://example.com/p> <http://example.com/o> } ;
        DELETE { ?s ?p ?o } USING <http://example.com/g> WHERE { ?s ?p ?o } ;
        DELETE { ?s ?p ?o } USING <http://example.com/h> WHERE { ?s ?p ?o }
        "#,
        None,
    )?;
    assert_eq!(
        resolve_from_update(&update),
        [
            DatasetDescription::default(),
            DatasetDescription::new(vec!["http://example.com/g".to_owned()], Vec::new()),
            DatasetDescription::new(vec!["http://example.com/h".to_owned()], Vec::new()),
        ]
    );
    Ok(())
}

#[test]
fn test_update_without_using_clauses() -> Result<(), Box<dyn Error>> {
    let update = Update::parse(
        "INSERT DATA { <http://example.com/s> <http://example.com/p> <http://example.com/o> }",
        None,
    )?;
    assert_eq!(resolve_from_update(&update), [DatasetDescription::default()]);

    let params = request(&[(USING_GRAPH_URI, "http://example.com/g")]);
    assert!(!resolve_from_update_request(&params).is_unspecified());
    Ok(())
}

#[test]
fn test_syntax_error_message() {
    let Err(error) = Query::parse("SELECT * WHERE { ?s ?p ", None) else {
        panic!("the query must be invalid");
    };
    let expected = error.to_string();

    let failure = ParseFailure::from(error);

    assert_eq!(failure.message_for(), Some(expected.as_str()));
    assert_eq!(failure.cause(), None);
}

#[test]
fn test_invalid_base_iri_is_the_cause() {
    let Err(error) = Query::parse("SELECT * WHERE { ?s ?p ?o }", Some("not an iri")) else {
        panic!("the base IRI must be invalid");
    };

    let failure = ParseFailure::from(error);

    assert_eq!(
        failure.cause().map(|cause| cause.type_name()),
        Some("IriParseError")
    );
    assert!(failure.message_for().is_some_and(|message| !message.is_empty()));
}
