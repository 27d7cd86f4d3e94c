use super::*;
use crate::core::{normalize_dimension, Dimension, PathSegment};

#[test]
fn test_parse_poi_with_optional_fields_missing() {
    let json = r#"[{"name":"Iron Shop","category":"shop","x":10,"y":64,"z":-5,"dimension":"overworld"}]"#;
    let pois = parse_pois(json).unwrap();

    assert_eq!(pois.len(), 1);
    assert_eq!(pois[0].name.as_deref(), Some("Iron Shop"));
    assert_eq!(pois[0].owner, None);
    assert_eq!(pois[0].notes, None);
    assert_eq!(
        normalize_dimension(pois[0].dimension.as_deref()),
        Dimension::Overworld
    );
}

#[test]
fn test_parse_poi_accepts_null_strings() {
    let json = r#"[{"name":null,"category":null,"x":0,"y":0,"z":0,"owner":null}]"#;
    let pois = parse_pois(json).unwrap();
    assert_eq!(pois[0].name, None);
    assert_eq!(pois[0].category, None);
    assert_eq!(pois[0].dimension, None);
}

#[test]
fn test_parse_poi_fails_without_coordinates() {
    let json = r#"[{"name":"Lost","y":64}]"#;
    let err = parse_pois(json).expect_err("Parser sollte fehlschlagen");
    assert!(err.to_string().contains("missing field"));
}

#[test]
fn test_parse_poi_fails_for_non_array_document() {
    assert!(parse_pois(r#"{"name":"x"}"#).is_err());
    assert!(parse_pois("").is_err());
}

#[test]
fn test_parse_paths_tolerates_non_numeric_endpoint() {
    let json = r#"[
        {"name":"Main Line","kind":"ice_rail","dimension":"nether","from":{"x":0,"z":0},"to":{"x":100,"z":0}},
        {"name":"Broken","kind":"ice_rail","dimension":"nether","from":{"x":0,"z":0},"to":{"x":"far","z":0}}
    ]"#;
    let paths = parse_paths(json).unwrap();
    assert_eq!(paths.len(), 2);

    let broken = PathSegment::from_record(&paths[1]);
    assert!(broken.plot_endpoints().is_none());
}

#[test]
fn test_parse_empty_documents() {
    assert!(parse_pois("[]").unwrap().is_empty());
    assert!(parse_paths("[]").unwrap().is_empty());
}
