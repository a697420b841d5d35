//! Integration tests for the GraphBuilder API
//!
//! These tests drive the public API with declarations documents shaped the
//! way the front end produces them.

use umlgraph::{
    GraphBuilder, GraphError,
    association::{AssociationKind, Multiplicity},
    config::{AppConfig, AssociationConfig, OutputConfig},
    identifier::Id,
};

const ZOO: &str = r#"{
  "files": [
    {
      "file_name": "src/animal.ts",
      "types": [
        {
          "kind": "Class",
          "id": "\"src/animal\".Animal",
          "name": "Animal",
          "properties": [
            { "name": "keeper", "declared_type": "Keeper", "referenced_type_ids": ["\"src/keeper\".Keeper"] },
            { "name": "name", "declared_type": "string" }
          ]
        },
        {
          "kind": "Class",
          "id": "\"src/animal\".Lion",
          "name": "Lion",
          "heritage_clauses": [
            {
              "source_id": "\"src/animal\".Lion", "source_name": "Lion",
              "target_id": "\"src/animal\".Animal", "target_name": "Animal",
              "kind": "Extends"
            }
          ],
          "properties": [
            { "name": "keeper", "declared_type": "Keeper", "referenced_type_ids": ["\"src/keeper\".Keeper"] },
            { "name": "mane", "declared_type": "Mane", "referenced_type_ids": ["\"src/animal\".Mane"] }
          ]
        },
        { "kind": "Enum", "id": "\"src/animal\".Mane", "name": "Mane", "items": ["Short", "Long"] }
      ]
    },
    {
      "file_name": "src/keeper.ts",
      "types": [
        {
          "kind": "Class",
          "id": "\"src/keeper\".Keeper",
          "name": "Keeper",
          "properties": [
            { "name": "animals", "declared_type": "Animal[]", "referenced_type_ids": ["\"src/animal\".Animal"] }
          ],
          "methods": [
            { "name": "favorite", "return_type": "Lion | undefined", "referenced_type_ids": ["\"src/animal\".Lion"] },
            { "name": "feed", "return_type": "Promise<void>", "referenced_type_ids": ["Promise"] }
          ]
        }
      ]
    }
  ]
}"#;

#[test]
fn test_builder_api_exists() {
    let _builder = GraphBuilder::default();
}

#[test]
fn test_parse_document() {
    let builder = GraphBuilder::default();
    let files = builder.parse(ZOO).expect("Failed to parse document");

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].file_name(), "src/animal.ts");
    assert_eq!(files[0].types().len(), 3);
}

#[test]
fn test_parse_invalid_document_returns_error() {
    let builder = GraphBuilder::default();
    let result = builder.parse("{ \"files\": [ { \"types\": 3 } ] }");

    match result {
        Err(GraphError::Input { src, .. }) => assert!(src.contains("types")),
        other => panic!("Expected input error, got {other:?}"),
    }
}

#[test]
fn test_build_zoo() {
    let builder = GraphBuilder::default();
    let mut files = builder.parse(ZOO).expect("Failed to parse document");

    let summary = builder.build(&mut files);

    // Animal-Keeper, Lion-Keeper, Lion-Mane, Keeper-Lion (merged into Lion-Keeper)
    assert_eq!(summary.types(), 4);
    assert_eq!(summary.edges(), 3);
    assert_eq!(summary.inherited(), 1);
    assert_eq!(summary.emitted(), 2);

    let animal_file = files[0].member_associations();
    assert_eq!(animal_file.len(), 2);

    let animal_keeper = &animal_file[0];
    assert_eq!(animal_keeper.a().type_id(), Id::new("\"src/animal\".Animal"));
    assert_eq!(animal_keeper.b().name(), "Keeper");
    assert_eq!(animal_keeper.kind(), AssociationKind::Association);
    assert_eq!(animal_keeper.a().multiplicity(), Some(Multiplicity::ZeroOrMany));
    assert_eq!(animal_keeper.b().multiplicity(), None);

    // Lion's keeper is inherited from Animal; only the mane survives.
    let lion_mane = &animal_file[1];
    assert_eq!(lion_mane.a().name(), "Lion");
    assert_eq!(lion_mane.b().name(), "Mane");

    // Keeper only merged into edges created by the animal file.
    assert!(files[1].member_associations().is_empty());
}

#[test]
fn test_build_with_associations_disabled() {
    let config = AppConfig::new(AssociationConfig::new(false), OutputConfig::default());
    let builder = GraphBuilder::new(config);
    let mut files = builder.parse(ZOO).expect("Failed to parse document");

    let summary = builder.build(&mut files);

    assert_eq!(summary.emitted(), 0);
    assert!(files.iter().all(|f| f.member_associations().is_empty()));
}

#[test]
fn test_render_json_round_trip_shape() {
    let builder = GraphBuilder::new(AppConfig::new(
        AssociationConfig::default(),
        OutputConfig::new(false),
    ));
    let mut files = builder.parse(ZOO).expect("Failed to parse document");
    builder.build(&mut files);

    let json = builder.render_json(&files).expect("Failed to render");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(!json.contains('\n'));
    let associations = value["files"][0]["member_associations"].as_array().unwrap();
    assert_eq!(associations.len(), 2);
    assert_eq!(associations[0]["a"]["multiplicity"], "0..*");
    assert_eq!(associations[0]["kind"], "Association");

    // The rendered document can be read back as input.
    let reparsed = builder.parse(&json).expect("Rendered output should parse");
    assert_eq!(reparsed, files);
}

#[test]
fn test_builder_reusability() {
    let builder = GraphBuilder::default();

    let mut first = builder.parse(ZOO).expect("Failed to parse first");
    let mut second = builder.parse(ZOO).expect("Failed to parse second");

    builder.build(&mut first);
    builder.build(&mut second);

    assert_eq!(first, second);
}
