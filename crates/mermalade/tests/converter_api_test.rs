//! Integration tests for the DiagramConverter API
//!
//! These tests verify that the public API works and is usable.

use mermalade::{
    DiagramConverter, DropReason, MermaladeError,
    config::{AppConfig, ConvertConfig},
};

#[test]
fn test_converter_api_exists() {
    // Just verify the API compiles and can be constructed
    let _converter = DiagramConverter::default();
}

#[test]
fn test_convert_simple_diagram() {
    let source = "@startuml\nclass \"User\" {\n    + ID int\n}\n@enduml";

    let converter = DiagramConverter::default();
    let result = converter.convert(source);
    assert!(
        result.is_ok(),
        "Should convert valid diagram: {:?}",
        result.err()
    );

    let mermaid = result.expect("checked above");
    assert!(mermaid.starts_with("classDiagram"));
    assert!(mermaid.contains("class User {"));
    assert!(mermaid.contains("+ID int"));
}

#[test]
fn test_converter_with_config() {
    let source = "@startuml\nclass \"User\" {\n}\n@enduml";
    let config = AppConfig::default();

    // Just verify the API works with config
    let converter = DiagramConverter::new(config);
    let _result = converter.convert(source);

    // If it compiles and doesn't panic, the API works
}

#[test]
fn test_permissive_mode_never_fails() {
    // A three-way association cannot be expressed in Mermaid
    let source = "@startuml\n\"A\" -- \"B\" -- \"C\"\n@enduml";

    let converter = DiagramConverter::default();
    let result = converter.convert(source);
    assert!(result.is_ok(), "Permissive mode should skip bad lines");
}

#[test]
fn test_strict_mode_surfaces_dropped_lines() {
    let source = "@startuml\n\"A\" -- \"B\" -- \"C\"\n@enduml";

    let config = AppConfig::new(ConvertConfig::new(true));
    let converter = DiagramConverter::new(config);
    let result = converter.convert(source);

    match result {
        Err(MermaladeError::Strict { dropped }) => {
            assert_eq!(dropped.len(), 1);
            assert_eq!(dropped[0].reason(), DropReason::MalformedSides);
        }
        other => panic!("Expected strict error, got {other:?}"),
    }
}

#[test]
fn test_strict_mode_passes_clean_input() {
    let source = "@startuml\nclass \"A\" {\n}\nclass \"B\" {\n}\n\"A\" <|-- \"B\"\n@enduml";

    let config = AppConfig::new(ConvertConfig::new(true));
    let converter = DiagramConverter::new(config);
    let result = converter.convert(source);

    assert!(result.is_ok(), "Clean input should pass strict mode");
    assert!(result.expect("checked above").contains("B --|> A"));
}

#[test]
fn test_convert_with_report() {
    let source = "@startuml\nclass \"A\" {\n}\ninterface \"B\" {\n}\n\"A\" <|-- \"B\"\n@enduml";

    let converter = DiagramConverter::default();
    let (mermaid, report) = converter
        .convert_with_report(source)
        .expect("Failed to convert diagram");

    assert!(mermaid.contains("classDiagram"));
    assert_eq!(report.classes(), 1);
    assert_eq!(report.interfaces(), 1);
    assert_eq!(report.relations(), 1);
    assert!(report.is_clean());
}

#[test]
fn test_converter_reusability() {
    let source1 = "@startuml\nclass \"First\" {\n}\n@enduml";
    let source2 = "@startuml\nclass \"Second\" {\n}\n@enduml";

    let converter = DiagramConverter::default();

    // Convert first diagram
    let mermaid1 = converter.convert(source1).expect("Failed to convert source1");

    // Reuse same converter for second diagram
    let mermaid2 = converter.convert(source2).expect("Failed to convert source2");

    assert!(mermaid1.contains("class First"), "First output should be valid");
    assert!(mermaid2.contains("class Second"), "Second output should be valid");
    assert!(
        !mermaid2.contains("First"),
        "No state should leak between conversions"
    );
}
