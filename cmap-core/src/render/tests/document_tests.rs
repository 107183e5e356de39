use super::test_helpers::OutcomeBuilder;
use crate::render::{RenderError, TimelineRenderer};
use std::fs;
use tempfile::tempdir;

#[test]
fn document_carries_explicit_presentation_attributes() {
    // Arrange
    let outcome = OutcomeBuilder::new()
        .start(0)
        .compaction(5, 1_000)
        .compaction(5, 2_000)
        .compaction(5, 3_000)
        .end(60_000)
        .build();

    // Act
    let svg = TimelineRenderer::default()
        .render(&outcome)
        .unwrap()
        .to_string();

    // Assert
    assert_eq!(svg.matches("<rect").count(), 4);
    assert_eq!(svg.matches("<line").count(), 13 + 2);
    assert_eq!(svg.matches("fill=\"#F89406\"").count(), 3);
    assert_eq!(svg.matches("stroke=\"#DE1B1B\"").count(), 1);
    assert_eq!(svg.matches("stroke=\"#118C4E\"").count(), 1);
    assert_eq!(svg.matches("stroke-dasharray=\"5,5\"").count(), 13);
    assert_eq!(svg.matches("shape-rendering=\"crispEdges\"").count(), 14);
    assert_eq!(svg.matches("stroke-width=\"0\"").count(), 3);
    assert_eq!(svg.matches("stroke-width=\"2\"").count(), 2);
    assert!(svg.contains("fill=\"white\""));
    assert!(svg.contains("viewBox=\"0 0 1400 700\""));
}

#[test]
fn end_markers_are_emitted_after_everything_else() {
    let outcome = OutcomeBuilder::new().end(1_000).compaction(1, 1_000).start(0).build();

    let svg = TimelineRenderer::default()
        .render(&outcome)
        .unwrap()
        .to_string();

    let canvas = svg.find("fill=\"white\"").unwrap();
    let compaction = svg.find("#F89406").unwrap();
    let start = svg.find("#DE1B1B").unwrap();
    let end = svg.find("#118C4E").unwrap();
    assert!(canvas < compaction);
    assert!(compaction < start);
    assert!(start < end);
}

#[test]
fn save_writes_the_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("compaction.svg");
    let renderer = TimelineRenderer::default();
    let document = renderer
        .render(&OutcomeBuilder::new().start(0).end(1).build())
        .unwrap();

    renderer.save(&document, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("<svg"));
    assert!(written.contains("#118C4E"));
}

#[test]
fn save_into_missing_directory_is_a_write_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("compaction.svg");
    let renderer = TimelineRenderer::default();
    let document = renderer
        .render(&OutcomeBuilder::new().start(0).end(1).build())
        .unwrap();

    let err = renderer.save(&document, &path).unwrap_err();

    assert!(matches!(err, RenderError::Write { .. }));
    assert!(!path.exists());
}
