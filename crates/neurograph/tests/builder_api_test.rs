//! Integration tests for the ScreenBuilder API

use neurograph::{
    COMPONENTS_HEADING, NeurographError, SCREEN_SUBTITLE, SCREEN_TITLE, ScreenBuilder,
    config::{AppConfig, StyleConfig, SurfaceConfig},
    layout::{PRIMITIVE_COUNT, Structure},
};

#[test]
fn test_default_builder_lays_out_phone_width() {
    let builder = ScreenBuilder::default();
    let layout = builder.layout().expect("default surface is valid");

    assert_eq!(layout.len(), PRIMITIVE_COUNT);
    assert_eq!(layout.surface().width(), 390.0);
    assert_eq!(layout.surface().height(), 250.0);
    assert_eq!(layout.items()[0].structure(), Structure::Axon);
}

#[test]
fn test_render_diagram_svg() {
    let builder = ScreenBuilder::new(AppConfig::default().with_width(1000.0));
    let svg = builder.render_diagram_svg().expect("Failed to render diagram");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("x1=\"350\""), "Axon should start at 35% width");
    assert!(!svg.contains(SCREEN_TITLE), "Diagram alone has no header");
}

#[test]
fn test_render_screen_svg() {
    let builder = ScreenBuilder::default();
    let svg = builder.render_screen_svg().expect("Failed to render screen");

    assert!(svg.contains(SCREEN_TITLE));
    assert!(svg.contains(COMPONENTS_HEADING));
    assert!(!SCREEN_SUBTITLE.is_empty());
    for record in builder.records() {
        assert!(
            svg.contains(&format!("data-icon=\"{}\"", record.icon())),
            "missing row for {}",
            record.name()
        );
    }
}

#[test]
fn test_custom_height() {
    let config = AppConfig::new(SurfaceConfig::new(600.0, 400.0), StyleConfig::default());
    let layout = ScreenBuilder::new(config).layout().unwrap();
    assert_eq!(layout.surface().height(), 400.0);
}

#[test]
fn test_invalid_width_is_layout_error() {
    let builder = ScreenBuilder::new(AppConfig::default().with_width(0.0));
    let err = builder.render_diagram_svg().unwrap_err();
    assert!(matches!(err, NeurographError::Layout(_)), "{err}");
}

#[test]
fn test_invalid_color_is_config_error() {
    let style = StyleConfig::new(Some("definitely-not-a-color".to_string()), None, None);
    let builder = ScreenBuilder::new(AppConfig::new(SurfaceConfig::default(), style));

    let err = builder.render_screen_svg().unwrap_err();
    assert!(matches!(err, NeurographError::Config(_)), "{err}");
}

#[test]
fn test_narrow_screen_is_export_error() {
    let builder = ScreenBuilder::new(AppConfig::default().with_width(100.0));
    let err = builder.render_screen_svg().unwrap_err();
    assert!(matches!(err, NeurographError::Export(_)), "{err}");
}

#[test]
fn test_builder_reusability() {
    let builder = ScreenBuilder::default();
    let first = builder.render_diagram_svg().unwrap();
    let second = builder.render_diagram_svg().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_screen_error_reports_configured_width() {
    let builder = ScreenBuilder::new(AppConfig::default().with_width(-5.0));
    let err = builder.render_screen_svg().unwrap_err();
    assert!(matches!(err, NeurographError::Layout(_)), "{err}");
    assert!(err.to_string().contains("width `-5`"), "{err}");
}

#[test]
fn test_screen_narrower_than_padding() {
    let builder = ScreenBuilder::new(AppConfig::default().with_width(30.0));
    let err = builder.render_screen_svg().unwrap_err();
    assert!(matches!(err, NeurographError::Export(_)), "{err}");
    assert!(err.to_string().contains("page width 30"), "{err}");
}
