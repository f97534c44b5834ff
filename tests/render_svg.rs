use ahash::AHashSet;
use scatterplot_rs::render::svg::{render_svg_file, render_svg_string};
use scatterplot_rs::render::{DrawCommand, LayerKind, draw_commands, draw_layers};
use scatterplot_rs::style::{LAYER_GREY, Rgb8};
use scatterplot_rs::{Bounds, LayoutConfig, RenderData, Series, Value, compute_render_data};
use std::fs;

const PLOT: Bounds = Bounds::new(20.0, 20.0, 560.0, 360.0);

fn identity(v: f64) -> f64 {
    v
}

fn sample_series() -> Vec<Series> {
    let mut out = Vec::new();
    // Trajectory: DEU
    out.push(
        Series::new(
            "DEU",
            "Germany",
            vec![
                Value::new(100.0, 300.0, Some(80.0), 2000),
                Value::new(200.0, 250.0, Some(82.0), 2010),
                Value::new(300.0, 200.0, Some(83.0), 2020),
            ],
        )
        .with_color("#1f77b4"),
    );
    // Trajectory: USA
    out.push(Series::new(
        "USA",
        "United States",
        vec![
            Value::new(150.0, 100.0, Some(280.0), 2000),
            Value::new(400.0, 120.0, Some(330.0), 2020),
        ],
    ));
    // Lone point: FRA
    out.push(Series::new("FRA", "France", vec![Value::new(450.0, 330.0, Some(60.0), 2020)]));
    out
}

fn layout(hover: Option<&str>, focus: &[&str]) -> RenderData {
    let focus: AHashSet<String> = focus.iter().map(|s| s.to_string()).collect();
    compute_render_data(
        &sample_series(),
        hover,
        &focus,
        PLOT,
        &identity,
        &identity,
        (60.0, 330.0),
        &LayoutConfig::default(),
    )
}

fn texts(commands: &[DrawCommand]) -> Vec<&str> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn layers_come_back_to_front() {
    let layers = draw_layers(&layout(None, &["DEU"]));
    let kinds: Vec<LayerKind> = layers.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        [
            LayerKind::Background,
            LayerKind::BackgroundLabels,
            LayerKind::Foreground,
            LayerKind::ForegroundLabels,
        ]
    );
    assert!(texts(&layers[3].commands).contains(&"Germany"));
    assert!(texts(&layers[1].commands).contains(&"France"));
}

#[test]
fn layer_mode_greys_out_background_marks() {
    let layers = draw_layers(&layout(Some("USA"), &[]));
    for cmd in &layers[0].commands {
        let color = match cmd {
            DrawCommand::Circle { fill, .. } | DrawCommand::Arrow { fill, .. } => *fill,
            DrawCommand::Polyline { stroke, .. } | DrawCommand::Ring { stroke, .. } => *stroke,
            DrawCommand::Text { .. } => continue,
        };
        assert_eq!(color, LAYER_GREY);
    }

    // Without a foreground, background marks keep their series colour.
    let plain = draw_layers(&layout(None, &[]));
    let deu = Rgb8::new(0x1f, 0x77, 0xb4);
    assert!(plain[0].commands.iter().any(|c| matches!(c, DrawCommand::Polyline { stroke, .. } if *stroke == deu)));
}

#[test]
fn only_visible_labels_are_drawn() {
    for (hover, focus) in [(None, vec![]), (Some("DEU"), vec!["USA"]), (None, vec!["DEU", "USA", "FRA"])] {
        let render = layout(hover, &focus);
        let commands = draw_commands(&render);
        let visible = render.labels().filter(|l| !l.is_hidden).count();
        assert_eq!(texts(&commands).len(), visible);
    }
}

#[test]
fn focused_series_get_a_ring() {
    let commands = draw_commands(&layout(None, &["FRA"]));
    let rings = commands.iter().filter(|c| matches!(c, DrawCommand::Ring { .. })).count();
    assert_eq!(rings, 1);

    let hovered = draw_commands(&layout(Some("FRA"), &[]));
    assert!(!hovered.iter().any(|c| matches!(c, DrawCommand::Ring { .. })));
}

#[test]
fn trajectories_end_in_an_arrow() {
    let commands = draw_commands(&layout(None, &[]));
    let arrows = commands.iter().filter(|c| matches!(c, DrawCommand::Arrow { .. })).count();
    assert_eq!(arrows, 2, "one per multi-value series");
}

#[test]
fn empty_data_says_no_data() {
    let render = compute_render_data(
        &[],
        None,
        &AHashSet::new(),
        PLOT,
        &identity,
        &identity,
        (1.0, 1.0),
        &LayoutConfig::default(),
    );
    let layers = draw_layers(&render);
    assert_eq!(layers.len(), 4);
    assert_eq!(texts(&layers[0].commands), ["No data"]);
    assert!(layers[1..].iter().all(|l| l.commands.is_empty()));

    let svg = render_svg_string(&render, 600, 400).unwrap();
    assert!(svg.contains("No data"));
}

#[test]
fn svg_string_contains_visible_labels() {
    let render = layout(Some("DEU"), &[]);
    let svg = render_svg_string(&render, 600, 400).expect("svg");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Germany"));
    assert!(svg.contains("<polyline") || svg.contains("<path"));
}

#[test]
fn svg_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plot.svg");
    render_svg_file(&layout(None, &["USA"]), &path, 600, 400).unwrap();

    let body = fs::read_to_string(&path).expect("file created");
    assert!(!body.is_empty(), "svg has content");
    assert!(body.contains("United States"));
}
