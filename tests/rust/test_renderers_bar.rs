use super::*;
use crate::config::OutputFormat;

fn config_with_bar(bar: &str) -> RenderConfig {
    let mut config = RenderConfig::default();
    config.style.bar_char = bar.to_string();
    config
}

fn count(s: &str, ch: char) -> usize {
    s.chars().filter(|&c| c == ch).count()
}

#[test]
fn test_bar_length() {
    assert_eq!(bar_length(20.0, 2.5), 50);
    assert_eq!(bar_length(10.0, 2.5), 25);
    assert_eq!(bar_length(0.1, 2.5), 1);
    assert_eq!(bar_length(0.0, 0.0), 1);
}

#[test]
fn test_bar_doubles_with_value() {
    let data = vec![Record::new("A", 10.0), Record::new("B", 20.0)];
    let artifact = render(&data, &config_with_bar("#"));
    let chart = artifact.chart().unwrap();
    assert_eq!(chart.rows.len(), 2);
    let a = count(&chart.rows[0], '#');
    let b = count(&chart.rows[1], '#');
    assert_eq!(b, BAR_WIDTH);
    assert!((b as i64 - 2 * a as i64).abs() <= 1);
}

#[test]
fn test_bar_row_layout() {
    let data = vec![Record::new("A", 10.0), Record::new("B", 20.0)];
    let artifact = render(&data, &config_with_bar("#"));
    let chart = artifact.chart().unwrap();
    let expected = format!("A{} │{} 10", " ".repeat(19), "#".repeat(25));
    assert_eq!(chart.rows[0], expected);
}

#[test]
fn test_scale_row() {
    let data = vec![Record::new("A", 10.0), Record::new("B", 20.0)];
    let artifact = render(&data, &config_with_bar("#"));
    let scale = artifact.chart().unwrap().scale.clone().unwrap();
    assert_eq!(scale, format!("{}0{}20", " ".repeat(22), " ".repeat(49)));
    assert!(scale.ends_with("20"));
}

#[test]
fn test_bar_long_label_widens_column() {
    let long = "L".repeat(25);
    let data = vec![Record::new(long.clone(), 1.0), Record::new("S", 1.0)];
    let artifact = render(&data, &config_with_bar("#"));
    let chart = artifact.chart().unwrap();
    assert!(chart.rows[0].starts_with(&format!("{long} │")));
    assert!(chart.rows[1].starts_with(&format!("S{} │", " ".repeat(24))));
}

#[test]
fn test_bar_all_zero_values() {
    let data = vec![Record::new("A", 0.0), Record::new("B", 0.0)];
    let artifact = render(&data, &config_with_bar("#"));
    let chart = artifact.chart().unwrap();
    assert_eq!(count(&chart.rows[0], '#'), 1);
    assert_eq!(count(&chart.rows[1], '#'), 1);
    assert!(chart.scale.as_ref().unwrap().ends_with('0'));
}

#[test]
fn test_bar_tiny_negative_max_is_bounded() {
    let data = vec![Record::new("A", -1e-300), Record::new("B", -1.0)];
    let artifact = render(&data, &config_with_bar("#"));
    let chart = artifact.chart().unwrap();
    assert_eq!(count(&chart.rows[0], '#'), 50);
    assert_eq!(count(&chart.rows[1], '#'), BAR_WIDTH * 4);
}

#[test]
fn test_bar_missing_char() {
    let data = vec![Record::new("A", 1.0)];
    let artifact = render(&data, &config_with_bar(""));
    assert_eq!(artifact, Artifact::Error(PreconditionError::MissingBarChar));
    assert_eq!(artifact.to_string(), "Error: Bar character is required.\n");
}

#[test]
fn test_bar_ascii_axis() {
    let data = vec![Record::new("A", 1.0)];
    let mut config = config_with_bar("=");
    config.charset = crate::renderers::charset::CharSet::Ascii;
    let artifact = render(&data, &config);
    assert!(artifact.chart().unwrap().rows[0].contains(" |="));
}

#[test]
fn test_bar_external_internal() {
    let data = vec![Record::new("External", 14.0), Record::new("Internal", 23.0)];
    let artifact = render(&data, &config_with_bar("█"));
    let chart = artifact.chart().unwrap();
    assert_eq!(chart.rows.len(), 2);
    assert!(count(&chart.rows[1], '█') > count(&chart.rows[0], '█'));
    let text = artifact.to_string();
    assert!(text.contains("External: 14"));
    assert!(text.contains("Internal: 23"));
}

#[test]
fn test_bar_html_rows() {
    let data = vec![Record::new("<A>", 1.0)];
    let mut config = config_with_bar("#");
    config.format = OutputFormat::Html;
    let html = render(&data, &config).format(&config);
    assert!(html.contains(r#"<div class="graph-row">&lt;A&gt;"#));
    assert!(html.contains(r#"<div class="graph-scale">"#));
    assert!(html.contains(r#"<span class="legend-label">&lt;A&gt;</span>"#));
}
