//! Integration tests for the plain-text grid renderer.

use serde_json::json;

use gridcast::{
    render_grid, BatchData, ObjectSource, Panel, PanelConfig, SourceError, SourceObject,
};

struct Fixed(Vec<SourceObject>);

impl ObjectSource for Fixed {
    fn fetch(&mut self) -> Result<BatchData, SourceError> {
        Ok(BatchData::Objects(self.0.clone()))
    }
}

fn daemons() -> Fixed {
    Fixed(vec![
        SourceObject::new(json!({"Name": "sshd", "Status": "running", "Port": 22})),
        SourceObject::new(json!({"Name": "dockerd", "Status": "running", "Port": 2375})),
    ])
}

#[test]
fn renders_header_and_aligned_rows() {
    let mut panel = Panel::new(PanelConfig::default());
    panel.update(&mut daemons(), 80).unwrap();

    let lines = render_grid(panel.plan().unwrap(), panel.rows(), 80);

    insta::assert_snapshot!(lines.join("\n"), @r"
    Name    Status  Port
    sshd    running 22
    dockerd running 2375
    ");
}

#[test]
fn mixed_mode_grids_render_too() {
    let mut panel = Panel::new(PanelConfig::default());
    let mut source = Fixed(vec![
        SourceObject::with_type(json!("alpha"), "Foo"),
        SourceObject::with_type(json!(7), "Bar"),
    ]);
    panel.update(&mut source, 80).unwrap();

    let lines = render_grid(panel.plan().unwrap(), panel.rows(), 80);

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("##"));
    assert!(lines[0].contains("Value"));
    assert!(lines[0].contains("Type"));
    assert!(lines[1].contains("alpha"));
    assert!(lines[2].contains("Bar"));
}

#[test]
fn tight_width_truncates_instead_of_overflowing() {
    let mut panel = Panel::new(PanelConfig::default());
    panel.update(&mut daemons(), 80).unwrap();

    let lines = render_grid(panel.plan().unwrap(), panel.rows(), 16);

    for line in &lines {
        assert!(
            unicode_width(line) <= 16,
            "line wider than the budget: {line:?}"
        );
    }
    assert_eq!(lines[2], "dock… runn… 2375");
}

fn unicode_width(text: &str) -> usize {
    use unicode_width::UnicodeWidthStr;
    text.width()
}
