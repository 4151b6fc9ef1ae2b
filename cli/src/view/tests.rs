use super::*;
use iconbook_core::preview::TabKind;
use iconbook_core::types::SnippetConfig;

fn render(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
    colored::control::set_override(false);
    let mut out = Vec::new();
    write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_icons_with_and_without_tags() {
    let icons = [
        IconEntry::new("arrow-up", Some("direction  navigation".to_string())),
        IconEntry::new("pencil", None),
    ];

    let text = render(|out| write_icons(out, &icons));

    assert_eq!(text, "arrow-up  direction navigation\npencil\n");
}

#[test]
fn test_icons_json() {
    let icon = IconEntry::new("pencil", None);

    let text = render(|out| write_icons_json(out, &[&icon]));

    assert!(text.contains("\"name\": \"pencil\""));
    assert!(!text.contains("tags"));
}

#[test]
fn test_collapsed_preview_shows_header_only() {
    let preview = CodePreview::for_icon("arrow-up", &SnippetConfig::default(), 0);

    let text = render(|out| write_preview(out, "arrow-up", &preview));

    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("▸ arrow-up"));
}

#[test]
fn test_expanded_preview_shows_active_tab() {
    let mut preview = CodePreview::for_icon("arrow-up", &SnippetConfig::default(), 0);
    preview.toggle_collapse();
    preview.select_tab(TabKind::Vm);

    let text = render(|out| write_preview(out, "arrow-up", &preview));

    assert!(text.contains(" HTML | REACT | VM "));
    assert!(text.contains("```html"));
    assert!(text.contains(r##"  1 #svgIcon("create" "arrow-up" "12" "12" "#333")"##));
    assert!(text.contains("  - 12 is width"));
}

#[test]
fn test_expanded_preview_on_empty_tab() {
    let mut preview = CodePreview::for_icon("arrow-up", &SnippetConfig::default(), 0);
    preview.set_open(true);
    preview.select_tab(TabKind::Scss);

    let text = render(|out| write_preview(out, "arrow-up", &preview));

    assert!(!text.contains("```"));
}

#[test]
fn test_guide_collapsed_and_expanded() {
    let mut panel = CollapsePanel::new(GUIDE_TITLE, false);

    let collapsed = render(|out| write_guide(out, &panel));
    assert!(collapsed.contains("(Expand Instructions on naming and adding icons)"));

    panel.toggle();
    let expanded = render(|out| write_guide(out, &panel));
    assert!(expanded.contains("Check for existing icons first"));
    assert!(expanded.contains("arrow-up-from-line"));
}
