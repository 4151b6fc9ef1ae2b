//! Terminal rendering of the catalogue.

use colored::Colorize;
use iconbook_core::IconEntry;
use iconbook_core::preview::{CodePreview, CollapsePanel};
use std::io::{self, Write};

pub const GUIDE_TITLE: &str = "Instructions on naming and adding icons";

const GUIDE_INTRO: &str = "Icon names should be consistent, guessable and future proof. The name \
should describe what is visually represented, not what the intended use of the icon is. With \
this in mind follow these rules when adding a new icon:";

const GUIDE_RULES: [&str; 8] = [
    "Check for existing icons first",
    "Add a descriptive name in lower and kebab case",
    "Include tags that will aid in search for the icon. Add space-separated key words to the \
     data-tags attribute in the definition for the icon svg.",
    "Try to find object names for the subject of the icon. e.g. cart-flatbed-boxes",
    "Additional information, such as modifiers or descriptions should be added as suffixes. \
     e.g. broom-sweeping",
    "When multiple objects present go foreground to background, left to right. \
     e.g. magnifying-glass-graph",
    "Include direction for arrows. e.g. arrow-up-from-line",
    "Use modifiers like 'outlined', 'solid', 'circle', 'box', 'rounded' as there can be \
     variations on the same object. e.g. exclamation-solid-triangle",
];

/// Writes icons one per line: name, then tags dimmed.
pub fn write_icons<'a, W: Write>(
    out: &mut W,
    icons: impl IntoIterator<Item = &'a IconEntry>,
) -> io::Result<()> {
    for icon in icons {
        let tags: Vec<&str> = icon.tag_list().collect();
        if tags.is_empty() {
            writeln!(out, "{}", icon.name().bold())?;
        } else {
            writeln!(out, "{}  {}", icon.name().bold(), tags.join(" ").dimmed())?;
        }
    }
    Ok(())
}

pub fn write_icons_json<W: Write>(out: &mut W, icons: &[&IconEntry]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, icons)?;
    writeln!(out)
}

/// Writes a code preview panel. Only the header is shown while collapsed.
pub fn write_preview<W: Write>(out: &mut W, heading: &str, preview: &CodePreview) -> io::Result<()> {
    let marker = if preview.is_open() { "▾" } else { "▸" };
    writeln!(out, "{marker} {} {}", heading.bold(), "</>".cyan())?;
    if !preview.is_open() {
        return Ok(());
    }

    let active = preview.active_tab();
    let tabs: Vec<String> = preview
        .visible_tabs()
        .map(|kind| {
            let label = format!(" {} ", kind.label());
            if preview.tab_id(kind) == active {
                label.reversed().to_string()
            } else {
                label
            }
        })
        .collect();
    writeln!(out, "{}", tabs.join("|"))?;

    let Some(pane) = preview.active_pane() else {
        return Ok(());
    };

    writeln!(out, "{}", format!("```{}", pane.language).dimmed())?;
    for (number, line) in pane.content.lines().enumerate() {
        writeln!(out, "{} {line}", format!("{:>3}", number + 1).dimmed())?;
    }
    writeln!(out, "{}", "```".dimmed())?;
    for instruction in pane.instructions {
        writeln!(out, "  - {instruction}")?;
    }
    Ok(())
}

/// Writes the collapsible naming guide.
pub fn write_guide<W: Write>(out: &mut W, panel: &CollapsePanel) -> io::Result<()> {
    let marker = if panel.is_open() { "▾" } else { "▸" };
    writeln!(out, "{marker} {}", panel.title().bold())?;
    if !panel.is_open() {
        writeln!(out, "  ({})", panel.aria_label().dimmed())?;
        return Ok(());
    }

    writeln!(out, "{GUIDE_INTRO}")?;
    for rule in GUIDE_RULES {
        writeln!(out, "  - {rule}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
