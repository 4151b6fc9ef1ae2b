use super::Collapse;
use crate::snippets::{Snippets, UsageSnippet};
use crate::types::SnippetConfig;
use std::fmt;

/// The four code tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabKind {
    Html,
    React,
    Scss,
    Vm,
}

impl TabKind {
    pub const ALL: [TabKind; 4] = [TabKind::Html, TabKind::React, TabKind::Scss, TabKind::Vm];

    pub fn number(self) -> u8 {
        match self {
            TabKind::Html => 1,
            TabKind::React => 2,
            TabKind::Scss => 3,
            TabKind::Vm => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TabKind::Html => "HTML",
            TabKind::React => "REACT",
            TabKind::Scss => "SCSS",
            TabKind::Vm => "VM",
        }
    }

    /// Highlighter language of the tab's content.
    pub fn language(self) -> &'static str {
        match self {
            TabKind::Html | TabKind::Vm => "html",
            TabKind::React => "jsx",
            TabKind::Scss => "css",
        }
    }
}

/// Identifier of a tab within one panel, rendered as `tab-{n}-{order}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId {
    pub kind: TabKind,
    pub order: u32,
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}-{}", self.kind.number(), self.order)
    }
}

/// Content of the currently active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePane<'a> {
    pub id: TabId,
    pub language: &'static str,
    pub content: &'a str,
    pub instructions: &'a [String],
}

/// Collapsible panel of code tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePreview {
    order: u32,
    html: Option<UsageSnippet>,
    react: Option<UsageSnippet>,
    scss: Option<UsageSnippet>,
    vm: Option<UsageSnippet>,
    active: TabKind,
    collapse: Collapse,
}

impl CodePreview {
    pub fn new(
        order: u32,
        html: Option<UsageSnippet>,
        react: Option<UsageSnippet>,
        scss: Option<UsageSnippet>,
        vm: Option<UsageSnippet>,
        open: bool,
    ) -> Self {
        let mut preview = Self {
            order,
            html: html.filter(has_content),
            react: react.filter(has_content),
            scss: scss.filter(has_content),
            vm: vm.filter(has_content),
            active: TabKind::Vm,
            collapse: Collapse::from_open(open),
        };
        preview.active = preview.initial_tab();
        preview
    }

    /// Panel for one icon's usage snippets. Starts collapsed.
    pub fn for_icon(name: &str, config: &SnippetConfig, order: u32) -> Self {
        let snippets = Snippets::for_icon(name, config);
        Self::new(
            order,
            Some(snippets.markup),
            Some(snippets.component),
            None,
            Some(snippets.template_macro),
            false,
        )
    }

    /// HTML, then REACT, then SCSS; VM otherwise, even if VM is empty too.
    fn initial_tab(&self) -> TabKind {
        if self.html.is_some() {
            TabKind::Html
        } else if self.react.is_some() {
            TabKind::React
        } else if self.scss.is_some() {
            TabKind::Scss
        } else {
            TabKind::Vm
        }
    }

    fn snippet(&self, kind: TabKind) -> Option<&UsageSnippet> {
        match kind {
            TabKind::Html => self.html.as_ref(),
            TabKind::React => self.react.as_ref(),
            TabKind::Scss => self.scss.as_ref(),
            TabKind::Vm => self.vm.as_ref(),
        }
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    /// Tabs with content, in fixed display order.
    pub fn visible_tabs(&self) -> impl Iterator<Item = TabKind> + '_ {
        TabKind::ALL
            .into_iter()
            .filter(|kind| self.snippet(*kind).is_some())
    }

    pub fn tab_id(&self, kind: TabKind) -> TabId {
        TabId {
            kind,
            order: self.order,
        }
    }

    pub fn active_tab(&self) -> TabId {
        self.tab_id(self.active)
    }

    pub fn select_tab(&mut self, kind: TabKind) {
        self.active = kind;
    }

    pub fn is_open(&self) -> bool {
        self.collapse.is_open()
    }

    pub fn toggle_collapse(&mut self) {
        self.collapse.toggle();
    }

    /// Mirrors the externally supplied `open` flag.
    pub fn set_open(&mut self, open: bool) {
        self.collapse.set(open);
    }

    /// The active tab's content, if it has any.
    pub fn active_pane(&self) -> Option<ActivePane<'_>> {
        let snippet = self.snippet(self.active)?;
        Some(ActivePane {
            id: self.active_tab(),
            language: self.active.language(),
            content: &snippet.content,
            instructions: &snippet.instructions,
        })
    }
}

fn has_content(snippet: &UsageSnippet) -> bool {
    !snippet.content.is_empty()
}
