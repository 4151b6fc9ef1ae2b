//! State of the collapsible and tabbed preview panels.
//!
//! Every panel owns its own state; transitions happen only through the
//! explicit actions below.

mod code;

pub use code::{ActivePane, CodePreview, TabId, TabKind};

/// Open/closed state of a collapsible region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Collapse {
    Open,
    #[default]
    Closed,
}

impl Collapse {
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        };
    }

    pub fn set(&mut self, open: bool) {
        *self = Self::from_open(open);
    }
}

/// A titled section whose body can be expanded and collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsePanel {
    title: String,
    state: Collapse,
}

impl CollapsePanel {
    pub fn new(title: impl Into<String>, default_open: bool) -> Self {
        Self {
            title: title.into(),
            state: Collapse::from_open(default_open),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn toggle(&mut self) {
        self.state.toggle();
    }

    /// Mirrors an externally controlled open flag. `None` leaves the
    /// user's choice alone.
    pub fn sync_open(&mut self, open: Option<bool>) {
        if let Some(open) = open {
            self.state.set(open);
        }
    }

    /// Label of the toggle button: the action it would perform.
    pub fn aria_label(&self) -> String {
        let action = if self.is_open() { "Collapse" } else { "Expand" };
        format!("{action} {}", self.title)
    }
}
