use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Width or height of a rendered icon, in pixels.
#[nutype(
    validate(greater = 0),
    default = 12,
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        Display,
        Default,
        Into,
        TryFrom,
        Serialize,
        Deserialize,
    )
)]
pub struct Dimension(u32);

/// Parameters substituted into the generated usage snippets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetConfig {
    /// Class every sprite `<svg>` element carries next to the icon name.
    #[serde(default = "default_svg_class")]
    pub svg_class: String,
    /// Class name passed to the template macro and the component.
    #[serde(default = "default_class_name")]
    pub class_name: String,
    #[serde(default)]
    pub width: Dimension,
    #[serde(default)]
    pub height: Dimension,
    #[serde(default = "default_fill")]
    pub fill: String,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            svg_class: default_svg_class(),
            class_name: default_class_name(),
            width: Dimension::default(),
            height: Dimension::default(),
            fill: default_fill(),
        }
    }
}

fn default_svg_class() -> String {
    "is-svg-icon".to_string()
}

fn default_class_name() -> String {
    "create".to_string()
}

fn default_fill() -> String {
    "#333".to_string()
}
