//! Usage snippets for a single icon.

use crate::types::SnippetConfig;

/// One usage variant: the code to paste plus notes on its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageSnippet {
    pub content: String,
    pub instructions: Vec<String>,
}

/// All usage variants for one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippets {
    pub markup: UsageSnippet,
    pub template_macro: UsageSnippet,
    pub component: UsageSnippet,
}

impl Snippets {
    pub fn for_icon(name: &str, config: &SnippetConfig) -> Self {
        Self {
            markup: markup(name, config),
            template_macro: template_macro(name, config),
            component: component(name, config),
        }
    }
}

fn markup(name: &str, config: &SnippetConfig) -> UsageSnippet {
    UsageSnippet {
        content: format!(
            "<svg class=\"{svg_class} {name}\">\n    <use xlink:href=\"#{name}\"/>\n</svg>",
            svg_class = config.svg_class,
        ),
        instructions: vec![
            format!("#{name} is the icon name"),
            format!(".{name} is the icon class"),
        ],
    }
}

fn template_macro(name: &str, config: &SnippetConfig) -> UsageSnippet {
    UsageSnippet {
        content: format!(
            "#svgIcon(\"{class}\" \"{name}\" \"{width}\" \"{height}\" \"{fill}\")",
            class = config.class_name,
            width = config.width,
            height = config.height,
            fill = config.fill,
        ),
        instructions: vec![
            format!("{} is a class name", config.class_name),
            format!("{name} is icon name"),
            format!("{} is width", config.width),
            format!("{} is height", config.height),
            format!("{} is icon color", config.fill),
            "By default aria-hidden is true. Don't need declaration. For false just pass false"
                .to_string(),
        ],
    }
}

fn component(name: &str, config: &SnippetConfig) -> UsageSnippet {
    UsageSnippet {
        content: format!(
            "<Icons className=\"{class}\" name=\"{name}\" fill=\"{fill}\" width=\"{width}\" height=\"{height}\" ariaHidden={{true}} />",
            class = config.class_name,
            fill = config.fill,
            width = config.width,
            height = config.height,
        ),
        instructions: [
            "Use className prop to pass class in Icon component.",
            "Use name prop to pass a name for Icon.",
            "Use fill prop to pass color for Icon.",
            "Use width prop to pass width for Icon.",
            "Use height prop to pass height for Icon.",
            "Use ariaHidden prop to pass true or false. By default it's true",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
    }
}
