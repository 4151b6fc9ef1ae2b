mod view;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use iconbook_core::clipboard::copy_to_clipboard;
use iconbook_core::preview::{CodePreview, CollapsePanel, TabKind};
use iconbook_core::types::AppConfig;
use iconbook_core::{IconEntry, SpriteSource};
use iconbook_search::{SearchConfig, SearchEngine};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse, search and copy icons from an SVG sprite", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (TOML). Defaults to ./iconbook.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Sprite URL or file path. Overrides the config file.
    #[arg(long, global = true)]
    sprite: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every icon, sorted by name
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show icons whose name or tags contain every query word
    Search {
        #[arg(required = true)]
        query: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Show usage snippets for one icon
    Show {
        name: String,

        /// Tab to open
        #[arg(long, value_enum)]
        tab: Option<TabArg>,

        /// Expand the code panel
        #[arg(long)]
        expanded: bool,
    },

    /// Copy an icon name to the clipboard
    Copy { name: String },

    /// Show the icon naming guide
    Guide {
        #[arg(long)]
        expanded: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TabArg {
    Html,
    React,
    Scss,
    Vm,
}

impl From<TabArg> for TabKind {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Html => TabKind::Html,
            TabArg::React => TabKind::React,
            TabArg::Scss => TabKind::Scss,
            TabArg::Vm => TabKind::Vm,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => AppConfig::path(&std::env::current_dir()?),
    };
    let mut config = AppConfig::load(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    if let Some(sprite) = &cli.sprite {
        config.sprite.source = sprite.clone();
    }

    let problems = config.validate();
    if problems.is_empty() {
        return Ok(config);
    }
    for problem in &problems {
        tracing::warn!(%problem, "invalid config value, using default");
    }
    Ok(config.with_defaults_for_invalid())
}

fn lookup<'a>(engine: &'a SearchEngine, name: &str) -> Result<&'a IconEntry> {
    if let Some(icon) = engine.get(name) {
        return Ok(icon);
    }

    let suggestions: Vec<&str> = engine
        .suggest(name)
        .into_iter()
        .map(IconEntry::name)
        .collect();
    if suggestions.is_empty() {
        bail!("no icon named '{name}'");
    }
    bail!(
        "no icon named '{name}', did you mean: {}",
        suggestions.join(", ")
    )
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    let mut engine = SearchEngine::empty(SearchConfig::from(&config.search));
    engine
        .load(&SpriteSource::parse(&config.sprite.source))
        .await;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List { json } => {
            let icons = engine.results().display_order();
            if json {
                view::write_icons_json(&mut out, &icons)?;
            } else {
                view::write_icons(&mut out, icons)?;
            }
        }
        Commands::Search { query, json } => {
            engine.set_query(&query.join(" "));
            let icons = engine.results().display_order();
            if json {
                view::write_icons_json(&mut out, &icons)?;
            } else {
                view::write_icons(&mut out, icons)?;
            }
        }
        Commands::Show {
            name,
            tab,
            expanded,
        } => {
            let icon = lookup(&engine, &name)?;
            let mut preview = CodePreview::for_icon(icon.name(), &config.snippets, 0);
            preview.set_open(expanded);
            if let Some(tab) = tab {
                preview.select_tab(tab.into());
            }
            view::write_preview(&mut out, icon.name(), &preview)?;
        }
        Commands::Copy { name } => {
            let icon = lookup(&engine, &name)?;
            if !io::stdout().is_terminal() {
                tracing::warn!(
                    name = icon.name(),
                    "stdout is not a terminal, the clipboard sequence may not reach one"
                );
            }
            copy_to_clipboard(&mut out, icon.name())?;
            writeln!(out, "Copied!")?;
        }
        Commands::Guide { expanded } => {
            let mut panel = CollapsePanel::new(view::GUIDE_TITLE, false);
            panel.sync_open(Some(expanded));
            view::write_guide(&mut out, &panel)?;
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    run(cli).await
}
