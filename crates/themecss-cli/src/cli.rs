//! Argument parsing and command execution.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use themecss::{
    check_stylesheet, extract_settings_nodes, extract_style_nodes, load_options, load_selectors,
    load_tree, render_custom_properties, render_global_styles, render_styles_with,
    BlockSelectorMap, PresetClasses, RenderOptions,
};

/// Render a global styles tree to CSS.
///
/// Inputs are JSON or YAML, picked by file extension.
#[derive(Debug, Parser)]
#[command(name = "themecss", version)]
pub struct Args {
    /// What to print
    #[arg(value_enum)]
    pub output: Output,

    /// Style tree file ({ styles, settings })
    #[arg(long, short = 't', value_name = "FILE")]
    pub tree: PathBuf,

    /// Block selector map file (block name -> { selector, elements })
    #[arg(long, short = 's', value_name = "FILE")]
    pub selectors: Option<PathBuf>,

    /// Render options file
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Override which preset utility classes are emitted
    #[arg(long, value_enum)]
    pub preset_classes: Option<PresetClassesArg>,

    /// Tokenize the rendered CSS and print a summary to stderr
    #[arg(long)]
    pub check: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Output {
    /// Style rules followed by preset utility classes
    Styles,
    /// Preset and custom values as CSS variables
    CustomProperties,
    /// Custom properties, then style rules
    All,
    /// Style nodes as JSON
    StyleNodes,
    /// Settings nodes as JSON
    SettingsNodes,
}

impl Output {
    fn is_css(self) -> bool {
        matches!(
            self,
            Output::Styles | Output::CustomProperties | Output::All
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetClassesArg {
    RootPalette,
    All,
    None,
}

impl From<PresetClassesArg> for PresetClasses {
    fn from(arg: PresetClassesArg) -> Self {
        match arg {
            PresetClassesArg::RootPalette => PresetClasses::RootPalette,
            PresetClassesArg::All => PresetClasses::All,
            PresetClassesArg::None => PresetClasses::None,
        }
    }
}

/// Loads the inputs named by `args` and renders the requested output.
pub fn run(args: &Args) -> Result<String> {
    if args.check && !args.output.is_css() {
        bail!("--check only applies to CSS output");
    }

    let tree = load_tree(&args.tree)
        .with_context(|| format!("loading style tree from {}", args.tree.display()))?;

    let selectors = match &args.selectors {
        Some(path) => load_selectors(path)
            .with_context(|| format!("loading block selectors from {}", path.display()))?,
        None => BlockSelectorMap::new(),
    };

    let mut options = match &args.options {
        Some(path) => load_options(path)
            .with_context(|| format!("loading render options from {}", path.display()))?,
        None => RenderOptions::default(),
    };
    if let Some(mode) = args.preset_classes {
        options.preset_classes = mode.into();
    }

    tracing::info!(
        blocks = tree.styles.blocks.len(),
        selectors = selectors.len(),
        output = ?args.output,
        "rendering"
    );

    let text = match args.output {
        Output::Styles => render_styles_with(&tree, &selectors, &options),
        Output::CustomProperties => render_custom_properties(&tree, &selectors),
        Output::All => render_global_styles(&tree, &selectors, &options).to_css(),
        Output::StyleNodes => serde_json::to_string_pretty(&extract_style_nodes(&tree, &selectors))
            .context("serializing style nodes")?,
        Output::SettingsNodes => {
            serde_json::to_string_pretty(&extract_settings_nodes(&tree, &selectors))
                .context("serializing settings nodes")?
        }
    };

    if args.check {
        let summary = check_stylesheet(&text).context("rendered stylesheet failed the check")?;
        eprintln!("{}", summary);
    }

    Ok(text)
}
