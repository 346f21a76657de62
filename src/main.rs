use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use toc_panel::cli::CliArgs;
use toc_panel::config::PanelConfig;
use toc_panel::config_paths;
use toc_panel::generator::Registry;
use toc_panel::messages::PanelMsg;
use toc_panel::model::AppModel;
use toc_panel::panel::TreePanel;
use toc_panel::runtime::Host;
use toc_panel::session;

fn main() -> Result<()> {
    toc_panel::tracing::init();

    let args = CliArgs::parse();

    let mut config = PanelConfig::load();
    if args.numbering {
        config.numbering = true;
    }
    if args.no_restore {
        config.restore_state = false;
    }

    let source = fs::read_to_string(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let title = args.display_title();

    let mut registry = Registry::with_builtins(config.numbering);
    let mut model = match registry.take(&args.path) {
        Some(generator) => AppModel::with_document(title, source, generator, config.clone()),
        None => {
            tracing::warn!("No outline generator for {}", args.path.display());
            AppModel::new(title, Vec::new(), config.clone())
        }
    };

    if config.restore_state {
        model.session_path = config_paths::state_file();
        if let Some(state) = model
            .session_path
            .as_deref()
            .and_then(session::load_panel_state)
        {
            model.panel = TreePanel::with_state(state);
        }
    }

    let mut host = Host::new(model);
    for _ in 0..args.toggle_outline {
        host.dispatch(PanelMsg::ToggleOutline.into());
    }
    if let Some(index) = args.select_tab {
        host.dispatch(PanelMsg::SelectTab(index).into());
    }

    if args.json {
        let json = serde_json::to_string_pretty(host.view()).context("serializing render tree")?;
        println!("{}", json);
    } else {
        println!("{}", host.layout());
    }

    Ok(())
}
