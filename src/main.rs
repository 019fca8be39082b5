use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use textcanvas::config::{ConfigError, EditorConfig};
use textcanvas::doc::TextObject;
use textcanvas::engine::{Action, EngineCore};
use textcanvas::script::{self, ScriptError};
use textcanvas::surface::{DisplayList, DrawOp, FixedAdvance};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read script: {0}")]
    Read(#[from] io::Error),
    #[error("invalid script: {0}")]
    Script(#[from] ScriptError),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "textcanvas", about = "Replay text canvas edits headlessly and print the result")]
struct Cli {
    /// JSON-lines script to replay; reads stdin when omitted.
    script: Option<PathBuf>,

    /// Include the rendered display list in the output.
    #[arg(long)]
    draw: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    objects: &'a [TextObject],
    selected_index: Option<usize>,
    active_font: &'a str,
    active_font_size: u32,
    dragging: bool,
    rejected: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_list: Option<Vec<DrawOp>>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "replay failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let config = EditorConfig::from_env()?;
    let source = match &cli.script {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let commands = script::parse(&source)?;

    let mut core = EngineCore::with_config(&config);
    let mut surface = DisplayList::new(FixedAdvance { ratio: config.advance_ratio });
    let mut rejected = 0;
    let mut repaints = 0;

    for command in &commands {
        match command.apply(&mut core, surface.measure()) {
            Ok(actions) => {
                if actions.contains(&Action::RenderNeeded) {
                    repaints += 1;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, code = e.error_code(), ?command, "command rejected");
                rejected += 1;
            }
        }
    }
    tracing::info!(commands = commands.len(), rejected, repaints, "replay finished");

    let display_list = if cli.draw {
        let Ok(()) = core.render(&mut surface);
        Some(surface.take_ops())
    } else {
        None
    };

    let snapshot = Snapshot {
        objects: core.doc.objects(),
        selected_index: core.selection(),
        active_font: core.active_font(),
        active_font_size: core.active_font_size(),
        dragging: core.is_dragging(),
        rejected,
        display_list,
    };
    let output = if cli.pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    Ok(output)
}
