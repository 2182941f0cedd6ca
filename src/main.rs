use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;

use todolist::cli::{CliArgs, InputSource};
use todolist::model::AppModel;
use todolist::runtime::{App, TerminalSink};

fn main() -> Result<()> {
    let startup = CliArgs::parse().into_config();

    if startup.write_config {
        let path = startup.write_config()?;
        println!("Wrote config to {}", path.display());
        return Ok(());
    }

    todolist::tracing::init(startup.config.file_logging);
    tracing::info!(
        ids = ?startup.config.id_strategy,
        haptics = startup.config.haptics,
        trim = startup.config.trim_input,
        "starting"
    );

    let model = AppModel::new(startup.config);
    let mut app = App::new(model, io::stdout(), TerminalSink::new(io::stdout()));

    match startup.input {
        InputSource::Script(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            app.run(BufReader::new(file))
        }
        InputSource::Stdin => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                println!("Type 'help' for commands.");
            }
            app.run(stdin.lock())
        }
    }
}
