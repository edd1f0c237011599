#[macro_use]
extern crate log;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process::ExitCode;

use ttt::config::{Cli, Settings, HISTORY_FILE, LOG_ENV};
use ttt::errors::RuntimeError;
use ttt::persist::save_json;
use ttt::{parse, Structure, Table};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let env_level = std::env::var(LOG_ENV).ok();
    let settings = Settings::from_cli(&cli, env_level.as_deref());

    if let Err(e) = TermLogger::init(
        settings.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Error: {}", e);
    }
    debug!("Settings: {:?}", settings);

    let result = match cli.proposition.as_deref() {
        Some(input) => run(input, &settings),
        None => repl(&settings),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn repl(settings: &Settings) -> Result<(), RuntimeError> {
    let mut rl = DefaultEditor::new()?;
    let history = home::home_dir().map(|home| home.join(HISTORY_FILE));
    load_history(&mut rl, history.as_ref());

    loop {
        let readline = rl.readline("> ");
        let line = match readline {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                save_history(&mut rl, history.as_ref());
                return Err(err.into());
            }
        };

        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line.as_str());

        // Keep prompting after a bad expression
        if let Err(e) = run(&line, settings) {
            report(&e);
        }
    }

    save_history(&mut rl, history.as_ref());
    Ok(())
}

fn run(input: &str, settings: &Settings) -> Result<(), RuntimeError> {
    let nodes = parse(input)?;
    if let Some(path) = &settings.ast {
        save_json(&nodes, path)?;
    }

    let structure = Structure::generate_with_limit(&nodes, settings.max_propositions)?;
    if let Some(path) = &settings.structure {
        save_json(&structure, path)?;
    }

    let table = Table::new(&structure, settings.format, settings.display);
    match &settings.output {
        Some(path) => table.create(path)?,
        None => print!("{}", table.render()),
    }
    Ok(())
}

fn report(error: &RuntimeError) {
    match error {
        RuntimeError::Syntax(e) => match serde_json::to_string_pretty(e) {
            Ok(json) => eprintln!("{}", json),
            Err(_) => eprintln!("{}", e),
        },
        e => eprintln!("Error: {}", e),
    }
}

fn load_history(rl: &mut DefaultEditor, path: Option<&PathBuf>) {
    if let Some(path) = path {
        if let Err(e) = rl.load_history(path) {
            debug!("No history loaded from {}: {}", path.display(), e);
        }
    }
}

fn save_history(rl: &mut DefaultEditor, path: Option<&PathBuf>) {
    if let Some(path) = path {
        if let Err(e) = rl.save_history(path) {
            warn!("Could not save history to {}: {}", path.display(), e);
        }
    }
}
