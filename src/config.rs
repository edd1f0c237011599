use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use crate::structure::DEFAULT_MAX_PROPOSITIONS;

pub const LOG_ENV: &str = "TTT_LOG";
pub const HISTORY_FILE: &str = ".ttt_history";

/// How table cells are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Display {
    /// `true` / `false`
    #[default]
    Boolean,
    /// `1` / `0`
    Number,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    #[default]
    Csv,
    Markdown,
}

#[derive(Parser, Debug)]
#[command(name = "ttt", version, about = "Truth tables for propositional logic")]
pub struct Cli {
    /// Expression to evaluate; starts an interactive prompt when omitted
    #[arg(short, long)]
    pub proposition: Option<String>,

    /// File where the truth table will be saved
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Table format
    #[arg(short = 't', long = "type", value_enum, default_value_t = TableFormat::Csv)]
    pub format: TableFormat,

    /// How values are displayed in the table
    #[arg(short, long, value_enum, default_value_t = Display::Boolean)]
    pub display: Display,

    /// Also save the parsed tree as JSON
    #[arg(long, value_name = "PATH")]
    pub ast: Option<PathBuf>,

    /// Also save the evaluated structure as JSON
    #[arg(long, value_name = "PATH")]
    pub structure: Option<PathBuf>,

    /// Largest number of distinct propositions accepted
    #[arg(long, default_value_t = DEFAULT_MAX_PROPOSITIONS)]
    pub max_propositions: usize,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: TableFormat,
    pub display: Display,
    pub output: Option<PathBuf>,
    pub ast: Option<PathBuf>,
    pub structure: Option<PathBuf>,
    pub max_propositions: usize,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            format: TableFormat::default(),
            display: Display::default(),
            output: None,
            ast: None,
            structure: None,
            max_propositions: DEFAULT_MAX_PROPOSITIONS,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Settings {
    /// `env_level` is the value of `TTT_LOG`, which overrides `-v`.
    pub fn from_cli(cli: &Cli, env_level: Option<&str>) -> Settings {
        let log_level = env_level
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
            .unwrap_or_else(|| verbosity(cli.verbose));

        Settings {
            format: cli.format,
            display: cli.display,
            output: cli.output.clone(),
            ast: cli.ast.clone(),
            structure: cli.structure.clone(),
            max_propositions: cli.max_propositions,
            log_level,
        }
    }
}

fn verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("ttt").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let settings = Settings::from_cli(&cli(&[]), None);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn short_flags() {
        let cli = cli(&["-p", "p ^ q", "-t", "markdown", "-d", "number", "-o", "table.md", "-vv"]);
        assert_eq!(cli.proposition.as_deref(), Some("p ^ q"));

        let settings = Settings::from_cli(&cli, None);
        assert_eq!(settings.format, TableFormat::Markdown);
        assert_eq!(settings.display, Display::Number);
        assert_eq!(settings.output, Some(PathBuf::from("table.md")));
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }

    #[test]
    fn environment_overrides_verbosity() {
        let settings = Settings::from_cli(&cli(&["-v"]), Some("trace"));
        assert_eq!(settings.log_level, LevelFilter::Trace);

        let settings = Settings::from_cli(&cli(&["-v"]), Some("loud"));
        assert_eq!(settings.log_level, LevelFilter::Info);
    }

    #[test]
    fn rejects_unknown_display() {
        let result = Cli::try_parse_from(["ttt", "-d", "text"]);
        assert!(result.is_err());
    }
}
