//! archetype-tools CLI - Install a Maven archetype locally and generate projects from it

use archetype_core::config::{load_config, RunConfiguration, DEFAULT_CONFIG_FILE};
use archetype_core::tui::{RunArgs, RunStatus};
use archetype_core::{ConfigError, LinePrompter, Maven, SystemRunner};
use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;

/// Environment variable overriding the configuration file path
const CONFIG_ENV: &str = "ARCHETYPE_TOOLS_CONFIG";

#[derive(Parser, Debug)]
#[command(name = "archetype-tools")]
#[command(about = "Check Java and Maven, install the archetype JAR and generate projects from it")]
#[command(version)]
pub struct Args {
    /// Install the archetype JAR into the local Maven repository
    #[arg(long)]
    pub install: bool,

    /// Generate a project with the configured default values
    #[arg(long, visible_alias = "generate")]
    pub test: bool,

    /// Generate a project, prompting for groupId, artifactId, version and package
    #[arg(long)]
    pub custom: bool,

    /// Configuration file, JSON or YAML [default: config.json]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use the built-in defaults instead of a configuration file
    #[arg(long = "builtin-defaults", conflicts_with = "config")]
    pub builtin_defaults: bool,

    /// Exit with status 2 when the JAR, Java or Maven is missing
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    fn load_config(&self) -> Result<RunConfiguration, ConfigError> {
        if self.builtin_defaults {
            Ok(RunConfiguration::default())
        } else {
            load_config(&self.config_path())
        }
    }

    fn run_args(&self) -> RunArgs {
        RunArgs {
            install: self.install,
            generate: self.test,
            custom: self.custom,
            workdir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

fn exit_code(status: RunStatus, strict: bool) -> u8 {
    match status {
        RunStatus::Completed | RunStatus::NothingRequested => 0,
        RunStatus::PrerequisitesMissing if strict => 2,
        RunStatus::PrerequisitesMissing => 0,
        RunStatus::StepFailed => 1,
    }
}

fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    // Configuration errors are fatal before any check runs
    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Configuration error:").red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut prompter = LinePrompter::stdio();
    let result = archetype_core::run(
        &config,
        &args.run_args(),
        &Maven::default(),
        &SystemRunner,
        &mut prompter,
    );

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(status) => ExitCode::from(exit_code(status, args.strict)),
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
