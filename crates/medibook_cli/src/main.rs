//! Interactive MediBook command loop.
//!
//! # Responsibility
//! - Read configuration from flags/environment and bootstrap logging.
//! - Feed each stdin line to the core command service and print feedback.
//!
//! # Invariants
//! - Command failures are reported and the loop continues; only `exit`
//!   or end of input stops it.

use clap::Parser;
use log::info;
use medibook_core::{
    core_version, default_log_level, init_logging, repository_from_json, CommandService,
    InMemoryPersonRepository, LoggingConfig, PersonRepository,
};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medibook")]
#[command(about = "Patient and specialist contact book")]
#[command(version)]
struct Cli {
    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "MEDIBOOK_LOG_LEVEL")]
    log_level: Option<String>,
    /// Absolute directory for rolling log files (logging disabled if unset)
    #[arg(long, env = "MEDIBOOK_LOG_DIR")]
    log_dir: Option<PathBuf>,
    /// JSON file with the initial list of persons
    #[arg(long, env = "MEDIBOOK_SEED")]
    seed: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_ref() {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        init_logging(&LoggingConfig::new(log_dir).with_level(level))?;
    }

    let repo = match cli.seed.as_ref() {
        Some(path) => repository_from_json(&std::fs::read_to_string(path)?)?,
        None => InMemoryPersonRepository::new(),
    };
    info!(
        "event=cli_start module=cli status=ok version={} persons={}",
        core_version(),
        repo.persons().len()
    );

    run(CommandService::new(repo))
}

fn run(mut service: CommandService<InMemoryPersonRepository>) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("MediBook {} - type `help` for commands", core_version());

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match service.execute(&line) {
            Ok(result) => {
                println!("{}", result.feedback);
                if result.exit {
                    break;
                }
                print_view(service.repo());
            }
            Err(err) => println!("{err}"),
        }
    }

    info!("event=cli_exit module=cli status=ok");
    Ok(())
}

fn print_view<R: PersonRepository>(repo: &R) {
    for (position, person) in repo.filtered_persons().into_iter().enumerate() {
        println!("{:>3}. [{}] {}", position + 1, person.person_type(), person);
    }
}
