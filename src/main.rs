use clap::Parser;
use std::io::{BufRead, Write};
use tracing_subscriber::EnvFilter;
use unitconv::catalog::{find_unit, validate_catalog};
use unitconv::cli::{self, Cli, Commands};
use unitconv::config::Config;
use unitconv::session::{CommandError, ConverterSession, SessionCommand, HELP};

fn main() {
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => match Config::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::empty(),
    };

    init_logging(args.verbose, &config);
    tracing::debug!(config = ?args.config, "configuration loaded");

    let outcome = match args.command {
        Commands::Convert {
            category,
            value,
            from,
            to,
        } => cli::convert_lines(&category, &value, &from, &to).map(print_lines),
        Commands::Formula { category, from, to } => {
            cli::formula_lines(&category, &from, &to).map(print_lines)
        }
        Commands::List { category } => cli::list_lines(category.as_deref()).map(print_lines),
        Commands::Export { output } => export_catalog(output.as_deref()),
        Commands::Check => cli::check_lines(&validate_catalog()).map(print_lines),
        Commands::Repl => run_repl(&config),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool, config: &Config) {
    // RUST_LOG wins, then -v, then the config file
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("unitconv=debug")
        } else {
            EnvFilter::new(&config.logging.filter)
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

fn export_catalog(output: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli::export_json()?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Catalog exported to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn run_repl(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = config.session_defaults()?;
    let mut session = ConverterSession::with_defaults(&defaults);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("{}", HELP);
    print_state(&session);

    loop {
        print!("{}> ", session.category());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command: SessionCommand = match line.parse() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        if command.is_mutation() {
            command.apply(&mut session);
            for id in [session.source(), session.target()] {
                if find_unit(session.category(), id).is_none() {
                    println!("(unknown unit '{}' for {}; result unchanged)", id, session.category());
                }
            }
            print_state(&session);
            continue;
        }

        match command {
            SessionCommand::Units => {
                for unit in session.units() {
                    println!("  {:<12} {}", unit.id, unit.name);
                }
            }
            SessionCommand::Show => print_state(&session),
            SessionCommand::Json => {
                println!("{}", serde_json::to_string_pretty(&session.snapshot())?)
            }
            SessionCommand::Help => println!("{}", HELP),
            SessionCommand::Quit => break,
            _ => {}
        }
    }

    Ok(())
}

fn print_state(session: &ConverterSession) {
    println!(
        "{} {} -> {}: {}",
        session.input(),
        session.source(),
        session.target(),
        session.result()
    );
    println!("Formula: {}", session.formula());
}
