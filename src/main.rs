//! Dancefig CLI - Chain dance steps into figures

use clap::Parser;
use dancefig::cli::commands;
use dancefig::cli::{Cli, Commands, FiguresCommand};
use dancefig::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so command output stays clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> dancefig::Result<()> {
    let cwd = cli.cwd.as_deref();
    let dance = cli.dance.as_deref();

    match cli.command {
        Some(Commands::Init { force }) => commands::init::run(cwd, dance, force),
        Some(Commands::Steps { from, json }) => {
            commands::steps::run(cwd, dance, from.as_deref(), json)
        }
        Some(Commands::Validate { json }) => commands::validate::run(cwd, dance, json),
        Some(Commands::Show { json }) => commands::show::run(cwd, dance, json),
        Some(Commands::Start { position }) => commands::sequence::start(cwd, dance, &position),
        Some(Commands::Add { step }) => commands::sequence::add(cwd, dance, &step),
        Some(Commands::Undo) => commands::sequence::undo(cwd, dance),
        Some(Commands::Clear) => commands::sequence::clear(cwd, dance),
        Some(Commands::Figures { command }) => match command {
            FiguresCommand::List { json } => commands::figures::list(cwd, dance, json),
            FiguresCommand::Save { name } => commands::figures::save(cwd, dance, name.as_deref()),
            FiguresCommand::Load { id } => commands::figures::load(cwd, dance, &id),
            FiguresCommand::Delete { id } => commands::figures::delete(cwd, dance, &id),
        },
        Some(Commands::Share) => commands::share::run(cwd, dance),
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
