use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use poi::cli::{Cli, Commands, IssueCommands, IssueViewCommands, TrackerCommands};
use poi::commands;
use poi::config::Config;
use poi::output;
use poi::store::TrackerStore;
use poi::{Responsible, Result};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");

        // Show error chain when debug logging is on
        if log::log_enabled!(log::Level::Debug) {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // Set global output format
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't touch a tracker
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "poi", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run()?;
        }
        Commands::Permissions { name } => {
            commands::permissions::list(name.as_deref())?;
        }
        // Commands that require config and a tracker file
        command => {
            let config = Config::load()?;
            let store = TrackerStore::new(config.resolve_tracker(cli.tracker.as_deref())?);
            let member = || config.resolve_member(cli.member.as_deref());

            match command {
                Commands::Tracker { action } => match action {
                    TrackerCommands::Create {
                        title,
                        managers,
                        force,
                    } => {
                        commands::tracker::create(&store, title, managers, force)?;
                    }
                    TrackerCommands::Managers => {
                        commands::tracker::managers(&store)?;
                    }
                },
                Commands::Issues { view } => match view {
                    IssueViewCommands::Mine(args) => {
                        commands::issues::mine(&store, &config, &member()?, args)?;
                    }
                    IssueViewCommands::Orphaned(args) => {
                        commands::issues::orphaned(&store, &config, &member()?, args)?;
                    }
                },
                Commands::Issue { action } => match action {
                    IssueCommands::List(args) => {
                        commands::issues::list(&store, args)?;
                    }
                    IssueCommands::Show { id } => {
                        commands::issues::show(&store, id)?;
                    }
                    IssueCommands::Create(args) => {
                        commands::issues::create(&store, &member()?, args)?;
                    }
                    IssueCommands::Transition { id, transition } => {
                        commands::issues::transition(&store, &member()?, id, transition)?;
                    }
                    IssueCommands::Assign {
                        id,
                        responsible,
                        unassign: _,
                    } => {
                        let responsible = responsible.unwrap_or(Responsible::Unassigned);
                        commands::issues::assign(&store, &member()?, id, responsible)?;
                    }
                    IssueCommands::Severity { id, severity } => {
                        commands::issues::set_severity(&store, &member()?, id, severity)?;
                    }
                    IssueCommands::Release { id, release } => {
                        commands::issues::set_release(&store, &member()?, id, release)?;
                    }
                    IssueCommands::Tag { id, tag } => {
                        commands::issues::tag(&store, &member()?, id, &tag)?;
                    }
                    IssueCommands::Watch { id, watcher } => {
                        commands::issues::watch(&store, &member()?, id, watcher)?;
                    }
                },
                Commands::Completions { .. } | Commands::Init | Commands::Permissions { .. } => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
