pub mod output;
pub mod status;

use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use ansi_term::Colour;
use clap::{Parser, Subcommand};
use output::{
    render_check_in, render_experience, render_rules, render_status, render_streak, render_tasks,
    render_tasks_saved, Palette,
};
use serde::Serialize;
use status::current_status;
use tracing::{error, level_filters::LevelFilter};

use crate::{
    config::AppConfig,
    scoring::picker::RandomPicker,
    storage::state_store::FileStateStore,
    tracker::{Tracker, TrackerError},
    utils::{
        clock::DefaultClock,
        dir::{create_application_default_path, create_application_path},
        logging::{enable_logging, CLI_PREFIX},
    },
};

#[derive(Parser, Debug)]
#[command(name = "zilv", version, long_about = None)]
#[command(about = "Daily self-discipline tracker", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(
        long,
        global = true,
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Enable logging to console")]
    log: bool,
    #[arg(long, global = true, help = "Print results as JSON")]
    json: bool,
    #[arg(long = "no-color", global = true, help = "Disable coloured output")]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Set or show today's tasks")]
    Tasks {
        #[command(subcommand)]
        command: TasksCommand,
    },
    #[command(about = "Check in with the number of tasks completed today")]
    CheckIn {
        #[arg(
            allow_negative_numbers = true,
            help = "Completed tasks, from 0 to the task count"
        )]
        completed: i64,
    },
    #[command(about = "Show total experience and the current title")]
    Experience {},
    #[command(about = "Show how many days in a row the target was missed")]
    Streak {},
    #[command(about = "Show local time, time left today and an encouragement")]
    Status {},
    #[command(about = "Explain the scoring and penalty rules")]
    Rules {},
}

#[derive(Subcommand, Debug)]
enum TasksCommand {
    #[command(
        about = "Replace today's tasks. Separate tasks with ',' or '，' or pass several arguments"
    )]
    Set {
        #[arg(required = true, num_args = 1..)]
        tasks: Vec<String>,
    },
    #[command(about = "List today's tasks")]
    Show {},
}

pub async fn run_cli() -> Result<ExitCode> {
    let args = Args::parse();

    let app_dir = args
        .dir
        .clone()
        .map_or_else(create_application_default_path, create_application_path)?;

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(CLI_PREFIX, &app_dir, logging_level, args.log)?;

    let config = AppConfig::load(&app_dir)?;
    let store = FileStateStore::new(&app_dir, &config.file_paths)?;
    let mut tracker = Tracker::new(store, config.scoring.clone(), RandomPicker);

    let palette = Palette {
        enabled: !args.no_color && std::env::var_os("NO_COLOR").is_none(),
    };

    match run_command(args, &config, &mut tracker, palette).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_rejection() => {
            eprintln!("{}", palette.paint(Colour::Red, &e.to_string()));
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            error!("Command failed {e:?}");
            Err(e.into())
        }
    }
}

async fn run_command(
    args: Args,
    config: &AppConfig,
    tracker: &mut Tracker<FileStateStore, RandomPicker>,
    palette: Palette,
) -> Result<(), TrackerError> {
    let json = args.json;
    match args.commands {
        Commands::Tasks {
            command: TasksCommand::Set { tasks },
        } => {
            let tasks = tracker.set_tasks(&tasks.join(",")).await?;
            emit(json, &tasks, || render_tasks_saved(&tasks, palette))
        }
        Commands::Tasks {
            command: TasksCommand::Show {},
        } => {
            let tasks = tracker.tasks().await?;
            emit(json, &tasks, || render_tasks(&tasks, palette))
        }
        Commands::CheckIn { completed } => {
            let outcome = tracker.check_in(completed).await?;
            emit(json, &outcome, || {
                render_check_in(&outcome, tracker.config(), palette)
            })
        }
        Commands::Experience {} => {
            let report = tracker.experience().await?;
            emit(json, &report, || render_experience(&report, palette))
        }
        Commands::Streak {} => {
            let streak = tracker.unmet_streak().await?;
            emit(json, &streak, || render_streak(streak))
        }
        Commands::Status {} => {
            let status = current_status(&DefaultClock, config.timezone(), &mut RandomPicker);
            emit(json, &status, || render_status(&status, palette))
        }
        Commands::Rules {} => {
            println!("{}", render_rules(tracker.config(), palette));
            Ok(())
        }
    }
}

/// Prints either the JSON form of `value` or the rendered text.
fn emit<T: Serialize>(
    json: bool,
    value: &T,
    render: impl FnOnce() -> String,
) -> Result<(), TrackerError> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?
        );
    } else {
        println!("{}", render());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Args, Commands, TasksCommand};

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_negative_check_in_for_range_check() {
        let args = Args::try_parse_from(["zilv", "check-in", "-1"]).unwrap();
        assert!(matches!(args.commands, Commands::CheckIn { completed: -1 }));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["zilv", "tasks", "set", "看书，跑步", "学习", "--json"]).unwrap();
        assert!(args.json);
        match args.commands {
            Commands::Tasks {
                command: TasksCommand::Set { tasks },
            } => assert_eq!(tasks, vec!["看书，跑步", "学习"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn tasks_set_requires_input() {
        assert!(Args::try_parse_from(["zilv", "tasks", "set"]).is_err());
    }
}
