use chrono::Local;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{ConfigError, VaultError, config_io, vault_io};
use crate::model::settings::Settings;
use crate::model::task::Task;
use crate::ops::toggle::{EditorPosition, new_cursor_position, toggle_line};
use crate::query::{Query, explain_results};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Vault(#[from] VaultError),
    #[error("could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    let settings = config_io::read_settings(&cli.config)?;
    match cli.command {
        Commands::Toggle(args) => cmd_toggle(args, &settings, cli.json),
        Commands::Query(args) => cmd_query(args, &settings, cli.json),
        Commands::Explain(args) => cmd_explain(args, &settings, cli.json),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

pub fn cmd_toggle(args: ToggleArgs, settings: &Settings, json: bool) -> Result<(), CliError> {
    let registry = settings.status_registry();
    let mut lines = vault_io::read_lines(&args.file)?;
    let index = vault_io::check_line_number(&args.file, &lines, args.line)?;

    let path = args.file.to_string_lossy();
    let today = Local::now().date_naive();
    let insertion = toggle_line(&lines[index], &path, &registry, settings, today);
    let cursor = new_cursor_position(
        EditorPosition {
            line: index,
            ch: lines[index].chars().count(),
        },
        &insertion,
    );

    lines.splice(index..index + 1, insertion.text.iter().cloned());
    vault_io::write_lines(&args.file, &lines)?;

    if json {
        let out = ToggleJson {
            lines: insertion.text,
            cursor: cursor.into(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for line in &insertion.text {
            println!("{}", line);
        }
        println!("cursor: line {}, ch {}", cursor.line + 1, cursor.ch);
    }
    Ok(())
}

pub fn cmd_query(args: QueryArgs, settings: &Settings, json: bool) -> Result<(), CliError> {
    let registry = settings.status_registry();

    let mut tasks: Vec<Task> = Vec::new();
    for file in &args.files {
        let lines = vault_io::read_lines(file)?;
        let path = file.to_string_lossy();
        tasks.extend(vault_io::collect_tasks(&path, &lines, &registry, settings));
    }

    // The global query narrows the task pool before the block query runs.
    let global_query = Query::from_source(&settings.global_query);
    let tasks: Vec<Task> = tasks
        .into_iter()
        .filter(|task| global_query.filters().iter().all(|f| f.matches(task)))
        .collect();

    let query = Query::from_source(&args.source);
    if let Some(error) = query.error() {
        eprintln!("Query has an error:\n{}", error);
    }
    let groups = query.apply(&tasks);

    if json {
        let out = QueryReportJson::from_groups(&groups);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", groups);
    }
    Ok(())
}

pub fn cmd_explain(args: ExplainArgs, settings: &Settings, json: bool) -> Result<(), CliError> {
    let query = Query::from_source(&args.source);
    let explanation = explain_results(&query, settings);

    if json {
        let out = ExplainJson { explanation };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", explanation);
    }
    Ok(())
}
