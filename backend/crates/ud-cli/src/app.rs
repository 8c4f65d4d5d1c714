use crate::{
    Client,
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliErrorResult},
    logger, output,
};

use ud_config::Config;
use ud_core::{Directory, DirectorySource, KeyValueStore, Page, UserDraft, UserId};
use ud_store::JsonFileStore;

use std::process::ExitCode;

use chrono::Utc;
use log::{debug, info};
use serde_json::Value;

/// Result of one command, before rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub body: Value,
    pub success: bool,
}

impl Outcome {
    fn ok(body: Value) -> Self {
        Self {
            body,
            success: true,
        }
    }

    fn rejected(body: Value) -> Self {
        Self {
            body,
            success: false,
        }
    }
}

/// Load config, start logging, populate the directory and run `cli.command`
pub async fn run(cli: Cli) -> CliErrorResult<ExitCode> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(dir) = log_file.as_ref().and_then(|path| path.parent())
        && !dir.exists()
    {
        std::fs::create_dir_all(dir).map_err(|e| CliError::CreateDir {
            path: dir.display().to_string(),
            source: e,
        })?;
    }
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    let base_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.remote.base_url.clone());
    let client = Client::with_timeout(&base_url, config.remote.timeout())?;

    let store_path = config.store_path()?;
    info!("Using local store {}", store_path.display());
    let mut directory = Directory::new(JsonFileStore::new(store_path));
    directory.initialize(&client).await;

    let outcome = execute(&mut directory, &client, cli.command).await?;

    if let Some(toast) = directory.state().active_toast(Utc::now()) {
        eprintln!("{}", output::format_toast(toast));
    }
    println!("{}", output::to_json(&outcome.body, cli.pretty)?);

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Run one command against an initialized directory
pub async fn execute<S: KeyValueStore>(
    directory: &mut Directory<S>,
    source: &dyn DirectorySource,
    command: Commands,
) -> CliErrorResult<Outcome> {
    debug!("Executing {:?}", command);

    match command {
        Commands::List { search } => {
            if let Some(term) = search {
                directory.set_search(term);
            }
            Ok(Outcome::ok(output::users_value(&directory.visible_users())?))
        }

        Commands::Show { id } => {
            let id = UserId::parse(&id);
            directory.navigate(Page::Details(id.clone()));
            let view = directory.lookup(&id, source).await;
            Ok(Outcome::ok(output::detail_value(&view)?))
        }

        Commands::Add {
            name,
            email,
            phone,
            company,
        } => {
            directory.navigate(Page::Add);
            match directory.add_record(UserDraft::new(name, email, phone, company)) {
                Ok(record) => Ok(Outcome::ok(serde_json::to_value(&record)?)),
                Err(e) => match e.field_errors() {
                    Some(errors) => Ok(Outcome::rejected(output::field_errors_value(errors)?)),
                    None => Err(e.into()),
                },
            }
        }
    }
}
