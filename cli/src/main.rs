//! CLI entrypoint for qna-board
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use qna_application::{
    AddAnswerError, AddAnswerInput, AddAnswerUseCase, AuditLogger, CreateQuestionError,
    CreateQuestionInput, CreateQuestionUseCase, DeleteQuestionInput, DeleteQuestionUseCase,
    ListDeleteHistoriesUseCase, ListQuestionsUseCase, NoAuditLogger, RegisterUserInput,
    RegisterUserUseCase, RepositoryError, UpdateUserInput, UpdateUserUseCase,
};
use qna_domain::{QuestionId, Severity};
use qna_infrastructure::config::LOG_LEVELS;
use qna_infrastructure::{ConfigLoader, FileConfig, InMemoryQnaStore, JsonlAuditLogger};
use qna_presentation::{
    Cli, Command, ConsoleFormatter, HistoryCommand, OutputConfig, OutputFormatter,
    QuestionCommand, UserCommand, formatter_for,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const EXIT_DENIED: u8 = 3;
const EXIT_NOT_FOUND: u8 = 4;

/// How a command ended, short of an unexpected error
enum Outcome {
    Done(String),
    Denied(String),
    NotFound(String),
}

impl From<RepositoryError> for Outcome {
    fn from(e: RepositoryError) -> Self {
        Outcome::NotFound(e.to_string())
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&config, cli.verbose)?;
    info!("Starting qna");

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("Config error: {}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }

    let output = OutputConfig::resolve(config.output.format, config.output.color, cli.output);
    if !output.color {
        colored::control::set_override(false);
    }
    let formatter = formatter_for(output.format);

    // === Dependency Injection ===
    let store = Arc::new(match config.storage.snapshot_path() {
        Some(path) => InMemoryQnaStore::open(path)
            .await
            .with_context(|| format!("Failed to open store {}", path.display()))?,
        None => InMemoryQnaStore::new(),
    });
    let audit = audit_logger(&config);

    let outcome = match cli.command {
        Command::User(cmd) => run_user(cmd, &store, &audit, formatter.as_ref()).await?,
        Command::Question(cmd) => run_question(cmd, &store, &audit, formatter.as_ref()).await?,
        Command::History(HistoryCommand::List) => {
            let histories = ListDeleteHistoriesUseCase::new(store.clone())
                .execute()
                .await?;
            Outcome::Done(formatter.histories(&histories))
        }
    };

    Ok(match outcome {
        Outcome::Done(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Outcome::Denied(message) => {
            eprintln!("{}", ConsoleFormatter::access_denied(&message));
            ExitCode::from(EXIT_DENIED)
        }
        Outcome::NotFound(message) => {
            eprintln!("{}", ConsoleFormatter::not_found(&message));
            ExitCode::from(EXIT_NOT_FOUND)
        }
    })
}

/// Initialize logging based on verbosity level and the `[logging]` section
fn init_logging(config: &FileConfig, verbose: u8) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => config
            .logging
            .level
            .as_deref()
            .map(str::to_lowercase)
            .filter(|l| LOG_LEVELS.contains(&l.as_str()))
            .unwrap_or_else(|| "warn".to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(), // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.logging.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "qna.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn audit_logger(config: &FileConfig) -> Arc<dyn AuditLogger> {
    if !config.audit.enabled {
        return Arc::new(NoAuditLogger);
    }
    match JsonlAuditLogger::new(&config.audit.path) {
        Some(logger) => {
            debug!("Audit trail: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoAuditLogger),
    }
}

async fn run_user(
    cmd: UserCommand,
    store: &Arc<InMemoryQnaStore>,
    audit: &Arc<dyn AuditLogger>,
    formatter: &dyn OutputFormatter,
) -> Result<Outcome> {
    match cmd {
        UserCommand::Add {
            user_id,
            password,
            name,
            email,
        } => {
            let mut input = RegisterUserInput::new(user_id, password, name);
            if let Some(email) = email {
                input = input.with_email(email);
            }
            let user = RegisterUserUseCase::new(store.clone())
                .with_audit_logger(audit.clone())
                .execute(input)
                .await?;
            Ok(Outcome::Done(formatter.user(&user)))
        }
        UserCommand::Update(args) => {
            let input = UpdateUserInput {
                user_id: args.user_id,
                login_user: args.login_user,
                password: args.password,
                name: args.name,
                email: args.email,
            };
            match UpdateUserUseCase::new(store.clone()).execute(input).await {
                Ok(user) => Ok(Outcome::Done(formatter.user(&user))),
                Err(e) if e.is_permission_denied() => Ok(Outcome::Denied(e.to_string())),
                Err(e) if e.is_not_found() => Ok(Outcome::NotFound(e.to_string())),
                Err(e) => Err(e.into()),
            }
        }
        UserCommand::List => {
            let users = qna_application::UserRepository::find_all(store.as_ref()).await?;
            Ok(Outcome::Done(formatter.users(&users)))
        }
    }
}

async fn run_question(
    cmd: QuestionCommand,
    store: &Arc<InMemoryQnaStore>,
    audit: &Arc<dyn AuditLogger>,
    formatter: &dyn OutputFormatter,
) -> Result<Outcome> {
    match cmd {
        QuestionCommand::Ask {
            writer,
            title,
            contents,
        } => {
            let result = CreateQuestionUseCase::new(store.clone(), store.clone())
                .with_audit_logger(audit.clone())
                .execute(CreateQuestionInput::new(writer, title, contents))
                .await;
            match result {
                Ok(question) => Ok(Outcome::Done(formatter.question(&question))),
                Err(CreateQuestionError::Repository(e)) if e.is_not_found() => Ok(e.into()),
                Err(e) => Err(e.into()),
            }
        }
        QuestionCommand::Answer {
            question_id,
            writer,
            contents,
        } => {
            let result = AddAnswerUseCase::new(store.clone(), store.clone())
                .with_audit_logger(audit.clone())
                .execute(AddAnswerInput::new(QuestionId(question_id), writer, contents))
                .await;
            match result {
                Ok(answer) => Ok(Outcome::Done(formatter.answer(&answer))),
                Err(AddAnswerError::Repository(e)) if e.is_not_found() => Ok(e.into()),
                Err(e) => Err(e.into()),
            }
        }
        QuestionCommand::List => {
            let questions = ListQuestionsUseCase::new(store.clone()).execute().await?;
            Ok(Outcome::Done(formatter.questions(&questions)))
        }
        QuestionCommand::Show { question_id } => {
            match ListQuestionsUseCase::new(store.clone())
                .find(QuestionId(question_id))
                .await
            {
                Ok(question) => Ok(Outcome::Done(formatter.question(&question))),
                Err(e) if e.is_not_found() => Ok(e.into()),
                Err(e) => Err(e.into()),
            }
        }
        QuestionCommand::Delete { question_id, user } => {
            let result = DeleteQuestionUseCase::new(store.clone(), store.clone(), store.clone())
                .with_audit_logger(audit.clone())
                .execute(DeleteQuestionInput::new(QuestionId(question_id), user))
                .await;
            match result {
                Ok(output) => Ok(Outcome::Done(formatter.histories(&output.histories))),
                Err(e) if e.is_permission_denied() => Ok(Outcome::Denied(e.to_string())),
                Err(e) if e.is_not_found() => Ok(Outcome::NotFound(e.to_string())),
                Err(e) => Err(e.into()),
            }
        }
    }
}
