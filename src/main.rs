use anyhow::{Context, Result, bail};
use quill_core::{
    application::{
        commands::comments::ReconcileArticleCommand,
        ports::{security::PasswordHasher, time::Clock},
        services::{ApplicationServices, Repositories},
    },
    config::AppConfig,
    infrastructure::{
        database,
        repositories::{
            PostgresArticleReadRepository, PostgresArticleWriteRepository,
            PostgresCategoryRepository, PostgresCommentRepository, PostgresProfileRepository,
            PostgresUserRepository,
        },
        security::password::Argon2PasswordHasher,
        time::SystemClock,
    },
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: quill_core <migrate | reconcile [article_id]>";

enum Command {
    Migrate,
    Reconcile(Option<i64>),
}

impl Command {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        match args.next().as_deref() {
            Some("migrate") => Ok(Self::Migrate),
            Some("reconcile") => {
                let article_id = args
                    .next()
                    .map(|raw| raw.parse::<i64>())
                    .transpose()
                    .context("article id must be an integer")?;
                Ok(Self::Reconcile(article_id))
            }
            _ => bail!(USAGE),
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let command = Command::parse(std::env::args().skip(1))?;
    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("connecting to database")?;

    if config.run_migrations() || matches!(command, Command::Migrate) {
        database::run_migrations(&pool).await?;
        tracing::info!("migrations applied");
    }

    let comments = Arc::new(PostgresCommentRepository::new(pool.clone()));
    let repos = Repositories {
        article_write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        category: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        comment: comments.clone(),
        comment_moderation: comments,
        user: Arc::new(PostgresUserRepository::new(pool.clone())),
        profile: Arc::new(PostgresProfileRepository::new(pool)),
    };

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let services =
        ApplicationServices::new(repos, password_hasher, clock, config.max_page_size());

    match command {
        Command::Migrate => {}
        Command::Reconcile(Some(article_id)) => {
            let result = services
                .comment_commands
                .reconcile_article(ReconcileArticleCommand { article_id })
                .await?;
            tracing::info!(
                article_id = result.article_id,
                recorded = result.recorded,
                actual = result.actual,
                "article reconciled"
            );
        }
        Command::Reconcile(None) => {
            let corrected = services.comment_commands.reconcile_all().await?;
            for result in &corrected {
                println!(
                    "article {}: {} -> {}",
                    result.article_id, result.recorded, result.actual
                );
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
