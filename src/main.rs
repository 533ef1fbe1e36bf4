use std::time::Duration;

use axum_extra::extract::cookie::Key;
use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use quizgen::{
    completion::{GroqClient, GroqConfig},
    names,
    services::QuizGenerator,
    session::MemorySessionStore,
    AppState,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = "0.0.0.0:5000")]
    address: String,

    /// API key for the completion API.
    #[arg(long, env, hide_env_values = true)]
    groq_api_key: String,

    /// Base URL of the OpenAI-compatible completion API.
    #[arg(long, env, default_value = names::DEFAULT_API_URL)]
    groq_api_url: String,

    /// Model used to generate quizzes.
    #[arg(long, env = "GROQ_MODEL", default_value = names::DEFAULT_MODEL)]
    model: String,

    /// Seconds to wait for the completion API before giving up.
    #[arg(long, env, default_value_t = names::DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout_secs: u64,

    /// Ask the completion API for JSON-only output.
    #[arg(long, env)]
    json_mode: bool,

    /// Secret used to sign session cookies (at least 64 bytes). A random one
    /// is generated when unset.
    #[arg(long, env, hide_env_values = true)]
    session_secret: Option<String>,

    /// Minutes of inactivity after which a quiz session is dropped.
    #[arg(long, env, default_value_t = names::DEFAULT_SESSION_TTL_MINUTES)]
    session_ttl_minutes: u64,

    /// Mark session cookies as Secure (serve over HTTPS).
    #[arg(long, env)]
    secure_cookies: bool,
}

fn cookie_key(secret: Option<&str>) -> color_eyre::Result<Key> {
    match secret {
        Some(secret) => Key::try_from(secret.as_bytes())
            .map_err(|_| eyre!("SESSION_SECRET must be at least 64 bytes long")),
        None => {
            tracing::warn!("SESSION_SECRET is not set, using a random key for this process");
            Ok(Key::generate())
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "quizgen=debug,tower=info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let client = GroqClient::new(GroqConfig {
        api_key: args.groq_api_key,
        api_url: args.groq_api_url,
        model: args.model,
        timeout: Duration::from_secs(args.request_timeout_secs),
        json_mode: args.json_mode,
    })
    .wrap_err("could not build completion client")?;
    tracing::info!("generating quizzes with model {}", client.model());

    let state = AppState {
        generator: QuizGenerator::new(client),
        sessions: MemorySessionStore::new(Duration::from_secs(args.session_ttl_minutes * 60)),
        cookie_key: cookie_key(args.session_secret.as_deref())?,
        secure_cookies: args.secure_cookies,
    };

    let listener = tokio::net::TcpListener::bind(&args.address)
        .await
        .wrap_err_with(|| format!("could not bind to {}", args.address))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, quizgen::router(state)).await?;

    Ok(())
}
