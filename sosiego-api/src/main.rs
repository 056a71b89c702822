use serde::Deserialize;
use server::{ServerState, Settings, mail::EmailJsRelay};
use sosiego_common::{
    model::{
        auth::SessionLifetime,
        operator::{InvalidOperatorEmailError, OperatorEmail, PasswordDigest, PasswordHashError},
        post::Post,
        resource::Resource,
    },
    snowflake::NodeId,
};
use sosiego_db::{Collection, CredentialStore, DbClient, DbError, MemoryStore};
use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};
use thiserror::Error;
use time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod server;

#[derive(Debug, Error)]
enum InitError {
    #[error("Error parsing .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("Error parsing environment: {0}")]
    Envy(#[from] envy::Error),
    #[error("Snowflake node id {0} does not fit in 10 bits")]
    NodeId(u16),
    #[error("Error setting up the database: {0}")]
    Database(#[from] DbError),
    #[error("Bootstrap operator email is invalid: {0}")]
    BootstrapEmail(#[from] InvalidOperatorEmailError),
    #[error("Hashing the bootstrap operator password failed: {0}")]
    BootstrapPassword(#[from] PasswordHashError),
    #[error("Error building the mail relay client: {0}")]
    MailClient(reqwest::Error),
    #[error("Error binding tcp listener: {0}")]
    TcpBind(std::io::Error),
    #[error("Error serving server: {0}")]
    TcpServe(std::io::Error),
}

#[derive(Clone, Eq, PartialEq, Deserialize)]
struct Env {
    server_address: IpAddr,
    server_port: u16,
    database_url: Option<String>,
    #[serde(default = "default_max_connections")]
    database_max_connections: u32,
    #[serde(default)]
    snowflake_node_id: u16,
    #[serde(default = "default_emailjs_endpoint")]
    emailjs_endpoint: String,
    emailjs_service_id: String,
    emailjs_template_id: String,
    emailjs_public_key: String,
    emailjs_private_key: Option<String>,
    #[serde(default = "default_contact_recipient")]
    contact_recipient: String,
    /// Zero keeps sessions until sign-out.
    #[serde(default = "default_session_ttl_hours")]
    session_ttl_hours: u32,
    #[serde(default = "default_secure_cookies")]
    secure_cookies: bool,
    bootstrap_operator_email: Option<String>,
    bootstrap_operator_password: Option<String>,
}

fn default_max_connections() -> u32 {
    5
}

fn default_emailjs_endpoint() -> String {
    "https://api.emailjs.com".to_owned()
}

fn default_contact_recipient() -> String {
    "Lorena".to_owned()
}

fn default_session_ttl_hours() -> u32 {
    12
}

fn default_secure_cookies() -> bool {
    true
}

fn install_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "sosiego_api=debug,\
                sosiego_common=debug,\
                sosiego_db=debug,\
                tower_http=debug,axum::rejection=trace,sqlx=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn get_env() -> Result<Env, InitError> {
    if let Err(e) = dotenvy::dotenv() {
        if e.not_found() {
            debug!("No .dotenv file found");
        } else {
            return Err(e.into());
        }
    }

    envy::from_env().map_err(InitError::from)
}

struct Stores {
    posts: Collection<Post>,
    resources: Collection<Resource>,
    credentials: Arc<dyn CredentialStore>,
}

async fn open_stores(env: &Env) -> Result<Stores, InitError> {
    let node_id =
        NodeId::new(env.snowflake_node_id).ok_or(InitError::NodeId(env.snowflake_node_id))?;

    if let Some(url) = &env.database_url {
        let client =
            Arc::new(DbClient::connect(url, env.database_max_connections, node_id).await?);
        client.migrate().await?;
        info!("Connected to the database");

        Ok(Stores {
            posts: Collection::<Post>::new(client.clone()),
            resources: Collection::<Resource>::new(client.clone()),
            credentials: client,
        })
    } else {
        warn!("DATABASE_URL is not set, content only lives in memory");
        let store = Arc::new(MemoryStore::new(node_id));

        Ok(Stores {
            posts: Collection::<Post>::new(store.clone()),
            resources: Collection::<Resource>::new(store.clone()),
            credentials: store,
        })
    }
}

async fn bootstrap_operator(env: &Env, credentials: &dyn CredentialStore) -> Result<(), InitError> {
    match (&env.bootstrap_operator_email, &env.bootstrap_operator_password) {
        (Some(email), Some(password)) => {
            let email = OperatorEmail::new(email)?;
            let digest = PasswordDigest::hash(password)?;
            let id = credentials.upsert_operator(&email, &digest).await?;
            info!(operator = %id, %email, "Bootstrap operator is ready");
        }
        (None, None) => debug!("No bootstrap operator configured"),
        _ => warn!(
            "BOOTSTRAP_OPERATOR_EMAIL and BOOTSTRAP_OPERATOR_PASSWORD must be set together, skipping"
        ),
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Listening for ctrl-c failed");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), InitError> {
    install_tracing();
    let env = get_env()?;

    let stores = open_stores(&env).await?;
    bootstrap_operator(&env, stores.credentials.as_ref()).await?;

    let relay = EmailJsRelay::new(
        &env.emailjs_endpoint,
        server::mail::EmailJsKeys {
            service_id: env.emailjs_service_id.clone(),
            template_id: env.emailjs_template_id.clone(),
            public_key: env.emailjs_public_key.clone(),
            private_key: env.emailjs_private_key.clone(),
        },
    )
    .map_err(InitError::MailClient)?;

    let settings = Settings {
        contact_recipient: env.contact_recipient.clone(),
        session_lifetime: SessionLifetime::new(Duration::hours(i64::from(env.session_ttl_hours))),
        secure_cookies: env.secure_cookies,
    };

    let state = ServerState {
        posts: stores.posts,
        resources: stores.resources,
        credentials: stores.credentials,
        mail: Arc::new(relay),
        submissions: Arc::default(),
        settings: Arc::new(settings),
    };

    let tracing_layer = TraceLayer::new_for_http();
    let app = server::routes().layer(tracing_layer).with_state(state);

    let server_address = SocketAddr::new(env.server_address, env.server_port);
    let listener = tokio::net::TcpListener::bind(server_address)
        .await
        .map_err(InitError::TcpBind)?;
    info!(%server_address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(InitError::TcpServe)?;

    Ok(())
}
