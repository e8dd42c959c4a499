//! Builders wiring outbound adapters into the HTTP state.

use std::io;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{info, warn};
use zeroize::Zeroizing;

use flashcards::domain::ports::{
    FlashcardRepository, PasswordHasher, RemoteTranslationSource, TokenCodec, UserRepository,
};
use flashcards::domain::{AccountService, FlashcardService, TranslationResolver};
use flashcards::inbound::http::state::HttpState;
use flashcards::outbound::memory::{InMemoryFlashcardRepository, InMemoryUserRepository};
use flashcards::outbound::persistence::{
    DbPool, DieselFlashcardRepository, DieselUserRepository, run_pending_migrations,
};
use flashcards::outbound::security::{Argon2PasswordHasher, Hs256TokenCodec};
use flashcards::outbound::translation::HttpTranslationSource;

use super::AppSettings;

/// Repositories backing the services.
pub(crate) struct Repositories {
    pub(crate) users: Arc<dyn UserRepository>,
    pub(crate) flashcards: Arc<dyn FlashcardRepository>,
}

impl Repositories {
    fn in_memory(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new(clock.clone())),
            flashcards: Arc::new(InMemoryFlashcardRepository::new(clock)),
        }
    }

    fn diesel(pool: DbPool) -> Self {
        Self {
            users: Arc::new(DieselUserRepository::new(pool.clone())),
            flashcards: Arc::new(DieselFlashcardRepository::new(pool)),
        }
    }
}

/// Choose PostgreSQL when a database URL is configured, otherwise memory.
///
/// Migrations run before the pool is handed out.
pub(crate) async fn build_repositories(settings: &AppSettings) -> io::Result<Repositories> {
    let Some(database_url) = settings.database_url() else {
        warn!("FLASHCARDS_DATABASE_URL not set; keeping data in memory (dev only)");
        return Ok(Repositories::in_memory(Arc::new(DefaultClock)));
    };

    run_pending_migrations(database_url)
        .await
        .map_err(|err| io::Error::other(format!("database migration failed: {err}")))?;
    let pool = DbPool::new(settings.pool_config(database_url))
        .await
        .map_err(|err| io::Error::other(format!("database pool: {}", err.into_message())))?;
    info!("connected to PostgreSQL");
    Ok(Repositories::diesel(pool))
}

/// Build the remote translation adapter from settings.
pub(crate) fn build_remote_source(
    settings: &AppSettings,
) -> io::Result<Arc<dyn RemoteTranslationSource>> {
    let endpoint = settings.translation_endpoint().map_err(io::Error::other)?;
    let source = HttpTranslationSource::new(endpoint, settings.translation_timeout())
        .map_err(|err| io::Error::other(format!("translation client: {err}")))?;
    Ok(Arc::new(source))
}

/// Build the token codec with the resolved signing secret.
pub(crate) fn build_token_codec(
    settings: &AppSettings,
    secret: Zeroizing<Vec<u8>>,
) -> Arc<dyn TokenCodec> {
    Arc::new(Hs256TokenCodec::new(
        secret,
        settings.token_ttl(),
        Arc::new(DefaultClock),
    ))
}

/// Assemble domain services into the handler state.
pub(crate) fn build_http_state(
    repositories: Repositories,
    remote: Arc<dyn RemoteTranslationSource>,
    tokens: Arc<dyn TokenCodec>,
) -> HttpState {
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let accounts = Arc::new(AccountService::new(repositories.users, hasher, tokens));
    let flashcards = Arc::new(FlashcardService::new(
        repositories.flashcards,
        TranslationResolver::new(remote),
    ));

    HttpState {
        accounts: accounts.clone(),
        accounts_query: accounts,
        flashcards: flashcards.clone(),
        flashcards_query: flashcards.clone(),
        translations: flashcards,
    }
}
