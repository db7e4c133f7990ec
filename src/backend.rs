//! Lazily constructed handle to the hosted backend (auth and data API).
//!
//! Nothing on the page talks to the backend yet. [`ClientFactory`] is provided
//! through context so components can pick it up once they need it.

use std::{
    fmt,
    sync::{Arc, LazyLock, Mutex, PoisonError},
};

use http::{header, HeaderMap, HeaderValue};
use thiserror::Error;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const KEY_VAR: &str = "SUPABASE_KEY";

/// Rate limit applied to the realtime channel, should one ever be opened.
pub const REALTIME_EVENTS_PER_SECOND: u32 = 2;

pub static GLOBAL_CLIENT_FACTORY: LazyLock<Arc<ClientFactory>> =
    LazyLock::new(|| Arc::new(ClientFactory::from_env()));

/// Returns the process-wide client, building it from the environment on first use.
pub fn get_client() -> Result<Arc<BackendClient>, ConfigError> {
    GLOBAL_CLIENT_FACTORY.get_client()
}

// Messages never carry the configured values, only the variable names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Backend not configured. Please set SUPABASE_URL and SUPABASE_KEY in your environment.")]
    MissingCredentials,
    #[error("SUPABASE_KEY contains characters that cannot be sent in a request header")]
    InvalidCredential,
}

#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    url: String,
    key: String,
}

impl BackendConfig {
    /// Reads both variables through `lookup`. Missing and empty values are treated alike.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(URL_VAR)
            .map(|s| s.trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());
        let key = lookup(KEY_VAR).filter(|s| !s.is_empty());
        match (url, key) {
            (Some(url), Some(key)) => Ok(Self { url, key }),
            _ => Err(ConfigError::MissingCredentials),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthOptions {
    /// When false, sessions are kept in memory only and never written to local storage.
    pub persist_session: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealtimeOptions {
    pub events_per_second: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    pub auth: AuthOptions,
    pub realtime: RealtimeOptions,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            auth: AuthOptions {
                persist_session: false,
            },
            realtime: RealtimeOptions {
                events_per_second: REALTIME_EVENTS_PER_SECOND,
            },
        }
    }
}

/// A configured but unconnected backend client.
///
/// Building one only prepares request headers; no connection is opened.
#[derive(Debug)]
pub struct BackendClient {
    url: String,
    options: ClientOptions,
    headers: HeaderMap,
}

impl BackendClient {
    pub fn new(config: BackendConfig, options: ClientOptions) -> Result<Self, ConfigError> {
        let BackendConfig { url, key } = config;

        let mut api_key =
            HeaderValue::from_str(&key).map_err(|_| ConfigError::InvalidCredential)?;
        api_key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|_| ConfigError::InvalidCredential)?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(header::AUTHORIZATION, bearer);

        Ok(Self {
            url,
            options,
            headers,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn options(&self) -> ClientOptions {
        self.options
    }

    /// Headers every request to the backend must carry. Credential values are marked sensitive.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Builds a [`BackendClient`] on first request and hands out the same instance afterwards.
///
/// A failed build caches nothing, so a later call tries again.
pub struct ClientFactory {
    lookup: Lookup,
    client: Mutex<Option<Arc<BackendClient>>>,
}

impl ClientFactory {
    pub fn from_env() -> Self {
        Self::with_lookup(env_lookup)
    }

    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Box::new(lookup),
            client: Mutex::new(None),
        }
    }

    pub fn get_client(&self) -> Result<Arc<BackendClient>, ConfigError> {
        // held across construction so two callers can't both build a client
        let mut cached = self.client.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = cached.as_ref() {
            return Ok(Arc::clone(client));
        }

        let config = BackendConfig::from_lookup(&self.lookup).inspect_err(|_| {
            log::warn!("backend client requested but {URL_VAR} or {KEY_VAR} is not set");
        })?;
        log::debug!("constructing backend client");
        let client = Arc::new(BackendClient::new(config, ClientOptions::default())?);
        *cached = Some(Arc::clone(&client));
        Ok(client)
    }

    pub fn is_initialized(&self) -> bool {
        self.client
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl Default for ClientFactory {
    fn default() -> Self {
        Self::from_env()
    }
}

impl fmt::Debug for ClientFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientFactory")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        collections::HashMap,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Once,
        },
    };

    static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct CapturingLogger;

    impl log::Log for CapturingLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            CAPTURED.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    fn capture_logs() {
        static LOGGER: CapturingLogger = CapturingLogger;
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            log::set_logger(&LOGGER).expect("no other logger installed in tests");
            log::set_max_level(log::LevelFilter::Trace);
        });
    }

    type FakeEnv = Arc<Mutex<HashMap<String, String>>>;

    fn fake_env(pairs: &[(&str, &str)]) -> FakeEnv {
        Arc::new(Mutex::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    fn factory_for(env: &FakeEnv) -> ClientFactory {
        let env = Arc::clone(env);
        ClientFactory::with_lookup(move |name| env.lock().unwrap().get(name).cloned())
    }

    fn lookup(
        url: Option<&'static str>,
        key: Option<&'static str>,
    ) -> impl Fn(&str) -> Option<String> {
        move |name| match name {
            URL_VAR => url.map(str::to_string),
            KEY_VAR => key.map(str::to_string),
            _ => None,
        }
    }

    #[test]
    fn test_config_requires_both_values() {
        assert!(BackendConfig::from_lookup(lookup(Some("https://x.test"), Some("k"))).is_ok());
        assert_eq!(
            BackendConfig::from_lookup(lookup(None, Some("k"))),
            Err(ConfigError::MissingCredentials)
        );
        assert_eq!(
            BackendConfig::from_lookup(lookup(Some("https://x.test"), None)),
            Err(ConfigError::MissingCredentials)
        );
        assert_eq!(
            BackendConfig::from_lookup(lookup(Some("https://x.test"), Some(""))),
            Err(ConfigError::MissingCredentials)
        );
        assert_eq!(
            BackendConfig::from_lookup(lookup(Some(""), Some("k"))),
            Err(ConfigError::MissingCredentials)
        );
    }

    #[test]
    fn test_error_names_variables_without_values() {
        let env = fake_env(&[(URL_VAR, "https://secret-project.test"), (KEY_VAR, "")]);
        let factory = factory_for(&env);

        let msg = factory.get_client().unwrap_err().to_string();
        assert!(msg.contains(URL_VAR));
        assert!(msg.contains(KEY_VAR));
        assert!(!msg.contains("secret-project"));
    }

    #[test]
    fn test_missing_config_fails_every_time() {
        let env = fake_env(&[(URL_VAR, "https://x.test"), (KEY_VAR, "")]);
        let factory = factory_for(&env);

        for _ in 0..3 {
            assert_eq!(
                factory.get_client().unwrap_err(),
                ConfigError::MissingCredentials
            );
            assert!(!factory.is_initialized());
        }
    }

    #[test]
    fn test_failed_attempt_does_not_poison_cache() {
        let env = fake_env(&[(URL_VAR, "https://x.test")]);
        let factory = factory_for(&env);
        assert!(factory.get_client().is_err());

        env.lock()
            .unwrap()
            .insert(KEY_VAR.to_string(), "anon-key".to_string());
        let client = factory.get_client().expect("configured on retry");
        assert_eq!(client.url(), "https://x.test");
        assert!(factory.is_initialized());
    }

    #[test]
    fn test_client_is_cached_instance() {
        let env = fake_env(&[(URL_VAR, "https://x.test"), (KEY_VAR, "anon-key")]);
        let factory = factory_for(&env);

        let first = factory.get_client().unwrap();
        let second = factory.get_client().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cached_client_ignores_env_changes() {
        let env = fake_env(&[(URL_VAR, "https://x.test"), (KEY_VAR, "anon-key")]);
        let factory = factory_for(&env);
        let first = factory.get_client().unwrap();

        {
            let mut env = env.lock().unwrap();
            env.insert(URL_VAR.to_string(), "https://other.test".to_string());
            env.remove(KEY_VAR);
        }

        let second = factory.get_client().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.url(), "https://x.test");
    }

    #[test]
    fn test_cached_client_skips_lookup() {
        let reads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&reads);
        let factory = ClientFactory::with_lookup(move |name| {
            counter.fetch_add(1, Ordering::SeqCst);
            match name {
                URL_VAR => Some("https://x.test".to_string()),
                KEY_VAR => Some("anon-key".to_string()),
                _ => None,
            }
        });

        factory.get_client().unwrap();
        let after_first = reads.load(Ordering::SeqCst);
        assert_eq!(after_first, 2);

        factory.get_client().unwrap();
        factory.get_client().unwrap();
        assert_eq!(reads.load(Ordering::SeqCst), after_first);
    }

    #[test]
    fn test_fixed_client_options() {
        let env = fake_env(&[(URL_VAR, "https://x.test/"), (KEY_VAR, "anon-key")]);
        let client = factory_for(&env).get_client().unwrap();

        let options = client.options();
        assert!(!options.auth.persist_session);
        assert_eq!(options.realtime.events_per_second, 2);
        assert_eq!(client.url(), "https://x.test");
    }

    #[test]
    fn test_headers_carry_key_and_hide_it() {
        let env = fake_env(&[(URL_VAR, "http://localhost:54321"), (KEY_VAR, "anon-key")]);
        let client = factory_for(&env).get_client().unwrap();

        let headers = client.headers();
        assert_eq!(headers["apikey"], "anon-key");
        assert_eq!(headers[header::AUTHORIZATION], "Bearer anon-key");
        assert!(headers["apikey"].is_sensitive());
        assert!(headers[header::AUTHORIZATION].is_sensitive());

        let debug = format!("{client:?}");
        assert!(!debug.contains("anon-key"));
    }

    #[test]
    fn test_slash_only_url_is_missing() {
        assert_eq!(
            BackendConfig::from_lookup(lookup(Some("/"), Some("k"))),
            Err(ConfigError::MissingCredentials)
        );
        assert_eq!(
            BackendConfig::from_lookup(lookup(Some("///"), Some("k"))),
            Err(ConfigError::MissingCredentials)
        );
    }

    #[test]
    fn test_logs_never_contain_url_or_key() {
        capture_logs();

        let env = fake_env(&[
            (URL_VAR, "https://log-check-7f3a.test"),
            (KEY_VAR, "log-check-key-91bd"),
        ]);
        factory_for(&env).get_client().unwrap();

        let env = fake_env(&[(URL_VAR, "https://log-check-missing-c2e0.test")]);
        assert!(factory_for(&env).get_client().is_err());

        let captured = CAPTURED.lock().unwrap();
        assert!(captured
            .iter()
            .any(|line| line == "constructing backend client"));
        assert!(captured.iter().any(|line| line.contains("is not set")));
        for line in captured.iter() {
            assert!(!line.contains("log-check"), "leaked configuration: {line}");
        }
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let env = fake_env(&[(URL_VAR, "https://x.test"), (KEY_VAR, "bad\nkey")]);
        let factory = factory_for(&env);

        assert_eq!(
            factory.get_client().unwrap_err(),
            ConfigError::InvalidCredential
        );
        assert!(!factory.is_initialized());
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = BackendConfig::from_lookup(|name| match name {
            URL_VAR => Some("https://x.test".to_string()),
            KEY_VAR => Some("anon-key".to_string()),
            _ => None,
        })
        .unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("https://x.test"));
        assert!(!debug.contains("anon-key"));
    }
}
