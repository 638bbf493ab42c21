use cached::proc_macro::cached;
use config::{Config, ConfigError, Environment, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

pub use tracing;

#[cfg(feature = "report-macros")]
pub use hangout_result;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new(build_config().expect("Failed to load configuration."))
});

fn build_config() -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(File::from_str(
        include_str!("../Hangout.toml"),
        FileFormat::Toml,
    ));

    if std::path::Path::new("Hangout.toml").exists() {
        builder = builder.add_source(File::new("Hangout.toml", FileFormat::Toml));
    }

    builder = builder.add_source(
        Environment::with_prefix("HANGOUT")
            .separator("__")
            .try_parsing(true),
    );

    // Conventional hosting variable takes precedence
    if let Some(port) = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
    {
        builder = builder.set_override("api.port", i64::from(port))?;
    }

    builder.build()
}

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub sqlite: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Api {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Logging {
    pub filter: String,
    pub json: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub api: Api,
    pub logging: Logging,
}

impl Api {
    /// Directory to serve static files from, if enabled
    pub fn static_dir(&self) -> Option<&str> {
        if self.static_dir.is_empty() {
            None
        } else {
            Some(&self.static_dir)
        }
    }
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read()
        .await
        .try_deserialize::<Settings>()
        .expect("Configuration is invalid.")
}

/// Configure logging and common Rust variables
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn setup_logging(logging: &Logging) {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if logging.json {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };

    if result.is_err() {
        tracing::debug!("Logging was already configured.");
    }
}

/// Load configuration, set up logging and announce the service
#[macro_export]
macro_rules! configure {
    ($application: ident) => {
        let config = $crate::config().await;
        $crate::setup_logging(&config.logging);

        $crate::tracing::info!(
            "Starting {} [version {}].",
            stringify!($application),
            env!("CARGO_PKG_VERSION")
        );
    };
}

/// Log an unexpected error and convert it into an internal error
#[cfg(feature = "report-macros")]
#[macro_export]
macro_rules! report_internal_error {
    ( $expr: expr ) => {
        $expr.map_err(|error| {
            $crate::tracing::error!(
                "{error:?} ({}:{}:{})",
                file!(),
                line!(),
                column!()
            );

            $crate::hangout_result::create_error!(InternalError)
        })
    };
}

#[cfg(test)]
mod tests {
    use crate::config;

    #[tokio::test]
    async fn default_configuration_loads() {
        let config = config().await;
        assert!(!config.api.host.is_empty());
        assert_eq!(config.api.static_dir(), None);
        assert!(!config.logging.filter.is_empty());
    }

    #[cfg(feature = "report-macros")]
    #[test]
    fn reports_internal_errors() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"));

        let error = report_internal_error!(result).unwrap_err();
        assert!(matches!(
            error.error_type,
            hangout_result::ErrorType::InternalError
        ));
    }
}
