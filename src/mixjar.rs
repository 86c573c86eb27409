//! Unified Mixjar interface.
//!
//! Builds both provider clients from one configuration.

use crate::api::{HearthisApi, MixcloudApi};
use crate::error::Result;
use crate::http::{HttpClientFactory, HttpConfig, HttpLogLevel, DEFAULT_CONNECTION_TIMEOUT_MS};

/// Construction parameters for [`Mixjar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixjarConfig {
    /// Mixcloud OAuth access token. Hearthis ignores it.
    pub access_token: Option<String>,

    /// Traffic logging verbosity. Defaults to [`HttpLogLevel::None`].
    pub log_level: HttpLogLevel,

    /// Connection timeout in milliseconds. Defaults to 60 000; zero and
    /// negative values are rejected.
    pub connection_timeout_ms: i64,
}

impl Default for MixjarConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            log_level: HttpLogLevel::None,
            connection_timeout_ms: DEFAULT_CONNECTION_TIMEOUT_MS,
        }
    }
}

/// Both catalogs behind one value.
///
/// The two clients share one connection pool but are otherwise
/// independent.
///
/// # Example
///
/// ```rust,no_run
/// use mixjar::{MixcloudPaging, Mixjar, MixjarConfig, Paging};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let jar = Mixjar::new(MixjarConfig::default())?;
///     let paging = Paging::default();
///     let mixcloud_paging = MixcloudPaging::default();
///
///     let (hearthis, mixcloud) = tokio::join!(
///         jar.hearthis().search_track("house", &paging),
///         jar.mixcloud().search_cloudcasts("house", &mixcloud_paging),
///     );
///     println!("{} Hearthis tracks", hearthis?.len());
///     println!("{} Mixcloud cloudcasts", mixcloud?.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Mixjar {
    mixcloud: MixcloudApi,
    hearthis: HearthisApi,
}

impl Mixjar {
    /// Build both clients.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the connection timeout is not positive.
    pub fn new(config: MixjarConfig) -> Result<Self> {
        let http = HttpClientFactory::new(HttpConfig {
            log_level: config.log_level,
            connection_timeout_ms: config.connection_timeout_ms,
        })
        .build()?;

        Ok(Self {
            mixcloud: MixcloudApi::with_client(http.clone(), config.access_token)?,
            hearthis: HearthisApi::with_client(http)?,
        })
    }

    /// Mixcloud client.
    pub fn mixcloud(&self) -> &MixcloudApi {
        &self.mixcloud
    }

    /// Hearthis client.
    pub fn hearthis(&self) -> &HearthisApi {
        &self.hearthis
    }
}
