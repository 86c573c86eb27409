//! Mixcloud API client.
//!
//! Wraps the public Mixcloud API (api.mixcloud.com). Every resource path
//! ends with `/`. An optional OAuth access token is forwarded as the
//! `access_token` query parameter; only [`MixcloudApi::get_me`] requires one.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::request::{Endpoint, QueryParams};
use crate::error::{MixjarError, Result};
use crate::http::{HttpClient, HttpClientFactory, HttpConfig, HttpLogLevel};
use crate::models::{
    MixcloudCategory, MixcloudCloudcast, MixcloudList, MixcloudPlaylist, MixcloudTag, MixcloudUser,
};

/// Base URL for the Mixcloud public API.
pub const MIXCLOUD_BASE_URL: &str = "https://api.mixcloud.com/";

/// Kind of resource a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchType {
    Cloudcast,
    User,
    Tag,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchType::Cloudcast => "cloudcast",
            SearchType::User => "user",
            SearchType::Tag => "tag",
        })
    }
}

/// Page selection for Mixcloud listings.
///
/// Every field is absent by default, which lets Mixcloud apply its own
/// page size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MixcloudPaging {
    /// Maximum number of items.
    pub limit: Option<u32>,
    /// Number of items to skip.
    pub offset: Option<u32>,
    /// Only items created after this instant.
    pub since: Option<DateTime<Utc>>,
    /// Only items created before this instant.
    pub until: Option<DateTime<Utc>>,
}

impl MixcloudPaging {
    /// Page of `limit` items starting at `offset`.
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
            ..Default::default()
        }
    }

    fn apply(&self, params: QueryParams) -> QueryParams {
        params
            .push("limit", self.limit)
            .push("offset", self.offset)
            .push("since", self.since.map(|t| t.timestamp()))
            .push("until", self.until.map(|t| t.timestamp()))
    }
}

/// Mixcloud API client.
///
/// # Example
///
/// ```rust,no_run
/// use mixjar::{MixcloudApi, MixcloudPaging};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = MixcloudApi::new()?;
///     let page = api
///         .get_user_cloudcasts("spartacus", &MixcloudPaging::new(20, 0))
///         .await?;
///     for cloudcast in &page.data {
///         println!("{} ({:?})", cloudcast.name, cloudcast.duration_formatted());
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MixcloudApi {
    http: HttpClient,
    base: Endpoint,
    access_token: Option<String>,
}

impl MixcloudApi {
    /// Create an anonymous client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client.
    pub fn builder() -> MixcloudApiBuilder {
        MixcloudApiBuilder::default()
    }

    /// Create a client around an already configured [`HttpClient`].
    pub fn with_client(http: HttpClient, access_token: Option<String>) -> Result<Self> {
        Ok(Self {
            http,
            base: Endpoint::parse(MIXCLOUD_BASE_URL)?,
            access_token,
        })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        self.base.url().as_str()
    }

    /// Whether an access token is configured.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    async fn fetch<T, I, S>(&self, segments: I, params: QueryParams) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let url = self
            .base
            .clone()
            .join(segments)
            .with_trailing_slash()
            .into_url();
        debug!("Mixcloud GET {}", url);
        let params = params.push("access_token", self.access_token.as_deref());
        self.http.get(url, &params).await
    }

    async fn fetch_list<T, I, S>(
        &self,
        segments: I,
        paging: &MixcloudPaging,
        params: QueryParams,
    ) -> Result<MixcloudList<T>>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let page: MixcloudList<T> = self
            .fetch(segments, paging.apply(params))
            .await?
            .unwrap_or_default();
        debug!(
            "Mixcloud returned {} items (more: {})",
            page.len(),
            page.has_next()
        );
        Ok(page)
    }

    /// Get a user profile.
    pub async fn get_user(&self, username: &str) -> Result<Option<MixcloudUser>> {
        self.fetch([username], QueryParams::new()).await
    }

    /// Get the profile the access token belongs to.
    ///
    /// Fails with [`MixjarError::MissingAccessToken`] when the client was
    /// built without a token.
    pub async fn get_me(&self) -> Result<Option<MixcloudUser>> {
        if self.access_token.is_none() {
            return Err(MixjarError::MissingAccessToken("me".to_string()));
        }
        self.fetch(["me"], QueryParams::new()).await
    }

    /// Get a single cloudcast.
    pub async fn get_cloudcast(
        &self,
        username: &str,
        slug: &str,
    ) -> Result<Option<MixcloudCloudcast>> {
        self.fetch([username, slug], QueryParams::new()).await
    }

    /// Get the cloudcasts uploaded by a user.
    pub async fn get_user_cloudcasts(
        &self,
        username: &str,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudCloudcast>> {
        self.fetch_list([username, "cloudcasts"], paging, QueryParams::new())
            .await
    }

    /// Get the cloudcasts a user favorited.
    pub async fn get_user_favorites(
        &self,
        username: &str,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudCloudcast>> {
        self.fetch_list([username, "favorites"], paging, QueryParams::new())
            .await
    }

    /// Get the cloudcasts a user listened to.
    pub async fn get_user_listens(
        &self,
        username: &str,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudCloudcast>> {
        self.fetch_list([username, "listens"], paging, QueryParams::new())
            .await
    }

    /// Get the followers of a user.
    pub async fn get_user_followers(
        &self,
        username: &str,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudUser>> {
        self.fetch_list([username, "followers"], paging, QueryParams::new())
            .await
    }

    /// Get the users a user follows.
    pub async fn get_user_following(
        &self,
        username: &str,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudUser>> {
        self.fetch_list([username, "following"], paging, QueryParams::new())
            .await
    }

    /// Get the playlists of a user.
    pub async fn get_user_playlists(
        &self,
        username: &str,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudPlaylist>> {
        self.fetch_list([username, "playlists"], paging, QueryParams::new())
            .await
    }

    /// Get a single playlist.
    pub async fn get_playlist(
        &self,
        username: &str,
        slug: &str,
    ) -> Result<Option<MixcloudPlaylist>> {
        self.fetch([username, "playlists", slug], QueryParams::new())
            .await
    }

    /// Get the cloudcasts of a playlist, in playlist order.
    pub async fn get_playlist_cloudcasts(
        &self,
        username: &str,
        slug: &str,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudCloudcast>> {
        self.fetch_list(
            [username, "playlists", slug, "cloudcasts"],
            paging,
            QueryParams::new(),
        )
        .await
    }

    /// Get all categories.
    pub async fn get_categories(&self) -> Result<MixcloudList<MixcloudCategory>> {
        self.fetch_list(["categories"], &MixcloudPaging::default(), QueryParams::new())
            .await
    }

    /// Get a tag.
    pub async fn get_tag(&self, tag: &str) -> Result<Option<MixcloudTag>> {
        self.fetch(["tag", tag], QueryParams::new()).await
    }

    /// Get the popular cloudcasts of a tag.
    pub async fn get_tag_popular(
        &self,
        tag: &str,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudCloudcast>> {
        self.fetch_list(["discover", tag, "popular"], paging, QueryParams::new())
            .await
    }

    /// Get the latest cloudcasts of a tag.
    pub async fn get_tag_latest(
        &self,
        tag: &str,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudCloudcast>> {
        self.fetch_list(["discover", tag, "latest"], paging, QueryParams::new())
            .await
    }

    /// Get the popular cloudcasts.
    pub async fn get_popular(
        &self,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudCloudcast>> {
        self.fetch_list(["popular"], paging, QueryParams::new()).await
    }

    /// Get the cloudcasts trending right now.
    pub async fn get_hot(
        &self,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudCloudcast>> {
        self.fetch_list(["popular", "hot"], paging, QueryParams::new())
            .await
    }

    /// Get the newest cloudcasts.
    pub async fn get_new(
        &self,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudCloudcast>> {
        self.fetch_list(["new"], paging, QueryParams::new()).await
    }

    async fn search<T: DeserializeOwned>(
        &self,
        q: &str,
        kind: SearchType,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<T>> {
        let params = QueryParams::new().set("q", q).set("type", kind);
        self.fetch_list(["search"], paging, params).await
    }

    /// Search cloudcasts.
    pub async fn search_cloudcasts(
        &self,
        q: &str,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudCloudcast>> {
        self.search(q, SearchType::Cloudcast, paging).await
    }

    /// Search users.
    pub async fn search_users(
        &self,
        q: &str,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudUser>> {
        self.search(q, SearchType::User, paging).await
    }

    /// Search tags.
    pub async fn search_tags(
        &self,
        q: &str,
        paging: &MixcloudPaging,
    ) -> Result<MixcloudList<MixcloudTag>> {
        self.search(q, SearchType::Tag, paging).await
    }
}

/// Builder for [`MixcloudApi`].
#[derive(Debug, Clone)]
pub struct MixcloudApiBuilder {
    config: HttpConfig,
    base_url: String,
    access_token: Option<String>,
}

impl Default for MixcloudApiBuilder {
    fn default() -> Self {
        Self {
            config: HttpConfig::default(),
            base_url: MIXCLOUD_BASE_URL.to_string(),
            access_token: None,
        }
    }
}

impl MixcloudApiBuilder {
    /// Set the OAuth access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the traffic logging verbosity.
    pub fn log_level(mut self, log_level: HttpLogLevel) -> Self {
        self.config.log_level = log_level;
        self
    }

    /// Set the connection timeout in milliseconds.
    pub fn connection_timeout_ms(mut self, timeout_ms: i64) -> Self {
        self.config.connection_timeout_ms = timeout_ms;
        self
    }

    /// Point the client at another base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<MixcloudApi> {
        let base = Endpoint::parse(&self.base_url)?;
        let http = HttpClientFactory::new(self.config).build()?;
        Ok(MixcloudApi {
            http,
            base,
            access_token: self.access_token,
        })
    }
}
