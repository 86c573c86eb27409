//! Hearthis API client.
//!
//! Wraps the public Hearthis v2 API (api-v2.hearthis.at). No authentication
//! is required. List endpoints answer with bare JSON arrays; an empty body
//! is returned as an empty list.

use std::fmt;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::request::{Endpoint, QueryParams};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientFactory, HttpConfig, HttpLogLevel};
use crate::models::{
    HearthisCategoryList, HearthisPlaylistList, HearthisTrack, HearthisTrackList, HearthisUser,
    HearthisUserList,
};

/// Base URL for the Hearthis public API.
pub const HEARTHIS_BASE_URL: &str = "https://api-v2.hearthis.at/";

/// Feed ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedType {
    /// Most played tracks.
    Popular,
    /// Latest uploads.
    New,
}

impl FeedType {
    /// Value sent as the `type` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedType::Popular => "popular",
            FeedType::New => "new",
        }
    }
}

impl fmt::Display for FeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for [`HearthisApi::get_feed`].
///
/// Defaults to the first page of five entries with no other filter. Set a
/// field to `None` to leave the parameter out of the request entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    /// Page to show.
    pub page: Option<u32>,
    /// Entries per page (Hearthis caps it at 20).
    pub count: Option<u32>,
    /// Track duration in minutes, matched within +/- 5 minutes.
    pub duration: Option<u32>,
    /// Popular or new; absent for the default feed.
    pub feed_type: Option<FeedType>,
    /// Genre slug, see [`HearthisApi::get_categories`].
    pub category: Option<String>,
    /// Only tracks published on or after this date.
    pub show_feed_start: Option<NaiveDate>,
    /// Only tracks published on or before this date.
    pub show_feed_end: Option<NaiveDate>,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            page: Some(1),
            count: Some(5),
            duration: None,
            feed_type: None,
            category: None,
            show_feed_start: None,
            show_feed_end: None,
        }
    }
}

impl FeedQuery {
    fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push("page", self.page)
            .push("count", self.count)
            .push("duration", self.duration)
            .push("type", self.feed_type)
            .push("category", self.category.as_deref())
            .push("show-feed-start", self.show_feed_start)
            .push("show-feed-end", self.show_feed_end)
    }
}

/// Page selection for search and listing endpoints.
///
/// Defaults to page 1 with 10 entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    /// Page to show, starting at 1.
    pub page: Option<u32>,
    /// Entries per page.
    pub count: Option<u32>,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            page: Some(1),
            count: Some(10),
        }
    }
}

impl Paging {
    /// Page `page` of `count` entries.
    pub fn new(page: u32, count: u32) -> Self {
        Self {
            page: Some(page),
            count: Some(count),
        }
    }

    fn apply(&self, params: QueryParams) -> QueryParams {
        params.push("page", self.page).push("count", self.count)
    }
}

/// Hearthis API client.
///
/// # Example
///
/// ```rust,no_run
/// use mixjar::{HearthisApi, Paging};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = HearthisApi::new()?;
///     let tracks = api.search_track("house", &Paging::default()).await?;
///     for track in tracks {
///         println!("{} - {}", track.artist().unwrap_or("?"), track.title);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HearthisApi {
    http: HttpClient,
    base: Endpoint,
}

impl HearthisApi {
    /// Create a client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client.
    pub fn builder() -> HearthisApiBuilder {
        HearthisApiBuilder::default()
    }

    /// Create a client around an already configured [`HttpClient`].
    pub fn with_client(http: HttpClient) -> Result<Self> {
        Ok(Self {
            http,
            base: Endpoint::parse(HEARTHIS_BASE_URL)?,
        })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        self.base.url().as_str()
    }

    async fn fetch<T, I, S>(&self, segments: I, params: QueryParams) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let url = self.base.clone().join(segments).into_url();
        debug!("Hearthis GET {}", url);
        self.http.get(url, &params).await
    }

    async fn fetch_list<T, I, S>(&self, segments: I, params: QueryParams) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items: Vec<T> = self.fetch(segments, params).await?.unwrap_or_default();
        debug!("Hearthis returned {} items", items.len());
        Ok(items)
    }

    /// Get the feed.
    pub async fn get_feed(&self, query: &FeedQuery) -> Result<HearthisTrackList> {
        self.fetch_list(["feed"], query.to_params()).await
    }

    async fn search<T: DeserializeOwned>(
        &self,
        t: &str,
        kind: &'static str,
        paging: &Paging,
    ) -> Result<Vec<T>> {
        let params = paging
            .apply(QueryParams::new().set("t", t))
            .set("type", kind);
        self.fetch_list(["search"], params).await
    }

    /// Search for tracks.
    pub async fn search_track(&self, t: &str, paging: &Paging) -> Result<HearthisTrackList> {
        self.search(t, "tracks", paging).await
    }

    /// Search for playlists.
    pub async fn search_playlist(
        &self,
        t: &str,
        paging: &Paging,
    ) -> Result<HearthisPlaylistList> {
        self.search(t, "playlists", paging).await
    }

    /// Search for users.
    pub async fn search_user(&self, t: &str, paging: &Paging) -> Result<HearthisUserList> {
        self.search(t, "user", paging).await
    }

    /// Get all available genres.
    pub async fn get_categories(&self) -> Result<HearthisCategoryList> {
        self.fetch_list(["categories"], QueryParams::new()).await
    }

    /// Get the tracks of one genre.
    ///
    /// `category` is a genre slug, see
    /// [`HearthisCategory::slug`](crate::models::HearthisCategory::slug).
    pub async fn get_category_tracks(
        &self,
        category: &str,
        paging: &Paging,
    ) -> Result<HearthisTrackList> {
        self.fetch_list(["categories", category], paging.apply(QueryParams::new()))
            .await
    }

    /// Get a single artist.
    ///
    /// Returns `None` when Hearthis answers with no content.
    pub async fn get_user(&self, username: &str) -> Result<Option<HearthisUser>> {
        self.fetch([username], QueryParams::new()).await
    }

    /// Get a single track by artist and track slug.
    ///
    /// Returns `None` when Hearthis answers with no content.
    pub async fn get_track(
        &self,
        username: &str,
        track_name: &str,
    ) -> Result<Option<HearthisTrack>> {
        self.fetch([username, track_name], QueryParams::new()).await
    }

    async fn user_listing<T: DeserializeOwned>(
        &self,
        username: &str,
        kind: &'static str,
        paging: &Paging,
    ) -> Result<Vec<T>> {
        let params = paging.apply(QueryParams::new().set("type", kind));
        self.fetch_list([username], params).await
    }

    /// Get the tracks uploaded by an artist.
    pub async fn get_user_tracks(
        &self,
        username: &str,
        paging: &Paging,
    ) -> Result<HearthisTrackList> {
        self.user_listing(username, "tracks", paging).await
    }

    /// Get the tracks an artist liked.
    pub async fn get_user_likes(
        &self,
        username: &str,
        paging: &Paging,
    ) -> Result<HearthisTrackList> {
        self.user_listing(username, "likes", paging).await
    }

    /// Get the playlists of an artist.
    pub async fn get_user_playlists(
        &self,
        username: &str,
        paging: &Paging,
    ) -> Result<HearthisPlaylistList> {
        self.user_listing(username, "playlists", paging).await
    }

    /// Get the tracks of a playlist, in playlist order.
    pub async fn get_playlist(&self, playlist: &str) -> Result<HearthisTrackList> {
        self.fetch_list(["set", playlist], QueryParams::new()).await
    }
}

/// Builder for [`HearthisApi`].
#[derive(Debug, Clone)]
pub struct HearthisApiBuilder {
    config: HttpConfig,
    base_url: String,
}

impl Default for HearthisApiBuilder {
    fn default() -> Self {
        Self {
            config: HttpConfig::default(),
            base_url: HEARTHIS_BASE_URL.to_string(),
        }
    }
}

impl HearthisApiBuilder {
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
    pub fn build(self) -> Result<HearthisApi> {
        let base = Endpoint::parse(&self.base_url)?;
        let http = HttpClientFactory::new(self.config).build()?;
        Ok(HearthisApi { http, base })
    }
}
