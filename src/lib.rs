//! # Mixjar
//!
//! A Rust SDK for the public Mixcloud and Hearthis catalog APIs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mixjar::{FeedQuery, HearthisApi, MixcloudApi, MixcloudPaging};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Hearthis: second feed page of ten tracks
//!     let hearthis = HearthisApi::new()?;
//!     let feed = hearthis
//!         .get_feed(&FeedQuery {
//!             page: Some(2),
//!             count: Some(10),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("{} tracks in the feed", feed.len());
//!
//!     // Mixcloud: a user's latest uploads
//!     let mixcloud = MixcloudApi::new()?;
//!     let page = mixcloud
//!         .get_user_cloudcasts("spartacus", &MixcloudPaging::new(5, 0))
//!         .await?;
//!     for cloudcast in page.data {
//!         println!("{}", cloudcast.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Behaviour
//!
//! - Every method issues exactly one GET request. There is no retry,
//!   caching or automatic paging.
//! - Optional parameters left as `None` never appear in the query string.
//! - Single-resource lookups return `Ok(None)` when the provider answers
//!   with no content; listings return an empty page.
//! - Traffic logging goes through `tracing` and is controlled by
//!   [`HttpLogLevel`].

pub mod api;
pub mod error;
pub mod http;
mod mixjar;
pub mod models;

// Main interface
pub use mixjar::{Mixjar, MixjarConfig};

// Provider clients
pub use api::{
    FeedQuery, FeedType, HearthisApi, HearthisApiBuilder, MixcloudApi, MixcloudApiBuilder,
    MixcloudPaging, Paging,
};
pub use error::{MixjarError, Result};
pub use http::{HttpClient, HttpClientFactory, HttpConfig, HttpLogLevel};
pub use models::{
    HearthisCategory, HearthisPlaylist, HearthisTrack, HearthisUser, MixcloudCategory,
    MixcloudCloudcast, MixcloudList, MixcloudPlaylist, MixcloudTag, MixcloudUser,
};
