//! API clients for Mixcloud and Hearthis.
//!
//! This module provides two independent clients:
//! - [`MixcloudApi`]: Mixcloud catalog (optional access token)
//! - [`HearthisApi`]: Hearthis catalog (no auth)
//!
//! Both build their URLs with [`Endpoint`] and their query strings with
//! [`QueryParams`], and send requests through a shared
//! [`HttpClient`](crate::http::HttpClient).

pub mod hearthis;
pub mod mixcloud;
pub mod request;

pub use hearthis::{FeedQuery, FeedType, HearthisApi, HearthisApiBuilder, Paging};
pub use mixcloud::{MixcloudApi, MixcloudApiBuilder, MixcloudPaging};
pub use request::{Endpoint, QueryParams};
