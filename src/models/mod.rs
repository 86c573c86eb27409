//! Data models for Mixcloud and Hearthis API responses.
//!
//! Every type here is a plain deserialization target mirroring a remote
//! JSON shape: tracks, playlists, users, categories and list pages.

pub mod category;
pub mod common;
pub mod playlist;
pub mod track;
pub mod user;

// Re-exports for convenience
pub use category::{HearthisCategory, MixcloudCategory, MixcloudTag};
pub use common::{format_duration, MixcloudList, MixcloudPagingLinks, MixcloudPictures};
pub use playlist::{HearthisPlaylist, MixcloudPlaylist};
pub use track::{HearthisTrack, MixcloudCloudcast};
pub use user::{HearthisUser, HearthisUserRef, MixcloudUser};

/// Hearthis answers list endpoints with a bare JSON array and no paging
/// metadata.
pub type HearthisTrackList = Vec<HearthisTrack>;

/// See [`HearthisTrackList`].
pub type HearthisPlaylistList = Vec<HearthisPlaylist>;

/// See [`HearthisTrackList`].
pub type HearthisUserList = Vec<HearthisUser>;

/// See [`HearthisTrackList`].
pub type HearthisCategoryList = Vec<HearthisCategory>;
