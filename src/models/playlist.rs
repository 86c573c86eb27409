//! Playlist-related models.
//!
//! This module contains models for representing playlists and their
//! nested tracks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{deserialize_id, deserialize_opt_u64, MixcloudPictures};
use super::track::HearthisTrack;
use super::user::{HearthisUserRef, MixcloudUser};

/// A Hearthis playlist ("set").
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HearthisPlaylist {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// URL slug, accepted by [`HearthisApi::get_playlist`](crate::HearthisApi::get_playlist).
    #[serde(default)]
    pub permalink: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Playlist owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<HearthisUserRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub track_count: Option<u64>,

    /// Tracks in playlist order, when embedded in the response.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<HearthisTrack>,
}

impl HearthisPlaylist {
    /// Sum of the known track durations, in seconds.
    pub fn total_duration(&self) -> u64 {
        self.tracks.iter().filter_map(|t| t.duration).sum()
    }
}

/// A Mixcloud playlist.
///
/// Mixcloud does not embed the cloudcasts; fetch them with
/// [`MixcloudApi::get_playlist_cloudcasts`](crate::MixcloudApi::get_playlist_cloudcasts).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MixcloudPlaylist {
    /// Resource key, e.g. `/spartacus/playlists/summer/`.
    pub key: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<MixcloudUser>,

    #[serde(default)]
    pub pictures: MixcloudPictures,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloudcast_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
}
