//! Track-related models.
//!
//! Hearthis calls them tracks, Mixcloud calls them cloudcasts. Both carry
//! an identifier, a title, a duration, an artist reference and a genre tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::MixcloudTag;
use super::common::{
    deserialize_id, deserialize_opt_bool, deserialize_opt_u64, format_duration, MixcloudPictures,
};
use super::user::{HearthisUserRef, MixcloudUser};

/// A Hearthis track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HearthisTrack {
    /// Hearthis track ID.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Track title.
    #[serde(default)]
    pub title: String,

    /// URL slug, used as `track_name` in lookups.
    #[serde(default)]
    pub permalink: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Duration in seconds.
    #[serde(
        default,
        deserialize_with = "deserialize_opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<u64>,

    /// Genre display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Genre slug, usable as a feed `category`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_slug: Option<String>,

    /// Uploading artist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<HearthisUserRef>,

    /// Upload date as sent by Hearthis (`YYYY-MM-DD HH:MM:SS`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink_url: Option<String>,

    /// Direct audio stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waveform_url: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_opt_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub downloadable: Option<bool>,

    #[serde(
        default,
        deserialize_with = "deserialize_opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub playback_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub download_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub favoritings_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub comment_count: Option<u64>,
}

impl HearthisTrack {
    /// Artist display name.
    pub fn artist(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    /// Duration formatted as `MM:SS` (or `H:MM:SS`).
    pub fn duration_formatted(&self) -> Option<String> {
        self.duration.map(format_duration)
    }
}

/// A Mixcloud cloudcast (an uploaded show or mix).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MixcloudCloudcast {
    /// Resource key, e.g. `/spartacus/party-time/`.
    pub key: String,

    /// Public page URL.
    #[serde(default)]
    pub url: String,

    /// Title.
    #[serde(default)]
    pub name: String,

    /// URL slug, used as `slug` in lookups.
    #[serde(default)]
    pub slug: String,

    /// Uploader.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<MixcloudUser>,

    /// Genre tags.
    #[serde(default)]
    pub tags: Vec<MixcloudTag>,

    /// Length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_length: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub pictures: MixcloudPictures,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listener_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repost_count: Option<u64>,
}

impl MixcloudCloudcast {
    /// Uploader display name.
    pub fn artist(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    /// First tag, Mixcloud's closest equivalent of a genre.
    pub fn genre(&self) -> Option<&str> {
        self.tags.first().map(|t| t.name.as_str())
    }

    /// Duration formatted as `MM:SS` (or `H:MM:SS`).
    pub fn duration_formatted(&self) -> Option<String> {
        self.audio_length.map(format_duration)
    }
}
