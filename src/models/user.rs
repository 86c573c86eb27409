//! User and artist models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{deserialize_id, deserialize_opt_bool, deserialize_opt_u64, MixcloudPictures};

/// Artist reference nested inside a Hearthis track or playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HearthisUserRef {
    /// Hearthis user ID.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// URL slug, used as `username` in lookups.
    #[serde(default)]
    pub permalink: String,

    /// Display name.
    #[serde(default)]
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A full Hearthis artist profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HearthisUser {
    /// Hearthis user ID.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// URL slug.
    #[serde(default)]
    pub permalink: String,

    /// Display name.
    #[serde(default)]
    pub username: String,

    /// Short tagline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_url: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub track_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub playlist_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub likes_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub followers_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub following_count: Option<u64>,

    /// Whether the artist has a premium account.
    #[serde(
        default,
        deserialize_with = "deserialize_opt_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub premium: Option<bool>,
}

impl HearthisUser {
    /// Reference form of this profile, as nested in tracks.
    pub fn to_ref(&self) -> HearthisUserRef {
        HearthisUserRef {
            id: self.id.clone(),
            permalink: self.permalink.clone(),
            username: self.username.clone(),
            uri: self.uri.clone(),
            permalink_url: self.permalink_url.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

/// A Mixcloud user.
///
/// Full profiles come from the user endpoint; references nested in
/// cloudcasts and playlists only carry `key`, `url`, `name`, `username`
/// and `pictures`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MixcloudUser {
    /// Resource key, e.g. `/spartacus/`.
    pub key: String,

    /// Public profile URL.
    #[serde(default)]
    pub url: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// URL slug, used in endpoint paths.
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub pictures: MixcloudPictures,

    /// Biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biog: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloudcast_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listen_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pro: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
}
