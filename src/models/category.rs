//! Genre models: Hearthis categories, Mixcloud categories and tags.

use serde::{Deserialize, Serialize};

use super::common::{deserialize_id, deserialize_opt_u64};

/// A Hearthis genre.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HearthisCategory {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Slug accepted by the feed and category-tracks endpoints.
    #[serde(default)]
    pub slug: String,

    #[serde(
        default,
        deserialize_with = "deserialize_opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub track_count: Option<u64>,
}

/// A Mixcloud category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MixcloudCategory {
    /// Resource key, e.g. `/categories/house/`.
    pub key: String,

    #[serde(default)]
    pub url: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    /// `music` or `talk`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// A Mixcloud tag, also used as the genre of a cloudcast.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MixcloudTag {
    /// Resource key, e.g. `/discover/house/`.
    pub key: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub name: String,
}

impl MixcloudTag {
    /// Slug usable with the tag and discover endpoints.
    pub fn slug(&self) -> Option<&str> {
        self.key
            .trim_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
    }
}
