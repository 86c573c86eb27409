//! Common types shared across all models.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Deserialize an identifier sent either as a string or as a number.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(Error::custom("ID must be a string or number")),
    }
}

/// Deserialize an optional counter that Hearthis may send as `"123"`, `123`,
/// `""` or `null`. Anything unparsable becomes `None`.
pub(crate) fn deserialize_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Deserialize an optional flag sent as a bool, `0`/`1` or `"true"`/`"1"`.
pub(crate) fn deserialize_opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => n.as_i64().map(|i| i != 0),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Format a duration in seconds as `MM:SS`, or `H:MM:SS` past one hour.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Picture URLs Mixcloud attaches to users, cloudcasts and playlists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MixcloudPictures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium_mobile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_large: Option<String>,

    #[serde(
        rename = "320wx320h",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub w320: Option<String>,

    #[serde(
        rename = "640wx640h",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub w640: Option<String>,
}

impl MixcloudPictures {
    /// Largest picture available.
    pub fn best(&self) -> Option<&str> {
        [
            &self.extra_large,
            &self.w640,
            &self.large,
            &self.w320,
            &self.medium,
            &self.medium_mobile,
            &self.thumbnail,
            &self.small,
        ]
        .into_iter()
        .find_map(|p| p.as_deref())
    }
}

/// Links to the neighbouring pages of a Mixcloud listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MixcloudPagingLinks {
    /// Full URL of the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,

    /// Full URL of the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// One page of a Mixcloud listing.
///
/// Callers page manually by passing a new `offset` (or the cursor found in
/// [`MixcloudPagingLinks::next`]) to the next call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct MixcloudList<T> {
    /// Items on this page.
    #[serde(default)]
    pub data: Vec<T>,

    /// Neighbouring page links.
    #[serde(default)]
    pub paging: MixcloudPagingLinks,

    /// Listing title, when Mixcloud provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl<T> Default for MixcloudList<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            paging: MixcloudPagingLinks::default(),
            name: None,
        }
    }
}

impl<T> MixcloudList<T> {
    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        self.paging.next.is_some()
    }

    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Counters {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
        #[serde(default, deserialize_with = "deserialize_opt_u64")]
        plays: Option<u64>,
        #[serde(default, deserialize_with = "deserialize_opt_bool")]
        downloadable: Option<bool>,
    }

    #[test]
    fn test_numbers_as_strings() {
        let c: Counters =
            serde_json::from_value(json!({"id": 42, "plays": "1234", "downloadable": "1"}))
                .unwrap();
        assert_eq!(c.id, "42");
        assert_eq!(c.plays, Some(1234));
        assert_eq!(c.downloadable, Some(true));
    }

    #[test]
    fn test_missing_and_blank_counters() {
        let c: Counters = serde_json::from_value(json!({"id": "7", "plays": ""})).unwrap();
        assert_eq!(c.plays, None);
        assert_eq!(c.downloadable, None);

        let c: Counters =
            serde_json::from_value(json!({"id": "7", "plays": null, "downloadable": false}))
                .unwrap();
        assert_eq!(c.plays, None);
        assert_eq!(c.downloadable, Some(false));
    }

    #[test]
    fn test_id_rejects_objects() {
        let res = serde_json::from_value::<Counters>(json!({"id": {"nested": 1}}));
        assert!(res.is_err());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(215), "03:35");
        assert_eq!(format_duration(3725), "1:02:05");
        assert_eq!(format_duration(0), "00:00");
    }

    #[test]
    fn test_pictures_best() {
        let pictures = MixcloudPictures {
            thumbnail: Some("thumb.jpg".to_string()),
            large: Some("large.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(pictures.best(), Some("large.jpg"));
        assert_eq!(MixcloudPictures::default().best(), None);
    }

    #[test]
    fn test_list_defaults_and_paging() {
        let list: MixcloudList<String> = serde_json::from_value(json!({
            "data": ["a", "b"],
            "paging": {"next": "https://api.mixcloud.com/popular/?offset=20"}
        }))
        .unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.has_next());

        let empty: MixcloudList<String> = serde_json::from_value(json!({})).unwrap();
        assert!(empty.is_empty());
        assert!(!empty.has_next());
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Entry {
        key: String,
    }

    fn decode_page<T: serde::de::DeserializeOwned>(value: Value) -> MixcloudList<T> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_list_items_need_no_default() {
        let page: MixcloudList<Entry> = decode_page(json!({
            "data": [{"key": "/spartacus/"}, {"key": "/friend/"}]
        }));
        assert_eq!(page.data[1].key, "/friend/");

        let empty: MixcloudList<Entry> = decode_page(json!({"paging": {}}));
        assert!(empty.is_empty());
    }
}
