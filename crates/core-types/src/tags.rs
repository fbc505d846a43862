use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The label used for trades that carry no usable tag.
pub const UNCLASSIFIED: &str = "Unclassified";

/// A categorical field as it appears in the journal: either a single value
/// or an ordered list of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    Scalar(String),
    List(Vec<String>),
}

impl TagValue {
    /// The value used for grouping. For lists only the first element counts.
    pub fn primary(&self) -> Option<&str> {
        match self {
            TagValue::Scalar(value) => Some(value.as_str()),
            TagValue::List(values) => values.first().map(String::as_str),
        }
    }
}

/// A tag resolved to the single label a trade is grouped under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn unclassified() -> Self {
        Self(UNCLASSIFIED.to_string())
    }

    /// Resolves a raw tag into its grouping label.
    pub fn from_tag(tag: Option<&TagValue>) -> Self {
        match tag.and_then(TagValue::primary) {
            Some(label) if !label.is_empty() => Self(label.to_string()),
            _ => Self::unclassified(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unclassified(&self) -> bool {
        self.0 == UNCLASSIFIED
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::unclassified()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::from_tag(Some(&TagValue::Scalar(label.to_string())))
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawTag {
            Tag(TagValue),
            Other(IgnoredAny),
        }

        let raw = Option::<RawTag>::deserialize(deserializer)?;
        let tag = match raw {
            Some(RawTag::Tag(tag)) => Some(tag),
            Some(RawTag::Other(_)) | None => None,
        };
        Ok(Category::from_tag(tag.as_ref()))
    }
}
