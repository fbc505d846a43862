use serde::{Deserialize, Deserializer, Serialize};

/// The side of a closed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Long,
    Short,
}

impl Direction {
    /// Anything that is not spelled "long" is treated as a short position.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("long") {
            Direction::Long
        } else {
            Direction::Short
        }
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().map(Direction::from_label).unwrap_or_default())
    }
}

/// The categorical trade fields the journal aggregates by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagField {
    Strategy,
    Setup,
    Session,
}

impl TagField {
    /// The name of the field in the stored trade record.
    pub fn field_name(&self) -> &'static str {
        match self {
            TagField::Strategy => "strategy",
            TagField::Setup => "setup_tags",
            TagField::Session => "session_tags",
        }
    }
}
