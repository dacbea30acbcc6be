use serde::{Deserialize, Serialize};

/// One brand entry of the collection index. Owned by the data layer; the
/// statistics code only reads it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Brewery origin country as written in the source data.
    #[serde(default)]
    pub from_country: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_city: Option<String>,
    #[serde(default)]
    pub glasses: Vec<Glass>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Glass {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// How the glass was acquired (`buy`, `present`, `gift`, ...).
    #[serde(default)]
    pub got: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bought_country: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bought_city: Option<String>,
}

impl Glass {
    /// Purchase country, treating an empty string as absent.
    pub fn bought_country(&self) -> Option<&str> {
        self.bought_country.as_deref().filter(|c| !c.is_empty())
    }
}

/// Which country field the statistics are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Count glasses by the country they were bought in.
    #[default]
    Purchase,
    /// Count glasses by their brand's brewery country.
    Origin,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Origin => "origin",
        }
    }
}
