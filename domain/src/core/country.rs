//! Country value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Known countries whose flags can appear in a round (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Country {
    Estonia,
    France,
    Germany,
    Ireland,
    Italy,
    Nigeria,
    Poland,
    Spain,
    UnitedKingdom,
    Ukraine,
    UnitedStates,
}

impl Country {
    /// The full catalog, in its canonical order
    pub const ALL: [Country; 11] = [
        Country::Estonia,
        Country::France,
        Country::Germany,
        Country::Ireland,
        Country::Italy,
        Country::Nigeria,
        Country::Poland,
        Country::Spain,
        Country::UnitedKingdom,
        Country::Ukraine,
        Country::UnitedStates,
    ];

    /// Name shown to the player
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Estonia => "Estonia",
            Country::France => "France",
            Country::Germany => "Germany",
            Country::Ireland => "Ireland",
            Country::Italy => "Italy",
            Country::Nigeria => "Nigeria",
            Country::Poland => "Poland",
            Country::Spain => "Spain",
            Country::UnitedKingdom => "UK",
            Country::Ukraine => "Ukraine",
            Country::UnitedStates => "US",
        }
    }

    /// Name of the image asset holding this country's flag
    pub fn asset_name(&self) -> &'static str {
        self.as_str()
    }

    /// Flag as a pair of Unicode regional indicator symbols
    pub fn flag_emoji(&self) -> &'static str {
        match self {
            Country::Estonia => "🇪🇪",
            Country::France => "🇫🇷",
            Country::Germany => "🇩🇪",
            Country::Ireland => "🇮🇪",
            Country::Italy => "🇮🇹",
            Country::Nigeria => "🇳🇬",
            Country::Poland => "🇵🇱",
            Country::Spain => "🇪🇸",
            Country::UnitedKingdom => "🇬🇧",
            Country::Ukraine => "🇺🇦",
            Country::UnitedStates => "🇺🇸",
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Country {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Ok(match normalized.as_str() {
            "estonia" => Country::Estonia,
            "france" => Country::France,
            "germany" => Country::Germany,
            "ireland" => Country::Ireland,
            "italy" => Country::Italy,
            "nigeria" => Country::Nigeria,
            "poland" => Country::Poland,
            "spain" => Country::Spain,
            "uk" | "united kingdom" | "great britain" => Country::UnitedKingdom,
            "ukraine" => Country::Ukraine,
            "us" | "usa" | "united states" => Country::UnitedStates,
            _ => return Err(DomainError::UnknownCountry(s.to_string())),
        })
    }
}

impl Serialize for Country {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Country {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
