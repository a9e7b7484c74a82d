//! Card record as published in the flattened dataset
//!
//! One record is one physical printing: the same card id shows up once per
//! foiling/edition combination. Only a handful of fields feed the catalog; the
//! rest are kept so that decoding validates the whole object.

use crate::identity;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One printing of a card from `card-flattened.json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CardRecord {
    /// Set/number identifier, e.g. "WTR001"
    #[serde(rename = "id")]
    pub card_id: String,
    pub name: String,
    /// Edition code (A, F, U or N)
    pub edition: String,
    /// Foiling code (S, R, C or G)
    pub foiling: String,

    #[serde(default, deserialize_with = "loose_string")]
    pub pitch: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub cost: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub power: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub defense: String,
    #[serde(default, deserialize_with = "nullable")]
    pub types: Vec<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub rarity: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub image_url: String,

    // Passengers: decoded, never emitted.
    #[serde(default, deserialize_with = "loose_string")]
    pub unique_id: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub health: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub intelligence: String,
    #[serde(default)]
    pub card_keywords: Value,
    #[serde(default)]
    pub abilities_and_effects: Value,
    #[serde(default)]
    pub ability_and_effect_keywords: Value,
    #[serde(default)]
    pub granted_keywords: Value,
    #[serde(default)]
    pub removed_keywords: Value,
    #[serde(default)]
    pub interacts_with_keywords: Value,
    #[serde(default, deserialize_with = "loose_string")]
    pub functional_text: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub type_text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub played_horizontally: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub blitz_legal: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub cc_legal: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub commoner_legal: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub blitz_living_legend: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub cc_living_legend: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub blitz_banned: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub cc_banned: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub commoner_banned: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub upf_banned: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub blitz_suspended: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub cc_suspended: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub commoner_suspended: bool,
    #[serde(default, deserialize_with = "loose_string")]
    pub printing_unique_id: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub set_printing_unique_id: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub set_id: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub artist: String,
    #[serde(default)]
    pub art_variation: Value,
    #[serde(default, deserialize_with = "loose_string")]
    pub flavor_text: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub tcgplayer_product_id: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub tcgplayer_url: String,
}

impl CardRecord {
    /// Human-readable edition label ("Alpha", "1st", "Unl" or empty)
    pub fn edition_label(&self) -> &'static str {
        identity::edition_label(&self.edition)
    }

    /// Short foiling label ("NF", "RF", "CF", "GF" or empty)
    pub fn foiling_label(&self) -> &'static str {
        identity::foiling_label(&self.foiling)
    }

    /// Stable id of this printing, see [`identity::unique_id`]
    pub fn unique_id(&self) -> String {
        identity::unique_id(self)
    }
}

/// Accepts a string, number, bool or null and yields its text.
///
/// Stats are published as strings but not consistently; `null` means "no value".
fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Treats an explicit `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
