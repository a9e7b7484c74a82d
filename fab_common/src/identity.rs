//! Printing identity
//!
//! Edition and foiling codes map to fixed labels. The unique id of a printing
//! is `<card id>.<foiling label>` with `.<edition label>` appended when the
//! edition has a label. Codes outside the tables resolve to an empty label
//! instead of failing, and downstream consumers rely on that.

use crate::card::CardRecord;
use std::fmt;

/// Print run of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edition {
    Alpha,
    First,
    Unlimited,
    /// Promos and other non-set releases
    Unspecified,
}

impl Edition {
    /// Parse a dataset edition code. Codes are case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(Edition::Alpha),
            "F" => Some(Edition::First),
            "U" => Some(Edition::Unlimited),
            "N" => Some(Edition::Unspecified),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Edition::Alpha => "A",
            Edition::First => "F",
            Edition::Unlimited => "U",
            Edition::Unspecified => "N",
        }
    }

    /// Label used in the catalog; empty for unspecified editions
    pub fn label(&self) -> &'static str {
        match self {
            Edition::Alpha => "Alpha",
            Edition::First => "1st",
            Edition::Unlimited => "Unl",
            Edition::Unspecified => "",
        }
    }

    pub fn all() -> &'static [Edition] {
        &[
            Edition::Alpha,
            Edition::First,
            Edition::Unlimited,
            Edition::Unspecified,
        ]
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Finish of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Foiling {
    Standard,
    Rainbow,
    Cold,
    /// Gold cold foil
    Gold,
}

impl Foiling {
    /// Parse a dataset foiling code. Codes are case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "S" => Some(Foiling::Standard),
            "R" => Some(Foiling::Rainbow),
            "C" => Some(Foiling::Cold),
            "G" => Some(Foiling::Gold),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Foiling::Standard => "S",
            Foiling::Rainbow => "R",
            Foiling::Cold => "C",
            Foiling::Gold => "G",
        }
    }

    /// Short label used in the catalog (NF = non-foil)
    pub fn label(&self) -> &'static str {
        match self {
            Foiling::Standard => "NF",
            Foiling::Rainbow => "RF",
            Foiling::Cold => "CF",
            Foiling::Gold => "GF",
        }
    }

    pub fn all() -> &'static [Foiling] {
        &[
            Foiling::Standard,
            Foiling::Rainbow,
            Foiling::Cold,
            Foiling::Gold,
        ]
    }
}

impl fmt::Display for Foiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolve an edition code to its label, empty for unknown codes
pub fn edition_label(code: &str) -> &'static str {
    Edition::from_code(code).map_or("", |e| e.label())
}

/// Resolve a foiling code to its label, empty for unknown codes
pub fn foiling_label(code: &str) -> &'static str {
    Foiling::from_code(code).map_or("", |f| f.label())
}

/// Build the unique id of a printing from its card id, foiling and edition.
///
/// Depends on nothing else in the record, so two records sharing these three
/// fields always share an id.
pub fn unique_id(card: &CardRecord) -> String {
    printing_id(&card.card_id, &card.foiling, &card.edition)
}

/// Same as [`unique_id`] for callers holding the raw codes.
pub fn printing_id(card_id: &str, foiling: &str, edition: &str) -> String {
    let mut id = format!("{}.{}", card_id, foiling_label(foiling));
    let edition = edition_label(edition);
    if !edition.is_empty() {
        id.push('.');
        id.push_str(edition);
    }
    id
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
