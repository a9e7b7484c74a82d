//! Catalog building: merge locales, order by name, render rows
//!
//! Only a comma in the card name is escaped (by wrapping the name in double
//! quotes). Quotes and newlines are left as they are, and the type list is
//! joined with commas unescaped, so multi-type cards spill over into extra
//! columns. Existing consumers of `cards.csv` read that layout.

use fab_common::CardRecord;

/// Number of fields in a rendered row (before the type list spills over)
pub const FIELD_COUNT: usize = 12;

/// One rendered catalog line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub unique_id: String,
    pub card_id: String,
    /// Name as written to the file, quoted if it contains a comma
    pub name: String,
    pub pitch: String,
    pub foiling: String,
    pub edition: String,
    pub rarity: String,
    pub cost: String,
    pub power: String,
    pub defense: String,
    pub image_url: String,
    /// Card types joined with ","
    pub types: String,
}

impl CatalogRow {
    /// Render a card record into a row
    pub fn from_record(card: &CardRecord) -> Self {
        Self {
            unique_id: card.unique_id(),
            card_id: card.card_id.clone(),
            name: quote_name(&card.name),
            pitch: card.pitch.clone(),
            foiling: card.foiling_label().to_string(),
            edition: card.edition_label().to_string(),
            rarity: card.rarity.clone(),
            cost: card.cost.clone(),
            power: card.power.clone(),
            defense: card.defense.clone(),
            image_url: card.image_url.clone(),
            types: card.types.join(","),
        }
    }

    /// Fields in file order
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            self.unique_id.as_str(),
            self.card_id.as_str(),
            self.name.as_str(),
            self.pitch.as_str(),
            self.foiling.as_str(),
            self.edition.as_str(),
            self.rarity.as_str(),
            self.cost.as_str(),
            self.power.as_str(),
            self.defense.as_str(),
            self.image_url.as_str(),
            self.types.as_str(),
        ]
    }

    /// The row as one comma-joined line, without terminator
    pub fn to_line(&self) -> String {
        self.fields().join(",")
    }
}

/// Wrap a name in double quotes if it contains a comma
pub fn quote_name(name: &str) -> String {
    if name.contains(',') {
        format!("\"{}\"", name)
    } else {
        name.to_string()
    }
}

/// Build the catalog from the records of every locale.
///
/// Locales are concatenated in the order given, then sorted by raw name
/// (byte-wise, case-sensitive). The sort is stable: records sharing a name
/// keep their input order. Duplicates are kept.
pub fn build_catalog(records_by_locale: &[Vec<CardRecord>]) -> Vec<CatalogRow> {
    let mut cards: Vec<&CardRecord> = records_by_locale.iter().flatten().collect();
    cards.sort_by(|a, b| a.name.cmp(&b.name));

    cards.into_iter().map(CatalogRow::from_record).collect()
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
