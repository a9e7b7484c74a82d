//! Shared types for Flesh and Blood card data
//!
//! Holds the dataset schema as published by the community card database, the
//! decoder that turns a dataset file into card records, and the identity rules
//! that give every physical printing a stable unique id.

pub mod card;
pub mod decode;
pub mod error;
pub mod identity;

pub use card::CardRecord;
pub use decode::decode_cards;
pub use error::DecodeError;
pub use identity::{edition_label, foiling_label, unique_id, Edition, Foiling};
