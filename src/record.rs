// 🧾 Pokemon Record - fixed-field roster entry
//
// Records are built by callers and handed to the query functions by
// reference. Nothing in this crate mutates a record after construction.

use serde::{Deserialize, Serialize};

/// One roster entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pokemon {
    // ========================================================================
    // IDENTITY (passthrough only)
    // ========================================================================
    #[serde(default)]
    pub id: u32,

    // ========================================================================
    // QUERY FIELDS
    // ========================================================================
    /// Sort and display key
    pub name: String,

    /// Categorical tag used by `filter_by_type`
    #[serde(rename = "type")]
    pub pokemon_type: String,

    /// Health points, averaged by `average_hp`
    pub hp: u32,

    /// Strength, used for strongest selection and tie detection
    pub attack: u32,

    /// Carried along, unused by any query
    #[serde(default)]
    pub defense: u32,
}

impl Pokemon {
    pub fn new(id: u32, name: &str, pokemon_type: &str, hp: u32, attack: u32, defense: u32) -> Self {
        Pokemon {
            id,
            name: name.to_string(),
            pokemon_type: pokemon_type.to_string(),
            hp,
            attack,
            defense,
        }
    }

    /// Check type tag (exact, case-sensitive)
    pub fn is_type(&self, pokemon_type: &str) -> bool {
        self.pokemon_type == pokemon_type
    }
}
