//! Pokemon Record - Catalog Documents
//!
//! `TigerStyle`: Explicit types, validation, no ambient state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::RECORD_ID_HEX_LEN;
use crate::dst::DeterministicRng;

// =============================================================================
// RecordId
// =============================================================================

/// Store-assigned record identifier.
///
/// Object-id shaped: 24 lowercase hex characters (12 bytes, hex encoded).
/// Syntactic validity is checkable without a store round-trip, which the
/// catalog lookup uses to decide whether a term can be an id at all.
///
/// # Example
///
/// ```
/// use pokedex::storage::RecordId;
///
/// assert!(RecordId::is_valid("507f1f77bcf86cd799439011"));
/// assert!(!RecordId::is_valid("pikachu"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Parse a string as a record id.
    ///
    /// Returns None unless the string is exactly `RECORD_ID_HEX_LEN`
    /// lowercase hex characters.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if Self::is_valid(s) {
            Some(Self(s.to_string()))
        } else {
            None
        }
    }

    /// Check whether a string is a syntactically valid record id.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        s.len() == RECORD_ID_HEX_LEN
            && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    /// Generate a fresh id from the given RNG.
    ///
    /// Stores call this on insert; deterministic RNGs make assigned ids
    /// reproducible across same-seed runs.
    #[must_use]
    pub fn generate(rng: &mut DeterministicRng) -> Self {
        const HEX: &[u8; 16] = b"0123456789abcdef";

        let bytes = rng.next_bytes(RECORD_ID_HEX_LEN / 2);
        let mut s = String::with_capacity(RECORD_ID_HEX_LEN);
        for b in bytes {
            s.push(HEX[(b >> 4) as usize] as char);
            s.push(HEX[(b & 0x0f) as usize] as char);
        }

        // Postcondition
        debug_assert!(Self::is_valid(&s), "generated id must be valid");
        Self(s)
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Pokemon
// =============================================================================

/// A stored catalog record.
///
/// Invariant: `name` is always lower-case; the catalog service lower-cases
/// on every write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Store-assigned identifier
    pub id: RecordId,

    /// Species name, lower-case, unique
    pub name: String,

    /// Catalog number, unique. Absent when the create input omitted it;
    /// the store's unique constraint still applies (two absent numbers
    /// conflict, matching a non-sparse unique index).
    pub no: Option<u32>,

    /// Internal storage metadata counter. Stripped from paged listings via
    /// projection; present on single-record reads.
    #[serde(rename = "__v", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

impl Pokemon {
    /// Return this record merged with the given patch.
    ///
    /// This is a client-side approximation of the post-update state, not a
    /// re-read of the persisted record.
    #[must_use]
    pub fn merge(&self, patch: &PokemonPatch) -> Self {
        let mut merged = self.clone();
        if let Some(ref name) = patch.name {
            merged.name = name.clone();
        }
        if let Some(no) = patch.no {
            merged.no = Some(no);
        }
        merged
    }
}

// =============================================================================
// NewPokemon
// =============================================================================

/// Input for a single create or one entry of a bulk insert.
///
/// `name` is required; `no` is optional on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPokemon {
    /// Species name (any casing; the service lower-cases before storing)
    pub name: String,

    /// Catalog number
    #[serde(default)]
    pub no: Option<u32>,
}

impl NewPokemon {
    /// Create a new insert input.
    #[must_use]
    pub fn new(name: impl Into<String>, no: Option<u32>) -> Self {
        Self {
            name: name.into(),
            no,
        }
    }
}

// =============================================================================
// PokemonPatch
// =============================================================================

/// Partial update: only the provided fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonPatch {
    /// New species name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New catalog number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no: Option<u32>,
}

impl PokemonPatch {
    /// Create an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name field.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the catalog number field.
    #[must_use]
    pub fn with_no(mut self, no: u32) -> Self {
        self.no = Some(no);
        self
    }

    /// True if the patch carries no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.no.is_none()
    }
}
