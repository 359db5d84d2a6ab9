//! The opportunity catalog: immutable listing records plus the derived
//! state the matching pipeline needs (per-listing skill sets, combined
//! text for semantic indexing).
//!
//! A catalog is built once at startup and is read-only for the lifetime of
//! the process; ranking calls share it by reference.

pub mod error;
pub mod loader;


pub use error::CatalogError;
pub use loader::load_catalog;

use serde::{Deserialize, Serialize};

use crate::skills::SkillSet;

fn default_id() -> i64 {
    -1
}

/// One matchable opportunity.
///
/// Every string field defaults to empty when absent from the source data;
/// absence is not an error. `id` defaults to `-1`. Field aliases accept
/// both catalog schemas seen in the wild (`company`/`sector`,
/// `required_skills`/`skills_required`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingRecord {
    #[serde(default = "default_id")]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "company")]
    pub sector: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, alias = "required_skills")]
    pub skills_required: String,
    #[serde(default)]
    pub description: String,
}

impl Default for ListingRecord {
    fn default() -> Self {
        Self {
            id: -1,
            title: String::new(),
            sector: String::new(),
            location: String::new(),
            skills_required: String::new(),
            description: String::new(),
        }
    }
}

impl ListingRecord {
    /// Concatenation of all text fields, used only by the semantic
    /// similarity providers.
    pub fn combined_text(&self) -> String {
        [
            self.title.as_str(),
            self.sector.as_str(),
            self.skills_required.as_str(),
            self.location.as_str(),
            self.description.as_str(),
        ]
        .join(" ")
    }

    /// Lowercased sector + description text used for the sector boost
    /// substring check.
    pub fn sector_text(&self) -> String {
        format!("{} {}", self.sector, self.description).to_lowercase()
    }
}

/// An immutable set of listings with skill sets parsed once at ingestion.
#[derive(Debug, Default)]
pub struct ListingCatalog {
    listings: Vec<ListingRecord>,
    skill_sets: Vec<SkillSet>,
}

impl ListingCatalog {
    /// Builds a catalog, parsing each listing's raw skill string into its
    /// canonical [`SkillSet`].
    pub fn new(listings: Vec<ListingRecord>) -> Self {
        let skill_sets = listings
            .iter()
            .map(|listing| SkillSet::parse(&listing.skills_required))
            .collect();

        Self {
            listings,
            skill_sets,
        }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Returns `true` if the catalog holds no listings.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// All listings in catalog order.
    pub fn listings(&self) -> &[ListingRecord] {
        &self.listings
    }

    /// The parsed skill set for the listing at `index`.
    ///
    /// Indexes are catalog order; `index` must be `< len()`.
    pub fn skill_set(&self, index: usize) -> &SkillSet {
        &self.skill_sets[index]
    }

    /// Iterates `(listing, skill_set)` pairs in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (&ListingRecord, &SkillSet)> {
        self.listings.iter().zip(self.skill_sets.iter())
    }

    /// Combined text per listing, in catalog order (provider fit input).
    pub fn combined_texts(&self) -> Vec<String> {
        self.listings
            .iter()
            .map(ListingRecord::combined_text)
            .collect()
    }
}
