// ABOUTME: Core types, seed data and validation for Bikelinks
// ABOUTME: Foundational package shared by storage, api and cli

pub mod constants;
pub mod types;
pub mod validation;

// Re-export main types
pub use types::{
    Brand, BrandCreateInput, Category, CategoryCreateInput, CategoryUpdateInput, Created,
    CreatedId, Link, LinkInput, LinkWithNames,
};

// Re-export seed catalogue
pub use constants::{SeedLink, SEED_BRANDS, SEED_CATEGORIES, SEED_LINKS};

// Re-export validation
pub use validation::{
    validate_entity_id, validate_link_input, validate_name, ValidationError,
};
