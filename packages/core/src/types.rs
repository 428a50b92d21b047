// ABOUTME: Brand, category and link type definitions
// ABOUTME: Row shapes returned by storage and the inputs used to create or edit them

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

/// A row of the `links` table as stored. The schema allows NULL in
/// `clicks` and `created_at`; storage reads a NULL click count as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    pub brand_id: i64,
    pub category_id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub clicks: i64,
    pub created_at: Option<NaiveDateTime>,
}

/// A link joined with the names of its brand and category, as listed to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkWithNames {
    #[serde(flatten)]
    pub link: Link,
    pub brand_name: String,
    pub category_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandCreateInput {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreateInput {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdateInput {
    pub name: String,
}

/// Fields of a link that can be set on create and replaced on update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkInput {
    pub brand_id: i64,
    pub category_id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}

/// Response body for a newly created brand or category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Created {
    pub id: i64,
    pub name: String,
}

/// Response body for a newly created link
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: i64,
}
