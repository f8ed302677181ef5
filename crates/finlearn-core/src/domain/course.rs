use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UnknownVariant;

/// Audience a course is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseCategory {
    Novice,
    Investor,
    Trader,
}

impl CourseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Investor => "Investor",
            Self::Trader => "Trader",
        }
    }
}

impl FromStr for CourseCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Novice" => Ok(Self::Novice),
            "Investor" => Ok(Self::Investor),
            "Trader" => Ok(Self::Trader),
            other => Err(UnknownVariant::new("course category", other)),
        }
    }
}

impl std::fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Course difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Self::Beginner),
            "Intermediate" => Ok(Self::Intermediate),
            "Advanced" => Ok(Self::Advanced),
            other => Err(UnknownVariant::new("difficulty", other)),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Course entity - a structured learning unit in the catalog.
///
/// The id is opaque and assigned by the store at first save; it stays empty
/// on freshly constructed instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: CourseCategory,
    pub image_url: String,
    pub difficulty: Difficulty,
    /// Duration in minutes.
    pub duration: NonZeroU32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The business fields of a course: everything except the id and the audit
/// timestamps. Serves as both the create body and the full-replace update
/// payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseFields {
    pub title: String,
    pub description: String,
    pub category: CourseCategory,
    pub image_url: String,
    pub difficulty: Difficulty,
    pub duration: NonZeroU32,
    pub is_active: bool,
}

impl Course {
    /// Create a new course with fresh timestamps. The store assigns the id.
    pub fn new(fields: CourseFields) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            title: fields.title,
            description: fields.description,
            category: fields.category,
            image_url: fields.image_url,
            difficulty: fields.difficulty,
            duration: fields.duration,
            is_active: fields.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field and refresh `updated_at`. The id and
    /// `created_at` are untouched.
    pub fn apply(&mut self, fields: CourseFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.category = fields.category;
        self.image_url = fields.image_url;
        self.difficulty = fields.difficulty;
        self.duration = fields.duration;
        self.is_active = fields.is_active;
        self.updated_at = Utc::now();
    }
}
