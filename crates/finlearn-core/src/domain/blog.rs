use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UnknownVariant;

/// Editorial section a blog post belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlogCategory {
    Blogs,
    #[serde(rename = "What's Brewing")]
    WhatsBrewing,
    Stories,
}

impl BlogCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blogs => "Blogs",
            Self::WhatsBrewing => "What's Brewing",
            Self::Stories => "Stories",
        }
    }
}

impl FromStr for BlogCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Blogs" => Ok(Self::Blogs),
            "What's Brewing" => Ok(Self::WhatsBrewing),
            "Stories" => Ok(Self::Stories),
            other => Err(UnknownVariant::new("blog category", other)),
        }
    }
}

impl std::fmt::Display for BlogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blog entity - an editorial article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: BlogCategory,
    pub author: String,
    pub image_url: String,
    pub summary: String,
    /// Reading time in minutes.
    pub read_time: NonZeroU32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The business fields of a blog post, minus id and audit timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogFields {
    pub title: String,
    pub content: String,
    pub category: BlogCategory,
    pub author: String,
    pub image_url: String,
    pub summary: String,
    pub read_time: NonZeroU32,
    pub is_published: bool,
}

impl Blog {
    /// Create a new blog post with fresh timestamps. The store assigns the id.
    pub fn new(fields: BlogFields) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            title: fields.title,
            content: fields.content,
            category: fields.category,
            author: fields.author,
            image_url: fields.image_url,
            summary: fields.summary,
            read_time: fields.read_time,
            is_published: fields.is_published,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field and refresh `updated_at`.
    pub fn apply(&mut self, fields: BlogFields) {
        self.title = fields.title;
        self.content = fields.content;
        self.category = fields.category;
        self.author = fields.author;
        self.image_url = fields.image_url;
        self.summary = fields.summary;
        self.read_time = fields.read_time;
        self.is_published = fields.is_published;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whats_brewing_keeps_its_wire_name() {
        assert_eq!(
            serde_json::to_value(BlogCategory::WhatsBrewing).unwrap(),
            "What's Brewing"
        );
        let parsed: BlogCategory = "What's Brewing".parse().unwrap();
        assert_eq!(parsed, BlogCategory::WhatsBrewing);
    }
}
