use serde::{Deserialize, Serialize};

// Record style note:
// These are the shapes the site's pages import from the generated JSON
// files. Field names are serialized exactly as the pages read them, so a
// rename here is a breaking change for every consumer.
// Records are built once per aggregator run and never mutated afterwards.

/// Accessors shared by every generated record.
pub trait ContentItem {
    /// Source folder name, unique within a collection.
    fn id(&self) -> &str;

    fn title(&self) -> &str;

    /// The date the collection is ordered by, as written in the source.
    fn primary_date(&self) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub date: String,
    pub year: i32,
    pub category: String,
    pub tags: Vec<String>,
    pub summary: String,
    pub content: String,
    pub image: String,
    pub link: String,
    pub folder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: String,
    pub title: String,
    /// Display names joined with ", ".
    pub authors: String,
    pub venue: String,
    pub year: i32,
    pub date: Option<String>,
    pub publication_types: Vec<String>,
    pub tags: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub pdf: String,
    pub poster: String,
    pub slides: String,
    pub code: String,
    /// Verbatim BibTeX from the folder's citation file.
    pub citation: Option<String>,
    pub featured_image: Option<String>,
    pub folder: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrantStatus {
    Current,
    Past,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
    pub id: String,
    pub title: String,
    pub agency: String,
    pub agencies: Vec<String>,
    pub amount: String,
    pub start_date: String,
    pub end_date: String,
    pub duration: String,
    pub year: i32,
    pub status: GrantStatus,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
    pub folder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationStatus {
    Current,
    /// Any other label from a pre-shaped entry, kept as written.
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EducationStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    /// URL-friendly form of the folder name, e.g. `doe-jane`.
    pub slug: String,
    pub name: String,
    pub role: String,
    pub title: String,
    pub image: String,
    pub bio: String,
    pub full_bio: String,
    pub email: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub scholar: String,
    pub twitter: String,
    pub interests: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub organization: Organization,
    pub folder: String,
}

impl ContentItem for NewsItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn primary_date(&self) -> Option<&str> {
        Some(self.date.as_str()).filter(|d| !d.is_empty())
    }
}

impl ContentItem for Publication {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn primary_date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl ContentItem for Grant {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn primary_date(&self) -> Option<&str> {
        Some(self.start_date.as_str()).filter(|d| !d.is_empty())
    }
}

impl ContentItem for TeamMember {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn primary_date(&self) -> Option<&str> {
        None
    }
}
