use crate::assets::AVATAR;
use crate::config::RunContext;
use crate::fields::{scalar_text, Candidate::*, Chain, Resolver};
use crate::source::SourceDocument;
use crate::traits::ContentKind;
use crate::types::{
    AggregatorError, EducationEntry, EducationStatus, Organization, Result, TeamMember,
};
use crate::utils::text;
use crate::utils::url::{classify_social, SocialKind};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use tracing::warn;

pub const NAME: Chain = &[Key("name")];
pub const ROLE: Chain = &[First("user_groups"), Key("role")];
pub const TITLE: Chain = &[Key("role"), Key("title")];
pub const IMAGE: Chain = &[Url("image"), Sidecar(AVATAR)];
pub const BIO: Chain = &[Key("bio"), Key("summary")];
pub const FULL_BIO: Chain = &[Body, Key("bio")];
pub const EMAIL: Chain = &[Key("email")];
pub const WEBSITE: Chain = &[Key("website"), Key("external_link")];
pub const LINKEDIN: Chain = &[Key("linkedin")];
pub const GITHUB: Chain = &[Key("github")];
pub const SCHOLAR: Chain = &[Key("scholar"), Key("google_scholar")];
pub const TWITTER: Chain = &[Key("twitter")];
pub const INTERESTS: Chain = &[Key("interests")];

/// Listing order of the team page. Roles not listed share [`UNRANKED`].
pub const ROLE_PRIORITY: &[(&str, u8)] = &[
    ("Faculty", 1),
    ("PhD Students", 2),
    ("MS Students", 3),
    ("Masters Students", 3),
    ("Undergraduate Students", 4),
    ("Alumni", 5),
];

pub const UNRANKED: u8 = 99;

pub fn role_rank(role: &str) -> u8 {
    ROLE_PRIORITY
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, rank)| *rank)
        .unwrap_or(UNRANKED)
}

/// Lab members under `team/`, one `_index.md` per person.
#[derive(Debug, Clone)]
pub struct TeamSource {
    default_organization: String,
}

impl TeamSource {
    pub fn new(default_organization: impl Into<String>) -> Self {
        Self {
            default_organization: default_organization.into(),
        }
    }

    fn organization(&self, fields: &Resolver<'_>) -> Result<Organization> {
        match fields.value("organization") {
            Some(Value::Object(map)) => {
                return Ok(Organization {
                    name: text_in(map, "name", "organization.name")?,
                    department: text_in(map, "department", "organization.department")?,
                })
            }
            Some(value @ Value::String(_)) => {
                if let Some(name) = scalar_text("organization", value)? {
                    return Ok(Organization {
                        name,
                        department: String::new(),
                    });
                }
            }
            Some(_) => {
                return Err(AggregatorError::field_shape(
                    "organization",
                    "a mapping with name and department",
                ))
            }
            None => {}
        }

        let first = match fields.value("organizations") {
            Some(Value::Array(items)) => items.first(),
            Some(_) => {
                return Err(AggregatorError::field_shape(
                    "organizations",
                    "a list of organizations",
                ))
            }
            None => None,
        };
        let (name, department) = match first {
            Some(Value::Object(map)) => (
                text_in(map, "name", "organizations.name")?,
                text_in(map, "url", "organizations.url")?,
            ),
            Some(_) => {
                return Err(AggregatorError::field_shape(
                    "organizations",
                    "a list of organizations",
                ))
            }
            None => (String::new(), String::new()),
        };

        Ok(Organization {
            name: if name.is_empty() {
                self.default_organization.clone()
            } else {
                name
            },
            department,
        })
    }
}

impl ContentKind for TeamSource {
    type Record = TeamMember;

    fn collection(&self) -> &'static str {
        "team"
    }

    fn index_file(&self) -> &'static str {
        "_index.md"
    }

    fn output_file(&self) -> &'static str {
        "team-generated.json"
    }

    fn build(&self, doc: &SourceDocument, _ctx: &RunContext) -> Result<TeamMember> {
        let fields = Resolver::new(doc);

        let education = match fields.value("education") {
            Some(value) => EducationInput::parse(value)?.into_entries(),
            None => Vec::new(),
        };

        let mut links = SocialLinks {
            email: fields.text_or_default(EMAIL)?,
            website: fields.text_or_default(WEBSITE)?,
            linkedin: fields.text_or_default(LINKEDIN)?,
            github: fields.text_or_default(GITHUB)?,
            scholar: fields.text_or_default(SCHOLAR)?,
            twitter: fields.text_or_default(TWITTER)?,
        };
        match fields.value("social") {
            Some(Value::Array(entries)) => links.apply(entries)?,
            Some(_) => warn!("Ignoring non-list `social` in {}", doc.folder),
            None => {}
        }

        let name = match fields.text(NAME)? {
            Some(name) => name,
            None => text::display_name_from_folder(&doc.folder),
        };

        Ok(TeamMember {
            id: doc.folder.clone(),
            slug: text::slug(&doc.folder),
            name,
            role: fields.text_or_default(ROLE)?,
            title: fields.text_or_default(TITLE)?,
            image: fields.text_or_default(IMAGE)?,
            bio: fields.text_or_default(BIO)?,
            full_bio: fields.text_or_default(FULL_BIO)?,
            email: links.email,
            website: links.website,
            linkedin: links.linkedin,
            github: links.github,
            scholar: links.scholar,
            twitter: links.twitter,
            interests: fields.list(INTERESTS)?,
            education,
            organization: self.organization(&fields)?,
            folder: doc.folder.clone(),
        })
    }

    fn compare(&self, a: &TeamMember, b: &TeamMember) -> Ordering {
        role_rank(&a.role)
            .cmp(&role_rank(&b.role))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    }
}

/// One line of a CV-style `education.courses` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub course: String,
    pub institution: String,
    pub year: String,
}

impl Course {
    fn into_entry(self) -> EducationEntry {
        let is_current = text::mentions(&self.course, "current")
            || text::mentions(&self.course, "expected")
            || text::mentions(&self.year, "expected");

        EducationEntry {
            degree: text::strip_status_prefix(&self.course).to_string(),
            institution: self.institution,
            year: text::strip_status_prefix(&self.year).to_string(),
            status: is_current.then_some(EducationStatus::Current),
        }
    }
}

/// The two accepted shapes of a member's `education` field.
#[derive(Debug, Clone, PartialEq)]
pub enum EducationInput {
    /// `education: { courses: [{course, institution, year}, ...] }`
    Courses(Vec<Course>),
    /// `education: [{degree, institution, year, status}, ...]`
    Entries(Vec<EducationEntry>),
}

impl EducationInput {
    pub fn parse(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => {
                let courses = match map.get("courses") {
                    Some(Value::Array(items)) => items,
                    Some(Value::Null) | None => return Ok(Self::Courses(Vec::new())),
                    Some(_) => {
                        return Err(AggregatorError::field_shape(
                            "education.courses",
                            "a list of courses",
                        ))
                    }
                };
                courses
                    .iter()
                    .map(|item| -> Result<Course> {
                        let map = as_map(item, "education.courses")?;
                        Ok(Course {
                            course: text_in(map, "course", "education.courses.course")?,
                            institution: text_in(map, "institution", "education.courses.institution")?,
                            year: text_in(map, "year", "education.courses.year")?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(Self::Courses)
            }
            Value::Array(items) => items
                .iter()
                .map(|item| -> Result<EducationEntry> {
                    let map = as_map(item, "education")?;
                    let status = text_in(map, "status", "education.status")?;
                    Ok(EducationEntry {
                        degree: text_in(map, "degree", "education.degree")?,
                        institution: text_in(map, "institution", "education.institution")?,
                        year: text_in(map, "year", "education.year")?,
                        status: if status.is_empty() {
                            None
                        } else if status == "current" {
                            Some(EducationStatus::Current)
                        } else {
                            Some(EducationStatus::Other(status))
                        },
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Entries),
            _ => Err(AggregatorError::field_shape(
                "education",
                "a course list or a list of entries",
            )),
        }
    }

    pub fn into_entries(self) -> Vec<EducationEntry> {
        match self {
            Self::Courses(courses) => courses.into_iter().map(Course::into_entry).collect(),
            Self::Entries(entries) => entries,
        }
    }
}

/// Contact fields, seeded from plain keys and overridden by `social`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SocialLinks {
    pub email: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub scholar: String,
    pub twitter: String,
}

impl SocialLinks {
    /// Classify each `{link, icon}` entry in order; later entries win.
    pub fn apply(&mut self, entries: &[Value]) -> Result<()> {
        for entry in entries {
            let Value::Object(map) = entry else {
                continue;
            };
            let link = text_in(map, "link", "social.link")?;
            if link.is_empty() {
                continue;
            }
            let icon = text_in(map, "icon", "social.icon")?;

            match classify_social(&icon, &link) {
                Some(SocialKind::Email) => {
                    self.email = link.strip_prefix("mailto:").unwrap_or(&link).to_string()
                }
                Some(SocialKind::Linkedin) => self.linkedin = link,
                Some(SocialKind::Github) => self.github = link,
                Some(SocialKind::Scholar) => self.scholar = link,
                Some(SocialKind::Twitter) => self.twitter = link,
                Some(SocialKind::Website) => self.website = link,
                None => {}
            }
        }
        Ok(())
    }
}

fn as_map<'v>(value: &'v Value, field: &str) -> Result<&'v Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| AggregatorError::field_shape(field, "a mapping"))
}

fn text_in(map: &Map<String, Value>, key: &str, field: &str) -> Result<String> {
    match map.get(key) {
        Some(value) => Ok(scalar_text(field, value)?.unwrap_or_default()),
        None => Ok(String::new()),
    }
}
