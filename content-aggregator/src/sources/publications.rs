use crate::assets::{CITATION, FEATURED};
use crate::config::RunContext;
use crate::fields::{Candidate::*, Chain, Resolver};
use crate::source::SourceDocument;
use crate::traits::ContentKind;
use crate::types::{ContentItem, Publication, Result};
use crate::utils::{text, time};
use std::cmp::Ordering;

pub const TITLE: Chain = &[Key("title")];
pub const AUTHORS: Chain = &[Key("authors")];
pub const VENUE: Chain = &[Key("publication"), Key("venue")];
pub const DATE: Chain = &[Key("date")];
pub const PUBLICATION_TYPES: Chain = &[Key("publication_types")];
pub const TAGS: Chain = &[Key("tags")];
pub const ABSTRACT: Chain = &[Body, Key("abstract")];
pub const PDF: Chain = &[Key("url_pdf")];
pub const POSTER: Chain = &[Key("url_poster")];
pub const SLIDES: Chain = &[Key("url_slides")];
pub const CODE: Chain = &[Key("url_code")];
pub const FEATURED_IMAGE: Chain = &[Url("image"), Sidecar(FEATURED)];

/// Papers under `publications/`.
#[derive(Debug, Clone)]
pub struct PublicationsSource {
    author_aliases: Vec<(String, String)>,
}

impl PublicationsSource {
    pub fn new(author_aliases: Vec<(String, String)>) -> Self {
        Self { author_aliases }
    }

    /// The paper's own PDF, named after its folder.
    fn bundled_pdf(&self, doc: &SourceDocument) -> Option<String> {
        doc.sidecar_url(&[format!("{}.pdf", doc.folder)])
    }
}

impl ContentKind for PublicationsSource {
    type Record = Publication;

    fn collection(&self) -> &'static str {
        "publications"
    }

    fn output_file(&self) -> &'static str {
        "publications-generated.json"
    }

    fn build(&self, doc: &SourceDocument, ctx: &RunContext) -> Result<Publication> {
        let fields = Resolver::new(doc);
        let date = fields.text(DATE)?;
        let authors = fields.list(AUTHORS)?;

        let pdf = match fields.text(PDF)? {
            Some(url) => url,
            None => self.bundled_pdf(doc).unwrap_or_default(),
        };

        Ok(Publication {
            id: doc.folder.clone(),
            title: fields.text_or_default(TITLE)?,
            authors: text::join_authors(&authors, &self.author_aliases),
            venue: fields.text_or_default(VENUE)?,
            year: time::year_or(date.as_deref(), ctx.current_year()),
            date,
            publication_types: fields.list(PUBLICATION_TYPES)?,
            tags: fields.list(TAGS)?,
            abstract_text: fields.text_or_default(ABSTRACT)?,
            pdf,
            poster: fields.text_or_default(POSTER)?,
            slides: fields.text_or_default(SLIDES)?,
            code: fields.text_or_default(CODE)?,
            citation: doc.read_sidecar(CITATION),
            featured_image: fields.text(FEATURED_IMAGE)?,
            folder: doc.folder.clone(),
        })
    }

    fn compare(&self, a: &Publication, b: &Publication) -> Ordering {
        time::newest_first(a.primary_date(), b.primary_date())
    }
}
