use crate::assets::FEATURED;
use crate::config::RunContext;
use crate::fields::{Candidate::*, Chain, Resolver};
use crate::source::SourceDocument;
use crate::traits::ContentKind;
use crate::types::{ContentItem, NewsItem, Result};
use crate::utils::time;
use std::cmp::Ordering;

pub const TITLE: Chain = &[Key("title")];
pub const DATE: Chain = &[Key("date")];
pub const CATEGORY: Chain = &[Key("category"), First("tags")];
pub const TAGS: Chain = &[Key("tags")];
pub const SUMMARY: Chain = &[Key("summary"), Body];
pub const CONTENT: Chain = &[Body];
pub const IMAGE: Chain = &[Url("image"), Sidecar(FEATURED)];
pub const LINK: Chain = &[Key("link"), Key("url")];

/// Lab news posts under `news/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewsSource;

impl ContentKind for NewsSource {
    type Record = NewsItem;

    fn collection(&self) -> &'static str {
        "news"
    }

    fn output_file(&self) -> &'static str {
        "news-generated.json"
    }

    fn build(&self, doc: &SourceDocument, ctx: &RunContext) -> Result<NewsItem> {
        let fields = Resolver::new(doc);
        let date = fields.text_or_default(DATE)?;

        Ok(NewsItem {
            id: doc.folder.clone(),
            title: fields.text_or_default(TITLE)?,
            year: time::year_or(Some(date.as_str()), ctx.current_year()),
            date,
            category: fields.text_or_default(CATEGORY)?,
            tags: fields.list(TAGS)?,
            summary: fields.text_or_default(SUMMARY)?,
            content: fields.text_or_default(CONTENT)?,
            image: fields.text_or_default(IMAGE)?,
            link: fields.text_or_default(LINK)?,
            folder: doc.folder.clone(),
        })
    }

    fn compare(&self, a: &NewsItem, b: &NewsItem) -> Ordering {
        time::newest_first(a.primary_date(), b.primary_date())
    }
}
