use crate::assets::FEATURED;
use crate::config::RunContext;
use crate::fields::{Candidate::*, Chain, Resolver};
use crate::source::SourceDocument;
use crate::traits::ContentKind;
use crate::types::{ContentItem, Grant, GrantStatus, Result};
use crate::utils::time;
use chrono::NaiveDate;
use std::cmp::Ordering;

pub const TITLE: Chain = &[Key("title")];
pub const AGENCY: Chain = &[First("agencies"), Key("agency")];
pub const AGENCIES: Chain = &[Key("agencies"), Key("agency")];
pub const AMOUNT: Chain = &[Key("amount")];
pub const START_DATE: Chain = &[Key("start_date"), Key("startDate")];
pub const END_DATE: Chain = &[Key("end_date"), Key("endDate")];
pub const DESCRIPTION: Chain = &[Body, Key("description")];
pub const TAGS: Chain = &[Key("tags")];
pub const IMAGE: Chain = &[Url("image"), Sidecar(FEATURED)];

/// Funded research projects under `research/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResearchSource;

impl ContentKind for ResearchSource {
    type Record = Grant;

    fn collection(&self) -> &'static str {
        "research"
    }

    fn output_file(&self) -> &'static str {
        "research-generated.json"
    }

    fn build(&self, doc: &SourceDocument, ctx: &RunContext) -> Result<Grant> {
        let fields = Resolver::new(doc);
        let start_date = fields.text_or_default(START_DATE)?;
        let end_date = fields.text_or_default(END_DATE)?;

        Ok(Grant {
            id: doc.folder.clone(),
            title: fields.text_or_default(TITLE)?,
            agency: fields.text_or_default(AGENCY)?,
            agencies: fields.list(AGENCIES)?,
            amount: fields.text_or_default(AMOUNT)?,
            duration: duration(&start_date, &end_date),
            year: time::year_or(Some(start_date.as_str()), ctx.current_year()),
            status: status(&end_date, ctx.today),
            start_date,
            end_date,
            description: fields.text_or_default(DESCRIPTION)?,
            tags: fields.list(TAGS)?,
            image: fields.text_or_default(IMAGE)?,
            folder: doc.folder.clone(),
        })
    }

    fn compare(&self, a: &Grant, b: &Grant) -> Ordering {
        time::newest_first(a.primary_date(), b.primary_date())
    }
}

/// `start - end`, or just `start` for open-ended grants.
pub fn duration(start_date: &str, end_date: &str) -> String {
    if end_date.is_empty() {
        start_date.to_string()
    } else {
        format!("{} - {}", start_date, end_date)
    }
}

/// A grant is past only once the last day of its end date has gone by.
/// Partial end dates such as `2025` or `2025-03` run to the end of that
/// period.
pub fn status(end_date: &str, today: NaiveDate) -> GrantStatus {
    match time::end_of_period(end_date) {
        Some(end) if end < today => GrantStatus::Past,
        _ => GrantStatus::Current,
    }
}
