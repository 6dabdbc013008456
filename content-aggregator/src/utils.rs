/// Date utilities
pub mod time {
    use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime};
    use std::cmp::Ordering;

    const DATE_TIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

    /// Parse a full or partial calendar date as written in front matter.
    ///
    /// Partial dates (`2023-05`, `2023`) resolve to the first day of the
    /// period. Zoned timestamps keep their written wall-clock time.
    pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_local());
        }
        if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z") {
            return Some(dt.naive_local());
        }
        for format in DATE_TIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(dt);
            }
        }
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
                return date.and_hms_opt(0, 0, 0);
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0);
        }
        if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
            return raw
                .parse()
                .ok()
                .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
                .and_then(|date| date.and_hms_opt(0, 0, 0));
        }
        None
    }

    /// Calendar year of `raw`, or `fallback` when it is missing or unparseable.
    pub fn year_or(raw: Option<&str>, fallback: i32) -> i32 {
        raw.and_then(parse_date)
            .map(|dt| dt.year())
            .unwrap_or(fallback)
    }

    /// Order two raw dates newest first. Missing or unparseable dates count
    /// as the oldest possible date.
    pub fn newest_first(a: Option<&str>, b: Option<&str>) -> Ordering {
        match (a.and_then(parse_date), b.and_then(parse_date)) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Last day covered by `raw`. Partial dates resolve to the end of their
    /// period: `2025` to Dec 31, `2025-02` to the last day of February.
    pub fn end_of_period(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
            return raw
                .parse()
                .ok()
                .and_then(|year| NaiveDate::from_ymd_opt(year, 12, 31));
        }
        if let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d") {
            return first
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt());
        }
        parse_date(raw).map(|dt| dt.date())
    }
}

/// Name and label rewriting
pub mod text {
    const STATUS_PREFIXES: &[&str] = &["current", "expected"];

    /// Display name for an author identifier: aliases first, otherwise
    /// underscores become spaces.
    pub fn author_display_name(author: &str, aliases: &[(String, String)]) -> String {
        aliases
            .iter()
            .find(|(identifier, _)| identifier == author)
            .map(|(_, display)| display.clone())
            .unwrap_or_else(|| author.replace('_', " "))
    }

    pub fn join_authors(authors: &[String], aliases: &[(String, String)]) -> String {
        authors
            .iter()
            .map(|author| author_display_name(author, aliases))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `lastname_firstname` folder names read as `firstname lastname`.
    pub fn display_name_from_folder(folder: &str) -> String {
        let parts: Vec<&str> = folder.split('_').collect();
        if parts.len() > 1 {
            format!("{} {}", parts[1], parts[0])
        } else {
            folder.to_string()
        }
    }

    pub fn slug(folder: &str) -> String {
        folder.to_lowercase().replace('_', "-")
    }

    /// Drop a leading "Current " or "Expected " (any case).
    pub fn strip_status_prefix(label: &str) -> &str {
        for prefix in STATUS_PREFIXES {
            let Some(head) = label.get(..prefix.len()) else {
                continue;
            };
            let rest = &label[prefix.len()..];
            if head.eq_ignore_ascii_case(prefix) && rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
        label
    }

    pub fn mentions(haystack: &str, word: &str) -> bool {
        haystack.to_lowercase().contains(word)
    }
}

/// Link classification for profile pages
pub mod url {
    use url::Url;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SocialKind {
        Email,
        Linkedin,
        Github,
        Scholar,
        Twitter,
        Website,
    }

    /// Extract the lower-cased host from a URL
    pub fn extract_host(link: &str) -> Option<String> {
        Url::parse(link)
            .ok()
            .and_then(|url| url.host_str().map(|host| host.to_lowercase()))
    }

    /// Whether `link` points at `domain` or one of its subdomains. Links that
    /// do not parse as URLs are matched by substring.
    pub fn points_to(link: &str, domain: &str) -> bool {
        match extract_host(link) {
            Some(host) => host == domain || host.ends_with(&format!(".{}", domain)),
            None => link.to_lowercase().contains(domain),
        }
    }

    /// Decide which profile field a `{link, icon}` social entry fills.
    pub fn classify_social(icon: &str, link: &str) -> Option<SocialKind> {
        let icon = icon.to_lowercase();

        if icon == "envelope" || link.starts_with("mailto:") {
            Some(SocialKind::Email)
        } else if icon == "linkedin" || points_to(link, "linkedin.com") {
            Some(SocialKind::Linkedin)
        } else if icon == "github" || points_to(link, "github.com") {
            Some(SocialKind::Github)
        } else if icon == "google-scholar"
            || icon == "scholar"
            || points_to(link, "scholar.google.com")
        {
            Some(SocialKind::Scholar)
        } else if icon == "twitter" || points_to(link, "twitter.com") || points_to(link, "x.com") {
            Some(SocialKind::Twitter)
        } else if icon == "globe" || icon == "link" {
            Some(SocialKind::Website)
        } else {
            None
        }
    }
}
