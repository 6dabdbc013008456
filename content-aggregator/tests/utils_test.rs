use chrono::{Datelike, NaiveDate, Timelike};
use content_aggregator::utils::text::{
    author_display_name, display_name_from_folder, join_authors, slug, strip_status_prefix,
};
use content_aggregator::utils::time::{end_of_period, newest_first, parse_date, year_or};
use content_aggregator::utils::url::{classify_social, points_to, SocialKind};
use std::cmp::Ordering;

#[test]
fn test_parse_date_forms() {
    let cases = [
        ("2023-05-01", (2023, 5, 1)),
        ("2023-05-01T10:30:00Z", (2023, 5, 1)),
        ("2023-05-01T23:30:00-05:00", (2023, 5, 1)),
        ("2023-05-01 08:00:00", (2023, 5, 1)),
        ("2023/05/01", (2023, 5, 1)),
        ("2023-05", (2023, 5, 1)),
        ("2023", (2023, 1, 1)),
    ];
    for (raw, (y, m, d)) in cases {
        let parsed = parse_date(raw).unwrap_or_else(|| panic!("{} should parse", raw));
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (y, m, d), "{}", raw);
    }

    assert_eq!(parse_date("2023-05-01T10:30:00Z").unwrap().hour(), 10);
    assert!(parse_date("").is_none());
    assert!(parse_date("next spring").is_none());
    assert!(parse_date("2023-13-01").is_none());
}

#[test]
fn test_year_falls_back() {
    assert_eq!(year_or(Some("2023-05-01"), 1999), 2023);
    assert_eq!(year_or(Some("soon"), 1999), 1999);
    assert_eq!(year_or(None, 1999), 1999);
}

#[test]
fn test_newest_first_puts_undated_last() {
    assert_eq!(newest_first(Some("2024-06-01"), Some("2022-01-01")), Ordering::Less);
    assert_eq!(newest_first(Some("2022-01-01"), Some("2024-06-01")), Ordering::Greater);
    assert_eq!(newest_first(None, Some("1900-01-01")), Ordering::Greater);
    assert_eq!(newest_first(Some("garbage"), Some("1900-01-01")), Ordering::Greater);
    assert_eq!(newest_first(None, None), Ordering::Equal);
}

#[test]
fn test_end_of_period() {
    let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

    assert_eq!(end_of_period("2025"), Some(day(2025, 12, 31)));
    assert_eq!(end_of_period("2024-02"), Some(day(2024, 2, 29)));
    assert_eq!(end_of_period("2025-12"), Some(day(2025, 12, 31)));
    assert_eq!(end_of_period("2025-03-14"), Some(day(2025, 3, 14)));
    assert_eq!(end_of_period("2025-03-14T18:00:00Z"), Some(day(2025, 3, 14)));
    assert_eq!(end_of_period(""), None);
    assert_eq!(end_of_period("when funding ends"), None);
}

#[test]
fn test_author_names() {
    let aliases = vec![("admin".to_string(), "Amanda Watson".to_string())];

    assert_eq!(author_display_name("admin", &aliases), "Amanda Watson");
    assert_eq!(author_display_name("jane_doe", &aliases), "jane doe");
    assert_eq!(
        join_authors(&["admin".to_string(), "jane_doe".to_string()], &aliases),
        "Amanda Watson, jane doe"
    );
}

#[test]
fn test_folder_names() {
    assert_eq!(display_name_from_folder("watson_amanda"), "amanda watson");
    assert_eq!(display_name_from_folder("Apple_Ann"), "Ann Apple");
    assert_eq!(display_name_from_folder("cher"), "cher");
    assert_eq!(slug("Watson_Amanda"), "watson-amanda");
}

#[test]
fn test_status_prefix() {
    assert_eq!(strip_status_prefix("Expected PhD in CS"), "PhD in CS");
    assert_eq!(strip_status_prefix("current  MS"), "MS");
    assert_eq!(strip_status_prefix("Currently enrolled"), "Currently enrolled");
    assert_eq!(strip_status_prefix("2021"), "2021");
}

#[test]
fn test_social_classification() {
    assert_eq!(classify_social("envelope", "me@uni.edu"), Some(SocialKind::Email));
    assert_eq!(classify_social("", "mailto:me@uni.edu"), Some(SocialKind::Email));
    assert_eq!(classify_social("", "https://www.linkedin.com/in/me"), Some(SocialKind::Linkedin));
    assert_eq!(classify_social("GitHub", "https://example.org"), Some(SocialKind::Github));
    assert_eq!(
        classify_social("", "https://scholar.google.com/citations?user=1"),
        Some(SocialKind::Scholar)
    );
    assert_eq!(classify_social("", "https://x.com/me"), Some(SocialKind::Twitter));
    assert_eq!(classify_social("globe", "https://me.dev"), Some(SocialKind::Website));
    assert_eq!(classify_social("", "https://linux.com/me"), None);
    assert_eq!(classify_social("rss", "https://me.dev/feed"), None);
}

#[test]
fn test_points_to_matches_subdomains_only() {
    assert!(points_to("https://gist.github.com/me", "github.com"));
    assert!(!points_to("https://notgithub.com/me", "github.com"));
    assert!(points_to("github.com/me", "github.com"));
}
