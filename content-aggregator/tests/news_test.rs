mod common;

use chrono::{Datelike, Local};
use common::Site;
use content_aggregator::{
    AggregatorConfig, AggregatorError, ContentAggregator, NewsItem, NewsSource,
};
use std::fs;

fn news(site: &Site, folder: &str, front_matter: &str, body: &str) {
    site.write(
        "news",
        folder,
        "index.md",
        &format!("---\n{}\n---\n{}\n", front_matter, body),
    );
}

#[test]
fn test_one_record_per_folder_with_index() {
    let site = Site::new();
    news(&site, "award", "title: Award\ndate: 2023-05-01", "We won.");
    news(&site, "visit", "title: Visit\ndate: 2022-02-02", "");
    site.folder("news", "drafts");
    site.write("news", "drafts", "notes.txt", "not an index");
    fs::write(site.content_root().join("news").join("README.md"), "stray file").unwrap();

    let aggregator = ContentAggregator::new(site.config());
    let collection = aggregator.collect(&NewsSource).unwrap();

    let ids: Vec<&str> = collection.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["award", "visit"]);
    assert_eq!(collection.report.written, 2);
    assert_eq!(collection.report.skipped, vec!["drafts".to_string()]);
    assert!(collection.report.failed.is_empty());
    assert_eq!(collection.report.total_seen(), 3);
}

#[test]
fn test_news_field_fallbacks() {
    let site = Site::new();
    news(
        &site,
        "award",
        "title: Best paper\ndate: 2023-05-01\ntags: [awards, nlp]\nurl: https://conf.org/awards",
        "The lab received the best paper award.",
    );

    let aggregator = ContentAggregator::new(site.config());
    let item = aggregator.collect(&NewsSource).unwrap().records.remove(0);

    assert_eq!(
        item,
        NewsItem {
            id: "award".to_string(),
            title: "Best paper".to_string(),
            date: "2023-05-01".to_string(),
            year: 2023,
            category: "awards".to_string(),
            tags: vec!["awards".to_string(), "nlp".to_string()],
            summary: "The lab received the best paper award.".to_string(),
            content: "The lab received the best paper award.".to_string(),
            image: String::new(),
            link: "https://conf.org/awards".to_string(),
            folder: "award".to_string(),
        }
    );
}

#[test]
fn test_year_defaults_to_run_year() {
    let site = Site::new();
    news(&site, "undated", "title: Undated", "");
    news(&site, "fuzzy", "title: Fuzzy\ndate: sometime in spring", "");

    let pinned = ContentAggregator::new(site.config()).collect(&NewsSource).unwrap();
    assert!(pinned.records.iter().all(|r| r.year == 2025));

    let live_config = AggregatorConfig::default()
        .with_content_root(site.content_root())
        .with_data_dir(site.data_dir());
    let live = ContentAggregator::new(live_config).collect(&NewsSource).unwrap();
    let this_year = Local::now().year();
    assert!(live.records.iter().all(|r| r.year == this_year));
}

#[test]
fn test_sidecar_image_and_explicit_override() {
    let site = Site::new();
    news(&site, "with-sidecar", "title: A\ndate: 2024-01-01", "");
    site.write("news", "with-sidecar", "featured.png", "png");
    news(
        &site,
        "with-url",
        "title: B\ndate: 2023-01-01\nimage: https://cdn.example/b.jpg",
        "",
    );
    site.write("news", "with-url", "featured.jpg", "jpg");
    news(&site, "upper-case", "title: C\ndate: 2022-01-01", "");
    site.write("news", "upper-case", "Featured.JPEG", "jpeg");

    let records = ContentAggregator::new(site.config())
        .collect(&NewsSource)
        .unwrap()
        .records;

    assert_eq!(records[0].image, "/news/with-sidecar/featured.png");
    assert_eq!(records[1].image, "https://cdn.example/b.jpg");
    assert_eq!(records[2].image, "/news/upper-case/Featured.JPEG");
}

#[test]
fn test_sorted_newest_first_with_undated_last() {
    let site = Site::new();
    news(&site, "a-old", "title: Old\ndate: 2022-01-01", "");
    news(&site, "b-undated", "title: Undated", "");
    news(&site, "c-new", "title: New\ndate: 2024-06-01", "");

    let records = ContentAggregator::new(site.config())
        .collect(&NewsSource)
        .unwrap()
        .records;

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["c-new", "a-old", "b-undated"]);
}

#[test]
fn test_malformed_folder_does_not_affect_others() {
    let site = Site::new();
    news(&site, "good", "title: Good\ndate: 2024-01-01", "ok");
    site.write("news", "broken", "index.md", "---\ntitle: [oops\n---\n");
    news(&site, "wrong-shape", "title:\n  nested: true", "");

    let report = ContentAggregator::new(site.config()).run(&NewsSource).unwrap();

    assert_eq!(report.written, 1);
    let failed: Vec<&str> = report.failed.iter().map(|f| f.folder.as_str()).collect();
    assert_eq!(failed, vec!["broken", "wrong-shape"]);

    let written: Vec<NewsItem> =
        serde_json::from_str(&site.read_output("news-generated.json")).unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].id, "good");
    assert_eq!(written[0].content, "ok");
}

#[test]
fn test_run_writes_json_array_and_is_idempotent() {
    let site = Site::new();
    news(&site, "one", "title: One\ndate: 2024-01-01", "first");
    news(&site, "two", "title: Two\ndate: 2024-01-01", "second");

    let aggregator = ContentAggregator::new(site.config());
    let report = aggregator.run(&NewsSource).unwrap();
    let first = site.read_output("news-generated.json");

    assert_eq!(
        report.output.as_deref(),
        Some(site.data_dir().join("news-generated.json").as_path())
    );
    let value: serde_json::Value = serde_json::from_str(&first).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[0]["id"], "one");
    assert!(value[0].get("year").unwrap().is_i64());

    aggregator.run(&NewsSource).unwrap();
    let second = site.read_output("news-generated.json");
    assert_eq!(first, second);
    assert!(!site.data_dir().join("news-generated.json.tmp").exists());
}

#[test]
fn test_empty_root_writes_empty_array() {
    let site = Site::new();
    fs::create_dir_all(site.content_root().join("news")).unwrap();

    let report = ContentAggregator::new(site.config()).run(&NewsSource).unwrap();

    assert_eq!(report.written, 0);
    assert_eq!(site.read_output("news-generated.json"), "[]");
}

#[test]
fn test_missing_root_is_fatal() {
    let site = Site::new();

    let result = ContentAggregator::new(site.config()).run(&NewsSource);

    assert!(matches!(result, Err(AggregatorError::RootNotFound { .. })));
    assert!(!site.data_dir().join("news-generated.json").exists());
}

#[test]
fn test_unwritable_output_is_fatal() {
    let site = Site::new();
    news(&site, "one", "title: One", "");
    // A file where the data directory should be.
    fs::create_dir_all(site.path().join("src")).unwrap();
    fs::write(site.data_dir(), "occupied").unwrap();

    let result = ContentAggregator::new(site.config()).run(&NewsSource);

    assert!(matches!(result, Err(AggregatorError::Write { .. })));
}

#[test]
fn test_hugo_academic_news_page() {
    let site = Site::new();
    site.write(
        "news",
        "party",
        "index.md",
        r#"---
title: "Lab Holiday Party"
subtitle: ""
summary: "We celebrated the end of the semester."
authors: [admin]
tags: [lab-life]
categories: []
date: 2024-12-13T18:00:00-05:00
lastmod: 2024-12-14T09:00:00-05:00
publishDate: 2024-12-13T18:00:00-05:00
featured: false
draft: false
image:
  caption: ""
  focal_point: ""
  preview_only: false
projects: []
---

Photos from the party.
"#,
    );
    site.write("news", "party", "featured.jpg", "jpg");

    let collection = ContentAggregator::new(site.config()).collect(&NewsSource).unwrap();

    assert!(collection.report.failed.is_empty(), "{:?}", collection.report.failed);
    let item = &collection.records[0];
    assert_eq!(item.id, "party");
    assert_eq!(item.year, 2024);
    assert_eq!(item.category, "lab-life");
    assert_eq!(item.summary, "We celebrated the end of the semester.");
    assert_eq!(item.content, "Photos from the party.");
    assert_eq!(item.image, "/news/party/featured.jpg");
}

#[cfg(unix)]
#[test]
fn test_symlinked_sidecar_is_found() {
    let site = Site::new();
    news(&site, "linked", "title: Linked", "");
    let target = site.path().join("shared-cover.png");
    fs::write(&target, "png").unwrap();
    std::os::unix::fs::symlink(&target, site.folder("news", "linked").join("featured.png"))
        .unwrap();

    let item = ContentAggregator::new(site.config())
        .collect(&NewsSource)
        .unwrap()
        .records
        .remove(0);

    assert_eq!(item.image, "/news/linked/featured.png");
}
