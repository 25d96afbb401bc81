use chrono::TimeZone;

use super::*;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
}

fn entry(platform: &str, topic: &str, length: usize, tracked_at: DateTime<Utc>) -> ContentEntry {
    ContentEntry {
        metrics_id: Uuid::new_v4(),
        platform: platform.to_owned(),
        topic: topic.to_owned(),
        length,
        model_used: "template".to_owned(),
        tracked_at,
    }
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("trendcraft-{name}-{}.json", std::process::id()))
}

#[test]
fn track_updates_platform_stats() {
    let mut store = MetricsStore::default();
    store.track(entry("twitter", "SEO", 200, at(1, 9)));
    store.track(entry("twitter", "SEO", 100, at(2, 9)));
    store.track(entry("linkedin", "AI", 1200, at(2, 10)));

    let twitter = &store.platform_stats["twitter"];
    assert_eq!(twitter.total_content, 2);
    assert!((twitter.avg_length - 150.0).abs() < f64::EPSILON);
    assert_eq!(twitter.last_posted, Some(at(2, 9)));
    assert_eq!(store.platform_stats["linkedin"].total_content, 1);
}

#[test]
fn zero_length_entries_do_not_drag_average() {
    let mut store = MetricsStore::default();
    store.track(entry("blog", "SEO", 500, at(1, 9)));
    store.track(entry("blog", "SEO", 0, at(1, 10)));

    let blog = &store.platform_stats["blog"];
    assert_eq!(blog.total_content, 2);
    assert!((blog.avg_length - 500.0).abs() < f64::EPSILON);
}

#[test]
fn trends_only_count_the_window() {
    let mut store = MetricsStore::default();
    store.track(entry("twitter", "old", 100, at(1, 9)));
    store.track(entry("twitter", "SEO", 100, at(9, 9)));
    store.track(entry("linkedin", "SEO", 201, at(10, 9)));
    store.track(entry("twitter", "AI", 150, at(10, 12)));

    let trends = store.analyze_trends(7, at(10, 18)).unwrap();
    assert_eq!(trends.total_content, 3);
    assert_eq!(trends.platform_distribution["twitter"], 2);
    assert_eq!(trends.platform_distribution["linkedin"], 1);
    assert!((trends.average_length - 150.3).abs() < 1e-9);
    assert_eq!(
        trends.top_topics,
        vec![
            TopicCount {
                topic: "SEO".to_owned(),
                count: 2
            },
            TopicCount {
                topic: "AI".to_owned(),
                count: 1
            },
        ]
    );
    assert_eq!(store.trend_analysis, Some(trends));
}

#[test]
fn empty_window_clears_trend_analysis() {
    let mut store = MetricsStore::default();
    store.track(entry("twitter", "SEO", 100, at(1, 9)));
    assert!(store.analyze_trends(30, at(2, 9)).is_some());
    assert!(store.analyze_trends(1, at(20, 9)).is_none());
    assert!(store.trend_analysis.is_none());
}

#[test]
fn summary_status_follows_content() {
    assert_eq!(MetricsStore::default().summary().overall_status, "Inactive");

    let mut store = MetricsStore::default();
    store.track(entry("twitter", "SEO", 100, at(1, 9)));
    store.track(entry("blog", "SEO", 900, at(1, 9)));
    let summary = store.summary();
    assert_eq!(summary.overall_status, "Active");
    assert_eq!(summary.platforms_used, vec!["blog", "twitter"]);
}

#[test]
fn report_lists_platforms_and_topics() {
    let mut store = MetricsStore::default();
    store.track(entry("twitter", "SEO", 245, at(5, 9)));
    store.analyze_trends(7, at(6, 9));

    let report = store.render_report(at(6, 9));
    assert!(report.starts_with("📈 PERFORMANCE METRICS REPORT\n"));
    assert!(report.contains("Generated: 2024-03-06 09:00"));
    assert!(report.contains("  TWITTER:\n    • Total Posts: 1\n    • Avg Length: 245 chars"));
    assert!(report.contains("    • Last Posted: 2024-03-05"));
    assert!(report.contains("  Period: Last 7 days"));
    assert!(report.contains("  • SEO: 1 posts"));
}

#[test]
fn save_and_load_preserve_entries() {
    let path = temp_path("metrics");
    let mut store = MetricsStore::default();
    store.track(entry("instagram", "Reels", 180, at(3, 9)));
    store.save(&path, at(3, 10)).unwrap();

    let loaded = MetricsStore::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.content_performance, store.content_performance);
    assert_eq!(loaded.last_updated, Some(at(3, 10)));
}

#[test]
fn missing_file_loads_empty() {
    let store = MetricsStore::load(std::path::Path::new("/nonexistent/metrics.json")).unwrap();
    assert!(store.content_performance.is_empty());
}

#[test]
fn entry_from_generation_result() {
    let result = GenerationResult {
        success: true,
        content: "Fresh tips".to_owned(),
        topic: "SEO".to_owned(),
        platform: "twitter".to_owned(),
        model_used: "llama".to_owned(),
        length: 10,
        max_length: 280,
        insights_used: Vec::new(),
        error: None,
    };
    let entry = ContentEntry::from_result(&result, at(4, 9));
    assert_eq!(entry.platform, "twitter");
    assert_eq!(entry.length, 10);
    assert_eq!(entry.model_used, "llama");
}
