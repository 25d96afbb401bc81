//! End-to-end tests for `analyze` and `recommendations` on JSON datasets.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use trendcraft_core::Dataset;
use trendcraft_trends::{
    analyze, analyze_with_rng, recommendations, run_stages, AnalysisError, EngagementTrend,
    Insights, PlatformEngagement, GENERIC_RECOMMENDATIONS,
};

fn dataset(value: serde_json::Value) -> Dataset {
    serde_json::from_value(value).expect("dataset json should deserialize")
}

fn mixed_dataset() -> Dataset {
    dataset(json!({
        "youtube": [
            {"title": "Ultimate SEO Secrets for 2024", "published_at": "2024-01-10T14:00:00Z",
             "keyword": "SEO", "platform": "youtube",
             "engagement_metrics": {"views": 9000, "likes": 450}},
            {"title": "Quick marketing tips", "published_at": "2024-01-11T14:30:00",
             "keyword": "SEO", "platform": "youtube",
             "engagement_metrics": {"views": 1000, "likes": 30}},
            {"title": "AI marketing explained", "published_at": "2024-01-12 09:15:00",
             "keyword": "AI marketing", "platform": "youtube",
             "engagement_metrics": {"views": 2000, "likes": 80}}
        ],
        "reddit": [
            {"title": "What works for social?", "published_at": "2024-01-09T18:05:00+02:00",
             "keyword": "social media", "platform": "reddit",
             "engagement_metrics": {"upvotes": 120, "comments": 30}}
        ],
        "google_news": [
            {"title": "Marketing budgets grow", "published_at": "2024-01-08T07:00:00Z",
             "keyword": "digital marketing", "platform": "google_news",
             "engagement_metrics": {}}
        ],
        "tiktok": []
    }))
}

#[test]
fn video_engagement_averages() {
    let insights = analyze(&dataset(json!({
        "youtube": [
            {"engagement_metrics": {"views": 100, "likes": 10}},
            {"engagement_metrics": {"views": 300, "likes": 30}}
        ]
    })));
    let PlatformEngagement::Video(video) = &insights.engagement_insights["youtube"] else {
        panic!("youtube should produce a video block");
    };
    assert_eq!(video.avg_views, 200);
    assert_eq!(video.avg_likes, 20);
    assert!((video.view_to_like_ratio - 0.1).abs() < f64::EPSILON);
    assert_eq!(video.max_views, 300);
    assert_eq!(video.min_views, 100);
}

#[test]
fn forum_without_upvotes_has_zero_rate() {
    let insights = analyze(&dataset(json!({
        "reddit": [{"engagement_metrics": {"upvotes": 0, "comments": 0}}]
    })));
    let PlatformEngagement::Forum(forum) = &insights.engagement_insights["reddit"] else {
        panic!("reddit should produce a forum block");
    };
    assert!(forum.engagement_rate.abs() < f64::EPSILON);
}

#[test]
fn unparseable_timestamps_land_in_business_hours() {
    let data = dataset(json!({
        "blog": [
            {"published_at": "last Tuesday"},
            {"published_at": "2024/01/05"},
            {"title": "no timestamp"}
        ]
    }));
    for seed in 0..20 {
        let insights = analyze_with_rng(&data, &mut StdRng::seed_from_u64(seed));
        let times = &insights.best_posting_times["blog"];
        assert_eq!(times.sample_size, 3);
        assert!(times.peak_hours.iter().all(|h| (9..=17).contains(h)));
    }
}

#[test]
fn empty_insights_recommend_generic_advice() {
    let recs = recommendations(&Insights::default());
    assert_eq!(recs, GENERIC_RECOMMENDATIONS.map(String::from).to_vec());
}

#[test]
fn keyword_average_is_integer_division() {
    let insights = analyze(&dataset(json!({
        "youtube": [
            {"keyword": "ai", "engagement_metrics": {"views": 40}},
            {"keyword": "ai", "engagement_metrics": {"views": 60}},
            {"keyword": "seo", "engagement_metrics": {"views": 50}}
        ]
    })));
    let keywords = &insights.keyword_performance["youtube"];
    assert_eq!(keywords["ai"].avg_engagement, 50);
    assert_eq!(keywords["seo"].avg_engagement, 50);
}

#[test]
fn every_non_empty_platform_is_summarized_with_its_record_count() {
    let data = mixed_dataset();
    let insights = analyze(&data);
    for (platform, records) in &data {
        if records.is_empty() {
            continue;
        }
        assert_eq!(insights.platform_insights[platform].total_items, records.len());
        assert_eq!(
            insights.engagement_insights[platform].total_items(),
            records.len()
        );
    }
}

#[test]
fn empty_platforms_appear_nowhere() {
    let insights = analyze(&mixed_dataset());
    assert!(!insights.best_posting_times.contains_key("tiktok"));
    assert!(!insights.engagement_insights.contains_key("tiktok"));
    assert!(!insights.keyword_performance.contains_key("tiktok"));
    assert!(!insights.platform_insights.contains_key("tiktok"));
}

#[test]
fn peak_hours_are_sorted_and_bounded() {
    let insights = analyze(&mixed_dataset());
    for times in insights.best_posting_times.values() {
        assert!(times.peak_hours.len() <= 3);
        assert!(times.peak_hours.windows(2).all(|w| w[0] < w[1]));
        assert!(times.peak_hours.iter().all(|h| *h <= 23));
    }
}

#[test]
fn parseable_input_is_idempotent() {
    let data = mixed_dataset();
    assert_eq!(analyze(&data), analyze(&data));
}

#[test]
fn mixed_dataset_end_to_end() {
    let insights = analyze(&mixed_dataset());

    let youtube_times = &insights.best_posting_times["youtube"];
    assert_eq!(youtube_times.peak_hours, vec![9, 14]);
    assert_eq!(youtube_times.peak_hour, 14);
    assert_eq!(youtube_times.best_time_range, "9:00 - 14:00");
    // offset is kept as written
    assert_eq!(insights.best_posting_times["reddit"].peak_hours, vec![18]);

    assert_eq!(
        insights.viral_content_patterns.high_engagement_titles,
        vec!["Ultimate SEO Secrets for 2024"]
    );
    assert_eq!(
        insights.viral_content_patterns.common_keywords_in_viral,
        vec!["ultimate", "secrets", "2024"]
    );

    assert!(matches!(
        insights.engagement_insights["google_news"],
        PlatformEngagement::Other(_)
    ));

    let youtube = &insights.platform_insights["youtube"];
    assert_eq!(youtube.date_range, "2024-01-10 to 2024-01-12");
    assert_eq!(youtube.top_keywords, vec!["SEO", "AI marketing"]);
    assert_eq!(youtube.engagement_trend, EngagementTrend::InsufficientData);

    let recs = recommendations(&insights);
    assert_eq!(recs.len(), 5);
    assert_eq!(
        recs[0],
        "📅 Post on google_news between 7:00 - 10:00 for maximum reach"
    );
    assert_eq!(
        recs[3],
        "🔥 Include these keywords in content: ultimate, secrets, 2024"
    );
    assert_eq!(
        recs[4],
        "🎯 Focus on youtube for highest engagement (avg: 4,000)"
    );
}

#[test]
fn counter_overflow_degrades_to_empty_insights() {
    let data = dataset(json!({
        "reddit": [
            {"engagement_metrics": {"upvotes": i64::MAX, "comments": 1}},
            {"engagement_metrics": {"upvotes": 1, "comments": 1}}
        ]
    }));
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        run_stages(&data, &mut rng),
        Err(AnalysisError::Overflow { .. })
    ));
    assert!(analyze(&data).is_empty());
    assert_eq!(
        serde_json::to_value(analyze(&data)).unwrap(),
        json!({
            "best_posting_times": {},
            "viral_content_patterns": {},
            "engagement_insights": {},
            "keyword_performance": {},
            "platform_insights": {}
        })
    );
}

#[test]
fn run_without_video_still_writes_viral_keys() {
    let data = dataset(json!({
        "reddit": [
            {"title": "What works for social?", "published_at": "2024-01-09T18:05Z",
             "keyword": "social media", "engagement_metrics": {"upvotes": 12, "comments": 3}}
        ]
    }));
    let value = serde_json::to_value(analyze(&data)).unwrap();
    assert_eq!(
        value["viral_content_patterns"],
        json!({
            "high_engagement_titles": [],
            "common_keywords_in_viral": [],
            "content_length_pattern": {},
            "emotional_triggers": []
        })
    );
    assert_eq!(value["best_posting_times"]["reddit"]["peak_hour"], 18);
}
