use trendcraft_trends::Insights;

/// Canned copy used when no model could be reached.
#[must_use]
pub fn template_content(topic: &str, platform: &str, insights: &Insights) -> String {
    let lead_keyword = insights
        .viral_content_patterns
        .common_keywords_in_viral
        .first()
        .map_or("marketing", String::as_str);
    let hashtag: String = topic.chars().filter(|c| *c != ' ').collect();
    let lower = topic.to_lowercase();

    match platform {
        "twitter" => format!(
            "📈 {topic} insights!\n\nData shows {lead_keyword} trends evolving.\n\n\
             💡 Key takeaway: Stay updated!\n\n#{hashtag} #Marketing #Data"
        ),
        "linkedin" => format!(
            "Professional perspective on {topic}:\n\nRecent analysis reveals emerging patterns in \
             {lower}. Key finding: Data-driven approaches outperform.\n\n\
             What trends are you noticing?\n\n#Business #Marketing #Strategy"
        ),
        "blog" => format!(
            "# {} Trends Analysis\n\nOur data collection reveals interesting developments in \
             {lower}. Understanding these patterns can inform better strategies.",
            title_case(topic)
        ),
        "instagram" => format!(
            "✨ {topic} update! 📊\n\nData insights show new trends emerging.\n\n\
             💭 What do you think?\n\n👇 Comment below!\n\n#{hashtag} #MarketingTips"
        ),
        _ => format!("Content about {topic} based on data analysis."),
    }
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twitter_template_uses_lead_viral_keyword_and_hashtag() {
        let mut insights = Insights::default();
        insights.viral_content_patterns.common_keywords_in_viral = vec!["automation".to_owned()];
        let text = template_content("AI in marketing", "twitter", &insights);
        assert!(text.contains("Data shows automation trends evolving."));
        assert!(text.ends_with("#AIinmarketing #Marketing #Data"));
    }

    #[test]
    fn twitter_template_defaults_to_marketing() {
        let text = template_content("SEO", "twitter", &Insights::default());
        assert!(text.contains("Data shows marketing trends"));
    }

    #[test]
    fn blog_template_title_cases_heading() {
        let text = template_content("content STRATEGY", "blog", &Insights::default());
        assert!(text.starts_with("# Content Strategy Trends Analysis"));
        assert!(text.contains("developments in content strategy."));
    }

    #[test]
    fn unknown_platform_gets_generic_line() {
        assert_eq!(
            template_content("SEO", "fax", &Insights::default()),
            "Content about SEO based on data analysis."
        );
    }
}
