use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rss::{CategoryBuilder, ChannelBuilder, GuidBuilder, ItemBuilder};

use crate::config::SiteConfig;
use crate::models::category::Filter;
use crate::models::post;

/// Generate RSS 2.0 XML feed for the story catalog, newest first.
pub fn generate_feed(config: &SiteConfig) -> String {
    let site_url = config.base_url();

    // RSS wants RFC 2822 dates. Stories carry no time of
    // day, so midnight UTC stands in.
    let format_rfc2822 = |date: NaiveDate| -> String {
        let utc: DateTime<Utc> =
            DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc);
        utc.format("%a, %d %b %Y %H:%M:%S +0000").to_string()
    };

    let posts = post::display_order(Filter::All);

    let items: Vec<rss::Item> = posts
        .iter()
        .map(|p| {
            let link = format!("{}/blog/{}", site_url, p.key);
            ItemBuilder::default()
                .title(Some(p.title.to_string()))
                .link(Some(link.clone()))
                .guid(Some(GuidBuilder::default().value(link).permalink(true).build()))
                .pub_date(Some(format_rfc2822(p.date)))
                .description(Some(p.description.to_string()))
                .categories(vec![CategoryBuilder::default()
                    .name(p.category.label().to_string())
                    .build()])
                .build()
        })
        .collect();

    let last_build = posts.first().map(|p| format_rfc2822(p.date));

    let channel = ChannelBuilder::default()
        .title("Grassroot Ideas".to_string())
        .link(format!("{}/blog", site_url))
        .description(
            "Breakthrough innovations emerging from developing countries.".to_string(),
        )
        .language(Some("en".to_string()))
        .last_build_date(last_build)
        .items(items)
        .build();

    channel.to_string()
}
