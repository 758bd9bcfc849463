use serde_json::json;

use crate::config::SiteConfig;
use crate::models::post::PostRecord;

/// Build JSON-LD structured data for a story permalink.
pub fn build_post_jsonld(config: &SiteConfig, post: &PostRecord) -> String {
    let site_url = config.base_url();
    let ld = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title,
        "description": post.description,
        "url": format!("{}/blog/{}", site_url, post.key),
        "datePublished": post.date,
        "image": format!("{}{}", site_url, post.image),
        "articleSection": post.category.label(),
        "author": {
            "@type": "Person",
            "name": config.site_name,
        },
    });

    format!(
        "<script type=\"application/ld+json\">\n{}\n</script>",
        serde_json::to_string_pretty(&ld).unwrap_or_default()
    )
}
