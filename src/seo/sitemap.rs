use crate::config::SiteConfig;
use crate::models::category::Filter;
use crate::models::post;

/// Top-level pages with their sitemap priority.
const PAGES: &[(&str, &str)] = &[
    ("", "1.0"),
    ("/about", "0.8"),
    ("/projects", "0.8"),
    ("/blog", "0.8"),
    ("/contact", "0.5"),
];

/// Generate sitemap.xml content.
pub fn generate_sitemap(config: &SiteConfig) -> String {
    let site_url = config.base_url();

    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
"#,
    );

    for (path, priority) in PAGES {
        xml.push_str(&format!(
            "  <url><loc>{}{}</loc><changefreq>weekly</changefreq><priority>{}</priority></url>\n",
            site_url, path, priority
        ));
    }

    // Story permalinks
    for p in post::display_order(Filter::All) {
        xml.push_str(&format!(
            "  <url><loc>{}/blog/{}</loc><lastmod>{}</lastmod><priority>0.6</priority></url>\n",
            site_url, p.key, p.date
        ));
    }

    xml.push_str("</urlset>");
    xml
}

/// Generate robots.txt content with the sitemap URL.
pub fn generate_robots(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml",
        config.base_url()
    )
}
