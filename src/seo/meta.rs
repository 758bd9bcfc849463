use crate::config::SiteConfig;
use crate::render::html_escape;

/// Build meta tags HTML string for a page. `title: None` means the site's
/// own title (the home page).
pub fn build_meta(
    config: &SiteConfig,
    title: Option<&str>,
    description: Option<&str>,
    path: &str,
) -> String {
    let page_title = match title {
        Some(t) => format!("{} | {}", t, config.site_name),
        None => config.site_title.clone(),
    };

    let page_desc = description.unwrap_or(&config.description);
    let canonical = format!("{}{}", config.base_url(), path);

    let mut meta = String::new();

    // Basic meta
    meta.push_str(&format!(
        r#"<title>{}</title>
<meta name="description" content="{}">
<link rel="canonical" href="{}">"#,
        html_escape(&page_title),
        html_escape(page_desc),
        html_escape(&canonical),
    ));

    // Open Graph
    meta.push_str(&format!(
        r#"
<meta property="og:title" content="{}">
<meta property="og:description" content="{}">
<meta property="og:url" content="{}">
<meta property="og:site_name" content="{}">
<meta property="og:type" content="website">"#,
        html_escape(&page_title),
        html_escape(page_desc),
        html_escape(&canonical),
        html_escape(&config.site_name),
    ));

    meta
}

/// OpenGraph image tag for pages centred on one picture.
pub fn build_og_image(config: &SiteConfig, image_path: &str) -> String {
    format!(
        "\n<meta property=\"og:image\" content=\"{}{}\">",
        html_escape(config.base_url()),
        html_escape(image_path)
    )
}
