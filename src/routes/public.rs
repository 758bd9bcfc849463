use rocket::response::content::{RawHtml, RawXml};
use rocket::State;

use crate::config::SiteConfig;
use crate::models::post;
use crate::render::{self, Page};
use crate::selection::UiState;
use crate::seo;
use crate::views;

// Title and description for a page whose overlay may be open: an open
// story takes over the meta so shared links preview the story.
fn meta_for(config: &SiteConfig, state: &UiState, title: Option<&str>, path: &str) -> String {
    match state.selection.record() {
        Some(p) => {
            let mut meta = seo::build_meta(config, Some(p.title), Some(p.description), path);
            meta.push_str(&seo::build_og_image(config, p.image));
            meta
        }
        None => seo::build_meta(config, title, None, path),
    }
}

// ── Homepage ───────────────────────────────────────────

#[get("/?<post>")]
pub fn homepage(config: &State<SiteConfig>, post: Option<&str>) -> RawHtml<String> {
    let state = UiState::from_query("/", None, post);
    let body = views::home::render(config, &state);
    let meta = meta_for(config, &state, None, "/");
    RawHtml(render::render_page(config, Page::Home, &body, &meta))
}

// ── About / Projects / Contact ─────────────────────────

#[get("/about")]
pub fn about(config: &State<SiteConfig>) -> RawHtml<String> {
    let meta = seo::build_meta(config, Some("About"), None, "/about");
    RawHtml(render::render_page(config, Page::About, &views::about::render(), &meta))
}

#[get("/projects")]
pub fn projects(config: &State<SiteConfig>) -> RawHtml<String> {
    let meta = seo::build_meta(config, Some("Projects"), None, "/projects");
    RawHtml(render::render_page(config, Page::Projects, &views::projects::render(), &meta))
}

#[get("/contact")]
pub fn contact(config: &State<SiteConfig>) -> RawHtml<String> {
    let meta = seo::build_meta(config, Some("Contact"), None, "/contact");
    RawHtml(render::render_page(
        config,
        Page::Contact,
        &views::contact::render(config),
        &meta,
    ))
}

// ── Blog ───────────────────────────────────────────────

#[get("/blog?<filter>&<post>")]
pub fn blog_list(
    config: &State<SiteConfig>,
    filter: Option<&str>,
    post: Option<&str>,
) -> RawHtml<String> {
    let state = UiState::from_query("/blog", filter, post);
    let body = views::blog::render(config, &state);
    let meta = meta_for(config, &state, Some("Grassroot Ideas"), "/blog");
    RawHtml(render::render_page(config, Page::Blog, &body, &meta))
}

#[get("/blog/<key>")]
pub fn blog_single(config: &State<SiteConfig>, key: &str) -> Option<RawHtml<String>> {
    let record = post::find(key)?;

    let path = format!("/blog/{}", record.key);
    let mut meta = seo::build_meta(config, Some(record.title), Some(record.description), &path);
    meta.push_str(&seo::build_og_image(config, record.image));
    meta.push_str(&seo::build_post_jsonld(config, record));

    let body = format!(
        "<section class=\"permalink\">\
         <a href=\"/blog\" class=\"back\">&larr; Grassroot Ideas</a>\
         {}\
         </section>",
        views::modal::render_article(config, record, "post-title")
    );

    Some(RawHtml(render::render_page(config, Page::Blog, &body, &meta)))
}

// ── RSS Feed ───────────────────────────────────────────

#[get("/feed")]
pub fn rss_feed(config: &State<SiteConfig>) -> RawXml<String> {
    RawXml(crate::feed::generate_feed(config))
}

// ── Sitemap ────────────────────────────────────────────

#[get("/sitemap.xml")]
pub fn sitemap(config: &State<SiteConfig>) -> RawXml<String> {
    RawXml(seo::generate_sitemap(config))
}

// ── Robots.txt ─────────────────────────────────────────

#[get("/robots.txt")]
pub fn robots(config: &State<SiteConfig>) -> String {
    seo::generate_robots(config)
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        homepage,
        about,
        projects,
        contact,
        blog_list,
        blog_single,
        rss_feed,
        sitemap,
        robots,
    ]
}
