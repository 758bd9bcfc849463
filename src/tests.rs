#![cfg(test)]

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use rocket::http::Status;
use rocket::local::blocking::Client;

use crate::boot;
use crate::config::SiteConfig;
use crate::feed;
use crate::models::category::{filter_chips, Category, Filter};
use crate::models::experience;
use crate::models::post::{self, PostRecord};
use crate::models::project;
use crate::render::{self, Page};
use crate::selection::{Selection, UiState};
use crate::seo;
use crate::views;

/// Atomic counter for unique scratch directories so parallel tests don't collide.
static TEST_DIR_COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

/// A fresh, not-yet-created directory under the system temp dir.
fn scratch_dir() -> PathBuf {
    let id = TEST_DIR_COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    std::env::temp_dir().join(format!("folio_test_{}_{}", std::process::id(), id))
}

/// Default config with assets pointed at a scratch directory.
fn test_config() -> SiteConfig {
    SiteConfig {
        static_dir: scratch_dir().to_string_lossy().into_owned(),
        ..SiteConfig::default()
    }
}

fn client() -> Client {
    Client::tracked(crate::build(test_config())).expect("valid rocket instance")
}

fn keys(records: &[&PostRecord]) -> Vec<&'static str> {
    records.iter().map(|p| p.key).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(key: &'static str, date: NaiveDate, category: Category) -> PostRecord {
    PostRecord {
        key,
        title: key,
        image: "",
        description: "",
        category,
        date,
        body: "",
    }
}

/// Position of `needle` in `haystack`, failing the test if absent.
fn pos(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{:?} not found", needle))
}

// ═══════════════════════════════════════════════════════════
// Catalog
// ═══════════════════════════════════════════════════════════

#[test]
fn catalog_keys_unique_and_url_safe() {
    let mut seen = HashSet::new();
    for p in post::all() {
        assert!(seen.insert(p.key), "duplicate key {}", p.key);
        assert!(
            p.key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "key {} is not slug-safe",
            p.key
        );
    }
    assert_eq!(seen.len(), 5);
}

#[test]
fn catalog_records_are_complete() {
    for p in post::all() {
        assert!(!p.title.is_empty());
        assert!(!p.description.is_empty());
        assert!(p.image.starts_with("/stock/"), "{} image {}", p.key, p.image);
        assert!(
            p.date.year() == 2025,
            "{} has unexpected date {}",
            p.key,
            p.date
        );
        assert!(p.body.contains("## "), "{} body has no sections", p.key);
    }
}

#[test]
fn catalog_find() {
    let zipline = post::find("zipline").unwrap();
    assert_eq!(zipline.title, "Zipline");
    assert_eq!(zipline.category, Category::Healthcare);
    assert_eq!(zipline.date, date(2025, 7, 7));
    assert!(post::find("nope").is_none());
    assert!(post::find("").is_none());
}

// ═══════════════════════════════════════════════════════════
// Chronological sort
// ═══════════════════════════════════════════════════════════

#[test]
fn sort_newest_first() {
    let sorted = post::sorted_by_date_descending(post::all());
    assert_eq!(
        keys(&sorted),
        vec!["zipline", "narayana", "taobao", "mpesa", "grameen"]
    );
}

#[test]
fn sort_is_idempotent() {
    let once = post::sorted_by_date_descending(post::all());
    let twice = post::sorted_by_date_descending(once.iter().copied());
    assert_eq!(keys(&once), keys(&twice));
}

#[test]
fn sort_keeps_input_order_for_equal_dates() {
    let a = record("a", date(2025, 1, 1), Category::Other);
    let b = record("b", date(2025, 1, 1), Category::Other);
    let c = record("c", date(2025, 2, 1), Category::Other);
    let sorted = post::sorted_by_date_descending([&a, &b, &c]);
    assert_eq!(keys(&sorted), vec!["c", "a", "b"]);
    let sorted = post::sorted_by_date_descending([&b, &a, &c]);
    assert_eq!(keys(&sorted), vec!["c", "b", "a"]);
}

#[test]
fn sort_empty() {
    let empty: Vec<&PostRecord> = Vec::new();
    assert!(post::sorted_by_date_descending(empty).is_empty());
}

// ═══════════════════════════════════════════════════════════
// Category filter
// ═══════════════════════════════════════════════════════════

#[test]
fn filter_healthcare() {
    let shown = post::display_order(Filter::Only(Category::Healthcare));
    assert_eq!(keys(&shown), vec!["zipline", "narayana"]);
}

#[test]
fn filter_all_is_full_catalog() {
    assert_eq!(post::display_order(Filter::All).len(), post::all().len());
}

#[test]
fn filter_all_keeps_input_order() {
    let catalog: Vec<&str> = post::all().iter().map(|p| p.key).collect();
    assert_eq!(keys(&post::filter(post::all(), Filter::All)), catalog);

    let sorted = post::sorted_by_date_descending(post::all());
    assert_eq!(keys(&post::filter(sorted.iter().copied(), Filter::All)), keys(&sorted));
}

#[test]
fn filter_only_keeps_input_order() {
    let shown = post::filter(post::all(), Filter::Only(Category::Finance));
    assert_eq!(keys(&shown), vec!["grameen", "mpesa"]);
}

#[test]
fn filter_empty_category() {
    assert!(post::display_order(Filter::Only(Category::Energy)).is_empty());
    assert!(post::display_order(Filter::Only(Category::Technology)).is_empty());
}

#[test]
fn filter_partitions_catalog() {
    let mut total = 0;
    for cat in Category::ALL {
        let shown = post::display_order(Filter::Only(cat));
        assert!(shown.iter().all(|p| p.category == cat));
        // Filtering keeps the sorted order
        let resorted = post::sorted_by_date_descending(shown.iter().copied());
        assert_eq!(keys(&shown), keys(&resorted));
        total += shown.len();
    }
    assert_eq!(total, post::all().len());
}

#[test]
fn filter_parse() {
    assert_eq!(Filter::parse(None), Filter::All);
    assert_eq!(Filter::parse(Some("")), Filter::All);
    assert_eq!(Filter::parse(Some("all")), Filter::All);
    assert_eq!(Filter::parse(Some("finance")), Filter::Only(Category::Finance));
    assert_eq!(
        Filter::parse(Some(" healthcare ")),
        Filter::Only(Category::Healthcare)
    );
    assert_eq!(Filter::parse(Some("crypto")), Filter::All);
}

#[test]
fn filter_chips_round_trip() {
    let chips = filter_chips(Filter::Only(Category::Finance));
    assert_eq!(chips.len(), Category::ALL.len() + 1);
    assert_eq!(chips[0].value, "all");
    assert_eq!(chips[0].label, "All");
    assert_eq!(chips.iter().filter(|c| c.active).count(), 1);
    for chip in &chips {
        assert_eq!(Filter::parse(Some(chip.value)), chip.filter);
        assert_eq!(chip.active, chip.filter == Filter::Only(Category::Finance));
    }
}

#[test]
fn category_labels() {
    assert_eq!(Category::Ecommerce.label(), "E-Commerce");
    assert_eq!(Category::from_slug("ecommerce"), Some(Category::Ecommerce));
    assert_eq!(Category::from_slug("E-Commerce"), None);
    for cat in Category::ALL {
        assert_eq!(Category::from_slug(cat.slug()), Some(cat));
    }
}

// ═══════════════════════════════════════════════════════════
// Selection state
// ═══════════════════════════════════════════════════════════

#[test]
fn selection_open_and_dismiss() {
    let s = Selection::default();
    assert!(!s.is_open());
    let s = s.open("zipline");
    assert_eq!(s.key(), Some("zipline"));
    assert_eq!(s.record().map(|p| p.title), Some("Zipline"));
    let s = s.dismiss();
    assert_eq!(s, Selection::Closed);
}

#[test]
fn selection_open_then_dismiss_every_key() {
    for p in post::all() {
        let opened = Selection::Closed.open(p.key);
        assert!(opened.is_open());
        assert_eq!(opened.key(), Some(p.key));
        let closed = opened.dismiss();
        assert_eq!(closed, Selection::Closed);
        assert_eq!(closed.key(), None);
        assert!(!closed.is_open());
    }
}

#[test]
fn selection_unknown_key_is_closed() {
    assert_eq!(Selection::resolve(Some("nope")), Selection::Closed);
    assert_eq!(Selection::resolve(Some("")), Selection::Closed);
    assert_eq!(Selection::resolve(None), Selection::Closed);
}

#[test]
fn selection_direct_transition() {
    let s = Selection::resolve(Some("taobao")).open("mpesa");
    assert_eq!(s.key(), Some("mpesa"));
}

#[test]
fn ui_state_links() {
    let state = UiState::from_query("/blog", Some("finance"), Some("mpesa"));
    assert_eq!(state.selection.key(), Some("mpesa"));
    assert_eq!(state.href_dismiss(), "/blog?filter=finance");
    assert_eq!(state.href_with("grameen"), "/blog?filter=finance&post=grameen");
    assert_eq!(state.href_filter(Filter::All), "/blog");
    assert_eq!(
        state.href_filter(Filter::Only(Category::Healthcare)),
        "/blog?filter=healthcare"
    );

    let home = UiState::new("/");
    assert_eq!(home.href_with("mpesa"), "/?post=mpesa");
    assert_eq!(home.href_dismiss(), "/");
    assert_eq!(UiState::from_query("/", None, None), home);
}

#[test]
fn ui_state_links_skip_unknown_keys() {
    let state = UiState::from_query("/blog", Some("healthcare"), None);
    assert_eq!(state.href_with("nope"), "/blog?filter=healthcare");
}

// ═══════════════════════════════════════════════════════════
// Config
// ═══════════════════════════════════════════════════════════

#[test]
fn config_defaults_are_valid() {
    let cfg = SiteConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.featured_posts, vec!["narayana", "taobao", "mpesa"]);
}

#[test]
fn config_partial_toml() {
    let cfg = SiteConfig::from_toml_str(
        "site_name = \"Test Site\"\nsite_url = \"https://example.com/\"\nfeatured_posts = [\"zipline\"]\n",
    )
    .unwrap();
    assert_eq!(cfg.site_name, "Test Site");
    assert_eq!(cfg.base_url(), "https://example.com");
    assert_eq!(cfg.featured_posts, vec!["zipline"]);
    assert_eq!(cfg.form_endpoint, SiteConfig::default().form_endpoint);
}

#[test]
fn config_bad_toml() {
    assert!(SiteConfig::from_toml_str("site_name = ").is_err());
    assert!(SiteConfig::from_toml_str("featured_posts = \"zipline\"").is_err());
}

#[test]
fn config_missing_file_uses_defaults() {
    let cfg = SiteConfig::load_from(&scratch_dir().join("folio.toml"));
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn config_validate_rejects_bad_urls() {
    let cfg = SiteConfig {
        form_endpoint: "not a url".to_string(),
        ..SiteConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = SiteConfig {
        site_url: "ftp://example.com".to_string(),
        ..SiteConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = SiteConfig {
        date_format: "  ".to_string(),
        ..SiteConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn featured_posts_skip_unknown_keys() {
    let shown = post::featured(&["mpesa", "nope", "zipline"]);
    assert_eq!(keys(&shown), vec!["mpesa", "zipline"]);
}

// ═══════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════

#[test]
fn render_markdown() {
    let html = render::markdown_to_html("## Title\n\n* one\n* two\n");
    assert!(html.contains("<h2>Title</h2>"));
    assert!(html.contains("<li>one</li>"));
    assert_eq!(
        render::markdown_inline("see [docs](https://example.com)"),
        "see <a href=\"https://example.com\">docs</a>"
    );
}

#[test]
fn render_escape_and_dates() {
    assert_eq!(
        render::html_escape("<a href=\"x\">&</a>"),
        "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
    );
    let d = NaiveDate::from_ymd_opt(2025, 7, 7).unwrap();
    assert_eq!(render::format_date(d, "%b %-d, %Y"), "Jul 7, 2025");
}

#[test]
fn render_page_marks_active_nav() {
    let cfg = SiteConfig::default();
    let html = render::render_page(&cfg, Page::Blog, "<p>body</p>", "");
    assert!(html.contains("href=\"/blog\" class=\"nav-link active\""));
    assert!(html.contains("href=\"/about\" class=\"nav-link\""));
    assert!(html.contains("<p>body</p>"));
    assert!(html.contains("application/rss+xml"));
}

#[test]
fn blog_view_filtered_grid() {
    let cfg = SiteConfig::default();
    let state = UiState::from_query("/blog", Some("healthcare"), None);
    let html = views::blog::render(&cfg, &state);
    assert!(pos(&html, "data-key=\"zipline\"") < pos(&html, "data-key=\"narayana\""));
    assert!(!html.contains("data-key=\"grameen\""));
    assert!(html.contains("class=\"chip active\" data-filter=\"healthcare\""));
    assert!(html.contains("href=\"/blog?filter=healthcare&amp;post=zipline#post-modal\""));
    assert!(html.contains("Jul 7, 2025"));
    assert!(!html.contains("class=\"post-modal\""));
}

#[test]
fn blog_view_open_story_marks_background() {
    let cfg = SiteConfig::default();
    let closed = views::blog::render(&cfg, &UiState::new("/blog"));
    assert!(!closed.contains(" inert"));
    assert!(!closed.contains("aria-expanded"));

    let state = UiState::from_query("/blog", None, Some("narayana"));
    let open = views::blog::render(&cfg, &state);
    assert!(open.contains("<section inert><div class=\"card-grid\" id=\"posts\">"));
    assert_eq!(open.matches("aria-expanded=\"true\"").count(), 1);
    assert!(open.contains("href=\"/blog?post=narayana#post-modal\" class=\"read-more\" aria-expanded=\"true\""));
}

#[test]
fn catalog_dates_render_as_iso() {
    let sorted = post::sorted_by_date_descending(post::all());
    assert!(sorted.windows(2).all(|w| w[0].date > w[1].date));

    let cfg = SiteConfig::default();
    let html = views::blog::render(&cfg, &UiState::new("/blog"));
    assert!(html.contains("<time datetime=\"2025-07-07\">Jul 7, 2025</time>"));
    assert!(html.contains("<time datetime=\"2025-06-18\">Jun 18, 2025</time>"));
}

#[test]
fn blog_view_empty_category_renders_empty_grid() {
    let cfg = SiteConfig::default();
    let state = UiState::from_query("/blog", Some("energy"), None);
    let html = views::blog::render(&cfg, &state);
    assert!(html.contains("<div class=\"card-grid\" id=\"posts\"></div>"));
}

#[test]
fn modal_renders_only_when_open() {
    let cfg = SiteConfig::default();
    assert!(views::modal::render(&cfg, &UiState::new("/blog")).is_empty());

    let state = UiState::from_query("/blog", Some("finance"), Some("mpesa"));
    let html = views::modal::render(&cfg, &state);
    assert!(html.contains("role=\"dialog\" aria-modal=\"true\""));
    assert!(html.contains("data-post=\"mpesa\""));
    assert!(html.contains("href=\"/blog?filter=finance\" class=\"modal-close\""));
    assert!(html.contains("href=\"/blog?filter=finance\" class=\"modal-backdrop\""));
    assert!(html.contains("<h2 id=\"post-modal-title\">M-Pesa</h2>"));
    assert!(html.contains("Finance"));
}

#[test]
fn forms_post_to_endpoint() {
    let cfg = SiteConfig {
        form_endpoint: "https://forms.example.com/f/abc".to_string(),
        ..SiteConfig::default()
    };
    let contact = views::forms::contact_form(&cfg);
    assert!(contact.contains("action=\"https://forms.example.com/f/abc\" method=\"POST\""));
    assert_eq!(contact.matches(" required").count(), 3);
    for field in ["name=\"name\"", "name=\"email\"", "name=\"message\""] {
        assert!(contact.contains(field));
    }

    let newsletter = views::forms::newsletter_form(&cfg);
    assert!(newsletter.contains("action=\"https://forms.example.com/f/abc\""));
    assert_eq!(newsletter.matches(" required").count(), 1);
    assert!(newsletter.contains("type=\"email\" name=\"email\""));
}

#[test]
fn home_view_featured_sections() {
    let cfg = SiteConfig::default();
    let html = views::home::render(&cfg, &UiState::new("/"));
    let n = pos(&html, "data-key=\"narayana\"");
    let t = pos(&html, "data-key=\"taobao\"");
    let m = pos(&html, "data-key=\"mpesa\"");
    assert!(n < t && t < m);
    assert!(html.contains("href=\"/?post=taobao#post-modal\""));
    assert!(html.contains("href=\"/projects#consulting\""));
    assert!(html.contains("Strategy &amp; fundraising for nonprofits"));
    assert!(html.contains("class=\"newsletter\""));
}

#[test]
fn projects_view_anchors_and_links() {
    let html = views::projects::render();
    for p in project::all() {
        if let Some(anchor) = p.anchor {
            assert!(html.contains(&format!("id=\"{}\"", anchor)));
        }
    }
    assert!(html.contains("Popular reads:"));
    assert!(html.contains("Live Demo"));
    assert!(html.contains("<a href=\"https://studentenergy.org/fellowship-tiers-of-engagement/\">Student Energy Tier 1 Fellowship</a>"));
    assert_eq!(project::featured().len(), 4);
}

#[test]
fn about_view_lists_history() {
    let html = views::about::render();
    for e in experience::experience() {
        assert!(html.contains(&render::html_escape(e.org)));
    }
    for e in experience::education() {
        assert!(html.contains(&render::html_escape(e.school)));
    }
    assert!(html.contains("Key Takeaways:"));
}

// ═══════════════════════════════════════════════════════════
// SEO: meta, sitemap, robots, JSON-LD
// ═══════════════════════════════════════════════════════════

#[test]
fn seo_build_meta() {
    let cfg = SiteConfig::default();
    let home = seo::build_meta(&cfg, None, None, "/");
    assert!(home.contains("<title>Hi, I'm Aimaan!</title>"));
    assert!(home.contains("<link rel=\"canonical\" href=\"http://localhost:8000/\">"));

    let about = seo::build_meta(&cfg, Some("About"), Some("A description"), "/about");
    assert!(about.contains("<title>About | Aimaan Shergill</title>"));
    assert!(about.contains("A description"));
    assert!(about.contains("og:title"));
}

#[test]
fn seo_sitemap_and_robots() {
    let cfg = SiteConfig {
        site_url: "https://example.com/".to_string(),
        ..SiteConfig::default()
    };
    let xml = seo::generate_sitemap(&cfg);
    assert!(xml.contains("<loc>https://example.com</loc>"));
    assert!(xml.contains("<loc>https://example.com/projects</loc>"));
    assert!(xml.contains("<loc>https://example.com/blog/zipline</loc><lastmod>2025-07-07</lastmod>"));
    assert!(xml.ends_with("</urlset>"));

    let robots = seo::generate_robots(&cfg);
    assert!(robots.starts_with("User-agent: *"));
    assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
}

#[test]
fn seo_post_jsonld() {
    let cfg = SiteConfig::default();
    let ld = seo::build_post_jsonld(&cfg, post::find("grameen").unwrap());
    assert!(ld.starts_with("<script type=\"application/ld+json\">"));
    assert!(ld.contains("\"@type\": \"BlogPosting\""));
    assert!(ld.contains("\"datePublished\": \"2025-06-18\""));
    assert!(ld.contains("http://localhost:8000/blog/grameen"));
}

// ═══════════════════════════════════════════════════════════
// RSS
// ═══════════════════════════════════════════════════════════

#[test]
fn rss_feed_newest_first() {
    let cfg = SiteConfig {
        site_url: "https://example.com".to_string(),
        ..SiteConfig::default()
    };
    let xml = feed::generate_feed(&cfg);
    assert!(xml.contains("<rss"));
    assert!(xml.contains("<title>Grassroot Ideas</title>"));
    assert_eq!(xml.matches("<item>").count(), 5);
    let z = pos(&xml, "https://example.com/blog/zipline");
    let n = pos(&xml, "https://example.com/blog/narayana");
    let g = pos(&xml, "https://example.com/blog/grameen");
    assert!(z < n && n < g);
    assert!(xml.contains("Mon, 07 Jul 2025 00:00:00 +0000"));
}

// ═══════════════════════════════════════════════════════════
// Boot checks
// ═══════════════════════════════════════════════════════════

#[test]
fn boot_creates_asset_dirs() {
    let cfg = test_config();
    let report = boot::check(&cfg);
    let root = PathBuf::from(&cfg.static_dir);
    assert!(root.join("stock").is_dir());
    assert!(root.join("logos").is_dir());
    assert_eq!(report.errors, 0);
    assert_eq!(report.warnings as usize, boot::referenced_images().len());

    std::fs::write(root.join("stock/zipline.jpg"), b"jpg").unwrap();
    let report = boot::check(&cfg);
    assert_eq!(report.warnings as usize, boot::referenced_images().len() - 1);

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn boot_flags_invalid_config() {
    let cfg = SiteConfig {
        form_endpoint: "mailto:someone".to_string(),
        ..test_config()
    };
    assert_eq!(boot::check(&cfg).errors, 1);
    let _ = std::fs::remove_dir_all(&cfg.static_dir);
}

// ═══════════════════════════════════════════════════════════
// Routes
// ═══════════════════════════════════════════════════════════

#[test]
fn route_pages_ok() {
    let client = client();
    for path in ["/", "/about", "/projects", "/blog", "/contact"] {
        let res = client.get(path).dispatch();
        assert_eq!(res.status(), Status::Ok, "{}", path);
    }
}

#[test]
fn route_security_headers() {
    let client = client();
    let res = client.get("/about").dispatch();
    assert_eq!(res.headers().get_one("X-Content-Type-Options"), Some("nosniff"));
    assert_eq!(res.headers().get_one("X-Frame-Options"), Some("SAMEORIGIN"));
    assert_eq!(
        res.headers().get_one("Referrer-Policy"),
        Some("strict-origin-when-cross-origin")
    );
}

#[test]
fn route_blog_filtered() {
    let client = client();
    let body = client
        .get("/blog?filter=healthcare")
        .dispatch()
        .into_string()
        .unwrap();
    assert!(pos(&body, "data-key=\"zipline\"") < pos(&body, "data-key=\"narayana\""));
    assert!(!body.contains("data-key=\"mpesa\""));
}

#[test]
fn route_blog_unknown_post_has_no_modal() {
    let client = client();
    let res = client.get("/blog?post=unknown").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(!body.contains("class=\"post-modal\""));
    assert_eq!(body.matches("class=\"card\"").count(), 5);
}

#[test]
fn route_blog_modal_keeps_filter() {
    let client = client();
    let body = client
        .get("/blog?filter=finance&post=mpesa")
        .dispatch()
        .into_string()
        .unwrap();
    assert!(body.contains("class=\"post-modal\""));
    assert!(body.contains("href=\"/blog?filter=finance\" class=\"modal-close\""));
    assert!(body.contains("<title>M-Pesa | Aimaan Shergill</title>"));
}

#[test]
fn route_home_modal() {
    let client = client();
    let body = client.get("/?post=taobao").dispatch().into_string().unwrap();
    assert!(body.contains("data-post=\"taobao\""));
    assert!(body.contains("href=\"/\" class=\"modal-close\""));
}

#[test]
fn route_blog_permalink() {
    let client = client();
    let res = client.get("/blog/zipline").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(body.contains("application/ld+json"));
    assert!(body.contains("og:image"));

    let res = client.get("/blog/nope").dispatch();
    assert_eq!(res.status(), Status::NotFound);
    assert!(res.into_string().unwrap().contains("Page not found."));
}

#[test]
fn route_unknown_path_404() {
    let client = client();
    let res = client.get("/no/such/page").dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn route_api_posts() {
    let client = client();
    let res = client.get("/api/posts?category=healthcare").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let json: serde_json::Value = res.into_json().unwrap();
    let keys: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["zipline", "narayana"]);
    assert_eq!(json[0]["category"], "healthcare");

    let json: serde_json::Value = client
        .get("/api/posts?category=bogus")
        .dispatch()
        .into_json()
        .unwrap();
    assert_eq!(json.as_array().unwrap().len(), 5);
}

#[test]
fn route_api_post_detail() {
    let client = client();
    let json: serde_json::Value = client.get("/api/posts/mpesa").dispatch().into_json().unwrap();
    assert_eq!(json["title"], "M-Pesa");
    assert_eq!(json["date"], "2025-06-23");

    let res = client.get("/api/posts/nope").dispatch();
    assert_eq!(res.status(), Status::NotFound);
    let json: serde_json::Value = res.into_json().unwrap();
    assert_eq!(json["error"], "not found");
}

#[test]
fn route_api_categories() {
    let client = client();
    let json: serde_json::Value = client.get("/api/categories").dispatch().into_json().unwrap();
    let chips = json.as_array().unwrap();
    assert_eq!(chips.len(), 7);
    assert_eq!(chips[0]["value"], "all");
    assert_eq!(chips[0]["active"], true);
}

#[test]
fn route_feed_sitemap_robots() {
    let client = client();
    let feed = client.get("/feed").dispatch().into_string().unwrap();
    assert_eq!(feed.matches("<item>").count(), 5);

    let sitemap = client.get("/sitemap.xml").dispatch().into_string().unwrap();
    assert!(sitemap.contains("/blog/mpesa"));

    let robots = client.get("/robots.txt").dispatch().into_string().unwrap();
    assert!(robots.contains("Sitemap:"));
}
