use chrono::NaiveDate;
use pulldown_cmark::{html, Options, Parser};

use crate::config::SiteConfig;

/// Top-level page kinds, used for the navbar highlight and body classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Projects,
    Blog,
    Contact,
    NotFound,
}

impl Page {
    fn body_class(self) -> &'static str {
        match self {
            Page::Home => "page-home",
            Page::About => "page-about",
            Page::Projects => "page-projects",
            Page::Blog => "page-blog",
            Page::Contact => "page-contact",
            Page::NotFound => "page-404",
        }
    }
}

/// (page, href, label) in navbar order.
const NAV: &[(Page, &str, &str)] = &[
    (Page::Home, "/", "Home"),
    (Page::About, "/about", "About"),
    (Page::Projects, "/projects", "Projects"),
    (Page::Blog, "/blog", "Grassroot Ideas"),
    (Page::Contact, "/contact", "Contact"),
];

/// Wrap a page body in the shared site shell: head, navbar, footer, styles
/// and the overlay script.
pub fn render_page(config: &SiteConfig, page: Page, body_html: &str, seo_meta: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {seo_meta}
    <link rel="alternate" type="application/rss+xml" title="Grassroot Ideas" href="/feed">
    <style>{base_css}</style>
</head>
<body class="{body_class}">
    <header class="navbar">
        <a href="/" class="brand">{site_name}</a>
        <nav class="nav-links">
{nav_links}        </nav>
    </header>
    <main class="content">
        {body_html}
    </main>
    <footer class="site-footer">
        {social}
        <p>&copy; {year} {site_name}</p>
    </footer>
    <script>{modal_js}</script>
</body>
</html>"#,
        seo_meta = seo_meta,
        base_css = DEFAULT_CSS,
        body_class = page.body_class(),
        site_name = html_escape(&config.site_name),
        nav_links = build_nav_links(page),
        body_html = body_html,
        social = build_social_links(config),
        year = chrono::Utc::now().format("%Y"),
        modal_js = MODAL_JS,
    )
}

fn build_nav_links(active: Page) -> String {
    let mut html = String::new();
    for &(page, href, label) in NAV {
        let class = if page == active { "nav-link active" } else { "nav-link" };
        html.push_str(&format!(
            "            <a href=\"{}\" class=\"{}\">{}</a>\n",
            href, class, label
        ));
    }
    html
}

/// LinkedIn, GitHub and email icons. Entries with an empty setting are skipped.
pub fn build_social_links(config: &SiteConfig) -> String {
    let mailto = if config.email.is_empty() {
        String::new()
    } else {
        format!("mailto:{}", config.email)
    };

    // (label, href, icon_svg, opens_new_tab)
    let platforms: [(&str, &str, &str, bool); 3] = [
        ("LinkedIn", config.linkedin_url.as_str(), LINKEDIN_SVG, true),
        ("GitHub", config.github_url.as_str(), GITHUB_SVG, true),
        ("Email", mailto.as_str(), EMAIL_SVG, false),
    ];

    let links: Vec<String> = platforms
        .iter()
        .filter(|(_, href, _, _)| !href.is_empty())
        .map(|(label, href, icon, new_tab)| {
            let target = if *new_tab {
                " target=\"_blank\" rel=\"noopener noreferrer\""
            } else {
                ""
            };
            format!(
                "<a href=\"{}\"{} aria-label=\"{}\" title=\"{}\">{}</a>",
                html_escape(href),
                target,
                label,
                label,
                icon
            )
        })
        .collect();

    if links.is_empty() {
        return String::new();
    }
    format!("<div class=\"social-links\">{}</div>", links.join("\n"))
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Format a publish date with the configured chrono pattern, e.g. "Jul 7, 2025".
pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    date.format(fmt).to_string()
}

pub fn markdown_to_html(md: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(md, opts);
    let mut out = String::with_capacity(md.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Render a single line of Markdown without the wrapping `<p>`.
pub fn markdown_inline(md: &str) -> String {
    let rendered = markdown_to_html(md);
    let trimmed = rendered.trim_end();
    trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .unwrap_or(trimmed)
        .to_string()
}

pub fn render_404() -> String {
    r#"<div class="error-page">
    <h1>404</h1>
    <p>Page not found.</p>
    <a href="/">&larr; Back to home</a>
</div>"#
        .to_string()
}

const LINKEDIN_SVG: &str = r#"<svg width="28" height="28" fill="currentColor" viewBox="0 0 24 24"><path d="M19 0h-14c-2.76 0-5 2.24-5 5v14c0 2.76 2.24 5 5 5h14c2.76 0 5-2.24 5-5v-14c0-2.76-2.24-5-5-5zm-11 19h-3v-10h3v10zm-1.5-11.28c-.97 0-1.75-.79-1.75-1.75s.78-1.75 1.75-1.75 1.75.79 1.75 1.75-.78 1.75-1.75 1.75zm15.5 11.28h-3v-5.6c0-1.34-.03-3.07-1.87-3.07-1.87 0-2.16 1.46-2.16 2.97v5.7h-3v-10h2.89v1.36h.04c.4-.75 1.38-1.54 2.84-1.54 3.04 0 3.6 2 3.6 4.59v5.59z"/></svg>"#;

const GITHUB_SVG: &str = r#"<svg width="28" height="28" fill="currentColor" viewBox="0 0 24 24"><path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/></svg>"#;

const EMAIL_SVG: &str = r#"<svg width="28" height="28" fill="currentColor" viewBox="0 0 24 24"><path d="M12 13.065l-11.985-7.065v14h23.97v-14l-11.985 7.065zm11.985-9.065h-23.97l11.985 7.065 11.985-7.065z"/></svg>"#;

/// Progressive enhancement for the story overlay. Without JS the close and
/// backdrop links still dismiss it; this adds Escape and scroll locking.
const MODAL_JS: &str = r#"
(function() {
    var overlay = document.querySelector('.post-modal');
    if (!overlay) return;
    var close = overlay.querySelector('.modal-close');
    document.body.style.overflow = 'hidden';
    if (close) close.focus();
    document.addEventListener('keydown', function(e) {
        if (e.key === 'Escape' && close) {
            window.location.href = close.getAttribute('href');
        }
    });
})();
"#;

const DEFAULT_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }

:root {
    --color-text: #1f2937;
    --color-muted: #6b7280;
    --color-bg: #ffffff;
    --color-surface: #f9fafb;
    --color-accent: #16a34a;
    --color-accent-soft: #dcfce7;
    --radius: 12px;
}

body {
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    color: var(--color-text);
    background: var(--color-bg);
    line-height: 1.6;
}

a { color: var(--color-accent); text-decoration: none; }
a:hover { text-decoration: underline; }

/* ── Navbar ── */
.navbar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 16px 24px;
    border-bottom: 1px solid #e5e7eb;
}
.brand { font-weight: 700; color: var(--color-text); }
.nav-links { display: flex; gap: 20px; flex-wrap: wrap; }
.nav-link { color: var(--color-muted); font-weight: 500; }
.nav-link.active { color: var(--color-accent); }

.content {
    max-width: 960px;
    margin: 0 auto;
    padding: 40px 16px;
    display: flex;
    flex-direction: column;
    gap: 48px;
}

h1 { font-size: 2rem; margin-bottom: 8px; }
h2 { font-size: 1.5rem; margin-bottom: 12px; }
h3 { font-size: 1.125rem; }

/* ── Hero ── */
.hero { display: flex; align-items: center; gap: 40px; flex-wrap: wrap; }
.hero-photo { width: 192px; height: 192px; border-radius: 50%; object-fit: cover; background: #e5e7eb; }
.hero-text { flex: 1; min-width: 260px; }
.hero-text p { font-size: 1.2rem; margin-bottom: 24px; }
.cta-row { display: flex; gap: 16px; flex-wrap: wrap; }
.cta {
    padding: 8px 24px;
    border: 1px solid var(--color-accent);
    border-radius: 999px;
    font-weight: 600;
}
.cta:hover { background: var(--color-accent); color: #fff; text-decoration: none; }

.panel {
    background: var(--color-surface);
    border-radius: var(--radius);
    padding: 24px;
    display: flex;
    gap: 24px;
    align-items: center;
    flex-wrap: wrap;
}
.panel > div { flex: 1; min-width: 240px; }

.section-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; }

/* ── Cards ── */
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 24px; }
.card {
    background: #fff;
    border-radius: 8px;
    box-shadow: 0 1px 3px rgba(0,0,0,.1);
    padding: 16px;
    display: flex;
    flex-direction: column;
    gap: 8px;
}
.card img { width: 100%; height: 128px; object-fit: cover; border-radius: 4px; }
.card p { font-size: .875rem; }
.card .read-more { margin-top: auto; font-size: .875rem; }
.badge {
    display: inline-block;
    align-self: flex-start;
    padding: 2px 8px;
    font-size: .75rem;
    font-weight: 600;
    border-radius: 4px;
    background: #f3f4f6;
    color: var(--color-muted);
}
.card time { font-size: .75rem; color: #9ca3af; }

/* ── Filter chips ── */
.filter-chips { display: flex; flex-wrap: wrap; gap: 8px; }
.chip {
    padding: 4px 12px;
    border: 1px solid #d1d5db;
    border-radius: 999px;
    font-size: .875rem;
    font-weight: 500;
    color: #374151;
}
.chip:hover, .chip.active {
    background: var(--color-accent-soft);
    color: var(--color-accent);
    border-color: var(--color-accent);
    text-decoration: none;
}

/* ── Project cards ── */
.project-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(380px, 1fr)); gap: 24px; }
.project-card {
    border: 1px solid #e5e7eb;
    border-radius: var(--radius);
    padding: 20px;
    display: flex;
    flex-direction: column;
    gap: 8px;
    color: var(--color-text);
}
a.project-card:hover { box-shadow: 0 4px 12px rgba(0,0,0,.08); text-decoration: none; }
.project-card .summary { font-style: italic; font-size: .875rem; }
.project-card .tech { font-size: .75rem; color: var(--color-muted); }
.built-heading { font-weight: 600; font-size: .875rem; margin-top: 8px; }
.project-card ul { padding-left: 20px; font-size: .875rem; }
.tools { display: flex; flex-wrap: wrap; gap: 6px; }
.tool { font-size: .75rem; background: var(--color-accent-soft); color: var(--color-accent); padding: 2px 8px; border-radius: 999px; }
.reads { display: flex; flex-wrap: wrap; gap: 8px; font-size: .875rem; }

/* ── About ── */
.headline { font-size: 1.25rem; font-weight: 300; color: var(--color-accent); }
.timeline { display: flex; flex-direction: column; gap: 16px; }
.entry {
    display: flex;
    gap: 20px;
    align-items: flex-start;
    border: 1px solid #e5e7eb;
    border-radius: var(--radius);
    padding: 24px;
}
.entry img { width: 64px; height: 64px; object-fit: contain; border-radius: 8px; }
.entry.school img { width: 96px; height: 96px; }
.entry .role { color: var(--color-muted); font-weight: 500; }
.takeaways { margin-top: 8px; font-size: .875rem; }
.takeaways ul { padding-left: 20px; }

/* ── Forms ── */
.newsletter { background: var(--color-accent-soft); border-radius: var(--radius); padding: 24px; text-align: center; }
.newsletter form, .contact-form { display: flex; gap: 12px; justify-content: center; flex-wrap: wrap; margin-top: 12px; }
.contact-form { flex-direction: column; max-width: 520px; }
input, textarea {
    padding: 8px 16px;
    border: 1px solid #d1d5db;
    border-radius: 4px;
    font: inherit;
}
button {
    padding: 8px 24px;
    border: none;
    border-radius: 4px;
    background: var(--color-accent);
    color: #fff;
    font-weight: 600;
    cursor: pointer;
}
.social-links { display: flex; gap: 16px; justify-content: center; }
.social-links a { color: var(--color-muted); }

/* ── Story overlay ── */
.post-modal {
    position: fixed;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 50;
}
.modal-backdrop { position: absolute; inset: 0; background: rgba(0,0,0,.6); }
.modal-panel {
    position: relative;
    background: #fff;
    max-width: 720px;
    width: calc(100% - 32px);
    max-height: calc(100vh - 64px);
    overflow-y: auto;
    border-radius: var(--radius);
    padding: 32px;
}
.modal-close {
    position: absolute;
    top: 12px;
    right: 16px;
    font-size: 28px;
    line-height: 1;
    color: var(--color-muted);
}
.modal-panel img { width: 100%; max-height: 280px; object-fit: cover; border-radius: 8px; margin-bottom: 16px; }
.post-meta { display: flex; gap: 12px; align-items: center; margin-bottom: 16px; font-size: .875rem; color: var(--color-muted); }
.post-body h2 { font-size: 1.25rem; margin-top: 20px; }
.post-body p, .post-body ul { margin-bottom: 12px; }
.post-body ul { padding-left: 20px; }

.site-footer { text-align: center; padding: 32px 16px; color: var(--color-muted); font-size: .875rem; }
.site-footer .social-links { margin-bottom: 8px; }

.error-page { text-align: center; padding: 80px 0; }

.hero .avatar { border-radius: 50%; object-fit: cover; }
.logo-strip { display: flex; flex-wrap: wrap; gap: 24px; justify-content: center; align-items: center; opacity: .8; }
.logo-strip img { height: 48px; width: auto; }
.newsletter-form { display: flex; gap: 12px; flex-wrap: wrap; justify-content: center; }
.blog-intro p { color: var(--color-muted); margin-bottom: 16px; }
.post-summary { color: var(--color-muted); }
.permalink .back { display: inline-block; margin-bottom: 16px; }
.permalink .post-detail img { width: 100%; max-height: 360px; object-fit: cover; border-radius: 8px; margin-bottom: 16px; }
.project-list { display: flex; flex-direction: column; gap: 24px; }
.takeaways-label { font-weight: 600; margin-top: 8px; }
.contact-social { margin-top: 24px; }

@media (max-width: 640px) {
    .project-grid { grid-template-columns: 1fr; }
    .hero { justify-content: center; text-align: center; }
}
"#;
