use crate::config::SiteConfig;
use crate::models::experience;
use crate::models::post;
use crate::models::project::{self, Project};
use crate::render::html_escape;
use crate::selection::UiState;

use super::{blog, forms, modal};

const ABOUT_SUMMARY: &str = "I\u{2019}m a Strategy & Corporate Development analyst at RapidSOS, working across GTM, M&A, and investor strategy. I\u{2019}ve supported projects in public safety, healthcare, and infrastructure across North America, the Middle East, and South Asia.";

pub fn render(config: &SiteConfig, state: &UiState) -> String {
    let featured: String = post::featured(&config.featured_posts)
        .into_iter()
        .map(|p| blog::render_card(config, state, p, false))
        .collect();

    let projects: String = project::featured()
        .into_iter()
        .map(render_project_card)
        .collect();

    format!(
        "<section class=\"hero\">\
         <img src=\"/profile.jpg\" alt=\"{name}\" width=\"192\" height=\"192\" class=\"avatar\">\
         <div>\
         <h1>Hi, I\u{2019}m {name}.</h1>\
         <p>{tagline}</p>\
         <div class=\"cta\">\
         <a href=\"{linkedin}\" target=\"_blank\" rel=\"noopener noreferrer\">Find me on LinkedIn</a>\
         <a href=\"/blog\">Explore Grassroot Ideas</a>\
         </div></div>\
         </section>\
         <section class=\"panel\">\
         <div><h2>About Me</h2><p>{about}</p></div>\
         <a href=\"/about\" class=\"cta\">Learn More</a>\
         </section>\
         <section{inert}>\
         <div class=\"section-head\"><h2>Featured Blog Posts</h2><a href=\"/blog\">See all</a></div>\
         <div class=\"card-grid\" id=\"featured-posts\">{featured}</div>\
         </section>\
         {modal}\
         <section>\
         <div class=\"section-head\"><h2>Featured Projects</h2><a href=\"/projects\">See all</a></div>\
         <div class=\"project-grid\">{projects}</div>\
         </section>\
         {logos}\
         {newsletter}",
        name = html_escape(&config.site_name),
        tagline = html_escape(&config.tagline),
        linkedin = html_escape(&config.linkedin_url),
        about = ABOUT_SUMMARY,
        featured = featured,
        inert = modal::background_attr(state),
        modal = modal::render(config, state),
        projects = projects,
        logos = render_logo_strip(),
        newsletter = forms::newsletter_form(config),
    )
}

fn render_project_card(p: &Project) -> String {
    let href = match p.anchor {
        Some(a) => format!("/projects#{}", a),
        None => "/projects".to_string(),
    };
    format!(
        "<a href=\"{href}\" class=\"project-card\">\
         <h3>{title}</h3>\
         <p><em>{teaser}</em></p>\
         <span class=\"tools\">Tech: {tools}</span>\
         </a>",
        href = href,
        title = html_escape(p.title),
        teaser = html_escape(p.teaser.unwrap_or(p.summary)),
        tools = html_escape(&p.tools.join(", ")),
    )
}

// Organisation logos from the work history and schools.
fn render_logo_strip() -> String {
    let logos: String = experience::experience()
        .iter()
        .map(|e| (e.org, e.logo))
        .chain(experience::education().iter().map(|e| (e.school, e.logo)))
        .map(|(name, logo)| {
            format!(
                "<img src=\"{}\" alt=\"{}\" height=\"48\" loading=\"lazy\">",
                html_escape(logo),
                html_escape(name)
            )
        })
        .collect();
    format!("<section class=\"logo-strip\" aria-label=\"Where I have worked and studied\">{}</section>", logos)
}
