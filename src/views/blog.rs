use crate::config::SiteConfig;
use crate::models::category::filter_chips;
use crate::models::post::{self, PostRecord};
use crate::render::{format_date, html_escape};
use crate::selection::UiState;

use super::modal;

const INTRO: &str = "Grassroot Ideas is a storytelling and research platform that spotlights breakthrough innovations emerging from developing countries. I explore how communities across Asia, Africa, and Latin America are solving complex challenges in healthcare, education, finance, and more using creativity, constraint, and local insight.";

const INTRO_MORE: &str = "By sharing overlooked success stories, Grassroot Ideas sparks fresh thinking, expands global playbooks, and shifts how we view innovation. Whether you are a policymaker, builder, investor, or curious mind, it shows what\u{2019}s working on the ground, and why it matters globally.";

/// The story listing: intro, filter chips, the filtered card grid and the
/// overlay for the current selection.
pub fn render(config: &SiteConfig, state: &UiState) -> String {
    let posts = post::display_order(state.filter);

    let mut chips = String::new();
    for chip in filter_chips(state.filter) {
        chips.push_str(&format!(
            "<a href=\"{}\" class=\"chip{}\" data-filter=\"{}\"{}>{}</a>\n",
            html_escape(&state.href_filter(chip.filter)),
            if chip.active { " active" } else { "" },
            chip.value,
            if chip.active { " aria-current=\"true\"" } else { "" },
            chip.label,
        ));
    }

    // Zero matches leave the grid empty, with no "no results" message.
    let cards: String = posts
        .iter()
        .map(|p| render_card(config, state, p, true))
        .collect();

    format!(
        "<section class=\"blog-intro\">\
         <h1>Grassroot Ideas</h1>\
         <p>{intro}<br><br>{more}</p>\
         <nav class=\"filter-chips\" aria-label=\"Filter by category\">\n{chips}</nav>\
         </section>\
         <section{inert}>\
         <div class=\"card-grid\" id=\"posts\">{cards}</div>\
         </section>\
         {modal}",
        intro = INTRO,
        more = INTRO_MORE,
        chips = chips,
        cards = cards,
        inert = modal::background_attr(state),
        modal = modal::render(config, state),
    )
}

/// One story card. The listing shows category and date; home page teasers
/// leave them out.
pub fn render_card(config: &SiteConfig, state: &UiState, p: &PostRecord, with_meta: bool) -> String {
    let meta = if with_meta {
        format!(
            "<span class=\"badge\">{}</span><time datetime=\"{}\">{}</time>",
            p.category.label(),
            p.date,
            format_date(p.date, &config.date_format)
        )
    } else {
        String::new()
    };

    format!(
        "<div class=\"card\" data-key=\"{key}\" data-category=\"{cat}\">\
         <img src=\"{image}\" alt=\"{title}\" loading=\"lazy\">\
         <h3>{title}</h3>\
         <p>{desc}</p>\
         {meta}\
         <a href=\"{href}#post-modal\" class=\"read-more\"{expanded}>Read more</a>\
         </div>",
        key = p.key,
        cat = p.category.slug(),
        image = html_escape(p.image),
        title = html_escape(p.title),
        desc = html_escape(p.description),
        meta = meta,
        href = html_escape(&state.href_with(p.key)),
        expanded = if state.selection.key() == Some(p.key) {
            " aria-expanded=\"true\""
        } else {
            ""
        },
    )
}
