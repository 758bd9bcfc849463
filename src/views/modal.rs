use crate::config::SiteConfig;
use crate::models::post::PostRecord;
use crate::render::{format_date, html_escape, markdown_to_html};
use crate::selection::UiState;

/// The story overlay for the current selection. `Closed` renders nothing.
pub fn render(config: &SiteConfig, state: &UiState) -> String {
    let record = match state.selection.record() {
        Some(r) => r,
        None => return String::new(),
    };
    let dismiss = html_escape(&state.href_dismiss());

    format!(
        "<div class=\"post-modal\" id=\"post-modal\" role=\"dialog\" aria-modal=\"true\" aria-labelledby=\"post-modal-title\" data-post=\"{key}\">\
         <a href=\"{dismiss}\" class=\"modal-backdrop\" aria-label=\"Close\" tabindex=\"-1\"></a>\
         <div class=\"modal-panel\">\
         <a href=\"{dismiss}\" class=\"modal-close\" aria-label=\"Close\">&times;</a>\
         {article}\
         </div></div>",
        key = record.key,
        dismiss = dismiss,
        article = render_article(config, record, "post-modal-title"),
    )
}

/// ` inert` for page sections behind an open overlay.
pub fn background_attr(state: &UiState) -> &'static str {
    if state.selection.is_open() {
        " inert"
    } else {
        ""
    }
}

/// Full story markup, shared by the overlay and the permalink page.
pub fn render_article(config: &SiteConfig, record: &PostRecord, title_id: &str) -> String {
    format!(
        "<article class=\"post-detail\">\
         <img src=\"{image}\" alt=\"{title}\">\
         <h2 id=\"{title_id}\">{title}</h2>\
         <div class=\"post-meta\"><span class=\"badge\">{category}</span><time datetime=\"{iso}\">{date}</time></div>\
         <p class=\"post-summary\"><em>{description}</em></p>\
         <div class=\"post-body\">{body}</div>\
         </article>",
        image = html_escape(record.image),
        title = html_escape(record.title),
        title_id = title_id,
        category = record.category.label(),
        iso = record.date,
        date = format_date(record.date, &config.date_format),
        description = html_escape(record.description),
        body = markdown_to_html(record.body),
    )
}
