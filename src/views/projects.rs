use crate::models::project::{self, Project};
use crate::render::{html_escape, markdown_inline};

pub fn render() -> String {
    let cards: String = project::all().iter().map(render_project).collect();
    format!(
        "<section>\
         <h1>Projects</h1>\
         <p>Selected work across consulting, product, writing, analytics and research.</p>\
         </section>\
         <section class=\"project-list\">{}</section>",
        cards
    )
}

fn render_project(p: &Project) -> String {
    let id = p
        .anchor
        .map(|a| format!(" id=\"{}\"", a))
        .unwrap_or_default();

    let highlights: String = p
        .highlights
        .iter()
        .map(|h| match h.lead {
            Some(lead) => format!(
                "<li><strong>{}</strong> {}</li>",
                html_escape(lead),
                markdown_inline(h.text)
            ),
            None => format!("<li>{}</li>", markdown_inline(h.text)),
        })
        .collect();

    let reads = if p.reads.is_empty() {
        String::new()
    } else {
        let links: Vec<String> = p
            .reads
            .iter()
            .map(|l| {
                format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    html_escape(l.href),
                    html_escape(l.label)
                )
            })
            .collect();
        format!("<p class=\"reads\">Popular reads: {}</p>", links.join(", "))
    };

    let tools: String = p
        .tools
        .iter()
        .map(|t| format!("<span class=\"tool\">{}</span>", html_escape(t)))
        .collect();

    let demo = match p.demo {
        Some(link) => format!(
            "<a href=\"{}\" class=\"cta\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            html_escape(link.href),
            html_escape(link.label)
        ),
        None => String::new(),
    };

    format!(
        "<article class=\"project-card\"{id}>\
         <span class=\"badge\">{badge}</span>\
         <h2>{title}</h2>\
         <p>{summary}</p>\
         <h4>What I Built</h4>\
         <ul>{highlights}</ul>\
         {reads}\
         <div class=\"tools\">{tools}</div>\
         {demo}\
         </article>",
        id = id,
        badge = html_escape(p.badge),
        title = html_escape(p.title),
        summary = html_escape(p.summary),
        highlights = highlights,
        reads = reads,
        tools = tools,
        demo = demo,
    )
}
