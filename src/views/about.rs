use crate::models::experience::{self, Education, Experience};
use crate::render::html_escape;

/// Career overview, then the experience timeline, then education.
pub fn render() -> String {
    let jobs: String = experience::experience().iter().map(render_experience).collect();
    let schools: String = experience::education().iter().map(render_education).collect();

    format!(
        "<section>\
         <h1>About Me</h1>\
         <p class=\"headline\">{headline}</p>\
         </section>\
         <section>\
         <h2>Career Overview</h2>\
         <p>{overview}</p>\
         </section>\
         <section>\
         <h2>Experience</h2>\
         <div class=\"timeline\">{jobs}</div>\
         </section>\
         <section>\
         <h2>Education</h2>\
         <div class=\"timeline\">{schools}</div>\
         </section>",
        headline = experience::HEADLINE,
        overview = experience::CAREER_OVERVIEW,
        jobs = jobs,
        schools = schools,
    )
}

fn render_experience(e: &Experience) -> String {
    render_entry(e.org, e.role, e.logo, e.summary, e.takeaways)
}

fn render_education(e: &Education) -> String {
    render_entry(e.school, e.credential, e.logo, e.summary, e.takeaways)
}

fn render_entry(
    name: &str,
    subtitle: &str,
    logo: &str,
    summary: &str,
    takeaways: &[&str],
) -> String {
    let items: String = takeaways
        .iter()
        .map(|t| format!("<li>{}</li>", html_escape(t)))
        .collect();
    format!(
        "<div class=\"entry\">\
         <img src=\"{logo}\" alt=\"{name}\" width=\"56\" height=\"56\">\
         <div>\
         <h3>{name}</h3>\
         <p class=\"role\">{subtitle}</p>\
         <p>{summary}</p>\
         <p class=\"takeaways-label\">Key Takeaways:</p>\
         <ul class=\"takeaways\">{items}</ul>\
         </div></div>",
        logo = html_escape(logo),
        name = html_escape(name),
        subtitle = html_escape(subtitle),
        summary = html_escape(summary),
        items = items,
    )
}
