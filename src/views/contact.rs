use crate::config::SiteConfig;
use crate::render::build_social_links;

use super::forms;

/// Build the contact page body: intro, form, social links.
pub fn render(config: &SiteConfig) -> String {
    format!(
        "<section class=\"contact-intro\">\
         <h1>Contact</h1>\
         <p>I\u{2019}m open to collaborations, coffee chats, and new ideas. Reach out anytime!</p>\
         </section>\
         <section class=\"contact-body\">{form}</section>\
         <section class=\"contact-social\">{social}</section>",
        form = forms::contact_form(config),
        social = build_social_links(config),
    )
}
