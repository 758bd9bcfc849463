use crate::config::SiteConfig;
use crate::render::html_escape;

// Both forms POST straight to the third-party endpoint. The browser's
// `required` check is the only validation, and the provider's response
// page is the only feedback.

pub fn contact_form(config: &SiteConfig) -> String {
    format!(
        r#"<form action="{action}" method="POST" class="contact-form">
<input type="text" name="name" placeholder="Name" aria-label="Name" required>
<input type="email" name="email" placeholder="Email" aria-label="Email" required>
<textarea name="message" placeholder="Message" aria-label="Message" rows="4" required></textarea>
<div><button type="submit" title="Send"><img src="/logos/send.jpg" alt="" width="24" height="24"> <span>Send</span></button></div>
</form>"#,
        action = html_escape(&config.form_endpoint),
    )
}

pub fn newsletter_form(config: &SiteConfig) -> String {
    format!(
        r#"<section class="newsletter">
<h2>Newsletter</h2>
<p>Get insights on strategy, innovation, and grassroots ideas. No spam, ever.</p>
<form action="{action}" method="POST" class="newsletter-form">
<input type="email" name="email" placeholder="Your email" aria-label="Your email" required>
<button type="submit">Subscribe</button>
</form>
</section>"#,
        action = html_escape(&config.form_endpoint),
    )
}
