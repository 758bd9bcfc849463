//! Page bodies. Each view returns the HTML that goes inside `<main>`;
//! `render::render_page` wraps it in the site shell.

pub mod about;
pub mod blog;
pub mod contact;
pub mod forms;
pub mod home;
pub mod modal;
pub mod projects;
