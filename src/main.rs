#[macro_use]
extern crate rocket;

use rocket::fs::{FileServer, Options};
use rocket::{Build, Rocket};

mod boot;
mod config;
mod feed;
mod render;
mod selection;
mod seo;
mod views;

mod models;
mod routes;

#[cfg(test)]
mod tests;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::response::content::RawHtml;

use config::SiteConfig;
use render::Page;

/// Path prefixes for images that never change once published.
const IMMUTABLE_ASSETS: &[&str] = &["/stock/", "/logos/"];

pub struct SecurityHeaders;

#[rocket::async_trait]
impl Fairing for SecurityHeaders {
    fn info(&self) -> Info {
        Info { name: "Security Headers", kind: Kind::Response }
    }

    async fn on_response<'r>(&self, req: &'r rocket::Request<'_>, res: &mut rocket::Response<'r>) {
        res.set_header(Header::new("X-Content-Type-Options", "nosniff"));
        res.set_header(Header::new("Referrer-Policy", "strict-origin-when-cross-origin"));
        res.set_header(Header::new("X-Frame-Options", "SAMEORIGIN"));
        let path = req.uri().path();
        if IMMUTABLE_ASSETS.iter().any(|p| path.starts_with(p)) {
            res.set_header(Header::new("Cache-Control", "public, max-age=31536000, immutable"));
        }
    }
}

#[catch(404)]
fn not_found(req: &rocket::Request<'_>) -> RawHtml<String> {
    let fallback = SiteConfig::default();
    let config = req.rocket().state::<SiteConfig>().unwrap_or(&fallback);
    let meta = seo::build_meta(config, Some("Not Found"), None, req.uri().path().as_str());
    RawHtml(render::render_page(config, Page::NotFound, &render::render_404(), &meta))
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

/// Assemble the server for a given config. Static files rank below every
/// page route, so `/blog` never resolves to a directory.
pub fn build(config: SiteConfig) -> Rocket<Build> {
    let static_dir = config.static_dir.clone();

    rocket::build()
        .manage(config)
        .attach(SecurityHeaders)
        .mount("/", routes::public::routes())
        .mount("/api", routes::api::routes())
        .mount("/", FileServer::new(static_dir, Options::Missing).rank(20))
        .register("/", catchers![not_found, server_error])
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let config = SiteConfig::load();

    // Boot check: create asset directories, validate config, report missing images
    boot::run(&config);

    log::info!("Serving {} from {}", config.site_name, config.static_dir);

    build(config)
}
