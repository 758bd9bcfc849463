use rocket::response::status::NotFound;
use rocket::serde::json::Json;
use serde_json::{json, Value};

use crate::models::category::{filter_chips, Filter, FilterChip};
use crate::models::post::{self, PostRecord};

// ── Posts ──────────────────────────────────────────────

/// Catalog in display order. `category` follows the same rules as the
/// listing's `filter` parameter.
#[get("/posts?<category>")]
pub fn posts(category: Option<&str>) -> Json<Vec<&'static PostRecord>> {
    Json(post::display_order(Filter::parse(category)))
}

#[get("/posts/<key>")]
pub fn post_detail(key: &str) -> Result<Json<&'static PostRecord>, NotFound<Json<Value>>> {
    post::find(key)
        .map(Json)
        .ok_or_else(|| NotFound(Json(json!({ "error": "not found" }))))
}

// ── Categories ─────────────────────────────────────────

#[get("/categories")]
pub fn categories() -> Json<Vec<FilterChip>> {
    Json(filter_chips(Filter::All))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![posts, post_detail, categories]
}
