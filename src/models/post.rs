use chrono::NaiveDate;
use serde::Serialize;

use super::category::{Category, Filter};

/// A Grassroot Ideas story. The catalog is compiled in; there is no way to
/// add, edit or remove records at runtime.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub key: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub date: NaiveDate,
    /// Markdown, shown only in the detail view.
    #[serde(skip)]
    pub body: &'static str,
}

// Evaluated at compile time, so a bad catalog date fails the build.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid catalog date"),
    }
}

const POSTS: &[PostRecord] = &[
    PostRecord {
        key: "grameen",
        title: "Grameen Bank",
        image: "/stock/grameen.jpg",
        description: "Pioneering micro-loans for the poor, Grameen Bank sparked a global micro-finance revolution and proved the unbanked are just underserved.",
        category: Category::Finance,
        date: ymd(2025, 6, 18),
        body: include_str!("../../content/posts/grameen.md"),
    },
    PostRecord {
        key: "zipline",
        title: "Zipline",
        image: "/stock/zipline.jpg",
        description: "Drones delivering life-saving medical supplies to remote areas, transforming logistics and public health in Africa and beyond.",
        category: Category::Healthcare,
        date: ymd(2025, 7, 7),
        body: include_str!("../../content/posts/zipline.md"),
    },
    PostRecord {
        key: "narayana",
        title: "Narayana Health",
        image: "/stock/narayana-health.jpg",
        description: "World-class cardiac care at a fraction of the cost, making healthcare accessible for millions in India",
        category: Category::Healthcare,
        date: ymd(2025, 7, 2),
        body: include_str!("../../content/posts/narayana.md"),
    },
    PostRecord {
        key: "taobao",
        title: "Tao Bao Villages",
        image: "/stock/taobao-village.jpg",
        description: "Rural e-commerce hubs in China empowering small villages to connect to the global digital economy",
        category: Category::Ecommerce,
        date: ymd(2025, 6, 28),
        body: include_str!("../../content/posts/taobao.md"),
    },
    PostRecord {
        key: "mpesa",
        title: "M-Pesa",
        image: "/stock/mpesa.jpg",
        description: "Mobile money transforming financial inclusion and everyday life for millions across Africa",
        category: Category::Finance,
        date: ymd(2025, 6, 23),
        body: include_str!("../../content/posts/mpesa.md"),
    },
];

/// Every record in the catalog, in authoring order.
pub fn all() -> &'static [PostRecord] {
    POSTS
}

pub fn find(key: &str) -> Option<&'static PostRecord> {
    POSTS.iter().find(|p| p.key == key)
}

/// Newest first. The sort is stable, so records sharing a date keep their
/// relative input order.
pub fn sorted_by_date_descending<'a, I>(records: I) -> Vec<&'a PostRecord>
where
    I: IntoIterator<Item = &'a PostRecord>,
{
    let mut sorted: Vec<&PostRecord> = records.into_iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Keep the records the filter admits, preserving order. An empty result
/// is a valid outcome.
pub fn filter<'a, I>(records: I, active: Filter) -> Vec<&'a PostRecord>
where
    I: IntoIterator<Item = &'a PostRecord>,
{
    records
        .into_iter()
        .filter(|p| active.matches(p.category))
        .collect()
}

/// What the listing shows: the whole catalog sorted newest first, then
/// narrowed by the active filter.
pub fn display_order(active: Filter) -> Vec<&'static PostRecord> {
    filter(sorted_by_date_descending(all()), active)
}

/// Resolve the home page teaser keys, in the given order. Keys missing
/// from the catalog are skipped.
pub fn featured<S: AsRef<str>>(keys: &[S]) -> Vec<&'static PostRecord> {
    keys.iter()
        .filter_map(|k| {
            let found = find(k.as_ref());
            if found.is_none() {
                log::warn!("Featured post {:?} is not in the catalog", k.as_ref());
            }
            found
        })
        .collect()
}
