use serde::{Deserialize, Serialize};

/// Closed set of story categories. Every catalog record carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ecommerce,
    Energy,
    Finance,
    Healthcare,
    Technology,
    Other,
}

impl Category {
    /// Chip display order.
    pub const ALL: [Category; 6] = [
        Category::Ecommerce,
        Category::Energy,
        Category::Finance,
        Category::Healthcare,
        Category::Technology,
        Category::Other,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Ecommerce => "ecommerce",
            Category::Energy => "energy",
            Category::Finance => "finance",
            Category::Healthcare => "healthcare",
            Category::Technology => "technology",
            Category::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Ecommerce => "E-Commerce",
            Category::Energy => "Energy",
            Category::Finance => "Finance",
            Category::Healthcare => "Healthcare",
            Category::Technology => "Technology",
            Category::Other => "Other",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// The active filter on the story listing: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub const ALL_SLUG: &'static str = "all";

    /// Parse the `filter` query value. Absent, empty, "all" and unknown
    /// tokens all mean `All`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Filter::All,
            Some(Self::ALL_SLUG) => Filter::All,
            Some(token) => match Category::from_slug(token) {
                Some(cat) => Filter::Only(cat),
                None => {
                    log::debug!("Unknown filter token {:?}, showing all posts", token);
                    Filter::All
                }
            },
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(c) => c == category,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Filter::All => Self::ALL_SLUG,
            Filter::Only(c) => c.slug(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(c) => c.label(),
        }
    }

    pub fn is_all(self) -> bool {
        self == Filter::All
    }
}

/// One filter chip as shown above the story grid.
#[derive(Debug, Clone, Serialize)]
pub struct FilterChip {
    pub label: &'static str,
    pub value: &'static str,
    pub active: bool,
    #[serde(skip)]
    pub filter: Filter,
}

/// "All" followed by every category, with the active one flagged.
pub fn filter_chips(active: Filter) -> Vec<FilterChip> {
    std::iter::once(Filter::All)
        .chain(Category::ALL.into_iter().map(Filter::Only))
        .map(|f| FilterChip {
            label: f.label(),
            value: f.slug(),
            active: f == active,
            filter: f,
        })
        .collect()
}
