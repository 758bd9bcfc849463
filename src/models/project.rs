#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// One "What I Built" bullet. `text` may carry inline Markdown links.
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub lead: Option<&'static str>,
    pub text: &'static str,
}

#[derive(Debug, Clone)]
pub struct Project {
    /// Fragment id on /projects; home page cards deep-link to it.
    pub anchor: Option<&'static str>,
    pub badge: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    /// Shorter line used on the home page card, when it differs.
    pub teaser: Option<&'static str>,
    pub highlights: &'static [Highlight],
    pub reads: &'static [Link],
    pub tools: &'static [&'static str],
    pub demo: Option<Link>,
}

const fn hl(lead: &'static str, text: &'static str) -> Highlight {
    Highlight { lead: Some(lead), text }
}

const fn item(text: &'static str) -> Highlight {
    Highlight { lead: None, text }
}

const PROJECTS: &[Project] = &[
    Project {
        anchor: Some("consulting"),
        badge: "Consulting",
        title: "Independent Consulting Projects",
        summary: "Strategy and fundraising advisory for nonprofits and retailers.",
        teaser: Some("Strategy & fundraising for nonprofits"),
        highlights: &[
            hl("Canada\u{2019}s largest retailer:", "Conducted market research and product mapping for their loyalty program, identified key factors influencing customer loyalty and digital rewards engagement"),
            hl("Canadian Tree Planting NPO:", "Automated sponsorship outreach using MailChimp and a custom Funding Calculator"),
            hl("Abacus Mathematics Center:", "Created a learning platform for Indigenous schools, led 8 consultants from scoping to delivery"),
            hl("Huron Restoration:", "Developed a funding strategy and campaign to raise $600,000 CAD for a historic restoration project"),
        ],
        reads: &[],
        tools: &["MailChimp", "Google Workspace", "Tableau", "SQL", "Python", "OpenAI GPT-4 API", "Asana"],
        demo: None,
    },
    Project {
        anchor: Some("grainai"),
        badge: "Founder-Led Project",
        title: "GrainAI (Fintech for Gig Workers)",
        summary: "Strategy, product design, and user research for a personal finance platform tailored to gig workers.",
        teaser: None,
        highlights: &[
            hl("Financial Goals Tracker:", "Created visual goal-setting tool that helps users plan around debt, emergency funds, and large purchases. Integrated with real-time progress and nudges"),
            hl("Loan & Savings Simulator:", "Built a modular calculator to project loan repayment timelines, and hybrid savings strategies personalized to income volatility"),
            hl("Growth-Driven Product Roadmap:", "Led GTM and product planning for features like gamified savings, financial literacy modules, and AI-powered nudges"),
            hl("Smart Income & Expense Dashboard:", "Developing a categorized dashboard pulling user input and bank data to offer clear visibility into earnings, spend patterns, and suggested actions"),
        ],
        reads: &[],
        tools: &["CursorAI", "Python", "Google Sheets API", "Lovable", "OpenAI GPT-4 API"],
        demo: None,
    },
    Project {
        anchor: None,
        badge: "Financial Writing",
        title: "WallStreetOasis - Editorial",
        summary: "Wrote articles on valuations, deal structures, and capital markets for a global finance audience.",
        teaser: None,
        highlights: &[
            item("Published 20+ research articles on M&A, healthcare, oil and gas, and investment topics"),
            item("Created content for WSO's valuation, strategy, and investing libraries"),
            item("Articles averaged 20% higher engagement than peer forums"),
        ],
        reads: &[
            Link { label: "Organic Growth", href: "https://www.wallstreetoasis.com/resources/skills/strategy/organic-growth" },
            Link { label: "Mixed Offering", href: "https://www.wallstreetoasis.com/resources/skills/deals/mixed-offering" },
            Link { label: "Healthcare Sector", href: "https://www.wallstreetoasis.com/resources/skills/trading-investing/healthcare-sector" },
            Link { label: "Breakup Value", href: "https://www.wallstreetoasis.com/resources/skills/valuation/breakup-value" },
            Link { label: "Distressed Securities", href: "https://www.wallstreetoasis.com/resources/skills/trading-investing/distressed-securities" },
        ],
        tools: &["Google Docs", "SEO tools", "WSO CMS"],
        demo: None,
    },
    Project {
        anchor: Some("gpt"),
        badge: "AI",
        title: "Custom Financial Sentiment GPT",
        summary: "Built GPT-based tool to assist with early-stage investment research and memo drafting.",
        teaser: None,
        highlights: &[
            item("Used GPT-4 to extract insights from startup profiles, news transcripts, and analyst reports"),
            item("Created templates to summarize deal rationale, surface red flags, and flag key metrics"),
            item("Designed the tool for early-stage diligence workflows, making it useful for quick memo drafts or VC screens"),
        ],
        reads: &[],
        tools: &["OpenAI GPT-4 API", "Google Sheets API"],
        demo: None,
    },
    Project {
        anchor: Some("driver-dashboard"),
        badge: "Data Analytics",
        title: "Driver Profitability Dashboard",
        summary: "Interactive dashboard analyzing Uber driver earnings after expenses across zones, times, and trip types.",
        teaser: None,
        highlights: &[
            hl("Interactive Dashboard:", "Built a comprehensive Streamlit app that analyzes 1000+ simulated trips across 6 zones with realistic cost modeling"),
            hl("Profitability Analysis:", "Calculated driver net earnings after gas, time, and wait costs to identify truly profitable trips and zones"),
            hl("Business Intelligence:", "Created automated insights engine that identifies worst/best performing zones and generates actionable recommendations"),
            hl("Interactive Visualizations:", "Built earnings by region, time patterns, trip type comparisons, and cost breakdown charts using Plotly"),
        ],
        reads: &[],
        tools: &["Python", "Streamlit", "Pandas", "Plotly", "NumPy", "CursorAI"],
        demo: Some(Link {
            label: "Live Demo",
            href: "https://driver-dashboard-nntngrim9pyjt9u8pwzrpf.streamlit.app/",
        }),
    },
    Project {
        anchor: Some("research"),
        badge: "Research",
        title: "Renewable Energy Research",
        summary: "Research and policy analysis on low-emission energy solutions in emerging markets.",
        teaser: None,
        highlights: &[
            item("Researched Alberta\u{2019}s carbon pricing framework and its impact on renewable investment and emissions reduction"),
            item("Completed the [Student Energy Tier 1 Fellowship](https://studentenergy.org/fellowship-tiers-of-engagement/), contributing to global projects on energy equity and access"),
            item("Conducted Master's level thesis on the feasibility of Small Modular Reactors (SMRs) in South Asia, focused on deployment potential in dense, underserved regions"),
        ],
        reads: &[],
        tools: &["Excel", "Canva", "Google Docs"],
        demo: None,
    },
];

/// Anchors of the cards shown on the home page, in display order.
const FEATURED: &[&str] = &["consulting", "grainai", "gpt", "research"];

pub fn all() -> &'static [Project] {
    PROJECTS
}

pub fn featured() -> Vec<&'static Project> {
    FEATURED
        .iter()
        .filter_map(|a| PROJECTS.iter().find(|p| p.anchor == Some(*a)))
        .collect()
}
