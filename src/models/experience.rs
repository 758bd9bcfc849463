/// A role on the About page.
#[derive(Debug, Clone)]
pub struct Experience {
    pub org: &'static str,
    pub role: &'static str,
    pub logo: &'static str,
    pub summary: &'static str,
    pub takeaways: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct Education {
    pub school: &'static str,
    pub credential: &'static str,
    pub logo: &'static str,
    pub summary: &'static str,
    pub takeaways: &'static [&'static str],
}

pub const HEADLINE: &str = "Restless strategist. Global builder. People-first problem solver.";

pub const CAREER_OVERVIEW: &str = "I am a strategist who enjoys working across messy problems where data meets decision-making. I have contributed to projects spanning megacity finance systems in the Middle East, healthcare funding reform in Ontario, and infrastructure due diligence under Canada\u{2019}s Zero Emission Program. Now, I work on global growth and investor strategy at RapidSOS, a public safety technology company connecting emergency data at scale. Outside work, I run Grassroot Ideas, a newsletter that spotlights breakthrough innovations from countries often ignored by Silicon Valley. I believe the next great solutions will rise from Lagos as easily as London, and I want my career, writing, and future ventures to help make that happen.";

const EXPERIENCE: &[Experience] = &[
    Experience {
        org: "RapidSOS",
        role: "Strategy & Corporate Development",
        logo: "/logos/rapidsos.jpg",
        summary: "At RapidSOS, I worked at the intersection of public safety, growth, and finance, helping shape strategy for a platform that connects real-time emergency data to 911. I built long-range plans, supported a live Series D fundraise, and evaluated acquisitions in a space where saving seconds truly saves lives.",
        takeaways: &[
            "Strategy feels different when lives are at stake, I learned how to balance scale with impact",
            "The most meaningful partnerships are the ones that move the needle, not just logos",
            "Saw how to position growth strategy to resonate with institutional investors",
        ],
    },
    Experience {
        org: "Deloitte",
        role: "Infrastructure M&A",
        logo: "/logos/deloitte.jpg",
        summary: "At Deloitte, I worked on the kind of projects that shape entire regions like Electric Vehicle networks and infrastructure rollouts. It was my first exposure to how governments, capital, and strategy collide. I built models, presented findings, and helped clients see the financial side of long-term impact.",
        takeaways: &[
            "Learned to ask: what does success look like in 10 years, not just next quarter",
            "Found value in visual storytelling, seeing how dashboards can simplify the complex",
            "Understood how ESG and infrastructure go hand-in-hand when scale meets sustainability",
        ],
    },
    Experience {
        org: "Ontario Health",
        role: "Strategic Funding & Financial Modelling Intern",
        logo: "/logos/ontariohealth.jpg",
        summary: "At Ontario Health, I worked on long-term funding strategy, analyzing international disease and spending data to better allocate healthcare dollars across Ontario.",
        takeaways: &[
            "Saw how cross-country data informs smarter funding decisions",
            "Gained experience linking economic indicators to public health budgeting",
            "Realized that behind every data-driven recommendation is a story and a trade-off",
        ],
    },
    Experience {
        org: "PwC Dubai",
        role: "Finance Transformation Consulting",
        logo: "/logos/pwc.jpg",
        summary: "At PwC Middle East, I worked on designing the financial backbone of a $500B smart city project. We weren\u{2019}t just creating models we were mapping organizational leadership in a city that doesn\u{2019}t exist yet. I also got to advise a sovereign wealth fund on digital dashboard to map their assets.",
        takeaways: &[
            "Learned how to navigate high-stakes strategy with sovereign clients and shifting priorities",
            "Saw how storytelling through models can shape how governments plan for the future",
            "Got a front-row seat to the scale transformation in the Gulf region",
        ],
    },
    Experience {
        org: "Markid",
        role: "Strategy & Operations",
        logo: "/logos/markid.png",
        summary: "At Markid, a kids\u{2019} resale startup, I helped turn messy ideas into real products. From interviews to building a GTM roadmap, I learned to move fast, test assumptions, and find clarity in early chaos working closely with founders and engineers to get the product into users\u{2019} hands.",
        takeaways: &[
            "Product strategy is about choosing what not to do just as much as what to build",
            "Fast feedback beats perfect answers, as interviews taught me more than data ever could",
            "Being embedded in a startup showed me how vision meets execution, day by day",
        ],
    },
    Experience {
        org: "Coca-Cola India",
        role: "Strategy & Operations",
        logo: "/logos/cocacola.jpg",
        summary: "In North India, I worked on go-to-market strategies for Coca-Cola, analyzing how socio-economic factors shaped demand, and how we could better respond to competitors like Pepsi. From grassroots incentives to price-pack design, it was all about understanding what really drives choice.",
        takeaways: &[
            "Saw how pricing is shaped by regional context, and not just demand curves",
            "Proposed region-specific promotions based on consumption habits",
            "Realized that even global brands win on the ground, through trust, timing, and relevance",
        ],
    },
];

const EDUCATION: &[Education] = &[
    Education {
        school: "Western University - Ivey Business School",
        credential: "Master of Management in Analytics | London, Ontario",
        logo: "/logos/ivey.jpg",
        summary: "Studied how data and strategy intersect, from predictive modelling to applied AI. Worked on projects across healthcare, finance, and retail using Python, SQL, R-Studio & Tableau while learning to move from code to context.",
        takeaways: &[
            "Applied analytics to real-world business and policy challenges",
            "Built end-to-end data pipelines and AI tools on large-scale datasets",
            "Found that good questions drive better data outcomes than good models alone",
        ],
    },
    Education {
        school: "University of Toronto - Rotman Commerce",
        credential: "Bachelor of Commerce (Finance, Economics & Data Science) | Toronto, Ontario",
        logo: "/logos/rotman.jpg",
        summary: "Explored how markets, policy, and technology shape economic systems, and how data connects it all. Led student organizations, launched conferences, and built communities around innovation, consulting, and impact.",
        takeaways: &[
            "Developed a strong foundation in finance, economics, and data analysis",
            "Learned to lead by organizing teams, events, and partnerships",
            "Discovered how storytelling, systems thinking, and student voice create real impact",
        ],
    },
];

/// Work history, most recent first.
pub fn experience() -> &'static [Experience] {
    EXPERIENCE
}

pub fn education() -> &'static [Education] {
    EDUCATION
}
