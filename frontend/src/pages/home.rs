use yew::prelude::*;

pub const TRUSTED_BY: [&str; 3] = ["Bristol Myers", "Merck", "NJ State"];

struct Stat {
    value: &'static str,
    label: &'static str,
}

const HERO_STATS: [Stat; 3] = [
    Stat { value: "60%", label: "Time-to-hire reduced" },
    Stat { value: "94%", label: "Project success rate" },
    Stat { value: "98%", label: "Client retention" },
];

const QUICK_METRICS: [(&str, Stat); 2] = [
    ("☁", Stat { value: "48hrs", label: "Average Placement" }),
    ("▦", Stat { value: "95%", label: "First-time Fit" }),
];

struct FeatureCard {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    metric: &'static str,
    // None renders the trusted-by strip instead
    stats: Option<[Stat; 2]>,
}

const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        icon: "◎",
        title: "Close Skills Gaps Fast",
        description: "Access pre-vetted IT experts within 48 hours, not weeks",
        metric: "60% faster placements",
        stats: Some([
            Stat { value: "48hrs", label: "Average Response" },
            Stat { value: "5000+", label: "IT Experts" },
        ]),
    },
    FeatureCard {
        icon: "⛨",
        title: "Risk-Free Innovation",
        description: "Scale your cloud initiatives with guaranteed expertise",
        metric: "100% project success rate",
        stats: Some([
            Stat { value: "100%", label: "Satisfaction" },
            Stat { value: "200+", label: "Projects" },
        ]),
    },
    FeatureCard {
        icon: "⚡",
        title: "Predictable Excellence",
        description: "Our talent succeeds where others struggle",
        metric: "95% first-time fit",
        stats: None,
    },
];

const DIFFERENCE: [(&str, &str, &str, &str); 3] = [
    ("◎", "Precision Matching", "AI-powered talent matching ensuring perfect fit every time", "95% retention rate"),
    ("◷", "Rapid Deployment", "Urgent IT staffing needs solved in record time", "48-hour placement"),
    ("⛨", "Quality Guaranteed", "Rigorous vetting process for all candidates", "100% satisfaction"),
];

fn trusted_strip() -> Html {
    html! {
        <div class="trusted-strip">
            { for TRUSTED_BY.iter().map(|company| html! {
                <div class="trusted-chip"><span>{*company}</span></div>
            }) }
        </div>
    }
}

fn feature_card(card: &FeatureCard) -> Html {
    html! {
        <div class="feature-card">
            <div class="feature-icon">{card.icon}</div>
            <h3>{card.title}</h3>
            <p>{card.description}</p>
            <div class="feature-metric">{card.metric}</div>
            {
                match &card.stats {
                    Some(stats) => html! {
                        <div class="feature-stats">
                            { for stats.iter().map(|stat| html! {
                                <div class="feature-stat">
                                    <div class="feature-stat-value">{stat.value}</div>
                                    <div class="feature-stat-label">{stat.label}</div>
                                </div>
                            }) }
                        </div>
                    },
                    None => html! {
                        <div class="feature-trusted">
                            <div class="feature-trusted-title">{"Trusted By Industry Leaders"}</div>
                            { trusted_strip() }
                        </div>
                    },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_show_booking: Callback<()>,
    pub on_show_stories: Callback<()>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let show_booking = {
        let cb = props.on_show_booking.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let show_stories = {
        let cb = props.on_show_stories.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="home-page">
            <section class="home-hero">
                <div class="home-hero-left fade-up">
                    <div class="pill">
                        <span class="pill-dot"></span>
                        <span>{"WHERE TALENT MEETS TRANSFORMATION"}</span>
                    </div>
                    <h1>
                        <span class="headline-accent">{"Digital Evolution"}</span>
                        <span class="headline-sub">{"With IQBean's Elite IT Talent"}</span>
                    </h1>
                    <p class="home-lead">
                        {"In a world where "}
                        <span class="highlight">{"73% of IT projects fail"}</span>
                        {" due to talent gaps, we ensure your success by connecting you with precisely matched IT professionals who drive results from day one."}
                    </p>
                    <div class="cta-row">
                        <button class="cta-primary" onclick={show_booking.clone()}>
                            {"Solve Your IT Challenges"}<span class="arrow">{"→"}</span>
                        </button>
                        <button class="cta-secondary" onclick={show_stories.clone()}>
                            {"See Our Impact"}<span class="arrow">{"›"}</span>
                        </button>
                    </div>
                    <div class="hero-stats">
                        { for HERO_STATS.iter().map(|stat| html! {
                            <div class="hero-stat">
                                <span class="hero-stat-value">{stat.value}</span>
                                <span class="hero-stat-label">{stat.label}</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="home-hero-right fade-up delayed">
                    <div class="hero-watermark">{"IT"}</div>
                    <div class="headline-card">
                        <div class="headline-card-top">
                            <div class="headline-card-icon">{"👥"}</div>
                            <div>
                                <h3>{"5000+"}</h3>
                                <p>{"Elite IT Professionals"}</p>
                            </div>
                        </div>
                        { trusted_strip() }
                    </div>
                    <div class="quick-metrics">
                        { for QUICK_METRICS.iter().map(|(icon, stat)| html! {
                            <div class="quick-metric">
                                <div class="quick-metric-icon">{*icon}</div>
                                <div>
                                    <div class="quick-metric-value">{stat.value}</div>
                                    <div class="quick-metric-label">{stat.label}</div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="feature-section">
                <div class="feature-grid">
                    { for FEATURE_CARDS.iter().map(feature_card) }
                </div>
            </section>

            <section class="difference-section">
                <div class="section-heading">
                    <h2>{"The IQBean Difference"}</h2>
                    <p>{"We combine deep industry expertise with advanced talent matching to deliver IT professionals who make an immediate impact."}</p>
                </div>
                <div class="feature-grid">
                    { for DIFFERENCE.iter().map(|(icon, title, description, metric)| html! {
                        <div class="difference-card">
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                            <span class="difference-metric">{*metric}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section class="closing-cta">
                <div class="closing-cta-inner">
                    <h2>{"Ready to Transform Your IT Workforce?"}</h2>
                    <p>{"Join leading companies who trust IQBean to deliver exceptional IT talent that drives innovation and growth."}</p>
                    <div class="cta-row centered">
                        <button class="cta-light" onclick={show_booking}>
                            {"Schedule a Consultation"}<span class="arrow">{"›"}</span>
                        </button>
                        <button class="cta-secondary" onclick={show_stories}>
                            {"View Success Stories"}<span class="arrow">{"→"}</span>
                        </button>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    background: #001430;
                    color: #ffffff;
                    overflow-x: hidden;
                }
                .home-hero {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 4rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    background: rgba(59, 130, 246, 0.2);
                    color: #BFDBFE;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.05em;
                    margin-bottom: 1.5rem;
                }
                .pill-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #60A5FA;
                    animation: pulse 2s infinite;
                }
                .home-hero h1 {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin: 0 0 1.5rem;
                }
                .headline-accent {
                    font-size: 3.5rem;
                    font-weight: 700;
                    background: linear-gradient(45deg, #fff, #60A5FA);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .headline-sub {
                    font-size: 2rem;
                    font-weight: 600;
                    color: #E5E7EB;
                }
                .home-lead {
                    font-size: 1.2rem;
                    line-height: 1.7;
                    color: #E5E7EB;
                    margin-bottom: 2.5rem;
                }
                .highlight {
                    color: #60A5FA;
                    font-weight: 600;
                }
                .cta-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .cta-row.centered {
                    justify-content: center;
                    margin-bottom: 0;
                }
                .cta-primary, .cta-secondary, .cta-light {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 0.5rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: opacity 0.2s ease;
                }
                .cta-primary { background: #3B82F6; color: #ffffff; }
                .cta-secondary { background: rgba(255, 255, 255, 0.1); color: #ffffff; }
                .cta-light { background: #ffffff; color: #001430; }
                .cta-primary:hover, .cta-secondary:hover, .cta-light:hover { opacity: 0.9; }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .hero-stat { display: flex; flex-direction: column; gap: 0.25rem; }
                .hero-stat-value { font-size: 2rem; font-weight: 700; }
                .hero-stat-label { font-size: 0.875rem; color: #BFDBFE; }
                .home-hero-right { position: relative; }
                .hero-watermark {
                    position: absolute;
                    top: -4rem;
                    right: 0;
                    font-size: 12rem;
                    font-weight: 800;
                    color: rgba(255, 255, 255, 0.03);
                    pointer-events: none;
                }
                .headline-card, .quick-metric, .feature-card, .difference-card {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    padding: 2rem;
                }
                .headline-card-top { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem; }
                .headline-card-top h3 { font-size: 2rem; margin: 0; }
                .headline-card-top p { margin: 0; color: #BFDBFE; }
                .headline-card-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(96, 165, 250, 0.1);
                    font-size: 1.5rem;
                }
                .trusted-strip { display: flex; flex-wrap: wrap; gap: 0.75rem; }
                .trusted-chip {
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    font-size: 0.875rem;
                    color: #E5E7EB;
                }
                .quick-metrics {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    margin-top: 1rem;
                }
                .quick-metric { display: flex; align-items: center; gap: 1rem; padding: 1.5rem; }
                .quick-metric-icon { font-size: 1.5rem; color: #60A5FA; }
                .quick-metric-value { font-size: 1.5rem; font-weight: 700; }
                .quick-metric-label { font-size: 0.875rem; color: #BFDBFE; }
                .feature-section, .difference-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .feature-icon { font-size: 1.75rem; color: #60A5FA; margin-bottom: 1rem; }
                .feature-card h3, .difference-card h3 { font-size: 1.35rem; margin: 0 0 0.75rem; }
                .feature-card p, .difference-card p { color: #E5E7EB; line-height: 1.6; }
                .feature-metric, .difference-metric {
                    display: inline-block;
                    margin: 1rem 0;
                    color: #60A5FA;
                    font-weight: 600;
                }
                .feature-stats { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                .feature-stat {
                    padding: 1rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.05);
                }
                .feature-stat-value { font-size: 1.25rem; font-weight: 700; }
                .feature-stat-label { font-size: 0.8rem; color: #BFDBFE; }
                .feature-trusted-title { font-size: 0.875rem; color: #BFDBFE; margin-bottom: 0.75rem; }
                .section-heading { text-align: center; max-width: 720px; margin: 0 auto 3rem; }
                .section-heading h2 { font-size: 2.5rem; margin-bottom: 1rem; }
                .section-heading p { color: #E5E7EB; font-size: 1.1rem; }
                .closing-cta { padding: 6rem 1.5rem; }
                .closing-cta-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 3rem;
                    border-radius: 1rem;
                    background: rgba(59, 130, 246, 0.1);
                    text-align: center;
                }
                .closing-cta-inner h2 { font-size: 2.5rem; margin: 0 0 1.5rem; }
                .closing-cta-inner p { color: #E5E7EB; font-size: 1.1rem; margin-bottom: 2rem; }
                .fade-up { animation: fadeUp 0.8s ease both; }
                .fade-up.delayed { animation-delay: 0.2s; }
                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }
                @media (max-width: 900px) {
                    .home-hero, .feature-grid { grid-template-columns: 1fr; }
                    .headline-accent { font-size: 2.5rem; }
                    .headline-sub { font-size: 1.5rem; }
                }
                "#}
            </style>
        </div>
    }
}
