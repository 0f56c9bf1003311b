use yew::prelude::*;

use crate::components::back_button::BackButton;

const KEY_STATS: [(&str, &str); 3] = [
    ("500+", "Success Stories"),
    ("95%", "Retention Rate"),
    ("48hrs", "Average Placement"),
];

struct Story {
    icon: &'static str,
    industry: &'static str,
    title: &'static str,
    challenge: &'static str,
    solution: &'static str,
    results: [&'static str; 3],
}

const STORIES: [Story; 3] = [
    Story {
        icon: "☁",
        industry: "Fortune 500 Technology",
        title: "Scaling Cloud Engineering Excellence",
        challenge: "Needed to rapidly scale cloud engineering team for major digital transformation initiative",
        solution: "Deployed a specialized team of 15 senior cloud engineers within 3 weeks",
        results: [
            "40% faster project completion",
            "100% retention rate after 6 months",
            "$2M saved in recruitment costs",
        ],
    },
    Story {
        icon: "⛨",
        industry: "Healthcare Innovation",
        title: "Building Elite Security Infrastructure",
        challenge: "Required specialized security talent for HIPAA-compliant platform development",
        solution: "Built complete security team from scratch with industry-specific expertise",
        results: [
            "Zero security incidents in first year",
            "95% first-time fit rate",
            "Achieved compliance 2 months ahead of schedule",
        ],
    },
    Story {
        icon: "▦",
        industry: "Financial Services",
        title: "Legacy System Modernization",
        challenge: "Critical need for full-stack team to modernize legacy trading platform",
        solution: "Assembled cross-functional team of 12 specialists within budget",
        results: [
            "30% reduction in system latency",
            "50% decrease in maintenance costs",
            "Zero downtime during transition",
        ],
    },
];

fn story_block(story: &Story) -> Html {
    html! {
        <div class="story">
            <div class="story-text">
                <div class="story-industry">
                    <div class="story-icon">{story.icon}</div>
                    <span>{story.industry}</span>
                </div>
                <h2>{story.title}</h2>
                <div class="story-box">
                    <h3>{"Challenge:"}</h3>
                    <p>{story.challenge}</p>
                </div>
                <div class="story-box">
                    <h3>{"Solution:"}</h3>
                    <p>{story.solution}</p>
                </div>
            </div>
            <div class="story-results">
                <h3>{"Key Results"}</h3>
                { for story.results.iter().map(|result| html! {
                    <div class="story-result">
                        <div class="story-check">{"✓"}</div>
                        <p>{*result}</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StoriesProps {
    pub on_back: Callback<()>,
    pub on_show_booking: Callback<()>,
}

#[function_component(Stories)]
pub fn stories(props: &StoriesProps) -> Html {
    let show_booking = {
        let cb = props.on_show_booking.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="stories-page">
            <BackButton on_click={props.on_back.clone()} />

            <section class="stories-hero">
                <div class="pill">
                    <span class="pill-dot"></span>
                    <span>{"CLIENT SUCCESS STORIES"}</span>
                </div>
                <h1>{"Transforming IT Teams Across Industries"}</h1>
                <p>{"Discover how leading companies accelerated their growth with IQBean's elite IT talent solutions."}</p>
                <div class="stories-key-stats">
                    { for KEY_STATS.iter().map(|(value, label)| html! {
                        <div class="stories-key-stat">
                            <div class="stories-key-value">{*value}</div>
                            <div class="stories-key-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="stories-list">
                { for STORIES.iter().map(story_block) }
            </section>

            <section class="stories-cta">
                <div class="stories-cta-inner">
                    <h2>{"Ready to Write Your Success Story?"}</h2>
                    <p>{"Join these industry leaders and transform your IT capabilities with IQBean's elite talent solutions."}</p>
                    <div class="stories-cta-buttons">
                        <button class="stories-cta-light" onclick={show_booking}>
                            {"Schedule Consultation"}<span>{"›"}</span>
                        </button>
                        // more stories are not published yet, so this one stays inert
                        <button class="stories-cta-dim">
                            {"View More Stories"}<span>{"→"}</span>
                        </button>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .stories-page {
                    min-height: 100vh;
                    background: #001430;
                    color: #ffffff;
                    position: relative;
                }
                .stories-hero {
                    max-width: 768px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem 5rem;
                    text-align: center;
                }
                .stories-hero .pill {
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
                .stories-hero .pill-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #60A5FA;
                }
                .stories-hero h1 { font-size: 3.25rem; line-height: 1.15; margin: 0 0 1.5rem; }
                .stories-hero p { font-size: 1.25rem; color: #E5E7EB; line-height: 1.6; margin-bottom: 3rem; }
                .stories-key-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .stories-key-stat, .story-box, .story-results {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                }
                .stories-key-value { font-size: 1.9rem; font-weight: 700; margin-bottom: 0.5rem; }
                .stories-key-label { font-size: 0.875rem; color: #BFDBFE; }
                .stories-list {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }
                .story {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .story-text { display: flex; flex-direction: column; gap: 1.5rem; }
                .story-industry { display: flex; align-items: center; gap: 0.75rem; color: #BFDBFE; font-size: 0.875rem; }
                .story-icon, .story-check {
                    width: 2.5rem;
                    height: 2.5rem;
                    flex-shrink: 0;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(96, 165, 250, 0.1);
                    color: #60A5FA;
                }
                .story h2 { font-size: 1.9rem; margin: 0; }
                .story-box h3 { margin: 0 0 0.5rem; }
                .story-box p, .story-result p { margin: 0; color: #E5E7EB; font-size: 0.9rem; }
                .story-results { padding: 2rem; border-radius: 1rem; }
                .story-results h3 { font-size: 1.25rem; margin: 0 0 1.5rem; }
                .story-result { display: flex; align-items: flex-start; gap: 1rem; margin-bottom: 1rem; }
                .story-result p { padding-top: 0.4rem; }
                .stories-cta { padding: 6rem 1.5rem; }
                .stories-cta-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 3rem;
                    border-radius: 1rem;
                    background: rgba(59, 130, 246, 0.1);
                    text-align: center;
                }
                .stories-cta-inner h2 { font-size: 2.25rem; margin: 0 0 1.5rem; }
                .stories-cta-inner p { color: #E5E7EB; font-size: 1.1rem; margin-bottom: 2rem; }
                .stories-cta-buttons { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
                .stories-cta-light, .stories-cta-dim {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 0.5rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .stories-cta-light { background: #ffffff; color: #001430; }
                .stories-cta-dim { background: rgba(255, 255, 255, 0.1); color: #ffffff; }
                @media (max-width: 900px) {
                    .story { grid-template-columns: 1fr; }
                    .stories-hero h1 { font-size: 2.25rem; }
                    .stories-key-stats { gap: 1rem; }
                }
                "#}
            </style>
        </div>
    }
}
