use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::button::{Button, ButtonVariant};
use crate::components::glass_card::{GlassCard, GlowColor};
use crate::components::layout::Layout;
use crate::pages::not_found::NotFound;
use crate::seo::head::{AgentSeo, Seo};
use crate::utils::calendly;
use crate::Route;

pub struct DemoSpec {
    pub slug: &'static str,
    pub agent_name: &'static str,
    pub industry: &'static str,
    pub tagline: &'static str,
    pub capabilities: &'static [&'static str],
    /// (visitor, agent) message pairs shown in the sample conversation.
    pub sample_exchange: &'static [(&'static str, &'static str)],
    pub glow: GlowColor,
}

pub const DEMOS: &[DemoSpec] = &[
    DemoSpec {
        slug: "restaurant",
        agent_name: "TableTalk",
        industry: "Restaurant",
        tagline: "Reservations, menu questions and group bookings handled around the clock.",
        capabilities: &[
            "Books and reschedules tables directly in your reservation system",
            "Answers menu, allergen and dietary questions instantly",
            "Handles group and private-event inquiries",
            "Sends confirmation and reminder messages",
        ],
        sample_exchange: &[
            (
                "Hi, do you have a table for 6 this Friday around 8?",
                "We'd love to have you! Friday at 8:00 PM is fully booked, but I have 7:15 PM \
                 or 8:45 PM available for a party of 6. Would either work?",
            ),
            (
                "8:45 works. Two of us are vegetarian, is that ok?",
                "Booked for 6 at 8:45 PM this Friday. Absolutely — our menu has a full \
                 vegetarian section, and the kitchen can adapt most mains. You'll get a \
                 confirmation text shortly!",
            ),
        ],
        glow: GlowColor::Amber,
    },
    DemoSpec {
        slug: "clinic",
        agent_name: "CareDesk",
        industry: "Clinic",
        tagline: "Appointment scheduling and patient intake without the phone queue.",
        capabilities: &[
            "Schedules, confirms and reschedules appointments",
            "Collects intake details before the visit",
            "Answers insurance and opening-hours questions",
            "Escalates urgent cases to staff immediately",
        ],
        sample_exchange: &[
            (
                "I need to see someone about a persistent cough, ideally this week.",
                "I can help with that. Dr. Osei has openings Wednesday 10:30 AM and Thursday \
                 3:15 PM. Which suits you better?",
            ),
            (
                "Thursday. Do you take Aetna?",
                "Yes, we accept Aetna. You're booked for Thursday at 3:15 PM — I've sent an \
                 intake form to fill out beforehand so your visit goes faster.",
            ),
        ],
        glow: GlowColor::Emerald,
    },
    DemoSpec {
        slug: "salon",
        agent_name: "StyleBot",
        industry: "Salon",
        tagline: "Bookings, stylist matching and retail questions on autopilot.",
        capabilities: &[
            "Books services with the right stylist and time slot",
            "Recommends treatments based on client history",
            "Answers pricing and product questions",
            "Fills cancelled slots from the waitlist automatically",
        ],
        sample_exchange: &[
            (
                "Can I get a balayage with Maya on Saturday?",
                "Maya is booked solid this Saturday, but she has Sunday 11:00 AM free, or \
                 Priya — who also specializes in balayage — has Saturday 2:00 PM. Preference?",
            ),
            (
                "Sunday with Maya please.",
                "Done! Balayage with Maya, Sunday 11:00 AM. Plan for about 3 hours, and \
                 you'll get a reminder the evening before.",
            ),
        ],
        glow: GlowColor::Rose,
    },
    DemoSpec {
        slug: "dealership",
        agent_name: "AutoPilot",
        industry: "Dealership",
        tagline: "Test drives, trade-in estimates and inventory questions answered instantly.",
        capabilities: &[
            "Schedules test drives and service appointments",
            "Answers inventory, financing and trade-in questions",
            "Qualifies leads before handing them to sales",
            "Follows up with interested buyers automatically",
        ],
        sample_exchange: &[
            (
                "Do you have any hybrid SUVs under 35k on the lot?",
                "We have three right now: a 2023 RAV4 Hybrid XLE at $33,400, a 2022 Tucson \
                 Hybrid at $31,900 and a 2023 Sportage Hybrid at $34,200. Want to book a \
                 test drive in any of them?",
            ),
            (
                "The RAV4, Saturday morning if possible.",
                "You're set — RAV4 Hybrid test drive Saturday 10:00 AM. Bring your license; \
                 I've also emailed you the full spec sheet.",
            ),
        ],
        glow: GlowColor::Sky,
    },
    DemoSpec {
        slug: "construction",
        agent_name: "SiteLine",
        industry: "Construction",
        tagline: "Quote requests and project inquiries captured while your crew is on site.",
        capabilities: &[
            "Captures project details and photos from prospects",
            "Books site visits and estimate appointments",
            "Answers licensing and insurance questions",
            "Keeps clients updated on project timelines",
        ],
        sample_exchange: &[
            (
                "Looking to redo a 400 sq ft deck. Rough ballpark?",
                "Happy to help! For a 400 sq ft rebuild, most of our projects land between \
                 $14k and $22k depending on materials. Want a firm number? I can book a \
                 free on-site estimate.",
            ),
            (
                "Sure, sometime next week.",
                "We have Tuesday 9:00 AM or Thursday 1:00 PM open for estimates. I'll just \
                 need the property address to confirm.",
            ),
        ],
        glow: GlowColor::Purple,
    },
];

pub fn find_demo(slug: &str) -> Option<&'static DemoSpec> {
    DEMOS.iter().find(|demo| demo.slug == slug)
}

#[function_component(Demos)]
pub fn demos() -> Html {
    html! {
        <Layout>
            <Seo
                title={"Live AI Agent Demos".to_string()}
                description={"Try Highshift Media's industry AI agents in action: restaurant \
                              reservations, clinic scheduling, salon bookings, dealership leads \
                              and construction quotes."
                    .to_string()}
                keywords={"AI Agent Demo, Chatbot Demo, Restaurant AI, Clinic AI, Salon AI"
                    .to_string()}
                url={"/demos".to_string()}
            />
            <section class="demos-hero">
                <h1>{"See the Agents in Action"}</h1>
                <p>
                    {"Every demo below is the same agent platform we deploy for clients, \
                      tuned to one industry. Pick yours."}
                </p>
            </section>
            <section class="demos-grid">
                {
                    for DEMOS.iter().map(|demo| html! {
                        <Link<Route> to={Route::Demo { industry: demo.slug.to_string() }} classes="demo-card-link">
                            <GlassCard tilt={false} glow_color={demo.glow}>
                                <div class="demo-card">
                                    <span class="demo-industry">{ demo.industry }</span>
                                    <h3>{ demo.agent_name }</h3>
                                    <p>{ demo.tagline }</p>
                                    <span class="demo-cta">{"Open demo →"}</span>
                                </div>
                            </GlassCard>
                        </Link<Route>>
                    })
                }
            </section>
            <style>
                {r#"
.demos-hero {
    max-width: 800px;
    margin: 0 auto;
    padding: 8rem 2rem 2rem;
    text-align: center;
}

.demos-hero h1 {
    font-size: 2.75rem;
    margin-bottom: 1rem;
}

.demos-hero p {
    color: #94a3b8;
    font-size: 1.15rem;
    line-height: 1.6;
}

.demos-grid {
    max-width: 1100px;
    margin: 0 auto;
    padding: 2rem;
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
    gap: 1.5rem;
}

.demo-card-link {
    text-decoration: none;
    color: inherit;
}

.demo-card {
    padding: 1.75rem;
}

.demo-industry {
    font-size: 0.8rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: #38bdf8;
}

.demo-card h3 {
    margin: 0.5rem 0;
    font-size: 1.4rem;
}

.demo-card p {
    color: #94a3b8;
    line-height: 1.6;
    min-height: 4rem;
}

.demo-cta {
    color: #38bdf8;
    font-weight: 600;
}
                "#}
            </style>
        </Layout>
    }
}

#[derive(Properties, PartialEq)]
pub struct DemoWrapperProps {
    pub industry: String,
}

/// Renders the demo page for a registered industry slug; unknown slugs get
/// the not-found page.
#[function_component(DemoWrapper)]
pub fn demo_wrapper(props: &DemoWrapperProps) -> Html {
    let demo = match find_demo(&props.industry) {
        Some(demo) => demo,
        None => return html! { <NotFound /> },
    };

    let book = Callback::from(|_: MouseEvent| {
        calendly::open_calendly_with_email(Some("demo-page"));
    });

    html! {
        <Layout>
            <AgentSeo
                agent_name={demo.agent_name.to_string()}
                industry={demo.industry.to_string()}
            />
            <section class="demo-hero">
                <span class="demo-industry">{ format!("{} industry", demo.industry) }</span>
                <h1>{ demo.agent_name }</h1>
                <p>{ demo.tagline }</p>
            </section>
            <section class="demo-body">
                <GlassCard tilt={false} class={classes!("demo-conversation")}>
                    <div class="conversation">
                        <h3>{"Sample conversation"}</h3>
                        {
                            for demo.sample_exchange.iter().map(|(visitor, agent)| html! {
                                <>
                                    <div class="bubble visitor">{ *visitor }</div>
                                    <div class="bubble agent">{ *agent }</div>
                                </>
                            })
                        }
                    </div>
                </GlassCard>
                <div class="demo-capabilities">
                    <h3>{"What it handles"}</h3>
                    <ul>
                        { for demo.capabilities.iter().map(|capability| html! { <li>{ *capability }</li> }) }
                    </ul>
                    <Button variant={ButtonVariant::Primary} onclick={book}>
                        {"Get this agent for your business"}
                    </Button>
                </div>
            </section>
            <style>
                {r#"
.demo-hero {
    max-width: 800px;
    margin: 0 auto;
    padding: 8rem 2rem 2rem;
    text-align: center;
}

.demo-hero h1 {
    font-size: 3rem;
    margin: 0.5rem 0 1rem;
}

.demo-hero p {
    color: #94a3b8;
    font-size: 1.15rem;
}

.demo-body {
    max-width: 1100px;
    margin: 0 auto;
    padding: 2rem;
    display: grid;
    grid-template-columns: 3fr 2fr;
    gap: 2.5rem;
    align-items: start;
}

.demo-conversation .conversation {
    padding: 1.75rem;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.conversation h3 {
    margin-bottom: 0.5rem;
}

.bubble {
    max-width: 85%;
    padding: 0.75rem 1rem;
    border-radius: 14px;
    line-height: 1.5;
}

.bubble.visitor {
    align-self: flex-end;
    background: rgba(14, 165, 233, 0.2);
}

.bubble.agent {
    align-self: flex-start;
    background: rgba(255, 255, 255, 0.08);
    color: #e2e8f0;
}

.demo-capabilities h3 {
    margin-bottom: 1rem;
}

.demo-capabilities ul {
    list-style: none;
    padding: 0;
    margin-bottom: 2rem;
}

.demo-capabilities li {
    color: #94a3b8;
    line-height: 1.6;
    padding-left: 1.5rem;
    position: relative;
    margin-bottom: 0.75rem;
}

.demo-capabilities li:before {
    content: "✓";
    color: #34d399;
    position: absolute;
    left: 0;
}

@media (max-width: 900px) {
    .demo-body {
        grid-template-columns: 1fr;
    }
}
                "#}
            </style>
        </Layout>
    }
}
