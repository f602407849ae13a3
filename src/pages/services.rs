use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::button::{Button, ButtonVariant};
use crate::components::glass_card::{GlassCard, GlowColor};
use crate::components::layout::Layout;
use crate::seo::head::Seo;
use crate::utils::calendly;
use crate::Route;

struct Service {
    name: &'static str,
    blurb: &'static str,
    points: &'static [&'static str],
    glow: GlowColor,
}

const SERVICES: &[Service] = &[
    Service {
        name: "Custom AI Agents",
        blurb: "Agents built around one job in your business — booking, support, intake, \
                follow-up — and wired into the tools you already run.",
        points: &[
            "Deployed on web chat, WhatsApp and voice",
            "Connected to your calendar, CRM and knowledge base",
            "Escalates to a human the moment it should",
        ],
        glow: GlowColor::Sky,
    },
    Service {
        name: "Chatbots",
        blurb: "Website chatbots that actually know your business and keep their answers \
                inside it.",
        points: &[
            "Trained on your site, docs and policies",
            "Lead capture built into every conversation",
            "Multilingual out of the box",
        ],
        glow: GlowColor::Purple,
    },
    Service {
        name: "Marketing Automation",
        blurb: "Nurture sequences, re-engagement campaigns and reporting that run without a \
                marketer babysitting them.",
        points: &[
            "Email and SMS journeys triggered by real behavior",
            "Lead scoring synced to your CRM",
            "Weekly performance digests, not dashboards you never open",
        ],
        glow: GlowColor::Emerald,
    },
    Service {
        name: "Voice AI",
        blurb: "Phone agents that answer every call on the first ring, around the clock.",
        points: &[
            "Natural speech, interruptions handled",
            "Books appointments mid-call",
            "Full transcripts delivered to your inbox",
        ],
        glow: GlowColor::Amber,
    },
    Service {
        name: "LLM Integration",
        blurb: "Production LLM features inside your product: retrieval, summarization, \
                copilots — engineered, evaluated and maintained.",
        points: &[
            "Model selection and cost tuning",
            "Retrieval pipelines over your private data",
            "Evaluation suites so quality doesn't drift",
        ],
        glow: GlowColor::Rose,
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    let book = Callback::from(|_: MouseEvent| {
        calendly::open_calendly_with_email(Some("services-page"));
    });

    html! {
        <Layout>
            <Seo
                title={"AI Services & Solutions".to_string()}
                description={"Custom AI agents, chatbots, marketing automation, voice AI and \
                              enterprise LLM integration — scoped, built and maintained by \
                              Highshift Media."
                    .to_string()}
                keywords={"AI Services, Custom AI Agents, Chatbot Development, Marketing \
                           Automation, Voice AI, LLM Integration"
                    .to_string()}
                url={"/services".to_string()}
            />
            <section class="services-hero">
                <h1>{"Services"}</h1>
                <p>
                    {"Every engagement starts from the same question: where does automation \
                      pay for itself fastest in your business? These are the five places we \
                      usually find the answer."}
                </p>
            </section>
            <section class="services-list">
                {
                    for SERVICES.iter().map(|service| html! {
                        <GlassCard tilt={false} glow_color={service.glow}>
                            <div class="service-entry">
                                <h2>{ service.name }</h2>
                                <p>{ service.blurb }</p>
                                <ul>
                                    { for service.points.iter().map(|point| html! { <li>{ *point }</li> }) }
                                </ul>
                            </div>
                        </GlassCard>
                    })
                }
            </section>
            <section class="services-cta">
                <p>
                    {"Want to see one working before you talk to us? "}
                    <Link<Route> to={Route::Demos}>{"Open a live demo"}</Link<Route>>
                    {"."}
                </p>
                <Button variant={ButtonVariant::Primary} onclick={book}>
                    {"Scope my project"}
                </Button>
            </section>
            <style>
                {r#"
.services-hero {
    max-width: 800px;
    margin: 0 auto;
    padding: 8rem 2rem 2rem;
    text-align: center;
}

.services-hero h1 {
    font-size: 2.75rem;
    margin-bottom: 1rem;
}

.services-hero p {
    color: #94a3b8;
    font-size: 1.15rem;
    line-height: 1.7;
}

.services-list {
    max-width: 900px;
    margin: 0 auto;
    padding: 2rem;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.service-entry {
    padding: 2rem;
}

.service-entry h2 {
    margin-bottom: 0.75rem;
}

.service-entry p {
    color: #94a3b8;
    line-height: 1.7;
    margin-bottom: 1rem;
}

.service-entry ul {
    list-style: none;
    padding: 0;
}

.service-entry li {
    color: #cbd5e1;
    padding-left: 1.5rem;
    position: relative;
    margin-bottom: 0.5rem;
}

.service-entry li:before {
    content: "→";
    color: #38bdf8;
    position: absolute;
    left: 0;
}

.services-cta {
    text-align: center;
    padding: 2rem 2rem 4rem;
}

.services-cta p {
    color: #94a3b8;
    margin-bottom: 1.5rem;
}

.services-cta a {
    color: #38bdf8;
}
                "#}
            </style>
        </Layout>
    }
}
