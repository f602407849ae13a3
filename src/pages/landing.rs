use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::components::Link;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::floating::{AnimatedCounter, GradientText, Particles};
use crate::components::glass_card::{GlassCard, GlowColor};
use crate::components::layout::Layout;
use crate::seo::head::Seo;
use crate::utils::calendly;
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let navigator = use_navigator();

    let book_consultation = Callback::from(|_: MouseEvent| {
        calendly::open_calendly_with_email(Some("landing-hero"));
    });

    let explore_services = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Services);
            }
        })
    };

    html! {
        <Layout>
            <Seo />
            <Particles count={24} />
            <section class="landing-hero">
                <h1>
                    {"Put "}
                    <GradientText gradient={"linear-gradient(90deg, #38bdf8, #a78bfa)".to_string()}>
                        {"AI to work"}
                    </GradientText>
                    {" in your business"}
                </h1>
                <p class="hero-sub">
                    {"Custom AI agents, chatbots and marketing automation — designed, built \
                      and maintained for you. Your customers get answers in seconds; your \
                      team gets their time back."}
                </p>
                <div class="hero-actions">
                    <Button variant={ButtonVariant::Primary} onclick={book_consultation}>
                        {"Book a free consultation"}
                    </Button>
                    <Button variant={ButtonVariant::Secondary} onclick={explore_services}>
                        {"Explore services"}
                    </Button>
                </div>
                <div class="hero-stats">
                    <div class="stat">
                        <AnimatedCounter value={500} suffix={"+".to_string()} class={classes!("stat-number")} />
                        <span class="stat-label">{"businesses served"}</span>
                    </div>
                    <div class="stat">
                        <AnimatedCounter value={24} suffix={"/7".to_string()} class={classes!("stat-number")} />
                        <span class="stat-label">{"always-on agents"}</span>
                    </div>
                    <div class="stat">
                        <AnimatedCounter value={90} suffix={"%".to_string()} class={classes!("stat-number")} />
                        <span class="stat-label">{"routine inquiries automated"}</span>
                    </div>
                </div>
            </section>

            <section class="landing-services">
                <h2>{"What we build"}</h2>
                <div class="landing-services-grid">
                    <GlassCard glow_color={GlowColor::Sky}>
                        <div class="service-card">
                            <h3>{"AI Agents"}</h3>
                            <p>
                                {"Industry-tuned agents that book appointments, qualify leads \
                                  and answer customer questions across chat, WhatsApp and voice."}
                            </p>
                        </div>
                    </GlassCard>
                    <GlassCard glow_color={GlowColor::Purple}>
                        <div class="service-card">
                            <h3>{"Chatbots"}</h3>
                            <p>
                                {"Website and messaging chatbots trained on your business — \
                                  menus, pricing, policies — that hand off to humans gracefully."}
                            </p>
                        </div>
                    </GlassCard>
                    <GlassCard glow_color={GlowColor::Emerald}>
                        <div class="service-card">
                            <h3>{"Marketing Automation"}</h3>
                            <p>
                                {"Campaigns, follow-ups and lead nurturing that run themselves, \
                                  wired into the CRM you already use."}
                            </p>
                        </div>
                    </GlassCard>
                    <GlassCard glow_color={GlowColor::Amber}>
                        <div class="service-card">
                            <h3>{"LLM Integration"}</h3>
                            <p>
                                {"Enterprise LLM features inside your own product and tooling, \
                                  from retrieval pipelines to internal copilots."}
                            </p>
                        </div>
                    </GlassCard>
                </div>
                <div class="landing-services-more">
                    <Link<Route> to={Route::Demos}>{"See live industry demos →"}</Link<Route>>
                </div>
            </section>

            <section class="landing-cta">
                <GlassCard tilt={false}>
                    <div class="cta-inner">
                        <h2>{"Not sure where AI fits?"}</h2>
                        <p>
                            {"In a 30-minute call we'll map your highest-leverage automation \
                              opportunities — no commitment, no jargon."}
                        </p>
                        <Button
                            variant={ButtonVariant::Primary}
                            onclick={Callback::from(|_: MouseEvent| {
                                calendly::open_calendly_with_email(Some("landing-cta"));
                            })}
                        >
                            {"Schedule the call"}
                        </Button>
                    </div>
                </GlassCard>
            </section>

            <style>
                {r#"
.landing-hero {
    max-width: 900px;
    margin: 0 auto;
    padding: 10rem 2rem 4rem;
    text-align: center;
    position: relative;
    z-index: 1;
}

.landing-hero h1 {
    font-size: 3.5rem;
    line-height: 1.15;
    margin-bottom: 1.5rem;
}

.hero-sub {
    color: #94a3b8;
    font-size: 1.2rem;
    line-height: 1.7;
    max-width: 38rem;
    margin: 0 auto 2.5rem;
}

.hero-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
}

.hero-stats {
    display: flex;
    gap: 3rem;
    justify-content: center;
    margin-top: 4rem;
    flex-wrap: wrap;
}

.stat {
    display: flex;
    flex-direction: column;
    align-items: center;
}

.stat-number {
    font-size: 2.25rem;
    font-weight: 700;
    color: #38bdf8;
}

.stat-label {
    color: #64748b;
    font-size: 0.9rem;
    margin-top: 0.25rem;
}

.landing-services {
    max-width: 1100px;
    margin: 0 auto;
    padding: 4rem 2rem;
}

.landing-services h2 {
    text-align: center;
    font-size: 2.25rem;
    margin-bottom: 2.5rem;
}

.landing-services-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(250px, 1fr));
    gap: 1.5rem;
}

.service-card {
    padding: 1.75rem;
}

.service-card h3 {
    margin-bottom: 0.75rem;
}

.service-card p {
    color: #94a3b8;
    line-height: 1.6;
}

.landing-services-more {
    text-align: center;
    margin-top: 2rem;
}

.landing-services-more a {
    color: #38bdf8;
    text-decoration: none;
    font-weight: 600;
}

.landing-cta {
    max-width: 800px;
    margin: 0 auto;
    padding: 2rem 2rem 4rem;
}

.cta-inner {
    padding: 3rem 2.5rem;
    text-align: center;
}

.cta-inner h2 {
    margin-bottom: 1rem;
}

.cta-inner p {
    color: #94a3b8;
    margin-bottom: 2rem;
    line-height: 1.6;
}

@media (max-width: 768px) {
    .landing-hero h1 {
        font-size: 2.5rem;
    }
}
                "#}
            </style>
        </Layout>
    }
}
