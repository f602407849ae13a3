use yew::prelude::*;
use yew_router::components::Link;

use crate::components::glass_card::GlassCard;
use crate::components::layout::Layout;
use crate::pages::demos::DEMOS;
use crate::seo::head::Seo;
use crate::Route;

#[function_component(Agents)]
pub fn agents() -> Html {
    html! {
        <Layout>
            <Seo
                title={"Industry AI Agents".to_string()}
                description={"Pre-tuned AI agents for restaurants, clinics, salons, dealerships \
                              and construction firms. Each one books, answers and follows up \
                              like your best front-desk hire."
                    .to_string()}
                keywords={"Industry AI Agents, Restaurant AI, Clinic AI, Salon AI, Dealership \
                           AI, Construction AI"
                    .to_string()}
                url={"/agents".to_string()}
            />
            <section class="agents-hero">
                <h1>{"Agents that know your industry"}</h1>
                <p>
                    {"A generic chatbot knows nothing about table turns, intake forms or \
                      trade-in values. Ours start from an industry playbook and then learn \
                      your business on top of it."}
                </p>
            </section>
            <section class="agents-grid">
                {
                    for DEMOS.iter().map(|demo| html! {
                        <GlassCard tilt={false} glow_color={demo.glow}>
                            <div class="agent-entry">
                                <span class="agent-industry">{ demo.industry }</span>
                                <h2>{ demo.agent_name }</h2>
                                <p>{ demo.tagline }</p>
                                <ul>
                                    {
                                        for demo.capabilities.iter().take(3).map(|capability| html! {
                                            <li>{ *capability }</li>
                                        })
                                    }
                                </ul>
                                <Link<Route>
                                    to={Route::Demo { industry: demo.slug.to_string() }}
                                    classes="agent-demo-link"
                                >
                                    { format!("Try the {} demo →", demo.industry.to_lowercase()) }
                                </Link<Route>>
                            </div>
                        </GlassCard>
                    })
                }
            </section>
            <style>
                {r#"
.agents-hero {
    max-width: 800px;
    margin: 0 auto;
    padding: 8rem 2rem 2rem;
    text-align: center;
}

.agents-hero h1 {
    font-size: 2.75rem;
    margin-bottom: 1rem;
}

.agents-hero p {
    color: #94a3b8;
    font-size: 1.15rem;
    line-height: 1.7;
}

.agents-grid {
    max-width: 1100px;
    margin: 0 auto;
    padding: 2rem;
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
    gap: 1.5rem;
}

.agent-entry {
    padding: 1.75rem;
}

.agent-industry {
    font-size: 0.8rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: #38bdf8;
}

.agent-entry h2 {
    margin: 0.5rem 0 0.75rem;
}

.agent-entry p {
    color: #94a3b8;
    line-height: 1.6;
    margin-bottom: 1rem;
}

.agent-entry ul {
    list-style: none;
    padding: 0;
    margin-bottom: 1.25rem;
}

.agent-entry li {
    color: #cbd5e1;
    padding-left: 1.25rem;
    position: relative;
    margin-bottom: 0.4rem;
    font-size: 0.95rem;
}

.agent-entry li:before {
    content: "•";
    color: #38bdf8;
    position: absolute;
    left: 0;
}

.agent-demo-link {
    color: #38bdf8;
    text-decoration: none;
    font-weight: 600;
}
                "#}
            </style>
        </Layout>
    }
}
