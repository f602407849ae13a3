use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::glass_card::{GlassCard, GlowColor};
use crate::components::layout::Layout;
use crate::seo::head::ServiceSeo;
use crate::utils::calendly;

#[function_component(Marketing)]
pub fn marketing() -> Html {
    let book = Callback::from(|_: MouseEvent| {
        calendly::open_calendly_with_email(Some("marketing-page"));
    });

    html! {
        <Layout>
            <ServiceSeo
                service_name={"Marketing Automation".to_string()}
                service_description={"AI-driven marketing automation from Highshift Media: \
                                      lead nurturing, re-engagement campaigns and reporting \
                                      that run themselves."
                    .to_string()}
            />
            <section class="marketing-hero">
                <h1>{"Marketing that follows up so you don't have to"}</h1>
                <p>
                    {"Most leads go cold because nobody wrote the fifth follow-up email. Our \
                      automation stack writes it, sends it at the right moment and tells you \
                      when someone bites."}
                </p>
            </section>
            <section class="marketing-grid">
                <GlassCard tilt={false} glow_color={GlowColor::Emerald}>
                    <div class="marketing-card">
                        <h3>{"Lead nurturing"}</h3>
                        <p>
                            {"Behavior-triggered email and SMS journeys that adapt to what \
                              each prospect actually clicked, opened or ignored."}
                        </p>
                    </div>
                </GlassCard>
                <GlassCard tilt={false} glow_color={GlowColor::Sky}>
                    <div class="marketing-card">
                        <h3>{"Re-engagement"}</h3>
                        <p>
                            {"Dormant lists are money sitting still. Win-back campaigns wake \
                              them up with offers tuned per segment."}
                        </p>
                    </div>
                </GlassCard>
                <GlassCard tilt={false} glow_color={GlowColor::Purple}>
                    <div class="marketing-card">
                        <h3>{"CRM-native scoring"}</h3>
                        <p>
                            {"Every interaction scores the lead in the CRM you already use, \
                              so sales calls the hottest ten, not the newest hundred."}
                        </p>
                    </div>
                </GlassCard>
                <GlassCard tilt={false} glow_color={GlowColor::Amber}>
                    <div class="marketing-card">
                        <h3>{"Reporting that reads itself"}</h3>
                        <p>
                            {"A weekly digest of what moved and why, written in plain \
                              language. Dashboards stay available for the curious."}
                        </p>
                    </div>
                </GlassCard>
            </section>
            <section class="marketing-cta">
                <Button variant={ButtonVariant::Primary} onclick={book}>
                    {"Audit my funnel"}
                </Button>
            </section>
            <style>
                {r#"
.marketing-hero {
    max-width: 800px;
    margin: 0 auto;
    padding: 8rem 2rem 2rem;
    text-align: center;
}

.marketing-hero h1 {
    font-size: 2.75rem;
    margin-bottom: 1rem;
}

.marketing-hero p {
    color: #94a3b8;
    font-size: 1.15rem;
    line-height: 1.7;
}

.marketing-grid {
    max-width: 1000px;
    margin: 0 auto;
    padding: 2rem;
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 1.5rem;
}

.marketing-card {
    padding: 1.75rem;
}

.marketing-card h3 {
    margin-bottom: 0.75rem;
}

.marketing-card p {
    color: #94a3b8;
    line-height: 1.6;
}

.marketing-cta {
    text-align: center;
    padding: 2rem 2rem 4rem;
}
                "#}
            </style>
        </Layout>
    }
}
