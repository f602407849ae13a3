use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::glass_card::{GlassCard, GlowColor};
use crate::components::layout::Layout;
use crate::config::SITE;
use crate::seo::head::Seo;
use crate::utils::calendly;

#[function_component(Contact)]
pub fn contact() -> Html {
    let book_with_email = Callback::from(|_: MouseEvent| {
        calendly::open_calendly_with_email(Some("contact-page"));
    });

    let book_simple = Callback::from(|_: MouseEvent| {
        calendly::open_calendly_simple();
    });

    html! {
        <Layout>
            <Seo
                title={"Contact".to_string()}
                description={"Talk to Highshift Media about AI agents, chatbots and marketing \
                              automation. Book a free consultation or reach us by email, phone \
                              or WhatsApp."
                    .to_string()}
                url={"/contact".to_string()}
            />
            <section class="contact-hero">
                <h1>{"Let's talk"}</h1>
                <p>
                    {"The fastest way to find out whether AI pays off in your business is a \
                      30-minute conversation. Pick a time, or reach us directly."}
                </p>
                <div class="contact-actions">
                    <Button variant={ButtonVariant::Primary} onclick={book_with_email}>
                        {"Book a free consultation"}
                    </Button>
                    <Button variant={ButtonVariant::Ghost} onclick={book_simple}>
                        {"Just show me the calendar"}
                    </Button>
                </div>
            </section>
            <section class="contact-grid">
                <GlassCard tilt={false} href={format!("mailto:{}", SITE.contact_email)}>
                    <div class="contact-card">
                        <h3>{"Email"}</h3>
                        <p>{ SITE.contact_email }</p>
                        <span>{"Replies within one business day"}</span>
                    </div>
                </GlassCard>
                <GlassCard tilt={false} href={format!("tel:{}", SITE.contact_phone)} glow_color={GlowColor::Emerald}>
                    <div class="contact-card">
                        <h3>{"Phone"}</h3>
                        <p>{ SITE.contact_phone_display }</p>
                        <span>{"Mon–Fri, 9am–6pm CT"}</span>
                    </div>
                </GlassCard>
                <GlassCard tilt={false} href={"https://wa.me/+16307033569".to_string()} glow_color={GlowColor::Purple}>
                    <div class="contact-card">
                        <h3>{"WhatsApp"}</h3>
                        <p>{"Message us any time"}</p>
                        <span>{"Our own agent answers first — try it"}</span>
                    </div>
                </GlassCard>
            </section>
            <style>
                {r#"
.contact-hero {
    max-width: 700px;
    margin: 0 auto;
    padding: 8rem 2rem 2rem;
    text-align: center;
}

.contact-hero h1 {
    font-size: 2.75rem;
    margin-bottom: 1rem;
}

.contact-hero p {
    color: #94a3b8;
    font-size: 1.15rem;
    line-height: 1.7;
    margin-bottom: 2rem;
}

.contact-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
}

.contact-grid {
    max-width: 1000px;
    margin: 0 auto;
    padding: 3rem 2rem 4rem;
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 1.5rem;
}

.contact-card {
    padding: 1.75rem;
    text-align: center;
}

.contact-card h3 {
    margin-bottom: 0.5rem;
}

.contact-card p {
    color: #e2e8f0;
    font-size: 1.05rem;
    margin-bottom: 0.5rem;
}

.contact-card span {
    color: #64748b;
    font-size: 0.85rem;
}
                "#}
            </style>
        </Layout>
    }
}
