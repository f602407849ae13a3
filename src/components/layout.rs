use chrono::Datelike;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::floating::{FloatingOrbs, GridPattern};
use crate::config::SITE;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or(true)]
    pub show_footer: bool,
    #[prop_or(true)]
    pub show_background: bool,
    pub children: Children,
}

/// Page shell shared by every route: decorative background layers, the
/// main content column and the footer. The top navigation is mounted next
/// to the router in `main.rs`.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="page-shell">
            {
                if props.show_background {
                    html! {
                        <>
                            <FloatingOrbs />
                            <GridPattern />
                        </>
                    }
                } else {
                    html! {}
                }
            }
            <main class="page-content">
                { for props.children.iter() }
            </main>
            {
                if props.show_footer {
                    html! { <Footer /> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
.page-shell {
    min-height: 100vh;
    position: relative;
    overflow-x: hidden;
    background: #0a0a0f;
    color: #ffffff;
}

.page-content {
    position: relative;
    z-index: 1;
}
                "#}
            </style>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="footer-logo">{ SITE.brand_name }</span>
                    <p>
                        {"Custom AI agents, chatbots and marketing automation for businesses \
                          that want to move faster."}
                    </p>
                </div>
                <div class="footer-column">
                    <h4>{"Explore"}</h4>
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Agents}>{"AI Agents"}</Link<Route>>
                    <Link<Route> to={Route::Marketing}>{"Marketing"}</Link<Route>>
                    <Link<Route> to={Route::Demos}>{"Live Demos"}</Link<Route>>
                </div>
                <div class="footer-column">
                    <h4>{"Contact"}</h4>
                    <a href={format!("mailto:{}", SITE.contact_email)}>{ SITE.contact_email }</a>
                    <a href={format!("tel:{}", SITE.contact_phone)}>{ SITE.contact_phone_display }</a>
                    <div class="footer-social">
                        {
                            for SITE.social_profiles.iter().map(|profile| html! {
                                <a href={*profile} target="_blank" rel="noopener noreferrer">
                                    { social_label(profile) }
                                </a>
                            })
                        }
                    </div>
                </div>
            </div>
            <div class="footer-legal">
                { format!("© {} {}. All rights reserved.", year, SITE.brand_name) }
            </div>
            <style>
                {r#"
.site-footer {
    position: relative;
    z-index: 1;
    margin-top: 4rem;
    border-top: 1px solid rgba(255, 255, 255, 0.08);
    background: rgba(10, 10, 15, 0.8);
    backdrop-filter: blur(10px);
    padding: 3rem 2rem 1.5rem;
}

.footer-inner {
    max-width: 1100px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 2fr 1fr 1fr;
    gap: 2.5rem;
}

.footer-brand .footer-logo {
    font-size: 1.25rem;
    font-weight: 700;
    background: linear-gradient(90deg, #38bdf8, #a78bfa);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.footer-brand p {
    margin-top: 0.75rem;
    color: #94a3b8;
    line-height: 1.6;
    max-width: 28rem;
}

.footer-column {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.footer-column h4 {
    color: #e2e8f0;
    margin-bottom: 0.5rem;
    font-size: 0.9rem;
    text-transform: uppercase;
    letter-spacing: 0.08em;
}

.footer-column a {
    color: #94a3b8;
    text-decoration: none;
    transition: color 0.2s ease;
}

.footer-column a:hover {
    color: #38bdf8;
}

.footer-social {
    display: flex;
    gap: 1rem;
    margin-top: 0.5rem;
}

.footer-legal {
    max-width: 1100px;
    margin: 2rem auto 0;
    padding-top: 1.5rem;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    color: #64748b;
    font-size: 0.85rem;
    text-align: center;
}

@media (max-width: 768px) {
    .footer-inner {
        grid-template-columns: 1fr;
    }
}
                "#}
            </style>
        </footer>
    }
}

fn social_label(url: &str) -> &'static str {
    if url.contains("twitter") {
        "Twitter"
    } else if url.contains("linkedin") {
        "LinkedIn"
    } else if url.contains("wa.me") {
        "WhatsApp"
    } else {
        "Social"
    }
}
