use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod seo {
    pub mod head;
    pub mod meta;
}
mod components {
    pub mod button;
    pub mod floating;
    pub mod glass_card;
    pub mod layout;
}
mod utils {
    pub mod calendly;
}
mod pages {
    pub mod agents;
    pub mod contact;
    pub mod demos;
    pub mod landing;
    pub mod marketing;
    pub mod not_found;
    pub mod services;
}

use pages::{
    agents::Agents,
    contact::Contact,
    demos::{DemoWrapper, Demos},
    landing::Landing,
    marketing::Marketing,
    not_found::NotFound,
    services::Services,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/agents")]
    Agents,
    #[at("/marketing")]
    Marketing,
    #[at("/demos")]
    Demos,
    #[at("/demos/:industry")]
    Demo { industry: String },
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Agents => {
            info!("Rendering Agents page");
            html! { <Agents /> }
        }
        Route::Marketing => {
            info!("Rendering Marketing page");
            html! { <Marketing /> }
        }
        Route::Demos => {
            info!("Rendering Demos page");
            html! { <Demos /> }
        }
        Route::Demo { industry } => {
            info!("Rendering Demo page: {}", industry);
            html! { <DemoWrapper industry={industry} /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 40);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"highshift"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Agents} classes="nav-link">
                            {"Agents"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Marketing} classes="nav-link">
                            {"Marketing"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Demos} classes="nav-link">
                            {"Demos"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-contact-button">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    padding: 1rem 2rem;
    transition: background 0.3s ease, box-shadow 0.3s ease;
}

.top-nav.scrolled {
    background: rgba(10, 10, 15, 0.85);
    backdrop-filter: blur(12px);
    box-shadow: 0 4px 24px rgba(0, 0, 0, 0.3);
}

.nav-content {
    max-width: 1100px;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    font-size: 1.25rem;
    font-weight: 700;
    text-decoration: none;
    background: linear-gradient(90deg, #38bdf8, #a78bfa);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.nav-right {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}

.nav-link {
    color: #cbd5e1;
    text-decoration: none;
    transition: color 0.2s ease;
}

.nav-link:hover {
    color: #38bdf8;
}

.nav-contact-button {
    color: #38bdf8;
    text-decoration: none;
    font-weight: 600;
    border: 1px solid rgba(56, 189, 248, 0.4);
    border-radius: 10px;
    padding: 0.5rem 1rem;
    transition: background 0.2s ease;
}

.nav-contact-button:hover {
    background: rgba(14, 165, 233, 0.1);
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 0.5rem;
}

.burger-menu span {
    width: 24px;
    height: 2px;
    background: #e2e8f0;
    border-radius: 1px;
}

@media (max-width: 768px) {
    .burger-menu {
        display: flex;
    }

    .nav-right {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        background: rgba(10, 10, 15, 0.97);
        padding: 1.5rem 2rem;
        gap: 1rem;
    }

    .nav-right.mobile-menu-open {
        display: flex;
    }
}
                "#}
            </style>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
