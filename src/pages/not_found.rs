use yew::prelude::*;
use yew_router::components::Link;

use crate::components::layout::Layout;
use crate::seo::head::Seo;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Layout show_footer={false}>
            <Seo
                title={"Page Not Found".to_string()}
                description={"The page you were looking for doesn't exist.".to_string()}
                noindex={true}
            />
            <section class="not-found">
                <h1>{"404"}</h1>
                <p>{"This page drifted off. Let's get you back on track."}</p>
                <Link<Route> to={Route::Home} classes="not-found-home">
                    {"Back to home"}
                </Link<Route>>
            </section>
            <style>
                {r#"
.not-found {
    min-height: 70vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 2rem;
}

.not-found h1 {
    font-size: 6rem;
    margin-bottom: 1rem;
    background: linear-gradient(90deg, #38bdf8, #a78bfa);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.not-found p {
    color: #94a3b8;
    margin-bottom: 2rem;
}

.not-found-home {
    color: #38bdf8;
    text-decoration: none;
    font-weight: 600;
    border: 1px solid rgba(56, 189, 248, 0.4);
    border-radius: 12px;
    padding: 0.75rem 1.5rem;
    transition: background 0.2s ease;
}

.not-found-home:hover {
    background: rgba(14, 165, 233, 0.1);
}
                "#}
            </style>
        </Layout>
    }
}
