//! Decorative background layers and small animated ornaments: drifting
//! gradient orbs, the grid backdrop, particle specks, gradient text and a
//! counting stat. All motion is plain CSS keyframes; the orbs also watch
//! the reduced-motion media query and freeze when it matches.

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::MediaQueryListEvent;
use yew::prelude::*;

#[function_component(FloatingOrbs)]
pub fn floating_orbs() -> Html {
    let reduced_motion = use_state(|| false);

    {
        let reduced_motion = reduced_motion.clone();
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;
                if let Some(window) = web_sys::window() {
                    if let Ok(Some(query)) = window.match_media("(prefers-reduced-motion: reduce)")
                    {
                        reduced_motion.set(query.matches());
                        let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new({
                            let reduced_motion = reduced_motion.clone();
                            move |event: MediaQueryListEvent| {
                                reduced_motion.set(event.matches());
                            }
                        });
                        let _ = query.add_event_listener_with_callback(
                            "change",
                            listener.as_ref().unchecked_ref(),
                        );
                        cleanup = Some(Box::new(move || {
                            let _ = query.remove_event_listener_with_callback(
                                "change",
                                listener.as_ref().unchecked_ref(),
                            );
                        }));
                    }
                }
                move || {
                    if let Some(cleanup) = cleanup {
                        cleanup();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class={classes!("floating-orbs", (*reduced_motion).then(|| "still"))}>
            <div class="orb orb-primary"></div>
            <div class="orb orb-secondary"></div>
            <div class="orb orb-tertiary"></div>
            <style>
                {r#"
.floating-orbs {
    position: fixed;
    inset: 0;
    overflow: hidden;
    pointer-events: none;
    z-index: 0;
}

.orb {
    position: absolute;
    border-radius: 50%;
}

.orb-primary {
    top: 10%;
    left: 10%;
    width: 600px;
    height: 600px;
    background: radial-gradient(circle, rgba(14, 165, 233, 0.15) 0%, transparent 70%);
    filter: blur(60px);
    animation: orb-drift-a 20s ease-in-out infinite;
}

.orb-secondary {
    top: 50%;
    right: 10%;
    width: 500px;
    height: 500px;
    background: radial-gradient(circle, rgba(139, 92, 246, 0.12) 0%, transparent 70%);
    filter: blur(60px);
    animation: orb-drift-b 25s ease-in-out infinite;
}

.orb-tertiary {
    bottom: 10%;
    left: 30%;
    width: 400px;
    height: 400px;
    background: radial-gradient(circle, rgba(16, 185, 129, 0.1) 0%, transparent 70%);
    filter: blur(50px);
    animation: orb-drift-c 18s ease-in-out infinite;
}

@keyframes orb-drift-a {
    0% { transform: translate(0, 0); }
    33% { transform: translate(100px, -100px); }
    66% { transform: translate(-50px, 50px); }
    100% { transform: translate(0, 0); }
}

@keyframes orb-drift-b {
    0% { transform: translate(0, 0); }
    33% { transform: translate(-80px, 80px); }
    66% { transform: translate(40px, -60px); }
    100% { transform: translate(0, 0); }
}

@keyframes orb-drift-c {
    0% { transform: translate(0, 0); }
    33% { transform: translate(60px, -40px); }
    66% { transform: translate(-30px, 80px); }
    100% { transform: translate(0, 0); }
}

.floating-orbs.still .orb {
    animation: none;
}

@media (prefers-reduced-motion: reduce) {
    .floating-orbs .orb {
        animation: none;
    }
}
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GridPatternProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(GridPattern)]
pub fn grid_pattern(props: &GridPatternProps) -> Html {
    html! {
        <div class={classes!("grid-pattern", props.class.clone())}>
            <div class="grid-lines"></div>
            <div class="grid-fade"></div>
            <style>
                {r#"
.grid-pattern {
    position: absolute;
    inset: 0;
    overflow: hidden;
    pointer-events: none;
}

.grid-lines {
    position: absolute;
    inset: 0;
    opacity: 0.03;
    background-image:
        linear-gradient(rgba(255, 255, 255, 0.1) 1px, transparent 1px),
        linear-gradient(90deg, rgba(255, 255, 255, 0.1) 1px, transparent 1px);
    background-size: 60px 60px;
}

.grid-fade {
    position: absolute;
    inset: 0;
    background: radial-gradient(circle at 50% 50%, transparent 0%, #020617 70%);
}
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticlesProps {
    #[prop_or(30)]
    pub count: u32,
}

#[function_component(Particles)]
pub fn particles(props: &ParticlesProps) -> Html {
    let (width, height) = viewport_size();
    let specks = (0..props.count)
        .map(|index| {
            let x = Math::random() * width;
            let y = Math::random() * height;
            let scale = Math::random() * 0.5 + 0.5;
            let duration = Math::random() * 3.0 + 2.0;
            let delay = Math::random() * 2.0;
            html! {
                <span
                    key={index.to_string()}
                    class="particle"
                    style={format!(
                        "left: {x:.0}px; top: {y:.0}px; transform: scale({scale:.2}); \
                         animation-duration: {duration:.2}s; animation-delay: {delay:.2}s;"
                    )}
                ></span>
            }
        })
        .collect::<Html>();

    html! {
        <div class="particles">
            { specks }
            <style>
                {r#"
.particles {
    position: fixed;
    inset: 0;
    overflow: hidden;
    pointer-events: none;
    z-index: 0;
}

.particle {
    position: absolute;
    width: 4px;
    height: 4px;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.2);
    animation-name: particle-float;
    animation-timing-function: ease-in-out;
    animation-iteration-count: infinite;
}

@keyframes particle-float {
    0% { margin-top: 0; opacity: 0.2; }
    50% { margin-top: -20px; opacity: 0.5; }
    100% { margin-top: 0; opacity: 0.2; }
}

@media (prefers-reduced-motion: reduce) {
    .particle {
        animation: none;
    }
}
                "#}
            </style>
        </div>
    }
}

fn viewport_size() -> (f64, f64) {
    web_sys::window()
        .and_then(|window| {
            let width = window.inner_width().ok()?.as_f64()?;
            let height = window.inner_height().ok()?.as_f64()?;
            Some((width, height))
        })
        .unwrap_or((1000.0, 1000.0))
}

#[derive(Properties, PartialEq)]
pub struct GradientTextProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or("linear-gradient(90deg, #ffffff, rgba(255, 255, 255, 0.6))".to_string())]
    pub gradient: String,
    pub children: Children,
}

#[function_component(GradientText)]
pub fn gradient_text(props: &GradientTextProps) -> Html {
    html! {
        <span
            class={props.class.clone()}
            style={format!(
                "background: {}; -webkit-background-clip: text; background-clip: text; \
                 -webkit-text-fill-color: transparent; color: transparent;",
                props.gradient
            )}
        >
            { for props.children.iter() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: u32,
    #[prop_or_default]
    pub suffix: String,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let shown = use_state(|| 0u32);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |value: &u32| {
                let value = *value;
                shown.set(0);
                let step = (value / 40).max(1);
                let mut current = 0u32;
                let interval = Interval::new(30, move || {
                    if current >= value {
                        return;
                    }
                    current = (current + step).min(value);
                    shown.set(current);
                });
                move || drop(interval)
            },
            props.value,
        );
    }

    html! {
        <span class={props.class.clone()}>{ *shown }{ &props.suffix }</span>
    }
}
