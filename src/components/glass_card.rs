use stylist::{css, yew::styled_component};
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

const ROTATION_RANGE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlowColor {
    #[default]
    Sky,
    Purple,
    Emerald,
    Rose,
    Amber,
}

impl GlowColor {
    fn shadow(self) -> &'static str {
        match self {
            GlowColor::Sky => "rgba(14, 165, 233, 0.2)",
            GlowColor::Purple => "rgba(139, 92, 246, 0.2)",
            GlowColor::Emerald => "rgba(16, 185, 129, 0.2)",
            GlowColor::Rose => "rgba(244, 63, 94, 0.2)",
            GlowColor::Amber => "rgba(245, 158, 11, 0.2)",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub href: Option<String>,
    #[prop_or(true)]
    pub tilt: bool,
    #[prop_or(true)]
    pub glow: bool,
    #[prop_or_default]
    pub glow_color: GlowColor,
    pub children: Children,
}

/// Glass-blur card that tilts toward the pointer and glows on hover.
/// Renders as an external link, a button, or a plain container depending
/// on which of `href`/`onclick` is set.
#[styled_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    let node = use_node_ref();
    let rotation = use_state(|| (0.0f64, 0.0f64));
    let pointer = use_state(|| (0.0f64, 0.0f64));
    let hovered = use_state(|| false);

    let onmousemove = {
        let node = node.clone();
        let rotation = rotation.clone();
        let pointer = pointer.clone();
        let tilt = props.tilt;
        Callback::from(move |event: MouseEvent| {
            if !tilt {
                return;
            }
            if let Some(element) = node.cast::<HtmlElement>() {
                let rect = element.get_bounding_client_rect();
                if rect.width() <= 0.0 || rect.height() <= 0.0 {
                    return;
                }
                let x = event.client_x() as f64 - rect.left();
                let y = event.client_y() as f64 - rect.top();
                let rotate_x = -((y / rect.height()) * ROTATION_RANGE - ROTATION_RANGE / 2.0);
                let rotate_y = (x / rect.width()) * ROTATION_RANGE - ROTATION_RANGE / 2.0;
                rotation.set((rotate_x, rotate_y));
                pointer.set((x, y));
            }
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let rotation = rotation.clone();
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| {
            rotation.set((0.0, 0.0));
            hovered.set(false);
        })
    };

    let card = css!(
        r#"
        position: relative;
        border-radius: 16px;
        background: linear-gradient(135deg, rgba(255, 255, 255, 0.08), rgba(255, 255, 255, 0.02));
        backdrop-filter: blur(20px);
        border: 1px solid rgba(255, 255, 255, 0.1);
        transition: border-color 0.5s ease, box-shadow 0.5s ease;

        &:hover {
            border-color: rgba(255, 255, 255, 0.2);
        }

        .card-glow {
            position: absolute;
            inset: 0;
            border-radius: 16px;
            opacity: 0;
            transition: opacity 0.5s ease;
            pointer-events: none;
        }
        &:hover .card-glow {
            opacity: 1;
        }

        .card-content {
            position: relative;
            z-index: 1;
        }
    "#
    );

    let (rotate_x, rotate_y) = *rotation;
    let (pointer_x, pointer_y) = *pointer;

    let mut style = String::new();
    if props.tilt {
        style.push_str(&format!(
            "transform: perspective(1000px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg);"
        ));
    }
    if props.glow && *hovered {
        style.push_str(&format!(
            " box-shadow: 0 25px 50px {};",
            props.glow_color.shadow()
        ));
    }

    let glow_style = format!(
        "background: radial-gradient(circle at {pointer_x:.0}px {pointer_y:.0}px, \
         rgba(56, 189, 248, 0.15) 0%, transparent 50%);"
    );

    let content = html! {
        <div
            ref={node.clone()}
            class={classes!(card, props.class.clone())}
            style={style}
            onmousemove={onmousemove}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            {
                if props.glow {
                    html! { <div class="card-glow" style={glow_style}></div> }
                } else {
                    html! {}
                }
            }
            <div class="card-content">{ for props.children.iter() }</div>
        </div>
    };

    if let Some(href) = &props.href {
        html! {
            <a
                href={href.clone()}
                target="_blank"
                rel="noopener noreferrer"
                style="display: block; text-decoration: none; color: inherit;"
            >
                { content }
            </a>
        }
    } else if let Some(onclick) = &props.onclick {
        html! {
            <button
                onclick={onclick.clone()}
                style="display: block; width: 100%; text-align: left; background: none; border: none; padding: 0; cursor: pointer; color: inherit; font: inherit;"
            >
                { content }
            </button>
        }
    } else {
        content
    }
}
