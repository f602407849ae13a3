use stylist::{css, yew::styled_component};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub icon: Option<Html>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[styled_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let base = css!(
        r#"
        position: relative;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        font-weight: 600;
        font-family: inherit;
        border: none;
        border-radius: 12px;
        cursor: pointer;
        overflow: hidden;
        transition: background 0.3s ease, box-shadow 0.3s ease, transform 0.15s ease;

        &:active {
            transform: scale(0.98);
        }

        &.sm {
            padding: 0.5rem 1rem;
            font-size: 0.875rem;
        }
        &.md {
            padding: 0.75rem 1.5rem;
            font-size: 1rem;
        }
        &.lg {
            padding: 1rem 2rem;
            font-size: 1.125rem;
        }

        &.primary {
            background: linear-gradient(90deg, #0ea5e9, #2563eb);
            color: #fff;
            box-shadow: 0 10px 25px rgba(14, 165, 233, 0.25);
        }
        &.primary:hover {
            background: linear-gradient(90deg, #38bdf8, #3b82f6);
            box-shadow: 0 10px 25px rgba(14, 165, 233, 0.4);
        }
        &.secondary {
            background: rgba(255, 255, 255, 0.1);
            color: #fff;
            backdrop-filter: blur(4px);
            border: 1px solid rgba(255, 255, 255, 0.1);
        }
        &.secondary:hover {
            background: rgba(255, 255, 255, 0.2);
        }
        &.ghost {
            background: transparent;
            color: #fff;
        }
        &.ghost:hover {
            background: rgba(255, 255, 255, 0.1);
        }
        &.outline {
            background: transparent;
            border: 2px solid #0ea5e9;
            color: #38bdf8;
        }
        &.outline:hover {
            background: rgba(14, 165, 233, 0.1);
        }

        &:disabled {
            opacity: 0.5;
            cursor: not-allowed;
        }

        .button-spinner {
            width: 1.25rem;
            height: 1.25rem;
            animation: button-spin 0.8s linear infinite;
        }
    "#
    );

    html! {
        <button
            class={classes!(base, props.variant.class(), props.size.class(), props.class.clone())}
            disabled={props.disabled || props.loading}
            onclick={props.onclick.clone()}
        >
            {
                if props.loading {
                    html! {
                        <svg class="button-spinner" viewBox="0 0 24 24" fill="none">
                            <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" opacity="0.25" />
                            <path fill="currentColor" opacity="0.75" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z" />
                        </svg>
                    }
                } else {
                    html! {
                        <>
                            {
                                if let Some(icon) = &props.icon {
                                    icon.clone()
                                } else {
                                    html! {}
                                }
                            }
                            { for props.children.iter() }
                        </>
                    }
                }
            }
        </button>
    }
}
