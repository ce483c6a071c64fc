use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "cta-button primary",
            ButtonVariant::Outline => "cta-button outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
    /// Renders a link instead of a button. External links open in a new tab.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let class = classes!(props.variant.class(), props.class.clone());

    match &props.href {
        Some(href) if href.starts_with('#') => html! {
            <a {class} href={href.clone()}>{ for props.children.iter() }</a>
        },
        Some(href) => html! {
            <a {class} href={href.clone()} target="_blank" rel="noopener noreferrer">
                { for props.children.iter() }
            </a>
        },
        None => html! {
            <button {class} type="button" onclick={props.onclick.clone()}>
                { for props.children.iter() }
            </button>
        },
    }
}

/// Shared styles for [`CtaButton`], rendered once by the landing page.
pub const BUTTON_STYLES: &str = r#"
.cta-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 1rem 2rem;
    border-radius: 9999px;
    font-weight: 700;
    font-size: 1.125rem;
    text-decoration: none;
    cursor: pointer;
    transition: transform 0.3s ease, background 0.3s ease, box-shadow 0.3s ease;
    box-shadow: 0 10px 25px -10px rgba(0, 0, 0, 0.5);
}
.cta-button:hover {
    transform: translateY(-2px) scale(1.05);
}
.cta-button:active {
    transform: scale(0.97);
}
.cta-button.primary {
    background: #2563eb;
    color: #fff;
    border: 1px solid transparent;
}
.cta-button.primary:hover {
    background: #3b82f6;
    box-shadow: 0 10px 30px -8px rgba(59, 130, 246, 0.45);
}
.cta-button.outline {
    background: transparent;
    color: #fff;
    border: 1px solid rgba(255, 255, 255, 0.3);
    backdrop-filter: blur(4px);
}
.cta-button.outline:hover {
    background: rgba(255, 255, 255, 0.1);
}
"#;
