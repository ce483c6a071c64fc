use yew::prelude::*;

use crate::components::button::CtaButton;
use crate::config;

const LINKS: [(&str, &str); 3] = [
    ("#metodo", "Como Funciona"),
    ("#resultados", "Resultados"),
    ("#planos", "Planos"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub whatsapp_href: AttrValue,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <>
            <nav class="top-nav">
                <div class="top-nav-inner glass">
                    <a href="#" class="top-nav-logo">
                        <img src={config::asset_url("/logo.svg")} alt="Sergio Daniel Logo" />
                    </a>
                    <div class="top-nav-links">
                        { for LINKS.iter().map(|(href, label)| html! {
                            <a href={*href}>{ *label }</a>
                        }) }
                        <CtaButton class="top-nav-cta" href={props.whatsapp_href.clone()}>
                            {"Começar Agora"}
                        </CtaButton>
                    </div>
                    <button
                        class="burger-menu"
                        aria-label="Menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </nav>
            if *menu_open {
                <div class="mobile-menu glass">
                    { for LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} onclick={close_menu.clone()}>{ *label }</a>
                    }) }
                    <CtaButton class="mobile-menu-cta" href={props.whatsapp_href.clone()}>
                        {"Chamar no WhatsApp"}
                    </CtaButton>
                </div>
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem;
                }
                .top-nav-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    border-radius: 9999px;
                    padding: 0.75rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .top-nav-logo img {
                    height: 3rem;
                    width: auto;
                    object-fit: contain;
                }
                .top-nav-links {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .top-nav-links a:not(.cta-button) {
                    color: #d1d5db;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .top-nav-links a:not(.cta-button):hover {
                    color: #fff;
                }
                .top-nav-cta.cta-button {
                    padding: 0.5rem 1.5rem;
                    font-size: 0.875rem;
                }
                .burger-menu {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    position: fixed;
                    left: 1rem;
                    right: 1rem;
                    top: 6rem;
                    z-index: 40;
                    border-radius: 1.5rem;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    animation: mobile-menu-in 0.2s ease-out;
                }
                .mobile-menu a:not(.cta-button) {
                    color: #fff;
                    text-decoration: none;
                    font-size: 1.125rem;
                    font-weight: 500;
                    padding: 0.5rem;
                }
                .mobile-menu-cta.cta-button {
                    width: 100%;
                }
                @keyframes mobile-menu-in {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (min-width: 768px) {
                    .top-nav-links { display: flex; }
                    .burger-menu, .mobile-menu { display: none; }
                }
                "#}
            </style>
        </>
    }
}
