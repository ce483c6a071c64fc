use chrono::{Datelike, Local};
use log::warn;
use yew::prelude::*;

use crate::components::button::CtaButton;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub doubt_href: AttrValue,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let open_whatsapp = {
        let href = props.doubt_href.clone();
        Callback::from(move |_: MouseEvent| {
            let opened = web_sys::window().and_then(|w| w.open_with_url_and_target(&href, "_blank").ok().flatten());
            if opened.is_none() {
                warn!("WhatsApp window was blocked");
            }
        })
    };

    html! {
        <section class="contact">
            <div class="contact-card glass-card">
                <div class="contact-glow"></div>
                <div class="contact-body">
                    <h2>{"Ficou alguma dúvida?"}</h2>
                    <p>{"Entre em contato conosco"}</p>
                    <CtaButton class="contact-button" onclick={open_whatsapp}>{"Entrar em contato"}</CtaButton>
                    <a
                        class="contact-instagram"
                        href={config::INSTAGRAM_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Instagram"
                    >
                        {"Instagram"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .contact {
                    padding: 5rem 1rem;
                }
                .contact-card {
                    position: relative;
                    max-width: 64rem;
                    margin: 0 auto;
                    border-radius: 3rem;
                    padding: 3rem;
                    overflow: hidden;
                }
                .contact-glow {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(37, 99, 235, 0.3);
                    border-radius: 9999px;
                    filter: blur(100px);
                    transform: translate(50%, -50%);
                }
                .contact-body {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .contact-body h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    margin: 0 0 1rem;
                }
                .contact-body p {
                    color: #d1d5db;
                    font-size: 1.125rem;
                    margin: 0 0 2rem;
                }
                .contact-button.cta-button {
                    padding-left: 2.5rem;
                    padding-right: 2.5rem;
                }
                .contact-instagram {
                    margin-top: 1.5rem;
                    color: #60a5fa;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .contact-instagram:hover {
                    color: #93c5fd;
                }
                @media (min-width: 768px) {
                    .contact-body h2 { font-size: 3rem; }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <p>{ format!("© {} Sergio Daniel Consultoria. Todos os direitos reservados.", year) }</p>
            <style>
                {r#"
                .site-footer {
                    padding: 2rem 0;
                    text-align: center;
                    color: #4b5563;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </footer>
    }
}
