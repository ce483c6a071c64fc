use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{
    audience::AudienceSection,
    button::BUTTON_STYLES,
    contact::{Contact, Footer},
    deliverables::Deliverables,
    faq::Faq,
    hero::Hero,
    methodology::Methodology,
    nav::Nav,
    plans::Plans,
    results::Results,
    team::Team,
    trust_bar::TrustBar,
};
use crate::config;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: SiteContent,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = &props.content;

    use_title(content.title.clone());
    {
        let description = content.description.clone();
        use_effect_with_deps(
            move |description| {
                set_meta_description(description);
                || ()
            },
            description,
        );
    }

    let whatsapp_href: AttrValue = config::whatsapp_link(&content.messages.interest).into();
    let doubt_href: AttrValue = config::whatsapp_link(&content.messages.doubt).into();

    html! {
        <div class="landing-page">
            <div class="landing-ambience" aria-hidden="true">
                <div class="ambience-glow ambience-glow-top"></div>
                <div class="ambience-glow ambience-glow-bottom"></div>
            </div>

            <Nav whatsapp_href={whatsapp_href.clone()} />
            <Hero content={content.hero.clone()} whatsapp_href={whatsapp_href.clone()} />
            <TrustBar items={content.trust.clone()} />
            <AudienceSection audiences={content.audiences.clone()} />
            <Methodology steps={content.steps.clone()} />
            <Deliverables items={content.deliverables.clone()} cta_href={whatsapp_href.clone()} />
            <Results testimonials={content.testimonials.clone()} />
            <Team members={content.team.clone()} />
            <Plans plans={content.plans.clone()} messages={content.messages.clone()} />
            <Faq entries={content.faq.clone()} />
            <Contact {doubt_href} />
            <Footer />

            <style>{ BUTTON_STYLES }</style>
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: #020617;
                    color: #fff;
                    font-family: 'Inter', system-ui, -apple-system, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }
                ::selection {
                    background: #3b82f6;
                    color: #fff;
                }
                .landing-page {
                    position: relative;
                    min-height: 100vh;
                    overflow-x: clip;
                }
                .landing-ambience {
                    position: fixed;
                    inset: 0;
                    z-index: -1;
                    pointer-events: none;
                }
                .ambience-glow {
                    position: absolute;
                    border-radius: 9999px;
                    mix-blend-mode: screen;
                }
                .ambience-glow-top {
                    top: 0;
                    left: 25%;
                    width: 500px;
                    height: 500px;
                    background: rgba(37, 99, 235, 0.2);
                    filter: blur(100px);
                    animation: ambience-pulse 4s ease-in-out infinite;
                }
                .ambience-glow-bottom {
                    bottom: 0;
                    right: 25%;
                    width: 600px;
                    height: 600px;
                    background: rgba(79, 70, 229, 0.1);
                    filter: blur(120px);
                }
                @keyframes ambience-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                .glass {
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(12px);
                    -webkit-backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .glass-card {
                    background: linear-gradient(145deg, rgba(255, 255, 255, 0.06), rgba(255, 255, 255, 0.02));
                    backdrop-filter: blur(16px);
                    -webkit-backdrop-filter: blur(16px);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 1.5rem;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-eyebrow {
                    display: block;
                    color: #60a5fa;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.875rem;
                    margin-bottom: 1rem;
                }
                .section-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    margin: 0;
                }
                @media (prefers-reduced-motion: reduce) {
                    html { scroll-behavior: auto; }
                    .ambience-glow-top { animation: none; }
                }
                @media (min-width: 768px) {
                    .section-heading h2 { font-size: 3rem; }
                }
                @media (min-width: 1024px) {
                    .section-heading h2 { font-size: 3.75rem; }
                }
                "#}
            </style>
        </div>
    }
}

fn set_meta_description(description: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.query_selector("meta[name=\"description\"]") {
        Ok(Some(meta)) => {
            let _ = meta.set_attribute("content", description);
        }
        _ => debug!("no description meta tag to update"),
    }
}

/// Shown when the embedded copy cannot be parsed.
#[function_component(Fallback)]
pub fn fallback() -> Html {
    let href = config::whatsapp_link("Olá Sérgio, tenho interesse na sua consultoria");
    html! {
        <div class="landing-fallback">
            <h1>{"Sergio Daniel"}</h1>
            <p>{"Consultoria Esportiva & Personal Trainer"}</p>
            <a {href} target="_blank" rel="noopener noreferrer">{"Chamar no WhatsApp"}</a>
        </div>
    }
}
