use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::button::{ButtonVariant, CtaButton};
use crate::components::marquee::ScrollMarquee;
use crate::config;
use crate::content::Hero as HeroContent;
use crate::dom::{self, FrameLoop};
use crate::motion::Parallax;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: HeroContent,
    pub whatsapp_href: AttrValue,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero_ref = use_node_ref();
    // shared between the frame loop and the pointer handlers
    let parallax = use_mut_ref(Parallax::new);

    {
        let hero_ref = hero_ref.clone();
        let parallax = parallax.clone();
        use_effect_with_deps(
            move |_| {
                let frames = dom::motion_preference()
                    .allows_continuous_motion()
                    .then(|| parallax_loop(hero_ref, parallax))
                    .flatten();
                move || drop(frames)
            },
            (),
        );
    }

    let onmousemove = {
        let hero_ref = hero_ref.clone();
        let parallax = parallax.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(hero) = hero_ref.cast::<HtmlElement>() {
                let rect = hero.get_bounding_client_rect();
                parallax.borrow_mut().point_at(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                );
            }
        })
    };
    let onmouseleave = {
        let parallax = parallax.clone();
        Callback::from(move |_: MouseEvent| parallax.borrow_mut().release())
    };

    let content = &props.content;

    html! {
        <section class="hero" ref={hero_ref} {onmousemove} {onmouseleave}>
            <div class="hero-marquees" aria-hidden="true">
                <div class="hero-marquees-band">
                    <ScrollMarquee base_velocity={10.0} logo_count={6} scroll_influence={false} />
                    <div class="hero-marquees-gap"></div>
                    <ScrollMarquee base_velocity={-10.0} logo_count={6} scroll_influence={false} />
                </div>
            </div>

            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="hero-badge glass">{ &content.badge }</div>
                    <h1>
                        { for content.headline.iter().enumerate().map(|(i, line)| html! {
                            <>
                                if i > 0 { <br /> }
                                { line }
                            </>
                        }) }
                    </h1>
                    <p class="hero-tagline">{ &content.tagline }</p>
                    <div class="hero-students">
                        <div class="hero-avatars">
                            { for content.students.iter().enumerate().map(|(i, src)| html! {
                                <div class="hero-avatar" key={src.clone()}>
                                    <img src={config::asset_url(src)} alt={format!("Aluno {}", i + 1)} />
                                </div>
                            }) }
                        </div>
                        <p>{ &content.students_caption }</p>
                    </div>
                </div>

                <div class="hero-portrait">
                    <div class="hero-ring hero-ring-outer"></div>
                    <div class="hero-ring hero-ring-inner"></div>
                    <div class="hero-portrait-frame">
                        <img src={config::asset_url(&content.portrait)} alt="Sergio Daniel" />
                    </div>
                </div>

                <div class="hero-cta">
                    <div class="hero-cta-heading">
                        <h3>{ &content.cta_heading }</h3>
                        <p>{ &content.cta_note }</p>
                    </div>
                    <CtaButton href={props.whatsapp_href.clone()}>
                        {"Chamar no WhatsApp"}
                        <span class="hero-cta-arrow">{"→"}</span>
                    </CtaButton>
                    <CtaButton variant={ButtonVariant::Outline} href="#metodo">{"Saiba Mais"}</CtaButton>
                </div>
            </div>
            <div class="hero-bottom-fade"></div>
            <style>
                {r#"
                .hero {
                    --parallax-x: 0;
                    --parallax-y: 0;
                    position: relative;
                    min-height: 100vh;
                    padding: 7rem 0 3rem;
                    display: flex;
                    align-items: center;
                }
                .hero-marquees {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                    z-index: 0;
                }
                .hero-marquees-band {
                    position: absolute;
                    top: 28%;
                    left: 50%;
                    width: 140%;
                    opacity: 0.3;
                    mix-blend-mode: overlay;
                    transform: translate(-50%, -50%) rotate(-12deg);
                }
                .hero-marquees-gap {
                    height: 2rem;
                }
                .hero-grid {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    align-items: center;
                }
                .hero-copy {
                    order: 2;
                    text-align: center;
                    animation: hero-rise 0.8s ease-out both;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    color: #93c5fd;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    font-size: 0.625rem;
                    text-transform: uppercase;
                    margin-bottom: 1rem;
                }
                .hero h1 {
                    font-size: 3rem;
                    font-weight: 700;
                    line-height: 0.9;
                    text-transform: uppercase;
                    margin: 0 0 1rem;
                }
                .hero-tagline {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    border-left: 2px solid #3b82f6;
                    padding-left: 1rem;
                    max-width: 20rem;
                    margin: 0 auto;
                    text-align: left;
                }
                .hero-students {
                    margin-top: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .hero-avatars {
                    display: flex;
                }
                .hero-avatar {
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 9999px;
                    overflow: hidden;
                    border: 2px solid #0f172a;
                    background: #334155;
                    margin-left: -0.5rem;
                }
                .hero-avatar img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-portrait {
                    order: 1;
                    position: relative;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    animation: hero-zoom 1s ease-out both;
                }
                .hero-ring {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    border-radius: 9999px;
                }
                .hero-ring-outer {
                    width: 300px;
                    height: 300px;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    opacity: 0.5;
                    transform: translate(-50%, -50%) translate3d(calc(var(--parallax-x) * 12px), calc(var(--parallax-y) * 10px), 0);
                }
                .hero-ring-inner {
                    width: 250px;
                    height: 250px;
                    border: 1px solid rgba(59, 130, 246, 0.1);
                    opacity: 0.6;
                    transform: translate(-50%, -50%) translate3d(calc(var(--parallax-x) * 18px), calc(var(--parallax-y) * 14px), 0);
                }
                .hero-portrait-frame {
                    position: relative;
                    z-index: 10;
                    mask-image: linear-gradient(to bottom, black 85%, transparent 100%);
                    -webkit-mask-image: linear-gradient(to bottom, black 85%, transparent 100%);
                    transform: translate3d(calc(var(--parallax-x) * 16px), calc(var(--parallax-y) * 20px), 0);
                }
                .hero-portrait-frame img {
                    height: 50vh;
                    width: auto;
                    max-width: none;
                    object-fit: contain;
                    filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.5));
                }
                .hero-cta {
                    order: 3;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                    animation: hero-rise 0.8s ease-out 0.2s both;
                }
                .hero-cta .cta-button {
                    width: 100%;
                }
                .hero-cta-heading {
                    display: none;
                    text-align: right;
                    margin-bottom: 1rem;
                }
                .hero-cta-heading h3 {
                    margin: 0;
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-transform: uppercase;
                }
                .hero-cta-heading p {
                    margin: 0;
                    color: #9ca3af;
                    font-size: 0.75rem;
                }
                .hero-cta-arrow {
                    margin-left: 0.5rem;
                    transition: transform 0.2s ease;
                }
                .cta-button:hover .hero-cta-arrow {
                    transform: translateX(4px);
                }
                .hero-bottom-fade {
                    pointer-events: none;
                    position: fixed;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    height: 8rem;
                    z-index: 40;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.85), rgba(0, 0, 0, 0.4), transparent);
                }
                @keyframes hero-rise {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes hero-zoom {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .hero-copy, .hero-portrait, .hero-cta { animation: none; }
                }
                @media (min-width: 768px) {
                    .hero { padding-top: 8rem; }
                    .hero-grid {
                        grid-template-columns: repeat(3, 1fr);
                        padding: 0 2rem;
                    }
                    .hero-copy { order: 1; text-align: left; }
                    .hero-tagline { margin: 0; }
                    .hero-students { justify-content: flex-start; }
                    .hero h1 { font-size: 3.75rem; }
                    .hero-portrait { order: 2; }
                    .hero-ring-outer { width: 500px; height: 500px; }
                    .hero-ring-inner { width: 400px; height: 400px; }
                    .hero-portrait-frame img { height: 85vh; }
                    .hero-cta { order: 3; align-items: flex-end; }
                    .hero-cta .cta-button { width: auto; }
                    .hero-cta-heading { display: block; }
                    .hero-marquees-band { top: 30%; }
                    .hero-bottom-fade { display: none; }
                }
                "#}
            </style>
        </section>
    }
}

/// Eases the parallax toward the pointer every frame and publishes it as
/// `--parallax-x` / `--parallax-y` on the hero.
fn parallax_loop(hero_ref: NodeRef, parallax: Rc<RefCell<Parallax>>) -> Option<FrameLoop> {
    FrameLoop::new(move |_| {
        let (x, y) = parallax.borrow_mut().step();
        if let Some(hero) = hero_ref.cast::<HtmlElement>() {
            dom::set_style(&hero, "--parallax-x", &format!("{:.4}", x));
            dom::set_style(&hero, "--parallax-y", &format!("{:.4}", y));
        }
        true
    })
}
