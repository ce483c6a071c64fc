use web_sys::Element;
use yew::prelude::*;

use crate::content::Step;
use crate::dom;
use crate::motion::scenes::methodology::{self as scene, card, LINE, TITLE};
use crate::motion::TargetRegistry;
use crate::scene::{SceneConfig, ScrollScene};

#[derive(Properties, PartialEq)]
pub struct MethodologyProps {
    pub steps: Vec<Step>,
}

/// "Como Funciona": pinned for one viewport per step while the cards
/// hand over to each other and the progress line fills.
#[function_component(Methodology)]
pub fn methodology(props: &MethodologyProps) -> Html {
    let steps = props.steps.len();

    let section_ref = use_node_ref();
    let pin_ref = use_node_ref();
    let title_ref = use_node_ref();
    let line_ref = use_node_ref();
    let card_refs = use_memo(|n| (0..*n).map(|_| NodeRef::default()).collect::<Vec<_>>(), steps);
    let line_inset = use_state_eq(|| scene::MIN_LINE_INSET);

    {
        let section_ref = section_ref.clone();
        let pin_ref = pin_ref.clone();
        let title_ref = title_ref.clone();
        let line_ref = line_ref.clone();
        let card_refs = card_refs.clone();
        let set_inset = line_inset.setter();
        use_effect_with_deps(
            move |steps| {
                let steps = *steps;
                let mut targets: TargetRegistry<NodeRef> = card_refs
                    .iter()
                    .enumerate()
                    .map(|(i, card_ref)| (card(i), card_ref.clone()))
                    .collect();
                targets.register(TITLE, title_ref);
                targets.register(LINE, line_ref);

                let scene = ScrollScene::mount(SceneConfig {
                    name: "methodology",
                    options: scene::options(steps),
                    trigger: section_ref,
                    pin: pin_ref,
                    targets,
                    build: Box::new(move |layout, targets| {
                        let card_height = targets
                            .get(card(0))
                            .and_then(|r| r.cast::<Element>())
                            .and_then(|el| dom::element_height(&el));
                        if let Some(height) = card_height {
                            set_inset.set(scene::line_inset(layout.viewport_height, height));
                        }
                        let offset = card_height.map_or(scene::DEFAULT_CARD_OFFSET, scene::card_offset);
                        scene::timeline(steps, offset)
                    }),
                });

                move || drop(scene)
            },
            steps,
        );
    }

    let section_style = format!("height: {:.0}vh", scene::section_height_vh(steps));
    let rail_style = format!("bottom: {:.0}px", *line_inset);

    html! {
        <section id="metodo" class="methodology" ref={section_ref} style={section_style}>
            <div class="methodology-pin" ref={pin_ref}>
                <div class="methodology-title" ref={title_ref}>
                    <h2>{"Como Funciona"}</h2>
                    <p>{"Um processo simples e eficiente para garantir seus resultados."}</p>
                </div>

                <div class="methodology-rail" style={rail_style}>
                    <div class="methodology-line" ref={line_ref}></div>
                </div>

                <div class="methodology-cards">
                    { for props.steps.iter().zip(card_refs.iter()).map(|(step, card_ref)| html! {
                        <article class="methodology-card" ref={card_ref.clone()}>
                            <div class="methodology-card-head">
                                <span class="methodology-icon">{ &step.icon }</span>
                                <span class="methodology-step">{ &step.step }</span>
                            </div>
                            <h3>{ &step.title }</h3>
                            <p>{ &step.description }</p>
                        </article>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .methodology {
                    position: relative;
                    background: #f8fafc;
                    color: #0f172a;
                }
                .methodology-pin {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    overflow: hidden;
                }
                .methodology-title {
                    position: absolute;
                    top: 10vh;
                    left: 0;
                    right: 0;
                    text-align: center;
                    padding: 0 1.5rem;
                }
                .methodology-title h2 {
                    font-size: 2.5rem;
                    font-weight: 800;
                    margin: 0 0 1rem;
                }
                .methodology-title p {
                    color: #475569;
                    font-size: 1.125rem;
                }
                .methodology-rail {
                    position: absolute;
                    top: 30vh;
                    left: 2rem;
                    width: 2px;
                    background: #e2e8f0;
                    border-radius: 2px;
                }
                .methodology-line {
                    width: 100%;
                    height: 100%;
                    background: linear-gradient(to bottom, #2563eb, #60a5fa);
                    transform-origin: top center;
                    transform: scaleY(0);
                }
                .methodology-cards {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0 1.5rem 0 4rem;
                }
                .methodology-card {
                    position: absolute;
                    width: min(32rem, calc(100% - 5.5rem));
                    background: #fff;
                    border: 1px solid #e2e8f0;
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                    box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.15);
                    will-change: transform, opacity;
                }
                .methodology-card-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1.5rem;
                }
                .methodology-icon {
                    font-size: 2rem;
                    width: 4rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #eff6ff;
                    border-radius: 1rem;
                }
                .methodology-step {
                    font-size: 3.5rem;
                    font-weight: 900;
                    color: #e2e8f0;
                }
                .methodology-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 0 0.75rem;
                }
                .methodology-card p {
                    color: #475569;
                    line-height: 1.6;
                }
                @media (min-width: 768px) {
                    .methodology-title h2 { font-size: 3rem; }
                    .methodology-rail { left: 50%; margin-left: -18rem; }
                }
                "#}
            </style>
        </section>
    }
}
