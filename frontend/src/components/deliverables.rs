use yew::prelude::*;

use crate::components::button::CtaButton;
use crate::motion::scenes::deliverables::{self as scene, item, CTA};
use crate::motion::TargetRegistry;
use crate::scene::{SceneConfig, ScrollScene};

#[derive(Properties, PartialEq)]
pub struct DeliverablesProps {
    pub items: Vec<String>,
    pub cta_href: AttrValue,
}

#[function_component(Deliverables)]
pub fn deliverables(props: &DeliverablesProps) -> Html {
    let count = props.items.len();

    let section_ref = use_node_ref();
    let pin_ref = use_node_ref();
    let cta_ref = use_node_ref();
    let item_refs = use_memo(|n| (0..*n).map(|_| NodeRef::default()).collect::<Vec<_>>(), count);

    {
        let section_ref = section_ref.clone();
        let pin_ref = pin_ref.clone();
        let cta_ref = cta_ref.clone();
        let item_refs = item_refs.clone();
        use_effect_with_deps(
            move |count| {
                let count = *count;
                let mut targets: TargetRegistry<NodeRef> = item_refs
                    .iter()
                    .enumerate()
                    .map(|(i, item_ref)| (item(i), item_ref.clone()))
                    .collect();
                targets.register(CTA, cta_ref);

                let scene = ScrollScene::mount(SceneConfig {
                    name: "deliverables",
                    options: scene::options(),
                    trigger: section_ref,
                    pin: pin_ref,
                    targets,
                    build: Box::new(move |_, targets| {
                        let has_cta = targets.get(CTA).map_or(false, |r| r.get().is_some());
                        scene::timeline(count, has_cta)
                    }),
                });

                move || drop(scene)
            },
            count,
        );
    }

    let section_style = format!("min-height: {:.0}vh", scene::section_height_vh(count));

    html! {
        <section id="entregaveis" class="deliverables" ref={section_ref} style={section_style}>
            <div class="deliverables-pin" ref={pin_ref}>
                <div class="deliverables-inner">
                    <h2>{"O que você recebe"}</h2>
                    <ul class="deliverables-list">
                        { for props.items.iter().zip(item_refs.iter()).map(|(text, item_ref)| html! {
                            <li class="deliverables-item" ref={item_ref.clone()}>
                                <span class="deliverables-check">{"✔"}</span>
                                <span>{ text }</span>
                            </li>
                        }) }
                    </ul>
                    <div class="deliverables-cta" ref={cta_ref}>
                        <CtaButton href={props.cta_href.clone()}>{"Quero Começar Agora"}</CtaButton>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .deliverables {
                    position: relative;
                    background: linear-gradient(180deg, #0f172a 0%, #1e3a8a 100%);
                    color: #fff;
                }
                .deliverables-pin {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    perspective: 1200px;
                }
                .deliverables-inner {
                    width: min(40rem, calc(100% - 3rem));
                    text-align: center;
                }
                .deliverables-inner h2 {
                    font-size: 2.25rem;
                    font-weight: 800;
                    margin: 0 0 2.5rem;
                }
                .deliverables-list {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2.5rem;
                    display: grid;
                    gap: 1rem;
                    text-align: left;
                }
                .deliverables-item {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem 1.5rem;
                    background: rgba(255, 255, 255, 0.06);
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    border-radius: 1rem;
                    font-size: 1.125rem;
                    transform-origin: top center;
                    will-change: transform, opacity, filter;
                }
                .deliverables-check {
                    color: #60a5fa;
                    font-weight: 700;
                }
                @media (min-width: 768px) {
                    .deliverables-inner h2 { font-size: 3rem; }
                }
                "#}
            </style>
        </section>
    }
}
