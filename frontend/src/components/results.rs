use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::config;
use crate::content::Testimonial;

/// Index reached by stepping `delta` cards from `current`, held inside
/// the carousel.
pub fn clamp_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = current as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}

fn scroll_card_into_view(card: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_inline(ScrollLogicalPosition::Center);
    options.set_block(ScrollLogicalPosition::Nearest);
    card.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct ResultsProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(Results)]
pub fn results(props: &ResultsProps) -> Html {
    let active = use_state(|| 0usize);
    let len = props.testimonials.len();
    let card_refs = use_memo(|n| (0..*n).map(|_| NodeRef::default()).collect::<Vec<_>>(), len);

    let step = |delta: isize| {
        let active = active.clone();
        let card_refs = card_refs.clone();
        Callback::from(move |_: MouseEvent| {
            let next = clamp_index(*active, delta, len);
            active.set(next);
            if let Some(card) = card_refs.get(next).and_then(|r| r.cast::<Element>()) {
                scroll_card_into_view(&card);
            }
        })
    };

    html! {
        <section id="resultados" class="results">
            <div class="section-heading">
                <span class="section-eyebrow">{"Depoimentos"}</span>
                <h2>{"Resultados Reais"}</h2>
            </div>
            <div class="results-controls">
                <button
                    type="button"
                    class="results-arrow"
                    aria-label="Voltar depoimento"
                    disabled={*active == 0}
                    onclick={step(-1)}
                >
                    {"‹"}
                </button>
                <button
                    type="button"
                    class="results-arrow"
                    aria-label="Próximo depoimento"
                    disabled={len == 0 || *active + 1 >= len}
                    onclick={step(1)}
                >
                    {"›"}
                </button>
            </div>
            <div class="results-track" aria-label="Carrossel de depoimentos em vídeo">
                { for props.testimonials.iter().zip(card_refs.iter()).map(|(t, card_ref)| html! {
                    <div class="results-card glass-card" key={t.name.clone()} ref={card_ref.clone()}>
                        <div class="results-media">
                            {
                                match &t.src {
                                    Some(src) => html! {
                                        <video
                                            src={config::asset_url(src)}
                                            poster={t.poster.as_deref().map(config::asset_url)}
                                            controls=true
                                            playsinline=true
                                            preload="metadata"
                                        />
                                    },
                                    None => html! {
                                        <div class="results-placeholder">{"Vídeo em breve"}</div>
                                    },
                                }
                            }
                        </div>
                        <div class="results-caption">
                            <h4>{ &t.name }</h4>
                            <span>{ &t.result }</span>
                        </div>
                    </div>
                }) }
            </div>
            <p class="results-disclaimer">{"* Os resultados podem variar de pessoa para pessoa."}</p>
            <style>
                {r#"
                .results {
                    position: relative;
                    padding: 8rem 1rem 5rem;
                    max-width: 80rem;
                    margin: 0 auto;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .results-controls {
                    display: flex;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .results-arrow {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: transparent;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 1.5rem;
                    cursor: pointer;
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .results-arrow:hover:not(:disabled) {
                    color: #fff;
                    background: rgba(255, 255, 255, 0.05);
                }
                .results-arrow:disabled {
                    opacity: 0.35;
                    cursor: default;
                }
                .results-track {
                    width: 100%;
                    display: flex;
                    gap: 1.5rem;
                    overflow-x: auto;
                    scroll-snap-type: x mandatory;
                    padding: 0 0.5rem 1.5rem;
                }
                .results-card {
                    scroll-snap-align: center;
                    flex-shrink: 0;
                    overflow: hidden;
                    padding: 0;
                }
                .results-media {
                    width: 240px;
                    aspect-ratio: 9 / 16;
                    background: rgba(15, 23, 42, 0.6);
                }
                .results-media video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .results-placeholder {
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                .results-caption {
                    padding: 1rem;
                    text-align: left;
                }
                .results-caption h4 {
                    margin: 0;
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #fff;
                }
                .results-caption span {
                    color: #60a5fa;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .results-disclaimer {
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.875rem;
                    margin-top: 2rem;
                }
                @media (min-width: 768px) {
                    .results { padding: 8rem 2rem 5rem; }
                    .results-media { width: 280px; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_stays_inside_the_carousel() {
        assert_eq!(clamp_index(0, -1, 3), 0);
        assert_eq!(clamp_index(0, 1, 3), 1);
        assert_eq!(clamp_index(2, 1, 3), 2);
        assert_eq!(clamp_index(1, -1, 3), 0);
    }

    #[test]
    fn empty_carousel_pins_to_zero() {
        assert_eq!(clamp_index(0, 1, 0), 0);
        assert_eq!(clamp_index(5, -1, 0), 0);
    }

    #[test]
    fn large_jumps_clamp_to_the_ends() {
        assert_eq!(clamp_index(1, 10, 3), 2);
        assert_eq!(clamp_index(1, -10, 3), 0);
    }
}
