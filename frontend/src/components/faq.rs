use yew::prelude::*;

use crate::content::FaqEntry;

/// Next open item after clicking `clicked`. Only one answer is shown at a
/// time, and clicking the open one closes it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then_some("open"))}>
            <button class="faq-question" aria-expanded={props.is_open.to_string()} {onclick}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if props.is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                <p>{ &props.answer }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let open = use_state(|| Some(0usize));

    html! {
        <section id="faq" class="faq-section">
            <div class="section-heading">
                <span class="section-eyebrow">{"Dúvidas"}</span>
                <h2>{"Perguntas Frequentes"}</h2>
            </div>
            <div class="faq-list">
                { for props.entries.iter().enumerate().map(|(i, entry)| {
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |_: ()| open.set(toggle(*open, i)))
                    };
                    html! {
                        <FaqItem
                            key={i}
                            question={entry.question.clone()}
                            answer={entry.answer.clone()}
                            is_open={*open == Some(i)}
                            {on_toggle}
                        />
                    }
                }) }
            </div>
            <style>
                {r#"
                .faq-section {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 5rem 1rem;
                }
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease, background 0.3s ease;
                }
                .faq-item.open {
                    border-color: rgba(96, 165, 250, 0.4);
                    background: rgba(30, 58, 138, 0.15);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon {
                    color: #60a5fa;
                    font-size: 1.5rem;
                    line-height: 1;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease-out;
                }
                .faq-item.open .faq-answer {
                    max-height: 20rem;
                }
                .faq-answer p {
                    margin: 0;
                    padding: 0 1.5rem 1.25rem;
                    color: #9ca3af;
                    line-height: 1.6;
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
    fn opening_another_item_closes_the_current_one() {
        assert_eq!(toggle(Some(0), 2), Some(2));
        assert_eq!(toggle(None, 1), Some(1));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        assert_eq!(toggle(Some(3), 3), None);
    }

    #[test]
    fn reopening_after_close() {
        let open = toggle(Some(0), 0);
        assert_eq!(toggle(open, 0), Some(0));
    }
}
