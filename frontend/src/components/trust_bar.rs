use yew::prelude::*;

use crate::content::TrustItem;

#[derive(Properties, PartialEq)]
pub struct TrustBarProps {
    pub items: Vec<TrustItem>,
}

#[function_component(TrustBar)]
pub fn trust_bar(props: &TrustBarProps) -> Html {
    html! {
        <div class="trust-bar">
            <div class="trust-bar-inner">
                { for props.items.iter().map(|item| html! {
                    <div class="trust-item" key={item.text.clone()}>
                        <div class="trust-icon">{ &item.icon }</div>
                        <span>{ &item.text }</span>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .trust-bar {
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    background: rgba(255, 255, 255, 0.02);
                }
                .trust-bar-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 2rem 1rem;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    align-items: center;
                    gap: 2rem;
                    opacity: 0.7;
                }
                .trust-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-weight: 500;
                    letter-spacing: 0.025em;
                    text-transform: uppercase;
                    font-size: 0.875rem;
                }
                .trust-icon {
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                    background: rgba(59, 130, 246, 0.1);
                    color: #3b82f6;
                    transition: background 0.2s ease;
                }
                .trust-item:hover .trust-icon {
                    background: rgba(59, 130, 246, 0.2);
                }
                @media (min-width: 768px) {
                    .trust-bar-inner { justify-content: space-between; gap: 1rem; }
                    .trust-item { font-size: 1rem; }
                }
                "#}
            </style>
        </div>
    }
}
