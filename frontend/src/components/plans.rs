use yew::prelude::*;

use crate::components::button::CtaButton;
use crate::config;
use crate::content::{Messages, Plan};

#[derive(Properties, PartialEq)]
pub struct PlansProps {
    pub plans: Vec<Plan>,
    pub messages: Messages,
}

#[function_component(Plans)]
pub fn plans(props: &PlansProps) -> Html {
    html! {
        <section id="planos" class="plans">
            <div class="section-heading">
                <span class="section-eyebrow">{"Planos"}</span>
                <h2>{"Escolha seu plano"}</h2>
            </div>
            <div class="plans-grid">
                { for props.plans.iter().map(|plan| {
                    let href = config::whatsapp_link(&props.messages.for_plan(plan));
                    html! {
                        <div class="plan-card glass-card" key={plan.label.clone()}>
                            <div class="plan-price">{ &plan.price }</div>
                            <div class="plan-label">{ &plan.label }</div>
                            <div class="plan-action">
                                <CtaButton class="plan-button" {href}>{"Escolher plano"}</CtaButton>
                            </div>
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                .plans {
                    padding: 5rem 1rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .plans-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }
                .plan-card {
                    border-radius: 1.5rem;
                    padding: 2rem;
                    text-align: center;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    transition: background 0.2s ease;
                }
                .plan-card:hover {
                    background: rgba(255, 255, 255, 0.05);
                }
                .plan-price {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .plan-label {
                    color: #93c5fd;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.875rem;
                }
                .plan-action {
                    margin-top: 1.5rem;
                    display: flex;
                    justify-content: center;
                }
                .plan-button.cta-button {
                    padding: 0.75rem 1.5rem;
                    font-size: 0.875rem;
                }
                @media (min-width: 768px) {
                    .plans { padding: 5rem 2rem; }
                    .plans-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
