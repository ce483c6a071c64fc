use yew::prelude::*;

use crate::content::Audience;

#[derive(Properties, PartialEq)]
pub struct AudienceProps {
    pub audiences: Vec<Audience>,
}

/// "Para quem é a consultoria?" grid. Cards switch on like an old TV
/// the first time they scroll into view.
#[function_component(AudienceSection)]
pub fn audience_section(props: &AudienceProps) -> Html {
    html! {
        <section id="para-quem" class="audience">
            <div class="section-heading">
                <span class="section-eyebrow">{"Público Alvo"}</span>
                <h2>{"Para quem é a consultoria?"}</h2>
            </div>
            <div class="audience-grid">
                { for props.audiences.iter().enumerate().map(|(i, item)| html! {
                    <div
                        class="audience-card glass-card"
                        key={item.title.clone()}
                        style={format!("animation-delay: {:.2}s", i as f64 * 0.08)}
                    >
                        <div class="audience-icon">{ &item.icon }</div>
                        <h3>{ &item.title }</h3>
                        <p>{ &item.description }</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .audience {
                    padding: 5rem 1rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .audience-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }
                .audience-card {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    text-align: center;
                    transform-origin: center;
                    animation: tv-on 0.65s cubic-bezier(0.22, 1, 0.36, 1) both;
                    transition: background 0.3s ease;
                }
                .audience-card:hover {
                    background: rgba(30, 58, 138, 0.2);
                }
                .audience-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    background: linear-gradient(to top right, #2563eb, #06b6d4);
                    box-shadow: 0 10px 15px -3px rgba(59, 130, 246, 0.2);
                    transition: transform 0.3s ease;
                }
                .audience-card:hover .audience-icon {
                    transform: rotate(6deg);
                }
                .audience-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    margin: 0 0 0.75rem;
                }
                .audience-card p {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                @keyframes tv-on {
                    0% { opacity: 0; transform: scale(1.08, 0.05); filter: blur(10px); }
                    70% { opacity: 1; transform: scale(1, 1.05); filter: blur(2px); }
                    100% { opacity: 1; transform: scale(1, 1); filter: blur(0); }
                }
                @supports (animation-timeline: view()) {
                    .audience-card {
                        animation-timeline: view();
                        animation-range: entry 0% entry 60%;
                    }
                }
                @media (prefers-reduced-motion: reduce) {
                    .audience-card { animation: none; }
                }
                @media (min-width: 768px) {
                    .audience { padding: 5rem 2rem; }
                    .audience-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .audience-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
