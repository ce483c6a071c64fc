use yew::prelude::*;

use crate::config;
use crate::content::TeamMember;

#[derive(Properties, PartialEq)]
pub struct TeamProps {
    pub members: Vec<TeamMember>,
}

#[function_component(Team)]
pub fn team(props: &TeamProps) -> Html {
    html! {
        <section class="team">
            <div class="team-heading">
                <h2>{"Team "}<span class="gradient-text">{"Sergio Daniel"}</span></h2>
                <p>{"Conheça a equipe que fará você transformar o seu shape!"}</p>
            </div>
            <div class="team-grid">
                { for props.members.iter().map(|member| html! {
                    <div class="team-member" key={member.name.clone()}>
                        <div class="team-photo-ring">
                            <div class="team-photo">
                                <img src={config::asset_url(&member.image)} alt={member.name.clone()} width="176" height="176" />
                            </div>
                        </div>
                        <h3>{ &member.name }</h3>
                        <span>{ &member.role }</span>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .team {
                    padding: 5rem 1rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .team-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .team-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    margin: 0;
                }
                .team-heading p {
                    color: #d1d5db;
                    margin-top: 1rem;
                }
                .gradient-text {
                    background: linear-gradient(to right, #60a5fa, #22d3ee);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .team-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2.5rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .team-member {
                    text-align: center;
                }
                .team-photo-ring {
                    margin: 0 auto;
                    width: 11rem;
                    height: 11rem;
                    border-radius: 9999px;
                    padding: 3px;
                    background: linear-gradient(to right, #3b82f6, #22d3ee, #3b82f6);
                    box-shadow: 0 10px 15px -3px rgba(59, 130, 246, 0.3);
                }
                .team-photo {
                    width: 100%;
                    height: 100%;
                    border-radius: 9999px;
                    overflow: hidden;
                    background: #0f172a;
                }
                .team-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .team-member h3 {
                    margin: 1.5rem 0 0;
                    font-size: 1.5rem;
                    font-weight: 700;
                    font-style: italic;
                }
                .team-member span {
                    color: #d1d5db;
                }
                @media (min-width: 768px) {
                    .team { padding: 5rem 2rem; }
                    .team-heading h2 { font-size: 3rem; }
                    .team-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
