use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::dom::{self, FrameLoop, WindowListener};
use crate::motion::Marquee;

#[derive(Properties, PartialEq)]
pub struct ScrollMarqueeProps {
    /// px/s; the sign picks the initial direction.
    #[prop_or(3.0)]
    pub base_velocity: f64,
    /// Copies of the logo set rendered end to end.
    #[prop_or(4)]
    pub logo_count: usize,
    #[prop_or(true)]
    pub scroll_influence: bool,
    #[prop_or_default]
    pub class: Classes,
}

const LOGOS_PER_SET: usize = 8;

#[function_component(ScrollMarquee)]
pub fn scroll_marquee(props: &ScrollMarqueeProps) -> Html {
    let track_ref = use_node_ref();
    let first_set_ref = use_node_ref();

    {
        let track_ref = track_ref.clone();
        let first_set_ref = first_set_ref.clone();
        let base_velocity = props.base_velocity;
        let scroll_influence = props.scroll_influence;
        use_effect_with_deps(
            move |_| {
                let mut guards: Option<(FrameLoop, [Option<WindowListener>; 2])> = None;

                if dom::motion_preference().allows_continuous_motion() {
                    let marquee = Rc::new(RefCell::new(Marquee::new(base_velocity, scroll_influence)));

                    let measure = {
                        let marquee = marquee.clone();
                        move || {
                            if let Some(set) = first_set_ref.cast::<HtmlElement>() {
                                marquee.borrow_mut().set_width(set.offset_width() as f64);
                            }
                        }
                    };
                    measure();

                    let frames = {
                        let marquee = marquee.clone();
                        FrameLoop::new(move |elapsed_ms| {
                            let x = marquee.borrow_mut().step(elapsed_ms, dom::scroll_y());
                            if let Some(track) = track_ref.cast::<HtmlElement>() {
                                dom::set_style(&track, "transform", &format!("translate3d({:.2}px, 0, 0)", x));
                            }
                            true
                        })
                    };
                    // logos that finish loading after mount change the set width
                    let load = WindowListener::new("load", measure.clone());
                    let resize = WindowListener::new("resize", measure);

                    guards = frames.map(|frames| (frames, [load, resize]));
                }

                move || drop(guards)
            },
            (),
        );
    }

    let logo = config::asset_url("/logo.svg");

    html! {
        <div class={classes!("marquee", props.class.clone())}>
            <div class="marquee-track" ref={track_ref}>
                { for (0..props.logo_count).map(|i| html! {
                    <div class="marquee-set" ref={if i == 0 { first_set_ref.clone() } else { NodeRef::default() }}>
                        { for (0..LOGOS_PER_SET).map(|_| html! {
                            <div class="marquee-logo">
                                <img src={logo.clone()} alt="Sergio Daniel Logo" />
                            </div>
                        }) }
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .marquee {
                    overflow: hidden;
                    display: flex;
                    flex-wrap: nowrap;
                    padding: 1rem 0;
                    user-select: none;
                }
                .marquee-track {
                    display: flex;
                    flex-wrap: nowrap;
                    align-items: center;
                    flex-shrink: 0;
                    gap: 4rem;
                    will-change: transform;
                }
                .marquee-set {
                    display: flex;
                    align-items: center;
                    flex-shrink: 0;
                    gap: 4rem;
                }
                .marquee-logo {
                    opacity: 0.25;
                    filter: grayscale(1);
                }
                .marquee-logo img {
                    height: 4rem;
                    width: auto;
                    object-fit: contain;
                    filter: brightness(2);
                }
                @media (min-width: 768px) {
                    .marquee-track, .marquee-set { gap: 8rem; }
                    .marquee-logo img { height: 6rem; }
                }
                "#}
            </style>
        </div>
    }
}
