use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod motion;
mod scene;
mod components {
    pub mod audience;
    pub mod button;
    pub mod contact;
    pub mod deliverables;
    pub mod faq;
    pub mod hero;
    pub mod marquee;
    pub mod methodology;
    pub mod nav;
    pub mod plans;
    pub mod results;
    pub mod team;
    pub mod trust_bar;
}
mod pages {
    pub mod landing;
}

use content::SiteContent;
use pages::landing::{Fallback, Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            match SiteContent::load() {
                Ok(content) => html! { <Landing {content} /> },
                Err(e) => {
                    error!("{}", e);
                    html! { <Fallback /> }
                }
            }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to the landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
