use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod layout;
mod notify;
mod services;
mod tasks;
mod state {
    pub mod inquiry;
    pub mod nav;
    pub mod newsletter;
    pub mod search;
    pub mod ticker;
}
mod components {
    pub mod footer;
    pub mod gallery;
    pub mod header;
    pub mod inquiry_form;
    pub mod newsletter;
    pub mod regional;
    pub mod stories;
    pub mod ticker;
    pub mod toast;
}
mod pages {
    pub mod contact;
    pub mod home;
}

use components::toast::Toaster;
use pages::{contact::Contact, home::Home};
use services::Services;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        // Unknown paths fall back to the portal.
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let services = use_state(Services::simulated);

    html! {
        <BrowserRouter>
            <ContextProvider<Services> context={(*services).clone()}>
                <Toaster>
                    <Switch<Route> render={switch} />
                </Toaster>
            </ContextProvider<Services>>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Nepal in Last 24 Hour");
    yew::Renderer::<App>::new().render();
}
