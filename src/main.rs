use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact_form;
mod content;
mod document;
mod motion;
mod navigation;
mod overlay;
mod reveal;
mod styles;

mod components {
    pub mod about;
    pub mod anchor_link;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod icons;
    pub mod navbar;
    pub mod services;
    pub mod team;
    pub mod tilt_card;
    pub mod toast;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use document::DocumentHandle;
use pages::{home::Home, not_found::NotFound};
use styles::GlobalStyles;

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
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let document = use_memo(|_| DocumentHandle::default(), ());

    html! {
        <ContextProvider<DocumentHandle> context={(*document).clone()}>
            <GlobalStyles />
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<DocumentHandle>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting NepTech site");
    yew::Renderer::<App>::new().render();
}
