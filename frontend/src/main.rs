use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod dom;
mod error;
mod hooks;
mod styles;
mod state {
    pub mod feature;
    pub mod menu;
    pub mod nav;
    pub mod reveal;
    pub mod scroll_lock;
}
mod pages {
    pub mod landing;
}
mod components {
    pub mod cta;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod links;
    pub mod logo_bar;
    pub mod metrics;
    pub mod mobile_menu;
    pub mod nav;
    pub mod onboarding;
    pub mod reveal_block;
    pub mod testimonials;
}

use pages::landing::Landing;
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
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyles />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
