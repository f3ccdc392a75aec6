use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod contact {
    pub mod field;
    pub mod validation;
    pub mod phone;
    pub mod controller;
    pub mod form;
}
mod pages {
    pub mod contact;
}

use pages::contact::ContactPage;


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
        Route::Home | Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <section class="contact-section">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Contact}>{"Contact us"}</Link<Route>>
                </section>
            }
        },
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
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
