use yew::prelude::*;
use yew_router::prelude::*;

mod adapters;
mod components;
mod config;
mod pages;

use config::AppConfig;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <pages::home::Home /> },
        Route::Login => html! { <pages::login::LoginPage /> },
        Route::Profile => html! { <pages::profile::Profile /> },
        Route::NotFound => html! { <pages::home::Home /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let config = AppConfig::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::debug!("auth endpoint: {}", config.auth_endpoint);
    yew::Renderer::<App>::new().render();
}
