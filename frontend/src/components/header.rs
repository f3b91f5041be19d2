use gloo_net::http::Request;
use shared::LogoutResponse;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let logging_out = use_state(|| false);

    let on_logout = {
        let logging_out = logging_out.clone();
        Callback::from(move |_: MouseEvent| {
            let logging_out = logging_out.clone();
            logging_out.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match Request::post("/auth/logout").send().await {
                    Ok(resp) => match resp.json::<LogoutResponse>().await {
                        Ok(body) => log::info!("session closed: {}", body.status),
                        Err(e) => log::warn!("unexpected logout response: {e}"),
                    },
                    Err(e) => log::warn!("logout request failed: {e}"),
                }
                if let Some(w) = window() {
                    let _ = w.location().reload();
                }
            });
        })
    };

    html! {
        <header class="bg-white shadow-sm">
            <nav class="max-w-6xl mx-auto flex items-center justify-between px-4 py-3">
                <Link<Route> to={Route::Home}>
                    <h1 class="text-xl font-extrabold tracking-widest text-red-700">{ "VIBE SHOES" }</h1>
                </Link<Route>>
                <div class="flex items-center gap-4 text-sm">
                    <Link<Route> to={Route::Profile}>{ "Mi perfil" }</Link<Route>>
                    <Link<Route> to={Route::Login}>{ "Iniciar sesión" }</Link<Route>>
                    <button class="text-gray-600 hover:text-gray-900" onclick={on_logout} disabled={*logging_out}>
                        { if *logging_out { "Cerrando sesión..." } else { "Cerrar sesión" } }
                    </button>
                </div>
            </nav>
        </header>
    }
}
