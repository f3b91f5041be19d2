use gloo_net::http::Request;
use shared::CurrentUserResponse;
use yew::prelude::*;

use crate::components::{ErrorMessage, Header, LoadingSpinner};

#[function_component(Profile)]
pub fn profile() -> Html {
    let user = use_state(|| None::<CurrentUserResponse>);
    let error = use_state(|| None::<String>);

    {
        let user = user.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match Request::get("/auth/me").send().await {
                    Ok(resp) if resp.ok() => match resp.json::<CurrentUserResponse>().await {
                        Ok(data) => user.set(Some(data)),
                        Err(e) => error.set(Some(format!("Respuesta inesperada: {}", e))),
                    },
                    Ok(resp) => error.set(Some(format!("No se pudo cargar el perfil ({})", resp.status()))),
                    Err(e) => error.set(Some(format!("Error de red: {}", e))),
                }
            });
            || ()
        });
    }

    let body = match (&*user, &*error) {
        (_, Some(message)) => html! { <ErrorMessage message={message.clone()} /> },
        (Some(user), None) => html! {
            <dl class="space-y-2">
                <div><dt class="text-sm text-gray-500">{ "Nombre" }</dt><dd class="text-lg">{ user.name.clone() }</dd></div>
                <div><dt class="text-sm text-gray-500">{ "Correo" }</dt><dd class="text-lg">{ user.email.clone() }</dd></div>
            </dl>
        },
        (None, None) => html! { <LoadingSpinner class="text-red-700" /> },
    };

    html! {
        <>
            <Header />
            <main class="max-w-md mx-auto px-4 py-12">
                <h2 class="text-3xl font-extrabold text-gray-900 mb-6">{ "Mi perfil" }</h2>
                { body }
            </main>
        </>
    }
}
