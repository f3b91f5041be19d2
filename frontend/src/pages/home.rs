use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Header;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Header />
            <main class="max-w-6xl mx-auto px-4 py-16 text-center">
                <h2 class="text-4xl font-extrabold text-gray-900">{ "Bienvenido a VIBE SHOES" }</h2>
                <p class="mt-4 text-gray-600">{ "Las zapatillas que marcan tu ritmo." }</p>
                <div class="mt-8">
                    <Link<Route> to={Route::Login} classes="text-red-700 font-medium underline">
                        { "Iniciar sesión" }
                    </Link<Route>>
                </div>
            </main>
        </>
    }
}
