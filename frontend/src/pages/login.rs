use shared::{LoginFlow, UiState};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::adapters::{BrowserStore, HttpAuthProvider, RouterNavigator};
use crate::components::{ErrorMessage, LoadingSpinner, SpinnerSize};
use crate::config::AppConfig;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let ui = use_state(UiState::default);
    let router = use_navigator();

    // One controller per mounted page; it pushes every state change into `ui`.
    let flow = {
        let ui = ui.clone();
        use_memo((), move |_| {
            let config = AppConfig::from_env();
            LoginFlow::new(
                HttpAuthProvider::new(config.auth_endpoint),
                RouterNavigator::new(router),
                BrowserStore,
            )
            .with_observer(move |state: &UiState| ui.set(state.clone()))
        })
    };

    let on_login = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| {
            let flow = flow.clone();
            wasm_bindgen_futures::spawn_local(async move {
                flow.attempt_login().await;
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full">
                <div class="text-center">
                    <h2 class="mt-6 text-3xl font-extrabold text-gray-900">{ "Iniciar Sesión" }</h2>
                    <p class="mt-2 text-sm text-gray-600">
                        { "Usa tu cuenta de Google para acceder a VIBE SHOES" }
                    </p>
                </div>

                if !ui.error_message.is_empty() {
                    <ErrorMessage message={ui.error_message.clone()} class="mt-4" />
                }

                <div class="mt-8">
                    <button
                        onclick={on_login}
                        disabled={ui.loading}
                        class="w-full flex justify-center items-center px-4 py-3 border border-transparent text-base font-medium rounded-md text-white bg-red-700 hover:bg-red-800 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-red-500 disabled:bg-gray-400 transition-colors"
                    >
                        if ui.loading {
                            <LoadingSpinner size={SpinnerSize::Small} class="text-white" />
                        } else {
                            <>
                                { google_icon() }
                                { "Continuar con Google" }
                            </>
                        }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn google_icon() -> Html {
    html! {
        <svg class="w-5 h-5 mr-2" viewBox="0 0 24 24">
            <path
                fill="currentColor"
                d="M22.56 12.25c0-.78-.07-1.53-.2-2.25H12v4.26h5.92c-.26 1.37-1.04 2.53-2.21 3.31v2.77h3.57c2.08-1.92 3.28-4.74 3.28-8.09z"
            />
            <path
                fill="currentColor"
                d="M12 23c2.97 0 5.46-.98 7.28-2.66l-3.57-2.77c-.98.66-2.23 1.06-3.71 1.06-2.86 0-5.29-1.93-6.16-4.53H2.18v2.84C3.99 20.53 7.7 23 12 23z"
            />
            <path
                fill="currentColor"
                d="M5.84 14.09c-.22-.66-.35-1.36-.35-2.09s.13-1.43.35-2.09V7.07H2.18C1.43 8.55 1 10.22 1 12s.43 3.45 1.18 4.93l2.85-2.22.81-.62z"
            />
            <path
                fill="currentColor"
                d="M12 5.38c1.62 0 3.06.56 4.21 1.64l3.15-3.15C17.45 2.09 14.97 1 12 1 7.7 1 3.99 3.47 2.18 7.07l3.66 2.84c.87-2.6 3.3-4.53 6.16-4.53z"
            />
        </svg>
    }
}
