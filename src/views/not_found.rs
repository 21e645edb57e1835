use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Route;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>{"404"}</h1>
                <p>{"Página não encontrada."}</p>
                <Link<Route> to={Route::Home} classes="link-accent">{"Voltar ao início"}</Link<Route>>
            </div>
        </div>
    }
}
