use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Route;
use crate::hooks::use_api;
use crate::views::{bind_input, form_error, PageProps};

#[derive(Clone, PartialEq, Default)]
struct LoginForm {
    email: String,
    senha: String,
}

#[function_component(LoginView)]
pub fn login_view(props: &PageProps) -> Html {
    let form = use_state(LoginForm::default);
    let erro = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let api = use_api(&props.session);

    let on_submit = {
        let form = form.clone();
        let erro = erro.clone();
        let loading = loading.clone();
        let session = props.session.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            erro.set(None);
            loading.set(true);

            let LoginForm { email, senha } = (*form).clone();
            let session = session.clone();
            let api = api.clone();
            let navigator = navigator.clone();
            let erro = erro.clone();
            let loading = loading.clone();

            spawn_local(async move {
                match session.login(&api, &email, &senha).await {
                    Ok(usuario) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::home_for(&usuario));
                        }
                    }
                    Err(e) => {
                        erro.set(Some(e.user_message("Erro ao fazer login.")));
                        loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <h1><span class="accent">{"🥋 Budo"}</span>{"Manager"}</h1>
                    <p>{"Sistema de gestão para dojos"}</p>
                </div>

                <div class="auth-card">
                    <h2>{"Entrar"}</h2>
                    <form class="auth-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="email">{"Email"}</label>
                            <input
                                type="email"
                                id="email"
                                class="input-field"
                                placeholder="professor@dojo.com"
                                value={form.email.clone()}
                                oninput={bind_input(&form, |f, v| f.email = v)}
                                required=true
                            />
                        </div>
                        <div class="form-group">
                            <label for="senha">{"Senha"}</label>
                            <input
                                type="password"
                                id="senha"
                                class="input-field"
                                placeholder="••••••••"
                                value={form.senha.clone()}
                                oninput={bind_input(&form, |f, v| f.senha = v)}
                                required=true
                            />
                        </div>

                        { form_error(&erro) }

                        <button type="submit" class="btn-primary btn-block" disabled={*loading}>
                            { if *loading { "Entrando..." } else { "Entrar" } }
                        </button>
                    </form>

                    <p class="auth-footer">
                        {"É um professor? "}
                        <Link<Route> to={Route::Register} classes="link-accent">{"Registre seu Dojo aqui"}</Link<Route>>
                        {"."}
                    </p>
                </div>
            </div>
        </div>
    }
}
