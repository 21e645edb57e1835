use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Route;
use crate::hooks::use_api;
use crate::viewmodels::RegisterForm;
use crate::views::{bind_input, form_error, PageProps};

#[function_component(RegisterView)]
pub fn register_view(props: &PageProps) -> Html {
    let form = use_state(RegisterForm::default);
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

            let request = match form.validate() {
                Ok(request) => request,
                Err(e) => {
                    erro.set(Some(e.to_string()));
                    return;
                }
            };
            loading.set(true);

            let session = session.clone();
            let api = api.clone();
            let navigator = navigator.clone();
            let erro = erro.clone();
            let loading = loading.clone();

            spawn_local(async move {
                // Alta del dojo y login automático con las mismas credenciales
                let result = match api.onboard(&request).await {
                    Ok(_) => {
                        log::info!("🏯 Dojo registrado: {}", request.dojo_nome);
                        session
                            .login(&api, &request.admin_email, &request.admin_senha)
                            .await
                    }
                    Err(e) => Err(e),
                };

                match result {
                    Ok(usuario) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::home_for(&usuario));
                        }
                    }
                    Err(e) => {
                        erro.set(Some(e.user_message("Erro ao criar conta. Verifique os dados.")));
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
                    <p>{"Registre seu Dojo e comece a gerir"}</p>
                </div>

                <div class="auth-card">
                    <h2>{"Criar Conta"}</h2>
                    <form class="auth-form" onsubmit={on_submit}>
                        <p class="form-section">{"Dados do Professor"}</p>
                        <input
                            type="text"
                            class="input-field"
                            placeholder="Seu Nome"
                            value={form.admin_nome.clone()}
                            oninput={bind_input(&form, |f, v| f.admin_nome = v)}
                        />
                        <input
                            type="email"
                            class="input-field"
                            placeholder="Seu Email"
                            value={form.admin_email.clone()}
                            oninput={bind_input(&form, |f, v| f.admin_email = v)}
                        />
                        <input
                            type="password"
                            class="input-field"
                            placeholder="Sua Senha"
                            value={form.admin_senha.clone()}
                            oninput={bind_input(&form, |f, v| f.admin_senha = v)}
                        />

                        <p class="form-section">{"Dados do Dojo"}</p>
                        <input
                            type="text"
                            class="input-field"
                            placeholder="Nome do Dojo"
                            value={form.dojo_nome.clone()}
                            oninput={bind_input(&form, |f, v| f.dojo_nome = v)}
                        />
                        <input
                            type="text"
                            class="input-field"
                            placeholder="Telefone"
                            value={form.dojo_telefone.clone()}
                            oninput={bind_input(&form, |f, v| f.dojo_telefone = v)}
                        />
                        <input
                            type="text"
                            class="input-field"
                            placeholder="Endereço"
                            value={form.dojo_endereco.clone()}
                            oninput={bind_input(&form, |f, v| f.dojo_endereco = v)}
                        />

                        { form_error(&erro) }

                        <button type="submit" class="btn-primary btn-block" disabled={*loading}>
                            { if *loading { "Processando..." } else { "Finalizar Cadastro" } }
                        </button>
                    </form>

                    <p class="auth-footer">
                        {"Já tem conta? "}
                        <Link<Route> to={Route::Login} classes="link-accent">{"Faça login"}</Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}
