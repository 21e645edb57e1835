use gloo_timers::callback::Timeout;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Route;
use crate::config::CONFIG;
use crate::hooks::use_api;
use crate::viewmodels::AtivacaoForm;
use crate::views::{bind_input, PageProps};

/// `/ativar?id=<aluno_id>`
#[derive(Deserialize, Default)]
struct AtivarQuery {
    id: Option<String>,
}

#[derive(Clone, PartialEq)]
enum Mensagem {
    Sucesso(String),
    Erro(String),
}

#[function_component(ActivationView)]
pub fn activation_view(props: &PageProps) -> Html {
    let location = use_location();
    let aluno_id = location
        .and_then(|l| l.query::<AtivarQuery>().ok())
        .unwrap_or_default()
        .id
        .filter(|id| !id.trim().is_empty());

    let form = use_state(AtivacaoForm::default);
    let mensagem = use_state(|| None::<Mensagem>);
    let loading = use_state(|| false);
    let redirect = use_mut_ref(|| None::<Timeout>);
    let navigator = use_navigator();
    let api = use_api(&props.session);

    let on_submit = {
        let form = form.clone();
        let mensagem = mensagem.clone();
        let loading = loading.clone();
        let aluno_id = aluno_id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(aluno_id) = aluno_id.as_deref() else {
                return;
            };

            let request = match form.validate(aluno_id) {
                Ok(request) => request,
                Err(e) => {
                    mensagem.set(Some(Mensagem::Erro(e.to_string())));
                    return;
                }
            };
            loading.set(true);

            let api = api.clone();
            let mensagem = mensagem.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let redirect = redirect.clone();

            spawn_local(async move {
                match api.ativar_conta(&request).await {
                    Ok(_) => {
                        log::info!("✅ Conta ativada para {}", request.aluno_id);
                        mensagem.set(Some(Mensagem::Sucesso(
                            "Conta ativada! Redirecionando para login...".to_string(),
                        )));
                        let timeout = Timeout::new(CONFIG.activation_redirect_ms, move || {
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Login);
                            }
                        });
                        *redirect.borrow_mut() = Some(timeout);
                    }
                    Err(e) => {
                        mensagem.set(Some(Mensagem::Erro(e.user_message("Erro ao ativar conta."))));
                    }
                }
                loading.set(false);
            });
        })
    };

    if aluno_id.is_none() {
        return html! {
            <div class="auth-screen">
                <p class="auth-invalid">{"Link de ativação inválido."}</p>
            </div>
        };
    }

    let feedback = match &*mensagem {
        Some(Mensagem::Sucesso(texto)) => html! { <div class="form-success">{ texto }</div> },
        Some(Mensagem::Erro(texto)) => html! { <div class="form-error">{ texto }</div> },
        None => Html::default(),
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h2>{"Ativar sua Conta"}</h2>
                <p class="auth-subtitle">{"Defina sua senha para acessar o painel do aluno."}</p>

                <form class="auth-form" onsubmit={on_submit}>
                    <input
                        type="password"
                        class="input-field"
                        placeholder="Nova Senha"
                        value={form.senha.clone()}
                        oninput={bind_input(&form, |f, v| f.senha = v)}
                        required=true
                    />
                    <input
                        type="password"
                        class="input-field"
                        placeholder="Confirme a Senha"
                        value={form.confirmacao.clone()}
                        oninput={bind_input(&form, |f, v| f.confirmacao = v)}
                        required=true
                    />

                    { feedback }

                    <button type="submit" class="btn-primary btn-block" disabled={*loading}>
                        { if *loading { "Ativando..." } else { "Ativar Conta" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
