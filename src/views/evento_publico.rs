use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Loading, Route, Toast};
use crate::hooks::{use_api, use_toast, ToastMessage};
use crate::models::Evento;
use crate::state::SessionHandle;
use crate::utils::{format_date_br, format_entry_fee};
use crate::viewmodels::InscricaoExternaForm;
use crate::views::{bind_input, bind_select, form_error};

const DESCRICAO_PADRAO: &str =
    "Participe deste evento e mostre sua técnica. Inscrições abertas para atletas de todos os dojos.";

#[derive(Properties, PartialEq)]
pub struct EventoPublicoProps {
    pub session: SessionHandle,
    pub evento_id: String,
}

/// Página pública de un evento: sin guard, el token solo viaja si ya hay sesión
#[function_component(EventoPublicoView)]
pub fn evento_publico_view(props: &EventoPublicoProps) -> Html {
    let api = use_api(&props.session);
    let toast = use_toast();

    let evento = use_state(|| None::<Evento>);
    let loading = use_state(|| true);
    let form = use_state(InscricaoExternaForm::default);
    let erro = use_state(|| None::<String>);
    let enviando = use_state(|| false);

    {
        let api = api.clone();
        let evento = evento.clone();
        let loading = loading.clone();
        use_effect_with(props.evento_id.clone(), move |evento_id| {
            let evento_id = evento_id.clone();
            loading.set(true);
            spawn_local(async move {
                match api.feed_eventos().await {
                    Ok(feed) => evento.set(feed.into_iter().find(|e| e.id == evento_id)),
                    Err(e) => {
                        log::error!("❌ [EVENTO] Error cargando feed: {}", e);
                        evento.set(None);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_submit = {
        let api = api.clone();
        let form = form.clone();
        let erro = erro.clone();
        let enviando = enviando.clone();
        let show = toast.show.clone();
        let evento_id = props.evento_id.clone();

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

            enviando.set(true);
            let api = api.clone();
            let form = form.clone();
            let enviando = enviando.clone();
            let show = show.clone();
            let evento_id = evento_id.clone();

            spawn_local(async move {
                match api.inscrever_externo(&evento_id, &request).await {
                    Ok(_) => {
                        log::info!("✅ [EVENTO] Inscripción externa enviada");
                        show.emit(ToastMessage::success("Inscrição realizada! Verifique seu WhatsApp."));
                        form.set(InscricaoExternaForm::default());
                    }
                    Err(e) => {
                        log::warn!("⚠️ [EVENTO] Inscripción rechazada: {}", e);
                        show.emit(ToastMessage::error(e.user_message("Erro ao realizar inscrição.")));
                    }
                }
                enviando.set(false);
            });
        })
    };

    if *loading {
        return html! { <Loading fullscreen=true /> };
    }

    let Some(evento) = (*evento).clone() else {
        return html! {
            <div class="public-page">
                <div class="card empty-card">
                    <p class="empty-state">{"Evento não encontrado."}</p>
                    <Link<Route> to={Route::Home} classes="btn-link">{"Voltar"}</Link<Route>>
                </div>
            </div>
        };
    };

    let descricao = evento
        .descricao
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DESCRICAO_PADRAO.to_string());

    let categorias = evento
        .categorias
        .iter()
        .map(|cat| {
            html! {
                <div class="card categoria-card" key={cat.id.clone()}>
                    <h4>{ cat.nome.clone() }</h4>
                    <span class="cell-muted">{ cat.genero.clone() }</span>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="public-page">
            <Toast message={toast.current.clone()} on_close={toast.dismiss.clone()} />

            <header class="evento-hero">
                <span class="evento-tag">{"🏆 Competição Oficial"}</span>
                <h1>{ evento.titulo.clone() }</h1>
                <p class="evento-organizador">{ format!("🥋 {}", evento.organizador()) }</p>
                <p class="evento-data">{ format!("📅 {}", format_date_br(&evento.data_evento)) }</p>
            </header>

            <div class="evento-publico-grid">
                <section>
                    <div class="card">
                        <h2>{"Sobre o Evento"}</h2>
                        <p>{ descricao }</p>
                    </div>

                    if !evento.categorias.is_empty() {
                        <h2>{"Categorias"}</h2>
                        <div class="categoria-grid">{ categorias }</div>
                    }
                </section>

                <aside class="card inscricao-card">
                    <p class="form-section">{"Investimento"}</p>
                    <p class="evento-valor">{ format_entry_fee(evento.valor_inscricao) }</p>

                    <form class="form-stack" onsubmit={on_submit}>
                        <input type="text" class="input-field" placeholder="Nome completo"
                            value={form.nome.clone()} oninput={bind_input(&form, |f, v| f.nome = v)} />
                        <input type="email" class="input-field" placeholder="Email"
                            value={form.email.clone()} oninput={bind_input(&form, |f, v| f.email = v)} />
                        <input type="tel" class="input-field" placeholder="WhatsApp"
                            value={form.telefone.clone()} oninput={bind_input(&form, |f, v| f.telefone = v)} />
                        <select class="input-field" onchange={bind_select(&form, |f, v| f.categoria_id = v)}>
                            <option value="" selected={form.categoria_id.is_empty()}>{"Selecione a categoria"}</option>
                            { for evento.categorias.iter().map(|cat| html! {
                                <option value={cat.id.clone()} selected={form.categoria_id == cat.id}>
                                    { format!("{} ({})", cat.nome, cat.genero) }
                                </option>
                            }) }
                        </select>

                        { form_error(&erro) }

                        <button type="submit" class="btn-primary" disabled={*enviando}>
                            { if *enviando { "Enviando..." } else { "Garantir Vaga" } }
                        </button>
                    </form>
                </aside>
            </div>
        </div>
    }
}
