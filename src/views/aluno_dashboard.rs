use std::collections::HashMap;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{Loading, ProtectedRoute, Toast, XpBar};
use crate::hooks::{use_api, use_session_status, use_toast, ToastMessage};
use crate::models::{Evento, MeuProgresso};
use crate::services::ApiClient;
use crate::utils::{first_name, format_brl, format_date_br, format_entry_fee};
use crate::viewmodels::{pending_count, validate_inscricao};
use crate::views::{confirm, open_in_new_tab, PageProps};

/// Área del alumno: sin barra lateral, solo guard y cabecera propia
#[function_component(AlunoDashboardView)]
pub fn aluno_dashboard_view(props: &PageProps) -> Html {
    html! {
        <ProtectedRoute session={props.session.clone()}>
            <AlunoDashboardContent session={props.session.clone()} />
        </ProtectedRoute>
    }
}

#[derive(Clone, PartialEq, Default)]
struct Resumo {
    progresso: MeuProgresso,
    pendentes: usize,
}

fn carregar_feed(api: ApiClient, feed: UseStateHandle<Vec<Evento>>) {
    spawn_local(async move {
        match api.feed_eventos().await {
            Ok(eventos) => feed.set(eventos),
            Err(e) => log::warn!("⚠️ [ALUNO] Error recargando feed: {}", e),
        }
    });
}

#[function_component(AlunoDashboardContent)]
fn aluno_dashboard_content(props: &PageProps) -> Html {
    let status = use_session_status(&props.session);
    let api = use_api(&props.session);
    let toast = use_toast();

    let resumo = use_state(Resumo::default);
    let feed = use_state(Vec::<Evento>::new);
    let loading = use_state(|| true);
    // categoria elegida por evento
    let selecao = use_state(HashMap::<String, String>::new);
    let inscrevendo = use_state(|| None::<String>);

    {
        let api = api.clone();
        let resumo = resumo.clone();
        let feed = feed.clone();
        let loading = loading.clone();
        let show = toast.show.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let (progresso, pagamentos, eventos) =
                    futures::join!(api.meu_progresso(), api.meus_pagamentos(), api.feed_eventos());
                match (progresso, pagamentos, eventos) {
                    (Ok(progresso), Ok(pagamentos), Ok(eventos)) => {
                        resumo.set(Resumo {
                            progresso,
                            pendentes: pending_count(&pagamentos),
                        });
                        feed.set(eventos);
                    }
                    (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                        log::error!("❌ [ALUNO] Error cargando dashboard: {}", e);
                        show.emit(ToastMessage::error("Erro ao carregar dados do dashboard."));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_logout = {
        let session = props.session.clone();
        Callback::from(move |_: MouseEvent| session.logout())
    };

    if *loading {
        return html! { <Loading fullscreen=true /> };
    }

    let nome = status
        .session()
        .map(|s| first_name(&s.usuario.nome))
        .unwrap_or_else(|| first_name(""));
    let percent = resumo.progresso.percent();

    let eventos = feed
        .iter()
        .map(|evento| {
            let on_categoria = {
                let selecao = selecao.clone();
                let evento_id = evento.id.clone();
                Callback::from(move |e: Event| {
                    let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                    let mut next = (*selecao).clone();
                    next.insert(evento_id.clone(), select.value());
                    selecao.set(next);
                })
            };

            let on_inscrever = {
                let api = api.clone();
                let feed = feed.clone();
                let selecao = selecao.clone();
                let inscrevendo = inscrevendo.clone();
                let show = toast.show.clone();
                let evento = evento.clone();
                Callback::from(move |_: MouseEvent| {
                    let categoria_id = match validate_inscricao(&evento, selecao.get(&evento.id).map(String::as_str)) {
                        Ok(categoria_id) => categoria_id,
                        Err(e) => {
                            show.emit(ToastMessage::error(e.to_string()));
                            return;
                        }
                    };
                    let pergunta = format!(
                        "Confirmar inscrição em \"{}\" por {}?",
                        evento.titulo,
                        format_brl(evento.valor_inscricao)
                    );
                    if !confirm(&pergunta) {
                        return;
                    }

                    inscrevendo.set(Some(evento.id.clone()));
                    let api = api.clone();
                    let feed = feed.clone();
                    let inscrevendo = inscrevendo.clone();
                    let show = show.clone();
                    let evento_id = evento.id.clone();

                    spawn_local(async move {
                        match api.inscrever(&evento_id, categoria_id).await {
                            Ok(resposta) => match resposta.payment_url {
                                Some(url) => {
                                    show.emit(ToastMessage::info("Inscrição recebida! Pague para confirmar sua vaga."));
                                    open_in_new_tab(&url);
                                }
                                None => show.emit(ToastMessage::success("Inscrição realizada com sucesso!")),
                            },
                            Err(e) => show.emit(ToastMessage::error(e.user_message("Erro ao realizar inscrição."))),
                        }
                        inscrevendo.set(None);
                        carregar_feed(api, feed);
                    });
                })
            };

            let pendente = inscrevendo.as_deref() == Some(evento.id.as_str());
            let selecionada = selecao.get(&evento.id).cloned().unwrap_or_default();

            html! {
                <div class="card feed-card" key={evento.id.clone()}>
                    <div class="feed-card-info">
                        <h3>{ evento.titulo.clone() }</h3>
                        <p class="cell-muted">
                            { format!("📅 {} · {}", format_date_br(&evento.data_evento), format_entry_fee(evento.valor_inscricao)) }
                        </p>
                    </div>
                    if !evento.categorias.is_empty() {
                        <select class="input-field" onchange={on_categoria}>
                            <option value="" selected={selecionada.is_empty()}>{"Escolha sua categoria"}</option>
                            { for evento.categorias.iter().map(|cat| html! {
                                <option value={cat.id.clone()} selected={selecionada == cat.id}>
                                    { format!("{} ({})", cat.nome, cat.genero) }
                                </option>
                            }) }
                        </select>
                    }
                    <button class="btn-primary" onclick={on_inscrever} disabled={pendente}>
                        { if pendente { "A Processar..." } else { "Inscrever-se" } }
                    </button>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="aluno-page">
            <Toast message={toast.current.clone()} on_close={toast.dismiss.clone()} />

            <header class="aluno-header">
                <div>
                    <p class="cell-muted">{"Olá, guerreiro"}</p>
                    <h1>{ nome }</h1>
                    <span class="faixa-tag">{ format!("FAIXA {}", resumo.progresso.faixa_label()) }</span>
                </div>
                <button class="btn-outline" onclick={on_logout}>{"Sair"}</button>
            </header>

            <div class="stat-grid">
                <div class="card stat-card">
                    <p class="stat-title">{"Resistência"}</p>
                    <p class="stat-value">{ resumo.progresso.total_aulas.to_string() }</p>
                    <p class="stat-sub">{"aulas no total"}</p>
                </div>
                <div class="card stat-card">
                    <p class="stat-title">{"Foco (XP)"}</p>
                    <p class="stat-value">{ format!("{}%", percent) }</p>
                    <XpBar percentual={percent} aulas={resumo.progresso.total_aulas} />
                </div>
                <div class="card stat-card">
                    <p class="stat-title">{"Tesouraria"}</p>
                    <p class="stat-value">{ resumo.pendentes.to_string() }</p>
                    <p class="stat-sub">{"pagamentos pendentes"}</p>
                </div>
            </div>

            <section>
                <h2>{"Competições Abertas"}</h2>
                if feed.is_empty() {
                    <p class="empty-state">{"Nenhuma competição aberta no momento."}</p>
                } else {
                    <div class="feed-list">{ eventos }</div>
                }
            </section>
        </div>
    }
}
