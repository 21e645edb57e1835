use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{BracketView, DashboardLayout, Loading, Toast};
use crate::hooks::{use_api, use_toast, ToastMessage, UseToastHandle};
use crate::models::bracket::chaves_for_category;
use crate::models::{Evento, EventoTipo};
use crate::services::ApiClient;
use crate::utils::{format_date_br, format_entry_fee};
use crate::viewmodels::{CategoriaDraft, NovoEventoForm, GENEROS};
use crate::views::{bind_input, bind_select, bind_textarea, confirm, form_error, PageProps};

#[function_component(EventosView)]
pub fn eventos_view(props: &PageProps) -> Html {
    html! {
        <DashboardLayout session={props.session.clone()}>
            <EventosContent session={props.session.clone()} />
        </DashboardLayout>
    }
}

/// Llaves abiertas en pantalla: evento + categoría
#[derive(Clone, PartialEq)]
struct ChaveAberta {
    evento_id: String,
    chaves: Option<serde_json::Value>,
}

fn recarregar(api: ApiClient, eventos: UseStateHandle<Vec<Evento>>, loading: UseStateHandle<bool>, toast: Callback<ToastMessage>) {
    spawn_local(async move {
        match api.meus_eventos().await {
            Ok(lista) => eventos.set(lista),
            Err(e) => toast.emit(ToastMessage::error(e.user_message("Erro ao carregar eventos."))),
        }
        loading.set(false);
    });
}

#[function_component(EventosContent)]
fn eventos_content(props: &PageProps) -> Html {
    let api = use_api(&props.session);
    let toast = use_toast();

    let eventos = use_state(Vec::<Evento>::new);
    let loading = use_state(|| true);
    let mostrar_form = use_state(|| false);
    let form = use_state(NovoEventoForm::default);
    let categoria = use_state(CategoriaDraft::default);
    let erro = use_state(|| None::<String>);
    let aberta = use_state(|| None::<ChaveAberta>);

    {
        let api = api.clone();
        let eventos = eventos.clone();
        let loading = loading.clone();
        let show = toast.show.clone();
        use_effect_with((), move |_| {
            recarregar(api, eventos, loading, show);
            || ()
        });
    }

    let toggle_form = {
        let mostrar_form = mostrar_form.clone();
        Callback::from(move |_: MouseEvent| mostrar_form.set(!*mostrar_form))
    };

    let cancelar = {
        let mostrar_form = mostrar_form.clone();
        Callback::from(move |_: MouseEvent| mostrar_form.set(false))
    };

    let on_visivel = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.visivel_rede = input.checked();
            form.set(next);
        })
    };

    let add_categoria = {
        let form = form.clone();
        let categoria = categoria.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            if next.add_categoria(&categoria) {
                form.set(next);
                categoria.set(CategoriaDraft::default());
            }
        })
    };

    let on_submit = {
        let api = api.clone();
        let eventos = eventos.clone();
        let loading = loading.clone();
        let form = form.clone();
        let mostrar_form = mostrar_form.clone();
        let erro = erro.clone();
        let show = toast.show.clone();

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

            let api = api.clone();
            let eventos = eventos.clone();
            let loading = loading.clone();
            let form = form.clone();
            let mostrar_form = mostrar_form.clone();
            let erro = erro.clone();
            let show = show.clone();

            spawn_local(async move {
                match api.criar_evento(&request).await {
                    Ok(criado) => {
                        log::info!("🏆 [EVENTOS] Evento criado: {}", criado.titulo);
                        form.set(NovoEventoForm::default());
                        mostrar_form.set(false);
                        show.emit(ToastMessage::success("Evento criado!"));
                        recarregar(api, eventos, loading, show);
                    }
                    Err(e) => erro.set(Some(e.user_message("Erro ao criar evento."))),
                }
            });
        })
    };

    let formulario = if *mostrar_form {
        let categorias = form
            .categorias
            .iter()
            .enumerate()
            .map(|(i, cat)| {
                let remover = {
                    let form = form.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = (*form).clone();
                        next.remove_categoria(i);
                        form.set(next);
                    })
                };
                html! {
                    <span class="chip">
                        { format!("{} ({})", cat.nome, cat.genero) }
                        <button type="button" class="chip-remove" onclick={remover}>{"×"}</button>
                    </span>
                }
            })
            .collect::<Html>();

        html! {
            <div class="card evento-form">
                <h2>{"Cadastrar Novo Evento"}</h2>
                <form class="form-grid" onsubmit={on_submit}>
                    <div class="form-group span-2">
                        <label>{"Título do Evento"}</label>
                        <input type="text" class="input-field" placeholder="Ex: Open de Karatê ou Exame de Faixa 2026"
                            value={form.titulo.clone()} oninput={bind_input(&form, |f, v| f.titulo = v)} />
                    </div>
                    <div class="form-group span-2">
                        <label>{"Descrição"}</label>
                        <textarea class="input-field" rows="2" value={form.descricao.clone()}
                            oninput={bind_textarea(&form, |f, v| f.descricao = v)} />
                    </div>
                    <div class="form-group">
                        <label>{"Data e Hora"}</label>
                        <input type="datetime-local" class="input-field"
                            value={form.data_evento.clone()} oninput={bind_input(&form, |f, v| f.data_evento = v)} />
                    </div>
                    <div class="form-group">
                        <label>{"Valor Inscrição (R$)"}</label>
                        <input type="number" class="input-field" placeholder="0.00"
                            value={form.valor_inscricao.clone()} oninput={bind_input(&form, |f, v| f.valor_inscricao = v)} />
                    </div>
                    <div class="form-group">
                        <label>{"Tipo de Evento"}</label>
                        <select class="input-field" onchange={bind_select(&form, |f, v| f.tipo = EventoTipo::parse(&v))}>
                            <option value="interno" selected={form.tipo == EventoTipo::Interno}>{"Interno (Exame/Seminário)"}</option>
                            <option value="publico" selected={form.tipo == EventoTipo::Publico}>{"Público (Campeonato/Open)"}</option>
                        </select>
                    </div>
                    <div class="form-group checkbox">
                        <input type="checkbox" id="visivel" checked={form.visivel_rede} onchange={on_visivel} />
                        <label for="visivel">{"Visível para outros dojos na rede?"}</label>
                    </div>

                    if form.tipo == EventoTipo::Publico {
                        <div class="form-group span-2 categorias">
                            <h3>{"Categorias de Competição"}</h3>
                            <div class="categoria-draft">
                                <input type="text" class="input-field" placeholder="Ex: Absoluto Preta"
                                    value={categoria.nome.clone()} oninput={bind_input(&categoria, |c, v| c.nome = v)} />
                                <select class="input-field" onchange={bind_select(&categoria, |c, v| c.genero = v)}>
                                    { for GENEROS.iter().map(|g| html! {
                                        <option value={*g} selected={categoria.genero == *g}>{ *g }</option>
                                    }) }
                                </select>
                                <button type="button" class="btn-secondary" onclick={add_categoria}>{"Add"}</button>
                            </div>
                            <div class="chips">{ categorias }</div>
                        </div>
                    }

                    <div class="span-2">{ form_error(&erro) }</div>

                    <div class="form-actions span-2">
                        <button type="button" class="btn-outline" onclick={cancelar}>{"Cancelar"}</button>
                        <button type="submit" class="btn-primary">{"Salvar Evento"}</button>
                    </div>
                </form>
            </div>
        }
    } else {
        Html::default()
    };

    let lista = if *loading {
        html! { <Loading /> }
    } else if eventos.is_empty() {
        html! {
            <div class="card empty-card">
                <p class="empty-state">{"Nenhum evento cadastrado ainda."}</p>
            </div>
        }
    } else {
        eventos
            .iter()
            .map(|evento| evento_card(evento, &api, &toast, &aberta, &eventos, &loading))
            .collect::<Html>()
    };

    html! {
        <>
            <Toast message={toast.current.clone()} on_close={toast.dismiss.clone()} />

            <div class="page-header page-header-actions">
                <div>
                    <h1>{"Eventos & Competições"}</h1>
                    <p>{"Gerencie exames de faixa e campeonatos do dojo."}</p>
                </div>
                <button class="btn-primary" onclick={toggle_form}>{"+ Novo Evento"}</button>
            </div>

            { formulario }

            <div class="evento-grid">{ lista }</div>
        </>
    }
}

fn evento_card(
    evento: &Evento,
    api: &ApiClient,
    toast: &UseToastHandle,
    aberta: &UseStateHandle<Option<ChaveAberta>>,
    eventos: &UseStateHandle<Vec<Evento>>,
    loading: &UseStateHandle<bool>,
) -> Html {
    let categorias = evento
        .categorias
        .iter()
        .map(|cat| {
            let gerar = {
                let api = api.clone();
                let eventos = eventos.clone();
                let loading = loading.clone();
                let show = toast.show.clone();
                let evento_id = evento.id.clone();
                let categoria_id = cat.id.clone();
                Callback::from(move |_: MouseEvent| {
                    if !confirm("Deseja gerar as chaves para esta categoria?") {
                        return;
                    }
                    let api = api.clone();
                    let eventos = eventos.clone();
                    let loading = loading.clone();
                    let show = show.clone();
                    let evento_id = evento_id.clone();
                    let categoria_id = categoria_id.clone();
                    spawn_local(async move {
                        match api.gerar_chaves(&evento_id, &categoria_id).await {
                            Ok(_) => {
                                show.emit(ToastMessage::success("Chaves geradas com sucesso!"));
                                recarregar(api, eventos, loading, show);
                            }
                            Err(e) => show.emit(ToastMessage::error(e.user_message("Erro ao gerar chaves"))),
                        }
                    });
                })
            };
            let ver = {
                let aberta = aberta.clone();
                let evento_id = evento.id.clone();
                let chaves = chaves_for_category(evento.chaves_json.as_deref(), &cat.id);
                Callback::from(move |_: MouseEvent| {
                    aberta.set(Some(ChaveAberta {
                        evento_id: evento_id.clone(),
                        chaves: chaves.clone(),
                    }));
                })
            };
            html! {
                <div class="categoria-chip" key={cat.id.clone()}>
                    <span>{ cat.nome.clone() }</span>
                    <button class="icon-btn" title="Gerar/Atualizar Chaves" onclick={gerar}>{"⚡"}</button>
                    <button class="icon-btn" title="Visualizar Chaves" onclick={ver}>{"👁"}</button>
                </div>
            }
        })
        .collect::<Html>();

    let chave_aberta = match &**aberta {
        Some(chave) if chave.evento_id == evento.id => {
            let fechar = {
                let aberta = aberta.clone();
                Callback::from(move |_: MouseEvent| aberta.set(None))
            };
            html! {
                <div class="bracket-panel">
                    <div class="bracket-panel-header">
                        <p>{"Árvore de Competição"}</p>
                        <button class="btn-link" onclick={fechar}>{"Fechar"}</button>
                    </div>
                    <BracketView chaves={chave.chaves.clone()} />
                </div>
            }
        }
        _ => Html::default(),
    };

    let (tipo_class, tipo_icon) = match evento.tipo() {
        EventoTipo::Publico => ("evento-tipo evento-publico", "🏆"),
        EventoTipo::Interno => ("evento-tipo evento-interno", "👥"),
    };

    html! {
        <div class="card evento-card" key={evento.id.clone()}>
            <div class="evento-card-header">
                <span class={tipo_class}>{ tipo_icon }</span>
                if evento.visivel_rede {
                    <span class="visibilidade visibilidade-rede">{"🌐 Público"}</span>
                } else {
                    <span class="visibilidade">{"🔒 Privado"}</span>
                }
            </div>
            <h3>{ evento.titulo.clone() }</h3>
            <p class="cell-muted">{ format_date_br(&evento.data_evento) }</p>

            if !evento.categorias.is_empty() {
                <div class="evento-categorias">
                    <p class="form-section">{"Categorias / Chaves"}</p>
                    <div class="chips">{ categorias }</div>
                    { chave_aberta }
                </div>
            }

            <div class="evento-card-footer">
                <span class="evento-valor">{ format_entry_fee(evento.valor_inscricao) }</span>
            </div>
        </div>
    }
}
