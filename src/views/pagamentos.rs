use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::{DashboardLayout, Loading, Toast};
use crate::hooks::{use_api, use_toast, ToastMessage};
use crate::models::{Aluno, Pagamento, PagamentoStatus, PixQrCode};
use crate::utils::{format_brl, format_date_br};
use crate::viewmodels::{nome_aluno, Lista, ListaAction, NovaCobrancaForm, StatusSummary};
use crate::views::{bind_input, bind_select, form_error, PageProps};

#[function_component(PagamentosView)]
pub fn pagamentos_view(props: &PageProps) -> Html {
    html! {
        <DashboardLayout session={props.session.clone()}>
            <PagamentosContent session={props.session.clone()} />
        </DashboardLayout>
    }
}

/// Modal de cobro Pix de un pago pendiente
#[derive(Clone, PartialEq)]
enum PixModal {
    Closed,
    Loading,
    Ready(PixQrCode),
}

#[function_component(PagamentosContent)]
fn pagamentos_content(props: &PageProps) -> Html {
    let api = use_api(&props.session);
    let toast = use_toast();

    let pagamentos = use_reducer(Lista::<Pagamento>::default);
    let alunos = use_state(Vec::<Aluno>::new);

    let modal_aberto = use_state(|| false);
    let form = use_state(NovaCobrancaForm::default);
    let erro = use_state(|| None::<String>);
    let pix = use_state(|| PixModal::Closed);

    {
        let api = api.clone();
        let pagamentos = pagamentos.clone();
        let alunos = alunos.clone();
        let show = toast.show.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let (p, a) = futures::join!(api.listar_pagamentos(), api.listar_alunos());
                match (p, a) {
                    (Ok(p), Ok(a)) => {
                        pagamentos.dispatch(ListaAction::Carregar(p));
                        alunos.set(a);
                    }
                    (Err(e), _) | (_, Err(e)) => {
                        show.emit(ToastMessage::error(e.user_message("Erro ao carregar pagamentos.")));
                    }
                }
            });
            || ()
        });
    }

    let abrir = {
        let modal_aberto = modal_aberto.clone();
        let erro = erro.clone();
        Callback::from(move |_: MouseEvent| {
            erro.set(None);
            modal_aberto.set(true);
        })
    };

    let fechar = {
        let modal_aberto = modal_aberto.clone();
        Callback::from(move |_: MouseEvent| modal_aberto.set(false))
    };

    let criar = {
        let api = api.clone();
        let pagamentos = pagamentos.clone();
        let form = form.clone();
        let modal_aberto = modal_aberto.clone();
        let erro = erro.clone();
        let show = toast.show.clone();

        Callback::from(move |_: MouseEvent| {
            erro.set(None);
            let request = match form.validate() {
                Ok(request) => request,
                Err(e) => {
                    erro.set(Some(e.to_string()));
                    return;
                }
            };

            let api = api.clone();
            let pagamentos = pagamentos.clone();
            let form = form.clone();
            let modal_aberto = modal_aberto.clone();
            let erro = erro.clone();
            let show = show.clone();

            spawn_local(async move {
                match api.criar_pagamento(&request).await {
                    Ok(criado) => {
                        pagamentos.dispatch(ListaAction::Prepend(criado));
                        form.set(NovaCobrancaForm::default());
                        modal_aberto.set(false);
                        show.emit(ToastMessage::success("Cobrança criada!"));
                    }
                    Err(e) => erro.set(Some(e.user_message("Erro ao criar pagamento."))),
                }
            });
        })
    };

    let fechar_pix = {
        let pix = pix.clone();
        Callback::from(move |_: MouseEvent| pix.set(PixModal::Closed))
    };

    let resumo = StatusSummary::summary_cards(&pagamentos)
        .into_iter()
        .map(|card| {
            html! {
                <div class="card summary-card" key={card.status.as_str()}>
                    <span class={card.status.badge_class()}>{ card.status.as_str() }</span>
                    <p class="summary-count">{ card.count.to_string() }</p>
                    <p class="summary-total">{ format_brl(card.total) }</p>
                </div>
            }
        })
        .collect::<Html>();

    let linhas = if pagamentos.is_empty() {
        html! { <tr><td colspan="6" class="empty-state">{"Nenhum pagamento ainda."}</td></tr> }
    } else {
        pagamentos
            .iter()
            .map(|p| {
                let status = p.status();
                let cobrar = matches!(status, PagamentoStatus::Pendente | PagamentoStatus::Atraso);
                let on_pix = {
                    let api = api.clone();
                    let pix = pix.clone();
                    let show = toast.show.clone();
                    let id = p.id.clone();
                    Callback::from(move |_: MouseEvent| {
                        pix.set(PixModal::Loading);
                        let api = api.clone();
                        let pix = pix.clone();
                        let show = show.clone();
                        let id = id.clone();
                        spawn_local(async move {
                            match api.pix_pagamento(&id).await {
                                Ok(qr) => pix.set(PixModal::Ready(qr)),
                                Err(e) => {
                                    pix.set(PixModal::Closed);
                                    show.emit(ToastMessage::error(e.user_message("Erro ao gerar Pix.")));
                                }
                            }
                        });
                    })
                };
                html! {
                    <tr key={p.id.clone()}>
                        <td class="cell-strong">{ nome_aluno(&alunos, &p.aluno_id) }</td>
                        <td>{ format_brl(p.valor) }</td>
                        <td><span class={status.badge_class()}>{ p.status.clone() }</span></td>
                        <td class="cell-muted">{ p.referencia_mes.clone().unwrap_or_else(|| "—".to_string()) }</td>
                        <td class="cell-muted">{ format_date_br(&p.criado_em) }</td>
                        <td>
                            if cobrar {
                                <button class="btn-link" onclick={on_pix}>{"Pix"}</button>
                            }
                        </td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    let modal_cobranca = if *modal_aberto {
        html! {
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h2>{"Nova Cobrança"}</h2>
                        <button class="modal-close" onclick={fechar.clone()}>{"✕"}</button>
                    </div>
                    <div class="modal-body">
                        <label>{"Aluno *"}</label>
                        <select class="input-field" onchange={bind_select(&form, |f, v| f.aluno_id = v)}>
                            <option value="" selected={form.aluno_id.is_empty()}>{"Selecione..."}</option>
                            { for alunos.iter().map(|a| html! {
                                <option value={a.id.clone()} selected={form.aluno_id == a.id}>{ a.nome.clone() }</option>
                            }) }
                        </select>
                        <label>{"Valor (R$) *"}</label>
                        <input class="input-field" type="number" placeholder="149.00" value={form.valor.clone()}
                            oninput={bind_input(&form, |f, v| f.valor = v)} />
                        <label>{"Referência (mês)"}</label>
                        <input class="input-field" type="month" value={form.referencia_mes.clone()}
                            oninput={bind_input(&form, |f, v| f.referencia_mes = v)} />
                    </div>
                    { form_error(&erro) }
                    <div class="modal-actions">
                        <button class="btn-outline" onclick={fechar}>{"Cancelar"}</button>
                        <button class="btn-primary" onclick={criar}>{"Criar Cobrança"}</button>
                    </div>
                </div>
            </div>
        }
    } else {
        Html::default()
    };

    let modal_pix = match &*pix {
        PixModal::Closed => Html::default(),
        PixModal::Loading => html! {
            <div class="modal-backdrop"><div class="modal"><Loading /></div></div>
        },
        PixModal::Ready(qr) => {
            // Seleccionar el "copia e cola" de un clic
            let on_focus = Callback::from(|e: FocusEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                area.select();
            });
            html! {
                <div class="modal-backdrop">
                    <div class="modal modal-pix">
                        <div class="modal-header">
                            <h2>{"Pagamento via Pix"}</h2>
                            <button class="modal-close" onclick={fechar_pix}>{"✕"}</button>
                        </div>
                        <img class="pix-qr" src={qr.image_src()} alt="QR Code Pix" />
                        <label>{"Pix copia e cola"}</label>
                        <textarea class="input-field pix-payload" readonly=true rows="3"
                            value={qr.payload.clone()} onfocus={on_focus} />
                    </div>
                </div>
            }
        }
    };

    html! {
        <>
            <Toast message={toast.current.clone()} on_close={toast.dismiss.clone()} />

            <div class="page-header page-header-actions">
                <div>
                    <h1>{"Pagamentos"}</h1>
                    <p>{ format!("{} registro(s)", pagamentos.len()) }</p>
                </div>
                <button class="btn-primary" onclick={abrir}>{"+ Nova Cobrança"}</button>
            </div>

            <div class="summary-grid">{ resumo }</div>

            <div class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Aluno"}</th>
                            <th>{"Valor"}</th>
                            <th>{"Status"}</th>
                            <th>{"Ref. Mês"}</th>
                            <th>{"Criado"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{ linhas }</tbody>
                </table>
            </div>

            { modal_cobranca }
            { modal_pix }
        </>
    }
}
