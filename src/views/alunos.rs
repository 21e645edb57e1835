use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{DashboardLayout, Toast};
use crate::hooks::{use_api, use_toast, ToastMessage};
use crate::models::Aluno;
use crate::utils::format_date_br;
use crate::viewmodels::{
    faixa_badge_class, filter_alunos, EditarAlunoForm, Lista, ListaAction, NovoAlunoForm, FAIXAS,
};
use crate::views::{bind_input, bind_select, form_error, PageProps};

#[function_component(AlunosView)]
pub fn alunos_view(props: &PageProps) -> Html {
    html! {
        <DashboardLayout session={props.session.clone()}>
            <AlunosContent session={props.session.clone()} />
        </DashboardLayout>
    }
}

#[function_component(AlunosContent)]
fn alunos_content(props: &PageProps) -> Html {
    let api = use_api(&props.session);
    let toast = use_toast();

    let alunos = use_reducer(Lista::<Aluno>::default);
    let busca = use_state(String::new);

    let novo_aberto = use_state(|| false);
    let novo = use_state(NovoAlunoForm::default);
    let novo_erro = use_state(|| None::<String>);

    let edicao = use_state(|| None::<EditarAlunoForm>);
    let edicao_erro = use_state(|| None::<String>);

    {
        let api = api.clone();
        let alunos = alunos.clone();
        let show = toast.show.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api.listar_alunos().await {
                    Ok(lista) => {
                        log::info!("👥 [ALUNOS] {} alunos cargados", lista.len());
                        alunos.dispatch(ListaAction::Carregar(lista));
                    }
                    Err(e) => show.emit(ToastMessage::error(e.user_message("Erro ao carregar alunos."))),
                }
            });
            || ()
        });
    }

    let on_busca = {
        let busca = busca.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            busca.set(input.value());
        })
    };

    let abrir_novo = {
        let novo_aberto = novo_aberto.clone();
        let novo_erro = novo_erro.clone();
        Callback::from(move |_: MouseEvent| {
            novo_erro.set(None);
            novo_aberto.set(true);
        })
    };

    let fechar_novo = {
        let novo_aberto = novo_aberto.clone();
        Callback::from(move |_: MouseEvent| novo_aberto.set(false))
    };

    let criar = {
        let api = api.clone();
        let alunos = alunos.clone();
        let novo = novo.clone();
        let novo_aberto = novo_aberto.clone();
        let novo_erro = novo_erro.clone();
        let show = toast.show.clone();

        Callback::from(move |_: MouseEvent| {
            novo_erro.set(None);
            let request = match novo.validate() {
                Ok(request) => request,
                Err(e) => {
                    novo_erro.set(Some(e.to_string()));
                    return;
                }
            };

            let api = api.clone();
            let alunos = alunos.clone();
            let novo = novo.clone();
            let novo_aberto = novo_aberto.clone();
            let novo_erro = novo_erro.clone();
            let show = show.clone();

            spawn_local(async move {
                match api.criar_aluno(&request).await {
                    Ok(criado) => {
                        alunos.dispatch(ListaAction::Prepend(criado));
                        novo.set(NovoAlunoForm::default());
                        novo_aberto.set(false);
                        show.emit(ToastMessage::success("Aluno cadastrado!"));
                    }
                    Err(e) => novo_erro.set(Some(e.user_message("Erro ao criar aluno."))),
                }
            });
        })
    };

    let fechar_edicao = {
        let edicao = edicao.clone();
        Callback::from(move |_: MouseEvent| edicao.set(None))
    };

    let salvar_edicao = {
        let api = api.clone();
        let alunos = alunos.clone();
        let edicao = edicao.clone();
        let edicao_erro = edicao_erro.clone();
        let show = toast.show.clone();

        Callback::from(move |_: MouseEvent| {
            edicao_erro.set(None);
            let Some(form) = (*edicao).clone() else {
                return;
            };
            let Some(original) = alunos.find(&form.id).cloned() else {
                return;
            };
            let update = match form.changes(&original) {
                Ok(update) => update,
                Err(e) => {
                    edicao_erro.set(Some(e.to_string()));
                    return;
                }
            };

            let api = api.clone();
            let alunos = alunos.clone();
            let edicao = edicao.clone();
            let edicao_erro = edicao_erro.clone();
            let show = show.clone();

            spawn_local(async move {
                match api.atualizar_aluno(&form.id, &update).await {
                    Ok(atualizado) => {
                        alunos.dispatch(ListaAction::Replace(atualizado));
                        edicao.set(None);
                        show.emit(ToastMessage::success("Aluno atualizado!"));
                    }
                    Err(e) => edicao_erro.set(Some(e.user_message("Erro ao atualizar aluno."))),
                }
            });
        })
    };

    let filtrados = filter_alunos(&alunos, &busca);

    let linhas = if filtrados.is_empty() {
        html! {
            <tr><td colspan="5" class="empty-state">{"Nenhum aluno encontrado."}</td></tr>
        }
    } else {
        filtrados
            .into_iter()
            .map(|aluno| {
                let editar = {
                    let edicao = edicao.clone();
                    let edicao_erro = edicao_erro.clone();
                    let form = EditarAlunoForm::from(aluno);
                    Callback::from(move |_: MouseEvent| {
                        edicao_erro.set(None);
                        edicao.set(Some(form.clone()));
                    })
                };
                html! {
                    <tr key={aluno.id.clone()} class={classes!((!aluno.ativo).then_some("row-inactive"))}>
                        <td class="cell-strong">{ aluno.nome.clone() }</td>
                        <td>{ aluno.telefone.clone().unwrap_or_else(|| "—".to_string()) }</td>
                        <td><span class={faixa_badge_class(&aluno.faixa_atual)}>{ aluno.faixa_atual.clone() }</span></td>
                        <td class="cell-muted">{ format_date_br(&aluno.criado_em) }</td>
                        <td><button class="btn-link" onclick={editar}>{"Editar"}</button></td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    let modal_novo = if *novo_aberto {
        html! {
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h2>{"Cadastrar Aluno"}</h2>
                        <button class="modal-close" onclick={fechar_novo.clone()}>{"✕"}</button>
                    </div>
                    <div class="modal-body">
                        <label>{"Nome *"}</label>
                        <input class="input-field" placeholder="João Silva" value={novo.nome.clone()}
                            oninput={bind_input(&novo, |f, v| f.nome = v)} />
                        <label>{"CPF"}</label>
                        <input class="input-field" placeholder="000.000.000-00" value={novo.cpf.clone()}
                            oninput={bind_input(&novo, |f, v| f.cpf = v)} />
                        <label>{"Telefone"}</label>
                        <input class="input-field" placeholder="(11) 99999-9999" value={novo.telefone.clone()}
                            oninput={bind_input(&novo, |f, v| f.telefone = v)} />
                        <label>{"Email"}</label>
                        <input class="input-field" placeholder="joao@email.com" value={novo.email.clone()}
                            oninput={bind_input(&novo, |f, v| f.email = v)} />
                    </div>
                    { form_error(&novo_erro) }
                    <div class="modal-actions">
                        <button class="btn-outline" onclick={fechar_novo}>{"Cancelar"}</button>
                        <button class="btn-primary" onclick={criar}>{"Cadastrar"}</button>
                    </div>
                </div>
            </div>
        }
    } else {
        Html::default()
    };

    let modal_edicao = match &*edicao {
        Some(form) => {
            let on_ativo = {
                let edicao = edicao.clone();
                Callback::from(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    if let Some(mut form) = (*edicao).clone() {
                        form.ativo = input.checked();
                        edicao.set(Some(form));
                    }
                })
            };
            html! {
                <div class="modal-backdrop">
                    <div class="modal">
                        <div class="modal-header">
                            <h2>{"Editar Aluno"}</h2>
                            <button class="modal-close" onclick={fechar_edicao.clone()}>{"✕"}</button>
                        </div>
                        <div class="modal-body">
                            <label>{"Nome *"}</label>
                            <input class="input-field" value={form.nome.clone()}
                                oninput={bind_input(&edicao, |f, v| if let Some(f) = f { f.nome = v })} />
                            <label>{"Telefone"}</label>
                            <input class="input-field" value={form.telefone.clone()}
                                oninput={bind_input(&edicao, |f, v| if let Some(f) = f { f.telefone = v })} />
                            <label>{"Email"}</label>
                            <input class="input-field" value={form.email.clone()}
                                oninput={bind_input(&edicao, |f, v| if let Some(f) = f { f.email = v })} />
                            <label>{"Faixa"}</label>
                            <select class="input-field"
                                onchange={bind_select(&edicao, |f, v| if let Some(f) = f { f.faixa_atual = v })}>
                                { for FAIXAS.iter().map(|faixa| html! {
                                    <option value={*faixa} selected={form.faixa_atual == *faixa}>{ *faixa }</option>
                                }) }
                            </select>
                            <label class="checkbox">
                                <input type="checkbox" checked={form.ativo} onchange={on_ativo} />
                                {"Aluno ativo"}
                            </label>
                        </div>
                        { form_error(&edicao_erro) }
                        <div class="modal-actions">
                            <button class="btn-outline" onclick={fechar_edicao}>{"Cancelar"}</button>
                            <button class="btn-primary" onclick={salvar_edicao}>{"Salvar"}</button>
                        </div>
                    </div>
                </div>
            }
        }
        None => Html::default(),
    };

    html! {
        <>
            <Toast message={toast.current.clone()} on_close={toast.dismiss.clone()} />

            <div class="page-header page-header-actions">
                <div>
                    <h1>{"Alunos"}</h1>
                    <p>{ format!("{} cadastrado(s)", alunos.len()) }</p>
                </div>
                <button class="btn-primary" onclick={abrir_novo}>{"+ Novo Aluno"}</button>
            </div>

            <div class="search-bar">
                <input type="text" class="input-field" placeholder="Buscar aluno..."
                    value={(*busca).clone()} oninput={on_busca} />
            </div>

            <div class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Nome"}</th>
                            <th>{"Telefone"}</th>
                            <th>{"Faixa"}</th>
                            <th>{"Desde"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{ linhas }</tbody>
                </table>
            </div>

            { modal_novo }
            { modal_edicao }
        </>
    }
}
