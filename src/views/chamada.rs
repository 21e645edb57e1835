use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{DashboardLayout, Toast};
use crate::hooks::{use_api, use_toast, ToastMessage};
use crate::models::Aluno;
use crate::viewmodels::Chamada;
use crate::views::PageProps;

/// Fecha de hoy para el `<input type="date">` (UTC, como `toISOString`)
fn hoje() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.chars().take(10).collect()
}

#[function_component(ChamadaView)]
pub fn chamada_view(props: &PageProps) -> Html {
    html! {
        <DashboardLayout session={props.session.clone()}>
            <ChamadaContent session={props.session.clone()} />
        </DashboardLayout>
    }
}

#[function_component(ChamadaContent)]
fn chamada_content(props: &PageProps) -> Html {
    let api = use_api(&props.session);
    let toast = use_toast();

    let alunos = use_state(Vec::<Aluno>::new);
    let chamada = use_state(Chamada::default);
    let data = use_state(hoje);
    let salvando = use_state(|| false);

    {
        let api = api.clone();
        let alunos = alunos.clone();
        let chamada = chamada.clone();
        let show = toast.show.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api.listar_alunos().await {
                    Ok(lista) => {
                        chamada.set(Chamada::from_alunos(&lista));
                        alunos.set(lista);
                    }
                    Err(e) => show.emit(ToastMessage::error(e.user_message("Erro ao carregar alunos."))),
                }
            });
            || ()
        });
    }

    let on_data = {
        let data = data.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            data.set(input.value());
        })
    };

    let salvar = {
        let api = api.clone();
        let chamada = chamada.clone();
        let data = data.clone();
        let salvando = salvando.clone();
        let show = toast.show.clone();

        Callback::from(move |_: MouseEvent| {
            let request = match chamada.to_request(&data) {
                Ok(request) => request,
                Err(e) => {
                    show.emit(ToastMessage::error(e.to_string()));
                    return;
                }
            };
            salvando.set(true);

            let api = api.clone();
            let salvando = salvando.clone();
            let show = show.clone();
            spawn_local(async move {
                match api.registrar_chamada(&request).await {
                    Ok(_) => {
                        log::info!(
                            "✅ [CHAMADA] {} registros para {}",
                            request.lista_presenca.len(),
                            request.data
                        );
                        show.emit(ToastMessage::success("Chamada salva!"));
                    }
                    Err(e) => show.emit(ToastMessage::error(e.user_message("Erro ao salvar chamada."))),
                }
                salvando.set(false);
            });
        })
    };

    let linhas = alunos
        .iter()
        .map(|aluno| {
            let presente = chamada.is_presente(&aluno.id);
            let toggle = {
                let chamada = chamada.clone();
                let id = aluno.id.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = (*chamada).clone();
                    next.toggle(&id);
                    chamada.set(next);
                })
            };
            let (class, label) = if presente {
                ("chamada-row chamada-presente", "PRESENTE")
            } else {
                ("chamada-row chamada-ausente", "AUSENTE")
            };
            html! {
                <div key={aluno.id.clone()} {class} onclick={toggle}>
                    <span class="chamada-nome">{ aluno.nome.clone() }</span>
                    <span class="chamada-badge">{ label }</span>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <Toast message={toast.current.clone()} on_close={toast.dismiss.clone()} />

            <div class="page-header page-header-actions">
                <div>
                    <h1>{"🥋 Realizar Chamada"}</h1>
                    <p>{ format!("{} de {} presentes", chamada.presentes(), chamada.len()) }</p>
                </div>
                <input type="date" class="input-field input-date" value={(*data).clone()} onchange={on_data} />
            </div>

            <div class="chamada-list">
                if chamada.is_empty() {
                    <p class="empty-state">{"Nenhum aluno cadastrado."}</p>
                }
                { linhas }
            </div>

            <button class="btn-primary btn-block btn-large" onclick={salvar} disabled={*salvando}>
                { if *salvando { "A guardar..." } else { "Finalizar Chamada" } }
            </button>
        </>
    }
}
