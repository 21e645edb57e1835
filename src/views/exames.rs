use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{DashboardLayout, Toast, XpBar};
use crate::hooks::{use_api, use_toast, ToastMessage};
use crate::models::graduacao::graduacao_nome;
use crate::models::{CandidatoGraduacao, Graduacao};
use crate::viewmodels::{Lista, ListaAction};
use crate::views::PageProps;

#[function_component(ExamesView)]
pub fn exames_view(props: &PageProps) -> Html {
    html! {
        <DashboardLayout session={props.session.clone()}>
            <ExamesContent session={props.session.clone()} />
        </DashboardLayout>
    }
}

/// Nombre de la próxima faixa; si el candidato no lo trae, se busca en las graduaciones del dojo
fn proxima_faixa(candidato: &CandidatoGraduacao, graduacoes: &[Graduacao]) -> String {
    candidato
        .proxima_faixa_nome
        .clone()
        .filter(|nome| !nome.is_empty())
        .or_else(|| graduacao_nome(graduacoes, &candidato.proxima_faixa_id).map(str::to_string))
        .unwrap_or_else(|| "próxima faixa".to_string())
}

#[function_component(ExamesContent)]
fn exames_content(props: &PageProps) -> Html {
    let api = use_api(&props.session);
    let toast = use_toast();

    let candidatos = use_reducer(Lista::<CandidatoGraduacao>::default);
    let graduacoes = use_state(Vec::<Graduacao>::new);

    {
        let api = api.clone();
        let candidatos = candidatos.clone();
        let graduacoes = graduacoes.clone();
        let show = toast.show.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let (c, g) = futures::join!(api.candidatos_graduacao(), api.graduacoes());
                match c {
                    Ok(lista) => candidatos.dispatch(ListaAction::Carregar(lista)),
                    Err(e) => show.emit(ToastMessage::error(e.user_message("Erro ao carregar candidatos."))),
                }
                // Solo sirven para etiquetar; sin ellas se usa el nombre del candidato
                match g {
                    Ok(lista) => graduacoes.set(lista),
                    Err(e) => log::warn!("⚠️ [EXAMES] Graduações indisponíveis: {}", e),
                }
            });
            || ()
        });
    }

    let cards = candidatos
        .iter()
        .map(|candidato| {
            let destino = proxima_faixa(candidato, &graduacoes);
            let ocupado = candidatos.is_ocupado(&candidato.id);
            let on_graduar = {
                let api = api.clone();
                let candidatos = candidatos.clone();
                let show = toast.show.clone();
                let aluno_id = candidato.id.clone();
                let faixa_id = candidato.proxima_faixa_id.clone();
                Callback::from(move |_: MouseEvent| {
                    if candidatos.is_ocupado(&aluno_id) {
                        return;
                    }
                    candidatos.dispatch(ListaAction::Ocupar(aluno_id.clone()));
                    let api = api.clone();
                    let candidatos = candidatos.clone();
                    let show = show.clone();
                    let aluno_id = aluno_id.clone();
                    let faixa_id = faixa_id.clone();
                    spawn_local(async move {
                        match api.graduar_aluno(&aluno_id, &faixa_id).await {
                            Ok(_) => {
                                log::info!("🥋 [EXAMES] Aluno {} graduado", aluno_id);
                                candidatos.dispatch(ListaAction::Remove(aluno_id));
                                show.emit(ToastMessage::success("Graduação realizada!"));
                            }
                            Err(e) => {
                                candidatos.dispatch(ListaAction::Liberar(aluno_id));
                                show.emit(ToastMessage::error(e.user_message("Erro ao graduar.")));
                            }
                        }
                    });
                })
            };
            html! {
                <div class="card candidato-card" key={candidato.id.clone()}>
                    <div class="candidato-header">
                        <div>
                            <h3>{ candidato.nome.clone() }</h3>
                            <p class="cell-muted">{ format!("Faixa Atual: {}", candidato.faixa_nome) }</p>
                        </div>
                        <span class="badge badge-pronto">{"PRONTO"}</span>
                    </div>
                    <XpBar percentual={100} aulas={candidato.total_aulas} />
                    <button class="btn-primary btn-block" onclick={on_graduar} disabled={ocupado}>
                        { format!("Graduar para {}", destino) }
                    </button>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <Toast message={toast.current.clone()} on_close={toast.dismiss.clone()} />

            <div class="page-header">
                <h1>{"🏆 Candidatos à Graduação"}</h1>
            </div>

            if candidatos.is_empty() {
                <div class="card"><p class="empty-state">{"Nenhum aluno pronto para graduar."}</p></div>
            }
            <div class="candidato-grid">{ cards }</div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidato(proxima_nome: Option<&str>) -> CandidatoGraduacao {
        CandidatoGraduacao {
            id: "a1".into(),
            nome: "Ana".into(),
            faixa_nome: "Branca".into(),
            total_aulas: 40,
            proxima_faixa_id: "g2".into(),
            proxima_faixa_nome: proxima_nome.map(str::to_string),
        }
    }

    #[test]
    fn target_belt_falls_back_to_dojo_ranks() {
        let graduacoes = vec![Graduacao {
            id: "g2".into(),
            nome: "Amarela".into(),
            ordem: 2,
            aulas_necessarias: Some(40),
        }];
        assert_eq!(proxima_faixa(&candidato(Some("Laranja")), &graduacoes), "Laranja");
        assert_eq!(proxima_faixa(&candidato(None), &graduacoes), "Amarela");
        assert_eq!(proxima_faixa(&candidato(Some("")), &[]), "próxima faixa");
    }
}
