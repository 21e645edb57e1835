use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{DashboardLayout, StatCard};
use crate::hooks::{use_api, use_session_status};
use crate::utils::format_brl;
use crate::viewmodels::DashboardStats;
use crate::views::PageProps;

#[function_component(DashboardView)]
pub fn dashboard_view(props: &PageProps) -> Html {
    html! {
        <DashboardLayout session={props.session.clone()}>
            <DashboardContent session={props.session.clone()} />
        </DashboardLayout>
    }
}

#[function_component(DashboardContent)]
fn dashboard_content(props: &PageProps) -> Html {
    let status = use_session_status(&props.session);
    let api = use_api(&props.session);
    let stats = use_state(DashboardStats::default);

    {
        let stats = stats.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let (alunos, pagamentos) =
                    futures::join!(api.listar_alunos(), api.listar_pagamentos());
                match (alunos, pagamentos) {
                    (Ok(alunos), Ok(pagamentos)) => {
                        stats.set(DashboardStats::compute(&alunos, &pagamentos));
                    }
                    (Err(e), _) | (_, Err(e)) => {
                        // Las tarjetas se quedan a cero
                        log::error!("❌ [DASHBOARD] Error cargando resumen: {}", e);
                    }
                }
            });
            || ()
        });
    }

    let nome = status
        .session()
        .map(|s| s.usuario.nome.clone())
        .unwrap_or_default();

    html! {
        <>
            <div class="page-header">
                <h1>{"Dashboard"}</h1>
                <p>{"Bem-vindo, "}<strong>{ nome }</strong></p>
            </div>

            <div class="stat-grid">
                <StatCard title="Alunos Ativos" value={stats.alunos.to_string()} icon="👥" color="bg-primary" sub={Some("cadastrados".to_string())} />
                <StatCard title="Receita Confirmada" value={format_brl(stats.receita)} icon="💰" color="bg-green" sub={Some("este mês".to_string())} />
                <StatCard title="Pagamentos" value={stats.pagamentos.to_string()} icon="📈" color="bg-blue" sub={Some("total".to_string())} />
                <StatCard title="Inadimplentes" value={stats.inadimplentes.to_string()} icon="⚠️" color="bg-amber" sub={Some("em atraso".to_string())} />
            </div>

            <div class="card">
                <h2>{"Atividade Recente"}</h2>
                <p class="empty-state">{"Em breve aparecerão os últimos eventos do dojo aqui."}</p>
            </div>
        </>
    }
}
