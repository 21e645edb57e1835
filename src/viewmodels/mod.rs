// ============================================================================
// VIEWMODELS - Lógica de UI pura (validación, filtros, resúmenes)
// ============================================================================
// Sin DOM ni red: las vistas llaman aquí antes de construir cualquier petición
// ============================================================================

pub mod aluno_form;
pub mod auth_forms;
pub mod chamada;
pub mod dashboard_stats;
pub mod evento_form;
pub mod lista;
pub mod pagamento_form;

use thiserror::Error;

pub use aluno_form::{faixa_badge_class, filter_alunos, EditarAlunoForm, NovoAlunoForm, FAIXAS};
pub use auth_forms::{AtivacaoForm, RegisterForm};
pub use chamada::Chamada;
pub use dashboard_stats::{pending_count, DashboardStats};
pub use evento_form::{
    validate_inscricao, CategoriaDraft, InscricaoExternaForm, NovoEventoForm, GENEROS,
};
pub use lista::{ItemId, Lista, ListaAction};
pub use pagamento_form::{nome_aluno, NovaCobrancaForm, StatusSummary};

/// Error de validación local, mostrado tal cual en el formulario
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// `Some(texto recortado)` o `None` si está vacío
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
