use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PresencaItem {
    pub aluno_id: String,
    pub presente: bool,
}

/// Cuerpo de `POST /presencas/bulk`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PresencaBulkRequest {
    pub data: String,
    pub lista_presenca: Vec<PresencaItem>,
}
