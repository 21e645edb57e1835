use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Aluno {
    pub id: String,
    #[serde(default)]
    pub dojo_id: String,
    pub nome: String,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_faixa")]
    pub faixa_atual: String,
    #[serde(default = "default_true")]
    pub ativo: bool,
    #[serde(default)]
    pub data_inicio: Option<String>,
    #[serde(default)]
    pub criado_em: String,
}

fn default_faixa() -> String {
    "Branca".to_string()
}

fn default_true() -> bool {
    true
}

/// Cuerpo de `POST /alunos`. Los campos vacíos no se envían.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AlunoCreate {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Cuerpo de `PUT /alunos/{id}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AlunoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    /// `Some(None)` se envía como `null` y borra el valor en el servidor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faixa_atual: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ativo: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct GraduarRequest {
    pub nova_gradu_id: String,
}

/// Alumno que ya alcanzó el mínimo de clases para el examen
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CandidatoGraduacao {
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub faixa_nome: String,
    #[serde(default)]
    pub total_aulas: u32,
    pub proxima_faixa_id: String,
    #[serde(default)]
    pub proxima_faixa_nome: Option<String>,
}

/// `GET /alunos/meu-progresso`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MeuProgresso {
    #[serde(default)]
    pub faixa_nome: Option<String>,
    #[serde(default)]
    pub total_aulas: u32,
    #[serde(default)]
    pub progresso_percentual: f64,
}

impl MeuProgresso {
    pub fn faixa_label(&self) -> String {
        self.faixa_nome
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or("Branca")
            .to_uppercase()
    }

    /// Porcentaje entero acotado a 0..=100
    pub fn percent(&self) -> u32 {
        self.progresso_percentual.clamp(0.0, 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aluno_create_omits_blank_fields() {
        let body = serde_json::to_value(AlunoCreate {
            nome: "João".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"nome": "João"}));
    }

    #[test]
    fn aluno_update_sends_null_for_cleared_contact() {
        let body = serde_json::to_value(AlunoUpdate {
            telefone: Some(None),
            email: Some(Some("ana@dojo.com".into())),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"telefone": null, "email": "ana@dojo.com"})
        );
        assert_eq!(serde_json::to_value(AlunoUpdate::default()).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn aluno_defaults_missing_fields() {
        let aluno: Aluno = serde_json::from_str(r#"{"id":"1","nome":"Ana"}"#).unwrap();
        assert_eq!(aluno.faixa_atual, "Branca");
        assert!(aluno.ativo);
    }

    #[test]
    fn progress_percent_is_clamped() {
        let progresso = MeuProgresso {
            faixa_nome: Some("azul".into()),
            total_aulas: 40,
            progresso_percentual: 132.4,
        };
        assert_eq!(progresso.percent(), 100);
        assert_eq!(progresso.faixa_label(), "AZUL");
        assert_eq!(MeuProgresso::default().faixa_label(), "BRANCA");
    }
}
