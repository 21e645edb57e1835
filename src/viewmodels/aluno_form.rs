use crate::models::{Aluno, AlunoCreate, AlunoUpdate};
use crate::viewmodels::{non_blank, ValidationError};

/// Estado del modal "Cadastrar Aluno"
#[derive(Clone, PartialEq, Debug, Default)]
pub struct NovoAlunoForm {
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
    pub email: String,
}

impl NovoAlunoForm {
    /// Validación previa a cualquier llamada de red
    pub fn validate(&self) -> Result<AlunoCreate, ValidationError> {
        let nome = non_blank(&self.nome).ok_or_else(|| ValidationError::new("Nome é obrigatório."))?;
        Ok(AlunoCreate {
            nome,
            cpf: non_blank(&self.cpf),
            telefone: non_blank(&self.telefone),
            email: non_blank(&self.email),
        })
    }
}

/// Edición de contacto, faixa y estado de un alumno existente
#[derive(Clone, PartialEq, Debug, Default)]
pub struct EditarAlunoForm {
    pub id: String,
    pub nome: String,
    pub telefone: String,
    pub email: String,
    pub faixa_atual: String,
    pub ativo: bool,
}

impl From<&Aluno> for EditarAlunoForm {
    fn from(aluno: &Aluno) -> Self {
        Self {
            id: aluno.id.clone(),
            nome: aluno.nome.clone(),
            telefone: aluno.telefone.clone().unwrap_or_default(),
            email: aluno.email.clone().unwrap_or_default(),
            faixa_atual: aluno.faixa_atual.clone(),
            ativo: aluno.ativo,
        }
    }
}

impl EditarAlunoForm {
    /// Solo se envían los campos que cambiaron
    pub fn changes(&self, original: &Aluno) -> Result<AlunoUpdate, ValidationError> {
        let nome = non_blank(&self.nome).ok_or_else(|| ValidationError::new("Nome é obrigatório."))?;
        let telefone = non_blank(&self.telefone);
        let email = non_blank(&self.email);
        let faixa = non_blank(&self.faixa_atual);

        Ok(AlunoUpdate {
            nome: (nome != original.nome).then_some(nome),
            telefone: changed_contact(telefone, original.telefone.as_deref()),
            email: changed_contact(email, original.email.as_deref()),
            faixa_atual: faixa.filter(|f| *f != original.faixa_atual),
            ativo: (self.ativo != original.ativo).then_some(self.ativo),
        })
    }
}

/// Contacto editado: `Some(None)` cuando se vació un valor que existía
fn changed_contact(novo: Option<String>, atual: Option<&str>) -> Option<Option<String>> {
    let atual = atual.and_then(non_blank);
    (novo != atual).then_some(novo)
}

/// Búsqueda por nombre, sin distinguir mayúsculas
pub fn filter_alunos<'a>(alunos: &'a [Aluno], busca: &str) -> Vec<&'a Aluno> {
    let busca = busca.trim().to_lowercase();
    alunos
        .iter()
        .filter(|a| busca.is_empty() || a.nome.to_lowercase().contains(&busca))
        .collect()
}

/// Faixas en el orden del selector de edición
pub const FAIXAS: [&str; 7] = ["Branca", "Amarela", "Laranja", "Verde", "Azul", "Marrom", "Preta"];

/// Clase CSS del badge de la faixa
pub fn faixa_badge_class(faixa: &str) -> &'static str {
    match faixa {
        "Branca" => "faixa faixa-branca",
        "Amarela" => "faixa faixa-amarela",
        "Laranja" => "faixa faixa-laranja",
        "Verde" => "faixa faixa-verde",
        "Azul" => "faixa faixa-azul",
        "Marrom" => "faixa faixa-marrom",
        "Preta" => "faixa faixa-preta",
        _ => "faixa faixa-outra",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aluno(id: &str, nome: &str) -> Aluno {
        Aluno {
            id: id.into(),
            dojo_id: "d1".into(),
            nome: nome.into(),
            cpf: None,
            telefone: Some("(11) 99999-9999".into()),
            email: None,
            faixa_atual: "Branca".into(),
            ativo: true,
            data_inicio: None,
            criado_em: "2025-01-01T00:00:00".into(),
        }
    }

    #[test]
    fn empty_name_is_rejected_before_any_request() {
        let form = NovoAlunoForm {
            nome: "   ".into(),
            email: "joao@email.com".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::new("Nome é obrigatório."))
        );
    }

    #[test]
    fn valid_form_trims_and_drops_blanks() {
        let form = NovoAlunoForm {
            nome: " João Silva ".into(),
            cpf: "".into(),
            telefone: "(11) 99999-9999".into(),
            email: " ".into(),
        };
        let create = form.validate().unwrap();
        assert_eq!(create.nome, "João Silva");
        assert_eq!(create.cpf, None);
        assert_eq!(create.telefone.as_deref(), Some("(11) 99999-9999"));
        assert_eq!(create.email, None);
    }

    #[test]
    fn search_is_case_insensitive() {
        let alunos = vec![aluno("1", "Ana Souza"), aluno("2", "Bruno"), aluno("3", "Mariana")];
        let found: Vec<&str> = filter_alunos(&alunos, "ANA")
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(found, vec!["1", "3"]);
        assert_eq!(filter_alunos(&alunos, "").len(), 3);
    }

    #[test]
    fn edit_sends_only_changes() {
        let original = aluno("1", "Ana");
        let mut form = EditarAlunoForm::from(&original);
        assert_eq!(form.changes(&original).unwrap(), AlunoUpdate::default());

        form.faixa_atual = "Amarela".into();
        form.ativo = false;
        form.email = "ana@dojo.com".into();
        let update = form.changes(&original).unwrap();
        assert_eq!(update.faixa_atual.as_deref(), Some("Amarela"));
        assert_eq!(update.ativo, Some(false));
        assert_eq!(update.email, Some(Some("ana@dojo.com".to_string())));
        assert_eq!(update.nome, None);
        assert_eq!(update.telefone, None);
    }

    #[test]
    fn clearing_contact_sends_null() {
        let mut original = aluno("1", "Ana");
        original.email = Some("ana@dojo.com".into());
        let mut form = EditarAlunoForm::from(&original);
        form.telefone = "  ".into();
        form.email = String::new();

        let update = form.changes(&original).unwrap();
        assert_eq!(update.telefone, Some(None));
        assert_eq!(update.email, Some(None));
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"telefone": null, "email": null})
        );

        // Vacío que ya estaba vacío: nada que enviar
        let sem_email = aluno("2", "Bia");
        let mut form = EditarAlunoForm::from(&sem_email);
        form.email = " ".into();
        assert_eq!(form.changes(&sem_email).unwrap().email, None);
    }

    #[test]
    fn unknown_faixa_gets_neutral_badge() {
        assert_eq!(faixa_badge_class("Preta"), "faixa faixa-preta");
        assert_eq!(faixa_badge_class("Coral"), "faixa faixa-outra");
    }
}
