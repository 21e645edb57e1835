use crate::models::{Aluno, PresencaBulkRequest, PresencaItem};
use crate::utils::date_input_to_iso;
use crate::viewmodels::ValidationError;

/// Lista de asistencia de un día. Conserva el orden de la lista de alumnos.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Chamada {
    entries: Vec<(String, bool)>,
}

impl Chamada {
    /// Todos empiezan presentes
    pub fn from_alunos(alunos: &[Aluno]) -> Self {
        Self {
            entries: alunos.iter().map(|a| (a.id.clone(), true)).collect(),
        }
    }

    pub fn is_presente(&self, aluno_id: &str) -> bool {
        self.entries
            .iter()
            .find(|(id, _)| id == aluno_id)
            .map(|(_, presente)| *presente)
            .unwrap_or(false)
    }

    pub fn toggle(&mut self, aluno_id: &str) {
        if let Some((_, presente)) = self.entries.iter_mut().find(|(id, _)| id == aluno_id) {
            *presente = !*presente;
        }
    }

    pub fn presentes(&self) -> usize {
        self.entries.iter().filter(|(_, p)| *p).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cuerpo de `/presencas/bulk` para la fecha del `<input type="date">`
    pub fn to_request(&self, data: &str) -> Result<PresencaBulkRequest, ValidationError> {
        let data = date_input_to_iso(data).ok_or_else(|| ValidationError::new("Data inválida."))?;
        if self.entries.is_empty() {
            return Err(ValidationError::new("Nenhum aluno para registrar."));
        }
        Ok(PresencaBulkRequest {
            data,
            lista_presenca: self
                .entries
                .iter()
                .map(|(aluno_id, presente)| PresencaItem {
                    aluno_id: aluno_id.clone(),
                    presente: *presente,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alunos() -> Vec<Aluno> {
        serde_json::from_value(serde_json::json!([
            {"id": "a1", "nome": "Ana"},
            {"id": "a2", "nome": "Bruno"}
        ]))
        .unwrap()
    }

    #[test]
    fn everyone_starts_present_and_toggles() {
        let mut chamada = Chamada::from_alunos(&alunos());
        assert_eq!(chamada.presentes(), 2);

        chamada.toggle("a2");
        assert!(!chamada.is_presente("a2"));
        chamada.toggle("a2");
        assert!(chamada.is_presente("a2"));

        chamada.toggle("desconhecido");
        assert_eq!(chamada.len(), 2);
    }

    #[test]
    fn request_keeps_order_and_iso_date() {
        let mut chamada = Chamada::from_alunos(&alunos());
        chamada.toggle("a1");
        let request = chamada.to_request("2025-03-01").unwrap();
        assert_eq!(request.data, "2025-03-01T00:00:00.000Z");
        assert_eq!(request.lista_presenca[0].aluno_id, "a1");
        assert!(!request.lista_presenca[0].presente);
        assert!(request.lista_presenca[1].presente);
    }

    #[test]
    fn invalid_date_or_empty_list_is_rejected() {
        assert!(Chamada::from_alunos(&alunos()).to_request("").is_err());
        assert!(Chamada::default().to_request("2025-03-01").is_err());
    }
}
