use crate::models::{CategoriaCreate, Evento, EventoCreate, EventoTipo, InscricaoExternaRequest};
use crate::viewmodels::{non_blank, ValidationError};

pub const GENEROS: [&str; 3] = ["Misto", "Masculino", "Feminino"];

#[derive(Clone, PartialEq, Debug)]
pub struct CategoriaDraft {
    pub nome: String,
    pub genero: String,
}

impl Default for CategoriaDraft {
    fn default() -> Self {
        Self {
            nome: String::new(),
            genero: GENEROS[0].to_string(),
        }
    }
}

/// Formulario "Novo Evento"
#[derive(Clone, PartialEq, Debug)]
pub struct NovoEventoForm {
    pub titulo: String,
    pub descricao: String,
    pub data_evento: String,
    pub tipo: EventoTipo,
    pub visivel_rede: bool,
    pub valor_inscricao: String,
    pub categorias: Vec<CategoriaCreate>,
}

impl Default for NovoEventoForm {
    fn default() -> Self {
        Self {
            titulo: String::new(),
            descricao: String::new(),
            data_evento: String::new(),
            tipo: EventoTipo::Interno,
            visivel_rede: false,
            valor_inscricao: "0".to_string(),
            categorias: Vec::new(),
        }
    }
}

impl NovoEventoForm {
    /// Añade la categoría del borrador; los nombres vacíos se ignoran
    pub fn add_categoria(&mut self, draft: &CategoriaDraft) -> bool {
        let Some(nome) = non_blank(&draft.nome) else {
            return false;
        };
        self.categorias.push(CategoriaCreate {
            nome,
            genero: draft.genero.clone(),
        });
        true
    }

    pub fn remove_categoria(&mut self, index: usize) {
        if index < self.categorias.len() {
            self.categorias.remove(index);
        }
    }

    pub fn validate(&self) -> Result<EventoCreate, ValidationError> {
        let titulo =
            non_blank(&self.titulo).ok_or_else(|| ValidationError::new("Título é obrigatório."))?;
        let data_evento = non_blank(&self.data_evento)
            .ok_or_else(|| ValidationError::new("Data do evento é obrigatória."))?;

        let valor_inscricao = match non_blank(&self.valor_inscricao) {
            None => 0.0,
            Some(raw) => raw
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| ValidationError::new("Valor de inscrição inválido."))?,
        };

        // Las categorías solo tienen sentido en competiciones públicas
        let categorias = match self.tipo {
            EventoTipo::Publico => self.categorias.clone(),
            EventoTipo::Interno => Vec::new(),
        };

        Ok(EventoCreate {
            titulo,
            descricao: self.descricao.trim().to_string(),
            data_evento,
            tipo: self.tipo.as_str().to_string(),
            visivel_rede: self.visivel_rede,
            valor_inscricao,
            categorias,
        })
    }
}

/// Inscripción de un alumno desde su dashboard
pub fn validate_inscricao(
    evento: &Evento,
    categoria_id: Option<&str>,
) -> Result<Option<String>, ValidationError> {
    let categoria_id = categoria_id.and_then(non_blank);
    if evento.is_publico() && categoria_id.is_none() {
        return Err(ValidationError::new("Selecione uma categoria para competir."));
    }
    if let Some(id) = &categoria_id {
        if !evento.categorias.iter().any(|c| &c.id == id) {
            return Err(ValidationError::new("Categoria não pertence a este evento."));
        }
    }
    Ok(categoria_id)
}

/// Inscripción externa desde la página pública del evento
#[derive(Clone, PartialEq, Debug, Default)]
pub struct InscricaoExternaForm {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub categoria_id: String,
}

impl InscricaoExternaForm {
    pub fn validate(&self) -> Result<InscricaoExternaRequest, ValidationError> {
        let nome = non_blank(&self.nome).ok_or_else(|| ValidationError::new("Nome é obrigatório."))?;
        let email = non_blank(&self.email)
            .filter(|e| e.contains('@'))
            .ok_or_else(|| ValidationError::new("Email inválido."))?;
        let telefone =
            non_blank(&self.telefone).ok_or_else(|| ValidationError::new("WhatsApp é obrigatório."))?;
        let categoria_id = non_blank(&self.categoria_id)
            .ok_or_else(|| ValidationError::new("Selecione uma categoria."))?;
        Ok(InscricaoExternaRequest {
            nome,
            email,
            telefone,
            categoria_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evento(tipo: &str) -> Evento {
        serde_json::from_value(serde_json::json!({
            "id": "e1",
            "titulo": "Open",
            "data_evento": "2026-05-10T09:00:00",
            "tipo": tipo,
            "categorias": [{"id": "c1", "nome": "Absoluto"}]
        }))
        .unwrap()
    }

    #[test]
    fn blank_category_names_are_ignored() {
        let mut form = NovoEventoForm::default();
        assert!(!form.add_categoria(&CategoriaDraft::default()));
        assert!(form.add_categoria(&CategoriaDraft {
            nome: "Absoluto Preta".into(),
            genero: "Masculino".into(),
        }));
        assert_eq!(form.categorias.len(), 1);

        form.remove_categoria(5);
        assert_eq!(form.categorias.len(), 1);
        form.remove_categoria(0);
        assert!(form.categorias.is_empty());
    }

    #[test]
    fn internal_events_drop_categories() {
        let mut form = NovoEventoForm {
            titulo: "Exame de Faixa".into(),
            data_evento: "2026-06-01T10:00".into(),
            ..Default::default()
        };
        form.add_categoria(&CategoriaDraft {
            nome: "Adulto".into(),
            genero: "Misto".into(),
        });
        assert!(form.validate().unwrap().categorias.is_empty());

        form.tipo = EventoTipo::Publico;
        let create = form.validate().unwrap();
        assert_eq!(create.tipo, "publico");
        assert_eq!(create.categorias.len(), 1);
        assert_eq!(create.valor_inscricao, 0.0);
    }

    #[test]
    fn event_requires_title_and_date() {
        let form = NovoEventoForm::default();
        assert_eq!(form.validate(), Err(ValidationError::new("Título é obrigatório.")));
    }

    #[test]
    fn public_registration_requires_category() {
        let publico = evento("publico");
        assert_eq!(
            validate_inscricao(&publico, None),
            Err(ValidationError::new("Selecione uma categoria para competir."))
        );
        assert_eq!(validate_inscricao(&publico, Some("c1")), Ok(Some("c1".into())));
        assert!(validate_inscricao(&publico, Some("c9")).is_err());
        assert_eq!(validate_inscricao(&evento("interno"), Some("")), Ok(None));
    }

    #[test]
    fn external_registration_checks_email() {
        let form = InscricaoExternaForm {
            nome: "Rafa".into(),
            email: "rafa.email.com".into(),
            telefone: "11999".into(),
            categoria_id: "c1".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::new("Email inválido.")));
    }
}
