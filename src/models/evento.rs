use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Categoria {
    pub id: String,
    pub nome: String,
    #[serde(default = "default_genero")]
    pub genero: String,
}

fn default_genero() -> String {
    "Misto".to_string()
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Evento {
    pub id: String,
    pub titulo: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub data_evento: String,
    #[serde(default)]
    pub tipo: String,
    #[serde(default)]
    pub visivel_rede: bool,
    #[serde(default)]
    pub valor_inscricao: f64,
    #[serde(default)]
    pub categorias: Vec<Categoria>,
    /// Llaves serializadas por el servidor: `{categoria_id: {rodada_1: [...]}}`
    #[serde(default)]
    pub chaves_json: Option<String>,
    /// Solo lo rellena el feed de la red
    #[serde(default)]
    pub dojo_nome: Option<String>,
}

impl Evento {
    pub fn tipo(&self) -> EventoTipo {
        EventoTipo::parse(&self.tipo)
    }

    pub fn is_publico(&self) -> bool {
        self.tipo() == EventoTipo::Publico
    }

    pub fn organizador(&self) -> &str {
        self.dojo_nome
            .as_deref()
            .map(str::trim)
            .filter(|nome| !nome.is_empty())
            .unwrap_or(ORGANIZADOR_PADRAO)
    }
}

const ORGANIZADOR_PADRAO: &str = "Dojo Organizador";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EventoTipo {
    Interno,
    Publico,
}

impl EventoTipo {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("publico") {
            Self::Publico
        } else {
            Self::Interno
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interno => "interno",
            Self::Publico => "publico",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CategoriaCreate {
    pub nome: String,
    pub genero: String,
}

/// Cuerpo de `POST /eventos`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EventoCreate {
    pub titulo: String,
    pub descricao: String,
    pub data_evento: String,
    pub tipo: String,
    pub visivel_rede: bool,
    pub valor_inscricao: f64,
    pub categorias: Vec<CategoriaCreate>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct GerarChavesRequest {
    pub categoria_id: String,
    pub metodo: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct InscricaoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct InscricaoResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub payment_url: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct InscricaoExternaRequest {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub categoria_id: String,
}

/// Respuesta genérica `{ "message": ... }`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evento_from_feed_payload() {
        let evento: Evento = serde_json::from_str(
            r#"{
                "id": "e1",
                "titulo": "Open de Karatê",
                "data_evento": "2026-05-10T09:00:00",
                "tipo": "publico",
                "visivel_rede": true,
                "valor_inscricao": 80.0,
                "categorias": [{"id": "c1", "nome": "Absoluto Preta"}],
                "chaves_json": null
            }"#,
        )
        .unwrap();
        assert!(evento.is_publico());
        assert_eq!(evento.categorias[0].genero, "Misto");
        assert_eq!(evento.chaves_json, None);
        assert_eq!(evento.organizador(), "Dojo Organizador");
    }

    #[test]
    fn organizer_comes_from_feed_dojo_name() {
        let mut evento: Evento = serde_json::from_value(serde_json::json!({
            "id": "e2",
            "titulo": "Copa Regional",
            "data_evento": "2026-06-01",
            "dojo_nome": "Dojo Shinkai"
        }))
        .unwrap();
        assert_eq!(evento.organizador(), "Dojo Shinkai");

        evento.dojo_nome = Some("  ".into());
        assert_eq!(evento.organizador(), "Dojo Organizador");
    }

    #[test]
    fn inscricao_without_category_sends_empty_object() {
        let body = serde_json::to_value(InscricaoRequest { categoria_id: None }).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }
}
