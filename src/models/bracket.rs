// ============================================================================
// BRACKET - Lectura de las llaves generadas por el servidor
// ============================================================================
// Solo se interpreta la primera ronda. El emparejamiento y las rondas
// siguientes son responsabilidad del servidor.
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::BYE_COMPETITOR_ID;

const FIRST_ROUND_KEY: &str = "rodada_1";
const UNNAMED_COMPETITOR: &str = "Atleta sem nome";

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Atleta {
    pub id: String,
    /// El servidor puede mandar `null` si el alumno no tiene nombre
    #[serde(default)]
    pub nome: Option<String>,
}

impl Atleta {
    pub fn is_bye(&self) -> bool {
        self.id == BYE_COMPETITOR_ID
    }

    pub fn display_name(&self) -> String {
        self.nome
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(UNNAMED_COMPETITOR)
            .to_string()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Luta {
    pub atleta_a: Atleta,
    pub atleta_b: Atleta,
    #[serde(default)]
    pub vencedor: Option<Atleta>,
    #[serde(default)]
    pub status: String,
}

/// Una fila de competidor dentro de una lucha
#[derive(Clone, PartialEq, Debug)]
pub struct CompetitorRow {
    pub nome: String,
    pub is_winner: bool,
    pub is_bye: bool,
}

impl CompetitorRow {
    fn new(atleta: &Atleta, vencedor: Option<&Atleta>) -> Self {
        Self {
            nome: atleta.display_name(),
            is_winner: vencedor.is_some_and(|v| v.id == atleta.id),
            is_bye: atleta.is_bye(),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct MatchCard {
    pub rows: [CompetitorRow; 2],
    pub finished: bool,
}

impl From<&Luta> for MatchCard {
    fn from(luta: &Luta) -> Self {
        let vencedor = luta.vencedor.as_ref();
        Self {
            rows: [
                CompetitorRow::new(&luta.atleta_a, vencedor),
                CompetitorRow::new(&luta.atleta_b, vencedor),
            ],
            finished: luta.status == "finalizado",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum BracketLayout {
    /// Todavía no hay llaves para la categoría
    NotGenerated,
    FirstRound(Vec<MatchCard>),
}

impl BracketLayout {
    /// Interpreta la estructura de una categoría (`{rodada_1: [...]}`)
    pub fn from_chaves(chaves: Option<&Value>) -> Self {
        let Some(rodada) = chaves
            .and_then(|c| c.as_object())
            .and_then(|c| c.get(FIRST_ROUND_KEY))
            .filter(|r| !r.is_null())
        else {
            return Self::NotGenerated;
        };

        match serde_json::from_value::<Vec<Luta>>(rodada.clone()) {
            Ok(lutas) => Self::FirstRound(lutas.iter().map(MatchCard::from).collect()),
            Err(e) => {
                log::warn!("⚠️ [BRACKET] rodada_1 con formato inesperado: {}", e);
                Self::NotGenerated
            }
        }
    }

    pub fn matches(&self) -> &[MatchCard] {
        match self {
            Self::NotGenerated => &[],
            Self::FirstRound(cards) => cards,
        }
    }
}

/// Extrae las llaves de una categoría del `chaves_json` del evento
pub fn chaves_for_category(chaves_json: Option<&str>, categoria_id: &str) -> Option<Value> {
    let raw = chaves_json.filter(|raw| !raw.trim().is_empty())?;
    match serde_json::from_str::<Value>(raw) {
        Ok(mut all) => all.get_mut(categoria_id).map(Value::take),
        Err(e) => {
            log::warn!("⚠️ [BRACKET] chaves_json ilegible: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn two_matches() -> Value {
        json!({
            "rodada_1": [
                {
                    "atleta_a": {"id": "a1", "nome": "Ana"},
                    "atleta_b": {"id": "b1", "nome": "Bia"},
                    "vencedor": {"id": "b1", "nome": "Bia"},
                    "status": "finalizado"
                },
                {
                    "atleta_a": {"id": "c1", "nome": "Caio"},
                    "atleta_b": {"id": "d1", "nome": "Davi"},
                    "vencedor": null,
                    "status": "pendente"
                }
            ]
        })
    }

    #[test]
    fn empty_or_missing_round_is_not_generated() {
        assert_eq!(BracketLayout::from_chaves(None), BracketLayout::NotGenerated);
        assert_eq!(
            BracketLayout::from_chaves(Some(&json!({}))),
            BracketLayout::NotGenerated
        );
        assert_eq!(
            BracketLayout::from_chaves(Some(&json!({"rodada_1": null}))),
            BracketLayout::NotGenerated
        );
        assert_eq!(
            BracketLayout::from_chaves(Some(&Value::Null)),
            BracketLayout::NotGenerated
        );
    }

    #[test]
    fn malformed_round_is_not_generated() {
        let chaves = json!({"rodada_1": [{"atleta_a": "Ana"}]});
        assert_eq!(
            BracketLayout::from_chaves(Some(&chaves)),
            BracketLayout::NotGenerated
        );
    }

    #[test]
    fn two_matches_give_two_row_pairs() {
        let chaves = two_matches();
        let layout = BracketLayout::from_chaves(Some(&chaves));
        let cards = layout.matches();
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|c| c.rows.len() == 2));

        assert!(!cards[0].rows[0].is_winner);
        assert!(cards[0].rows[1].is_winner);
        assert!(cards[0].finished);

        assert!(cards[1].rows.iter().all(|r| !r.is_winner));
        assert!(!cards[1].finished);
    }

    #[test]
    fn bye_is_flagged() {
        let chaves = json!({
            "rodada_1": [{
                "atleta_a": {"id": "a1", "nome": "Ana"},
                "atleta_b": {"id": "BYE", "nome": "---"},
                "vencedor": {"id": "a1", "nome": "Ana"},
                "status": "finalizado"
            }]
        });
        let layout = BracketLayout::from_chaves(Some(&chaves));
        let card = &layout.matches()[0];
        assert!(card.rows[0].is_winner);
        assert!(card.rows[1].is_bye);
    }

    #[test]
    fn null_name_keeps_the_round() {
        let chaves = json!({
            "rodada_1": [{
                "atleta_a": {"id": "a1", "nome": null},
                "atleta_b": {"id": "b1"},
                "vencedor": null,
                "status": "pendente"
            }]
        });
        let layout = BracketLayout::from_chaves(Some(&chaves));
        assert_eq!(layout.matches().len(), 1);
        assert_eq!(layout.matches()[0].rows[0].nome, "Atleta sem nome");
        assert_eq!(layout.matches()[0].rows[1].nome, "Atleta sem nome");
    }

    #[test]
    fn category_is_extracted_from_event_json() {
        let raw = json!({"c1": two_matches(), "c2": {"rodada_1": []}}).to_string();
        let chaves = chaves_for_category(Some(&raw), "c1");
        assert!(chaves.is_some());
        assert_eq!(chaves_for_category(Some(&raw), "c9"), None);
        assert_eq!(chaves_for_category(Some("{no"), "c1"), None);
        assert_eq!(chaves_for_category(None, "c1"), None);
    }
}
