use serde::{Deserialize, Serialize};

/// Faixa configurada por el dojo (`GET /dojos/graduacoes`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Graduacao {
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub ordem: u32,
    #[serde(default)]
    pub aulas_necessarias: Option<u32>,
}

/// Nombre de una faixa por id
pub fn graduacao_nome<'a>(graduacoes: &'a [Graduacao], id: &str) -> Option<&'a str> {
    graduacoes
        .iter()
        .find(|g| g.id == id)
        .map(|g| g.nome.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faixa(id: &str, nome: &str, ordem: u32) -> Graduacao {
        Graduacao {
            id: id.into(),
            nome: nome.into(),
            ordem,
            aulas_necessarias: None,
        }
    }

    #[test]
    fn lookup_by_id() {
        let faixas = vec![faixa("g1", "Branca", 1), faixa("g2", "Azul", 2)];
        assert_eq!(graduacao_nome(&faixas, "g2"), Some("Azul"));
        assert_eq!(graduacao_nome(&faixas, "x"), None);
    }
}
