use std::ops::Deref;
use std::rc::Rc;

use yew::Reducible;

use crate::models::{Aluno, CandidatoGraduacao, Pagamento};

/// Registro con id del servidor
pub trait ItemId {
    fn item_id(&self) -> &str;
}

impl ItemId for Aluno {
    fn item_id(&self) -> &str {
        &self.id
    }
}

impl ItemId for Pagamento {
    fn item_id(&self) -> &str {
        &self.id
    }
}

impl ItemId for CandidatoGraduacao {
    fn item_id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ListaAction<T> {
    /// Respuesta del listado inicial o de una recarga
    Carregar(Vec<T>),
    Prepend(T),
    Replace(T),
    Remove(String),
    /// Marca una operación en curso sobre el registro
    Ocupar(String),
    Liberar(String),
}

/// Lista de una página. Cada acción se aplica sobre el estado vigente,
/// no sobre la copia que tenía el callback al hacer clic.
#[derive(Clone, PartialEq, Debug)]
pub struct Lista<T> {
    itens: Vec<T>,
    carregada: bool,
    ocupados: Vec<String>,
}

impl<T> Default for Lista<T> {
    fn default() -> Self {
        Self {
            itens: Vec::new(),
            carregada: false,
            ocupados: Vec::new(),
        }
    }
}

impl<T: ItemId + Clone> Lista<T> {
    pub fn is_carregada(&self) -> bool {
        self.carregada
    }

    pub fn is_ocupado(&self, id: &str) -> bool {
        self.ocupados.iter().any(|o| o == id)
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.itens.iter().find(|i| i.item_id() == id)
    }

    pub fn apply(&self, action: ListaAction<T>) -> Self {
        let mut next = self.clone();
        match action {
            ListaAction::Carregar(recebidos) => {
                // Lo creado antes de que llegara el primer listado se conserva
                let mut itens: Vec<T> = if self.carregada {
                    Vec::new()
                } else {
                    self.itens
                        .iter()
                        .filter(|local| !recebidos.iter().any(|r| r.item_id() == local.item_id()))
                        .cloned()
                        .collect()
                };
                itens.extend(recebidos);
                next.itens = itens;
                next.carregada = true;
            }
            ListaAction::Prepend(item) => {
                next.itens.retain(|i| i.item_id() != item.item_id());
                next.itens.insert(0, item);
            }
            ListaAction::Replace(item) => {
                if let Some(slot) = next.itens.iter_mut().find(|i| i.item_id() == item.item_id()) {
                    *slot = item;
                }
            }
            ListaAction::Remove(id) => {
                next.itens.retain(|i| i.item_id() != id);
                next.ocupados.retain(|o| *o != id);
            }
            ListaAction::Ocupar(id) => {
                if !next.is_ocupado(&id) {
                    next.ocupados.push(id);
                }
            }
            ListaAction::Liberar(id) => next.ocupados.retain(|o| *o != id),
        }
        next
    }
}

impl<T> Deref for Lista<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.itens
    }
}

impl<T: ItemId + Clone> Reducible for Lista<T> {
    type Action = ListaAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidato(id: &str) -> CandidatoGraduacao {
        CandidatoGraduacao {
            id: id.into(),
            nome: id.to_uppercase(),
            faixa_nome: "Branca".into(),
            total_aulas: 40,
            proxima_faixa_id: "g2".into(),
            proxima_faixa_nome: None,
        }
    }

    fn ids(lista: &Lista<CandidatoGraduacao>) -> Vec<&str> {
        lista.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn overlapping_graduations_do_not_bring_a_candidate_back() {
        let lista = Lista::default()
            .apply(ListaAction::Carregar(vec![candidato("a"), candidato("b"), candidato("c")]))
            .apply(ListaAction::Ocupar("a".into()))
            .apply(ListaAction::Ocupar("b".into()));
        assert!(lista.is_ocupado("a") && lista.is_ocupado("b"));

        // "a" termina primero, luego "b"
        let lista = lista
            .apply(ListaAction::Remove("a".into()))
            .apply(ListaAction::Remove("b".into()));
        assert_eq!(ids(&lista), vec!["c"]);
        assert!(!lista.is_ocupado("a"));
    }

    #[test]
    fn item_created_before_first_load_survives_it() {
        let lista = Lista::default()
            .apply(ListaAction::Prepend(candidato("novo")))
            .apply(ListaAction::Carregar(vec![candidato("a"), candidato("b")]));
        assert_eq!(ids(&lista), vec!["novo", "a", "b"]);
        assert!(lista.is_carregada());

        // Si el listado ya lo trae, no se duplica
        let lista = Lista::default()
            .apply(ListaAction::Prepend(candidato("a")))
            .apply(ListaAction::Carregar(vec![candidato("a"), candidato("b")]));
        assert_eq!(ids(&lista), vec!["a", "b"]);
    }

    #[test]
    fn reload_after_first_load_replaces_everything() {
        let lista = Lista::default()
            .apply(ListaAction::Carregar(vec![candidato("a")]))
            .apply(ListaAction::Prepend(candidato("b")))
            .apply(ListaAction::Carregar(vec![candidato("c")]));
        assert_eq!(ids(&lista), vec!["c"]);
    }

    #[test]
    fn replace_updates_in_place() {
        let mut editado = candidato("b");
        editado.nome = "Bruno".into();
        let lista = Lista::default()
            .apply(ListaAction::Carregar(vec![candidato("a"), candidato("b")]))
            .apply(ListaAction::Replace(editado))
            .apply(ListaAction::Replace(candidato("x")));
        assert_eq!(ids(&lista), vec!["a", "b"]);
        assert_eq!(lista.find("b").map(|c| c.nome.as_str()), Some("Bruno"));
    }
}
