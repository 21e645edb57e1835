// ============================================================================
// REACTIVITY - Valor compartido con subscribers
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Identificador devuelto por `subscribe`, necesario para `unsubscribe`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Callback)>>,
    next_id: Cell<u64>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Leer sin clonar
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sub_id, _)| *sub_id != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    // Los callbacks se copian antes de llamarlos: pueden (des)suscribirse durante la notificación
    fn notify(&self) {
        let callbacks: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_notifies_every_subscriber() {
        let state = ReactiveState::new(0);
        let hits = Rc::new(Cell::new(0));

        let h = hits.clone();
        state.subscribe(move || h.set(h.get() + 1));
        let h = hits.clone();
        state.subscribe(move || h.set(h.get() + 10));

        state.set(5);
        assert_eq!(state.get(), 5);
        assert_eq!(hits.get(), 11);
    }

    #[test]
    fn unsubscribed_callbacks_are_not_called() {
        let state = ReactiveState::new(String::new());
        let hits = Rc::new(Cell::new(0));

        let h = hits.clone();
        let id = state.subscribe(move || h.set(h.get() + 1));
        state.unsubscribe(id);
        state.set("x".to_string());

        assert_eq!(hits.get(), 0);
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn subscriber_may_unsubscribe_itself_while_notified() {
        let state = Rc::new(ReactiveState::new(0));
        let slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));

        let (s, sl) = (state.clone(), slot.clone());
        let id = state.subscribe(move || {
            if let Some(id) = sl.get() {
                s.unsubscribe(id);
            }
        });
        slot.set(Some(id));

        state.set(1);
        assert_eq!(state.subscriber_count(), 0);
    }
}
