// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

/// Identificador de una suscripción (para darse de baja)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SubscriptionId(u64);

/// Estado reactivo con sistema de notificaciones.
/// Los clones comparten valor y subscribers.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<(SubscriptionId, Callback<T>)>>>,
    next_id: Rc<Cell<u64>>,
}

impl<T: Clone> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Leer el valor sin clonarlo
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
        F: Fn(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    #[cfg(test)]
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sub_id, _)| *sub_id != id);
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Notificar a todos los subscribers.
    /// Se trabaja sobre copias para que un callback pueda (de)suscribirse o leer el estado.
    fn notify(&self) {
        let callbacks: Vec<Callback<T>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        let snapshot = self.get();
        for callback in callbacks {
            callback(&snapshot);
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribers_see_new_value() {
        let state = ReactiveState::new(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        state.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        state.set(2);
        state.set(5);
        assert_eq!(*seen.borrow(), vec![2, 5]);
    }

    #[test]
    fn test_clones_share_subscribers() {
        let state = ReactiveState::new(String::new());
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        state.subscribe(move |_| hits_clone.set(hits_clone.get() + 1));

        let other = state.clone();
        other.set("x".to_string());
        assert_eq!(hits.get(), 1);
        assert_eq!(state.get(), "x");
    }

    #[test]
    fn test_unsubscribe_inside_callback() {
        let state = ReactiveState::new(0);
        let hits = Rc::new(Cell::new(0));
        let id_slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));

        let state_clone = state.clone();
        let hits_clone = hits.clone();
        let id_clone = id_slot.clone();
        let id = state.subscribe(move |_| {
            hits_clone.set(hits_clone.get() + 1);
            if let Some(id) = id_clone.get() {
                state_clone.unsubscribe(id);
            }
        });
        id_slot.set(Some(id));

        state.set(1);
        state.set(2);
        assert_eq!(hits.get(), 1);
        assert_eq!(state.subscriber_count(), 0);
    }
}
