use std::rc::Rc;

pub type ObserverId = u32;

pub type SharedObserver<S, E> = Rc<dyn Observer<S, E>>;

pub type SharedObservers<S, E> = Vec<SharedObserver<S, E>>;

pub trait Observer<S: Subject<E>, E: Clone> {
    /// Identity used by subjects for deduplication and removal.
    fn id(&self) -> ObserverId;

    fn update(&self, source: &S, event: E);
}

pub trait Subject<E: Clone>: Sized {
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, E>>);
    fn unregister_observer(&mut self, observer: Rc<dyn Observer<Self, E>>);
    fn notify_observers(&self, event: E);
}

/// Appends `observer` unless one with the same identity is already present.
///
/// Returns `true` when the observer was added.
pub fn insert_unique<S, E>(
    observers: &mut SharedObservers<S, E>,
    observer: SharedObserver<S, E>,
) -> bool
where
    S: Subject<E>,
    E: Clone,
{
    let id = observer.id();
    (!observers.iter().any(|obs| obs.id() == id))
        .then(|| observers.push(observer))
        .is_some()
}

/// Drops every observer carrying `id` and returns how many were removed.
pub fn remove_by_id<S, E>(observers: &mut SharedObservers<S, E>, id: ObserverId) -> usize
where
    S: Subject<E>,
    E: Clone,
{
    let before = observers.len();
    observers.retain(|obs| obs.id() != id);
    before - observers.len()
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::{insert_unique, remove_by_id, Observer, ObserverId, SharedObservers, Subject};

    #[derive(Default)]
    struct Counter {
        observers: SharedObservers<Self, u8>,
    }

    impl Subject<u8> for Counter {
        fn register_observer(&mut self, observer: Rc<dyn Observer<Self, u8>>) {
            insert_unique(&mut self.observers, observer);
        }

        fn unregister_observer(&mut self, observer: Rc<dyn Observer<Self, u8>>) {
            remove_by_id(&mut self.observers, observer.id());
        }

        fn notify_observers(&self, event: u8) {
            for obs in &self.observers {
                obs.update(self, event);
            }
        }
    }

    struct Tally {
        id: ObserverId,
        seen: RefCell<Vec<u8>>,
    }

    impl Tally {
        fn new(id: ObserverId) -> Rc<Self> {
            Rc::new(Tally {
                id,
                seen: RefCell::new(vec![]),
            })
        }
    }

    impl Observer<Counter, u8> for Tally {
        fn id(&self) -> ObserverId {
            self.id
        }

        fn update(&self, _: &Counter, event: u8) {
            self.seen.borrow_mut().push(event);
        }
    }

    #[test]
    fn test_insert_unique() {
        // Given
        let mut observers: SharedObservers<Counter, u8> = vec![];

        // When
        let first = insert_unique::<Counter, u8>(&mut observers, Tally::new(1));
        let duplicate = insert_unique::<Counter, u8>(&mut observers, Tally::new(1));
        let other = insert_unique::<Counter, u8>(&mut observers, Tally::new(2));

        // Then
        assert!(first, "Should add an unknown identity");
        assert!(!duplicate, "Should skip a known identity");
        assert!(other, "Should add another identity");
        assert_eq!(
            vec![1, 2],
            observers.iter().map(|o| o.id()).collect::<Vec<_>>(),
            "Should keep insertion order"
        );
    }

    #[test]
    fn test_remove_by_id() {
        // Given
        let mut observers: SharedObservers<Counter, u8> = vec![Tally::new(1), Tally::new(2)];

        // When
        let missing = remove_by_id(&mut observers, 9);
        let removed = remove_by_id(&mut observers, 1);

        // Then
        assert_eq!(0, missing, "Should ignore unknown identity");
        assert_eq!(1, removed);
        assert_eq!(
            vec![2],
            observers.iter().map(|o| o.id()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_subject_notifies_in_order() {
        // Given
        let mut counter = Counter::default();
        let first = Tally::new(1);
        let second = Tally::new(2);
        counter.register_observer(first.clone());
        counter.register_observer(second.clone());
        counter.register_observer(first.clone());

        // When
        counter.notify_observers(3);
        counter.unregister_observer(second.clone());
        counter.notify_observers(4);

        // Then
        assert_eq!(vec![3, 4], *first.seen.borrow());
        assert_eq!(
            vec![3],
            *second.seen.borrow(),
            "Should not notify an unregistered observer"
        );
    }
}
