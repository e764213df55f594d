/// Watches the progress of a solve.
///
/// A solver hands every event to its observer and carries on. Observers get
/// a shared reference and return nothing, so they can record, log, or count
/// iterations but never change the iterate or stop the loop.
///
/// Any `FnMut(&E)` closure is an observer, and `()` is the observer that
/// ignores everything.
pub trait Observer<E> {
    /// Receives one solver event.
    fn observe(&mut self, event: &E);
}

impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}
