/// Callbacks notified with the whole collection after a persisted change.
pub struct Listeners<T> {
    subs: Vec<Box<dyn Fn(&[T])>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self { subs: Vec::new() }
    }
}

impl<T> Listeners<T> {
    pub fn subscribe<F>(&mut self, f: F)
    where
        F: Fn(&[T]) + 'static,
    {
        self.subs.push(Box::new(f));
    }

    pub fn notify(&self, items: &[T]) {
        for sub in &self.subs {
            sub(items);
        }
    }
}
