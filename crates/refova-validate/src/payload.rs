use refova_model::Values;

/// Read-only context handed to rule predicates and computed messages.
#[derive(Debug)]
pub struct Payload<'a, I: ?Sized> {
    pub values: &'a Values,
    pub changed: &'a [String],
    /// External input the form was derived from.
    pub input: &'a I,
}

impl<'a, I: ?Sized> Payload<'a, I> {
    pub fn new(values: &'a Values, changed: &'a [String], input: &'a I) -> Self {
        Self {
            values,
            changed,
            input,
        }
    }

    pub fn is_changed(&self, key: &str) -> bool {
        self.changed.iter().any(|changed| changed == key)
    }
}

impl<I: ?Sized> Clone for Payload<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: ?Sized> Copy for Payload<'_, I> {}
