/// A source of raw element strings.
///
/// Implementors must return exactly `count` strings. The decorator consumes
/// them in order and never asks twice within a single batch.
pub trait Generate {
    fn generate(&mut self, count: usize) -> Vec<String>;
}

impl<F: FnMut(usize) -> Vec<String>> Generate for F {
    #[inline]
    fn generate(&mut self, count: usize) -> Vec<String> {
        self(count)
    }
}
