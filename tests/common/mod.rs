pub use array_decorator::*;
pub use checkito::check;

pub const COUNT: usize = 50;

/// Numbers its elements from `{i0}` on every call.
pub fn indexed(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("{{i{index}}}")).collect()
}

/// Keeps numbering its elements across calls.
pub fn sequential() -> impl FnMut(usize) -> Vec<String> {
    let mut next = 0;
    move |count| {
        (0..count)
            .map(|_| {
                let value = format!("{{i{next}}}");
                next += 1;
                value
            })
            .collect()
    }
}

/// Number of elements in a literal joined by the default separator.
pub fn parts(literal: &str) -> usize {
    literal.matches(", ").count() + 1
}

pub fn enabled() -> ArrayDecorator {
    ArrayDecorator {
        enabled: true,
        ..ArrayDecorator::default()
    }
}
