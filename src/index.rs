use core::fmt;

pub const INDEX_PLACEHOLDER: &str = "{index}";
pub const VALUE_PLACEHOLDER: &str = "{value}";
pub const PRESET_INDICES_FORMATS: [&str; 3] =
    ["{index}: {value}", "{index}={value}", "\"{index}\": {value}"];

/// Position of an element, as shown in place of `{index}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Index {
    /// Position within its own array; restarts at `0` for every array.
    Flat(usize),
    /// Position of the array within its batch, then position within the array.
    Tuple(usize, usize),
}

impl Index {
    pub const fn new(tuple: bool, position: usize, index: usize) -> Self {
        if tuple {
            Self::Tuple(position, index)
        } else {
            Self::Flat(index)
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat(index) => write!(f, "{index}"),
            Self::Tuple(position, index) => write!(f, "({position},{index})"),
        }
    }
}

/// Substitutes `index` and `value` into `format` by literal replacement.
///
/// `{index}` is replaced first so that placeholder text inside `value` is
/// never expanded. Missing placeholders are simply not substituted.
pub fn annotate(format: &str, index: Index, value: &str) -> String {
    format
        .replace(INDEX_PLACEHOLDER, &index.to_string())
        .replace(VALUE_PLACEHOLDER, value)
}
