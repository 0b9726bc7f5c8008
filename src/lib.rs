#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod affix;
pub mod array;
pub mod count;
pub mod editor;
pub mod error;
pub mod generate;
pub mod index;
pub mod separator;

pub use crate::{
    affix::AffixDecorator,
    array::ArrayDecorator,
    count::Counts,
    editor::Editable,
    error::Error,
    generate::Generate,
    index::Index,
};

/// Lowest value allowed for [`ArrayDecorator::min_count`].
pub const MIN_MIN_COUNT: usize = 1;
const DEFAULT_MIN_COUNT: usize = 3;
const DEFAULT_MAX_COUNT: usize = 3;
