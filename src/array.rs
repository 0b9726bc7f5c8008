use crate::{
    affix::AffixDecorator,
    count::{self, Counts},
    error::Error,
    generate::Generate,
    index::{self, Index},
    separator::{self, DEFAULT_SEPARATOR},
    DEFAULT_MAX_COUNT, DEFAULT_MIN_COUNT, MIN_MIN_COUNT,
};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Arranges generated strings into array literals.
///
/// This is plain configuration; every call to
/// [`ArrayDecorator::generate_strings`] is self-contained.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArrayDecorator {
    /// When `false`, generator output is passed through untouched.
    pub enabled: bool,
    pub min_count: usize,
    pub max_count: usize,
    /// When `false`, [`DEFAULT_SEPARATOR`] joins the elements instead.
    pub separator_enabled: bool,
    /// Raw user text; `\n` (backslash, `n`) is decoded to a line feed.
    pub separator: String,
    pub show_indices: bool,
    /// Literal template with `{index}` and `{value}` placeholders.
    pub indices_format: String,
    /// Shows `(array,element)` instead of `element` for `{index}`.
    pub use_tuple_indices: bool,
    pub affix_decorator: AffixDecorator,
}

impl ArrayDecorator {
    /// Generates `count` array literals using a fresh random seed.
    pub fn generate_strings<G: Generate>(&self, count: usize, generator: G) -> Vec<String> {
        self.generate_strings_with(count, count::seed(), generator)
    }

    /// Generates `count` array literals.
    ///
    /// One length per array is sampled from `min_count..=max_count`, the
    /// generator is asked once for the sum of those lengths, and its output is
    /// sliced back into consecutive groups in order.
    ///
    /// # Panics
    ///
    /// When the generator returns a different number of strings than requested.
    pub fn generate_strings_with<G: Generate>(
        &self,
        count: usize,
        seed: u64,
        mut generator: G,
    ) -> Vec<String> {
        if !self.enabled {
            debug!("array decorator disabled, passing {count} strings through");
            return generator.generate(count);
        }

        let lengths = Counts::new(self.min_count..=self.max_count, seed)
            .take(count)
            .collect::<Vec<_>>();
        let total = lengths.iter().sum::<usize>();
        debug!("generating {count} arrays from {total} elements");

        let elements = generator.generate(total);
        assert_eq!(
            elements.len(),
            total,
            "generator returned {} strings where {} were requested",
            elements.len(),
            total
        );
        self.render_all(split(&elements, &lengths))
    }

    /// Renders the group at batch `position` into a single literal.
    pub fn render(&self, position: usize, group: &[String]) -> String {
        let separator = self.separator();
        let body = group
            .iter()
            .enumerate()
            .map(|(index, value)| self.annotate(position, index, value))
            .collect::<Vec<_>>()
            .join(&*separator);
        trace!("rendered array {position} with {} elements", group.len());
        self.affix_decorator.wrap(&body)
    }

    /// The joiner placed between consecutive elements.
    pub fn separator(&self) -> Cow<'_, str> {
        if self.separator_enabled {
            separator::unescape(&self.separator)
        } else {
            Cow::Borrowed(DEFAULT_SEPARATOR)
        }
    }

    /// Checks the count bounds, then the affix decorator. The first failure wins.
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_count < MIN_MIN_COUNT {
            Err(Error::MinCountTooLow)
        } else if self.min_count > self.max_count {
            Err(Error::MinCountAboveMax)
        } else {
            self.affix_decorator.validate().map_err(Error::Affix)
        }
    }

    fn annotate<'a>(&self, position: usize, index: usize, value: &'a str) -> Cow<'a, str> {
        if self.show_indices {
            let index = Index::new(self.use_tuple_indices, position, index);
            Cow::Owned(index::annotate(&self.indices_format, index, value))
        } else {
            Cow::Borrowed(value)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn render_all(&self, groups: Vec<&[String]>) -> Vec<String> {
        groups
            .into_iter()
            .enumerate()
            .map(|(position, group)| self.render(position, group))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn render_all(&self, groups: Vec<&[String]>) -> Vec<String> {
        use rayon::prelude::*;

        groups
            .into_par_iter()
            .enumerate()
            .map(|(position, group)| self.render(position, group))
            .collect()
    }
}

impl Default for ArrayDecorator {
    fn default() -> Self {
        Self {
            enabled: false,
            min_count: DEFAULT_MIN_COUNT,
            max_count: DEFAULT_MAX_COUNT,
            separator_enabled: true,
            separator: DEFAULT_SEPARATOR.into(),
            show_indices: false,
            indices_format: index::PRESET_INDICES_FORMATS[0].into(),
            use_tuple_indices: false,
            affix_decorator: AffixDecorator::new(true, "[@]"),
        }
    }
}

fn split<'a>(mut elements: &'a [String], lengths: &[usize]) -> Vec<&'a [String]> {
    let mut groups = Vec::with_capacity(lengths.len());
    for &length in lengths {
        let (group, rest) = elements.split_at(length);
        groups.push(group);
        elements = rest;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_in_order() {
        let elements = ["a", "b", "c", "d", "e"].map(String::from);
        let groups = split(&elements, &[2, 0, 3]);
        assert_eq!(groups, [&elements[..2], &elements[2..2], &elements[2..]]);
    }

    #[test]
    fn renders_empty_group_as_wrapped_empty_body() {
        assert_eq!(ArrayDecorator::default().render(0, &[]), "[]");
    }
}
