use crate::{array::ArrayDecorator, MIN_MIN_COUNT};

/// Which controls of an [`ArrayDecorator`] editor accept input.
///
/// Computed on demand from the configuration; nothing here is stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Editable {
    /// The enable toggle is hidden when the editor is embedded.
    pub toggle: bool,
    pub counts: bool,
    pub separator_enabled: bool,
    pub separator: bool,
    pub show_indices: bool,
    pub indices_format: bool,
    pub use_tuple_indices: bool,
    pub affix: bool,
}

impl ArrayDecorator {
    /// An embedded editor treats the decorator as enabled without touching
    /// [`ArrayDecorator::enabled`].
    pub const fn editable(&self, embedded: bool) -> Editable {
        let active = self.enabled || embedded;
        Editable {
            toggle: !embedded,
            counts: active,
            separator_enabled: active,
            separator: active && self.separator_enabled,
            show_indices: active,
            indices_format: active && self.show_indices,
            use_tuple_indices: active && self.show_indices,
            affix: active,
        }
    }

    /// Sets the lower bound, raising the upper bound if it falls below.
    pub fn set_min_count(&mut self, count: usize) {
        self.min_count = count.max(MIN_MIN_COUNT);
        self.max_count = self.max_count.max(self.min_count);
    }

    /// Sets the upper bound, lowering the lower bound if it rises above.
    pub fn set_max_count(&mut self, count: usize) {
        self.max_count = count.max(MIN_MIN_COUNT);
        self.min_count = self.min_count.min(self.max_count);
    }
}
