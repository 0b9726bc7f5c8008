use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PRESET_AFFIX_DECORATOR_DESCRIPTORS: [&str; 9] = [
    "[@]",
    "{@}",
    "(@)",
    "listOf(@)",
    "setOf(@)",
    "arrayOf(@)",
    "[|@|]",
    "<@>",
    "@",
];

const PLACEHOLDER: char = '@';
const ESCAPE: char = '\\';

/// Wraps a string in a prefix and a suffix described by a single template.
///
/// In [`AffixDecorator::descriptor`], `@` stands for the wrapped string and a
/// backslash makes the next character literal, so `\@` is a plain `@` and
/// `\\` a plain backslash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffixDecorator {
    pub enabled: bool,
    pub descriptor: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("affix descriptor ends with an unfinished escape sequence")]
    TrailingEscape,
}

impl Error {
    pub const fn key(&self) -> &'static str {
        match self {
            Self::TrailingEscape => "affix.error.trailing_escape",
        }
    }
}

impl AffixDecorator {
    pub fn new(enabled: bool, descriptor: impl Into<String>) -> Self {
        Self {
            enabled,
            descriptor: descriptor.into(),
        }
    }

    /// Returns `body` unchanged when disabled.
    pub fn wrap(&self, body: &str) -> String {
        if !self.enabled {
            return body.to_owned();
        }

        let mut wrapped = String::with_capacity(self.descriptor.len() + body.len());
        let mut characters = self.descriptor.chars();
        while let Some(character) = characters.next() {
            match character {
                ESCAPE => wrapped.extend(characters.next()),
                PLACEHOLDER => wrapped.push_str(body),
                character => wrapped.push(character),
            }
        }
        wrapped
    }

    /// Runs whether or not the decorator is enabled.
    pub fn validate(&self) -> Result<(), Error> {
        let mut characters = self.descriptor.chars();
        while let Some(character) = characters.next() {
            if character == ESCAPE && characters.next().is_none() {
                return Err(Error::TrailingEscape);
            }
        }
        Ok(())
    }
}

impl Default for AffixDecorator {
    fn default() -> Self {
        Self::new(false, "@")
    }
}
