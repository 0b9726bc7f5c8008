pub mod common;
use common::*;

#[test]
fn succeeds_for_default_state() {
    assert_eq!(ArrayDecorator::default().validate(), Ok(()));
}

#[test]
fn fails_for_zero_min_count() {
    let decorator = ArrayDecorator {
        min_count: 0,
        ..ArrayDecorator::default()
    };
    assert_eq!(decorator.validate(), Err(Error::MinCountTooLow));
    assert_eq!(Error::MinCountTooLow.key(), "array.error.min_count_too_low");
}

#[test]
fn checks_min_count_floor_before_ordering() {
    let decorator = ArrayDecorator {
        min_count: 0,
        max_count: 0,
        ..ArrayDecorator::default()
    };
    assert_eq!(decorator.validate(), Err(Error::MinCountTooLow));
}

#[test]
fn succeeds_for_min_count_equals_max_count() {
    let decorator = ArrayDecorator {
        min_count: 368,
        max_count: 368,
        ..ArrayDecorator::default()
    };
    assert_eq!(decorator.validate(), Ok(()));
}

#[test]
fn fails_for_min_count_above_max_count() {
    let decorator = ArrayDecorator {
        min_count: 14,
        max_count: 2,
        ..ArrayDecorator::default()
    };
    assert_eq!(decorator.validate(), Err(Error::MinCountAboveMax));
    assert_eq!(Error::MinCountAboveMax.key(), "array.error.min_count_above_max");
}

#[test]
fn propagates_invalid_affix_decorator() {
    let decorator = ArrayDecorator {
        affix_decorator: AffixDecorator::new(false, "\\"),
        ..ArrayDecorator::default()
    };
    let error = decorator.validate().unwrap_err();
    assert_eq!(error, Error::Affix(affix::Error::TrailingEscape));
    assert_eq!(error.key(), "affix.error.trailing_escape");
    assert_eq!(error.to_string(), affix::Error::TrailingEscape.to_string());
}

#[test]
fn ignores_malformed_indices_format() {
    let decorator = ArrayDecorator {
        show_indices: true,
        indices_format: "no placeholders".into(),
        ..ArrayDecorator::default()
    };
    assert_eq!(decorator.validate(), Ok(()));
}

#[check(1usize..=1_000, 0usize..=1_000)]
fn accepts_ordered_bounds(min_count: usize, extra: usize) {
    let decorator = ArrayDecorator {
        min_count,
        max_count: min_count + extra,
        ..ArrayDecorator::default()
    };
    assert_eq!(decorator.validate(), Ok(()));
}
