#![cfg(feature = "serde")]

use chrono::{NaiveDate, TimeDelta};
use num_bigint::BigInt;
use tempomap::{
    AmountView, Derefable, Field, Iterable, Keymap, Keyword, Lookupable, PointView, Unit,
    Updatable,
};

#[test]
fn field_keymap_from_json() {
    let keymap: Keymap<Field> =
        serde_json::from_str(r#"{"year": "year", "month": "month-of-year"}"#).unwrap();
    assert_eq!(keymap.resolve(":month"), Some(Field::MonthOfYear));

    let point = PointView::new(keymap, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    assert_eq!(point.count(), 2);
    let february = point.update(":month", 2).unwrap();
    assert_eq!(
        february.into_inner(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
}

#[test]
fn unit_keymap_from_json_keeps_overlay() {
    let keymap: Keymap<Unit> = serde_json::from_str(r#"{":secs": "seconds"}"#).unwrap();
    let view = AmountView::new(keymap, TimeDelta::milliseconds(2_500));
    assert_eq!(view.lookup("secs"), Some(&BigInt::from(2)));
    assert_eq!(view.lookup(":millis"), Some(&BigInt::from(2_500)));
    assert_eq!(view.count(), 7);
}

#[test]
fn unknown_descriptor_is_rejected() {
    let result: Result<Keymap<Field>, _> = serde_json::from_str(r#"{"year": "fortnight"}"#);
    assert!(result.is_err());
}

#[test]
fn keyword_serializes_bare() {
    let json = serde_json::to_string(&Keyword::new(":day")).unwrap();
    assert_eq!(json, r#""day""#);
}
