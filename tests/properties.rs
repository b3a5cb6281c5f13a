use chrono::{NaiveDate, NaiveTime, TimeDelta};
use num_bigint::BigInt;
use proptest::prelude::*;
use tempomap::{
    AmountView, Derefable, FieldView, Keymap, Lookupable, PointView, Updatable, Wrapped,
};

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn time_strategy() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60, 0u32..60, 0u32..1_000_000_000)
        .prop_map(|(h, m, s, n)| NaiveTime::from_hms_nano_opt(h, m, s, n).unwrap())
}

proptest! {
    #[test]
    fn prop_dereference_returns_original(date in date_strategy(), time in time_strategy()) {
        let datetime = date.and_time(time);
        prop_assert_eq!(*Wrapped::new(datetime).dereference(), datetime);
        prop_assert_eq!(*FieldView::new(Keymap::iso(), datetime).dereference(), datetime);
        prop_assert_eq!(PointView::new(Keymap::iso(), datetime).into_inner(), datetime);
    }

    #[test]
    fn prop_equality_is_symmetric(a in date_strategy(), b in date_strategy()) {
        let wa = Wrapped::new(a);
        let vb = FieldView::new(Keymap::iso(), b);
        prop_assert_eq!(wa == vb, vb == wa);
        prop_assert_eq!(wa == b, a == b);
        prop_assert_eq!(a == vb, a == b);
        prop_assert_eq!(wa.cmp(&Wrapped::new(b)), a.cmp(&b));
    }

    #[test]
    fn prop_update_leaves_receiver_untouched(date in date_strategy(), year in 1900i64..2100) {
        let point = PointView::new(Keymap::iso(), date);
        let updated = point.update(":year", year).unwrap();
        prop_assert_eq!(*point.dereference(), date);
        prop_assert_eq!(updated.lookup(":year"), Some(&year));
        prop_assert_eq!(updated.lookup(":day"), point.lookup(":day"));
    }

    #[test]
    fn prop_amount_totals_are_exact(
        seconds in -1_000_000_000_000i64..1_000_000_000_000,
        nanos in 0i64..1_000_000_000,
    ) {
        let delta = TimeDelta::seconds(seconds) + TimeDelta::nanoseconds(nanos);
        let view = AmountView::new(Keymap::standard(), delta);
        let total = BigInt::from(seconds) * 1_000_000_000u32 + nanos;

        prop_assert_eq!(view.lookup(":nanos"), Some(&total));
        prop_assert_eq!(view.lookup(":seconds"), Some(&BigInt::from(seconds)));
        prop_assert_eq!(view.lookup(":minutes"), Some(&BigInt::from(seconds / 60)));
        prop_assert_eq!(view.lookup(":hours"), Some(&BigInt::from(seconds / 3_600)));
    }
}
