use chrono::{NaiveDate, TimeDelta, Utc};
use tempomap::{
    AmountView, DateTimeFormat, FieldView, FormatFn, Invokable, Iterable, Keymap, Lookupable,
    PointView, Updatable,
};

fn main() -> tempomap::Result<()> {
    let now = FieldView::new(Keymap::iso(), Utc::now());
    let mut entries: Vec<_> = now.entries().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in entries {
        println!("{key:>18} {value}");
    }

    let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap_or_default();
    let date = PointView::new(Keymap::iso(), start);
    let next = date.update_many([(":year", 2025), (":month", 2)])?;
    println!("{date} -> {next}");

    let long_date = FormatFn::new(DateTimeFormat::parse("%A, %-d %B %Y")?);
    println!("{}", long_date.invoke(&next)?);

    let span = AmountView::new(Keymap::standard(), TimeDelta::minutes(90));
    println!(
        "90 minutes = {} ms = {}",
        span.lookup_or(":millis", 0.into()),
        span.as_days()
    );
    Ok(())
}
