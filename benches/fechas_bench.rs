use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fechas::prelude::*;

fn date_set() -> Vec<String> {
    let mut dates = Vec::with_capacity(128);
    for year in 1990..2022 {
        for month in [1, 4, 7, 10] {
            dates.push(format!("{year:04}-{month:02}-15"));
        }
    }
    // a couple of eliminated slots, like callers hand us
    dates[17] = String::new();
    dates[63] = String::new();
    dates
}

fn select_oldest(dates: &[String]) {
    let res = select_extremal(Extremal::Oldest, dates);
    assert!(res.is_ok());
}

fn latin_inputs() -> Vec<&'static str> {
    vec!["2020-06-16", "1999-12-31", "2024-02-29"]
}

fn render_latin(inputs: &[&str]) {
    for input in inputs {
        let res = to_latin(input, true);
        assert!(res.is_ok());
    }
}

fn shift_dates(dates: &[String]) {
    for date in dates {
        if date.is_empty() {
            continue;
        }
        let res = add_offset(date, 1, -2, 30);
        assert!(res.is_ok());
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let dates = date_set();
    let latin = latin_inputs();

    c.bench_function("select_oldest", |b| {
        b.iter(|| select_oldest(black_box(&dates)))
    });
    c.bench_function("to_latin_words", |b| {
        b.iter(|| render_latin(black_box(&latin)))
    });
    c.bench_function("add_offset", |b| b.iter(|| shift_dates(black_box(&dates))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
