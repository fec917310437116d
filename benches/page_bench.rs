use criterion::{criterion_group, criterion_main, Criterion};
use rosewright_config::capability::CapabilitySet;
use rosewright_config::i18n::StringTable;
use rosewright_config::{ConfigPage, Generation};
use std::hint::black_box;

const FULL_QUERY: &str = "second_hand=1&sweep_seconds=0&num_faces=10&face_index=3\
    &num_face_colors=10&color_mode=2&draw_mode=1&chrono_dial=2&top_subdial=1\
    &date_window_keys=abcd&date_window_a=1&date_window_b=8&date_window_c=3&date_window_d=5\
    &display_lang=ta_IN&week_numbering=1&lunar_background=1&hour_buzzer=1\
    &bluetooth_buzzer=1&bluetooth_indicator=2&battery_gauge=3&show_debug=1\
    &watch_name=Rosewright%20Chronograph&version=4.14";

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parse_capabilities", |b| {
        b.iter(|| CapabilitySet::from_query(black_box(FULL_QUERY)))
    });

    c.bench_function("build_page_4_14", |b| {
        b.iter(|| {
            ConfigPage::from_query(Generation::V4_14, black_box(FULL_QUERY), StringTable::builtin())
                .unwrap()
        })
    });

    let page = ConfigPage::from_query(Generation::V4_14, FULL_QUERY, StringTable::builtin())
        .unwrap();

    c.bench_function("render_4_14", |b| b.iter(|| black_box(&page).render()));

    c.bench_function("submit_4_14", |b| {
        b.iter(|| {
            black_box(&page).submit_form_body(black_box("draw_mode=0&date_window_b=6&display_lang=fr_FR"))
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
