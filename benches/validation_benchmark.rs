use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{distributions::Alphanumeric, thread_rng, Rng};
use room_booking::{is_valid_phone_number, is_valid_time_format, BookingRegistry, BookingRequest};

// Mix of well-formed and garbage inputs, the same shape an operator produces
fn random_times(count: usize) -> Vec<String> {
    let mut rng = thread_rng();
    (0..count)
        .map(|_| {
            if rng.gen_bool(0.7) {
                format!("{:02}:{:02}", rng.gen_range(0..30), rng.gen_range(0..70))
            } else {
                let len = rng.gen_range(0..8);
                (&mut rng)
                    .sample_iter(&Alphanumeric)
                    .take(len)
                    .map(char::from)
                    .collect()
            }
        })
        .collect()
}

fn random_phones(count: usize) -> Vec<String> {
    let mut rng = thread_rng();
    (0..count)
        .map(|_| {
            let len = if rng.gen_bool(0.7) { 10 } else { rng.gen_range(0..14) };
            (0..len)
                .map(|_| char::from(b'0' + rng.gen_range(0..10)))
                .collect()
        })
        .collect()
}

pub fn validation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_validation");

    for count in [10, 100, 1000].iter() {
        let times = random_times(*count);
        let phones = random_phones(*count);

        group.bench_with_input(BenchmarkId::new("time", count), &times, |b, times| {
            b.iter(|| times.iter().filter(|t| is_valid_time_format(black_box(t))).count())
        });
        group.bench_with_input(BenchmarkId::new("phone", count), &phones, |b, phones| {
            b.iter(|| phones.iter().filter(|p| is_valid_phone_number(black_box(p))).count())
        });
    }

    group.finish();
}

pub fn booking_benchmark(c: &mut Criterion) {
    c.bench_function("fill_registry", |b| {
        b.iter(|| {
            let mut registry = BookingRegistry::default();
            for template in 0..3 {
                let _ = registry.book_room(BookingRequest {
                    host_name: "Bench Host".into(),
                    template,
                    phone_number: "5551234567".into(),
                    start_time: "09:00".into(),
                    end_time: "17:30".into(),
                });
            }
            black_box(registry.len())
        })
    });
}

criterion_group!(benches, validation_benchmark, booking_benchmark);
criterion_main!(benches);
