use criterion::{criterion_group, criterion_main, Criterion};

use unicode_identifiers::classify;
use unicode_identifiers::scalar_values;
use unicode_identifiers::IdentifierClass;

/// полный проход по кодовому пространству с классификацией каждого кодпоинта
fn scan(c: &mut Criterion)
{
    c.bench_function("scan", |b| {
        b.iter(|| {
            scalar_values()
                .filter(|&code| classify(code) != IdentifierClass::Invalid)
                .count()
        })
    });
}

criterion_group!(benches, scan);
criterion_main!(benches);
