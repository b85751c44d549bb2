use criterion::{criterion_group, criterion_main};

mod identifier_checksum_benchmark {
    use criterion::Criterion;
    use field_validations::{CifChecksum, DniChecksum, NieChecksum, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let identifiers = vec![
            "88385119Y",
            "12345678Z",
            "K1234567L",
            "88385119P",
        ];
        c.bench_function("dni-check-letter", |b| {
            b.iter(|| {
                for identifier in identifiers.clone().into_iter() {
                    DniChecksum.is_valid(identifier);
                }
            })
        });

        c.bench_function("nie-check-letter", |b| {
            b.iter(|| {
                NieChecksum.is_valid("Z1767786B");
            })
        });

        c.bench_function("cif-control-symbol", |b| {
            b.iter(|| {
                CifChecksum.is_valid("S0794867B");
            })
        });
    }
}

mod ccc_checksum_benchmark {
    use criterion::Criterion;
    use field_validations::{CccChecksum, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let accounts = vec![
            "52457544266055456101",
            "1421-9460-46-0039365197",
            "6921 9454 01 4589691820",
        ];
        c.bench_function("ccc-check-digits", |b| {
            b.iter(|| {
                for account in accounts.clone().into_iter() {
                    CccChecksum.is_valid(account);
                }
            })
        });
    }
}

mod number_grammar_benchmark {
    use criterion::Criterion;
    use field_validations::{build_number_regex, ThousandsGrouping};

    pub fn criterion_benchmark(c: &mut Criterion) {
        // The grammar is rebuilt on every call; measure the full cost.
        c.bench_function("number-grammar", |b| {
            b.iter(|| {
                build_number_regex(true, ThousandsGrouping::EitherAllowed, '.')
                    .is_match("1,234,567.89")
            })
        });
    }
}

criterion_group!(
    benches,
    identifier_checksum_benchmark::criterion_benchmark,
    ccc_checksum_benchmark::criterion_benchmark,
    number_grammar_benchmark::criterion_benchmark
);
criterion_main!(benches);
