// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the credential parser and provisioning encoder.
// The parse benchmark uses a realistic OCR transcript: label lines buried in
// surrounding router-sticker noise.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use funkwerk_core::types::Credentials;
use funkwerk_provision::{encode, parse};

const ROUTER_LABEL_TEXT: &str = "\
Model AC-1200 Dual Band\n\
S/N 7QX-44812-EU\n\
Network: HomeBox-7741\n\
WPA2 preshared\n\
Password: k3ller-Tr4sse-9\n\
support.example.com\n";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse router label transcript", |b| {
        b.iter(|| black_box(parse(black_box(ROUTER_LABEL_TEXT))));
    });
}

fn bench_encode(c: &mut Criterion) {
    let credentials = Credentials::new("HomeBox-7741", "k3ller-Tr4sse-9");
    c.bench_function("encode credential pair", |b| {
        b.iter(|| black_box(encode(black_box(&credentials))));
    });
}

criterion_group!(benches, bench_parse, bench_encode);
criterion_main!(benches);
