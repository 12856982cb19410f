//! precompile dispatch benchmarks
//!
//! Usage:
//!   cargo bench -p zytron-precompiles              # run all benchmarks
//!   cargo bench -p zytron-precompiles -- lookup    # address resolution only
//!   cargo bench -p zytron-precompiles -- builtin   # in-tree kernels

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use zytron_precompiles::{
    builtin::abi, kernel::KernelFns, CallContext, KernelSet, Operation, PrecompileConfig,
    PrecompileRegistry,
};

const ADD_INPUT: &str = "0d52c3aa573af39845660735de0d3d9efb481a112cf00623ab22546122d4e16a\
    0e7e20b3cb30785b64cd6972e2ddf919db64d03d6cf01456243c5ef2fb766a65\
    242cbada3ae8d6e90056e73e4941eeccee72cb99945a194f754205b3678bd769\
    2d7690deeaa77c9d89b0ceb3c25f7bb09c44f40b4b8cf5d6fcb512c7be8fcba9";

const MUL_INPUT: &str = "008d7a42a4dde1d8f8bcacddcae9bc78b1480eb547d4a490d9cfa5c268a076c7\
    1738fd301654d891e32235d03a64b7ebe0c3f37df67db0b798f2664783b1bac9\
    22a689a1c0aebf70ceee76fe7891729002e072ceb7ba94a32b1fce79f8c009d9";

fn noop_gas(_: &[u8]) -> u64 {
    0
}

fn noop_exec(_: &[u8], _: &mut [u8]) -> u8 {
    0
}

fn registry() -> PrecompileRegistry {
    let noop = KernelFns::new(noop_gas, noop_exec);
    let kernels = KernelSet::builtin()
        .with(Operation::VerifyMatchmaking, noop)
        .with(Operation::VerifyShuffle, noop);
    PrecompileRegistry::from_config(&PrecompileConfig::default(), &kernels).unwrap()
}

fn bench_lookup(c: &mut Criterion) {
    let registry = registry();
    let hit = Operation::ScalarMul.address();
    let miss = zytron_precompiles::operation::precompile_address(0x01);

    let mut group = c.benchmark_group("lookup");
    group.bench_function("hit", |b| b.iter(|| black_box(registry.get(black_box(&hit)))));
    group.bench_function("miss", |b| b.iter(|| black_box(registry.get(black_box(&miss)))));
    group.finish();
}

fn bench_bridge_overhead(c: &mut Criterion) {
    let registry = registry();
    let ctx = CallContext::default();
    let input = vec![0u8; 256];

    let mut group = c.benchmark_group("overhead");
    for op in [Operation::VerifyMatchmaking, Operation::VerifyShuffle] {
        let p = registry.get(&op.address()).unwrap();
        group.bench_function(BenchmarkId::new("call", op.name()), |b| {
            b.iter(|| black_box(p.call(black_box(&input), &ctx)))
        });
    }
    group.finish();
}

fn bench_builtin(c: &mut Criterion) {
    let registry = registry();
    let ctx = CallContext::default();
    let words: Vec<[u8; 32]> = (1..=6u8).map(|v| abi::left_pad(&[v]).unwrap()).collect();

    let mut group = c.benchmark_group("builtin");
    for (op, input) in [
        (Operation::Anemoi, abi::encode_bytes32_array(&words)),
        (Operation::PointAdd, hex::decode(ADD_INPUT).unwrap()),
        (Operation::ScalarMul, hex::decode(MUL_INPUT).unwrap()),
    ] {
        let p = registry.get(&op.address()).unwrap();
        group.bench_function(BenchmarkId::new("call", op.name()), |b| {
            b.iter(|| black_box(p.call(black_box(&input), &ctx).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lookup, bench_bridge_overhead, bench_builtin);
criterion_main!(benches);
