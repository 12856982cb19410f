//! host-side scenarios: resolve an address, charge gas, execute, encode

use alloy_primitives::{address, Address, U256};
use tracing_subscriber::EnvFilter;
use zytron_precompiles::{
    builtin::{abi, gas},
    encoder::decode_bool,
    kernel::KernelFns,
    CallContext, ErrorClass, KernelSet, Operation, PrecompileConfig, PrecompileError,
    PrecompileOutput, PrecompileRegistry, RegistryError, Status,
};

/// calldata captured from a host call: selector `0x73808263` and raw words,
/// not a bare `bytes32[]` argument
const ANEMOI_CALLDATA: &str = "73808263\
    b6b7148400000000000000000000000000000000000000000000000000000000\
    0000000000000000000000000000000000000000000000000000000000000000\
    0000000000000000000000000000000000000000000000000000000000000000\
    000000003644ea1f2fc768cf2749997d154f34d16beb50249a19fab338670599\
    7c594629";

/// trailing word of the captured calldata, above the field modulus
const ANEMOI_TAIL: &str = "3644ea1f2fc768cf2749997d154f34d16beb50249a19fab3386705997c594629";
/// digest of `[0, 0, 0, tail mod r]`
const ANEMOI_DIGEST: &str = "05042e1bf6c670ea72b82dcfca94818092d1a7a28675bdd3ea77551826d0a6f0";

const ADD_INPUT: &str = "0d52c3aa573af39845660735de0d3d9efb481a112cf00623ab22546122d4e16a\
    0e7e20b3cb30785b64cd6972e2ddf919db64d03d6cf01456243c5ef2fb766a65\
    242cbada3ae8d6e90056e73e4941eeccee72cb99945a194f754205b3678bd769\
    2d7690deeaa77c9d89b0ceb3c25f7bb09c44f40b4b8cf5d6fcb512c7be8fcba9";
const ADD_OUTPUT: &str = "019713eb593688e3f12c5be0b303906f8872c0a9d348d7b387574e3ab1fc2cbd\
    1dfe3794a51dc28ee81b468d5b31f230377610baf4f3370f621b74bb89b49d92";

const MUL_INPUT: &str = "008d7a42a4dde1d8f8bcacddcae9bc78b1480eb547d4a490d9cfa5c268a076c7\
    1738fd301654d891e32235d03a64b7ebe0c3f37df67db0b798f2664783b1bac9\
    22a689a1c0aebf70ceee76fe7891729002e072ceb7ba94a32b1fce79f8c009d9";
const MUL_OUTPUT: &str = "05c130b88058bfaee3f42a43c4925449555e4dae686258b83d4f291b91c01c54\
    0cda2331c705d6b2e64410351d44c8af07d3373368ce41d80176da64f57d2109";

// ============================================================================
// STAND-IN KERNELS
// ============================================================================

/// accepts proofs whose last byte is zero; garbage proofs fail to decode
fn verify_stub(input: &[u8], _: &mut [u8]) -> u8 {
    match input.last() {
        Some(0) => Status::Success.code(),
        Some(0xff) => Status::Deserialize.code(),
        Some(_) => Status::VerifyFail.code(),
        None => Status::Input.code(),
    }
}

fn stub_kernels() -> KernelSet {
    let verify = KernelFns::new(gas::plonk_verify, verify_stub);
    KernelSet::new()
        .with(Operation::VerifyMatchmaking, verify)
        .with(Operation::VerifyShuffle, verify)
        .merge(KernelSet::builtin())
}

fn registry() -> PrecompileRegistry {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    PrecompileRegistry::from_config(&PrecompileConfig::default(), &stub_kernels()).unwrap()
}

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

// ============================================================================
// SCENARIOS
// ============================================================================

fn anemoi_words() -> Vec<[u8; 32]> {
    let mut tail = [0u8; 32];
    tail.copy_from_slice(&unhex(ANEMOI_TAIL));
    vec![[0u8; 32], [0u8; 32], [0u8; 32], tail]
}

#[test]
fn anemoi_hash_returns_digest() {
    let registry = registry();
    let input = abi::encode_bytes32_array(&anemoi_words());

    let p = registry
        .get(&address!("0000000000000000000000000000000000000014"))
        .unwrap();
    assert_eq!(p.operation(), Operation::Anemoi);
    assert_eq!(p.required_gas(&input), 6 * gas::ANEMOI_EVAL);

    let out = p.execute(&input, &CallContext::default()).unwrap();
    assert_eq!(hex::encode(out.buffer()), ANEMOI_DIGEST);
    assert_eq!(out.encode().len(), 32);
}

#[test]
fn anemoi_rejects_calldata_that_is_not_an_array() {
    let registry = registry();
    let input = unhex(ANEMOI_CALLDATA);
    assert_eq!(input.len(), 136);

    let addr = Operation::Anemoi.address();
    // priced before decoding: four whole words
    assert_eq!(registry.required_gas(&addr, &input), Some(400));

    let err = registry
        .call(&addr, &input, &CallContext::default())
        .unwrap()
        .unwrap_err();
    assert_eq!(err, PrecompileError::Deserialize);
    assert_eq!(err.class(), ErrorClass::HardFailure);
}

#[test]
fn point_add_known_answer() {
    let registry = registry();
    let input = unhex(ADD_INPUT);
    let addr = Operation::PointAdd.address();

    assert_eq!(registry.required_gas(&addr, &input), Some(100));
    let out = registry
        .call(&addr, &input, &CallContext::default())
        .unwrap()
        .unwrap();
    assert_eq!(hex::encode(out), ADD_OUTPUT);
}

#[test]
fn scalar_mul_known_answer() {
    let registry = registry();
    let input = unhex(MUL_INPUT);
    let addr = Operation::ScalarMul.address();

    assert_eq!(registry.required_gas(&addr, &input), Some(200));
    let out = registry
        .call(&addr, &input, &CallContext::default())
        .unwrap()
        .unwrap();
    assert_eq!(hex::encode(out), MUL_OUTPUT);
}

#[test]
fn off_curve_point_is_hard_failure() {
    let registry = registry();
    let mut input = vec![0u8; 128];
    // (1, 2) twice
    input[31] = 1;
    input[63] = 2;
    input[95] = 1;
    input[127] = 2;

    let err = registry
        .call(&Operation::PointAdd.address(), &input, &CallContext::default())
        .unwrap()
        .unwrap_err();
    assert_eq!(err, PrecompileError::Deserialize);
    assert_eq!(err.class(), ErrorClass::HardFailure);
    assert_eq!(err.status(), Some(Status::Deserialize));
}

#[test]
fn shuffle_verdicts_are_abi_bools() {
    let registry = registry();
    let addr = Operation::VerifyShuffle.address();
    let ctx = CallContext::default();

    let mut proof = vec![7u8; 96];
    proof[95] = 0;
    let accepted = registry.call(&addr, &proof, &ctx).unwrap().unwrap();
    assert_eq!(accepted.len(), 32);
    assert_eq!(decode_bool(&accepted), Some(true));

    proof[95] = 1;
    let rejected = registry.call(&addr, &proof, &ctx).unwrap().unwrap();
    assert_eq!(decode_bool(&rejected), Some(false));
    assert!(rejected.iter().all(|b| *b == 0));

    proof[95] = 0xff;
    let err = registry.call(&addr, &proof, &ctx).unwrap().unwrap_err();
    assert_eq!(err, PrecompileError::Deserialize);
}

#[test]
fn matchmaking_rejection_is_not_an_error() {
    let registry = registry();
    let p = registry.get(&Operation::VerifyMatchmaking.address()).unwrap();

    let out = p.execute(&[5u8; 64], &CallContext::default()).unwrap();
    assert_eq!(out, PrecompileOutput::Verdict(false));
}

#[test]
fn context_does_not_change_result() {
    let registry = registry();
    let input = unhex(ADD_INPUT);
    let addr = Operation::PointAdd.address();

    let plain = registry.call(&addr, &input, &CallContext::default());
    let ctx = CallContext::new(
        address!("00000000000000000000000000000000deadbeef"),
        U256::from(1_000_000u64),
    )
    .with_data(input.clone());
    let with_ctx = registry.call(&addr, &input, &ctx);

    assert_eq!(plain, with_ctx);
}

#[test]
fn unknown_address_is_not_routed() {
    let registry = registry();
    let input = unhex(ADD_INPUT);

    for addr in [
        Address::ZERO,
        address!("0000000000000000000000000000000000000001"),
        address!("0000000000000000000000000000000000000019"),
        address!("1000000000000000000000000000000000000015"),
    ] {
        assert!(registry.call(&addr, &input, &CallContext::default()).is_none());
        assert!(registry.required_gas(&addr, &input).is_none());
    }
}

#[test]
fn empty_input_reverts_everywhere() {
    let registry = registry();
    for p in registry.iter() {
        assert_eq!(p.required_gas(&[]), 0);
        let err = p.call(&[], &CallContext::default()).unwrap_err();
        assert_eq!(err.class(), ErrorClass::InputError);
    }
}

#[test]
fn disabled_operation_is_absent() {
    let config = PrecompileConfig::only([Operation::PointAdd, Operation::ScalarMul]);
    let registry = PrecompileRegistry::from_config(&config, &KernelSet::builtin()).unwrap();

    assert_eq!(registry.len(), 2);
    assert!(registry.get(&Operation::Anemoi.address()).is_none());
}

#[test]
fn builtin_kernels_cannot_serve_the_verifiers() {
    let err = PrecompileRegistry::from_config(&PrecompileConfig::default(), &KernelSet::builtin())
        .unwrap_err();
    assert_eq!(err, RegistryError::MissingKernel(Operation::VerifyMatchmaking));
}

#[cfg(feature = "native")]
#[test]
fn native_anemoi_digest() {
    let registry =
        PrecompileRegistry::from_config(&PrecompileConfig::default(), &KernelSet::native()).unwrap();
    let input = abi::encode_bytes32_array(&anemoi_words());
    let p = registry.get(&Operation::Anemoi.address()).unwrap();

    // the linked library and the in-tree sponge agree
    let out = p.execute(&input, &CallContext::default()).unwrap();
    assert_eq!(hex::encode(out.buffer()), ANEMOI_DIGEST);
}
