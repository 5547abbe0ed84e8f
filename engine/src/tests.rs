use super::*;
use num_bigint::{BigInt, BigUint};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wcurve::random::{random_point, random_scalar};
use wcurve::{Affine, CurveError};

#[test]
fn test_resolve_every_listed_curve() {
    let mut engine = Engine::new();
    for name in engine.curve_names() {
        let handle = engine.resolve_curve(name).expect("resolve");
        let params = engine.parameters(handle).expect("parameters");
        let curve = engine.curve(handle).unwrap();
        assert_eq!(curve.name(), *name);
        assert_eq!(&params.modulus, curve.modulus());
        assert_eq!(&params.n, curve.order());
    }
    assert_eq!(engine.curve_count(), engine.curve_names().len());
}

#[test]
fn test_unknown_curve_name() {
    let mut engine = Engine::new();
    assert_eq!(
        engine.resolve_curve("UnknownCurveName"),
        Err(EngineError::Curve(CurveError::UnknownCurve(
            "UnknownCurveName".to_owned()
        )))
    );
    assert_eq!(engine.curve_count(), 0);
}

#[test]
fn test_released_curve_is_unknown() {
    let mut engine = Engine::new();
    let handle = engine.resolve_curve("secp256k1").unwrap();
    engine.release_curve(handle).unwrap();

    let g = Affine::INFINITY;
    assert_eq!(
        engine.add(handle, &g, &g),
        Err(EngineError::UnknownHandle(handle.id()))
    );
    assert_eq!(
        engine.release_curve(handle),
        Err(EngineError::UnknownHandle(handle.id()))
    );
}

#[test]
fn test_ids_are_not_reused() {
    let mut engine = Engine::new();
    let first = engine.resolve_curve("P-256").unwrap();
    engine.release_curve(first).unwrap();
    let second = engine.resolve_curve("P-256").unwrap();
    assert_ne!(first, second);
    assert!(engine.curve(first).is_err());
    assert!(engine.curve(second).is_ok());
}

#[test]
fn test_forged_handle() {
    let engine = Engine::new();
    let forged = CurveHandle::from_id(77);
    assert_eq!(engine.curve(forged).unwrap_err(), EngineError::UnknownHandle(77));
}

#[test]
fn test_arithmetic_through_handles() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut engine = Engine::new();
    let handle = engine.resolve_curve("P-224").unwrap();
    let curve = engine.curve(handle).unwrap().clone();

    let p = random_point(&curve, &mut rng);
    let q = random_point(&curve, &mut rng);
    let k1 = random_scalar(&mut rng, curve.order());
    let k2 = -random_scalar(&mut rng, curve.order());

    assert_eq!(engine.add(handle, &p, &q).unwrap(), curve.add(&p, &q));
    assert_eq!(engine.mul(handle, &p, &k1).unwrap(), curve.mul(&p, &k1));

    let expected = curve.add(&curve.mul(&p, &k1), &curve.mul(&q, &k2));
    assert_eq!(
        engine
            .smul(handle, &[p.clone(), q.clone()], &[k1.clone(), k2.clone()])
            .unwrap(),
        expected
    );
    assert_eq!(
        engine.smul(handle, &[p, q], &[k1]),
        Err(EngineError::Curve(CurveError::LengthMismatch {
            bases: 2,
            scalars: 1
        }))
    );
}

#[test]
fn test_configured_smul_block_width() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut engine = Engine::with_config(EngineConfig {
        smul_block_width: Some(1),
        ..EngineConfig::default()
    });
    let handle = engine.resolve_curve("P-256").unwrap();
    let curve = engine.curve(handle).unwrap().clone();

    let bases: Vec<Affine> = (0..3).map(|_| random_point(&curve, &mut rng)).collect();
    let scalars: Vec<BigInt> = (0..3).map(|_| random_scalar(&mut rng, curve.order())).collect();
    assert_eq!(
        engine.smul(handle, &bases, &scalars).unwrap(),
        curve.smul(&bases, &scalars).unwrap()
    );
}

#[test]
fn test_table_lifecycle() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut engine = Engine::new();
    let handle = engine.resolve_curve("P-256").unwrap();
    let curve = engine.curve(handle).unwrap().clone();
    let g = curve.generator().clone();

    let narrow = engine.precompute(handle, &g, Some(3)).unwrap();
    let wide = engine.precompute(handle, &g, None).unwrap();
    assert_eq!(engine.table(narrow).unwrap().width(), 3);
    assert_eq!(engine.table(wide).unwrap().width(), DEFAULT_TABLE_WIDTH);
    assert_eq!(engine.table_count(), 2);

    for _ in 0..4 {
        let k = random_scalar(&mut rng, curve.order());
        let expected = curve.mul(&g, &k);
        assert_eq!(engine.fmul(handle, narrow, &k).unwrap(), expected);
        assert_eq!(engine.fmul(handle, wide, &k).unwrap(), expected);
    }

    engine.release_table(narrow).unwrap();
    assert_eq!(
        engine.fmul(handle, narrow, &BigInt::from(1)),
        Err(EngineError::UnknownHandle(narrow.id()))
    );
    assert_eq!(
        engine.release_table(narrow),
        Err(EngineError::UnknownHandle(narrow.id()))
    );
    assert!(engine.fmul(handle, wide, &BigInt::from(1)).is_ok());
}

#[test]
fn test_table_on_wrong_curve() {
    let mut engine = Engine::new();
    let p256 = engine.resolve_curve("P-256").unwrap();
    let k256 = engine.resolve_curve("secp256k1").unwrap();
    let g = engine.curve(p256).unwrap().generator().clone();
    let table = engine.precompute(p256, &g, Some(2)).unwrap();

    assert_eq!(
        engine.fmul(k256, table, &BigInt::from(5)),
        Err(EngineError::TableCurveMismatch {
            table: table.id(),
            owner: p256.id(),
            curve: k256.id(),
        })
    );
}

#[test]
fn test_release_curve_drops_its_tables() {
    let mut engine = Engine::new();
    let p256 = engine.resolve_curve("P-256").unwrap();
    let k256 = engine.resolve_curve("secp256k1").unwrap();
    let g = engine.curve(p256).unwrap().generator().clone();
    let h = engine.curve(k256).unwrap().generator().clone();
    let t1 = engine.precompute(p256, &g, Some(2)).unwrap();
    let t2 = engine.precompute(k256, &h, Some(2)).unwrap();

    engine.release_curve(p256).unwrap();
    assert_eq!(engine.table_count(), 1);
    assert!(engine.table(t1).is_err());
    assert!(engine.table(t2).is_ok());
}

#[test]
fn test_precompute_for_respects_max_width() {
    let mut engine = Engine::with_config(EngineConfig {
        max_table_width: 4,
        ..EngineConfig::default()
    });
    let handle = engine.resolve_curve("secp160r1").unwrap();
    let g = engine.curve(handle).unwrap().generator().clone();
    let table = engine.precompute_for(handle, &g, 1_000_000).unwrap();
    assert_eq!(engine.table(table).unwrap().width(), 4);

    let k = BigInt::from(987654321u64);
    assert_eq!(
        engine.fmul(handle, table, &k).unwrap(),
        engine.mul(handle, &g, &k).unwrap()
    );
}

#[test]
fn test_register_custom_curve() {
    let mut engine = Engine::new();
    let source = engine.resolve_curve("brainpoolP256r1").unwrap();
    let params = engine.parameters(source).unwrap();
    let custom = engine.register_curve("copy", params.clone()).unwrap();
    assert_eq!(engine.parameters(custom).unwrap(), params);

    let mut bad = params;
    bad.gy += 1u32;
    assert!(matches!(
        engine.register_curve("broken", bad),
        Err(EngineError::Curve(CurveError::InvalidParameters(_)))
    ));
}

#[test]
fn test_sqrt_needs_no_curve() {
    let engine = Engine::new();
    let p = BigUint::from(97u32);
    let r = engine.sqrt(&BigUint::from(4u32), &p).unwrap();
    assert_eq!(&r * &r % &p, BigUint::from(4u32));
    assert_eq!(
        engine.sqrt(&BigUint::from(5u32), &p),
        Err(EngineError::Curve(CurveError::NoSquareRoot))
    );
    assert!(matches!(
        engine.sqrt(&BigUint::from(4u32), &BigUint::from(0u32)),
        Err(EngineError::Curve(CurveError::InvalidParameters(_)))
    ));
}

#[test]
fn test_end_to_end_order_annihilates_generator() {
    let mut engine = Engine::new();
    let handle = engine.resolve_curve("P-384").unwrap();
    let params = engine.parameters(handle).unwrap();
    let g = Affine::new(params.gx, params.gy);
    let n = BigInt::from(params.n);
    assert_eq!(engine.mul(handle, &g, &n).unwrap(), Affine::INFINITY);
}
