use num_bigint::BigInt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wcurve::encoding::{decode_point, encode_point};
use wcurve::random::random_scalar;
use wcurve::{Affine, CurveParameters};
use wcurve_engine::{Engine, EngineConfig};

fn main() {
    let config: EngineConfig = bincode::deserialize(
        &bincode::serialize(&EngineConfig {
            smul_block_width: Some(4),
            ..EngineConfig::default()
        })
        .expect("serialize config"),
    )
    .expect("deserialize config");

    let mut rng = StdRng::seed_from_u64(42);
    let mut engine = Engine::with_config(config);
    let curve = engine.resolve_curve("secp256k1").expect("resolve");
    let params = engine.parameters(curve).expect("parameters");
    let g = Affine::new(params.gx.clone(), params.gy.clone());

    let k = random_scalar(&mut rng, &params.n);
    let table = engine.precompute_for(curve, &g, 1000).expect("precompute");
    let p = engine.fmul(curve, table, &k).expect("fmul");
    assert_eq!(p, engine.mul(curve, &g, &k).expect("mul"));

    // Parameters and points survive a trip through both wire forms.
    let params_bytes = bincode::serialize(&params).expect("serialize params");
    let params2: CurveParameters = bincode::deserialize(&params_bytes).expect("deserialize params");
    let copy = engine.register_curve("copy", params2).expect("register");

    let point_bytes = bincode::serialize(&p).expect("serialize point");
    let p2: Affine = bincode::deserialize(&point_bytes).expect("deserialize point");
    let (x, y) = encode_point(&p2);
    let p3 = decode_point(&x, &y, &params.modulus).expect("decode point");

    let minus_k = -k;
    let sum = engine
        .smul(copy, &[p3, g], &[BigInt::from(1), minus_k])
        .expect("smul");
    assert_eq!(sum, Affine::INFINITY);

    engine.release_curve(curve).expect("release");
    assert!(engine.fmul(curve, table, &BigInt::from(1)).is_err());
}
