// Conversions across the standard space registry

use pretty_assertions::assert_eq;

use gamut_engine::{Space, SpaceId};
use gamut_spaces::{cmy, hsl, hsv, rgb, standard_registry, xyz, Hsl, Rgb};

fn id(name: &str) -> SpaceId {
    SpaceId::new(name)
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "component count differs");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-6, "expected {expected:?}, got {actual:?}");
    }
}

#[test]
fn every_pair_of_spaces_is_reachable() {
    let registry = standard_registry().expect("builds");
    let names = [rgb::NAME, hsl::NAME, hsv::NAME, cmy::NAME, xyz::NAME];
    for from in names {
        for to in names {
            assert!(
                registry.can_convert(&id(from), &id(to)),
                "{from} -> {to} should resolve"
            );
        }
    }
}

#[test]
fn rgb_hsl_round_trip() {
    let registry = standard_registry().expect("builds");
    let original = Rgb::new(0.25, 0.5, 0.75);

    let as_hsl = registry.convert(&original, &id(hsl::NAME)).expect("to hsl");
    assert_eq!(as_hsl.space_id(), id(hsl::NAME));

    let back = registry.convert(as_hsl.as_ref(), &id(rgb::NAME)).expect("back to rgb");
    assert_close(&back.components(), &[0.25, 0.5, 0.75]);
}

#[test]
fn rgb_xyz_round_trip() {
    let registry = standard_registry().expect("builds");
    let original = Rgb::new(0.2, 0.4, 0.6);

    let as_xyz = registry.convert(&original, &id(xyz::NAME)).expect("to xyz");
    let back = registry.convert(as_xyz.as_ref(), &id(rgb::NAME)).expect("back to rgb");
    assert_close(&back.components(), &[0.2, 0.4, 0.6]);
}

#[test]
fn cmy_is_rgb_complement() {
    let registry = standard_registry().expect("builds");
    let as_cmy = registry
        .convert(&Rgb::new(1.0, 0.0, 0.25), &id(cmy::NAME))
        .expect("to cmy");
    assert_close(&as_cmy.components(), &[0.0, 1.0, 0.75]);
}

#[test]
fn hsl_to_hsv_routes_through_rgb() {
    let registry = standard_registry().expect("builds");

    let path = registry.resolve_path(&id(hsl::NAME), &id(hsv::NAME)).expect("resolves");
    assert_eq!(path.hops(), 2);
    assert_eq!(path.steps()[1], id(rgb::NAME));

    let start = Hsl::new(120.0, 1.0, 0.25);
    let direct = registry.convert(&start, &id(hsv::NAME)).expect("two hops");

    let via_rgb = registry.convert(&start, &id(rgb::NAME)).expect("to rgb");
    let manual = registry
        .convert(via_rgb.as_ref(), &id(hsv::NAME))
        .expect("to hsv");
    assert_close(&direct.components(), &manual.components());
}

#[test]
fn warm_cache_across_space_pairs() {
    let registry = standard_registry().expect("builds");

    let _ = registry.convert(&Hsl::new(30.0, 0.5, 0.5), &id(hsv::NAME)).unwrap();
    let cold = registry.cold_searches();
    let _ = registry.convert(&Hsl::new(200.0, 0.8, 0.3), &id(hsv::NAME)).unwrap();
    assert_eq!(registry.cold_searches(), cold, "second hsl -> hsv reuses the cached path");
}
