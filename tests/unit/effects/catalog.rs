use super::*;

#[test]
fn every_kind_has_its_own_bit() {
    let mut seen = EffectFlags::empty();
    for kind in EffectKind::ALL {
        assert!(!seen.intersects(kind.flag()), "{kind} collides");
        seen |= kind.flag();
    }
    assert_eq!(seen, EffectFlags::all());
}

#[test]
fn names_round_trip_through_tokens() {
    for kind in EffectKind::ALL {
        assert_eq!(EffectKind::from_token(kind.name()), Some(kind));
    }
}

#[test]
fn token_aliases_are_accepted() {
    assert_eq!(EffectKind::from_token("zoom_in"), Some(EffectKind::ZoomIn));
    assert_eq!(EffectKind::from_token(" Flip-Up "), Some(EffectKind::FlipUp));
    assert_eq!(EffectKind::from_token("SPIRAL3D"), Some(EffectKind::Spiral3d));
    assert_eq!(EffectKind::from_token(""), None);
    assert_eq!(EffectKind::from_token("sparkle"), None);
}

#[test]
fn unknown_tokens_are_inert() {
    let set = EffectSet::from_tokens(["glow", "sparkle", "glow", "  "]);
    assert_eq!(set.flags(), EffectFlags::GLOW);
}

#[test]
fn resolution_is_order_independent() {
    let a = EffectSet::from_tokens(["drift", "neon", "tumble"]).flags();
    let b = EffectSet::from_tokens(["tumble", "drift", "neon"]).flags();
    assert_eq!(a, b);
    let kinds: Vec<_> = a.kinds().collect();
    assert_eq!(
        kinds,
        vec![EffectKind::Drift, EffectKind::Tumble, EffectKind::Neon]
    );
}

#[test]
fn category_predicates() {
    assert!(EffectKind::Shake.is_positional());
    assert!(!EffectKind::Glow.is_positional());
    assert!(EffectFlags::WAVE3D.any_3d());
    assert!(!EffectFlags::WAVE.any_3d());
}
