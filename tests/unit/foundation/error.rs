use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        KinetextError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        KinetextError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        KinetextError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = KinetextError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: KinetextError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, KinetextError::Serde(_)));
}
