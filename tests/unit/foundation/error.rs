use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PigmixError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PigmixError::buffer("x")
            .to_string()
            .contains("buffer error:")
    );
    assert!(
        PigmixError::unknown_mode("x")
            .to_string()
            .contains("unknown blend mode:")
    );
    assert!(
        PigmixError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn json_errors_map_to_serde() {
    let err: PigmixError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, PigmixError::Serde(_)));
    assert!(err.to_string().starts_with("serialization error:"));
    assert!(err.to_string().contains("line 1"));
}
