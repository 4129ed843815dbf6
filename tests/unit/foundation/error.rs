use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollyteError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ScrollyteError::scene("x").to_string().contains("scene error:"));
    assert!(
        ScrollyteError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(ScrollyteError::send("x").to_string().contains("send error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrollyteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
