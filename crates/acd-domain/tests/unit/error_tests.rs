//! Unit tests for the domain error taxonomy

use acd_domain::Error;

#[test]
fn test_upstream_error_display() {
    let err = Error::upstream_unavailable("connect timeout to 10.0.0.5:8443");
    assert_eq!(
        err.to_string(),
        "Upstream unavailable: connect timeout to 10.0.0.5:8443"
    );

    let err = Error::upstream_auth("401 from management service");
    assert!(err.to_string().starts_with("Upstream authentication failed"));
}

#[test]
fn test_collection_in_progress_is_not_parameterized() {
    let err = Error::CollectionInProgress;
    assert_eq!(err.to_string(), "Collection already in progress");
}

#[test]
fn test_not_found_names_the_resource() {
    let err = Error::not_found("snapshot");
    assert_eq!(err.to_string(), "Not found: snapshot");
}

#[test]
fn test_error_with_source_preserves_chain() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let err = Error::upstream_unavailable_with_source("cannot reach Unisphere", io);

    let source = std::error::Error::source(&err).expect("source preserved");
    assert!(source.to_string().contains("refused"));
}

#[test]
fn test_data_integrity_display() {
    let err = Error::data_integrity("pool 'SRP_1' reported negative used_gb: -4");
    assert!(err.to_string().contains("Data integrity violation"));
    assert!(err.to_string().contains("SRP_1"));
}
