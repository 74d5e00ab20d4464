use super::*;
use crate::secrets::testing::FlakyBackend;

fn chain(primary: &FlakyBackend, fallback: &FlakyBackend) -> SecretChain {
    SecretChain::new(vec![Box::new(primary.clone()), Box::new(fallback.clone())])
}

#[test]
fn writes_go_to_primary_when_available() {
    let primary = FlakyBackend::new("primary");
    let fallback = FlakyBackend::new("fallback");
    let chain = chain(&primary, &fallback);

    assert_eq!(chain.set("credentials", "v1").expect("set"), "primary");
    assert_eq!(primary.peek("credentials").as_deref(), Some("v1"));
    assert_eq!(fallback.peek("credentials"), None);
    assert_eq!(chain.get("credentials").as_deref(), Some("v1"));
}

#[test]
fn writes_fall_back_when_primary_fails() {
    let primary = FlakyBackend::broken("primary");
    let fallback = FlakyBackend::new("fallback");
    let chain = chain(&primary, &fallback);

    assert_eq!(chain.set("credentials", "v1").expect("set"), "fallback");
    assert_eq!(fallback.peek("credentials").as_deref(), Some("v1"));
    assert_eq!(chain.get("credentials").as_deref(), Some("v1"));
}

#[test]
fn reads_skip_a_failing_primary() {
    let primary = FlakyBackend::new("primary");
    let fallback = FlakyBackend::new("fallback");
    fallback.set("credentials", "v1").expect("seed fallback");
    primary.set_failing(true);

    let chain = chain(&primary, &fallback);
    assert_eq!(chain.get("credentials").as_deref(), Some("v1"));
}

#[test]
fn successful_primary_write_clears_stale_fallback_value() {
    let primary = FlakyBackend::new("primary");
    let fallback = FlakyBackend::new("fallback");
    let chain = chain(&primary, &fallback);

    primary.set_fail_writes(true);
    chain.set("credentials", "old").expect("fallback write");
    assert_eq!(fallback.peek("credentials").as_deref(), Some("old"));

    primary.set_fail_writes(false);
    chain.set("credentials", "new").expect("primary write");
    assert_eq!(primary.peek("credentials").as_deref(), Some("new"));
    assert_eq!(fallback.peek("credentials"), None);
}

#[test]
fn all_backends_failing_is_exhausted() {
    let primary = FlakyBackend::broken("primary");
    let fallback = FlakyBackend::broken("fallback");
    let chain = chain(&primary, &fallback);

    assert!(matches!(
        chain.set("credentials", "v1"),
        Err(StoreError::Exhausted)
    ));
    assert_eq!(chain.get("credentials"), None);
}

#[test]
fn delete_clears_every_backend_and_counts_failures() {
    let primary = FlakyBackend::new("primary");
    let fallback = FlakyBackend::new("fallback");
    primary.set("credentials", "a").expect("seed primary");
    fallback.set("credentials", "b").expect("seed fallback");

    let chain = chain(&primary, &fallback);
    assert_eq!(chain.delete("credentials"), 0);
    assert_eq!(primary.peek("credentials"), None);
    assert_eq!(fallback.peek("credentials"), None);

    primary.set_failing(true);
    fallback.set("credentials", "c").expect("seed fallback");
    assert_eq!(chain.delete("credentials"), 1);
    assert_eq!(fallback.peek("credentials"), None);
}

#[test]
fn memory_kind_has_a_single_backend() {
    let chain = SecretChain::for_kind(StoreKind::Memory, "seclab-test");
    assert_eq!(chain.backends().len(), 1);
    assert_eq!(chain.backends()[0].name(), "memory");

    chain.set("entry", "value").expect("set");
    assert_eq!(chain.get("entry").as_deref(), Some("value"));
    assert_eq!(chain.delete("entry"), 0);
    assert_eq!(chain.get("entry"), None);
}
