use super::*;

fn args_with_secret(secret: Option<&str>) -> Args {
    Args {
        addr: "127.0.0.1:0".parse().expect("parse socket addr"),
        addr_file: None,
        jwt_secret: secret.map(str::to_string),
        token_ttl_secs: 60,
    }
}

#[test]
fn signing_secret_prefers_configured_value() {
    let secret = signing_secret(Some("configured")).expect("secret");
    assert_eq!(secret, "configured");
}

#[test]
fn signing_secret_generates_random_when_unset_or_empty() {
    let a = signing_secret(None).expect("secret");
    let b = signing_secret(Some("")).expect("secret");

    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[test]
fn build_state_uses_configured_ttl_and_seeded_users() {
    let state = build_state(&args_with_secret(Some("s3cret"))).expect("state");

    assert_eq!(state.signer.ttl(), Duration::from_secs(60));
    assert!(state.users.authenticate("admin", "password123").is_some());

    let token = state.signer.issue("1", "John Doe").expect("issue");
    let claims = state.signer.verify(&token).expect("verify");
    assert_eq!(claims.sub, "1");
    assert_eq!(claims.exp, Some(claims.iat + 60));
}

#[test]
fn token_ttl_is_bounded_at_parse_time() {
    let parse = |ttl: &str| {
        Args::try_parse_from(["seclab-server", "--jwt-secret", "s", "--token-ttl-secs", ttl])
    };

    assert_eq!(parse("60").expect("parse").token_ttl_secs, 60);
    assert!(parse("0").is_err());
    assert!(parse("18446744073709551615").is_err());
}
