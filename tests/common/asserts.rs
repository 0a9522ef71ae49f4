use origin_trust::{CorsDecision, Headers, OriginStatus};

pub fn assert_trusted(decision: CorsDecision) -> Headers {
    assert_eq!(
        decision.status(),
        OriginStatus::Trusted,
        "expected trusted decision, got {decision:?}"
    );
    decision.headers()
}

pub fn assert_denied(decision: CorsDecision) -> Headers {
    assert!(
        decision.should_reject(),
        "expected denied decision, got {decision:?}"
    );
    assert!(decision.allow_origin().is_none());
    decision.headers()
}
