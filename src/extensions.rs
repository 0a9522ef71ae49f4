use crate::decision::CorsDecision;
use http::{Extensions, Request};

/// Stores a [`CorsDecision`] on the per-request context read by later
/// middleware. Attaching twice replaces the earlier decision.
pub trait CorsContextExt {
    fn attach_cors_decision(&mut self, decision: CorsDecision);

    fn cors_decision(&self) -> Option<&CorsDecision>;

    fn take_cors_decision(&mut self) -> Option<CorsDecision>;
}

impl CorsContextExt for Extensions {
    fn attach_cors_decision(&mut self, decision: CorsDecision) {
        self.insert(decision);
    }

    fn cors_decision(&self) -> Option<&CorsDecision> {
        self.get::<CorsDecision>()
    }

    fn take_cors_decision(&mut self) -> Option<CorsDecision> {
        self.remove::<CorsDecision>()
    }
}

impl<B> CorsContextExt for Request<B> {
    fn attach_cors_decision(&mut self, decision: CorsDecision) {
        self.extensions_mut().attach_cors_decision(decision);
    }

    fn cors_decision(&self) -> Option<&CorsDecision> {
        self.extensions().cors_decision()
    }

    fn take_cors_decision(&mut self) -> Option<CorsDecision> {
        self.extensions_mut().take_cors_decision()
    }
}

#[cfg(test)]
#[path = "extensions_test.rs"]
mod extensions_test;
