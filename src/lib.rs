mod allowed_headers;
mod allowed_methods;
pub mod constants;
mod context;
mod cors;
mod decision;
mod exposed_headers;
mod extensions;
mod header_builder;
mod headers;
mod matcher;
mod options;
mod origin;
mod pattern;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::{Cors, build_decision};
pub use decision::{CorsDecision, OriginStatus};
pub use exposed_headers::ExposedHeaders;
pub use extensions::CorsContextExt;
pub use headers::Headers;
pub use matcher::{TrustedOrigins, is_origin_trusted};
pub use options::{CorsOptions, ValidationError};
pub use origin::CandidateOrigin;
pub use pattern::{PatternError, TrustedOriginPattern};
pub use util::normalize_lower;
