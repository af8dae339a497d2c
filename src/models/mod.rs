// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, ScoredCandidate, ScoringWeights, ScoreBreakdown};
pub use requests::FindMatchesRequest;
pub use responses::{FindMatchesResponse, HealthResponse, ErrorResponse};
