//! # premium-client
//!
//! Talks to the prediction endpoint. One GET per submission, no retries,
//! every failure folded into a [`PredictionOutcome`](premium_core::PredictionOutcome).
//!
//! The response mapping lives in [`response`] as pure functions over a
//! status code and body bytes so it can be tested without a network.

pub mod http_client;
pub mod query;
pub mod response;

pub use http_client::PredictionClient;
pub use query::build_query;
