//! Sustainable infrastructure decision support: evaluates a construction proposal
//! against financial, environmental and social criteria and renders a Go/No-Go decision.

pub mod boq;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod telemetry;
