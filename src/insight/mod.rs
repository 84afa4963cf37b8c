//! Insight aggregation

mod engine;
mod narrative;
mod recommend;

pub use engine::InsightEngine;
pub use narrative::ProportionBand;
