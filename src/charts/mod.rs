//! Visualization layer: maps shaped views onto serializable chart
//! specifications. Pure formatting and labeling; missing-value policy is
//! settled upstream in the shaping layer.

pub mod heatmap;
pub mod line;
pub mod radar;
pub mod scatter;
