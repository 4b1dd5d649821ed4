use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::ict::{RadarChartSpec, RadarTrace};
use crate::services::ict::{ICT_AXES, IctVector};

pub fn ict_radar(first: &IctVector, second: &IctVector, range: Decimal) -> RadarChartSpec {
    RadarChartSpec {
        title: "ICT Index Comparison".to_string(),
        axes: ICT_AXES.iter().map(|axis| axis.to_string()).collect(),
        traces: vec![trace(first), trace(second)],
        max: range.to_f64().unwrap_or(0.0),
    }
}

fn trace(vector: &IctVector) -> RadarTrace {
    RadarTrace {
        name: vector.name.clone(),
        values: vector
            .components()
            .iter()
            .map(|v| v.to_f64().unwrap_or(0.0))
            .collect(),
    }
}
