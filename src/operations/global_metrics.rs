//! `get-global-metrics`: market-wide totals such as total market cap and BTC dominance.

use super::{OperationDescriptor, CONVERT};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    name: "get-global-metrics",
    description: "Get latest global cryptocurrency market metrics",
    params: &[CONVERT],
    defaults: &[("convert", "USD")],
    path: "/global-metrics/quotes/latest",
    rule: None,
    failure_text: "Failed to retrieve global metrics",
};
