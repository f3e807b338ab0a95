//! `get-cryptocurrency-listings`: paginated latest listings with market data.

use super::{OperationDescriptor, ParamSpec, CONVERT, LIMIT, SORT_DIR, START};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    name: "get-cryptocurrency-listings",
    description: "Get latest cryptocurrency listings with market data",
    params: &[
        START,
        LIMIT,
        ParamSpec {
            name: "sort",
            description: "What to sort by (e.g., 'market_cap', 'volume_24h')",
        },
        SORT_DIR,
        ParamSpec {
            name: "cryptocurrency_type",
            description: "Filter by type (e.g., 'coins', 'tokens')",
        },
        CONVERT,
    ],
    defaults: &[("start", "1"), ("limit", "100"), ("convert", "USD")],
    path: "/cryptocurrency/listings/latest",
    rule: None,
    failure_text: "Failed to retrieve cryptocurrency listings",
};
