//! `get-exchange-listings`: paginated exchange list with market data.

use super::{OperationDescriptor, ParamSpec, CONVERT, LIMIT, SORT_DIR, START};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    name: "get-exchange-listings",
    description: "Get list of all exchanges with market data",
    params: &[
        START,
        LIMIT,
        ParamSpec {
            name: "sort",
            description: "What to sort by (e.g., 'volume_24h')",
        },
        SORT_DIR,
        ParamSpec {
            name: "market_type",
            description: "Filter by market type (e.g., 'spot', 'derivatives')",
        },
        CONVERT,
    ],
    defaults: &[("start", "1"), ("limit", "100"), ("convert", "USD")],
    path: "/exchange/listings/latest",
    rule: None,
    failure_text: "Failed to retrieve exchange listings",
};
