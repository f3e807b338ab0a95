//! `get-cryptocurrency-map`: maps every cryptocurrency to its CoinMarketCap ID.

use super::{OperationDescriptor, ParamSpec, LIMIT, START};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    name: "get-cryptocurrency-map",
    description: "Get mapping of all cryptocurrencies to CoinMarketCap IDs",
    params: &[
        ParamSpec {
            name: "listing_status",
            description: "Filter by status (e.g., 'active', 'inactive')",
        },
        START,
        LIMIT,
        ParamSpec {
            name: "symbol",
            description: "Filter by symbol(s) (comma-separated)",
        },
    ],
    defaults: &[("listing_status", "active"), ("start", "1"), ("limit", "100")],
    path: "/cryptocurrency/map",
    rule: None,
    failure_text: "Failed to retrieve cryptocurrency map",
};
