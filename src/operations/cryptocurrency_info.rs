//! `get-cryptocurrency-info`: static metadata (logo, links, description).

use super::{OperationDescriptor, IDS, REQUIRE_IDENTIFIER, SLUGS, SYMBOLS};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    name: "get-cryptocurrency-info",
    description: "Get metadata for cryptocurrencies",
    params: &[SYMBOLS, SLUGS, IDS],
    defaults: &[],
    path: "/cryptocurrency/info",
    rule: Some(REQUIRE_IDENTIFIER),
    failure_text: "Failed to retrieve cryptocurrency info",
};
