//! `get-cryptocurrency-quotes`: latest quotes for specific cryptocurrencies.

use super::{OperationDescriptor, CONVERT, IDS, REQUIRE_IDENTIFIER, SLUGS, SYMBOLS};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    name: "get-cryptocurrency-quotes",
    description: "Get latest quotes for specific cryptocurrencies",
    params: &[SYMBOLS, SLUGS, IDS, CONVERT],
    defaults: &[("convert", "USD")],
    path: "/cryptocurrency/quotes/latest",
    rule: Some(REQUIRE_IDENTIFIER),
    failure_text: "Failed to retrieve cryptocurrency quotes",
};
