//! The closed set of CoinMarketCap operations.
//!
//! Each operation is plain data: an [`OperationDescriptor`] naming its parameters,
//! defaults, upstream endpoint, optional [`BusinessRule`], and the fixed text shown
//! when the upstream call fails. One file per operation, enumerated by
//! [`OperationKind`].

pub mod cryptocurrency_info;
pub mod cryptocurrency_listings;
pub mod cryptocurrency_map;
pub mod cryptocurrency_quotes;
pub mod exchange_listings;
pub mod global_metrics;

use schemars::Schema;
use serde_json::{Map, Value};

/// Text returned when none of the identifying fields is supplied.
pub const IDENTIFIER_REQUIRED: &str =
    "Error: At least one of 'symbol', 'slug', or 'id' is required";

/// Fields accepted as cryptocurrency identifiers by quotes and info.
pub const IDENTIFIER_FIELDS: &[&str] = &["symbol", "slug", "id"];

/// A declared parameter. Every parameter is an optional string upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Cross-field precondition evaluated on the merged parameters before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessRule {
    /// At least one of `fields` must be present with a non-empty value.
    RequireAnyOf {
        fields: &'static [&'static str],
        message: &'static str,
    },
}

impl BusinessRule {
    /// Returns the failure message if `params` does not satisfy the rule.
    pub fn check(&self, params: &Map<String, Value>) -> Result<(), &'static str> {
        match self {
            Self::RequireAnyOf { fields, message } => {
                let satisfied = fields.iter().any(|field| match params.get(*field) {
                    Some(Value::String(s)) => !s.is_empty(),
                    Some(Value::Null) | None => false,
                    Some(Value::Bool(b)) => *b,
                    Some(_) => true,
                });
                if satisfied {
                    Ok(())
                } else {
                    Err(*message)
                }
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::RequireAnyOf { fields, .. } => format!("one of {}", fields.join("/")),
        }
    }
}

/// Immutable description of one proxied operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    pub defaults: &'static [(&'static str, &'static str)],
    /// Path appended to the upstream base URL, e.g. `/cryptocurrency/map`.
    pub path: &'static str,
    pub rule: Option<BusinessRule>,
    /// Text returned when the upstream call fails for any reason.
    pub failure_text: &'static str,
}

impl OperationDescriptor {
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Defaults as a JSON object, in declaration order.
    pub fn default_map(&self) -> Map<String, Value> {
        self.defaults
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
            .collect()
    }

    /// JSON Schema advertised to MCP clients. All properties are optional strings.
    pub fn input_schema(&self) -> Schema {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| {
                (
                    p.name.to_string(),
                    serde_json::json!({ "type": "string", "description": p.description }),
                )
            })
            .collect();
        schemars::json_schema!({
            "type": "object",
            "properties": properties,
        })
    }
}

/// Every operation this server exposes, in advertisement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    CryptocurrencyListings,
    CryptocurrencyQuotes,
    CryptocurrencyMap,
    CryptocurrencyInfo,
    GlobalMetrics,
    ExchangeListings,
}

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        Self::CryptocurrencyListings,
        Self::CryptocurrencyQuotes,
        Self::CryptocurrencyMap,
        Self::CryptocurrencyInfo,
        Self::GlobalMetrics,
        Self::ExchangeListings,
    ];

    pub fn descriptor(&self) -> &'static OperationDescriptor {
        match self {
            Self::CryptocurrencyListings => &cryptocurrency_listings::DESCRIPTOR,
            Self::CryptocurrencyQuotes => &cryptocurrency_quotes::DESCRIPTOR,
            Self::CryptocurrencyMap => &cryptocurrency_map::DESCRIPTOR,
            Self::CryptocurrencyInfo => &cryptocurrency_info::DESCRIPTOR,
            Self::GlobalMetrics => &global_metrics::DESCRIPTOR,
            Self::ExchangeListings => &exchange_listings::DESCRIPTOR,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.descriptor().name
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown operation: {s}"))
    }
}

// Shared parameter descriptions.
pub(crate) const START: ParamSpec = ParamSpec {
    name: "start",
    description: "Offset (starting with 1)",
};
pub(crate) const LIMIT: ParamSpec = ParamSpec {
    name: "limit",
    description: "Number of results (default: 100, max: 5000)",
};
pub(crate) const SORT_DIR: ParamSpec = ParamSpec {
    name: "sort_dir",
    description: "Direction: 'asc' or 'desc'",
};
pub(crate) const CONVERT: ParamSpec = ParamSpec {
    name: "convert",
    description: "Currency to convert prices to (e.g., 'USD', 'EUR')",
};
pub(crate) const SYMBOLS: ParamSpec = ParamSpec {
    name: "symbol",
    description: "Comma-separated list of symbols (e.g., 'BTC,ETH')",
};
pub(crate) const SLUGS: ParamSpec = ParamSpec {
    name: "slug",
    description: "Comma-separated list of slugs (e.g., 'bitcoin,ethereum')",
};
pub(crate) const IDS: ParamSpec = ParamSpec {
    name: "id",
    description: "Comma-separated list of CoinMarketCap IDs",
};

pub(crate) const REQUIRE_IDENTIFIER: BusinessRule = BusinessRule::RequireAnyOf {
    fields: IDENTIFIER_FIELDS,
    message: IDENTIFIER_REQUIRED,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = OperationKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), OperationKind::ALL.len());
    }

    #[test]
    fn every_default_is_a_declared_param() {
        for kind in OperationKind::ALL {
            let d = kind.descriptor();
            for (key, _) in d.defaults {
                assert!(d.param(key).is_some(), "{}: default {key} not declared", d.name);
            }
        }
    }

    #[test]
    fn kind_round_trips_through_name() {
        for kind in OperationKind::ALL {
            assert_eq!(kind.as_str().parse::<OperationKind>().unwrap(), kind);
        }
        assert!("get-nothing".parse::<OperationKind>().is_err());
    }

    #[test]
    fn identifier_rule_needs_a_non_empty_field() {
        let mut params = Map::new();
        assert_eq!(REQUIRE_IDENTIFIER.check(&params), Err(IDENTIFIER_REQUIRED));

        params.insert("symbol".into(), Value::String(String::new()));
        params.insert("slug".into(), Value::Null);
        assert!(REQUIRE_IDENTIFIER.check(&params).is_err());

        params.insert("id".into(), Value::String("1".into()));
        assert!(REQUIRE_IDENTIFIER.check(&params).is_ok());
    }

    #[test]
    fn input_schema_lists_every_param_as_optional_string() {
        let d = OperationKind::CryptocurrencyQuotes.descriptor();
        let schema = d.input_schema();
        let obj = schema.as_object().unwrap();
        assert_eq!(obj["type"], "object");
        assert!(obj.get("required").is_none());
        let props = obj["properties"].as_object().unwrap();
        assert_eq!(props.len(), d.params.len());
        assert_eq!(props["symbol"]["type"], "string");
    }

    #[test]
    fn default_map_keeps_declaration_order() {
        let map = OperationKind::CryptocurrencyMap.descriptor().default_map();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["listing_status", "start", "limit"]);
    }
}
