use crate::constants::TARGET_PREFIX;
use paapi_sign_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Operation is one PA-API 5 operation.
///
/// Each operation fixes the canonical URI and the `x-amz-target` header that
/// get signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Look up items by ASIN.
    GetItems,
    /// Search items by keywords or browse node.
    SearchItems,
    /// Look up the variations of an item.
    GetVariations,
    /// Look up browse nodes by id.
    GetBrowseNodes,
}

impl Operation {
    /// All supported operations.
    pub const ALL: [Operation; 4] = [
        Operation::GetItems,
        Operation::SearchItems,
        Operation::GetVariations,
        Operation::GetBrowseNodes,
    ];

    /// Operation name as it appears in the target header.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetItems => "GetItems",
            Operation::SearchItems => "SearchItems",
            Operation::GetVariations => "GetVariations",
            Operation::GetBrowseNodes => "GetBrowseNodes",
        }
    }

    /// Canonical URI path, e.g. `/paapi5/getitems`.
    pub fn path(&self) -> &'static str {
        match self {
            Operation::GetItems => "/paapi5/getitems",
            Operation::SearchItems => "/paapi5/searchitems",
            Operation::GetVariations => "/paapi5/getvariations",
            Operation::GetBrowseNodes => "/paapi5/getbrowsenodes",
        }
    }

    /// Value of the `x-amz-target` header.
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}.{}", self.name())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::config_invalid(format!("unknown PA-API operation: {s}")))
    }
}
