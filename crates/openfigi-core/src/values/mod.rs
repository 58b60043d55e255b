//! Reference value sets for every enumerated request field.
//!
//! The tables in `tables.rs` are generated from `GET /v3/mapping/values/{key}`
//! by `openfigi generate-values` and checked in sorted and deduplicated.
//! `optionType` is not served there and is fixed to `Call` / `Put`. The
//! live list can be pulled at runtime with
//! [`OpenFigiClient::mapping_values`](crate::OpenFigiClient::mapping_values).

mod tables;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::config::DEFAULT_BASE_URL;
use crate::ValidationError;

use self::tables::{
    CURRENCIES, EXCH_CODES, ID_TYPES, MARKET_SEC_DES, MIC_CODES, SECURITY_TYPES,
    SECURITY_TYPES_2, STATE_CODES,
};

/// Constrained request field with a published list of accepted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKey {
    IdType,
    ExchCode,
    MicCode,
    Currency,
    MarketSecDes,
    SecurityType,
    SecurityType2,
    StateCode,
    OptionType,
}

impl ValueKey {
    pub const ALL: [Self; 9] = [
        Self::IdType,
        Self::ExchCode,
        Self::MicCode,
        Self::Currency,
        Self::MarketSecDes,
        Self::SecurityType,
        Self::SecurityType2,
        Self::StateCode,
        Self::OptionType,
    ];

    /// Keys served by `GET /v3/mapping/values/{key}`.
    pub const PUBLISHED: [Self; 8] = [
        Self::IdType,
        Self::ExchCode,
        Self::MicCode,
        Self::Currency,
        Self::MarketSecDes,
        Self::SecurityType,
        Self::SecurityType2,
        Self::StateCode,
    ];

    /// Wire name of the field, also the path segment of its values endpoint.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IdType => "idType",
            Self::ExchCode => "exchCode",
            Self::MicCode => "micCode",
            Self::Currency => "currency",
            Self::MarketSecDes => "marketSecDes",
            Self::SecurityType => "securityType",
            Self::SecurityType2 => "securityType2",
            Self::StateCode => "stateCode",
            Self::OptionType => "optionType",
        }
    }

    pub const fn values(self) -> &'static [&'static str] {
        match self {
            Self::IdType => ID_TYPES,
            Self::ExchCode => EXCH_CODES,
            Self::MicCode => MIC_CODES,
            Self::Currency => CURRENCIES,
            Self::MarketSecDes => MARKET_SEC_DES,
            Self::SecurityType => SECURITY_TYPES,
            Self::SecurityType2 => SECURITY_TYPES_2,
            Self::StateCode => STATE_CODES,
            Self::OptionType => OPTION_TYPES,
        }
    }

    /// Case-sensitive membership. Tables are sorted by byte order.
    pub fn contains(self, value: &str) -> bool {
        self.values().binary_search(&value).is_ok()
    }

    /// Public documentation URL listing the accepted values.
    pub fn reference_url(self) -> String {
        format!("{DEFAULT_BASE_URL}/mapping/values/{}", self.as_str())
    }

    /// Membership check used by item validation.
    pub(crate) fn check(self, value: Option<&str>) -> Result<(), ValidationError> {
        match value {
            Some(value) if !self.contains(value) => Err(ValidationError::InvalidEnumValue {
                field: self.as_str(),
                value: value.to_owned(),
                reference: self.reference_url(),
            }),
            _ => Ok(()),
        }
    }
}

impl Display for ValueKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKey {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownValueKey {
                value: trimmed.to_owned(),
            })
    }
}

/// Identifier types that need `securityType2` to resolve unambiguously.
pub const ID_TYPES_REQUIRING_SECURITY_TYPE_2: [&str; 2] = ["BASE_TICKER", "ID_EXCH_SYMBOL"];

const OPTION_TYPES: &[&str] = &["Call", "Put"];
