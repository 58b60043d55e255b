use serde::Serialize;

use crate::builder::BaseItemBuilder;
use crate::domain::interval::{BoundedInterval, DateInterval, NumericInterval};
use crate::domain::mapping_item::{IdValue, MappingItem};
use crate::values::ValueKey;
use crate::ValidationError;

/// Descriptive filter attributes shared by search, filter and mapping jobs.
///
/// Every field is optional; an absent field places no constraint on that
/// dimension and is left out of the request body. Instances come out of
/// [`BaseItemBuilder::build`] and are immutable once validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) exch_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) mic_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) market_sec_des: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) security_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) security_type2: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub(crate) include_unlisted_equities: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) option_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) strike: Option<NumericInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) contract_size: Option<NumericInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) coupon: Option<NumericInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) expiration: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) maturity: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) state_code: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl BaseItem {
    pub fn builder() -> BaseItemBuilder {
        BaseItemBuilder::new()
    }

    pub fn exch_code(&self) -> Option<&str> {
        self.exch_code.as_deref()
    }

    pub fn mic_code(&self) -> Option<&str> {
        self.mic_code.as_deref()
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn market_sec_des(&self) -> Option<&str> {
        self.market_sec_des.as_deref()
    }

    pub fn security_type(&self) -> Option<&str> {
        self.security_type.as_deref()
    }

    pub fn security_type2(&self) -> Option<&str> {
        self.security_type2.as_deref()
    }

    pub const fn include_unlisted_equities(&self) -> bool {
        self.include_unlisted_equities
    }

    pub fn option_type(&self) -> Option<&str> {
        self.option_type.as_deref()
    }

    pub const fn strike(&self) -> Option<&NumericInterval> {
        self.strike.as_ref()
    }

    pub const fn contract_size(&self) -> Option<&NumericInterval> {
        self.contract_size.as_ref()
    }

    pub const fn coupon(&self) -> Option<&NumericInterval> {
        self.coupon.as_ref()
    }

    pub const fn expiration(&self) -> Option<&DateInterval> {
        self.expiration.as_ref()
    }

    pub const fn maturity(&self) -> Option<&DateInterval> {
        self.maturity.as_ref()
    }

    pub fn state_code(&self) -> Option<&str> {
        self.state_code.as_deref()
    }

    /// Attach a third-party identifier and validate the result as a mapping job.
    pub fn to_mapping_item(
        &self,
        id_type: impl Into<String>,
        id_value: impl Into<IdValue>,
    ) -> Result<MappingItem, ValidationError> {
        let item = MappingItem {
            base: self.clone(),
            id_type: id_type.into(),
            id_value: id_value.into(),
        };
        item.validate()?;
        Ok(item)
    }

    /// Checks run in a fixed order and stop at the first violation.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        ValueKey::ExchCode.check(self.exch_code())?;
        ValueKey::MicCode.check(self.mic_code())?;
        ValueKey::Currency.check(self.currency())?;
        ValueKey::MarketSecDes.check(self.market_sec_des())?;
        ValueKey::SecurityType.check(self.security_type())?;
        ValueKey::SecurityType2.check(self.security_type2())?;
        ValueKey::StateCode.check(self.state_code())?;
        ValueKey::OptionType.check(self.option_type())?;

        if self.exch_code.is_some() && self.mic_code.is_some() {
            return Err(ValidationError::MutuallyExclusiveFields {
                first: "exchCode",
                second: "micCode",
            });
        }

        let numeric = [
            ("strike", self.strike.as_ref()),
            ("contractSize", self.contract_size.as_ref()),
            ("coupon", self.coupon.as_ref()),
        ];
        for (field, interval) in numeric {
            if let Some(interval) = interval {
                interval.validate(field)?;
            }
        }

        let dates = [
            ("expiration", self.expiration.as_ref()),
            ("maturity", self.maturity.as_ref()),
        ];
        for (field, interval) in dates {
            if let Some(interval) = interval {
                interval.validate(field)?;
            }
        }

        if self.expiration.is_some() && self.security_type2() != Some("Option") {
            return Err(ValidationError::ConditionalFieldViolation {
                field: "expiration",
                required_by: "`securityType2` is `Option`",
            });
        }

        if self.maturity.is_some() && self.security_type2() != Some("Pool") {
            return Err(ValidationError::ConditionalFieldViolation {
                field: "maturity",
                required_by: "`securityType2` is `Pool`",
            });
        }

        Ok(())
    }
}
