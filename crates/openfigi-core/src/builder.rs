//! Fluent builders for [`BaseItem`] and [`MappingItem`].
//!
//! Setters only record values; every rule is checked by `build()`, which
//! reports the first violation it finds.
//!
//! ```rust
//! use openfigi_core::{BaseItemSetters, MappingItem};
//!
//! let item = MappingItem::builder("TICKER", "IBM")
//!     .with_exch_code("US")
//!     .build()
//!     .expect("valid mapping job");
//! assert_eq!(item.base().exch_code(), Some("US"));
//! ```

use crate::domain::{BaseItem, DateInterval, IdValue, MappingItem, NumericInterval};
use crate::ValidationError;

fn non_empty(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|value| !value.is_empty())
}

/// Setters for every [`BaseItem`] field.
///
/// Implemented by both builders so a mapping job accepts exactly the same
/// filter attributes as a search. An empty string clears the field.
pub trait BaseItemSetters: Sized {
    /// Fields being accumulated.
    fn base_item_mut(&mut self) -> &mut BaseItem;

    /// Cannot be combined with `micCode`.
    fn with_exch_code(mut self, exch_code: impl Into<String>) -> Self {
        self.base_item_mut().exch_code = non_empty(exch_code);
        self
    }

    /// ISO market identification code. Cannot be combined with `exchCode`.
    fn with_mic_code(mut self, mic_code: impl Into<String>) -> Self {
        self.base_item_mut().mic_code = non_empty(mic_code);
        self
    }

    fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.base_item_mut().currency = non_empty(currency);
        self
    }

    fn with_market_sec_des(mut self, market_sec_des: impl Into<String>) -> Self {
        self.base_item_mut().market_sec_des = non_empty(market_sec_des);
        self
    }

    fn with_security_type(mut self, security_type: impl Into<String>) -> Self {
        self.base_item_mut().security_type = non_empty(security_type);
        self
    }

    /// Usually less specific than `securityType`.
    fn with_security_type2(mut self, security_type2: impl Into<String>) -> Self {
        self.base_item_mut().security_type2 = non_empty(security_type2);
        self
    }

    fn with_include_unlisted_equities(mut self, include: bool) -> Self {
        self.base_item_mut().include_unlisted_equities = include;
        self
    }

    /// `Call` or `Put`.
    fn with_option_type(mut self, option_type: impl Into<String>) -> Self {
        self.base_item_mut().option_type = non_empty(option_type);
        self
    }

    /// `builder.with_strike((None, Some(2.0)))`
    fn with_strike(mut self, strike: impl Into<NumericInterval>) -> Self {
        self.base_item_mut().strike = Some(strike.into());
        self
    }

    fn with_contract_size(mut self, contract_size: impl Into<NumericInterval>) -> Self {
        self.base_item_mut().contract_size = Some(contract_size.into());
        self
    }

    fn with_coupon(mut self, coupon: impl Into<NumericInterval>) -> Self {
        self.base_item_mut().coupon = Some(coupon.into());
        self
    }

    /// Requires `securityType2` to be `Option`.
    ///
    /// `builder.with_expiration((Some("2021-01-01"), Some("2022-01-01")))`
    fn with_expiration(mut self, expiration: impl Into<DateInterval>) -> Self {
        self.base_item_mut().expiration = Some(expiration.into());
        self
    }

    /// Requires `securityType2` to be `Pool`.
    fn with_maturity(mut self, maturity: impl Into<DateInterval>) -> Self {
        self.base_item_mut().maturity = Some(maturity.into());
        self
    }

    fn with_state_code(mut self, state_code: impl Into<String>) -> Self {
        self.base_item_mut().state_code = non_empty(state_code);
        self
    }
}

/// Accumulates [`BaseItem`] fields for search and filter queries.
#[derive(Debug, Clone, Default)]
pub struct BaseItemBuilder {
    item: BaseItem,
}

impl BaseItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the accumulated fields. The builder stays usable afterwards.
    pub fn build(&self) -> Result<BaseItem, ValidationError> {
        self.item.validate()?;
        Ok(self.item.clone())
    }
}

impl BaseItemSetters for BaseItemBuilder {
    fn base_item_mut(&mut self) -> &mut BaseItem {
        &mut self.item
    }
}

/// Accumulates a [`MappingItem`]: identifier plus an embedded
/// [`BaseItemBuilder`] that receives every filter setter.
#[derive(Debug, Clone)]
pub struct MappingItemBuilder {
    base: BaseItemBuilder,
    id_type: String,
    id_value: IdValue,
}

impl MappingItemBuilder {
    pub fn new(id_type: impl Into<String>, id_value: impl Into<IdValue>) -> Self {
        Self {
            base: BaseItemBuilder::new(),
            id_type: id_type.into(),
            id_value: id_value.into(),
        }
    }

    /// Build the embedded base item first, then apply the identifier rules.
    pub fn build(&self) -> Result<MappingItem, ValidationError> {
        let item = MappingItem {
            base: self.base.build()?,
            id_type: self.id_type.clone(),
            id_value: self.id_value.clone(),
        };
        item.validate_identifier()?;
        Ok(item)
    }
}

impl BaseItemSetters for MappingItemBuilder {
    fn base_item_mut(&mut self) -> &mut BaseItem {
        self.base.base_item_mut()
    }
}
