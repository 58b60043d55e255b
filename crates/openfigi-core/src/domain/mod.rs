//! # Domain Models
//!
//! Request value objects for the OpenFIGI API.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`BaseItem`] | Filter attributes shared by search, filter and mapping |
//! | [`MappingItem`] | Base item plus a third-party identifier |
//! | [`IdValue`] | Identifier value (text or integer) |
//! | [`NumericInterval`] | `[low, high]` range over numbers, either bound open |
//! | [`DateInterval`] | `[low, high]` range over `YYYY-MM-DD` dates, either bound open |
//!
//! ## Validation
//!
//! Items are only produced by their builders, which validate every
//! cross-field rule before returning:
//!
//! ```rust
//! use openfigi_core::{BaseItem, BaseItemSetters, ValidationError};
//!
//! let err = BaseItem::builder()
//!     .with_exch_code("US")
//!     .with_mic_code("XNYS")
//!     .build()
//!     .expect_err("exchCode and micCode are exclusive");
//! assert!(matches!(err, ValidationError::MutuallyExclusiveFields { .. }));
//! ```

mod base_item;
mod interval;
mod mapping_item;

pub use base_item::BaseItem;
pub use interval::{BoundedInterval, DateInterval, NumericInterval};
pub use mapping_item::{IdValue, MappingItem};
