use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::builder::MappingItemBuilder;
use crate::domain::base_item::BaseItem;
use crate::values::{ValueKey, ID_TYPES_REQUIRING_SECURITY_TYPE_2};
use crate::ValidationError;

/// Third-party identifier value.
///
/// The API accepts any JSON scalar here; in practice identifiers are text,
/// with the occasional bare number (e.g. `ID_BB_UNIQUE` digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Text(String),
    Integer(i64),
}

impl Display for IdValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for IdValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for IdValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for IdValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// One job of a bulk mapping request: a [`BaseItem`] plus the identifier
/// to resolve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingItem {
    #[serde(flatten)]
    pub(crate) base: BaseItem,
    #[serde(rename = "idType")]
    pub(crate) id_type: String,
    #[serde(rename = "idValue")]
    pub(crate) id_value: IdValue,
}

impl MappingItem {
    pub fn builder(id_type: impl Into<String>, id_value: impl Into<IdValue>) -> MappingItemBuilder {
        MappingItemBuilder::new(id_type, id_value)
    }

    pub fn base(&self) -> &BaseItem {
        &self.base
    }

    pub fn id_type(&self) -> &str {
        &self.id_type
    }

    pub fn id_value(&self) -> &IdValue {
        &self.id_value
    }

    /// Drop the identifier, keeping the validated filter attributes.
    pub fn to_base_item(&self) -> Result<BaseItem, ValidationError> {
        self.base.validate()?;
        Ok(self.base.clone())
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        self.base.validate()?;
        self.validate_identifier()
    }

    /// Identifier rules only; the base is assumed to be validated already.
    pub(crate) fn validate_identifier(&self) -> Result<(), ValidationError> {
        ValueKey::IdType.check(Some(self.id_type.as_str()))?;

        if ID_TYPES_REQUIRING_SECURITY_TYPE_2.contains(&self.id_type.as_str())
            && self.base.security_type2().is_none()
        {
            return Err(ValidationError::MissingRequiredField {
                field: "securityType2",
                required_by: self.id_type.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat_with_identifier_fields() {
        let item = BaseItem {
            exch_code: Some(String::from("US")),
            ..BaseItem::default()
        }
        .to_mapping_item("TICKER", "IBM")
        .expect("valid mapping item");

        assert_eq!(
            serde_json::to_value(&item).expect("serialize"),
            serde_json::json!({ "exchCode": "US", "idType": "TICKER", "idValue": "IBM" })
        );
    }

    #[test]
    fn numeric_identifier_serializes_as_number() {
        let item = BaseItem::default()
            .to_mapping_item("ID_BB_UNIQUE", 12345_i64)
            .expect("valid mapping item");
        assert_eq!(
            serde_json::to_value(&item).expect("serialize")["idValue"],
            serde_json::json!(12345)
        );
        assert_eq!(item.id_value().to_string(), "12345");
    }

    #[test]
    fn identifier_rules_do_not_revisit_the_base() {
        let item = MappingItem {
            base: BaseItem {
                exch_code: Some(String::from("ZZ")),
                ..BaseItem::default()
            },
            id_type: String::from("TICKER"),
            id_value: IdValue::from("IBM"),
        };

        assert!(item.validate_identifier().is_ok());
        assert!(matches!(
            item.validate(),
            Err(ValidationError::InvalidEnumValue { field: "exchCode", .. })
        ));
    }

    #[test]
    fn identifier_rules_read_security_type2_from_the_base() {
        let mut item = MappingItem {
            base: BaseItem::default(),
            id_type: String::from("BASE_TICKER"),
            id_value: IdValue::from("IBM 10/22/21 C130"),
        };
        assert!(matches!(
            item.validate_identifier(),
            Err(ValidationError::MissingRequiredField { field: "securityType2", .. })
        ));

        item.base.security_type2 = Some(String::from("Option"));
        assert!(item.validate_identifier().is_ok());
    }

    #[test]
    fn empty_id_type_is_rejected() {
        let err = BaseItem::default()
            .to_mapping_item("", "IBM")
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidEnumValue { field: "idType", .. }));
    }

    #[test]
    fn to_base_item_strips_identifier() {
        let item = BaseItem {
            security_type2: Some(String::from("Common Stock")),
            ..BaseItem::default()
        }
        .to_mapping_item("BASE_TICKER", "IBM")
        .expect("valid mapping item");

        let base = item.to_base_item().expect("valid base item");
        assert_eq!(base.security_type2(), Some("Common Stock"));
    }
}
