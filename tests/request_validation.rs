//! Behavior-driven tests for request construction.
//!
//! Every rule here is enforced locally by `build()`; none of these tests
//! touch a transport.

use openfigi_core::{
    BaseItem, BaseItemSetters, BoundedInterval, DateInterval, IdValue, IntervalFault,
    MappingItem, MappingItemBuilder, MappingRequest, NumericInterval, ValidationError, ValueKey,
};

// =============================================================================
// Reference Sets
// =============================================================================

#[test]
fn when_enumerated_field_is_outside_its_reference_set_build_names_that_field() {
    // Given: one builder per enumerated field, each with an unknown value
    let attempts = [
        ("exchCode", BaseItem::builder().with_exch_code("ZZ").build()),
        ("micCode", BaseItem::builder().with_mic_code("ZZZZ").build()),
        ("currency", BaseItem::builder().with_currency("XXX").build()),
        (
            "marketSecDes",
            BaseItem::builder().with_market_sec_des("Stuff").build(),
        ),
        (
            "securityType",
            BaseItem::builder().with_security_type("Stuff").build(),
        ),
        (
            "securityType2",
            BaseItem::builder().with_security_type2("Stuff").build(),
        ),
        ("stateCode", BaseItem::builder().with_state_code("ZZ").build()),
        ("optionType", BaseItem::builder().with_option_type("Both").build()),
    ];

    // Then: each build fails with InvalidEnumValue for exactly that field
    for (expected_field, result) in attempts {
        match result {
            Err(ValidationError::InvalidEnumValue {
                field, reference, ..
            }) => {
                assert_eq!(field, expected_field);
                assert!(
                    reference.ends_with(&format!("/mapping/values/{expected_field}")),
                    "reference should point at the values endpoint, got {reference}"
                );
            }
            other => panic!("expected InvalidEnumValue for {expected_field}, got {other:?}"),
        }
    }
}

#[test]
fn when_reference_values_are_used_build_succeeds() {
    // Given: a member of every enumerated set
    let result = BaseItem::builder()
        .with_exch_code("US")
        .with_currency("USD")
        .with_market_sec_des("Equity")
        .with_security_type("Common Stock")
        .with_security_type2("Common Stock")
        .with_state_code("NY")
        .with_option_type("Call")
        .build();

    // Then: nothing is rejected
    assert!(result.is_ok(), "unexpected failure: {result:?}");
}

#[test]
fn listed_option_and_pool_filters_from_other_markets_build() {
    // Given: an Australian commodity option filter with every numeric range set
    let option = BaseItem::builder()
        .with_exch_code("AU")
        .with_currency("AUD")
        .with_market_sec_des("Comdty")
        .with_security_type("Option")
        .with_security_type2("Option")
        .with_strike(NumericInterval::new(Some(2.0), Some(10.0)))
        .with_contract_size(NumericInterval::new(Some(2.0), Some(10.0)))
        .with_coupon(NumericInterval::new(Some(2.0), Some(10.0)))
        .with_expiration((Some("2021-01-01"), Some("2022-01-01")))
        .build();

    // And: a pool filter on a MIC with a state code outside the US states
    let pool = BaseItem::builder()
        .with_mic_code("BMTF")
        .with_security_type2("Pool")
        .with_maturity((Some("2021-01-01"), Some("2022-01-01")))
        .with_state_code("AC")
        .build();

    // Then: both are accepted
    assert!(option.is_ok(), "option filter rejected: {option:?}");
    let pool = pool.expect("pool filter accepted");
    assert_eq!(pool.state_code(), Some("AC"));
    assert_eq!(pool.mic_code(), Some("BMTF"));
}

#[test]
fn when_enumerated_setter_receives_empty_string_field_is_left_unset() {
    // Given: empty strings for enumerated fields
    let item = BaseItem::builder()
        .with_exch_code("")
        .with_mic_code("")
        .with_currency("")
        .build()
        .expect("empty values mean unset");

    // Then: neither the exclusivity rule nor serialization sees them
    assert_eq!(item.exch_code(), None);
    assert_eq!(item.mic_code(), None);
    assert_eq!(serde_json::to_string(&item).expect("serialize"), "{}");
}

#[test]
fn when_setter_is_called_twice_last_value_wins() {
    let item = BaseItem::builder()
        .with_exch_code("ZZ")
        .with_exch_code("US")
        .build()
        .expect("later valid value replaces earlier invalid one");

    assert_eq!(item.exch_code(), Some("US"));
}

#[test]
fn value_keys_cover_every_constrained_field() {
    let names: Vec<&str> = ValueKey::ALL.iter().map(|key| key.as_str()).collect();

    assert_eq!(
        names,
        [
            "idType",
            "exchCode",
            "micCode",
            "currency",
            "marketSecDes",
            "securityType",
            "securityType2",
            "stateCode",
            "optionType",
        ]
    );
    assert!(ValueKey::IdType.contains("TICKER"));
    assert!(!ValueKey::IdType.contains("ticker"));
}

// =============================================================================
// Mutual Exclusion
// =============================================================================

#[test]
fn when_exch_code_and_mic_code_are_both_set_build_fails_regardless_of_other_fields() {
    // Given: both codes set, with and without unrelated valid fields
    let bare = BaseItem::builder()
        .with_exch_code("US")
        .with_mic_code("XNYS")
        .build();
    let decorated = BaseItem::builder()
        .with_currency("USD")
        .with_exch_code("US")
        .with_mic_code("XNYS")
        .with_strike((Some(1.0), Some(2.0)))
        .build();

    // Then: both report the exclusivity violation
    let expected = ValidationError::MutuallyExclusiveFields {
        first: "exchCode",
        second: "micCode",
    };
    assert_eq!(bare, Err(expected.clone()));
    assert_eq!(decorated, Err(expected));
}

#[test]
fn enum_membership_is_checked_before_exclusivity() {
    let result = BaseItem::builder()
        .with_exch_code("US")
        .with_mic_code("ZZZZ")
        .build();

    assert!(matches!(
        result,
        Err(ValidationError::InvalidEnumValue {
            field: "micCode",
            ..
        })
    ));
}

// =============================================================================
// Numeric Intervals
// =============================================================================

#[test]
fn numeric_interval_ordering_property() {
    let samples = [-5.0, 0.0, 0.5, 1.0, 130.0];

    for low in samples {
        for high in samples {
            // Given: a fully bounded interval
            let result = NumericInterval::between(low, high).validate("strike");

            // Then: it passes exactly when low <= high
            if low <= high {
                assert!(result.is_ok(), "[{low}, {high}] should pass");
            } else {
                assert!(
                    matches!(
                        result,
                        Err(ValidationError::InvalidInterval {
                            field: "strike",
                            fault: IntervalFault::Reversed { .. },
                        })
                    ),
                    "[{low}, {high}] should be reversed, got {result:?}"
                );
            }
        }

        // And: one-sided intervals always pass
        assert!(NumericInterval::at_least(low).validate("strike").is_ok());
        assert!(NumericInterval::at_most(low).validate("strike").is_ok());
    }
}

#[test]
fn unbounded_strike_is_rejected() {
    // Given: a strike interval with neither bound
    let result = BaseItem::builder().with_strike((None, None)).build();

    // Then: InvalidInterval for strike
    assert_eq!(
        result,
        Err(ValidationError::InvalidInterval {
            field: "strike",
            fault: IntervalFault::Unbounded,
        })
    );
}

#[test]
fn every_numeric_field_is_validated_with_its_own_name() {
    let contract_size = BaseItem::builder()
        .with_contract_size([Some(10.0), Some(1.0)])
        .build();
    let coupon = BaseItem::builder().with_coupon((None, None)).build();

    assert!(matches!(
        contract_size,
        Err(ValidationError::InvalidInterval {
            field: "contractSize",
            ..
        })
    ));
    assert!(matches!(
        coupon,
        Err(ValidationError::InvalidInterval {
            field: "coupon",
            ..
        })
    ));
}

#[test]
fn non_finite_bounds_are_rejected() {
    let result = BaseItem::builder()
        .with_strike((Some(f64::NAN), None))
        .build();

    assert!(matches!(
        result,
        Err(ValidationError::InvalidInterval {
            field: "strike",
            fault: IntervalFault::NonFinite { .. },
        })
    ));
}

#[test]
fn open_numeric_bounds_serialize_as_null() {
    let item = BaseItem::builder()
        .with_strike((None, Some(2.0)))
        .build()
        .expect("one-sided interval is valid");

    assert_eq!(
        serde_json::to_value(&item).expect("serialize"),
        serde_json::json!({ "strike": [null, 2.0] })
    );
}

// =============================================================================
// Date Intervals and Conditional Fields
// =============================================================================

#[test]
fn unparseable_date_fails_with_format_error_before_ordering_check() {
    // Given: a malformed low bound that would also sort after the high bound
    let interval = DateInterval::new(Some("2022/01/01"), Some("2021-01-01"));

    // Then: the format problem is reported
    assert_eq!(
        interval.validate("expiration"),
        Err(ValidationError::InvalidDateFormat {
            field: "expiration",
            value: String::from("2022/01/01"),
        })
    );

    // And: a malformed high bound is caught too
    let high = DateInterval::new(Some("2021-01-01"), Some("2021-02-30"));
    assert!(matches!(
        high.validate("maturity"),
        Err(ValidationError::InvalidDateFormat {
            field: "maturity",
            ..
        })
    ));
}

#[test]
fn signed_years_are_not_dates() {
    for signed in ["+2021-01-01", "-2021-01-01"] {
        // Given: an option filter whose expiration carries a signed year
        let result = BaseItem::builder()
            .with_security_type2("Option")
            .with_expiration((Some(signed), Some("2022-01-01")))
            .build();

        // Then: the bound is rejected as malformed
        assert_eq!(
            result,
            Err(ValidationError::InvalidDateFormat {
                field: "expiration",
                value: signed.to_owned(),
            })
        );
    }
}

#[test]
fn date_interval_ordering_and_bounds() {
    let reversed = DateInterval::new(Some("2021-06-01"), Some("2021-01-01"));
    let same_day = DateInterval::new(Some("2021-06-01"), Some("2021-06-01"));
    let open_high = DateInterval::new(Some("2021-06-01"), None);
    let empty = DateInterval::new(Some(""), None);

    assert!(matches!(
        reversed.validate("expiration"),
        Err(ValidationError::InvalidInterval {
            fault: IntervalFault::Reversed { .. },
            ..
        })
    ));
    assert!(same_day.validate("expiration").is_ok());
    assert!(open_high.validate("expiration").is_ok());
    assert!(matches!(
        empty.validate("expiration"),
        Err(ValidationError::InvalidInterval {
            fault: IntervalFault::Unbounded,
            ..
        })
    ));
}

#[test]
fn expiration_requires_option_security_type2() {
    let window = (Some("2021-01-01"), Some("2021-06-30"));

    // Given: expiration with and without the Option type
    let missing = BaseItem::builder().with_expiration(window).build();
    let wrong = BaseItem::builder()
        .with_security_type2("Pool")
        .with_expiration(window)
        .build();
    let right = BaseItem::builder()
        .with_security_type2("Option")
        .with_expiration(window)
        .build();

    // Then: only the Option item is accepted
    for result in [missing, wrong] {
        assert!(matches!(
            result,
            Err(ValidationError::ConditionalFieldViolation {
                field: "expiration",
                ..
            })
        ));
    }
    let item = right.expect("Option allows expiration");
    assert_eq!(
        serde_json::to_value(&item).expect("serialize"),
        serde_json::json!({
            "securityType2": "Option",
            "expiration": ["2021-01-01", "2021-06-30"],
        })
    );
}

#[test]
fn maturity_requires_pool_security_type2() {
    let window = (Some("2019-01-01"), None);

    let wrong = BaseItem::builder()
        .with_security_type2("Option")
        .with_maturity(window)
        .build();
    let right = BaseItem::builder()
        .with_security_type2("Pool")
        .with_maturity(window)
        .build();

    assert!(matches!(
        wrong,
        Err(ValidationError::ConditionalFieldViolation {
            field: "maturity",
            ..
        })
    ));
    assert!(right.is_ok());
}

#[test]
fn interval_is_validated_before_conditional_rule() {
    let result = BaseItem::builder()
        .with_maturity((Some("not-a-date"), None))
        .build();

    assert!(matches!(
        result,
        Err(ValidationError::InvalidDateFormat {
            field: "maturity",
            ..
        })
    ));
}

// =============================================================================
// Mapping Items
// =============================================================================

#[test]
fn exchange_and_common_stock_builds_with_other_fields_empty() {
    // Given: exchange code and security type 2 only
    let item = BaseItem::builder()
        .with_exch_code("US")
        .with_security_type2("Common Stock")
        .build()
        .expect("plain equity filter must build");

    // Then: every other field stays unset
    assert_eq!(item.exch_code(), Some("US"));
    assert_eq!(item.security_type2(), Some("Common Stock"));
    assert_eq!(item.mic_code(), None);
    assert_eq!(item.currency(), None);
    assert_eq!(item.strike(), None);
    assert_eq!(item.expiration(), None);
    assert!(!item.include_unlisted_equities());
}

#[test]
fn identifier_types_needing_security_type2_fail_without_it() {
    for id_type in ["BASE_TICKER", "ID_EXCH_SYMBOL"] {
        // Given: the identifier type alone
        let missing = MappingItem::builder(id_type, "IBM").build();

        // Then: MissingRequiredField names the identifier type
        assert_eq!(
            missing,
            Err(ValidationError::MissingRequiredField {
                field: "securityType2",
                required_by: id_type.to_owned(),
            })
        );

        // And: supplying securityType2 fixes it
        let present = MappingItem::builder(id_type, "IBM")
            .with_security_type2("Common Stock")
            .build();
        assert!(present.is_ok(), "{id_type} with securityType2 should build");
    }
}

#[test]
fn unknown_identifier_type_is_rejected_after_base_checks() {
    let unknown = MappingItem::builder("TICKR", "IBM").build();
    let both_wrong = MappingItem::builder("TICKR", "IBM")
        .with_currency("XXX")
        .build();

    assert!(matches!(
        unknown,
        Err(ValidationError::InvalidEnumValue {
            field: "idType",
            ..
        })
    ));
    assert!(matches!(
        both_wrong,
        Err(ValidationError::InvalidEnumValue {
            field: "currency",
            ..
        })
    ));
}

#[test]
fn mapping_item_shares_every_base_rule() {
    let result = MappingItem::builder("ID_ISIN", "US4592001014")
        .with_exch_code("US")
        .with_mic_code("XNYS")
        .build();

    assert!(matches!(
        result,
        Err(ValidationError::MutuallyExclusiveFields { .. })
    ));
}

#[test]
fn identifier_value_keeps_its_json_type() {
    let numeric = MappingItem::builder("ID_BB_SEC_NUM_DES", 12345_i64)
        .build()
        .expect("numeric identifier is valid");

    assert_eq!(numeric.id_value(), &IdValue::Integer(12345));
    assert_eq!(
        serde_json::to_value(&numeric).expect("serialize"),
        serde_json::json!({ "idType": "ID_BB_SEC_NUM_DES", "idValue": 12345 })
    );
}

#[test]
fn builder_can_be_reused_after_build() {
    // Given: a builder that produced one job
    let builder = MappingItemBuilder::new("TICKER", "IBM").with_exch_code("US");
    let first = builder.build().expect("valid");

    // When: it is extended and built again
    let second = builder
        .clone()
        .with_currency("USD")
        .build()
        .expect("valid");

    // Then: the first item is unaffected
    assert_eq!(first.base().currency(), None);
    assert_eq!(second.base().currency(), Some("USD"));
}

#[test]
fn base_item_and_mapping_item_convert_both_ways() {
    let base = BaseItem::builder()
        .with_exch_code("US")
        .build()
        .expect("valid");

    let job = base
        .to_mapping_item("TICKER", "IBM")
        .expect("valid mapping job");
    assert_eq!(job.to_base_item(), Ok(base.clone()));

    let rejected = base.to_mapping_item("BASE_TICKER", "IBM");
    assert!(matches!(
        rejected,
        Err(ValidationError::MissingRequiredField { .. })
    ));
}

#[test]
fn mapping_request_preserves_job_order() {
    let request: MappingRequest = ["IBM", "MSFT", "AAPL"]
        .into_iter()
        .map(|ticker| {
            MappingItem::builder("TICKER", ticker)
                .with_exch_code("US")
                .build()
                .expect("valid job")
        })
        .collect();

    let tickers: Vec<String> = request
        .items()
        .iter()
        .map(|job| job.id_value().to_string())
        .collect();
    assert_eq!(tickers, ["IBM", "MSFT", "AAPL"]);
}
