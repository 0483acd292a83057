//! Behavioural properties across the public API.

use pg_literal::{
    decode_array, encode_array, CodecConfig, Date, DateRange, Int4, Int4MultiRange, Int4Range,
    Int8, LowerBound, MultiRange, Numeric, ParseError, PgArray, PgValue, Range, RangeInput, Text,
    Timestamp, UpperBound, Uuid,
};
use proptest::prelude::*;
use serde_json::json;

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_equal_date_endpoints_collapse_to_empty() {
    let range = DateRange::safe_from("[2004-10-19,2004-10-19)").unwrap();
    assert!(range.is_empty());
    assert_eq!(range.to_string(), "empty");
}

#[test]
fn test_text_multirange_renders_unchanged() {
    let multi = MultiRange::<Text>::safe_from("{[a,c),[d,f)}").unwrap();
    assert_eq!(multi.to_string(), "{[a,c),[d,f)}");
    assert_eq!(multi.ranges().len(), 2);
}

#[test]
fn test_empty_braces_have_no_ranges() {
    assert_eq!(Int4MultiRange::safe_from("{}").unwrap().ranges().len(), 0);
}

#[test]
fn test_empty_normalization_depends_on_bounds() {
    let half_open =
        Int4Range::safe_from(json!({"lower": "[", "upper": ")", "values": [7, 7]})).unwrap();
    assert!(half_open.is_empty());

    let closed =
        Int4Range::safe_from(json!({"lower": "[", "upper": "]", "values": [7, 7]})).unwrap();
    assert!(!closed.is_empty());
}

#[test]
fn test_membership_boundary() {
    let range = Int4Range::safe_from("[10,20)").unwrap();
    assert!(range.is_within_range(10).unwrap());
    assert!(!range.is_within_range(20).unwrap());
}

#[test]
fn test_error_payload_serializes_with_code() {
    let err = Int4Range::from_args(vec!["9".into(), "3".into()]).unwrap_err();
    assert_eq!(err.code(), "invalid_range_bound");
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({"code": "invalid_range_bound", "lower": "9", "upper": "3"})
    );
    assert_eq!(err.message(), err.to_string());
}

#[test]
fn test_equality_is_reflexive_for_every_type() {
    fn check<T: PgValue>(text: &str) {
        let value = T::safe_from(text).unwrap();
        assert!(value.equals(value.to_string()).unwrap(), "{} text", text);
        assert!(value.equals(value.to_json()).unwrap(), "{} json", text);
        assert!(value.equals(value.clone()).unwrap(), "{} value", text);
    }

    check::<Int4>("42");
    check::<Int8>("-9000000000");
    check::<Numeric>("3.1400");
    check::<Date>("2004-10-19");
    check::<Timestamp>("2004-10-19 10:23:54.5");
    check::<pg_literal::Timestamptz>("2004-10-19 10:23:54+02");
    check::<Text>("hello world");
    check::<Uuid>("a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11");
    check::<pg_literal::Bit<3>>("101");
    check::<Int4Range>("(1,5]");
    check::<Int4Range>("empty");
    check::<DateRange>("[2004-10-19,2004-11-01)");
    check::<pg_literal::TsRange>("[\"2004-10-19 10:00:00\",\"2004-10-19 12:00:00\")");
    check::<Int4MultiRange>("{[1,3),empty,[5,5]}");
    check::<PgArray<Int4>>("{1,NULL,3}");
    check::<PgArray<Int4Range>>("{\"[1,2)\",empty}");
}

#[test]
fn test_nested_literals_through_the_array_codec() {
    let ranges = vec![
        Int4Range::safe_from("[1,5)").unwrap(),
        Int4Range::empty(),
        Range::new(LowerBound::Exclusive, Int4::new(2), Int4::new(9), UpperBound::Inclusive)
            .unwrap(),
    ];
    let array = PgArray::from_values(ranges.clone());
    let text = array.to_string();
    assert_eq!(text, "{\"[1,5)\",empty,\"(2,9]\"}");
    assert_eq!(
        PgArray::<Int4Range>::safe_from(text.as_str()).unwrap().into_items(),
        ranges.into_iter().map(Some).collect::<Vec<_>>()
    );
}

#[test]
fn test_config_drives_parsing() {
    let config = CodecConfig::from_yaml("array_delimiter: \";\"\ncase_insensitive_empty: false\n")
        .unwrap();
    assert!(Int4Range::parse_text_with("EMPTY", &config).is_err());
    assert_eq!(
        decode_array("{a,b;c}", &config).unwrap(),
        vec![Some("a,b".to_string()), Some("c".to_string())]
    );
}

#[test]
fn test_positional_range_arguments_reject_nesting() {
    let inner: RangeInput<Int4> = Int4Range::safe_from("[1,2)").unwrap().into();
    assert_eq!(
        Int4Range::from_args(vec![inner, "3".into()]).unwrap_err(),
        ParseError::invalid_type("int4", "range")
    );
}

// =============================================================================
// Properties
// =============================================================================

fn arb_bound_pair() -> impl Strategy<Value = (LowerBound, UpperBound)> {
    (
        prop_oneof![Just(LowerBound::Inclusive), Just(LowerBound::Exclusive)],
        prop_oneof![Just(UpperBound::Inclusive), Just(UpperBound::Exclusive)],
    )
}

fn arb_int_range_text() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just("empty".to_string()),
        8 => (arb_bound_pair(), any::<i32>(), any::<i32>()).prop_map(|((lower, upper), a, b)| {
            let (a, b) = if a <= b { (a, b) } else { (b, a) };
            format!("{}{},{}{}", lower, a, b, upper)
        }),
    ]
}

proptest! {
    /// Parsing canonical output gives back the same range.
    #[test]
    fn range_text_round_trip(text in arb_int_range_text()) {
        let range = Int4Range::safe_from(text.as_str()).unwrap();
        let reparsed = Int4Range::safe_from(range.to_string()).unwrap();
        prop_assert_eq!(&reparsed, &range);
        prop_assert_eq!(reparsed.to_string(), range.to_string());
    }

    /// Equal endpoints survive only as `[x,x]`.
    #[test]
    fn equal_endpoints_normalize(x in any::<i32>(), (lower, upper) in arb_bound_pair()) {
        let range = Range::new(lower, Int4::new(x), Int4::new(x), upper).unwrap();
        let kept = lower == LowerBound::Inclusive && upper == UpperBound::Inclusive;
        prop_assert_eq!(range.is_empty(), !kept);
    }

    /// A lower endpoint above the upper one is always rejected, never swapped.
    #[test]
    fn reversed_endpoints_rejected(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a > b);
        let err = Int4Range::from_args(vec![a.to_string().into(), b.to_string().into()]).unwrap_err();
        prop_assert_eq!(err, ParseError::invalid_range_bound(a, b));
    }

    /// Membership agrees with the bound definitions.
    #[test]
    fn membership_matches_bounds(
        (lower, upper) in arb_bound_pair(),
        a in -1000i32..1000,
        len in 0i32..50,
        x in -1100i32..1100,
    ) {
        let b = a + len;
        let range = Range::new(lower, Int4::new(a), Int4::new(b), upper).unwrap();
        let expected = !range.is_empty()
            && (if lower == LowerBound::Inclusive { x >= a } else { x > a })
            && (if upper == UpperBound::Inclusive { x <= b } else { x < b });
        prop_assert_eq!(range.is_within_range(x).unwrap(), expected);
    }

    /// Multirange members keep their order and round-trip through text.
    #[test]
    fn multirange_text_round_trip(members in prop::collection::vec(arb_int_range_text(), 0..6)) {
        let text = format!("{{{}}}", members.join(","));
        let multi = Int4MultiRange::safe_from(text.as_str()).unwrap();
        prop_assert_eq!(multi.ranges().len(), members.len());
        let reparsed = Int4MultiRange::safe_from(multi.to_string()).unwrap();
        prop_assert_eq!(reparsed, multi);
    }

    /// Array text decodes back to exactly the encoded elements.
    #[test]
    fn array_codec_round_trip(items in prop::collection::vec(prop::option::of(".{0,12}"), 0..8)) {
        let config = CodecConfig::default();
        let text = encode_array(items.clone(), &config);
        prop_assert_eq!(decode_array(&text, &config).unwrap(), items);
    }

    /// Text ranges survive arbitrary element content through quoting.
    #[test]
    fn text_range_round_trip(a in ".{0,10}", b in ".{0,10}") {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        let range = Range::new(LowerBound::Inclusive, Text::new(a), Text::new(b), UpperBound::Inclusive)
            .unwrap();
        let reparsed = Range::<Text>::safe_from(range.to_string()).unwrap();
        prop_assert_eq!(reparsed, range);
    }
}
