//! Tests for metadata maps and permissive field parsing.

use super::*;
use rstest::{fixture, rstest};

fn input(description: &str, required: bool, default: &str) -> Input {
    Input {
        description: description.to_owned(),
        required,
        kind: String::new(),
        default: default.to_owned(),
    }
}

#[fixture]
fn two_inputs() -> InputMap {
    InputMap::from_iter([
        ("input1", input("desc1", true, "default1")),
        ("input2", input("desc2", false, "default2")),
    ])
}

#[rstest]
#[case::two_inputs(
    [("in2", input("Input2", false, "")), ("in1", input("Input1", true, ""))],
    "with:\n  in1: \n  in2: \n"
)]
#[case::with_defaults(
    [("b", input("", false, "two")), ("a", input("", false, "one"))],
    "with:\n  a: one\n  b: two\n"
)]
fn with_block_lists_inputs_sorted(
    #[case] given: [(&str, Input); 2],
    #[case] expected: &str,
) {
    let inputs = InputMap::from_iter(given);
    assert_eq!(inputs.with_block(2, UsageValues::Defaults), expected);
}

#[rstest]
fn with_block_is_empty_for_no_inputs() {
    assert_eq!(InputMap::new().with_block(8, UsageValues::Defaults), "");
}

#[rstest]
fn with_block_blank_values_omit_defaults() {
    let inputs = InputMap::from_iter([("in1", input("", true, "ignored"))]);
    assert_eq!(
        inputs.with_block(6, UsageValues::Blank),
        "    with:\n      in1: \n"
    );
}

#[rstest]
fn with_block_sorts_by_rendered_line() {
    // "a-b: " sorts before "a: " because '-' < ':'.
    let inputs = InputMap::from_iter([("a", input("", false, "")), ("a-b", input("", false, ""))]);
    assert_eq!(
        inputs.with_block(2, UsageValues::Blank),
        "with:\n  a-b: \n  a: \n"
    );
}

#[rstest]
fn with_block_is_repeatable(two_inputs: InputMap) {
    let first = two_inputs.with_block(4, UsageValues::Defaults);
    let second = two_inputs.with_block(4, UsageValues::Defaults);
    assert_eq!(first, second);
}

#[rstest]
fn sorted_orders_by_name_regardless_of_insertion() {
    let forward = OutputMap::from_iter([
        ("zeta", Output::default()),
        ("alpha", Output::default()),
        ("Mid", Output::default()),
    ]);
    let names: Vec<_> = forward.sorted().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["Mid", "alpha", "zeta"]);
}

#[rstest]
#[case::identical(
    [("input1", input("desc1", true, "default1")), ("input2", input("desc2", false, "default2"))],
    true
)]
#[case::unordered(
    [("input2", input("desc2", false, "default2")), ("input1", input("desc1", true, "default1"))],
    true
)]
#[case::different_keys(
    [("input1", input("desc1", true, "default1")), ("input3", input("desc2", false, "default2"))],
    false
)]
#[case::different_default(
    [("input1", input("desc1", true, "default1")), ("input2", input("desc2", false, "default3"))],
    false
)]
fn input_maps_compare_by_usage(
    two_inputs: InputMap,
    #[case] right: [(&str, Input); 2],
    #[case] expected: bool,
) {
    let right = InputMap::from_iter(right);
    assert_eq!(two_inputs.same_usage(&right), expected);
    assert_eq!(two_inputs == right, expected);
}

#[rstest]
fn input_maps_of_different_size_differ(two_inputs: InputMap) {
    let right = InputMap::from_iter([("input1", input("desc1", true, "default1"))]);
    assert!(!two_inputs.same_usage(&right));
    assert_ne!(two_inputs, right);
}

#[rstest]
fn usage_comparison_ignores_descriptions(two_inputs: InputMap) {
    let right = InputMap::from_iter([
        ("input1", input("other", true, "default1")),
        ("input2", input("desc2", false, "default2")),
    ]);
    assert!(two_inputs.same_usage(&right));
    assert_ne!(two_inputs, right, "full equality also compares descriptions");
}

#[rstest]
#[case::identical([("input1", "desc1"), ("input2", "desc2")], true)]
#[case::unordered([("input2", "desc2"), ("input1", "desc1")], true)]
#[case::different_keys([("input3", "desc2"), ("input1", "desc1")], false)]
#[case::different_description([("input2", "desc3"), ("input1", "desc1")], false)]
fn output_maps_compare_fields(#[case] right: [(&str, &str); 2], #[case] expected: bool) {
    let to_map = |pairs: [(&str, &str); 2]| {
        OutputMap::from_iter(pairs.map(|(name, description)| {
            (
                name,
                Output {
                    description: description.to_owned(),
                },
            )
        }))
    };
    let left = to_map([("input1", "desc1"), ("input2", "desc2")]);
    assert_eq!(left == to_map(right), expected);
}

#[rstest]
#[case::identical([("secret1", true), ("secret2", false)], true)]
#[case::unordered([("secret2", false), ("secret1", true)], true)]
#[case::different_keys([("secret3", false), ("secret1", true)], false)]
#[case::different_required([("secret1", true), ("secret2", true)], false)]
fn secret_maps_compare_fields(#[case] right: [(&str, bool); 2], #[case] expected: bool) {
    let to_map = |pairs: [(&str, bool); 2]| {
        SecretMap::from_iter(pairs.map(|(name, required)| (name, Secret { required })))
    };
    let left = to_map([("secret1", true), ("secret2", false)]);
    assert_eq!(left == to_map(right), expected);
}

#[rstest]
fn inputs_accept_any_scalar_form() {
    let yaml = "
flag:
  required: 'TRUE'
  default: true
count:
  required: false
  default: 3
ratio:
  default: 0.5
python:
  default: 3.10
whole:
  default: 1.0
hex:
  default: 0x10
exponent:
  default: 1e3
affirmative:
  default: yes
empty:
named:
  description:
  type: string
";
    let inputs: InputMap = serde_saphyr::from_str(yaml).expect("parse inputs");

    let flag = inputs.get("flag").expect("flag input");
    assert!(flag.required);
    assert_eq!(flag.default, "true");
    assert_eq!(inputs.get("count").expect("count input").default, "3");
    assert_eq!(inputs.get("ratio").expect("ratio input").default, "0.5");
    for (name, authored) in [
        ("python", "3.10"),
        ("whole", "1.0"),
        ("hex", "0x10"),
        ("exponent", "1e3"),
        ("affirmative", "yes"),
    ] {
        assert_eq!(inputs.get(name).expect("input").default, authored);
    }
    assert_eq!(inputs.get("empty"), Some(&Input::default()));
    let named = inputs.get("named").expect("named input");
    assert_eq!(named.description, "");
    assert_eq!(named.kind, "string");
}

#[rstest]
fn unknown_fields_are_ignored() {
    let yaml = "
out:
  description: result
  value: '${{ steps.a.outputs.b }}'
";
    let outputs: OutputMap = serde_saphyr::from_str(yaml).expect("parse outputs");
    assert_eq!(
        outputs.get("out"),
        Some(&Output {
            description: "result".to_owned()
        })
    );
}

#[rstest]
fn unrecognised_required_value_is_rejected() {
    let result: Result<SecretMap, _> = serde_saphyr::from_str("token:\n  required: sometimes\n");
    assert!(result.is_err());
}
