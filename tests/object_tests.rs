//! Integration tests for the object-shape helpers.

#![cfg(feature = "derive")]

use fph::object::{for_in, map_in, omit, pick, props};
use fph::{Error, Function, Value, args, array, func, object};
use rstest::{fixture, rstest};
use std::sync::{Arc, Mutex};

#[fixture]
fn source() -> Value {
    object! { "a" => 1, "b" => 2, "c" => 3 }
}

// =============================================================================
// pick / omit
// =============================================================================

#[rstest]
fn pick_returns_listed_props_only(source: Value) {
    let picked = pick().call(&args![array!["a", "b"], source]).unwrap();
    assert_eq!(picked, object! { "a" => 1, "b" => 2 });
}

#[rstest]
fn omit_returns_unlisted_props_only(source: Value) {
    let omitted = omit().call(&args![array!["a", "b"], source]).unwrap();
    assert_eq!(omitted, object! { "c" => 3 });
}

#[rstest]
fn pick_and_omit_leave_source_untouched(source: Value) {
    let snapshot = source.clone();
    pick().call(&args![array!["a"], source.clone()]).unwrap();
    omit().call(&args![array!["a"], source.clone()]).unwrap();
    assert_eq!(source, snapshot);
    assert_eq!(source, object! { "a" => 1, "b" => 2, "c" => 3 });
}

#[rstest]
#[case(array![], object! {})]
#[case(array!["missing"], object! {})]
#[case(array!["c", "missing"], object! { "c" => 3 })]
fn pick_ignores_absent_keys(source: Value, #[case] keys: Value, #[case] expected: Value) {
    assert_eq!(pick().call(&[keys, source]).unwrap(), expected);
}

#[rstest]
fn pick_is_curried(source: Value) {
    let pick_a = pick().call(&args![array!["a"]]).unwrap();
    assert_eq!(pick_a.call(&[source]).unwrap(), object! { "a" => 1 });
}

#[rstest]
fn omit_requires_key_array(source: Value) {
    let error = omit().call(&args!["a", source]).unwrap_err();
    assert_eq!(
        error,
        Error::TypeMismatch {
            expected: "array",
            found: "string"
        }
    );
}

// =============================================================================
// props
// =============================================================================

#[rstest]
fn props_returns_values_in_requested_order(source: Value) {
    let values = props().call(&args![array!["c", "a"], source]).unwrap();
    assert_eq!(values, array![3, 1]);
}

#[rstest]
fn props_drops_missing_keys(source: Value) {
    let values = props().call(&args![array!["a", "b", "e"], source]).unwrap();
    assert_eq!(values, array![1, 2]);
}

// =============================================================================
// for_in / map_in
// =============================================================================

#[rstest]
fn for_in_calls_callback_with_value_and_key(source: Value) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);
    let callback = Function::new(2, move |arguments| {
        recorder.lock().map_err(|_| Error::thrown("poisoned"))?.push((
            Function::argument(arguments, 1),
            Function::argument(arguments, 0),
        ));
        Ok(Value::Undefined)
    });

    let result = for_in().call(&args![callback, source]).unwrap();

    assert_eq!(result, Value::Undefined);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            (Value::from("a"), Value::from(1)),
            (Value::from("b"), Value::from(2)),
            (Value::from("c"), Value::from(3)),
        ]
    );
}

#[rstest]
fn for_in_stops_on_callback_error(source: Value) {
    let failing = func!(|_, _| Err(Error::thrown("stop")));
    assert_eq!(
        for_in().call(&args![failing, source]).unwrap_err(),
        Error::thrown("stop")
    );
}

#[rstest]
fn map_in_replaces_every_value(source: Value) {
    let double = func!(|value| Ok(Value::from(value.as_number()? * 2.0)));
    let mapped = map_in().call(&args![double, source.clone()]).unwrap();

    assert_eq!(mapped, object! { "a" => 2, "b" => 4, "c" => 6 });
    assert_eq!(source, object! { "a" => 1, "b" => 2, "c" => 3 });
}

#[rstest]
fn map_in_of_empty_object_is_empty() {
    let identity = func!(|value| Ok(value));
    assert_eq!(
        map_in().call(&args![identity, object! {}]).unwrap(),
        object! {}
    );
}

// =============================================================================
// Key order
// =============================================================================

#[rstest]
fn helpers_visit_keys_in_insertion_order() {
    let record = object! { "zeta" => 1, "alpha" => 2, "mid" => 3 };
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);
    let callback = Function::new(2, move |arguments| {
        recorder
            .lock()
            .map_err(|_| Error::thrown("poisoned"))?
            .push(Function::argument(arguments, 1).to_string());
        Ok(Value::Undefined)
    });

    for_in().call(&args![callback, record.clone()]).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec!["zeta", "alpha", "mid"]);

    let identity = func!(|value| Ok(value));
    let mapped = map_in().call(&args![identity, record.clone()]).unwrap();
    assert_eq!(
        mapped.as_object().unwrap().keys().collect::<Vec<_>>(),
        vec!["zeta", "alpha", "mid"]
    );

    let picked = pick().call(&args![array!["mid", "zeta"], record]).unwrap();
    assert_eq!(
        picked.as_object().unwrap().keys().collect::<Vec<_>>(),
        vec!["zeta", "mid"]
    );
}
