//! Integration tests for deferred values and the continuation adapters.

#![cfg(all(feature = "async", feature = "derive"))]

use std::time::Duration;

use fph::compose::pipe;
use fph::deferred::{Deferred, catch_error, then, then_catch};
use fph::{Error, Value, args, func};
use rstest::rstest;

async fn settle(value: Value) -> fph::Result<Value> {
    value.as_deferred()?.clone().await
}

fn delayed(value: i32) -> Deferred {
    Deferred::new(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        Ok(Value::from(value))
    })
}

// =============================================================================
// then
// =============================================================================

#[rstest]
#[tokio::test]
async fn then_applies_handler_to_fulfilled_value() {
    let double = func!(|value| Ok(Value::from(value.as_number()? * 2.0)));
    let doubled = then().call(&args![double, delayed(21)]).unwrap();
    assert_eq!(settle(doubled).await.unwrap(), Value::from(42));
}

#[rstest]
#[tokio::test]
async fn then_passes_rejection_through() {
    let double = func!(|value| Ok(Value::from(value.as_number()? * 2.0)));
    let derived = then()
        .call(&args![double, Deferred::rejected("boom")])
        .unwrap();
    assert_eq!(settle(derived).await.unwrap_err(), Error::thrown("boom"));
}

#[rstest]
#[tokio::test]
async fn then_handler_error_rejects_derived_value() {
    let failing = func!(|_| Err(Error::thrown("handler failed")));
    let derived = then().call(&args![failing, Deferred::resolved(1)]).unwrap();
    assert_eq!(
        settle(derived).await.unwrap_err(),
        Error::thrown("handler failed")
    );
}

#[rstest]
#[tokio::test]
async fn then_adopts_returned_deferred() {
    let later = func!(|value| Ok(Value::from(Deferred::new(async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Ok(value)
    }))));
    let derived = then().call(&args![later, Deferred::resolved("x")]).unwrap();
    assert_eq!(settle(derived).await.unwrap(), Value::from("x"));
}

#[rstest]
fn then_requires_deferred_receiver() {
    let identity = func!(|value| Ok(value));
    assert_eq!(
        then().call(&args![identity, 1]).unwrap_err(),
        Error::TypeMismatch {
            expected: "deferred",
            found: "number"
        }
    );
}

// =============================================================================
// catch_error
// =============================================================================

#[rstest]
#[tokio::test]
async fn catch_error_recovers_from_rejection() {
    let recover = func!(|reason| Ok(Value::from(format!("recovered from {reason}"))));
    let derived = catch_error()
        .call(&args![recover, Deferred::rejected("boom")])
        .unwrap();
    assert_eq!(
        settle(derived).await.unwrap(),
        Value::from("recovered from boom")
    );
}

#[rstest]
#[tokio::test]
async fn catch_error_leaves_fulfillment_alone() {
    let recover = func!(|_| Ok(Value::from(0)));
    let derived = catch_error().call(&args![recover, delayed(7)]).unwrap();
    assert_eq!(settle(derived).await.unwrap(), Value::from(7));
}

#[rstest]
#[tokio::test]
async fn catch_error_receives_library_error_message() {
    let failing = func!(|value| Ok(Value::from(value.as_number()?)));
    let reason = func!(|reason| Ok(reason));
    let failed = then().call(&args![failing, Deferred::resolved("text")]).unwrap();
    let derived = catch_error().call(&args![reason, failed]).unwrap();
    assert_eq!(
        settle(derived).await.unwrap(),
        Value::from("expected number, found string")
    );
}

// =============================================================================
// then_catch
// =============================================================================

#[rstest]
#[case(Deferred::resolved(1), Value::from("ok: 1"))]
#[case(Deferred::rejected("bad"), Value::from("err: bad"))]
#[tokio::test]
async fn then_catch_routes_by_settlement(#[case] source: Deferred, #[case] expected: Value) {
    let on_fulfilled = func!(|value| Ok(Value::from(format!("ok: {value}"))));
    let on_rejected = func!(|reason| Ok(Value::from(format!("err: {reason}"))));
    let derived = then_catch()
        .call(&args![on_fulfilled, on_rejected, source])
        .unwrap();
    assert_eq!(settle(derived).await.unwrap(), expected);
}

// =============================================================================
// Point-free chaining
// =============================================================================

#[rstest]
#[tokio::test]
async fn adapters_compose_into_pipelines() {
    let increment = then()
        .call(&args![func!(|value| Ok(Value::from(value.as_number()? + 1.0)))])
        .unwrap();
    let fallback = catch_error()
        .call(&args![func!(|_| Ok(Value::from(-1)))])
        .unwrap();
    let pipeline = pipe([
        increment.as_function().unwrap().clone(),
        fallback.as_function().unwrap().clone(),
    ])
    .unwrap();

    let fulfilled = pipeline.call(&args![delayed(1)]).unwrap();
    let rejected = pipeline.call(&args![Deferred::rejected("gone")]).unwrap();

    assert_eq!(settle(fulfilled).await.unwrap(), Value::from(2));
    assert_eq!(settle(rejected).await.unwrap(), Value::from(-1));
}

#[rstest]
#[tokio::test]
async fn shared_settlement_across_tasks() {
    let source = delayed(3);
    let first = tokio::spawn(source.clone());
    let second = tokio::spawn(source);

    assert_eq!(first.await.unwrap().unwrap(), Value::from(3));
    assert_eq!(second.await.unwrap().unwrap(), Value::from(3));
}

// =============================================================================
// Inherent continuations alongside FutureExt
// =============================================================================

#[rstest]
#[tokio::test]
async fn inherent_continuations_coexist_with_future_ext() {
    use futures::FutureExt;

    let increment = Value::from(func!(|value| Ok(Value::from(value.as_number()? + 1.0))));
    let fallback = Value::from(func!(|_| Ok(Value::from(0))));

    let settled = Deferred::resolved(1).on_settled(Some(increment), None);
    let recovered = Deferred::rejected("boom").recover(fallback);
    let chained = Deferred::resolved(2).then(|settlement| async move { settlement });

    assert_eq!(settled.await.unwrap(), Value::from(2));
    assert_eq!(recovered.await.unwrap(), Value::from(0));
    assert_eq!(chained.await.unwrap(), Value::from(2));
}
