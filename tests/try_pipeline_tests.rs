// Copyright (c) 2025 - Cowboy AI, LLC.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use cim_railway::{Cause, Either, HasEither, HasRailway, Railway, Try, TryError};
use pretty_assertions::assert_eq;
use test_case::test_case;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("division by zero")]
struct DivideByZero;

fn divide(a: i32, b: i32) -> Result<i32, Cause> {
    if b == 0 {
        return Err(DivideByZero.into());
    }
    Ok(a / b)
}

fn no_such_element(outcome: &Try<impl Sized>) -> bool {
    outcome
        .get_failure()
        .and_then(|c| c.downcast_ref::<TryError>())
        .is_some_and(TryError::is_no_such_element)
}

#[test]
fn pipeline_with_recovery() {
    let recovered = Try::call(|| divide(1, 0)).map_failure_to_success(|cause| {
        assert!(cause.is::<DivideByZero>());
        Ok(0)
    });
    assert_eq!(recovered, Try::success(0));

    let bumped = recovered.map_success_as_nullable(|x| Ok(x.map(|x| x + 1)));
    assert_eq!(bumped, Try::success(1));
}

#[test]
fn peek_panic_becomes_failure() {
    let outcome = Try::success(5).if_success_as_nullable(|_| panic!("boom"));
    assert!(outcome.is_failure());
    assert_eq!(outcome.get_value(), None);
    assert_eq!(
        outcome.get_failure().unwrap().downcast_ref::<TryError>(),
        Some(&TryError::Panicked("boom".to_string()))
    );
}

#[test]
fn peek_error_becomes_failure() {
    let logged = Try::success(5).if_success(|_| Err(Cause::msg("sink unavailable")));
    assert_eq!(logged.get_failure().map(Cause::message), Some("sink unavailable".to_string()));
}

#[test]
fn null_success_roundtrip() {
    let empty = Try::<String>::success_nullable(None);
    assert!(empty.is_success());
    assert!(!empty.is_failure());
    assert_eq!(empty.get_value(), None);
    assert!(no_such_element(&empty.map_empty_to_failure()));
}

#[test]
fn either_fold_runs_only_matching_branch() {
    let right: Either<&str, &str> = Either::Right("ok");
    let folded = right.fold(|_| -> String { panic!("left mapper must not run") }, |r| format!("R:{r}"));
    assert_eq!(folded, "R:ok");
}

#[test]
fn either_conversion_matches_mappers() {
    let success = Try::success(21).map_to_either(|c| c.message(), |v| v.map(|x| x * 2));
    assert!(success.is_right());
    assert_eq!(success.right(), Some(&Some(42)));

    let cause = Cause::msg("lost");
    let failure = Try::<i32>::Failure(cause.clone()).map_to_either(|c| c, |v| v);
    assert!(failure.is_left());
    assert!(failure.left().unwrap().ptr_eq(&cause));
}

// The map family captures mapper panics; the boundary operations do not.

#[test]
fn map_success_captures_mapper_panic() {
    let outcome = Try::success(1).map_success(|_| -> Result<i32, Cause> { panic!("mapper") });
    assert!(outcome.is_failure());

    let outcome = Try::success(1).flat_map_success(|_| -> Try<i32> { panic!("mapper") });
    assert!(outcome.is_failure());
}

#[test]
fn fold_lets_mapper_panic_propagate() {
    let propagated = panic::catch_unwind(|| {
        Try::success(1).fold(|_| 0, |_| -> i32 { panic!("fold mapper") })
    });
    assert!(propagated.is_err());
}

#[test]
fn map_to_either_lets_mapper_panic_propagate() {
    let propagated = panic::catch_unwind(|| {
        Try::<i32>::failure(Cause::msg("x")).map_to_either(|_| -> u8 { panic!("either mapper") }, |v| v)
    });
    assert!(propagated.is_err());
}

#[test]
fn accept_captures_consumer_panic() {
    let successes = Cell::new(0);
    let outcome = Try::<i32>::failure(Cause::msg("first")).accept(
        |_| panic!("failure consumer"),
        |_| {
            successes.set(successes.get() + 1);
            Ok(())
        },
    );
    assert_eq!(successes.get(), 0);
    assert_eq!(
        outcome.get_failure().map(Cause::message),
        Some("Panicked: failure consumer".to_string())
    );
}

#[test_case(Try::success(3), Some(3), false ; "populated success")]
#[test_case(Try::empty(), None, true ; "empty success")]
#[test_case(Try::failure(Cause::msg("x")), None, false ; "failure")]
fn if_absent_fail_only_raises_on_empty(outcome: Try<i32>, value: Option<i32>, raises: bool) {
    assert_eq!(outcome.get_value().copied(), value);
    let raised = outcome.if_absent_fail();
    assert_eq!(raised.is_err(), raises);
}

#[test_case(Try::success(3), 1, 0 ; "success runs then-step only")]
#[test_case(Try::failure(Cause::msg("x")), 0, 1 ; "failure runs or-step only")]
fn then_and_or_call_are_duals(start: Try<i32>, then_calls: usize, or_calls: usize) {
    let thens = Cell::new(0);
    let ors = Cell::new(0);
    start
        .clone()
        .then_run(|| {
            thens.set(thens.get() + 1);
            Ok(())
        });
    start.or_call(|| {
        ors.set(ors.get() + 1);
        Ok(0)
    });
    assert_eq!((thens.get(), ors.get()), (then_calls, or_calls));
}

fn panic_message(outcome: &Try<impl Sized>) -> Option<String> {
    match outcome.get_failure()?.downcast_ref::<TryError>()? {
        TryError::Panicked(message) => Some(message.clone()),
        _ => None,
    }
}

#[test]
fn then_steps_capture_errors_and_panics() {
    let refused = Cause::msg("step refused");
    let expected = refused.clone();
    let failed = Try::success(1).then_call(move || -> Result<i32, Cause> { Err(refused) });
    assert!(failed.get_failure().unwrap().ptr_eq(&expected));

    let panicked = Try::success(1).then_call(|| -> Result<i32, Cause> { panic!("then_call step") });
    assert_eq!(panic_message(&panicked), Some("then_call step".to_string()));

    let panicked = Try::success(1).then(|| -> Try<i32> { panic!("then step") });
    assert_eq!(panic_message(&panicked), Some("then step".to_string()));

    let adopted = Try::success(1).then(|| Try::<i32>::failure(DivideByZero));
    assert!(adopted.get_failure().unwrap().is::<DivideByZero>());

    let panicked = Try::success(1).then_run(|| panic!("then_run step"));
    assert_eq!(panic_message(&panicked), Some("then_run step".to_string()));
}

#[test]
fn or_call_captures_fallback_errors_and_panics() {
    let original = Cause::msg("primary down");
    let failed = Try::<i32>::Failure(original.clone()).or_call(|| divide(1, 0));
    let cause = failed.get_failure().unwrap();
    assert!(cause.is::<DivideByZero>());
    assert!(!cause.ptr_eq(&original));

    let panicked = Try::<i32>::Failure(original).or_call(|| panic!("fallback"));
    assert_eq!(panic_message(&panicked), Some("fallback".to_string()));
}

#[test]
fn failing_recovery_becomes_a_new_failure() {
    let original = Cause::msg("lookup failed");
    let failed = Try::<i32>::Failure(original.clone())
        .map_failure_to_success(|_| Err(Cause::msg("recovery failed")));
    let cause = failed.get_failure().unwrap();
    assert!(!cause.ptr_eq(&original));
    assert_eq!(cause.message(), "recovery failed");

    let panicked = Try::<i32>::Failure(original).map_failure_to_success(|_| panic!("recovery"));
    assert_eq!(panic_message(&panicked), Some("recovery".to_string()));
}

#[test]
fn reraised_cause_keeps_type_and_identity() {
    let cause: Cause = DivideByZero.into();
    let expected = cause.clone();
    let err = Try::<i32>::Failure(cause).value_as_non_null_else_fail().unwrap_err();
    assert!(err.ptr_eq(&expected));
    assert!(err.is::<DivideByZero>());
    assert_eq!(err.to_string(), "division by zero");
}

#[test]
fn question_mark_inside_capturing_closures() {
    let parsed = Try::call(|| Ok("12".parse::<u8>()?))
        .map_success_when_present(|n| Ok(u8::try_from(u16::from(n) * 100)?));
    let cause = parsed.get_failure().unwrap();
    assert!(cause.is::<std::num::TryFromIntError>());
}

#[test]
fn result_conversions() {
    let from_ok: Try<i32> = Ok::<_, TryError>(4).into();
    assert_eq!(from_ok, Try::success(4));

    let from_err: Try<i32> = Err::<i32, _>(TryError::Cancelled).into();
    assert!(from_err.is_failure());

    let railway: Railway<Cause, Option<i32>> = Try::success(4).into();
    assert_eq!(railway.get_success(), Some(&Some(4)));
}

#[test]
fn boundary_panic_is_not_wrapped() {
    let payload = panic::catch_unwind(AssertUnwindSafe(|| {
        Try::success(1).fold(|_| (), |_| panic!("raw"))
    }))
    .unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"raw"));
}

// Structural delegation

struct Lookup {
    either: Either<String, u32>,
}

impl HasEither<String, u32> for Lookup {
    fn either(&self) -> &Either<String, u32> {
        &self.either
    }

    fn into_either(self) -> Either<String, u32> {
        self.either
    }
}

struct Validation {
    outcome: Railway<Vec<String>, String>,
}

impl HasRailway<Vec<String>, String> for Validation {
    fn railway(&self) -> &Railway<Vec<String>, String> {
        &self.outcome
    }

    fn into_railway(self) -> Railway<Vec<String>, String> {
        self.outcome
    }
}

#[test]
fn has_either_delegates() {
    let found = Lookup {
        either: Either::Right(7),
    };
    assert!(found.is_right());
    assert_eq!(found.right(), Some(&7));
    assert_eq!(found.fold(|l| l.len() as u32, |r| r * 2), 14);

    let missing = Lookup {
        either: Either::Left("absent".to_string()),
    };
    let mut seen = None;
    missing.accept(|l| seen = Some(l.clone()), |_| panic!("must not run"));
    assert_eq!(seen.as_deref(), Some("absent"));
    assert_eq!(missing.left_if_any(), Some("absent".to_string()));
}

#[test]
fn has_railway_delegates() {
    let rejected = Validation {
        outcome: Railway::failure(vec!["name is empty".to_string()]),
    };
    assert!(rejected.is_failure());
    let calls = Cell::new(0);
    let chained = rejected.chain(|s| {
        calls.set(calls.get() + 1);
        Railway::success(s.len())
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(chained.get_failure().map(Vec::len), Some(1));

    let accepted = Validation {
        outcome: Railway::success("Ada".to_string()),
    };
    assert_eq!(accepted.get_success_else_fail(), Ok("Ada".to_string()));
}
