//! Drain Ordering Tests
//!
//! Deferred actions run in exactly the reverse of registration order, for
//! any number of registrations, whether the primary action succeeded or not.

use proptest::prelude::*;

use crate::common::{invoke, ActionLog, DeferScope, Outcome};

// ============================================================================
// Reverse order
// ============================================================================

#[test]
fn two_registrations_drain_newest_first() {
    let log = ActionLog::new();
    let log_ref = &log;

    let outcome = invoke(|scope| {
        scope.register(move |_| {
            log_ref.record("d1");
            Ok(())
        });
        scope.register(move |_| {
            log_ref.record("d2");
            Ok(())
        });
        Ok(())
    })
    .unwrap();

    assert_eq!(outcome, Outcome::Completed(()));
    log.assert_order(&["d2", "d1"]);
}

#[test]
fn registrations_interleave_with_primary_work() {
    let log = ActionLog::new();
    let log_ref = &log;

    invoke(|scope| {
        scope.register(move |_| {
            log_ref.record("registered early");
            Ok(())
        });
        log_ref.record("primary work");
        scope.register(move |_| {
            log_ref.record("registered late");
            Ok(())
        });
        Ok(())
    })
    .unwrap();

    log.assert_order(&["primary work", "registered late", "registered early"]);
}

#[test]
fn primary_with_no_registrations_completes() {
    let outcome = invoke(|_| Ok(11)).unwrap();
    assert_eq!(outcome, Outcome::Completed(11));
}

#[test]
fn helpers_called_by_the_primary_action_may_register() {
    fn register_cleanup<'env>(scope: &mut DeferScope<'env>, log: &'env ActionLog) {
        scope.register(move |_| {
            log.record("helper cleanup");
            Ok(())
        });
    }

    let log = ActionLog::new();

    invoke(|scope| {
        register_cleanup(scope, &log);
        log.record("primary");
        Ok(())
    })
    .unwrap();

    log.assert_order(&["primary", "helper cleanup"]);
}

// ============================================================================
// Scope observers
// ============================================================================

#[test]
fn scope_reports_registration_count() {
    invoke(|scope| {
        assert!(scope.is_empty());
        scope.register(|_| Ok(()));
        assert_eq!(scope.len(), 1);
        scope.register(|_| Ok(()));
        assert_eq!(scope.len(), 2);
        assert!(!scope.is_empty());
        Ok(())
    })
    .unwrap();
}

// ============================================================================
// Property: reverse order holds for arbitrary registration sequences
// ============================================================================

proptest! {
    #[test]
    fn drain_order_is_reverse_for_any_sequence(
        labels in proptest::collection::vec("[a-z]{1,8}", 0..16)
    ) {
        let log = ActionLog::new();
        let log_ref = &log;
        let labels_ref = &labels;

        let outcome = invoke(move |scope| {
            for label in labels_ref.iter() {
                scope.register(move |_| {
                    log_ref.record(label.clone());
                    Ok(())
                });
            }
            Ok(())
        })
        .unwrap();

        prop_assert_eq!(outcome, Outcome::Completed(()));
        let mut expected = labels.clone();
        expected.reverse();
        prop_assert_eq!(log.entries(), expected);
    }
}
