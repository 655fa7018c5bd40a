//! Domain validators.
//!
//! Pure functions over already-loaded aggregates. They never touch storage; the
//! admin service loads what they need and converts their errors into the
//! caller-visible failure.
//!
//! # Invariants
//! - `sum(user.initial_credits) <= event.budget` for every event.
//! - An allocation that lands exactly on the budget is accepted.

use serde::Serialize;

use eventadmin_core::{Credits, DomainError, DomainResult, EventId, OrganizerId};

use crate::event::{CreateEventRequest, Event, NewEvent};
use crate::item::{AddItemRequest, Item, NewItem};
use crate::user::{AddUserRequest, NewUser, User};

/// Allocation state of one event's budget.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub event_id: EventId,
    pub budget: Credits,
    pub allocated: Credits,
    pub remaining: Credits,
}

/// Fails with `Unauthorized` unless the caller owns the event.
pub fn check_ownership(event: &Event, caller: &OrganizerId) -> DomainResult<()> {
    if !event.is_owned_by(caller) {
        return Err(DomainError::Unauthorized);
    }
    Ok(())
}

/// Fails with `NotEnoughBudget` when `new_credits` does not fit in what is left.
pub fn check_budget(event: &Event, existing_users: &[User], new_credits: Credits) -> DomainResult<()> {
    let allocated = Credits::checked_sum(existing_users.iter().map(|u| u.initial_credits));
    let remaining = allocated
        .map(|a| event.budget.saturating_sub(a))
        .unwrap_or(Credits::ZERO);

    let fits = allocated
        .and_then(|a| a.checked_add(new_credits))
        .is_some_and(|total| total <= event.budget);

    if !fits {
        return Err(DomainError::NotEnoughBudget {
            requested: new_credits,
            remaining,
        });
    }
    Ok(())
}

/// Fails with `ForeignMismatch` when the item is addressed through another event.
pub fn check_item_belongs(item: &Item, event_id: &EventId) -> DomainResult<()> {
    if &item.event_id != event_id {
        return Err(DomainError::foreign_mismatch(format!(
            "item {} does not belong to event {event_id}",
            item.id
        )));
    }
    Ok(())
}

pub fn summarize_budget(event: &Event, users: &[User]) -> BudgetSummary {
    // Sum can only overflow if the store was written around the budget check.
    let allocated = Credits::checked_sum(users.iter().map(|u| u.initial_credits))
        .unwrap_or(Credits::from_units(i64::MAX));
    BudgetSummary {
        event_id: event.id,
        budget: event.budget,
        allocated,
        remaining: event.budget.saturating_sub(allocated),
    }
}

pub fn validate_create_event(req: CreateEventRequest) -> DomainResult<NewEvent> {
    let organizer_id = OrganizerId::new(req.organizer_id)
        .map_err(|_| DomainError::validation("organizerId is required"))?;
    let name = required("name", req.name)?;
    let budget = amount("budget", req.budget)?;

    if req.end_at < req.start_at {
        return Err(DomainError::validation("endAt cannot be before startAt"));
    }

    Ok(NewEvent {
        organizer_id,
        name,
        description: req.description,
        organizer_name: req.organizer_name,
        organizer_email: req.organizer_email,
        budget,
        start_at: req.start_at,
        end_at: req.end_at,
    })
}

pub fn validate_add_user(req: AddUserRequest) -> DomainResult<NewUser> {
    Ok(NewUser {
        event_id: req.event_id,
        user_name: required("userName", req.user_name)?,
        name: required("name", req.name)?,
        email: req.email,
        initial_credits: amount("initialCredits", req.initial_credits)?,
    })
}

pub fn validate_add_item(req: AddItemRequest) -> DomainResult<NewItem> {
    Ok(NewItem {
        event_id: req.event_id,
        url: req.url,
        image_src: req.image_src,
        price: amount("price", req.price)?,
        name: required("name", req.name)?,
    })
}

fn required(field: &str, value: String) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(value)
}

fn amount(field: &str, units: i64) -> DomainResult<Credits> {
    Credits::new(units).map_err(|_| DomainError::validation(format!("{field} cannot be negative")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use eventadmin_core::UserId;

    fn organizer(id: &str) -> OrganizerId {
        OrganizerId::new(id).unwrap()
    }

    fn event_with_budget(budget: i64) -> Event {
        let now = Utc::now();
        Event {
            id: EventId::new(),
            organizer_id: organizer("organizerId"),
            name: "eventName".to_string(),
            description: String::new(),
            organizer_name: String::new(),
            organizer_email: String::new(),
            budget: Credits::from_units(budget),
            start_at: now,
            end_at: now,
        }
    }

    fn user_with_credits(event: &Event, credits: i64) -> User {
        User {
            id: UserId::new(),
            event_id: event.id,
            user_name: "userName".to_string(),
            name: "name".to_string(),
            email: "email".to_string(),
            initial_credits: Credits::from_units(credits),
        }
    }

    fn create_event_request() -> CreateEventRequest {
        let now = Utc::now();
        CreateEventRequest {
            organizer_id: "organizerId".to_string(),
            name: "eventName".to_string(),
            description: "description".to_string(),
            organizer_name: "organizerName".to_string(),
            organizer_email: "organizerEmail".to_string(),
            budget: 100,
            start_at: now,
            end_at: now,
        }
    }

    #[test]
    fn ownership_check_rejects_other_organizer() {
        let event = event_with_budget(100);
        assert!(check_ownership(&event, &organizer("organizerId")).is_ok());
        assert_eq!(
            check_ownership(&event, &organizer("anotherOrganizerId")),
            Err(DomainError::Unauthorized)
        );
    }

    #[test]
    fn budget_check_allows_exact_fit() {
        let event = event_with_budget(100);
        let users = vec![user_with_credits(&event, 60)];
        assert!(check_budget(&event, &users, Credits::from_units(40)).is_ok());
    }

    #[test]
    fn budget_check_rejects_one_over() {
        let event = event_with_budget(100);
        let users = vec![user_with_credits(&event, 60)];
        let err = check_budget(&event, &users, Credits::from_units(41)).unwrap_err();
        assert_eq!(
            err,
            DomainError::NotEnoughBudget {
                requested: Credits::from_units(41),
                remaining: Credits::from_units(40),
            }
        );
    }

    #[test]
    fn budget_check_rejects_overflowing_allocation() {
        let event = event_with_budget(i64::MAX);
        let users = vec![user_with_credits(&event, i64::MAX)];
        let err = check_budget(&event, &users, Credits::from_units(1)).unwrap_err();
        assert!(matches!(err, DomainError::NotEnoughBudget { .. }));
    }

    #[test]
    fn zero_budget_accepts_only_zero_credit_users() {
        let event = event_with_budget(0);
        assert!(check_budget(&event, &[], Credits::ZERO).is_ok());
        assert!(check_budget(&event, &[], Credits::from_units(1)).is_err());
    }

    #[test]
    fn item_under_other_event_is_foreign_mismatch() {
        let event = event_with_budget(100);
        let item = Item {
            id: eventadmin_core::ItemId::new(),
            event_id: event.id,
            url: "url".to_string(),
            image_src: "imageSrc".to_string(),
            price: Credits::from_units(10),
            name: "apple".to_string(),
        };
        assert!(check_item_belongs(&item, &event.id).is_ok());
        let err = check_item_belongs(&item, &EventId::new()).unwrap_err();
        assert!(matches!(err, DomainError::ForeignMismatch(_)));
    }

    #[test]
    fn summary_reports_remaining_budget() {
        let event = event_with_budget(100);
        let users = vec![user_with_credits(&event, 10), user_with_credits(&event, 15)];
        let summary = summarize_budget(&event, &users);
        assert_eq!(summary.allocated, Credits::from_units(25));
        assert_eq!(summary.remaining, Credits::from_units(75));
    }

    #[test]
    fn create_event_requires_organizer_and_name() {
        let mut req = create_event_request();
        req.organizer_id = " ".to_string();
        assert!(matches!(validate_create_event(req), Err(DomainError::Validation(_))));

        let mut req = create_event_request();
        req.name = String::new();
        assert!(matches!(validate_create_event(req), Err(DomainError::Validation(_))));
    }

    #[test]
    fn create_event_rejects_negative_budget_and_reversed_window() {
        let mut req = create_event_request();
        req.budget = -1;
        assert!(matches!(validate_create_event(req), Err(DomainError::Validation(_))));

        let mut req = create_event_request();
        req.end_at = req.start_at - Duration::hours(1);
        assert!(matches!(validate_create_event(req), Err(DomainError::Validation(_))));
    }

    #[test]
    fn create_event_accepts_equal_start_and_end() {
        let new = validate_create_event(create_event_request()).unwrap();
        assert_eq!(new.budget, Credits::from_units(100));
        assert_eq!(new.organizer_id.as_str(), "organizerId");
    }

    #[test]
    fn add_user_and_item_validate_their_fields() {
        let event_id = EventId::new();
        let user = AddUserRequest {
            event_id,
            user_name: "".to_string(),
            name: "name".to_string(),
            email: "email".to_string(),
            initial_credits: 10,
        };
        assert!(matches!(validate_add_user(user), Err(DomainError::Validation(_))));

        let item = AddItemRequest {
            event_id,
            url: "url".to_string(),
            image_src: "imageSrc".to_string(),
            price: -10,
            name: "apple".to_string(),
        };
        assert!(matches!(validate_add_item(item), Err(DomainError::Validation(_))));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: accepted allocations never exceed the budget, whatever the order.
            #[test]
            fn accepted_allocations_never_exceed_budget(
                budget in 0i64..10_000,
                requests in proptest::collection::vec(0i64..2_000, 0..40)
            ) {
                let event = event_with_budget(budget);
                let mut users: Vec<User> = Vec::new();

                for credits in requests {
                    let before = users.len();
                    match check_budget(&event, &users, Credits::from_units(credits)) {
                        Ok(()) => users.push(user_with_credits(&event, credits)),
                        Err(DomainError::NotEnoughBudget { .. }) => {
                            prop_assert_eq!(users.len(), before);
                        }
                        Err(other) => {
                            prop_assert!(false, "unexpected error: {:?}", other);
                        }
                    }
                    let total: i64 = users.iter().map(|u| u.initial_credits.units()).sum();
                    prop_assert!(total <= budget);
                }
            }

            /// Property: the exact remainder always fits, one more never does.
            #[test]
            fn exact_remainder_is_the_boundary(budget in 0i64..10_000, used in 0i64..10_000) {
                prop_assume!(used <= budget);
                let event = event_with_budget(budget);
                let users = vec![user_with_credits(&event, used)];
                let remainder = budget - used;

                prop_assert!(check_budget(&event, &users, Credits::from_units(remainder)).is_ok());
                prop_assert!(check_budget(&event, &users, Credits::from_units(remainder + 1)).is_err());
            }
        }
    }
}
