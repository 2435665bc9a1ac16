//! End-to-end exercise of the booking wizard: a customer walks the whole
//! flow, submits, and the wizard is ready for the next booking.

use pretty_assertions::assert_eq;

use web::booking::{
    available_dates, BookingConfirmation, BookingDraft, BookingWizard, Clock, CustomerField,
    WizardStep,
};
use web::catalog;

struct FixedClock(chrono::NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> chrono::NaiveDate {
        self.0
    }
}

#[test]
fn full_booking_flow_submits_once_and_resets() {
    let mut wizard = BookingWizard::new(catalog::services());
    let mut notifications = Vec::new();

    // Step 1: pick a service.
    assert!(!wizard.can_advance(WizardStep::ServiceSelection));
    wizard.select_service(1);
    assert!(wizard.can_advance(WizardStep::ServiceSelection));
    assert!(wizard.advance());
    assert_eq!(wizard.step(), WizardStep::ScheduleSelection);

    // Step 2: pick a slot.
    wizard.select_date("2025-01-02");
    wizard.select_time("10:00");
    assert!(wizard.can_advance(WizardStep::ScheduleSelection));
    assert!(wizard.advance());
    assert_eq!(wizard.step(), WizardStep::CustomerDetails);

    // Step 3: contact details; email and notes stay optional.
    wizard.update_customer_field(CustomerField::Name, "王小明");
    wizard.update_customer_field(CustomerField::Phone, "0912345678");
    assert!(wizard.can_advance(WizardStep::CustomerDetails));

    let submitted = wizard.submit(&mut |confirmation: BookingConfirmation| {
        notifications.push(confirmation);
    });

    assert!(submitted);
    assert_eq!(notifications.len(), 1);
    assert!(!notifications[0].title.is_empty());
    assert!(!notifications[0].message.is_empty());
    assert_eq!(
        notifications[0].booking.service.as_ref().map(|s| s.id),
        Some(1)
    );
    assert_eq!(notifications[0].booking.date, "2025-01-02");
    assert_eq!(notifications[0].booking.time, "10:00");
    assert_eq!(notifications[0].booking.customer.name, "王小明");

    // Back at the start with a clean draft, reusable within the session.
    assert_eq!(wizard.step(), WizardStep::ServiceSelection);
    assert_eq!(*wizard.draft(), BookingDraft::default());
}

#[test]
fn offered_dates_are_valid_booking_inputs() {
    let clock = FixedClock(chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    let mut wizard = BookingWizard::new(catalog::services());
    wizard.select_service(2);
    wizard.advance();

    let dates = available_dates(&clock);
    let first = dates.first().expect("at least one bookable date").clone();

    wizard.select_date(first.clone());
    wizard.select_time("14:30");

    assert!(wizard.can_advance(WizardStep::ScheduleSelection));
    assert_eq!(wizard.draft().date, first);
}

#[test]
fn bypassing_the_schedule_guard_is_not_possible() {
    let mut wizard = BookingWizard::new(catalog::services());
    wizard.select_service(3);
    wizard.advance();

    // Date without time is not a valid slot.
    wizard.select_date("2025-01-02");
    assert!(!wizard.advance());
    assert_eq!(wizard.step(), WizardStep::ScheduleSelection);
}
