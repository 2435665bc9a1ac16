//! Booking wizard core.
//!
//! Owns the three-step booking flow (service -> schedule -> customer details)
//! as plain state with pure transition functions, so the same logic drives the
//! Leptos view on both the server and hydrated client and stays unit-testable
//! without a DOM. Views hold a `BookingWizard` inside a signal and call its
//! methods from event handlers.

pub mod schedule;
pub mod validate;
pub mod wizard;

// Re-export commonly used types
pub use schedule::{available_dates, format_date, Clock, FormattedDate, SystemClock};
pub use wizard::{
    BookingConfirmation, BookingDraft, BookingNotifier, BookingWizard, CustomerField,
    CustomerInfo, WizardStep,
};
