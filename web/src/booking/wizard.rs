//! The booking wizard state machine.
//!
//! Three linear steps gated by per-step validity predicates. There is no
//! terminal state: a successful submission hands the frozen draft to the
//! notification collaborator and returns the wizard to step one with an
//! empty draft, ready for the next booking in the same session.

use shared_types::Service;

use crate::booking::validate::is_valid_phone;

const CONFIRMATION_TITLE: &str = "預約成功！";
const CONFIRMATION_MESSAGE: &str = "我們會在24小時內與您確認預約詳情，期待為您提供最優質的服務。";

/// The three wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    ServiceSelection,
    ScheduleSelection,
    CustomerDetails,
}

impl WizardStep {
    /// 1-based position, as shown in the step indicator.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::ServiceSelection => 1,
            WizardStep::ScheduleSelection => 2,
            WizardStep::CustomerDetails => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::ServiceSelection => "選擇服務",
            WizardStep::ScheduleSelection => "預約時間",
            WizardStep::CustomerDetails => "確認資訊",
        }
    }

    fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::ServiceSelection => Some(WizardStep::ScheduleSelection),
            WizardStep::ScheduleSelection => Some(WizardStep::CustomerDetails),
            WizardStep::CustomerDetails => None,
        }
    }

    fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::ServiceSelection => None,
            WizardStep::ScheduleSelection => Some(WizardStep::ServiceSelection),
            WizardStep::CustomerDetails => Some(WizardStep::ScheduleSelection),
        }
    }
}

/// Free-text customer contact fields. Only name and phone gate submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Name,
    Phone,
    Email,
    Notes,
}

/// The in-progress booking. `date` and `time` are only meaningful together;
/// a selected date is not a valid slot until a time is also chosen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub service: Option<Service>,
    pub date: String,
    pub time: String,
    pub customer: CustomerInfo,
}

/// The event handed to the notification collaborator on submission, carrying
/// the frozen draft.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub title: String,
    pub message: String,
    pub booking: BookingDraft,
}

/// Notification collaborator consumed on successful submission. The wizard
/// never inspects a return value; the reset happens regardless of what the
/// collaborator does with the event.
pub trait BookingNotifier {
    fn notify(&mut self, confirmation: BookingConfirmation);
}

impl<F: FnMut(BookingConfirmation)> BookingNotifier for F {
    fn notify(&mut self, confirmation: BookingConfirmation) {
        self(confirmation)
    }
}

/// Owns the current step and draft, with the service catalog injected at
/// construction and treated as read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWizard {
    step: WizardStep,
    draft: BookingDraft,
    catalog: Vec<Service>,
}

impl BookingWizard {
    pub fn new(catalog: Vec<Service>) -> Self {
        BookingWizard {
            step: WizardStep::ServiceSelection,
            draft: BookingDraft::default(),
            catalog,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &[Service] {
        &self.catalog
    }

    /// Look the service up in the catalog. An unknown id clears the selection
    /// rather than erroring; the step guard then keeps the customer on step
    /// one.
    pub fn select_service(&mut self, service_id: i32) {
        self.draft.service = self
            .catalog
            .iter()
            .find(|service| service.id == service_id)
            .cloned();
    }

    pub fn select_date(&mut self, date: impl Into<String>) {
        self.draft.date = date.into();
    }

    pub fn select_time(&mut self, time: impl Into<String>) {
        self.draft.time = time.into();
    }

    pub fn update_customer_field(&mut self, field: CustomerField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CustomerField::Name => self.draft.customer.name = value,
            CustomerField::Phone => self.draft.customer.phone = value,
            CustomerField::Email => self.draft.customer.email = value,
            CustomerField::Notes => self.draft.customer.notes = value,
        }
    }

    /// The step guard: whether forward navigation out of `step` is allowed
    /// for the current draft.
    pub fn can_advance(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::ServiceSelection => self.draft.service.is_some(),
            WizardStep::ScheduleSelection => {
                !self.draft.date.is_empty() && !self.draft.time.is_empty()
            }
            WizardStep::CustomerDetails => {
                !self.draft.customer.name.trim().is_empty()
                    && is_valid_phone(&self.draft.customer.phone)
            }
        }
    }

    /// Move forward one step. The guard is enforced here, not only in the
    /// view, so the invariant holds regardless of caller discipline. Returns
    /// whether the step moved.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance(self.step) {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move back one step, unguarded. No-op on step one.
    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Explicit cancel: back to step one with an empty draft.
    pub fn reset(&mut self) {
        self.step = WizardStep::ServiceSelection;
        self.draft = BookingDraft::default();
    }

    /// Submit the booking. Requires the step-three guard; when it fails
    /// nothing changes and no event is emitted. On success exactly one
    /// confirmation carrying the frozen draft goes to the notifier, then the
    /// wizard resets for reuse.
    pub fn submit(&mut self, notifier: &mut impl BookingNotifier) -> bool {
        if !self.can_advance(WizardStep::CustomerDetails) {
            return false;
        }

        let booking = std::mem::take(&mut self.draft);
        self.step = WizardStep::ServiceSelection;

        notifier.notify(BookingConfirmation {
            title: CONFIRMATION_TITLE.to_string(),
            message: CONFIRMATION_MESSAGE.to_string(),
            booking,
        });

        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> Vec<Service> {
        vec![
            Service {
                id: 1,
                name: "經典法式美甲".to_string(),
                duration_minutes: 75,
                price: 1580,
                description: "優雅白尖設計".to_string(),
                popular: true,
            },
            Service {
                id: 2,
                name: "奶茶色系凝膠".to_string(),
                duration_minutes: 90,
                price: 1880,
                description: "溫柔奶茶色調".to_string(),
                popular: false,
            },
        ]
    }

    fn wizard() -> BookingWizard {
        BookingWizard::new(catalog())
    }

    /// Fill a draft that satisfies every step guard.
    fn filled_wizard() -> BookingWizard {
        let mut w = wizard();
        w.select_service(1);
        w.select_date("2025-01-02");
        w.select_time("10:00");
        w.update_customer_field(CustomerField::Name, "王小明");
        w.update_customer_field(CustomerField::Phone, "0912345678");
        w
    }

    #[test]
    fn starts_at_step_one_with_empty_draft() {
        let w = wizard();

        assert_eq!(w.step(), WizardStep::ServiceSelection);
        assert_eq!(*w.draft(), BookingDraft::default());
    }

    #[test]
    fn select_service_resolves_catalog_entry_by_id() {
        let mut w = wizard();

        for service in catalog() {
            w.select_service(service.id);
            assert_eq!(w.draft().service.as_ref(), Some(&service));
        }
    }

    #[test]
    fn unknown_service_id_degrades_to_no_selection() {
        let mut w = wizard();
        w.select_service(1);

        w.select_service(99);

        assert_eq!(w.draft().service, None);
        assert!(!w.can_advance(WizardStep::ServiceSelection));
    }

    #[test]
    fn step_one_guard_requires_a_service() {
        let mut w = wizard();
        assert!(!w.can_advance(WizardStep::ServiceSelection));

        w.select_service(1);
        assert!(w.can_advance(WizardStep::ServiceSelection));
    }

    #[test]
    fn step_two_guard_requires_both_date_and_time() {
        let mut w = wizard();
        assert!(!w.can_advance(WizardStep::ScheduleSelection));

        w.select_date("2025-01-02");
        assert!(!w.can_advance(WizardStep::ScheduleSelection));

        w.select_time("10:00");
        assert!(w.can_advance(WizardStep::ScheduleSelection));
    }

    #[test]
    fn step_three_guard_requires_name_and_valid_phone() {
        let mut w = wizard();
        assert!(!w.can_advance(WizardStep::CustomerDetails));

        w.update_customer_field(CustomerField::Name, "   ");
        w.update_customer_field(CustomerField::Phone, "0912-345-678");
        assert!(!w.can_advance(WizardStep::CustomerDetails));

        w.update_customer_field(CustomerField::Name, "王小明");
        assert!(w.can_advance(WizardStep::CustomerDetails));

        w.update_customer_field(CustomerField::Phone, "091234");
        assert!(!w.can_advance(WizardStep::CustomerDetails));
    }

    #[test]
    fn email_and_notes_are_never_required() {
        let w = filled_wizard();

        assert!(w.draft().customer.email.is_empty());
        assert!(w.draft().customer.notes.is_empty());
        assert!(w.can_advance(WizardStep::CustomerDetails));
    }

    #[test]
    fn advance_is_blocked_while_the_guard_fails() {
        let mut w = wizard();

        assert!(!w.advance());
        assert_eq!(w.step(), WizardStep::ServiceSelection);
    }

    #[test]
    fn advance_stops_at_step_three() {
        let mut w = filled_wizard();
        assert!(w.advance());
        assert!(w.advance());
        assert_eq!(w.step(), WizardStep::CustomerDetails);

        assert!(!w.advance());
        assert_eq!(w.step(), WizardStep::CustomerDetails);
    }

    #[test]
    fn retreat_is_a_noop_on_step_one() {
        let mut w = wizard();

        assert!(!w.retreat());
        assert_eq!(w.step(), WizardStep::ServiceSelection);
    }

    #[test]
    fn advance_then_retreat_restores_step_without_touching_draft() {
        let mut w = filled_wizard();
        w.advance();
        let before = w.draft().clone();

        w.advance();
        w.retreat();

        assert_eq!(w.step(), WizardStep::ScheduleSelection);
        assert_eq!(*w.draft(), before);
    }

    #[test]
    fn submit_with_failing_guard_changes_nothing() {
        let mut w = filled_wizard();
        w.update_customer_field(CustomerField::Phone, "091234");
        let before = w.clone();
        let mut notifications = Vec::new();

        let submitted = w.submit(&mut |c: BookingConfirmation| notifications.push(c));

        assert!(!submitted);
        assert_eq!(w, before);
        assert!(notifications.is_empty());
    }

    #[test]
    fn submit_emits_one_confirmation_and_resets() {
        let mut w = filled_wizard();
        let frozen = w.draft().clone();
        let mut notifications = Vec::new();

        let submitted = w.submit(&mut |c: BookingConfirmation| notifications.push(c));

        assert!(submitted);
        assert_eq!(notifications.len(), 1);
        assert!(!notifications[0].title.is_empty());
        assert!(!notifications[0].message.is_empty());
        assert_eq!(notifications[0].booking, frozen);
        assert_eq!(w.step(), WizardStep::ServiceSelection);
        assert_eq!(*w.draft(), BookingDraft::default());
    }

    #[test]
    fn wizard_is_reusable_after_submission() {
        let mut w = filled_wizard();
        w.submit(&mut |_: BookingConfirmation| {});

        w.select_service(2);

        assert!(w.can_advance(WizardStep::ServiceSelection));
        assert_eq!(w.draft().service.as_ref().map(|s| s.id), Some(2));
    }

    #[test]
    fn reset_cancels_from_any_step() {
        let mut w = filled_wizard();
        w.advance();
        w.advance();

        w.reset();

        assert_eq!(w.step(), WizardStep::ServiceSelection);
        assert_eq!(*w.draft(), BookingDraft::default());
    }
}
