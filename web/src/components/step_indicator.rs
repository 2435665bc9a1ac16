use leptos::prelude::*;

use crate::booking::WizardStep;

const STEPS: [WizardStep; 3] = [
    WizardStep::ServiceSelection,
    WizardStep::ScheduleSelection,
    WizardStep::CustomerDetails,
];

/// Progress row above the wizard: completed and current steps are filled,
/// connectors fill once the step behind them is done.
#[component]
pub fn StepIndicator(#[prop(into)] current: Signal<u8>) -> impl IntoView {
    view! {
        <div class="step-indicator">
            {STEPS
                .iter()
                .map(|step| {
                    let number = step.number();
                    let label = step.label();

                    view! {
                        <div class="step-indicator__step">
                            <div class=move || {
                                if number <= current.get() {
                                    "step-indicator__circle step-indicator__circle--done"
                                } else {
                                    "step-indicator__circle"
                                }
                            }>
                                {move || {
                                    if number <= current.get() {
                                        "✓".to_string()
                                    } else {
                                        number.to_string()
                                    }
                                }}
                            </div>
                            <span class=move || {
                                if number <= current.get() {
                                    "step-indicator__label step-indicator__label--done"
                                } else {
                                    "step-indicator__label"
                                }
                            }>{label}</span>
                        </div>
                        {(number < 3)
                            .then(|| {
                                view! {
                                    <div class=move || {
                                        if number < current.get() {
                                            "step-indicator__connector step-indicator__connector--done"
                                        } else {
                                            "step-indicator__connector"
                                        }
                                    }></div>
                                }
                            })}
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
