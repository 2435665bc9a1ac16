use leptos::prelude::*;
use thaw::*;

use crate::booking::schedule::AVAILABLE_TIMES;
use crate::booking::{
    available_dates, format_date, BookingConfirmation, BookingWizard, CustomerField, SystemClock,
    WizardStep,
};
use crate::catalog;
use crate::components::{NotificationModal, StepIndicator};
use crate::utils::format_price;

/// The three-step booking wizard at `/booking`. All flow and validation
/// decisions live in [`BookingWizard`]; this view renders its state and maps
/// events onto its operations.
#[component]
pub fn BookingPage() -> impl IntoView {
    let wizard = RwSignal::new(BookingWizard::new(catalog::services()));
    let technician = catalog::featured_technician();

    // Customer-detail inputs live in their own signals so typing does not
    // re-render the form; every keystroke is mirrored into the wizard draft.
    let name_input = RwSignal::new(String::new());
    let phone_input = RwSignal::new(String::new());
    let email_input = RwSignal::new(String::new());
    let notes_input = RwSignal::new(String::new());

    let modal_open = RwSignal::new(false);
    let modal_title = RwSignal::new(String::new());
    let modal_message = RwSignal::new(String::new());

    let current_step = Memo::new(move |_| wizard.with(|w| w.step()));
    let step_number = Memo::new(move |_| current_step.get().number());
    let can_proceed = Memo::new(move |_| wizard.with(|w| w.can_advance(w.step())));

    let handle_previous = move |_| {
        wizard.update(|w| {
            w.retreat();
        });
    };

    let handle_next = move |_| {
        wizard.update(|w| {
            w.advance();
        });
    };

    let handle_submit = move |_| {
        let mut submitted = false;
        wizard.update(|w| {
            submitted = w.submit(&mut |confirmation: BookingConfirmation| {
                leptos::logging::log!("預約資料: {:?}", confirmation.booking);
                modal_title.set(confirmation.title);
                modal_message.set(confirmation.message);
                modal_open.set(true);
            });
        });
        if submitted {
            name_input.set(String::new());
            phone_input.set(String::new());
            email_input.set(String::new());
            notes_input.set(String::new());
        }
    };

    view! {
        <div class="booking-page">
            <NotificationModal
                show=modal_open
                title=modal_title
                message=modal_message
                on_close=move || modal_open.set(false)
            />

            <div class="booking-page__header">
                <div class="booking-page__logo">"💅"</div>
                <h1>
                    "Atelier " <span class="booking-page__logo-accent">"Belle"</span>
                </h1>
                <p>"法式美甲工藝 • 專屬於您的奢華體驗"</p>

                <div class="booking-page__technician">
                    <span class="booking-page__technician-avatar">
                        {technician.avatar.clone()}
                    </span>
                    <div class="booking-page__technician-info">
                        <p class="booking-page__technician-name">{technician.name.clone()}</p>
                        <div class="booking-page__technician-meta">
                            <span>{technician.specialty.clone()}</span>
                            <span>{format!("★ {}", technician.rating)}</span>
                        </div>
                    </div>
                </div>
            </div>

            <StepIndicator current=Signal::from(step_number)/>

            <div class="booking-page__card">
                {move || match current_step.get() {
                    WizardStep::ServiceSelection => view! {
                        <ServiceStep wizard=wizard/>
                    }
                    .into_any(),
                    WizardStep::ScheduleSelection => view! {
                        <ScheduleStep wizard=wizard/>
                    }
                    .into_any(),
                    WizardStep::CustomerDetails => view! {
                        <DetailsStep
                            wizard=wizard
                            name_input=name_input
                            phone_input=phone_input
                            email_input=email_input
                            notes_input=notes_input
                        />
                    }
                    .into_any(),
                }}

                <div class="booking-page__nav">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || {
                            current_step.get() == WizardStep::ServiceSelection
                        })
                        on_click=handle_previous
                    >
                        "上一步"
                    </Button>

                    {move || {
                        if current_step.get() == WizardStep::CustomerDetails {
                            view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::derive(move || !can_proceed.get())
                                    on_click=handle_submit
                                >
                                    "✨ 確認預約"
                                </Button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::derive(move || !can_proceed.get())
                                    on_click=handle_next
                                >
                                    "下一步"
                                </Button>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </div>

            <div class="booking-page__footer">
                <span>"台北市大安區敦化南路一段187巷"</span>
                <span>"(02) 2731-5678"</span>
                <p>"營業時間：週二至週六 10:00-20:00 | 週日 10:00-18:00"</p>
            </div>
        </div>
    }
}

#[component]
fn ServiceStep(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    view! {
        <div class="booking-step">
            <h2>"選擇您的專屬服務"</h2>
            <div class="booking-step__services">
                {catalog::services()
                    .into_iter()
                    .map(|service| {
                        let service_id = service.id;

                        view! {
                            <div
                                class=move || {
                                    let selected = wizard.with(|w| {
                                        w.draft().service.as_ref().map(|s| s.id) == Some(service_id)
                                    });
                                    if selected {
                                        "service-card service-card--selected"
                                    } else {
                                        "service-card"
                                    }
                                }
                                on:click=move |_| {
                                    wizard.update(|w| w.select_service(service_id));
                                }
                            >
                                {service
                                    .popular
                                    .then(|| {
                                        view! {
                                            <span class="service-card__popular">"人氣推薦"</span>
                                        }
                                    })}
                                <div class="service-card__body">
                                    <h3>{service.name.clone()}</h3>
                                    <p>{service.description.clone()}</p>
                                    <span class="service-card__duration">
                                        {format!("⏱ {} 分鐘", service.duration_minutes)}
                                    </span>
                                </div>
                                <div class="service-card__price">
                                    {format!("NT$ {}", format_price(service.price))}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn ScheduleStep(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    view! {
        <div class="booking-step">
            <h2>"選擇您方便的時間"</h2>

            <h3 class="booking-step__section-title">"📅 選擇日期"</h3>
            <div class="booking-step__date-grid">
                // Derived per render on purpose: the date set shifts across a
                // day boundary and must never be cached.
                {move || {
                    let selected = wizard.with(|w| w.draft().date.clone());

                    available_dates(&SystemClock)
                        .into_iter()
                        .filter_map(|date| format_date(&date).ok().map(|f| (date, f)))
                        .map(|(date, formatted)| {
                            let is_selected = selected == date;

                            view! {
                                <button
                                    class=if is_selected {
                                        "date-cell date-cell--selected"
                                    } else {
                                        "date-cell"
                                    }
                                    on:click=move |_| {
                                        wizard.update(|w| w.select_date(date.clone()));
                                    }
                                >
                                    <span class="date-cell__weekday">
                                        {formatted.weekday.clone()}
                                    </span>
                                    <span class="date-cell__date">
                                        {formatted.display_date.clone()}
                                    </span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <h3 class="booking-step__section-title">"🕐 選擇時段"</h3>
            <div class="booking-step__time-grid">
                {move || {
                    let selected = wizard.with(|w| w.draft().time.clone());

                    AVAILABLE_TIMES
                        .iter()
                        .copied()
                        .map(|time| {
                            let is_selected = selected == time;

                            view! {
                                <button
                                    class=if is_selected {
                                        "time-cell time-cell--selected"
                                    } else {
                                        "time-cell"
                                    }
                                    on:click=move |_| {
                                        wizard.update(|w| w.select_time(time));
                                    }
                                >
                                    {time}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

#[component]
fn DetailsStep(
    wizard: RwSignal<BookingWizard>,
    name_input: RwSignal<String>,
    phone_input: RwSignal<String>,
    email_input: RwSignal<String>,
    notes_input: RwSignal<String>,
) -> impl IntoView {
    let technician = catalog::featured_technician();

    view! {
        <div class="booking-step">
            <h2>"完成預約資訊"</h2>

            <div class="booking-summary">
                <h3>"★ 預約摘要"</h3>
                {move || {
                    let (service, date, time) = wizard.with(|w| {
                        let draft = w.draft();
                        (draft.service.clone(), draft.date.clone(), draft.time.clone())
                    });
                    let formatted_date = format_date(&date).ok();

                    view! {
                        <div class="booking-summary__grid">
                            <div class="booking-summary__row">
                                <span>"服務項目"</span>
                                <strong>
                                    {service.as_ref().map(|s| s.name.clone()).unwrap_or_default()}
                                </strong>
                            </div>
                            <div class="booking-summary__row">
                                <span>"指定技師"</span>
                                <strong>{technician.name.clone()}</strong>
                            </div>
                            <div class="booking-summary__row">
                                <span>"服務時長"</span>
                                <strong>
                                    {service
                                        .as_ref()
                                        .map(|s| format!("{} 分鐘", s.duration_minutes))
                                        .unwrap_or_default()}
                                </strong>
                            </div>
                            <div class="booking-summary__row">
                                <span>"預約日期"</span>
                                <strong>
                                    {formatted_date
                                        .map(|f| format!("{} {}", f.display_date, f.weekday))
                                        .unwrap_or_default()}
                                </strong>
                            </div>
                            <div class="booking-summary__row">
                                <span>"預約時間"</span>
                                <strong>{time}</strong>
                            </div>
                            <div class="booking-summary__row booking-summary__row--total">
                                <span>"服務費用"</span>
                                <strong>
                                    {service
                                        .as_ref()
                                        .map(|s| format!("NT$ {}", format_price(s.price)))
                                        .unwrap_or_default()}
                                </strong>
                            </div>
                        </div>
                    }
                }}
            </div>

            <div class="booking-form">
                <div class="booking-form__row">
                    <div class="booking-form__group">
                        <label>"姓名 *"</label>
                        <Input
                            placeholder="請輸入您的姓名"
                            value=name_input
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                wizard.update(|w| {
                                    w.update_customer_field(CustomerField::Name, value)
                                });
                            }
                        />
                    </div>
                    <div class="booking-form__group">
                        <label>"聯絡電話 *"</label>
                        <Input
                            input_type=InputType::Tel
                            placeholder="0912-345-678"
                            value=phone_input
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                wizard.update(|w| {
                                    w.update_customer_field(CustomerField::Phone, value)
                                });
                            }
                        />
                    </div>
                </div>
                <div class="booking-form__group">
                    <label>"電子信箱"</label>
                    <Input
                        input_type=InputType::Email
                        placeholder="your@email.com (選填)"
                        value=email_input
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            wizard.update(|w| {
                                w.update_customer_field(CustomerField::Email, value)
                            });
                        }
                    />
                </div>
                <div class="booking-form__group">
                    <label>"特殊需求或備註"</label>
                    <Textarea
                        placeholder="如有特殊需求、過敏狀況或其他備註，請在此告知我們 (選填)"
                        value=notes_input
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            wizard.update(|w| {
                                w.update_customer_field(CustomerField::Notes, value)
                            });
                        }
                    />
                </div>
            </div>
        </div>
    }
}
