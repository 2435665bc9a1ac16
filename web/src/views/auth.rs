use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use thaw::*;

use crate::booking::validate::{
    is_valid_email, is_valid_name, is_valid_tw_mobile, password_strength,
};

/// A field-scoped validation failure; `field` is `None` for form-level
/// messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    pub field: Option<&'static str>,
    pub message: String,
}

impl FormError {
    fn on(field: &'static str, message: &str) -> Self {
        FormError {
            field: Some(field),
            message: message.to_string(),
        }
    }

    fn general(message: &str) -> Self {
        FormError {
            field: None,
            message: message.to_string(),
        }
    }
}

pub fn validate_login(email: &str, password: &str) -> Vec<FormError> {
    let mut errors = Vec::new();

    if email.is_empty() {
        errors.push(FormError::on("email", "請輸入電子信箱"));
    } else if !is_valid_email(email) {
        errors.push(FormError::on("email", "電子信箱格式不正確"));
    }

    if password.is_empty() {
        errors.push(FormError::on("password", "請輸入密碼"));
    } else if password.chars().count() < 6 {
        errors.push(FormError::on("password", "密碼至少需要 6 個字符"));
    }

    errors
}

pub fn validate_register(
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
    confirm_password: &str,
    agreed_to_terms: bool,
) -> Vec<FormError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(FormError::on("name", "請輸入您的姓名"));
    } else if !is_valid_name(name) {
        errors.push(FormError::on("name", "姓名至少需要 2 個字符"));
    }

    if email.is_empty() {
        errors.push(FormError::on("email", "請輸入電子信箱"));
    } else if !is_valid_email(email) {
        errors.push(FormError::on("email", "電子信箱格式不正確"));
    }

    if phone.is_empty() {
        errors.push(FormError::on("phone", "請輸入手機號碼"));
    } else if !is_valid_tw_mobile(phone) {
        errors.push(FormError::on("phone", "請輸入有效的台灣手機號碼 (09xxxxxxxx)"));
    }

    if password.is_empty() {
        errors.push(FormError::on("password", "請輸入密碼"));
    } else if password_strength(password).score() < 3 {
        errors.push(FormError::on(
            "password",
            "密碼強度不足，請包含大小寫字母、數字或特殊符號",
        ));
    }

    if confirm_password.is_empty() {
        errors.push(FormError::on("confirm_password", "請確認密碼"));
    } else if password != confirm_password {
        errors.push(FormError::on("confirm_password", "密碼不一致"));
    }

    if !agreed_to_terms {
        errors.push(FormError::general("請同意服務條款與隱私政策"));
    }

    errors
}

fn field_error(errors: &[FormError], field: &'static str) -> Option<String> {
    errors
        .iter()
        .find(|error| error.field == Some(field))
        .map(|error| error.message.clone())
}

/// `/login`. Validation is local; the sign-in itself is simulated (there is
/// no account backend) and lands back on the gallery.
#[component]
pub fn LoginPage() -> impl IntoView {
    let query_map = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_visible = RwSignal::new(false);
    let remember_me = RwSignal::new(false);
    let errors = RwSignal::new(Vec::<FormError>::new());
    let success_message = RwSignal::new(Option::<String>::None);

    // Arriving from a completed registration shows a one-shot banner.
    Effect::new(move |_| {
        if query_map.get().get("success").as_deref() == Some("signup") {
            success_message.set(Some("帳號建立成功！請登入。".to_string()));
        }
    });

    let submit_login = move || {
        let found = validate_login(&email.get(), &password.get());
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        errors.set(Vec::new());
        leptos::logging::log!("登入資料: email={}, remember={}", email.get(), remember_me.get());
        success_message.set(Some("登入成功！歡迎回到 NailStudio。".to_string()));
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__logo">
                <div class="auth-page__logo-icon">"✨"</div>
                <h1>"NailStudio"</h1>
                <p>"歡迎回到精品美甲平台"</p>
            </div>

            <div class="auth-card">
                {move || {
                    success_message.get().map(|message| view! {
                        <div class="auth-card__success">
                            <span>"✓"</span>
                            <p>{message}</p>
                        </div>
                    })
                }}

                {move || {
                    let general: Vec<FormError> = errors
                        .get()
                        .into_iter()
                        .filter(|error| error.field.is_none())
                        .collect();

                    (!general.is_empty())
                        .then(|| view! {
                            <div class="auth-card__errors">
                                {general
                                    .into_iter()
                                    .map(|error| view! { <p>{error.message}</p> })
                                    .collect::<Vec<_>>()}
                            </div>
                        })
                }}

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit_login();
                }>
                    <div class="auth-card__group">
                        <label>"電子信箱"</label>
                        <Input
                            input_type=InputType::Email
                            placeholder="請輸入您的電子信箱"
                            value=email
                        />
                        {move || {
                            field_error(&errors.get(), "email")
                                .map(|message| view! { <p class="auth-card__field-error">{message}</p> })
                        }}
                    </div>

                    <div class="auth-card__group">
                        <label>"密碼"</label>
                        <div class="auth-card__password-wrapper">
                            <Input
                                input_type=Signal::derive(move || {
                                    if password_visible.get() {
                                        InputType::Text
                                    } else {
                                        InputType::Password
                                    }
                                })
                                placeholder="請輸入您的密碼"
                                value=password
                            />
                            <button
                                type="button"
                                class="auth-card__password-toggle"
                                on:click=move |_| password_visible.set(!password_visible.get())
                            >
                                {move || if password_visible.get() { "🙈" } else { "👁" }}
                            </button>
                        </div>
                        {move || {
                            field_error(&errors.get(), "password")
                                .map(|message| view! { <p class="auth-card__field-error">{message}</p> })
                        }}
                    </div>

                    <div class="auth-card__options">
                        <label class="auth-card__remember">
                            <input
                                type="checkbox"
                                prop:checked=move || remember_me.get()
                                on:change=move |_| remember_me.set(!remember_me.get())
                            />
                            <span>"記住我"</span>
                        </label>
                        <button type="button" class="auth-card__link">"忘記密碼？"</button>
                    </div>

                    <Button
                        class="auth-card__submit"
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                    >
                        "登入"
                    </Button>
                </form>

                <div class="auth-card__footer">
                    <p>
                        "還沒有帳號？"
                        <A href="/register">"立即註冊"</A>
                    </p>
                </div>
            </div>
        </div>
    }
}

/// `/register`. Same simulation approach as login: full field validation,
/// then a redirect to `/login?success=signup`.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_visible = RwSignal::new(false);
    let agree_to_terms = RwSignal::new(false);
    let agree_to_marketing = RwSignal::new(false);
    let errors = RwSignal::new(Vec::<FormError>::new());

    let strength_score = Memo::new(move |_| password_strength(&password.get()).score());

    let submit_register = {
        let navigate = navigate.clone();
        move || {
            let found = validate_register(
                &name.get(),
                &email.get(),
                &phone.get(),
                &password.get(),
                &confirm_password.get(),
                agree_to_terms.get(),
            );
            if !found.is_empty() {
                errors.set(found);
                return;
            }

            errors.set(Vec::new());
            leptos::logging::log!(
                "註冊資料: name={}, email={}, marketing={}",
                name.get(),
                email.get(),
                agree_to_marketing.get()
            );
            navigate("/login?success=signup", Default::default());
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__logo">
                <div class="auth-page__logo-icon">"✨"</div>
                <h1>"加入 NailStudio"</h1>
                <p>"建立帳號，開始您的美甲之旅"</p>
            </div>

            <div class="auth-card">
                {move || {
                    let general: Vec<FormError> = errors
                        .get()
                        .into_iter()
                        .filter(|error| error.field.is_none())
                        .collect();

                    (!general.is_empty())
                        .then(|| view! {
                            <div class="auth-card__errors">
                                {general
                                    .into_iter()
                                    .map(|error| view! { <p>{error.message}</p> })
                                    .collect::<Vec<_>>()}
                            </div>
                        })
                }}

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit_register();
                }>
                    <div class="auth-card__group">
                        <label>"姓名"</label>
                        <Input placeholder="請輸入您的姓名" value=name/>
                        {move || {
                            field_error(&errors.get(), "name")
                                .map(|message| view! { <p class="auth-card__field-error">{message}</p> })
                        }}
                    </div>

                    <div class="auth-card__group">
                        <label>"電子信箱"</label>
                        <Input
                            input_type=InputType::Email
                            placeholder="請輸入您的電子信箱"
                            value=email
                        />
                        {move || {
                            field_error(&errors.get(), "email")
                                .map(|message| view! { <p class="auth-card__field-error">{message}</p> })
                        }}
                    </div>

                    <div class="auth-card__group">
                        <label>"手機號碼"</label>
                        <Input
                            input_type=InputType::Tel
                            placeholder="0912345678"
                            value=phone
                        />
                        {move || {
                            field_error(&errors.get(), "phone")
                                .map(|message| view! { <p class="auth-card__field-error">{message}</p> })
                        }}
                    </div>

                    <div class="auth-card__group">
                        <label>"密碼"</label>
                        <div class="auth-card__password-wrapper">
                            <Input
                                input_type=Signal::derive(move || {
                                    if password_visible.get() {
                                        InputType::Text
                                    } else {
                                        InputType::Password
                                    }
                                })
                                placeholder="至少 8 個字符，含大小寫與數字"
                                value=password
                            />
                            <button
                                type="button"
                                class="auth-card__password-toggle"
                                on:click=move |_| password_visible.set(!password_visible.get())
                            >
                                {move || if password_visible.get() { "🙈" } else { "👁" }}
                            </button>
                        </div>
                        <div class="auth-card__strength">
                            {move || {
                                let score = strength_score.get();
                                (0..5)
                                    .map(|i| {
                                        view! {
                                            <span class=if i < score {
                                                "auth-card__strength-bar auth-card__strength-bar--filled"
                                            } else {
                                                "auth-card__strength-bar"
                                            }></span>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                        {move || {
                            field_error(&errors.get(), "password")
                                .map(|message| view! { <p class="auth-card__field-error">{message}</p> })
                        }}
                    </div>

                    <div class="auth-card__group">
                        <label>"確認密碼"</label>
                        <Input
                            input_type=InputType::Password
                            placeholder="請再次輸入密碼"
                            value=confirm_password
                        />
                        {move || {
                            field_error(&errors.get(), "confirm_password")
                                .map(|message| view! { <p class="auth-card__field-error">{message}</p> })
                        }}
                    </div>

                    <label class="auth-card__terms">
                        <input
                            type="checkbox"
                            prop:checked=move || agree_to_terms.get()
                            on:change=move |_| agree_to_terms.set(!agree_to_terms.get())
                        />
                        <span>"我同意服務條款與隱私政策"</span>
                    </label>
                    <label class="auth-card__terms">
                        <input
                            type="checkbox"
                            prop:checked=move || agree_to_marketing.get()
                            on:change=move |_| agree_to_marketing.set(!agree_to_marketing.get())
                        />
                        <span>"我願意收到優惠與活動通知 (選填)"</span>
                    </label>

                    <Button
                        class="auth-card__submit"
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                    >
                        "註冊"
                    </Button>
                </form>

                <div class="auth-card__footer">
                    <p>
                        "已經有帳號了？"
                        <A href="/login">"前往登入"</A>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fields(errors: &[FormError]) -> Vec<Option<&'static str>> {
        errors.iter().map(|error| error.field).collect()
    }

    #[test]
    fn login_accepts_well_formed_credentials() {
        assert_eq!(validate_login("user@example.com", "secret1"), Vec::new());
    }

    #[test]
    fn login_flags_missing_and_malformed_fields() {
        let errors = validate_login("", "");
        assert_eq!(fields(&errors), vec![Some("email"), Some("password")]);

        let errors = validate_login("not-an-email", "12345");
        assert_eq!(fields(&errors), vec![Some("email"), Some("password")]);
    }

    #[test]
    fn register_accepts_a_complete_valid_form() {
        let errors = validate_register(
            "王小明",
            "ming@example.com",
            "0912345678",
            "Abcdef12",
            "Abcdef12",
            true,
        );

        assert_eq!(errors, Vec::new());
    }

    #[test]
    fn register_requires_terms_agreement_as_a_general_error() {
        let errors = validate_register(
            "王小明",
            "ming@example.com",
            "0912345678",
            "Abcdef12",
            "Abcdef12",
            false,
        );

        assert_eq!(fields(&errors), vec![None]);
    }

    #[test]
    fn register_rejects_weak_passwords_and_mismatches() {
        let errors = validate_register(
            "王小明",
            "ming@example.com",
            "0912345678",
            "abcdefgh",
            "different",
            true,
        );

        assert_eq!(
            fields(&errors),
            vec![Some("password"), Some("confirm_password")]
        );
    }

    #[test]
    fn register_rejects_non_taiwanese_mobile_numbers() {
        let errors = validate_register(
            "王小明",
            "ming@example.com",
            "0212345678",
            "Abcdef12",
            "Abcdef12",
            true,
        );

        assert_eq!(fields(&errors), vec![Some("phone")]);
    }
}
