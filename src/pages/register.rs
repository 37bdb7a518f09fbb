//! Register Page
//!
//! Account creation form. Field constraints mirror the backend's, so most
//! rejections never leave the client.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::router::paths;
use crate::state::global::GlobalState;

/// Password must contain one of these beyond letters and digits
const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Register page component
#[component]
pub fn Register() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state.clone();
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();
        let mail = email.get();

        if let Err(message) = validate(&user, &pass, &mail) {
            state_for_submit.show_error(&message);
            return;
        }

        set_submitting.set(true);
        let state = state_for_submit.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&user, &pass, &mail).await {
                Ok(response) => {
                    state.show_success(&response.message);
                    navigate(paths::LOGIN, Default::default());
                }
                Err(e) => {
                    state.show_error(&format!("Registration failed: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-12">
            <div class="bg-gray-800 rounded-xl p-8">
                <h1 class="text-2xl font-bold mb-6">"Create account"</h1>

                <form on:submit=submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <p class="text-xs text-gray-500 mt-2">
                            "At least 6 characters, with an uppercase letter, a lowercase letter,
                             a digit and one of @$!%*?&"
                        </p>
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Creating..." } else { "Create account" }}
                    </button>
                </form>

                <p class="text-sm text-gray-400 mt-6">
                    "Already registered? "
                    <A href=paths::LOGIN class="text-primary-400 hover:text-primary-300">
                        "Log in"
                    </A>
                </p>
            </div>
        </div>
    }
}

/// Validate the whole form, first failure wins
fn validate(username: &str, password: &str, email: &str) -> Result<(), String> {
    validate_username(username)?;
    validate_password(password)?;
    validate_email(email)
}

fn validate_username(username: &str) -> Result<(), String> {
    let len = username.chars().count();
    if (3..=20).contains(&len) {
        Ok(())
    } else {
        Err("Username must be 3 to 20 characters".to_string())
    }
}

fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIALS.contains(c));

    if has_upper && has_lower && has_digit && has_special {
        Ok(())
    } else {
        Err(format!(
            "Password needs an uppercase letter, a lowercase letter, a digit and one of {}",
            PASSWORD_SPECIALS
        ))
    }
}

fn validate_email(email: &str) -> Result<(), String> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err("Enter a valid email address".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_length_bounds() {
        assert!(validate_username("abc").is_ok());
        assert!(validate_username("a".repeat(20).as_str()).is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("a".repeat(21).as_str()).is_err());
    }

    #[test]
    fn test_password_requires_all_character_classes() {
        assert!(validate_password("Abc12!").is_ok());
        assert!(validate_password("abc12!").is_err()); // no uppercase
        assert!(validate_password("ABC12!").is_err()); // no lowercase
        assert!(validate_password("Abcde!").is_err()); // no digit
        assert!(validate_password("Abc123").is_err()); // no special
        assert!(validate_password("Ab1!").is_err()); // too short
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user@example").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("nope").is_err());
    }

    #[test]
    fn test_validate_reports_first_failure() {
        assert_eq!(
            validate("ab", "Abc12!", "user@example.com"),
            Err("Username must be 3 to 20 characters".to_string())
        );
        assert!(validate("alice", "Abc12!", "user@example.com").is_ok());
    }
}
