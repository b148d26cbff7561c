//! The gate screen: a date input in front of a heart that lights up when
//! the right date is entered.

use crate::components::heart_icon::HeartIcon;
use crate::i18n;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub date_input: AttrValue,
    pub can_submit: bool,
    pub locked: bool,
    pub heart_lit: bool,
    pub show_greeting: bool,
    pub error: bool,
    pub on_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(p: &Props) -> Html {
    let input_ref = use_node_ref();

    // Put the cursor back in the field after a failed attempt.
    #[cfg(target_arch = "wasm32")]
    {
        let input_ref = input_ref.clone();
        use_effect_with(p.error, move |error| {
            if *error {
                if let Some(el) = input_ref.cast::<web_sys::HtmlElement>() {
                    let _ = el.focus();
                }
            }
        });
    }

    let oninput = {
        let on_change = p.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                on_change.emit(input.value());
            }
        })
    };

    let onkeydown = {
        let on_submit = p.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_submit.emit(());
            }
        })
    };

    let onclick = {
        let on_submit = p.on_submit.clone();
        Callback::from(move |_| on_submit.emit(()))
    };

    html! {
        <div class="login-screen">
            <div class={classes!("heart-portal", p.heart_lit.then_some("heart-portal--lit"))}>
                <HeartIcon lit={p.heart_lit} />
            </div>
            <h1 class="login-title">{ i18n::t("login.title") }</h1>
            <p class="login-hint">{ i18n::t("login.hint") }</p>
            <div class="login-input-row">
                <input
                    ref={input_ref}
                    value={p.date_input.clone()}
                    {oninput}
                    {onkeydown}
                    placeholder={i18n::t("login.placeholder")}
                    inputmode="numeric"
                    maxlength="10"
                    class="login-input"
                />
                <button
                    type="button"
                    {onclick}
                    disabled={!p.can_submit || p.locked}
                    class="login-submit"
                >
                    { i18n::t("login.submit") }
                </button>
            </div>
            { p.error.then(|| html! {
                <p class="login-error" role="alert">{ i18n::t("login.error") }</p>
            }) }
            { p.show_greeting.then(|| html! {
                <p class="login-greeting" aria-live="polite">{ i18n::t("login.greeting") }</p>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(props: Props) -> String {
        crate::i18n::set_lang("uk");
        block_on(LocalServerRenderer::<LoginScreen>::with_props(props).render())
    }

    fn base_props() -> Props {
        Props {
            date_input: AttrValue::from("14.02.2024"),
            can_submit: true,
            locked: false,
            heart_lit: false,
            show_greeting: false,
            error: false,
            on_change: Callback::noop(),
            on_submit: Callback::noop(),
        }
    }

    #[test]
    fn renders_the_prompt_and_the_typed_date() {
        let html = render(base_props());
        assert!(html.contains("Назви нашу особливу дату"));
        assert!(html.contains("14.02.2024"));
        assert!(!html.contains("login-error"));
        assert!(!html.contains("login-greeting"));
    }

    #[test]
    fn lockout_disables_the_submit_button() {
        let html = render(Props {
            locked: true,
            ..base_props()
        });
        assert!(html.contains("disabled"));
    }

    #[test]
    fn incomplete_input_disables_the_submit_button() {
        let html = render(Props {
            date_input: AttrValue::from("14.02"),
            can_submit: false,
            ..base_props()
        });
        assert!(html.contains("disabled"));
    }

    #[test]
    fn error_and_greeting_lines_render_when_flagged() {
        let html = render(Props {
            error: true,
            ..base_props()
        });
        assert!(html.contains("login-error"));
        assert!(html.contains("дата не збігається"));

        let html = render(Props {
            heart_lit: true,
            show_greeting: true,
            ..base_props()
        });
        assert!(html.contains("login-greeting"));
        assert!(html.contains("heart-portal--lit"));
    }
}
