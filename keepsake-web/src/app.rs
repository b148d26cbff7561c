//! The application shell: owns the active view, the visited set, the gate
//! feedback and the accent color, and wires the router to all of them.

use crate::a11y;
use crate::components::nav_tabs::NavTabs;
use crate::content;
use crate::dom;
use crate::i18n;
use crate::pages::gallery::GalleryPage;
use crate::pages::letter::LetterPage;
use crate::pages::login::LoginScreen;
use crate::pages::music::MusicPage;
use crate::pages::surprise::SurprisePage;
use crate::paths;
use crate::routes::Route;
use keepsake_core::{
    Gate, LOCKOUT_MS, SubmitOutcome, UnlockAction, ViewId, resolve_active, unlock_timeline,
    VisitedSet,
};
use yew::prelude::*;
use yew_router::prelude::*;

const LETTER_AUDIO: &str = "audio/piano.mp3";
const SMILE_IMAGE: &str = "photos/smile.jpg";

/// Top-level component mounting the router context.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter basename={paths::router_base()}>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let view = use_state(|| ViewId::Login);
    let visited = use_state(VisitedSet::default);
    let accent = use_state(|| None::<AttrValue>);
    let gate_model = use_mut_ref(|| Gate::new(content::content().secret_date.clone()));
    let gate = use_state(|| gate_model.borrow().clone());
    let show_greeting = use_state(|| false);
    let unlock_slots = use_mut_ref(Vec::<dom::TimeoutHandle>::new);
    let lock_slot = use_mut_ref(|| None::<dom::TimeoutHandle>);
    let current_language = use_state(i18n::current_lang);

    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::Home);

    // Sync route with view (only when the view changes programmatically).
    {
        let navigator_for_view = navigator;
        let current_route = route.clone();
        use_effect_with(
            (view.clone(), current_route),
            move |(view, current_route)| {
                if let Some(nav) = navigator_for_view.as_ref() {
                    let new_route = Route::from_view(**view);
                    if &new_route != current_route {
                        nav.push(&new_route);
                    }
                }
            },
        );
    }

    // Sync view with route (URL navigation). A deep link into a content
    // route never skips the gate: before entry only `Home` is honored.
    {
        let view = view.clone();
        use_effect_with(route, move |route| {
            let new_view = route.to_view();
            if new_view != *view && (new_view == ViewId::Login || view.is_section()) {
                view.set(new_view);
            }
        });
    }

    // Every non-login activation marks its view visited; the record is
    // monotonic so revisits are no-ops.
    {
        let visited = visited.clone();
        use_effect_with(*view, move |v| {
            if v.is_section() {
                let mut set = *visited;
                if set.mark(*v) {
                    visited.set(set);
                }
            }
        });
    }

    let secret_unlocked = visited.secret_unlocked();

    // The secret cabinet must never stay active without its predicate.
    {
        let view_handle = view.clone();
        use_effect_with((*view, secret_unlocked), move |(v, unlocked)| {
            let resolved = resolve_active(*v, *unlocked);
            if resolved != *v {
                view_handle.set(resolved);
            }
        });
    }

    // Pending gate timers die with the shell.
    {
        let unlock_slots = unlock_slots.clone();
        let lock_slot = lock_slot.clone();
        use_effect_with((), move |()| {
            move || {
                unlock_slots.borrow_mut().clear();
                lock_slot.borrow_mut().take();
            }
        });
    }

    let on_date_change = {
        let gate_model = gate_model.clone();
        let gate = gate.clone();
        let show_greeting = show_greeting.clone();
        Callback::from(move |value: String| {
            {
                let mut model = gate_model.borrow_mut();
                model.set_input(&value);
                gate.set(model.clone());
            }
            show_greeting.set(false);
        })
    };

    let on_submit = {
        let gate_model = gate_model.clone();
        let gate = gate.clone();
        let show_greeting = show_greeting.clone();
        let view = view.clone();
        let unlock_slots = unlock_slots.clone();
        let lock_slot = lock_slot.clone();
        Callback::from(move |()| {
            let outcome = gate_model.borrow_mut().submit();
            gate.set(gate_model.borrow().clone());
            match outcome {
                SubmitOutcome::Accepted => {
                    // One handle per timeline step; re-matching replaces any
                    // pending sequence instead of stacking a second one.
                    let mut slots = unlock_slots.borrow_mut();
                    slots.clear();
                    for step in unlock_timeline() {
                        let handle = match step.action {
                            UnlockAction::ShowGreeting => {
                                let show_greeting = show_greeting.clone();
                                dom::schedule_timeout(step.at_ms, move || {
                                    show_greeting.set(true);
                                })
                            }
                            UnlockAction::Enter => {
                                let gate_model = gate_model.clone();
                                let gate = gate.clone();
                                let show_greeting = show_greeting.clone();
                                let view = view.clone();
                                dom::schedule_timeout(step.at_ms, move || {
                                    gate_model.borrow_mut().reset();
                                    gate.set(gate_model.borrow().clone());
                                    show_greeting.set(false);
                                    view.set(ViewId::first_section());
                                })
                            }
                        };
                        if let Some(handle) = handle {
                            slots.push(handle);
                        }
                    }
                }
                SubmitOutcome::Rejected => {
                    a11y::set_status(&i18n::t("login.error"));
                    let gate_model = gate_model.clone();
                    let gate = gate.clone();
                    *lock_slot.borrow_mut() =
                        dom::schedule_timeout(LOCKOUT_MS, move || {
                            gate_model.borrow_mut().clear_lock();
                            gate.set(gate_model.borrow().clone());
                        });
                }
                SubmitOutcome::Ignored => {}
            }
        })
    };

    let on_accent = {
        let accent = accent.clone();
        Callback::from(move |color: Option<AttrValue>| accent.set(color))
    };

    let data = content::content();
    let main_view = if *view == ViewId::Login {
        html! {
            <LoginScreen
                date_input={AttrValue::from(gate.input().to_string())}
                can_submit={gate.can_submit()}
                locked={gate.is_locked()}
                heart_lit={gate.is_unlocked()}
                show_greeting={*show_greeting}
                error={gate.has_error()}
                on_change={on_date_change}
                on_submit={on_submit}
            />
        }
    } else {
        let active = *view;
        let panel = match active {
            ViewId::Letter => html! {
                <LetterPage
                    letter={AttrValue::from(data.letter.clone())}
                    audio_src={AttrValue::from(paths::asset_path(LETTER_AUDIO))}
                    smile_image={AttrValue::from(paths::asset_path(SMILE_IMAGE))}
                    on_accent_change={on_accent.clone()}
                />
            },
            ViewId::Music => html! {
                <MusicPage song={data.anthem().clone()} on_accent_change={on_accent.clone()} />
            },
            ViewId::Gallery => html! {
                <GalleryPage photos={data.photos.clone()} on_accent_change={on_accent.clone()} />
            },
            ViewId::Surprise => html! {
                <SurprisePage copy={data.surprise.clone()} on_accent_change={on_accent.clone()} />
            },
            ViewId::Login => Html::default(),
        };
        let on_select = {
            let view = view.clone();
            Callback::from(move |target: ViewId| view.set(target))
        };
        html! {
            <div class="main-layout">
                <NavTabs
                    active={active}
                    secret_unlocked={secret_unlocked}
                    on_select={on_select}
                />
                <div
                    key={active.as_str()}
                    class="tab-content"
                    role="tabpanel"
                    id={format!("tab-panel-{active}")}
                    aria-labelledby={format!("tab-{active}")}
                >
                    { panel }
                </div>
            </div>
        }
    };

    let accent_style = accent.as_ref().map(|color| {
        format!("background: linear-gradient(140deg, rgba(255, 233, 243, 0.95) 0%, {color} 100%)")
    });

    html! {
        <div class="app-shell" style={accent_style}>
            <style>{ a11y::visible_focus_css() }</style>
            <nav class="lang-switch" aria-label={i18n::t("nav.language")}>
                { for i18n::locales().iter().map(|meta| {
                    let code = meta.code;
                    let current_language = current_language.clone();
                    let active = *current_language == code;
                    let onclick = Callback::from(move |_| {
                        i18n::set_lang(code);
                        current_language.set(code.to_string());
                    });
                    html! {
                        <button
                            type="button"
                            class={classes!("lang-btn", active.then_some("lang-btn--active"))}
                            {onclick}
                        >
                            { meta.code.to_ascii_uppercase() }
                        </button>
                    }
                }) }
            </nav>
            { main_view }
            <p id="card-status" class="sr-only" aria-live="polite"></p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn boots_into_the_gate_screen() {
        crate::i18n::set_lang("uk");
        let html = block_on(LocalServerRenderer::<AppInner>::new().render());
        assert!(html.contains("login-screen"));
        assert!(html.contains("Назви нашу особливу дату"));
        // Content views stay behind the gate.
        assert!(!html.contains("tab-content"));
        assert!(!html.contains("main-layout"));
    }
}
