//! The tab strip over the content views.
//!
//! The sliding indicator is a single span positioned from the active tab's
//! measured rect; a CSS transition animates the move. The secret tab is only
//! rendered while the unlock predicate holds.

use crate::i18n;
use keepsake_core::{ViewId, menu_entries};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: ViewId,
    pub secret_unlocked: bool,
    pub on_select: Callback<ViewId>,
}

#[cfg(target_arch = "wasm32")]
fn position_indicator(active: ViewId) {
    use wasm_bindgen::JsCast;

    let Some(doc) = crate::dom::document() else {
        return;
    };
    let Some(tab) = doc.get_element_by_id(&format!("tab-{}", active.as_str())) else {
        return;
    };
    let Some(parent) = tab.parent_element() else {
        return;
    };
    let Some(indicator) = doc
        .get_element_by_id("tabs-indicator")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };

    let tab_rect = tab.get_bounding_client_rect();
    let parent_rect = parent.get_bounding_client_rect();
    let translate_x = tab_rect.left() - parent_rect.left();

    let style = indicator.style();
    let _ = style.set_property("transform", &format!("translateX({translate_x}px)"));
    let _ = style.set_property("width", &format!("{}px", tab_rect.width()));
    let _ = style.set_property("opacity", "1");
}

#[function_component(NavTabs)]
pub fn nav_tabs(p: &Props) -> Html {
    let entries = menu_entries(p.secret_unlocked);

    // Re-measure whenever the active tab or the tab count changes, and on
    // window resize while this strip is mounted.
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let active = p.active;
        let tab_count = entries.len();
        use_effect_with((active, tab_count), move |(active, _)| {
            let active = *active;
            position_indicator(active);

            let closure =
                Closure::wrap(Box::new(move || position_indicator(active)) as Box<dyn FnMut()>);
            let target = crate::dom::window();
            if let Some(win) = target.as_ref() {
                let _ = win
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }
            move || {
                if let Some(win) = target {
                    let _ = win.remove_event_listener_with_callback(
                        "resize",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    html! {
        <div class="tabs-wrapper">
            <div class="tabs" role="tablist" aria-orientation="horizontal">
                <span id="tabs-indicator" class="tabs-indicator" aria-hidden="true" />
                { for entries.iter().map(|entry| {
                    let is_active = entry.view == p.active;
                    let view = entry.view;
                    let onclick = {
                        let on_select = p.on_select.clone();
                        Callback::from(move |_| on_select.emit(view))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("tab", is_active.then_some("tab--active"))}
                            {onclick}
                            role="tab"
                            id={format!("tab-{}", view.as_str())}
                            aria-selected={is_active.to_string()}
                            aria-controls={format!("tab-panel-{}", view.as_str())}
                        >
                            <span class="tab__label">{ i18n::t(entry.label_key) }</span>
                            <span class="tab__note">{ i18n::t(entry.note_key) }</span>
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(active: ViewId, secret_unlocked: bool) -> String {
        crate::i18n::set_lang("uk");
        let props = Props {
            active,
            secret_unlocked,
            on_select: Callback::noop(),
        };
        block_on(LocalServerRenderer::<NavTabs>::with_props(props).render())
    }

    #[test]
    fn hides_the_secret_tab_while_locked() {
        let html = render(ViewId::Letter, false);
        assert!(html.contains("tab-letter"));
        assert!(html.contains("tab-gallery"));
        assert!(!html.contains("tab-surprise"));
    }

    #[test]
    fn shows_the_secret_tab_once_unlocked() {
        let html = render(ViewId::Letter, true);
        assert!(html.contains("tab-surprise"));
        assert!(html.contains("Секретний кабінет"));
    }

    #[test]
    fn marks_the_active_tab_for_assistive_tech() {
        let html = render(ViewId::Music, false);
        assert!(html.contains("tab--active"));
        assert!(html.contains(r#"aria-selected="true""#));
    }
}
