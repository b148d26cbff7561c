//! The gallery view: one photo at a time, with secret photos that stay
//! blurred until revealed by a tap or a press-and-hold.

use crate::a11y;
use crate::dom;
use crate::i18n;
use crate::paths;
use keepsake_core::{GalleryPhoto, HOLD_DURATION_MS, RevealSet, Slideshow};
use std::collections::BTreeMap;
use yew::prelude::*;

const GALLERY_ACCENT: &str = "#f6d5f7";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub photos: Vec<GalleryPhoto>,
    pub on_accent_change: Callback<Option<AttrValue>>,
}

#[function_component(GalleryPage)]
pub fn gallery_page(p: &Props) -> Html {
    let slideshow = use_state(Slideshow::default);
    let reveals = use_mut_ref(RevealSet::default);
    let refresh = use_state(|| ());
    let hold_slot = use_mut_ref(|| None::<dom::TimeoutHandle>);
    let hold_armed = use_mut_ref(|| false);

    let total = p.photos.len();

    {
        let on_accent = p.on_accent_change.clone();
        use_effect_with((), move |()| {
            on_accent.emit(Some(AttrValue::from(GALLERY_ACCENT)));
            move || on_accent.emit(None)
        });
    }

    // A shrinking photo list must not leave the position dangling.
    {
        let slideshow = slideshow.clone();
        use_effect_with(total, move |len| {
            let mut next = *slideshow;
            next.clamp(*len);
            if next != *slideshow {
                slideshow.set(next);
            }
        });
    }

    {
        let hold_slot = hold_slot.clone();
        use_effect_with((), move |()| {
            move || {
                hold_slot.borrow_mut().take();
            }
        });
    }

    let do_reveal = {
        let reveals = reveals.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: String| {
            if reveals.borrow_mut().reveal(&id) {
                a11y::set_status(&i18n::t("gallery.revealed_status"));
                refresh.set(());
            }
        })
    };

    let step = {
        let slideshow = slideshow.clone();
        move |delta: i32| {
            let mut next = *slideshow;
            next.step(delta, total);
            slideshow.set(next);
        }
    };
    let on_prev = {
        let step = step.clone();
        Callback::from(move |_| step(-1))
    };
    let on_next = Callback::from(move |_| step(1));

    let Some(photo) = p.photos.get(slideshow.index()) else {
        return html! {
            <div class="gallery-page">
                <h2 class="gallery-title">{ i18n::t("gallery.title") }</h2>
            </div>
        };
    };

    let is_revealed = !photo.revealable || reveals.borrow().is_revealed(&photo.id);

    let on_reveal_click = {
        let do_reveal = do_reveal.clone();
        let id = photo.id.clone();
        Callback::from(move |_| do_reveal.emit(id.clone()))
    };
    let on_press_start = {
        let do_reveal = do_reveal.clone();
        let hold_slot = hold_slot.clone();
        let hold_armed = hold_armed.clone();
        let id = photo.id.clone();
        Callback::from(move |_: PointerEvent| {
            *hold_armed.borrow_mut() = true;
            let armed = hold_armed.clone();
            let reveal = do_reveal.clone();
            let held_id = id.clone();
            *hold_slot.borrow_mut() = dom::schedule_timeout(HOLD_DURATION_MS, move || {
                if armed.replace(false) {
                    reveal.emit(held_id.clone());
                }
            });
        })
    };
    let on_press_end = {
        let do_reveal = do_reveal.clone();
        let hold_slot = hold_slot.clone();
        let hold_armed = hold_armed.clone();
        let id = photo.id.clone();
        // A release before the hold elapses still reveals; it was a tap.
        Callback::from(move |_: PointerEvent| {
            if hold_armed.replace(false) {
                hold_slot.borrow_mut().take();
                do_reveal.emit(id.clone());
            }
        })
    };
    let on_press_cancel = {
        let hold_slot = hold_slot.clone();
        let hold_armed = hold_armed.clone();
        Callback::from(move |_: PointerEvent| {
            hold_armed.replace(false);
            hold_slot.borrow_mut().take();
        })
    };

    let caption = if is_revealed {
        photo
            .hidden_caption
            .clone()
            .unwrap_or_else(|| photo.caption.clone())
    } else {
        photo.caption.clone()
    };

    let current = (slideshow.index() + 1).to_string();
    let total_text = total.to_string();
    let mut vars = BTreeMap::new();
    vars.insert("current", current.as_str());
    vars.insert("total", total_text.as_str());
    let counter = i18n::tr("gallery.counter", Some(&vars));

    html! {
        <div class="gallery-page">
            <h2 class="gallery-title">{ i18n::t("gallery.title") }</h2>
            <div class="gallery-viewer">
                <button
                    type="button"
                    class="gallery-nav gallery-nav--prev"
                    onclick={on_prev}
                    disabled={total <= 1}
                    aria-label={i18n::t("gallery.prev")}
                >
                    {"‹"}
                </button>
                <figure
                    key={photo.id.clone()}
                    class={classes!(
                        "gallery-photo",
                        photo.revealable.then_some("gallery-photo--secret"),
                        is_revealed.then_some("gallery-photo--revealed"),
                    )}
                >
                    <div class="gallery-frame">
                        <img
                            src={paths::asset_path(&photo.src)}
                            alt={photo.alt.clone()}
                            loading="lazy"
                            decoding="async"
                            class={classes!("gallery-image", (!is_revealed).then_some("gallery-image--blurred"))}
                        />
                        { (photo.revealable && !is_revealed).then(|| html! {
                            <button
                                type="button"
                                class="gallery-reveal"
                                onclick={on_reveal_click}
                                onpointerdown={on_press_start}
                                onpointerup={on_press_end}
                                onpointerleave={on_press_cancel}
                                aria-label={i18n::t("gallery.reveal_label")}
                            >
                                { i18n::t("gallery.reveal") }
                                <span class="gallery-reveal-hint">{ i18n::t("gallery.reveal_hint") }</span>
                            </button>
                        }) }
                    </div>
                    <figcaption class="gallery-caption">{ caption }</figcaption>
                </figure>
                <button
                    type="button"
                    class="gallery-nav gallery-nav--next"
                    onclick={on_next}
                    disabled={total <= 1}
                    aria-label={i18n::t("gallery.next")}
                >
                    {"›"}
                </button>
            </div>
            <p class="gallery-counter">{ counter }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn sample_photos() -> Vec<GalleryPhoto> {
        vec![
            GalleryPhoto {
                id: "one".to_string(),
                src: "photos/one.jpg".to_string(),
                alt: "перше фото".to_string(),
                caption: "Перша прогулянка".to_string(),
                revealable: false,
                hidden_caption: None,
            },
            GalleryPhoto {
                id: "two".to_string(),
                src: "photos/two.jpg".to_string(),
                alt: "секрет".to_string(),
                caption: "Тут щось ховається".to_string(),
                revealable: true,
                hidden_caption: Some("Наш секрет".to_string()),
            },
        ]
    }

    #[test]
    fn renders_the_first_photo_and_the_counter() {
        crate::i18n::set_lang("uk");
        let props = Props {
            photos: sample_photos(),
            on_accent_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<GalleryPage>::with_props(props).render());
        assert!(html.contains("Перша прогулянка"));
        assert!(html.contains("Фото 1 / 2"));
        // The first photo is not a secret, so no reveal affordance shows.
        assert!(!html.contains("gallery-reveal"));
    }

    #[test]
    fn empty_gallery_renders_just_the_title() {
        crate::i18n::set_lang("uk");
        let props = Props {
            photos: Vec::new(),
            on_accent_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<GalleryPage>::with_props(props).render());
        assert!(html.contains("Фото і спогади"));
        assert!(!html.contains("gallery-counter"));
    }
}
