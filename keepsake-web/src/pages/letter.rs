//! The letter view: the text types itself out over looping piano, with a
//! smile overlay hidden behind a sparkle button.

use crate::dom;
use crate::i18n;
use keepsake_core::{SMILE_DURATION_MS, TYPE_INTERVAL_MS, Typewriter};
use yew::prelude::*;

const LETTER_ACCENT: &str = "#f9cedf";
const CONFETTI_COUNT: usize = 12;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub letter: AttrValue,
    pub audio_src: AttrValue,
    pub smile_image: AttrValue,
    pub on_accent_change: Callback<Option<AttrValue>>,
}

#[function_component(LetterPage)]
pub fn letter_page(p: &Props) -> Html {
    let typewriter = use_mut_ref(|| Typewriter::new(String::new()));
    let visible = use_state_eq(String::new);
    let show_smile = use_state(|| false);
    let type_slot = use_mut_ref(|| None::<dom::IntervalHandle>);
    let smile_slot = use_mut_ref(|| None::<dom::TimeoutHandle>);
    let audio_ref = use_node_ref();

    {
        let on_accent = p.on_accent_change.clone();
        use_effect_with((), move |()| {
            on_accent.emit(Some(AttrValue::from(LETTER_ACCENT)));
            move || on_accent.emit(None)
        });
    }

    // Restart the typewriter whenever the letter itself changes.
    {
        let typewriter = typewriter.clone();
        let visible = visible.clone();
        let type_slot = type_slot.clone();
        use_effect_with(p.letter.clone(), move |letter: &AttrValue| {
            *typewriter.borrow_mut() = Typewriter::new(letter.to_string());
            visible.set(String::new());

            let ticker = typewriter.clone();
            let shown = visible.clone();
            let slot_in_tick = type_slot.clone();
            *type_slot.borrow_mut() = dom::schedule_interval(TYPE_INTERVAL_MS, move || {
                let (text, more) = {
                    let mut tw = ticker.borrow_mut();
                    let more = tw.tick();
                    (tw.visible().to_string(), more)
                };
                shown.set(text);
                if !more {
                    if let Some(handle) = slot_in_tick.borrow().as_ref() {
                        handle.cancel();
                    }
                }
            });

            move || {
                type_slot.borrow_mut().take();
            }
        });
    }

    {
        let audio_ref = audio_ref.clone();
        use_effect_with((), move |()| {
            if let Some(audio) = audio_ref.cast::<web_sys::HtmlAudioElement>() {
                audio.set_loop(true);
                dom::play_media(&audio);
            }
        });
    }

    {
        let smile_slot = smile_slot.clone();
        use_effect_with((), move |()| {
            move || {
                smile_slot.borrow_mut().take();
            }
        });
    }

    let on_smile = {
        let show_smile = show_smile.clone();
        let smile_slot = smile_slot.clone();
        Callback::from(move |_| {
            show_smile.set(true);
            let hide = show_smile.clone();
            // Replacing the slot cancels a still-pending hide, so repeated
            // presses restart the overlay's six seconds.
            *smile_slot.borrow_mut() =
                dom::schedule_timeout(SMILE_DURATION_MS, move || hide.set(false));
        })
    };

    let done = visible.len() == p.letter.len();

    html! {
        <div class="letter-page">
            <h2 class="letter-title">{ i18n::t("letter.title") }</h2>
            <div class="letter-sheet">
                <p class="letter-typewriter">
                    { (*visible).clone() }
                    <span class={classes!("letter-cursor", done.then_some("letter-cursor--done"))}>{"|"}</span>
                </p>
            </div>
            <button type="button" class="letter-sparkle" onclick={on_smile}>
                { i18n::t("letter.smile_button") }
            </button>
            { show_smile.then(|| html! {
                <div class="smile-popup" role="status">
                    <div class="smile-confetti" aria-hidden="true">
                        { for (0..CONFETTI_COUNT).map(|i| html! {
                            <span class={classes!("confetti", format!("confetti-{}", i % 4 + 1))} />
                        }) }
                    </div>
                    <p>{ i18n::t("letter.smile_caption") }</p>
                    <img src={p.smile_image.clone()} alt={i18n::t("letter.smile_alt")} />
                </div>
            }) }
            <audio ref={audio_ref} src={p.audio_src.clone()} class="sr-only" />
        </div>
    }
}
