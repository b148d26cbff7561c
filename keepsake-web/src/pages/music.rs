//! The music view: one anthem, a play/pause toggle, a slow lyric ticker and
//! a heart that appears when the song plays through.

use crate::dom;
use crate::i18n;
use crate::paths;
use keepsake_core::{LINE_INTERVAL_MS, LineTicker, Playback, Song};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub song: Song,
    pub on_accent_change: Callback<Option<AttrValue>>,
}

#[function_component(MusicPage)]
pub fn music_page(p: &Props) -> Html {
    let playback = use_state(Playback::default);
    let ticker = use_mut_ref(LineTicker::default);
    let line_index = use_state_eq(|| 0_usize);
    let line_slot = use_mut_ref(|| None::<dom::IntervalHandle>);
    let audio_ref = use_node_ref();

    let line_count = p.song.lines.len();

    {
        let on_accent = p.on_accent_change.clone();
        use_effect_with(p.song.color.clone(), move |color: &String| {
            on_accent.emit(Some(AttrValue::from(color.clone())));
            move || on_accent.emit(None)
        });
    }

    // The ticker only runs while the anthem plays; pausing freezes the line.
    {
        let ticker = ticker.clone();
        let line_index = line_index.clone();
        let line_slot = line_slot.clone();
        let playing = playback.is_playing();
        use_effect_with((playing, line_count), move |(playing, count)| {
            if *playing && *count > 0 {
                let count = *count;
                let ticker_in = ticker.clone();
                let shown = line_index.clone();
                *line_slot.borrow_mut() = dom::schedule_interval(LINE_INTERVAL_MS, move || {
                    let mut t = ticker_in.borrow_mut();
                    t.advance(count);
                    shown.set(t.index());
                });
            } else {
                line_slot.borrow_mut().take();
            }
            move || {
                line_slot.borrow_mut().take();
            }
        });
    }

    let onplay = {
        let playback = playback.clone();
        Callback::from(move |_: Event| {
            let mut next = *playback;
            next.on_play();
            playback.set(next);
        })
    };

    let onpause = {
        let playback = playback.clone();
        Callback::from(move |_: Event| {
            let mut next = *playback;
            next.on_pause();
            playback.set(next);
        })
    };

    let onended = {
        let playback = playback.clone();
        let ticker = ticker.clone();
        let line_index = line_index.clone();
        Callback::from(move |_: Event| {
            let mut next = *playback;
            next.on_ended();
            playback.set(next);
            ticker.borrow_mut().reset();
            line_index.set(0);
        })
    };

    let on_toggle = {
        let playback = playback.clone();
        let audio_ref = audio_ref.clone();
        Callback::from(move |_| {
            let Some(audio) = audio_ref.cast::<web_sys::HtmlAudioElement>() else {
                return;
            };
            if playback.is_playing() {
                let _ = audio.pause();
            } else {
                if playback.show_ending() {
                    audio.set_current_time(0.0);
                }
                dom::play_media(&audio);
            }
        })
    };

    let displayed_line = p
        .song
        .lines
        .get(*line_index)
        .cloned()
        .unwrap_or_else(|| {
            if p.song.memory.is_empty() {
                i18n::t("music.fallback_line")
            } else {
                p.song.memory.clone()
            }
        });

    let is_playing = playback.is_playing();
    let accent_style = format!("--anthem-color: {}", p.song.color);

    html! {
        <div class="music-page" style={accent_style} data-playing={is_playing.to_string()}>
            <div class="music-overlay" aria-hidden="true" />
            <div class="music-content">
                <p class="music-label">{ i18n::t("music.label") }</p>
                <h2 class="music-title">{ p.song.title.clone() }</h2>
                <p class="music-subtitle">{ p.song.memory.clone() }</p>
                <button
                    type="button"
                    class="music-play"
                    onclick={on_toggle}
                    aria-pressed={is_playing.to_string()}
                >
                    <span>{ if is_playing { i18n::t("music.pause") } else { i18n::t("music.play") } }</span>
                </button>
                <audio
                    ref={audio_ref}
                    src={paths::asset_path(&p.song.audio)}
                    preload="auto"
                    {onplay}
                    {onpause}
                    {onended}
                >
                    { i18n::t("music.no_audio") }
                </audio>
                <div class="music-line-ticker" aria-live="polite">
                    <span class="music-line">{ displayed_line }</span>
                </div>
                { playback.show_ending().then(|| html! {
                    <div class="music-ending-heart" aria-live="polite">
                        <span />
                    </div>
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

    fn sample_song() -> Song {
        Song {
            id: "anthem".to_string(),
            title: "Обійми".to_string(),
            memory: "Пісня з подорожі".to_string(),
            color: "#f8bcd8".to_string(),
            audio: "audio/anthem.mp3".to_string(),
            image: "photos/anthem.jpg".to_string(),
            lines: vec!["Перший рядок".to_string()],
        }
    }

    #[test]
    fn renders_the_anthem_card_in_paused_state() {
        crate::i18n::set_lang("uk");
        let props = Props {
            song: sample_song(),
            on_accent_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<MusicPage>::with_props(props).render());
        assert!(html.contains("Обійми"));
        assert!(html.contains("/audio/anthem.mp3"));
        assert!(html.contains(r#"data-playing="false""#));
        assert!(html.contains("Перший рядок"));
        assert!(!html.contains("music-ending-heart"));
    }
}
