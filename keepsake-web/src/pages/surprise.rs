//! The secret cabinet: a medical-card parody with a fake diagnostic run and
//! a printable prescription.

use crate::dom;
use crate::i18n;
use keepsake_core::{
    DIAGNOSIS_DURATION_MS, Diagnosis, PrescriptionLabels, SurpriseCopy, prescription_html,
};
use std::collections::BTreeMap;
use yew::prelude::*;

const SURPRISE_ACCENT: &str = "#ffd1dc";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub copy: SurpriseCopy,
    pub on_accent_change: Callback<Option<AttrValue>>,
}

/// Labels for the printable document, resolved against the active locale.
#[must_use]
pub fn prescription_labels() -> PrescriptionLabels {
    PrescriptionLabels {
        title: i18n::t("surprise.title"),
        patient: i18n::t("surprise.patient_label"),
        diagnosis: i18n::t("surprise.diagnosis_label"),
        symptoms: i18n::t("surprise.symptoms"),
        treatment: i18n::t("surprise.treatment"),
        prognosis: i18n::t("surprise.prognosis"),
        conclusion: i18n::t("surprise.conclusion"),
        signature: i18n::t("surprise.signature"),
    }
}

#[function_component(SurprisePage)]
pub fn surprise_page(p: &Props) -> Html {
    let diagnosis = use_mut_ref(Diagnosis::default);
    let refresh = use_state(|| ());
    let diagnose_slot = use_mut_ref(|| None::<dom::TimeoutHandle>);

    {
        let on_accent = p.on_accent_change.clone();
        use_effect_with((), move |()| {
            on_accent.emit(Some(AttrValue::from(SURPRISE_ACCENT)));
            move || on_accent.emit(None)
        });
    }

    {
        let diagnose_slot = diagnose_slot.clone();
        use_effect_with((), move |()| {
            move || {
                diagnose_slot.borrow_mut().take();
            }
        });
    }

    let on_diagnose = {
        let diagnosis = diagnosis.clone();
        let refresh = refresh.clone();
        let diagnose_slot = diagnose_slot.clone();
        Callback::from(move |_| {
            if !diagnosis.borrow_mut().start() {
                return;
            }
            refresh.set(());
            let model = diagnosis.clone();
            let done = refresh.clone();
            *diagnose_slot.borrow_mut() =
                dom::schedule_timeout(DIAGNOSIS_DURATION_MS, move || {
                    model.borrow_mut().complete();
                    done.set(());
                });
        })
    };

    let on_prescribe = {
        let copy = p.copy.clone();
        Callback::from(move |_| {
            let labels = prescription_labels();
            let body = prescription_html(&copy, &labels);
            dom::open_print_window(&labels.title, &body);
        })
    };

    let is_diagnosing = diagnosis.borrow().is_running();
    let show_result = diagnosis.borrow().is_revealed();

    let mut name_vars = BTreeMap::new();
    name_vars.insert("name", p.copy.header_name.as_str());
    let patient_line = i18n::tr("surprise.patient", Some(&name_vars));

    let mut beloved_vars = BTreeMap::new();
    beloved_vars.insert("beloved", p.copy.header_beloved.as_str());
    let diagnosis_line = i18n::tr("surprise.diagnosis_line", Some(&beloved_vars));

    html! {
        <div class="surprise-page">
            <h2 class="surprise-title">{ i18n::t("surprise.title") }</h2>
            <div class="surprise-card">
                <header class="surprise-header">
                    <h3>{ patient_line }</h3>
                    <p>{ diagnosis_line }</p>
                </header>
                <table class="surprise-table">
                    <tbody>
                        <tr>
                            <th scope="row">{ i18n::t("surprise.symptoms") }</th>
                            <td>{ p.copy.symptoms.clone() }</td>
                        </tr>
                        <tr>
                            <th scope="row">{ i18n::t("surprise.treatment") }</th>
                            <td>{ p.copy.treatment.clone() }</td>
                        </tr>
                        <tr>
                            <th scope="row">{ i18n::t("surprise.prognosis") }</th>
                            <td>{ p.copy.prognosis.clone() }</td>
                        </tr>
                    </tbody>
                </table>
                <button
                    type="button"
                    class="surprise-diagnose"
                    onclick={on_diagnose}
                    disabled={is_diagnosing}
                >
                    { if is_diagnosing { i18n::t("surprise.diagnosing") } else { i18n::t("surprise.diagnose") } }
                </button>
                <button type="button" class="surprise-prescribe" onclick={on_prescribe}>
                    { i18n::t("surprise.prescribe") }
                </button>
                { is_diagnosing.then(|| html! {
                    <>
                        <div class="surprise-ecg" aria-live="polite">
                            <span class="surprise-ecg-line" />
                        </div>
                        <div class="surprise-progress" aria-hidden="true">
                            <span class="surprise-progress-bar" />
                        </div>
                    </>
                }) }
                { show_result.then(|| html! {
                    <p class="surprise-result" aria-live="polite">{ p.copy.diagnosis.clone() }</p>
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

    fn sample_copy() -> SurpriseCopy {
        SurpriseCopy {
            header_name: "Соломія".to_string(),
            header_beloved: "Андрія".to_string(),
            symptoms: "Усмішка без причини".to_string(),
            treatment: "Обійми двічі на день".to_string(),
            prognosis: "Стабільно щасливий".to_string(),
            diagnosis: "Невиліковно закохана".to_string(),
        }
    }

    #[test]
    fn renders_the_card_with_an_idle_diagnostic() {
        crate::i18n::set_lang("uk");
        let props = Props {
            copy: sample_copy(),
            on_accent_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<SurprisePage>::with_props(props).render());
        assert!(html.contains("Медична карта пацієнта: Соломія"));
        assert!(html.contains("Усмішка без причини"));
        assert!(html.contains("Провести діагностику"));
        // Verdict and ECG strip only exist mid-run and after completion.
        assert!(!html.contains("surprise-result"));
        assert!(!html.contains("surprise-ecg"));
    }
}
