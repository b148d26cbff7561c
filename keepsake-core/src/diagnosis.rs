//! The surprise view's diagnosis sequence and the printable prescription.

use crate::content::SurpriseCopy;
use std::fmt::Write as _;

/// How long the fake diagnostic runs before the verdict appears.
pub const DIAGNOSIS_DURATION_MS: u32 = 2_600;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Diagnosis {
    #[default]
    Idle,
    Running,
    Revealed,
}

impl Diagnosis {
    /// Begin diagnosing. Returns `false` (no-op) while already running, so a
    /// repeated trigger never schedules a second completion.
    pub fn start(&mut self) -> bool {
        if matches!(self, Self::Running) {
            return false;
        }
        *self = Self::Running;
        true
    }

    /// The timer fired; show the verdict.
    pub fn complete(&mut self) {
        if matches!(self, Self::Running) {
            *self = Self::Revealed;
        }
    }

    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// Localized labels for the printable document, resolved by the UI layer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PrescriptionLabels {
    pub title: String,
    pub patient: String,
    pub diagnosis: String,
    pub symptoms: String,
    pub treatment: String,
    pub prognosis: String,
    pub conclusion: String,
    pub signature: String,
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Body markup for the standalone printable copy of the medical card.
///
/// The caller opens a popup, injects this into its body and asks the window
/// to print; styling rides along so the document stands on its own.
#[must_use]
pub fn prescription_html(copy: &SurpriseCopy, labels: &PrescriptionLabels) -> String {
    let mut doc = String::with_capacity(1_024);
    doc.push_str(
        "<style>\
         body{font-family:'Segoe UI',system-ui,-apple-system,sans-serif;\
         background:#fff0f6;margin:0;padding:32px;color:#5a2d3a;}\
         h1{text-align:center;}\
         .card{background:white;border-radius:24px;padding:24px;\
         box-shadow:0 20px 40px rgba(0,0,0,.08);}\
         table{width:100%;border-collapse:collapse;margin-top:16px;}\
         th,td{padding:12px 16px;border-bottom:1px solid #f4cfe1;text-align:left;}\
         th{width:35%;color:#b13c6b;}\
         footer{margin-top:24px;text-align:center;font-weight:600;}\
         </style>",
    );
    let _ = write!(
        doc,
        "<div class=\"card\">\
         <h1>{title}</h1>\
         <p><strong>{patient}:</strong> {name}</p>\
         <p><strong>{diagnosis}:</strong> {beloved}</p>\
         <table>\
         <tr><th>{symptoms}</th><td>{symptoms_text}</td></tr>\
         <tr><th>{treatment}</th><td>{treatment_text}</td></tr>\
         <tr><th>{prognosis}</th><td>{prognosis_text}</td></tr>\
         <tr><th>{conclusion}</th><td>{conclusion_text}</td></tr>\
         </table>\
         <footer>{signature}</footer>\
         </div>",
        title = escape(&labels.title),
        patient = escape(&labels.patient),
        name = escape(&copy.header_name),
        diagnosis = escape(&labels.diagnosis),
        beloved = escape(&copy.header_beloved),
        symptoms = escape(&labels.symptoms),
        symptoms_text = escape(&copy.symptoms),
        treatment = escape(&labels.treatment),
        treatment_text = escape(&copy.treatment),
        prognosis = escape(&labels.prognosis),
        prognosis_text = escape(&copy.prognosis),
        conclusion = escape(&labels.conclusion),
        conclusion_text = escape(&copy.diagnosis),
        signature = escape(&labels.signature),
    );
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_copy() -> SurpriseCopy {
        SurpriseCopy {
            header_name: "Соломія".to_string(),
            header_beloved: "Андрія".to_string(),
            symptoms: "Усмішка без причини".to_string(),
            treatment: "Обійми двічі на день".to_string(),
            prognosis: "Стабільно закохана".to_string(),
            diagnosis: "Невиліковно <3".to_string(),
        }
    }

    fn sample_labels() -> PrescriptionLabels {
        PrescriptionLabels {
            title: "Медична картка любові".to_string(),
            patient: "Пацієнт".to_string(),
            diagnosis: "Діагноз".to_string(),
            symptoms: "Симптоми".to_string(),
            treatment: "Лікування".to_string(),
            prognosis: "Прогноз".to_string(),
            conclusion: "Висновок".to_string(),
            signature: "Підпис лікаря: ❤️".to_string(),
        }
    }

    #[test]
    fn retrigger_while_running_is_a_no_op() {
        let mut diag = Diagnosis::default();
        assert!(diag.start());
        assert!(!diag.start());
        diag.complete();
        assert!(diag.is_revealed());
        // A fresh run is allowed after the verdict.
        assert!(diag.start());
        assert!(diag.is_running());
    }

    #[test]
    fn complete_only_applies_to_a_running_diagnosis() {
        let mut diag = Diagnosis::default();
        diag.complete();
        assert_eq!(diag, Diagnosis::Idle);
    }

    #[test]
    fn document_carries_copy_and_labels() {
        let html = prescription_html(&sample_copy(), &sample_labels());
        assert!(html.contains("Медична картка любові"));
        assert!(html.contains("Соломія"));
        assert!(html.contains("Обійми двічі на день"));
        assert!(html.contains("Підпис лікаря"));
    }

    #[test]
    fn document_escapes_markup_in_copy() {
        let html = prescription_html(&sample_copy(), &sample_labels());
        assert!(html.contains("Невиліковно &lt;3"));
        assert!(!html.contains("Невиліковно <3"));
    }
}
