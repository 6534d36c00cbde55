use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::{
    helpers::prelude::*,
    localization::browser::SharedTranslator,
    notification::{self, ToastKind},
};

const REQUIRED_FIELDS: &str = "input[required], textarea[required]";
const ERROR_CLASS: &str = "error";

pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    Submitted,
    Incomplete,
}

impl FormOutcome {
    pub fn of(filled: impl IntoIterator<Item = bool>) -> Self {
        if filled.into_iter().all(|filled| filled) {
            Self::Submitted
        } else {
            Self::Incomplete
        }
    }

    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Submitted => "form.success",
            Self::Incomplete => "form.required",
        }
    }

    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Submitted => "Form submitted successfully!",
            Self::Incomplete => "Please fill in all required fields.",
        }
    }

    pub const fn kind(self) -> ToastKind {
        match self {
            Self::Submitted => ToastKind::Success,
            Self::Incomplete => ToastKind::Error,
        }
    }
}

fn field_value(field: &web_sys::Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

/// Validates required fields on submit and reports the result in a toast.
pub fn install(translator: &SharedTranslator) {
    for form in Element::query_all("form") {
        let translator = translator.clone();
        let this = form.clone();
        Listener::on(&form, "submit", move |event| {
            event.prevent_default();

            let filled = Element::query_all_in(&this, REQUIRED_FIELDS)
                .iter()
                .map(|field| {
                    let filled = is_filled(&field_value(field));
                    Element::toggle_class(field, ERROR_CLASS, !filled);
                    filled
                })
                .collect::<Vec<_>>();
            let outcome = FormOutcome::of(filled);

            let message = translator
                .borrow()
                .lookup(outcome.translation_key())
                .unwrap_or(outcome.default_message())
                .to_owned();
            notification::show(message, outcome.kind());

            if outcome == FormOutcome::Submitted {
                if let Some(form) = this.dyn_ref::<HtmlFormElement>() {
                    form.reset();
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn whitespace_only_is_blank() {
        assert!(!is_filled(""));
        assert!(!is_filled("  \t\n"));
        assert!(is_filled(" Turon "));
    }

    #[test]
    fn any_blank_field_makes_form_incomplete() {
        assert_eq!(FormOutcome::of([true, true]), FormOutcome::Submitted);
        assert_eq!(FormOutcome::of([true, false, true]), FormOutcome::Incomplete);
    }

    #[test]
    fn form_without_required_fields_submits() {
        assert_eq!(FormOutcome::of([]), FormOutcome::Submitted);
    }

    #[test]
    fn outcomes_map_to_toasts() {
        assert_eq!(FormOutcome::Submitted.kind(), ToastKind::Success);
        assert_eq!(FormOutcome::Incomplete.translation_key(), "form.required");
    }
}
