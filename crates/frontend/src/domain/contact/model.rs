use contracts::domain::contact::ContactRequest;

use crate::shared::form::{is_blank, FormDraft};

impl FormDraft for ContactRequest {
    type Body = ContactRequest;

    fn missing_required(&self) -> Vec<&'static str> {
        [
            ("Full Name", &self.full_name),
            ("Email Address", &self.email_address),
            ("Subject", &self.subject),
            ("Message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(label, _)| label)
        .collect()
    }

    fn to_body(&self) -> ContactRequest {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{FormState, SubmitBlocked};

    fn filled() -> ContactRequest {
        ContactRequest {
            full_name: "Ada Obi".into(),
            email_address: "ada@example.com".into(),
            phone_number: "+234 800 000 0000".into(),
            consultation_type: "Landowner Consultation".into(),
            subject: "Joint Venture Consultation Request".into(),
            message: "I own two plots in Ibeju-Lekki.".into(),
        }
    }

    #[test]
    fn optional_fields_may_be_blank() {
        let draft = ContactRequest {
            phone_number: String::new(),
            consultation_type: String::new(),
            ..filled()
        };
        assert!(draft.missing_required().is_empty());
    }

    #[test]
    fn lists_every_missing_required_field() {
        let draft = ContactRequest::default();
        assert_eq!(
            draft.missing_required(),
            vec!["Full Name", "Email Address", "Subject", "Message"]
        );
    }

    #[test]
    fn empty_subject_produces_no_body() {
        let mut form = FormState::<ContactRequest>::new();
        form.draft = ContactRequest {
            subject: String::new(),
            ..filled()
        };
        assert!(matches!(form.begin_submit(), Err(SubmitBlocked::Invalid(_))));
        assert!(!form.submitting);
    }

    #[test]
    fn success_resets_to_empty_fields() {
        let mut form = FormState::<ContactRequest>::new();
        form.draft = filled();
        let body = form.begin_submit().unwrap();
        assert_eq!(body, filled());
        form.finish_ok("Thanks, we'll be in touch");
        assert_eq!(form.draft, ContactRequest::default());
    }
}
