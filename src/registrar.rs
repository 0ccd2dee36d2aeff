use crate::{
    data::{
        roster::{Roster, RosterError},
        student::{RegistrationForm, StudentRecord},
    },
    validation::{Field, FieldError, FieldErrors, validate_registration},
};
use std::fmt::{Display, Formatter};
use url::Url;
use uuid::Uuid;

/// What the live region announces after each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    FixErrors,
    StudentAdded,
    StudentRemoved,
    NotOnRoster,
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::FixErrors => "Please fix errors before submitting.",
            Self::StudentAdded => "Student added successfully!",
            Self::StudentRemoved => "Student removed successfully!",
            Self::NotOnRoster => "That student is no longer on the roster.",
        })
    }
}

#[derive(Debug)]
pub enum Submission {
    Accepted(StudentRecord),
    /// Hands the form back so it can be shown again with its errors.
    Rejected {
        form: RegistrationForm,
        errors: FieldErrors,
    },
}

/// Owns the roster and the state around it. Every submission and removal goes through here.
#[derive(Debug)]
pub struct Registrar {
    roster: Roster,
    pending_removal: Option<Uuid>,
    status: Option<Status>,
}

impl Registrar {
    pub const fn new(placeholder_photo: Url) -> Self {
        Self {
            roster: Roster::new(placeholder_photo),
            pending_removal: None,
            status: None,
        }
    }

    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn pending_removal(&self) -> Option<&StudentRecord> {
        self.pending_removal.and_then(|id| self.roster.get(id))
    }

    /// Either exactly one record is added, or nothing changes.
    pub fn submit(&mut self, form: RegistrationForm) -> Submission {
        let outcome = match validate_registration(&form) {
            Ok(candidate) => self.roster.add(candidate).map_err(|e| {
                let RosterError::DuplicateEmail { email } = e;
                let mut errors = FieldErrors::new();
                errors.insert(Field::Email, FieldError::DuplicateEmail { email });
                errors
            }),
            Err(errors) => Err(errors),
        };

        match outcome {
            Ok(record) => {
                info!(id = %record.id, name = %record.name(), "Student registered");
                self.status = Some(Status::StudentAdded);
                Submission::Accepted(record)
            }
            Err(errors) => {
                debug!(?errors, "Rejected registration");
                self.status = Some(Status::FixErrors);
                Submission::Rejected { form, errors }
            }
        }
    }

    /// Remembers `id` until the removal is confirmed or abandoned.
    pub fn request_removal(&mut self, id: Uuid) -> Option<&StudentRecord> {
        if self.roster.get(id).is_some() {
            self.pending_removal = Some(id);
        } else {
            self.pending_removal = None;
            self.status = Some(Status::NotOnRoster);
        }

        self.pending_removal()
    }

    pub fn confirm_removal(&mut self) -> bool {
        let Some(id) = self.pending_removal.take() else {
            return false;
        };

        let removed = self.roster.remove(id);
        if removed {
            info!(%id, "Student removed");
            self.status = Some(Status::StudentRemoved);
        } else {
            self.status = Some(Status::NotOnRoster);
        }
        removed
    }

    /// Also used when the dialog is dismissed.
    pub fn cancel_removal(&mut self) {
        if let Some(id) = self.pending_removal.take() {
            debug!(%id, "Removal cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registrar() -> Registrar {
        Registrar::new(Url::parse("https://placehold.co/128").unwrap())
    }

    fn form(first_name: &str, email: &str) -> RegistrationForm {
        RegistrationForm {
            first_name: first_name.into(),
            last_name: "Lee".into(),
            email: email.into(),
            programme: "CS".into(),
            year: Some("2".into()),
            ..RegistrationForm::default()
        }
    }

    fn accept(registrar: &mut Registrar, first_name: &str, email: &str) -> StudentRecord {
        match registrar.submit(form(first_name, email)) {
            Submission::Accepted(record) => record,
            Submission::Rejected { errors, .. } => panic!("unexpected rejection: {errors:?}"),
        }
    }

    #[test]
    fn accepted_submission_adds_one_record() {
        let mut registrar = registrar();
        assert_eq!(registrar.status(), None);

        let ana = accept(&mut registrar, "Ana", "ana@x.com");

        assert_eq!(ana.name(), "Ana Lee");
        assert_eq!(ana.photo_url.as_str(), "https://placehold.co/128");
        assert_eq!(registrar.roster().list(), [ana]);
        assert_eq!(registrar.status(), Some(Status::StudentAdded));
        assert_eq!(
            registrar.status().unwrap().to_string(),
            "Student added successfully!"
        );
    }

    #[test]
    fn unusual_but_well_formed_email_is_registered() {
        let mut registrar = registrar();
        let odd = accept(&mut registrar, "Odd", "a..b@x.com.");

        assert_eq!(odd.email.as_str(), "a..b@x.com.");
        assert_eq!(registrar.roster().len(), 1);
    }

    #[test]
    fn invalid_submission_changes_nothing() {
        let mut registrar = registrar();
        let mut bad = form("", "nope");
        bad.year = None;

        let Submission::Rejected { form, errors } = registrar.submit(bad) else {
            panic!("should have been rejected");
        };
        assert_eq!(form.email, "nope");
        assert_eq!(errors.len(), 3);
        assert!(registrar.roster().is_empty());
        assert_eq!(registrar.status(), Some(Status::FixErrors));
    }

    #[test]
    fn duplicate_email_is_a_field_error() {
        let mut registrar = registrar();
        accept(&mut registrar, "Ana", "ana@x.com");

        let Submission::Rejected { errors, .. } = registrar.submit(form("Other", " ana@x.com ")) else {
            panic!("duplicate should have been rejected");
        };
        assert_eq!(
            errors.get(Field::Email),
            Some(&FieldError::DuplicateEmail {
                email: "ana@x.com".into()
            })
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(registrar.roster().len(), 1);
    }

    #[test]
    fn duplicate_is_only_checked_once_fields_pass() {
        let mut registrar = registrar();
        accept(&mut registrar, "Ana", "ana@x.com");

        let Submission::Rejected { errors, .. } = registrar.submit(form("", "ana@x.com")) else {
            panic!("should have been rejected");
        };
        assert!(errors.get(Field::Email).is_none());
        assert!(errors.get(Field::FirstName).is_some());
    }

    #[test]
    fn confirmed_removal_removes_and_clears_slot() {
        let mut registrar = registrar();
        let ana = accept(&mut registrar, "Ana", "ana@x.com");
        accept(&mut registrar, "Ben", "ben@x.com");

        assert_eq!(registrar.request_removal(ana.id).map(|r| r.id), Some(ana.id));
        assert!(registrar.confirm_removal());

        assert!(registrar.pending_removal().is_none());
        assert_eq!(registrar.roster().len(), 1);
        assert_eq!(registrar.status(), Some(Status::StudentRemoved));

        //nothing pending, nothing happens
        assert!(!registrar.confirm_removal());
        assert_eq!(registrar.roster().len(), 1);
    }

    #[test]
    fn cancelled_removal_keeps_the_student() {
        let mut registrar = registrar();
        let ana = accept(&mut registrar, "Ana", "ana@x.com");

        registrar.request_removal(ana.id);
        registrar.cancel_removal();

        assert!(registrar.pending_removal().is_none());
        assert!(!registrar.confirm_removal());
        assert_eq!(registrar.roster().list(), [ana]);
    }

    #[test]
    fn requesting_an_unknown_student_leaves_nothing_pending() {
        let mut registrar = registrar();
        let ana = accept(&mut registrar, "Ana", "ana@x.com");
        registrar.request_removal(ana.id);

        assert!(registrar.request_removal(Uuid::now_v7()).is_none());
        assert!(registrar.pending_removal().is_none());
        assert_eq!(registrar.status(), Some(Status::NotOnRoster));
        assert!(!registrar.confirm_removal());
        assert_eq!(registrar.roster().len(), 1);
    }
}
