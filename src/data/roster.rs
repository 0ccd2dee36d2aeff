use crate::data::student::{NewStudent, StudentRecord};
use snafu::{Snafu, ensure};
use url::Url;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("A student with the email {email} is already registered"))]
    DuplicateEmail { email: String },
}

/// Accepted students in the order they were added.
#[derive(Debug, Clone)]
pub struct Roster {
    records: Vec<StudentRecord>,
    placeholder_photo: Url,
}

impl Roster {
    pub const fn new(placeholder_photo: Url) -> Self {
        Self {
            records: Vec::new(),
            placeholder_photo,
        }
    }

    /// Emails are compared exactly, so `Ana@x.com` and `ana@x.com` are different students.
    pub fn add(&mut self, candidate: NewStudent) -> Result<StudentRecord, RosterError> {
        let NewStudent {
            first_name,
            last_name,
            email,
            programme,
            year,
            interests,
            photo_url,
        } = candidate;

        ensure!(
            !self
                .records
                .iter()
                .any(|record| record.email.as_str() == email.as_str()),
            DuplicateEmailSnafu {
                email: email.as_str()
            }
        );

        let record = StudentRecord {
            id: Uuid::now_v7(),
            first_name,
            last_name,
            email,
            programme,
            year,
            interests,
            photo_url: photo_url.unwrap_or_else(|| self.placeholder_photo.clone()),
        };
        self.records.push(record.clone());

        Ok(record)
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            return false;
        };
        self.records.remove(index);
        true
    }

    pub fn get(&self, id: Uuid) -> Option<&StudentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn list(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
