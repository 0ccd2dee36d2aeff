use crate::maud_conveniences::badge;
use email_address::EmailAddress;
use maud::{Markup, Render, html};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use url::Url;
use uuid::Uuid;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum YearOfStudy {
    First,
    Second,
    Third,
    Fourth,
}

impl YearOfStudy {
    pub const ALL: [Self; 4] = [Self::First, Self::Second, Self::Third, Self::Fourth];

    /// The value submitted by the year radio buttons.
    pub const fn value(self) -> &'static str {
        match self {
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
            Self::Fourth => "4",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|year| year.value() == value)
    }

    pub const fn ordinal(self) -> &'static str {
        match self {
            Self::First => "First",
            Self::Second => "Second",
            Self::Third => "Third",
            Self::Fourth => "Fourth",
        }
    }
}

impl Display for YearOfStudy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Year {}", self.value())
    }
}

/// The form exactly as submitted. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub programme: String,
    pub year: Option<String>,
    pub interests: String,
    pub photo: String,
}

/// A validated student that has not been added to the roster yet.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub programme: String,
    pub year: YearOfStudy,
    pub interests: Vec<String>,
    pub photo_url: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub programme: String,
    pub year: YearOfStudy,
    pub interests: Vec<String>,
    pub photo_url: Url,
}

impl StudentRecord {
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn interests_or(&self, fallback: &'static str) -> String {
        if self.interests.is_empty() {
            fallback.to_string()
        } else {
            self.interests.join(", ")
        }
    }
}

impl Render for StudentRecord {
    fn render_to(&self, buffer: &mut String) {
        self.name().render_to(buffer);
    }
}

pub fn remove_button(id: Uuid) -> Markup {
    html! {
        button type="button" class="bg-red-600 hover:bg-red-800 font-bold py-1 px-3 rounded" hx-post="/internal/removal/request" hx-vals={"{\"id\": \"" (id) "\"}" } hx-target="#dialog" hx-swap="outerHTML" {
            "Remove"
        }
    }
}

pub struct StudentCard<'a>(pub &'a StudentRecord);
impl Render for StudentCard<'_> {
    fn render(&self) -> Markup {
        let student = self.0;

        html! {
            div class="card-person flex flex-row space-x-4 rounded-lg shadow-md p-4 bg-gray-700" data-id=(student.id) {
                img class="w-32 h-32 rounded object-cover" src=(student.photo_url.as_str()) alt={"Photo of " (student)};
                div class="flex flex-col space-y-2" {
                    h3 class="text-xl font-semibold" {(student)}
                    p {
                        (badge(&student.programme))
                        " "
                        (badge(student.year.to_string()))
                    }
                    p class="text-gray-300" {(student.interests_or("No interests provided"))}
                    div {(remove_button(student.id))}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn record(interests: &[&str]) -> StudentRecord {
        StudentRecord {
            id: Uuid::now_v7(),
            first_name: "Ana".into(),
            last_name: "Lee".into(),
            email: EmailAddress::from_str("ana@x.com").unwrap(),
            programme: "CS".into(),
            year: YearOfStudy::Second,
            interests: interests.iter().map(ToString::to_string).collect(),
            photo_url: Url::parse("https://placehold.co/128").unwrap(),
        }
    }

    #[test]
    fn years_round_trip_through_their_radio_values() {
        for year in YearOfStudy::ALL {
            assert_eq!(YearOfStudy::from_value(year.value()), Some(year));
        }
        assert_eq!(YearOfStudy::from_value("5"), None);
        assert_eq!(YearOfStudy::Second.to_string(), "Year 2");
    }

    #[test]
    fn card_shows_name_badges_and_interest_fallback() {
        let student = record(&[]);
        let card = StudentCard(&student).render().into_string();

        assert_eq!(student.name(), "Ana Lee");
        assert!(card.contains("<h3 class=\"text-xl font-semibold\">Ana Lee</h3>"));
        assert!(card.contains("alt=\"Photo of Ana Lee\""));
        assert!(card.contains("CS"));
        assert!(card.contains("Year 2"));
        assert!(card.contains("No interests provided"));
        assert!(card.contains(&student.id.to_string()));
    }

    #[test]
    fn card_lists_interests() {
        let student = record(&["chess", "tea"]);
        let card = StudentCard(&student).render().into_string();

        assert!(card.contains("chess, tea"));
        assert!(!card.contains("No interests provided"));
    }

    #[test]
    fn names_are_escaped_in_markup() {
        let mut student = record(&[]);
        student.first_name = "<b>Ana</b>".into();
        let card = StudentCard(&student).render().into_string();

        assert!(!card.contains("<b>Ana</b>"));
        assert!(card.contains("&lt;b&gt;Ana&lt;/b&gt;"));
    }
}
