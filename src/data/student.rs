use crate::error::{InvalidAgeSnafu, MalformedIdSnafu, MissingRequiredFieldsSnafu, RosterError, RosterResult};
use snafu::ResultExt;
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct StudentId(Uuid);

impl From<Uuid> for StudentId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for StudentId {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s)
            .map(Self)
            .context(MalformedIdSnafu { original: s })
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i64,
    pub course: Option<String>,
}

/// A student that has passed validation, ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidStudent {
    pub name: String,
    pub age: i64,
    pub course: Option<String>,
}

/// Raw form input - every field may be absent.
#[derive(Debug, Default)]
pub struct StudentForm {
    pub name: Option<String>,
    pub age: Option<String>,
    pub course: Option<String>,
}

/// Builds from urlencoded pairs. A repeated field keeps its first value, unknown fields are ignored.
impl FromIterator<(String, String)> for StudentForm {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut form = Self::default();
        for (key, value) in iter {
            let slot = match key.as_str() {
                "name" => &mut form.name,
                "age" => &mut form.age,
                "course" => &mut form.course,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        form
    }
}

impl StudentForm {
    pub fn validate(self) -> RosterResult<ValidStudent> {
        let Self { name, age, course } = self;

        let (Some(name), Some(age)) = (
            name.filter(|name| !name.is_empty()),
            age.filter(|age| !age.is_empty()),
        ) else {
            return MissingRequiredFieldsSnafu.fail();
        };

        let age = age
            .trim()
            .parse()
            .context(InvalidAgeSnafu { original: age })?;

        Ok(ValidStudent { name, age, course })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: Option<&str>, age: Option<&str>, course: Option<&str>) -> StudentForm {
        StudentForm {
            name: name.map(String::from),
            age: age.map(String::from),
            course: course.map(String::from),
        }
    }

    #[test]
    fn valid_form_coerces_age() {
        let valid = form(Some("Alice"), Some("20"), Some("Math"))
            .validate()
            .unwrap();
        assert_eq!(
            valid,
            ValidStudent {
                name: "Alice".into(),
                age: 20,
                course: Some("Math".into()),
            }
        );
    }

    #[test]
    fn course_is_kept_as_given() {
        let absent = form(Some("Alice"), Some("20"), None).validate().unwrap();
        assert_eq!(absent.course, None);

        let empty = form(Some("Alice"), Some("20"), Some("")).validate().unwrap();
        assert_eq!(empty.course.as_deref(), Some(""));
    }

    #[test]
    fn ages_are_not_range_checked() {
        let valid = form(Some("Old"), Some(" -4 "), None).validate().unwrap();
        assert_eq!(valid.age, -4);
    }

    #[test]
    fn missing_or_empty_required_fields_are_rejected() {
        for bad in [
            form(None, Some("20"), None),
            form(Some(""), Some("20"), None),
            form(Some("Alice"), None, None),
            form(Some("Alice"), Some(""), Some("Math")),
        ] {
            assert!(matches!(
                bad.validate(),
                Err(RosterError::MissingRequiredFields)
            ));
        }
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        let err = form(Some("Bob"), Some("abc"), None).validate().unwrap_err();
        assert!(matches!(err, RosterError::InvalidAge { original, .. } if original == "abc"));
    }

    #[test]
    fn repeated_fields_keep_their_first_value() {
        let form: StudentForm = [
            ("name", "A"),
            ("name", "B"),
            ("age", "3"),
            ("extra", "ignored"),
            ("age", "4"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        assert_eq!(form.name.as_deref(), Some("A"));
        assert_eq!(form.age.as_deref(), Some("3"));
        assert_eq!(form.course, None);
    }

    #[test]
    fn ids_round_trip_through_text() {
        let id = StudentId::from(Uuid::new_v4());
        let parsed: StudentId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn malformed_ids_are_a_normal_error() {
        for bad in ["", "not-an-id", "507f1f77bcf86cd799439011"] {
            assert!(matches!(
                bad.parse::<StudentId>(),
                Err(RosterError::MalformedId { .. })
            ));
        }
    }
}
