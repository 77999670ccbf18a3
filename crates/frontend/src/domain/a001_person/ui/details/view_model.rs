use contracts::domain::a001_person::{Movie, Person};

/// One editable movie row of the create form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovieField {
    pub title: String,
    pub released: String,
}

/// Editable state of the create-person form. The form is client-side only;
/// a submitted person is never sent anywhere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonForm {
    pub name: String,
    pub show: String,
    pub actor: String,
    pub dob: String,
    pub movies: Vec<MovieField>,
}

impl PersonForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty()
            || self.show.trim().is_empty()
            || self.actor.trim().is_empty()
            || self.dob.trim().is_empty()
            || self.movies.is_empty()
        {
            return Err("All fields are required.".to_string());
        }
        if self.movies.iter().any(|m| m.title.trim().is_empty()) {
            return Err("Every movie needs a title.".to_string());
        }
        Ok(())
    }

    /// Build the person this form describes. Call after `validate`.
    pub fn to_person(&self) -> Person {
        Person::new_for_create(
            self.name.clone(),
            self.show.clone(),
            self.actor.clone(),
            self.dob.clone(),
            self.movies
                .iter()
                .map(|m| Movie {
                    title: m.title.clone(),
                    released: if m.released.trim().is_empty() {
                        None
                    } else {
                        Some(m.released.clone())
                    },
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> PersonForm {
        PersonForm {
            name: "Addie Duncan".to_string(),
            show: "Show 1".to_string(),
            actor: "Actor 1".to_string(),
            dob: "1990-01-01".to_string(),
            movies: vec![MovieField { title: "Movie A".to_string(), released: String::new() }],
        }
    }

    #[test]
    fn complete_form_validates() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn blank_fields_are_rejected() {
        let strips: [fn(&mut PersonForm); 5] = [
            |f| f.name.clear(),
            |f| f.show = "   ".to_string(),
            |f| f.actor.clear(),
            |f| f.dob.clear(),
            |f| f.movies.clear(),
        ];
        for strip in strips {
            let mut form = filled_form();
            strip(&mut form);
            assert_eq!(form.validate(), Err("All fields are required.".to_string()));
        }
    }

    #[test]
    fn untitled_movie_rows_are_rejected() {
        let mut form = filled_form();
        form.movies.push(MovieField::default());
        assert_eq!(form.validate(), Err("Every movie needs a title.".to_string()));
    }

    #[test]
    fn to_person_copies_fields_and_mints_an_id() {
        let mut form = filled_form();
        form.movies.push(MovieField {
            title: "Movie B".to_string(),
            released: "2001-05-12".to_string(),
        });

        let person = form.to_person();
        assert!(!person.id.is_empty());
        assert_eq!(person.name, "Addie Duncan");
        assert_eq!(person.movies.len(), 2);
        // A blank release date becomes absent rather than an empty string.
        assert_eq!(person.movies[0].released, None);
        assert_eq!(person.movies[1].released, Some("2001-05-12".to_string()));
    }
}
