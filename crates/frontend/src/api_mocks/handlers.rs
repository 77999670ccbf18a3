use super::fixtures;
use super::MockResponse;

/// Base path of the people resource.
pub const PEOPLE_RESOURCE: &str = "/mock-api/people";

/// Route a request path to its handler, if one is registered.
pub fn dispatch(path: &str) -> Option<MockResponse> {
    if path.starts_with(PEOPLE_RESOURCE) {
        return Some(get_people());
    }
    None
}

fn get_people() -> MockResponse {
    match serde_json::to_string(fixtures::people()) {
        Ok(body) => MockResponse { status: 200, body },
        Err(e) => MockResponse {
            status: 500,
            body: format!("fixture serialization failed: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_person::Person;

    #[test]
    fn people_resource_answers_with_parseable_body() {
        let response = dispatch("/mock-api/people").expect("people handler registered");
        assert_eq!(response.status, 200);

        let people: Vec<Person> =
            serde_json::from_str(&response.body).expect("body is a person array");
        assert_eq!(people.len(), fixtures::people().len());
        assert!(!people.is_empty());
    }

    #[test]
    fn people_resource_matches_with_trailing_query() {
        // The original handler registered the route with a trailing wildcard.
        assert!(dispatch("/mock-api/people?page=2").is_some());
    }

    #[test]
    fn unknown_paths_have_no_handler() {
        assert!(dispatch("/mock-api/planets").is_none());
        assert!(dispatch("/api/people").is_none());
    }
}
