use contracts::domain::a001_person::{Movie, Person};
use once_cell::sync::Lazy;

const FIXTURE_UPDATED_AT: &str = "2025-01-15T09:30:00Z";

fn person(id: &str, name: &str, show: &str, actor: &str, dob: &str, movies: &[(&str, Option<&str>)]) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        show: show.to_string(),
        actor: actor.to_string(),
        dob: dob.to_string(),
        movies: movies
            .iter()
            .map(|&(title, released)| Movie {
                title: title.to_string(),
                released: released.map(str::to_string),
            })
            .collect(),
        updated_at: FIXTURE_UPDATED_AT.to_string(),
    }
}

static PEOPLE: Lazy<Vec<Person>> = Lazy::new(|| {
    vec![
        person(
            "p001", "Walter White", "Breaking Bad", "Bryan Cranston", "1956-03-07",
            &[("Godzilla", Some("2014-05-16")), ("The Infiltrator", Some("2016-07-13"))],
        ),
        person(
            "p002", "Jesse Pinkman", "Breaking Bad", "Aaron Paul", "1979-08-27",
            &[("El Camino", Some("2019-10-11")), ("Need for Speed", Some("2014-03-14"))],
        ),
        person(
            "p003", "Saul Goodman", "Better Call Saul", "Bob Odenkirk", "1962-10-22",
            &[("Nobody", Some("2021-03-26"))],
        ),
        person(
            "p004", "Tony Soprano", "The Sopranos", "James Gandolfini", "1961-09-18",
            &[("The Drop", Some("2014-09-12")), ("Enough Said", Some("2013-09-18"))],
        ),
        person(
            "p005", "Daenerys Targaryen", "Game of Thrones", "Emilia Clarke", "1986-10-23",
            &[("Solo: A Star Wars Story", Some("2018-05-25")), ("Me Before You", Some("2016-06-03"))],
        ),
        person(
            "p006", "Jon Snow", "Game of Thrones", "Kit Harington", "1986-12-26",
            &[("Pompeii", Some("2014-02-21")), ("Eternals", Some("2021-11-05"))],
        ),
        person(
            "p007", "Arya Stark", "Game of Thrones", "Maisie Williams", "1997-04-15",
            &[("The New Mutants", Some("2020-08-28"))],
        ),
        person(
            "p008", "Eleven", "Stranger Things", "Millie Bobby Brown", "2004-02-19",
            &[("Enola Holmes", Some("2020-09-23")), ("Godzilla vs. Kong", Some("2021-03-31"))],
        ),
        person(
            "p009", "Jim Hopper", "Stranger Things", "David Harbour", "1975-04-10",
            &[("Hellboy", Some("2019-04-12")), ("Black Widow", Some("2021-07-09"))],
        ),
        person(
            "p010", "Michael Scott", "The Office", "Steve Carell", "1962-08-16",
            &[("The 40-Year-Old Virgin", Some("2005-08-19")), ("Foxcatcher", Some("2014-11-14"))],
        ),
        person(
            "p011", "Leslie Knope", "Parks and Recreation", "Amy Poehler", "1971-09-16",
            &[("Inside Out", Some("2015-06-19")), ("Baby Mama", Some("2008-04-25"))],
        ),
        person(
            "p012", "Olivia Benson", "Law & Order: SVU", "Mariska Hargitay", "1964-01-23",
            &[("Leaving Las Vegas", Some("1995-10-27"))],
        ),
        person(
            "p013", "Fox Mulder", "The X-Files", "David Duchovny", "1960-08-07",
            &[("Zoolander", Some("2001-09-28")), ("Evolution", Some("2001-06-08"))],
        ),
        person(
            "p014", "Dana Scully", "The X-Files", "Gillian Anderson", "1968-08-09",
            &[("The Last King of Scotland", Some("2006-09-27"))],
        ),
        person(
            "p015", "Rust Cohle", "True Detective", "Matthew McConaughey", "1969-11-04",
            &[("Interstellar", Some("2014-11-07")), ("Dallas Buyers Club", Some("2013-11-01"))],
        ),
        person(
            "p016", "Peggy Olson", "Mad Men", "Elisabeth Moss", "1982-07-24",
            &[("The Invisible Man", Some("2020-02-28")), ("Us", Some("2019-03-22"))],
        ),
        person(
            "p017", "Don Draper", "Mad Men", "Jon Hamm", "1971-03-10",
            &[("Baby Driver", Some("2017-06-28")), ("Top Gun: Maverick", Some("2022-05-27"))],
        ),
        person(
            "p018", "Omar Little", "The Wire", "Michael K. Williams", "1966-11-22",
            &[("12 Years a Slave", Some("2013-10-18"))],
        ),
        person(
            "p019", "Villanelle", "Killing Eve", "Jodie Comer", "1993-03-11",
            &[("Free Guy", Some("2021-08-13")), ("The Last Duel", Some("2021-10-15"))],
        ),
        person(
            "p020", "Wednesday Addams", "Wednesday", "Jenna Ortega", "2002-09-27",
            &[("Scream", Some("2022-01-14")), ("X", None)],
        ),
    ]
});

/// The static people dataset served by the mock endpoint.
pub fn people() -> &'static [Person] {
    &PEOPLE
}
