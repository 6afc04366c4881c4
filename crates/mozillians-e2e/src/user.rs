// Ephemeral user fixtures
//
// A fresh account per scenario that needs one. The same record drives the
// form input and is the expected value for the read-back assertions.

use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

const MAIL_DOMAIN: &str = "restmail.net";

/// Where a profile says its owner lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Value of the country `<select>` option, e.g. `us`
    pub country_code: String,
    /// Name the site displays for the country
    pub country_name: String,
    pub region: String,
    pub city: String,
}

impl Location {
    pub fn new(
        country_code: impl Into<String>,
        country_name: impl Into<String>,
        region: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            country_name: country_name.into(),
            region: region.into(),
            city: city.into(),
        }
    }

    pub fn mountain_view() -> Self {
        Self::new("us", "United States", "California", "Mountain View")
    }

    /// The location line as a profile renders it: `"<city>, <region>\n<country>"`.
    pub fn display(&self) -> String {
        format!("{}, {}\n{}", self.city, self.region, self.country_name)
    }
}

/// Account data for one profile-creation scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub biography: String,
    pub website: String,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub location: Location,
}

impl User {
    /// Generates an account nobody has used before.
    ///
    /// Uniqueness comes from the current UNIX time plus a suffix drawn from
    /// `rng`. Two users generated in the same second differ only when their
    /// draws differ, so concurrent callers need differently seeded sources.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let suffix: String = (0..6)
            .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
            .collect();
        let username = format!("mozillianuser_{}_{}", now, suffix);

        Self {
            full_name: format!("Mozillians User {}", now),
            email: format!("{}@{}", username, MAIL_DOMAIN),
            password: format!("pw-{}-{}", suffix, now),
            biography: format!(
                "Hello, I'm new here and trying stuff out. Oh, and by the way: I'm a robot, run in a cronjob, most likely, run at {}",
                now
            ),
            website: format!("http://{}.com/", now),
            skills: vec!["test".to_string()],
            languages: vec!["english".to_string()],
            location: Location::mountain_view(),
            username,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn with_biography(mut self, biography: impl Into<String>) -> Self {
        self.biography = biography.into();
        self
    }

    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}
