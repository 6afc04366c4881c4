use super::Profile;
use crate::error::{Error, Result};
use crate::selectors::search;
use crate::session::{Session, nth};
use rand::Rng;
use std::fmt;

/// The location filter a result list was produced by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchScope {
    City { city: String, country: String },
    Region { region: String, country: String },
    Country { country: String },
}

impl SearchScope {
    pub fn city(city: impl Into<String>, country: impl Into<String>) -> Self {
        SearchScope::City {
            city: city.into(),
            country: country.into(),
        }
    }

    pub fn region(region: impl Into<String>, country: impl Into<String>) -> Self {
        SearchScope::Region {
            region: region.into(),
            country: country.into(),
        }
    }

    pub fn country(country: impl Into<String>) -> Self {
        SearchScope::Country {
            country: country.into(),
        }
    }

    /// Heading the results page shows for this filter.
    pub fn title(&self) -> String {
        format!("Mozillians in {}", self)
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchScope::City { city, country } => write!(f, "{}, {}", city, country),
            SearchScope::Region { region, country } => write!(f, "{}, {}", region, country),
            SearchScope::Country { country } => f.write_str(country),
        }
    }
}

/// Profiles matching a location filter.
#[derive(Clone)]
pub struct SearchResults {
    session: Session,
    scope: SearchScope,
}

impl SearchResults {
    pub(crate) async fn arrive(session: Session, scope: SearchScope) -> Result<Self> {
        session
            .expect_view("Search Results", search::SIGNATURE)
            .await?;
        Ok(Self { session, scope })
    }

    pub fn scope(&self) -> &SearchScope {
        &self.scope
    }

    pub fn expected_title(&self) -> String {
        self.scope.title()
    }

    /// True when the browser shows a results page.
    ///
    /// Which filter produced it is left to a comparison of `title()` with
    /// `expected_title()`.
    pub async fn is_the_current_page(&self) -> Result<bool> {
        self.session.is_present(search::SIGNATURE).await
    }

    pub async fn title(&self) -> Result<String> {
        self.session.text(search::TITLE).await
    }

    pub async fn result_count(&self) -> Result<usize> {
        self.session.count(search::RESULT_LINK).await
    }

    /// Opens one of the listed profiles, chosen by `rng`.
    pub async fn get_random_profile<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Profile> {
        let count = self.result_count().await?;
        if count == 0 {
            return Err(Error::EmptySearchResults(self.expected_title()));
        }
        let index = rng.gen_range(0..count);
        tracing::debug!("Opening result {} of {}", index + 1, count);
        self.session.click(&nth(search::RESULT_LINK, index)).await?;
        Profile::arrive(self.session.clone()).await
    }
}
