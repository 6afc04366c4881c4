use super::{Header, SearchResults, SearchScope};
use crate::error::Result;
use crate::selectors::profile;
use crate::session::Session;

/// A user's profile page.
///
/// Accessors read what the page displays right now.
#[derive(Clone)]
pub struct Profile {
    session: Session,
}

impl Profile {
    pub(crate) async fn arrive(session: Session) -> Result<Self> {
        session.expect_view("Profile", profile::SIGNATURE).await?;
        Ok(Self { session })
    }

    pub fn header(&self) -> Header {
        Header::new(self.session.clone())
    }

    pub async fn is_the_current_page(&self) -> Result<bool> {
        self.session.is_present(profile::SIGNATURE).await
    }

    pub async fn was_account_created_successfully(&self) -> Result<bool> {
        self.session.is_present(profile::CREATED_NOTICE).await
    }

    pub async fn is_pending_approval_visible(&self) -> Result<bool> {
        self.session.is_present(profile::PENDING_APPROVAL).await
    }

    pub async fn name(&self) -> Result<String> {
        self.session.text(profile::FULL_NAME).await
    }

    pub async fn email(&self) -> Result<String> {
        self.session.text(profile::EMAIL).await
    }

    pub async fn biography(&self) -> Result<String> {
        self.session.text(profile::BIO).await
    }

    pub async fn website(&self) -> Result<String> {
        self.session.text(profile::WEBSITE).await
    }

    pub async fn skills(&self) -> Result<String> {
        self.session.text(profile::SKILLS).await
    }

    pub async fn languages(&self) -> Result<String> {
        self.session.text(profile::LANGUAGES).await
    }

    /// Location block, formatted `"<city>, <region>\n<country>"`.
    pub async fn location(&self) -> Result<String> {
        self.session.text(profile::LOCATION).await
    }

    pub async fn city(&self) -> Result<String> {
        self.session.text(profile::CITY).await
    }

    pub async fn region(&self) -> Result<String> {
        self.session.text(profile::REGION).await
    }

    pub async fn country(&self) -> Result<String> {
        self.session.text(profile::COUNTRY).await
    }

    /// Follows the city link to everyone in `city, country`.
    pub async fn click_city_name(&self, city: &str, country: &str) -> Result<SearchResults> {
        self.follow(profile::CITY, SearchScope::city(city, country)).await
    }

    /// Follows the region link to everyone in `region, country`.
    pub async fn click_region_name(&self, region: &str, country: &str) -> Result<SearchResults> {
        self.follow(profile::REGION, SearchScope::region(region, country)).await
    }

    /// Follows the country link to everyone in `country`.
    pub async fn click_country_name(&self, country: &str) -> Result<SearchResults> {
        self.follow(profile::COUNTRY, SearchScope::country(country)).await
    }

    async fn follow(&self, link: &str, scope: SearchScope) -> Result<SearchResults> {
        self.session.click(link).await?;
        SearchResults::arrive(self.session.clone(), scope).await
    }
}
