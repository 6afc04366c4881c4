//! mozillians-e2e: browser-driven end-to-end checks for the Mozillians
//! profile features.
//!
//! Each view of the site is wrapped in a page object. Actions return the page
//! object of the view they lead to, and only once that view has loaded, so a
//! scenario reads as a walk through the site:
//!
//! ```ignore
//! use mozillians_e2e::{Credentials, Home, PlaywrightLauncher, Session, SuiteConfig};
//! use mozillians_e2e::driver::DriverFactory;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SuiteConfig::new(
//!         "https://mozillians-dev.allizom.org/".parse()?,
//!         Credentials::new("vouched@example.com", "secret"),
//!     );
//!     let launcher = PlaywrightLauncher::launch(&config).await?;
//!     let session = Session::new(launcher.open_driver().await?, &config);
//!
//!     let home = Home::new(session, true).await?;
//!     let home = home.login(&config.credentials).await?;
//!     let profile = home.open_user_profile("MozilliansUser").await?;
//!     let results = profile
//!         .click_country_name(&profile.country().await?)
//!         .await?;
//!     assert!(results.is_the_current_page().await?);
//!
//!     launcher.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! The [`scenarios`] catalog holds the suite itself and [`Runner`] executes
//! it, classifying known defects through [`Marker::ExpectedFailure`].

pub mod config;
pub mod driver;
mod error;
pub mod markers;
pub mod pages;
pub mod runner;
pub mod scenarios;
pub mod selectors;
pub mod session;
pub mod user;
pub mod verify;

pub use config::{BrowserKind, Credentials, SuiteConfig};
pub use driver::{Driver, DriverFactory, PlaywrightDriver, PlaywrightLauncher};
pub use error::{Error, Result};
pub use markers::{Marker, Outcome};
pub use pages::{
    BasicInfo, ConfirmDelete, CreateProfileOutcome, EditProfile, Header, Home, Location, Profile,
    SearchResults, SearchScope, Skills, StepOutcome,
};
pub use runner::{RunReport, Runner, Summary};
pub use scenarios::{Scenario, ScenarioContext};
pub use session::Session;
pub use user::User;
