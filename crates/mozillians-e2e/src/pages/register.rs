// Profile creation wizard
//
// Basic Info -> Skills/Languages -> Location -> Profile. Steps that the site
// may refuse to leave report a `StepOutcome` instead of assuming success.

use super::Profile;
use crate::error::{Error, Result};
use crate::selectors::{basic_info, location, profile, skills};
use crate::session::Session;

/// Result of trying to leave a wizard step.
pub enum StepOutcome<Next, Here> {
    /// The site moved on to the next view.
    Advanced(Next),
    /// The site kept the browser on the current step and showed errors.
    Rejected(Here),
}

/// Result of `Location::click_create_profile_button`.
pub type CreateProfileOutcome = StepOutcome<Profile, Location>;

impl<Next, Here: WizardStep> StepOutcome<Next, Here> {
    pub fn is_advanced(&self) -> bool {
        matches!(self, StepOutcome::Advanced(_))
    }

    /// Returns the next view, or `Error::UnexpectedPage` when the step was rejected.
    pub async fn advanced(self, expected: &str) -> Result<Next> {
        match self {
            StepOutcome::Advanced(next) => Ok(next),
            StepOutcome::Rejected(here) => Err(Error::UnexpectedPage {
                expected: expected.to_string(),
                url: here.session().current_url().await?,
            }),
        }
    }
}

impl CreateProfileOutcome {
    /// Returns the created profile, or `Error::UnexpectedPage` when creation was refused.
    pub async fn into_profile(self) -> Result<Profile> {
        self.advanced("Profile").await
    }
}

/// A wizard step page object.
pub trait WizardStep {
    fn session(&self) -> &Session;
}

/// First step: name and biography.
#[derive(Clone)]
pub struct BasicInfo {
    session: Session,
}

impl BasicInfo {
    pub(crate) async fn arrive(session: Session) -> Result<Self> {
        session
            .expect_view("Basic Info", basic_info::SIGNATURE)
            .await?;
        Ok(Self { session })
    }

    pub async fn set_full_name(&self, full_name: &str) -> Result<()> {
        self.session.fill(basic_info::FULL_NAME, full_name).await
    }

    pub async fn set_bio(&self, biography: &str) -> Result<()> {
        self.session.fill(basic_info::BIO, biography).await
    }

    /// Error shown next to the full name field, if any.
    pub async fn full_name_error_message(&self) -> Result<Option<String>> {
        if self.session.is_present(basic_info::FULL_NAME_ERROR).await? {
            Ok(Some(self.session.text(basic_info::FULL_NAME_ERROR).await?))
        } else {
            Ok(None)
        }
    }

    pub async fn click_next_button(&self) -> Result<Skills> {
        self.try_next().await?.advanced("Skills and Languages").await
    }

    /// Clicks "next" and reports whether the required fields were accepted.
    ///
    /// A rejected step can be corrected and submitted again; errors from the
    /// earlier attempt are gone once the click returns.
    pub async fn try_next(&self) -> Result<StepOutcome<Skills, BasicInfo>> {
        self.session.click(basic_info::NEXT).await?;
        let landed = self
            .session
            .wait_for_any(&[skills::SIGNATURE, basic_info::FULL_NAME_ERROR])
            .await?;
        if landed == 0 {
            Ok(StepOutcome::Advanced(
                Skills::arrive(self.session.clone()).await?,
            ))
        } else {
            Ok(StepOutcome::Rejected(self.clone()))
        }
    }
}

impl WizardStep for BasicInfo {
    fn session(&self) -> &Session {
        &self.session
    }
}

/// Second step: skill and language tags.
#[derive(Clone)]
pub struct Skills {
    session: Session,
    skills: Vec<String>,
    languages: Vec<String>,
}

impl Skills {
    pub(crate) async fn arrive(session: Session) -> Result<Self> {
        session
            .expect_view("Skills and Languages", skills::SIGNATURE)
            .await?;
        Ok(Self {
            session,
            skills: Vec::new(),
            languages: Vec::new(),
        })
    }

    /// Adds a skill tag. Repeating a tag already entered changes nothing.
    pub async fn add_skill(&mut self, term: &str) -> Result<()> {
        if push_tag(&mut self.skills, term) {
            self.session
                .fill(skills::SKILLS, &self.skills.join(", "))
                .await?;
        }
        Ok(())
    }

    /// Adds a language tag. Repeating a tag already entered changes nothing.
    pub async fn add_language(&mut self, term: &str) -> Result<()> {
        if push_tag(&mut self.languages, term) {
            self.session
                .fill(skills::LANGUAGES, &self.languages.join(", "))
                .await?;
        }
        Ok(())
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub async fn click_next_button(&self) -> Result<Location> {
        self.session.click(skills::NEXT).await?;
        Location::arrive(self.session.clone()).await
    }
}

impl WizardStep for Skills {
    fn session(&self) -> &Session {
        &self.session
    }
}

fn push_tag(tags: &mut Vec<String>, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() || tags.iter().any(|t| t == term) {
        return false;
    }
    tags.push(term.to_string());
    true
}

/// Last step: location and the privacy policy acknowledgement.
#[derive(Clone)]
pub struct Location {
    session: Session,
}

impl Location {
    pub(crate) async fn arrive(session: Session) -> Result<Self> {
        session.expect_view("Location", location::SIGNATURE).await?;
        Ok(Self { session })
    }

    /// Selects a country by option value, e.g. `us`.
    pub async fn select_country(&self, code: &str) -> Result<()> {
        self.session.select_option(location::COUNTRY, code).await
    }

    pub async fn set_state(&self, state: &str) -> Result<()> {
        self.session.fill(location::REGION, state).await
    }

    pub async fn set_city(&self, city: &str) -> Result<()> {
        self.session.fill(location::CITY, city).await
    }

    /// Acknowledges the privacy policy. Creation is refused without it.
    pub async fn check_privacy(&self) -> Result<()> {
        self.session.check(location::PRIVACY).await
    }

    /// Submits the wizard.
    ///
    /// On success the browser shows the new profile; otherwise it stays on
    /// this step with errors, and can be submitted again after a fix.
    pub async fn click_create_profile_button(&self) -> Result<CreateProfileOutcome> {
        self.session.click(location::CREATE_PROFILE).await?;
        let landed = self
            .session
            .wait_for_any(&[
                profile::SIGNATURE,
                location::FORM_ERROR,
                location::PRIVACY_ERROR,
            ])
            .await?;
        if landed == 0 {
            Ok(StepOutcome::Advanced(
                Profile::arrive(self.session.clone()).await?,
            ))
        } else {
            tracing::debug!("Profile creation was rejected");
            Ok(StepOutcome::Rejected(self.clone()))
        }
    }

    /// Form-level error banner, if shown.
    pub async fn error_message(&self) -> Result<Option<String>> {
        self.optional_text(location::FORM_ERROR).await
    }

    /// Error next to the privacy policy checkbox, if shown.
    pub async fn privacy_error_message(&self) -> Result<Option<String>> {
        self.optional_text(location::PRIVACY_ERROR).await
    }

    async fn optional_text(&self, selector: &str) -> Result<Option<String>> {
        if self.session.is_present(selector).await? {
            Ok(Some(self.session.text(selector).await?))
        } else {
            Ok(None)
        }
    }
}

impl WizardStep for Location {
    fn session(&self) -> &Session {
        &self.session
    }
}
