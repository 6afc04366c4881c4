use super::{ConfirmDelete, Profile};
use crate::error::Result;
use crate::selectors::edit_profile;
use crate::session::Session;

/// The signed-in user's profile form.
///
/// Setters only change form contents; nothing is submitted until
/// [`EditProfile::click_update_button`].
#[derive(Clone)]
pub struct EditProfile {
    session: Session,
}

impl EditProfile {
    pub(crate) async fn arrive(session: Session) -> Result<Self> {
        session
            .expect_view("Edit Profile", edit_profile::SIGNATURE)
            .await?;
        Ok(Self { session })
    }

    pub async fn is_the_current_page(&self) -> Result<bool> {
        self.session.is_present(edit_profile::SIGNATURE).await
    }

    pub async fn is_csrf_token_present(&self) -> Result<bool> {
        self.session.is_present(edit_profile::CSRF_TOKEN).await
    }

    pub async fn is_browserid_link_present(&self) -> Result<bool> {
        self.session.is_present(edit_profile::BROWSERID_LINK).await
    }

    pub async fn set_full_name(&self, full_name: &str) -> Result<()> {
        self.session.fill(edit_profile::FULL_NAME, full_name).await
    }

    pub async fn set_website(&self, website: &str) -> Result<()> {
        self.session.fill(edit_profile::WEBSITE, website).await
    }

    pub async fn set_bio(&self, biography: &str) -> Result<()> {
        self.session.fill(edit_profile::BIO, biography).await
    }

    /// Submits the form; the site answers with the updated profile.
    pub async fn click_update_button(&self) -> Result<Profile> {
        self.session.click(edit_profile::UPDATE).await?;
        Profile::arrive(self.session.clone()).await
    }

    pub async fn click_delete_profile_button(&self) -> Result<ConfirmDelete> {
        self.session.click(edit_profile::DELETE_PROFILE).await?;
        ConfirmDelete::arrive(self.session.clone()).await
    }
}
