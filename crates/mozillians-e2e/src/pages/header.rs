use super::{EditProfile, Home, Profile};
use crate::error::Result;
use crate::selectors::header;
use crate::session::Session;

/// Navigation bar shared by every view.
#[derive(Clone)]
pub struct Header {
    session: Session,
}

impl Header {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn is_user_signed_in(&self) -> Result<bool> {
        self.session.is_present(header::PROFILE_MENU).await
    }

    pub async fn click_edit_profile_menu_item(&self) -> Result<EditProfile> {
        self.session.click(header::EDIT_PROFILE).await?;
        EditProfile::arrive(self.session.clone()).await
    }

    pub async fn click_view_profile_menu_item(&self) -> Result<Profile> {
        self.session.click(header::VIEW_PROFILE).await?;
        Profile::arrive(self.session.clone()).await
    }

    pub async fn click_logout_menu_item(&self) -> Result<Home> {
        self.session.click(header::LOGOUT).await?;
        self.session.expect_view("Home", header::LOGIN).await?;
        Home::new(self.session.clone(), false).await
    }
}
