use super::{BasicInfo, Header, Profile};
use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::selectors::{header, login};
use crate::session::Session;
use crate::user::User;

/// Landing page of the site.
#[derive(Clone)]
pub struct Home {
    session: Session,
}

impl Home {
    /// Creates the home page object.
    ///
    /// With `open_url` the browser is first sent to the site root and the
    /// header must show up. Without it the session is wrapped as is; a browser
    /// that is not on the site surfaces on the first interaction instead.
    pub async fn new(session: Session, open_url: bool) -> Result<Self> {
        if open_url {
            let root = session.base_url().clone();
            tracing::debug!("Opening {}", root);
            session.open(&root).await?;
            session.expect_view("Home", header::SIGNATURE).await?;
        }
        Ok(Self { session })
    }

    pub fn header(&self) -> Header {
        Header::new(self.session.clone())
    }

    /// Signs in with the vouched test account.
    pub async fn login(&self, credentials: &Credentials) -> Result<Home> {
        self.sign_in(&credentials.email, &credentials.password).await?;
        self.session
            .expect_view("Home (signed in)", header::PROFILE_MENU)
            .await?;
        Ok(Home {
            session: self.session.clone(),
        })
    }

    /// Signs in with a brand-new account, which lands in the profile wizard.
    pub async fn create_new_user(&self, user: &User) -> Result<BasicInfo> {
        tracing::info!("Creating account {}", user.email);
        self.sign_in(&user.email, &user.password).await?;
        BasicInfo::arrive(self.session.clone()).await
    }

    /// Opens the public profile page of `username`.
    pub async fn open_user_profile(&self, username: &str) -> Result<Profile> {
        let mut url = self.session.base_url().clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidConfig("base_url cannot hold a path".to_string()))?
            .pop_if_empty()
            .extend(&["u", username, ""]);
        self.session.open(&url).await?;
        Profile::arrive(self.session.clone()).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<()> {
        self.session.click(header::LOGIN).await?;
        self.session.expect_view("Login", login::SIGNATURE).await?;
        self.session.fill(login::EMAIL, email).await?;
        self.session.fill(login::PASSWORD, password).await?;
        self.session.click(login::SUBMIT).await
    }
}
