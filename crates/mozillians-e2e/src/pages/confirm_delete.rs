use crate::error::Result;
use crate::selectors::confirm_delete;
use crate::session::Session;

/// "Are you sure?" page shown before a profile is deleted.
#[derive(Clone)]
pub struct ConfirmDelete {
    session: Session,
}

impl ConfirmDelete {
    pub(crate) async fn arrive(session: Session) -> Result<Self> {
        session
            .expect_view("Confirm Profile Delete", confirm_delete::SIGNATURE)
            .await?;
        Ok(Self { session })
    }

    pub async fn is_csrf_token_present(&self) -> Result<bool> {
        self.session.is_present(confirm_delete::CSRF_TOKEN).await
    }

    pub async fn is_confirm_text_present(&self) -> Result<bool> {
        self.session.is_present(confirm_delete::CONFIRM_TEXT).await
    }

    pub async fn is_cancel_button_present(&self) -> Result<bool> {
        self.session.is_present(confirm_delete::CANCEL).await
    }

    pub async fn is_delete_button_present(&self) -> Result<bool> {
        self.session.is_present(confirm_delete::DELETE).await
    }
}
