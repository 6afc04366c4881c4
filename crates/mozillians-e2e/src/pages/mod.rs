//! Page objects, one per view of the site.
//!
//! Actions return the page object of the view they lead to, and only after
//! that view's signature element is present. A page object can therefore be
//! trusted to describe what the browser shows at the moment it is handed out.

mod confirm_delete;
mod edit_profile;
mod header;
mod home;
mod profile;
mod register;
mod search;

pub use confirm_delete::ConfirmDelete;
pub use edit_profile::EditProfile;
pub use header::Header;
pub use home::Home;
pub use profile::Profile;
pub use register::{BasicInfo, CreateProfileOutcome, Location, Skills, StepOutcome, WizardStep};
pub use search::{SearchResults, SearchScope};
