//! Locators for every view of the site, grouped by view.
//!
//! Each view has a `SIGNATURE` element whose presence means the view has
//! loaded.

pub mod header {
    pub const SIGNATURE: &str = "#nav-main";
    pub const LOGIN: &str = "#nav-login";
    /// Only rendered for a signed-in user.
    pub const PROFILE_MENU: &str = "#nav-profile";
    pub const EDIT_PROFILE: &str = "#nav-edit-profile";
    pub const VIEW_PROFILE: &str = "#nav-view-profile";
    pub const LOGOUT: &str = "#nav-logout";
}

pub mod login {
    pub const SIGNATURE: &str = "#login-form";
    pub const EMAIL: &str = "#id_email";
    pub const PASSWORD: &str = "#id_password";
    pub const SUBMIT: &str = "#login-submit";
}

pub mod edit_profile {
    pub const SIGNATURE: &str = "#edit-profile-form";
    pub const CSRF_TOKEN: &str = "#edit-profile-form input[name='csrfmiddlewaretoken']";
    pub const BROWSERID_LINK: &str = "#browserid-link";
    pub const FULL_NAME: &str = "#id_full_name";
    pub const WEBSITE: &str = "#id_website";
    pub const BIO: &str = "#id_bio";
    pub const UPDATE: &str = "#update-profile";
    pub const DELETE_PROFILE: &str = "#delete-profile";
}

pub mod confirm_delete {
    pub const SIGNATURE: &str = "#confirm-delete";
    pub const CSRF_TOKEN: &str = "#confirm-delete input[name='csrfmiddlewaretoken']";
    pub const CONFIRM_TEXT: &str = "#confirm-delete-text";
    pub const CANCEL: &str = "#cancel-delete";
    pub const DELETE: &str = "#delete-action";
}

pub mod basic_info {
    pub const SIGNATURE: &str = "#basic-info";
    pub const FULL_NAME: &str = "#id_full_name";
    pub const BIO: &str = "#id_bio";
    pub const FULL_NAME_ERROR: &str = "#id_full_name_error";
    pub const NEXT: &str = "#basic-next";
}

pub mod skills {
    pub const SIGNATURE: &str = "#skills-languages";
    pub const SKILLS: &str = "#id_skills";
    pub const LANGUAGES: &str = "#id_languages";
    pub const NEXT: &str = "#skills-next";
}

pub mod location {
    pub const SIGNATURE: &str = "#location";
    pub const COUNTRY: &str = "#id_country";
    pub const REGION: &str = "#id_region";
    pub const CITY: &str = "#id_city";
    pub const PRIVACY: &str = "#id_optin";
    pub const CREATE_PROFILE: &str = "#create-profile";
    /// Form-level banner shown when creation is rejected.
    pub const FORM_ERROR: &str = "#form-error";
    pub const PRIVACY_ERROR: &str = "#id_optin_error";
}

pub mod profile {
    pub const SIGNATURE: &str = "#profile-info";
    pub const FULL_NAME: &str = "#profile-fullname";
    pub const EMAIL: &str = "#profile-email";
    pub const BIO: &str = "#profile-bio";
    pub const WEBSITE: &str = "#profile-website";
    pub const SKILLS: &str = "#profile-skills";
    pub const LANGUAGES: &str = "#profile-languages";
    pub const LOCATION: &str = "#profile-location";
    pub const CITY: &str = "#profile-city";
    pub const REGION: &str = "#profile-region";
    pub const COUNTRY: &str = "#profile-country";
    pub const CREATED_NOTICE: &str = "#notice-created";
    pub const PENDING_APPROVAL: &str = "#notice-pending";
}

pub mod search {
    pub const SIGNATURE: &str = "#search-results";
    pub const TITLE: &str = "#search-title";
    pub const RESULT_LINK: &str = ".search-result a";
}
