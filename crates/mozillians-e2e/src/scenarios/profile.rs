use super::ScenarioContext;
use crate::error::{Error, Result};
use crate::pages::{BasicInfo, CreateProfileOutcome, Home, Profile, StepOutcome};
use crate::user::{Location, User};
use crate::verify;
use std::time::{SystemTime, UNIX_EPOCH};

const NEW_USER_NAME: &str = "New MozilliansUser";
const NEW_USER_BIO: &str = "Hello, I'm new here and trying stuff out. Oh, and by the way: I'm a robot, run in a cronjob, most likely";
const FIELD_REQUIRED: &str = "This field is required.";
const NON_LATIN_TAG: &str = "\u{0394}\u{03D4}\u{03D5}\u{03D7}\u{03C7}\u{03C9}\u{03CA}\u{03E2}";

async fn signed_in_home(ctx: &ScenarioContext) -> Result<Home> {
    let home = Home::new(ctx.session.clone(), true).await?;
    home.login(&ctx.config.credentials).await
}

/// Walks the whole wizard for `user` and submits it.
async fn complete_wizard(
    basic: BasicInfo,
    user: &User,
    accept_privacy: bool,
) -> Result<CreateProfileOutcome> {
    basic.set_full_name(&user.full_name).await?;
    basic.set_bio(&user.biography).await?;

    let mut skills = basic.click_next_button().await?;
    for skill in &user.skills {
        skills.add_skill(skill).await?;
    }
    for language in &user.languages {
        skills.add_language(language).await?;
    }

    let location = skills.click_next_button().await?;
    location.select_country(&user.location.country_code).await?;
    location.set_state(&user.location.region).await?;
    location.set_city(&user.location.city).await?;
    if accept_privacy {
        location.check_privacy().await?;
    }

    location.click_create_profile_button().await
}

/// Checks that a freshly created profile echoes everything `user` entered.
async fn verify_created_profile(profile: &Profile, user: &User) -> Result<()> {
    verify::is_true(
        "the account to be created successfully",
        profile.was_account_created_successfully().await?,
    )?;
    verify::is_true(
        "the pending approval notice to be visible",
        profile.is_pending_approval_visible().await?,
    )?;

    verify::equal("Name", user.full_name.clone(), profile.name().await?)?;
    verify::equal("Email", user.email.clone(), profile.email().await?)?;
    verify::equal("Biography", user.biography.clone(), profile.biography().await?)?;
    verify::equal("Skills", user.skills.join(", "), profile.skills().await?)?;
    verify::equal("Languages", user.languages.join(", "), profile.languages().await?)?;
    verify::equal("Location", user.location.display(), profile.location().await?)
}

fn unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

pub async fn profile_deletion_confirmation(ctx: ScenarioContext) -> Result<()> {
    let home = signed_in_home(&ctx).await?;
    let edit_profile = home.header().click_edit_profile_menu_item().await?;
    let confirm = edit_profile.click_delete_profile_button().await?;

    verify::is_true(
        "the CSRF token to be present",
        confirm.is_csrf_token_present().await?,
    )?;
    verify::is_true(
        "the confirmation text to be present",
        confirm.is_confirm_text_present().await?,
    )?;
    verify::is_true(
        "the cancel button to be present",
        confirm.is_cancel_button_present().await?,
    )?;
    verify::is_true(
        "the delete button to be present",
        confirm.is_delete_button_present().await?,
    )
}

pub async fn edit_profile_information(ctx: ScenarioContext) -> Result<()> {
    let home = signed_in_home(&ctx).await?;
    let edit_profile = home.header().click_edit_profile_menu_item().await?;
    verify::is_true(
        "the CSRF token to be present",
        edit_profile.is_csrf_token_present().await?,
    )?;

    let now = unix_time();
    let new_full_name = format!("Updated Mozillians User {}", now);
    let new_biography = format!(
        "Hello, I'm new here and trying stuff out. Oh, and by the way: I'm a robot, run in a cronjob, most likely, run at {}",
        now
    );
    let new_website = format!("http://{}.com/", now);

    edit_profile.set_full_name(&new_full_name).await?;
    edit_profile.set_website(&new_website).await?;
    edit_profile.set_bio(&new_biography).await?;
    let profile = edit_profile.click_update_button().await?;

    verify::equal("Name", new_full_name, profile.name().await?)?;
    verify::equal("Biography", new_biography, profile.biography().await?)?;
    verify::equal("Website", new_website, profile.website().await?)
}

pub async fn browserid_link_present(ctx: ScenarioContext) -> Result<()> {
    let home = signed_in_home(&ctx).await?;
    let edit_profile = home.header().click_edit_profile_menu_item().await?;
    verify::is_true(
        "the BrowserID link to be present",
        edit_profile.is_browserid_link_present().await?,
    )
}

pub async fn creating_profile_without_checking_privacy_policy_checkbox(
    mut ctx: ScenarioContext,
) -> Result<()> {
    let user = User::generate(&mut ctx.rng)
        .with_full_name("User that doesn't like policy")
        .with_biography("Hello, I'm new here and trying stuff out. Oh, and by the way: I'm a robot, run in a cronjob, and will not check accept the privacy policy");

    let home = Home::new(ctx.session.clone(), true).await?;
    let basic = home.create_new_user(&user).await?;

    let location = match complete_wizard(basic, &user, false).await? {
        StepOutcome::Advanced(_) => {
            return Err(Error::AssertionFailed(
                "a profile was created without accepting the privacy policy".to_string(),
            ));
        }
        StepOutcome::Rejected(location) => location,
    };

    verify::equal(
        "Privacy policy error",
        Some(FIELD_REQUIRED.to_string()),
        location.privacy_error_message().await?,
    )?;
    let banner = location.error_message().await?.unwrap_or_default();
    verify::contains("Profile creation error message", "privacy policy", &banner)
}

pub async fn creating_profile_without_full_name_shows_field_error(
    mut ctx: ScenarioContext,
) -> Result<()> {
    let user = User::generate(&mut ctx.rng);

    let home = Home::new(ctx.session.clone(), true).await?;
    let basic = home.create_new_user(&user).await?;
    basic.set_full_name("").await?;
    basic.set_bio(&user.biography).await?;

    match basic.try_next().await? {
        StepOutcome::Advanced(_) => Err(Error::AssertionFailed(
            "the wizard advanced past Basic Info with a blank full name".to_string(),
        )),
        StepOutcome::Rejected(basic) => verify::equal(
            "Full name error",
            Some(FIELD_REQUIRED.to_string()),
            basic.full_name_error_message().await?,
        ),
    }
}

pub async fn profile_creation(mut ctx: ScenarioContext) -> Result<()> {
    let user = User::generate(&mut ctx.rng)
        .with_full_name(NEW_USER_NAME)
        .with_biography(NEW_USER_BIO)
        .with_skills(vec!["test".to_string()])
        .with_languages(vec!["english".to_string()])
        .with_location(Location::mountain_view());

    let home = Home::new(ctx.session.clone(), true).await?;
    let basic = home.create_new_user(&user).await?;
    let profile = complete_wizard(basic, &user, true)
        .await?
        .into_profile()
        .await?;

    verify_created_profile(&profile, &user).await?;
    verify::equal(
        "Location",
        "Mountain View, California\nUnited States".to_string(),
        profile.location().await?,
    )
}

pub async fn non_ascii_characters_are_allowed_in_profile_information(
    mut ctx: ScenarioContext,
) -> Result<()> {
    let user = User::generate(&mut ctx.rng)
        .with_full_name(NEW_USER_NAME)
        .with_biography(NEW_USER_BIO)
        .with_skills(vec![NON_LATIN_TAG.to_string()])
        .with_languages(vec![NON_LATIN_TAG.to_string()])
        .with_location(Location::new("gr", "Greece", "Greece", "Athens"));

    let home = Home::new(ctx.session.clone(), true).await?;
    let basic = home.create_new_user(&user).await?;
    let profile = complete_wizard(basic, &user, true)
        .await?
        .into_profile()
        .await?;

    verify_created_profile(&profile, &user).await
}

pub async fn filter_by_city(mut ctx: ScenarioContext) -> Result<()> {
    let home = signed_in_home(&ctx).await?;
    let profile = home.open_user_profile(&ctx.config.featured_username).await?;
    let city = profile.city().await?;
    let country = profile.country().await?;

    let results = profile.click_city_name(&city, &country).await?;
    verify::is_true(
        "to be on the search results page",
        results.is_the_current_page().await?,
    )?;
    verify::equal(
        "Search results title",
        format!("Mozillians in {}, {}", city, country),
        results.title().await?,
    )?;

    let random_profile = results.get_random_profile(&mut ctx.rng).await?;
    verify::equal("City", city, random_profile.city().await?)
}

pub async fn filter_by_region(mut ctx: ScenarioContext) -> Result<()> {
    let home = signed_in_home(&ctx).await?;
    let profile = home.open_user_profile(&ctx.config.featured_username).await?;
    let region = profile.region().await?;
    let country = profile.country().await?;

    let results = profile.click_region_name(&region, &country).await?;
    verify::is_true(
        "to be on the search results page",
        results.is_the_current_page().await?,
    )?;
    verify::equal(
        "Search results title",
        format!("Mozillians in {}, {}", region, country),
        results.title().await?,
    )?;

    let random_profile = results.get_random_profile(&mut ctx.rng).await?;
    verify::equal("Region", region, random_profile.region().await?)
}

pub async fn filter_by_country(mut ctx: ScenarioContext) -> Result<()> {
    let home = signed_in_home(&ctx).await?;
    let profile = home.open_user_profile(&ctx.config.featured_username).await?;
    let country = profile.country().await?;

    let results = profile.click_country_name(&country).await?;
    verify::is_true(
        "to be on the search results page",
        results.is_the_current_page().await?,
    )?;
    verify::equal(
        "Search results title",
        format!("Mozillians in {}", country),
        results.title().await?,
    )?;

    let random_profile = results.get_random_profile(&mut ctx.rng).await?;
    verify::equal("Country", country, random_profile.country().await?)
}
