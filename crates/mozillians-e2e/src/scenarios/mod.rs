//! User journeys through the profile features, and the catalog the runner
//! executes.

mod profile;

pub use profile::{
    browserid_link_present, creating_profile_without_checking_privacy_policy_checkbox,
    creating_profile_without_full_name_shows_field_error, edit_profile_information,
    filter_by_city, filter_by_country, filter_by_region,
    non_ascii_characters_are_allowed_in_profile_information, profile_creation,
    profile_deletion_confirmation,
};

use crate::config::SuiteConfig;
use crate::error::Result;
use crate::markers::Marker;
use crate::session::Session;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

/// Everything one scenario run owns.
pub struct ScenarioContext {
    pub session: Session,
    pub config: Arc<SuiteConfig>,
    pub rng: StdRng,
}

impl ScenarioContext {
    pub fn new(session: Session, config: Arc<SuiteConfig>, seed: u64) -> Self {
        Self {
            session,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

pub type ScenarioFn = fn(ScenarioContext) -> BoxFuture<'static, Result<()>>;

/// A named, marked user journey.
#[derive(Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub markers: &'static [Marker],
    pub run: ScenarioFn,
}

impl Scenario {
    pub const fn new(name: &'static str, markers: &'static [Marker], run: ScenarioFn) -> Self {
        Self { name, markers, run }
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("markers", &self.markers)
            .finish()
    }
}

const BUG_883194: Marker = Marker::ExpectedFailure {
    reason: "Bug 883194 - Error message appears when trying to save changes in Edit Profile page",
};
const BROWSERID_GONE: Marker = Marker::ExpectedFailure {
    reason: "This is no longer applicable, browserid link not present in edit profile page",
};
const BUG_797790: Marker = Marker::ExpectedFailure {
    reason: "Bug 797790 - Create Your Profile page privacy policy error message is ambiguous",
};
const BUG_835318: Marker = Marker::ExpectedFailure {
    reason: "Bug 835318 - Error adding groups / skills / or languages with non-latin chars.",
};
const BLANK_NAME_ACCEPTED: Marker = Marker::ExpectedFailure {
    reason: "Basic Info advances with a blank full name instead of showing a field error",
};

/// Every scenario of the suite, in run order.
pub fn catalog() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "profile_deletion_confirmation",
            &[Marker::Nondestructive],
            |ctx| profile_deletion_confirmation(ctx).boxed(),
        ),
        Scenario::new("edit_profile_information", &[BUG_883194], |ctx| {
            edit_profile_information(ctx).boxed()
        }),
        Scenario::new(
            "browserid_link_present",
            &[Marker::Nondestructive, BROWSERID_GONE],
            |ctx| browserid_link_present(ctx).boxed(),
        ),
        Scenario::new(
            "creating_profile_without_checking_privacy_policy_checkbox",
            &[BUG_797790],
            |ctx| creating_profile_without_checking_privacy_policy_checkbox(ctx).boxed(),
        ),
        Scenario::new(
            "creating_profile_without_full_name_shows_field_error",
            &[BLANK_NAME_ACCEPTED],
            |ctx| creating_profile_without_full_name_shows_field_error(ctx).boxed(),
        ),
        Scenario::new("profile_creation", &[], |ctx| profile_creation(ctx).boxed()),
        Scenario::new(
            "non_ascii_characters_are_allowed_in_profile_information",
            &[BUG_835318],
            |ctx| non_ascii_characters_are_allowed_in_profile_information(ctx).boxed(),
        ),
        Scenario::new("filter_by_city", &[Marker::Nondestructive], |ctx| {
            filter_by_city(ctx).boxed()
        }),
        Scenario::new("filter_by_region", &[Marker::Nondestructive], |ctx| {
            filter_by_region(ctx).boxed()
        }),
        Scenario::new("filter_by_country", &[Marker::Nondestructive], |ctx| {
            filter_by_country(ctx).boxed()
        }),
    ]
}

/// Scenarios whose name contains `filter`, or all of them.
pub fn select(scenarios: Vec<Scenario>, filter: Option<&str>) -> Vec<Scenario> {
    match filter {
        Some(filter) => scenarios
            .into_iter()
            .filter(|s| s.name.contains(filter))
            .collect(),
        None => scenarios,
    }
}
