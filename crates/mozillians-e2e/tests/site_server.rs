// Site Server - a miniature Mozillians served over HTTP for browser tests
//
// Renders every view the page objects know with the same element ids as the
// real site, keeps accounts in memory and redirects after each POST the way
// the real site does. One vouched account and a handful of profiles are
// seeded at start.

// Each test binary compiles this file separately and uses a different subset
// of it. Suppress false-positive warnings.
#![allow(dead_code)]

use axum::{
    Form, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use url::form_urlencoded;

pub const VOUCHED_EMAIL: &str = "vouched@mozillians.test";
pub const VOUCHED_PASSWORD: &str = "secret";
pub const FEATURED_USERNAME: &str = "MozilliansUser";

const FIELD_REQUIRED: &str = "This field is required.";

#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub bio: String,
    pub website: String,
    pub skills: String,
    pub languages: String,
    pub country: String,
    pub region: String,
    pub city: String,
    pub vouched: bool,
}

#[derive(Debug, Clone)]
struct Account {
    email: String,
    password: String,
    profile: Option<SiteProfile>,
}

#[derive(Debug, Default)]
struct Draft {
    full_name: String,
    bio: String,
    skills: String,
    languages: String,
}

#[derive(Debug)]
struct Site {
    accounts: Vec<Account>,
    signed_in: Option<String>,
    draft: Draft,
}

type Shared = Arc<Mutex<Site>>;

/// Site server handle
pub struct SiteServer {
    addr: SocketAddr,
    site: Shared,
    handle: JoinHandle<()>,
}

impl SiteServer {
    /// Start the site on a random available port
    pub async fn start() -> Self {
        let site: Shared = Arc::new(Mutex::new(Site::seeded()));

        let app = Router::new()
            .route("/", get(home_page))
            .route("/login/", get(login_page).post(login_submit))
            .route("/logout/", get(logout))
            .route("/user/edit/", get(edit_profile_page).post(edit_profile_submit))
            .route("/user/delete/confirm/", get(confirm_delete_page))
            .route("/register/", get(basic_info_page).post(basic_info_submit))
            .route("/register/skills/", get(skills_page).post(skills_submit))
            .route(
                "/register/location/",
                get(location_page).post(location_submit),
            )
            .route("/u/{username}/", get(profile_page))
            .route("/search/", get(search_page))
            .with_state(site.clone());

        // Bind to port 0 to get any available port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind site server");

        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Site server failed");
        });

        SiteServer { addr, site, handle }
    }

    /// Root URL, with a trailing slash
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn profile_of(&self, username: &str) -> Option<SiteProfile> {
        self.site.lock().unwrap().find_profile(username).cloned()
    }

    pub fn profile_count(&self) -> usize {
        let site = self.site.lock().unwrap();
        site.accounts.iter().filter(|a| a.profile.is_some()).count()
    }

    /// Shutdown the site server
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

impl Site {
    fn seeded() -> Self {
        let people = [
            (FEATURED_USERNAME, "Mozillians User", "us", "California", "Mountain View"),
            ("AnotherMozillian", "Another Mozillian", "us", "California", "Mountain View"),
            ("SanFranMozillian", "San Fran Mozillian", "us", "California", "San Francisco"),
            ("PortlandMozillian", "Portland Mozillian", "us", "Oregon", "Portland"),
            ("BerlinMozillian", "Berlin Mozillian", "de", "Berlin", "Berlin"),
        ];
        let accounts = people
            .into_iter()
            .map(|(username, full_name, country, region, city)| {
                let email = if username == FEATURED_USERNAME {
                    VOUCHED_EMAIL.to_string()
                } else {
                    format!("{}@mozillians.test", username.to_ascii_lowercase())
                };
                Account {
                    email: email.clone(),
                    password: if username == FEATURED_USERNAME {
                        VOUCHED_PASSWORD.to_string()
                    } else {
                        "password".to_string()
                    },
                    profile: Some(SiteProfile {
                        username: username.to_string(),
                        full_name: full_name.to_string(),
                        email,
                        bio: format!("I am {}.", full_name),
                        website: String::new(),
                        skills: "testing".to_string(),
                        languages: "english".to_string(),
                        country: country.to_string(),
                        region: region.to_string(),
                        city: city.to_string(),
                        vouched: true,
                    }),
                }
            })
            .collect();

        Site {
            accounts,
            signed_in: None,
            draft: Draft::default(),
        }
    }

    fn find_profile(&self, username: &str) -> Option<&SiteProfile> {
        self.accounts
            .iter()
            .filter_map(|a| a.profile.as_ref())
            .find(|p| p.username == username)
    }

    fn me(&self) -> Option<&Account> {
        let email = self.signed_in.as_ref()?;
        self.accounts.iter().find(|a| &a.email == email)
    }

    fn me_mut(&mut self) -> Option<&mut Account> {
        let email = self.signed_in.clone()?;
        self.accounts.iter_mut().find(|a| a.email == email)
    }
}

fn country_name(code: &str) -> &str {
    match code {
        "us" => "United States",
        "gr" => "Greece",
        "de" => "Germany",
        other => other,
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn search_href(pairs: &[(&str, &str)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        query.append_pair(key, value);
    }
    format!("/search/?{}", query.finish())
}

/// Wraps `body` in the document with the navigation header.
fn layout(site: &Site, title: &str, body: &str) -> Html<String> {
    let nav = match site.me() {
        Some(account) => {
            let own = account
                .profile
                .as_ref()
                .map(|p| format!("/u/{}/", p.username))
                .unwrap_or_else(|| "/register/".to_string());
            format!(
                r#"<a id="nav-profile" href="{own}">Profile</a>
    <a id="nav-edit-profile" href="/user/edit/">Edit Profile</a>
    <a id="nav-view-profile" href="{own}">View Profile</a>
    <a id="nav-logout" href="/logout/">Log Out</a>"#
            )
        }
        None => r#"<a id="nav-login" href="/login/">Log In</a>"#.to_string(),
    };
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
  <nav id="nav-main">
    {nav}
  </nav>
  {body}
</body>
</html>"#
    ))
}

fn not_found(site: &Site) -> Response {
    (
        StatusCode::NOT_FOUND,
        layout(site, "Not Found", "<h1>Page not found</h1>"),
    )
        .into_response()
}

// Views

async fn home_page(State(site): State<Shared>) -> Html<String> {
    let site = site.lock().unwrap();
    layout(&site, "Mozillians", "<h1>Welcome to Mozillians</h1>")
}

async fn login_page(State(site): State<Shared>) -> Html<String> {
    let site = site.lock().unwrap();
    layout(
        &site,
        "Log In",
        r#"<form id="login-form" method="post" action="/login/">
    <input id="id_email" name="email" type="email">
    <input id="id_password" name="password" type="password">
    <button id="login-submit" type="submit">Log In</button>
  </form>"#,
    )
}

#[derive(Deserialize)]
struct LoginForm {
    email: String,
    password: String,
}

async fn login_submit(State(site): State<Shared>, Form(form): Form<LoginForm>) -> Redirect {
    let mut site = site.lock().unwrap();
    let known = site.accounts.iter().find(|a| a.email == form.email).cloned();
    match known {
        Some(account) if account.password != form.password => Redirect::to("/login/"),
        Some(account) => {
            site.signed_in = Some(form.email);
            if account.profile.is_some() {
                Redirect::to("/")
            } else {
                Redirect::to("/register/")
            }
        }
        None => {
            site.accounts.push(Account {
                email: form.email.clone(),
                password: form.password,
                profile: None,
            });
            site.signed_in = Some(form.email);
            site.draft = Draft::default();
            Redirect::to("/register/")
        }
    }
}

async fn logout(State(site): State<Shared>) -> Redirect {
    site.lock().unwrap().signed_in = None;
    Redirect::to("/")
}

async fn edit_profile_page(State(site): State<Shared>) -> Response {
    let site = site.lock().unwrap();
    let Some(profile) = site.me().and_then(|a| a.profile.as_ref()) else {
        return Redirect::to("/login/").into_response();
    };
    let body = format!(
        r#"<form id="edit-profile-form" method="post" action="/user/edit/">
    <input type="hidden" name="csrfmiddlewaretoken" value="token">
    <input id="id_full_name" name="full_name" value="{}">
    <input id="id_website" name="website" value="{}">
    <textarea id="id_bio" name="bio">{}</textarea>
    <button id="update-profile" type="submit">Update</button>
    <a id="delete-profile" href="/user/delete/confirm/">Delete Profile</a>
  </form>"#,
        escape(&profile.full_name),
        escape(&profile.website),
        escape(&profile.bio)
    );
    layout(&site, "Edit Profile", &body).into_response()
}

#[derive(Deserialize)]
struct EditProfileForm {
    full_name: String,
    website: String,
    bio: String,
}

async fn edit_profile_submit(
    State(site): State<Shared>,
    Form(form): Form<EditProfileForm>,
) -> Response {
    let mut site = site.lock().unwrap();
    let Some(profile) = site.me_mut().and_then(|a| a.profile.as_mut()) else {
        return Redirect::to("/login/").into_response();
    };
    profile.full_name = form.full_name;
    profile.website = form.website;
    profile.bio = form.bio;
    Redirect::to(&format!("/u/{}/", profile.username)).into_response()
}

async fn confirm_delete_page(State(site): State<Shared>) -> Html<String> {
    let site = site.lock().unwrap();
    layout(
        &site,
        "Delete Profile",
        r#"<div id="confirm-delete">
    <form method="post" action="/user/delete/">
      <input type="hidden" name="csrfmiddlewaretoken" value="token">
      <p id="confirm-delete-text">Are you sure you want to delete your profile?</p>
      <a id="cancel-delete" href="/user/edit/">Cancel</a>
      <button id="delete-action" type="submit">Delete</button>
    </form>
  </div>"#,
    )
}

fn basic_info_body(full_name: &str, bio: &str, rejected: bool) -> String {
    let error = if rejected {
        format!(r#"<span id="id_full_name_error">{}</span>"#, FIELD_REQUIRED)
    } else {
        String::new()
    };
    format!(
        r#"<form id="basic-info" method="post" action="/register/">
    <input id="id_full_name" name="full_name" value="{}">
    {}
    <textarea id="id_bio" name="bio">{}</textarea>
    <button id="basic-next" type="submit">Next</button>
  </form>"#,
        escape(full_name),
        error,
        escape(bio)
    )
}

async fn basic_info_page(State(site): State<Shared>) -> Html<String> {
    let site = site.lock().unwrap();
    layout(&site, "Basic Info", &basic_info_body("", "", false))
}

#[derive(Deserialize)]
struct BasicInfoForm {
    full_name: String,
    bio: String,
}

async fn basic_info_submit(
    State(site): State<Shared>,
    Form(form): Form<BasicInfoForm>,
) -> Response {
    let mut site = site.lock().unwrap();
    if form.full_name.trim().is_empty() {
        let body = basic_info_body(&form.full_name, &form.bio, true);
        return layout(&site, "Basic Info", &body).into_response();
    }
    site.draft.full_name = form.full_name;
    site.draft.bio = form.bio;
    Redirect::to("/register/skills/").into_response()
}

async fn skills_page(State(site): State<Shared>) -> Html<String> {
    let site = site.lock().unwrap();
    layout(
        &site,
        "Skills and Languages",
        r#"<form id="skills-languages" method="post" action="/register/skills/">
    <input id="id_skills" name="skills">
    <input id="id_languages" name="languages">
    <button id="skills-next" type="submit">Next</button>
  </form>"#,
    )
}

#[derive(Deserialize)]
struct SkillsForm {
    skills: String,
    languages: String,
}

async fn skills_submit(State(site): State<Shared>, Form(form): Form<SkillsForm>) -> Redirect {
    let mut site = site.lock().unwrap();
    site.draft.skills = form.skills;
    site.draft.languages = form.languages;
    Redirect::to("/register/location/")
}

fn location_body(rejected: bool) -> String {
    let (banner, privacy_error) = if rejected {
        (
            r#"<div id="form-error">You must accept the privacy policy to create a profile.</div>"#
                .to_string(),
            format!(r#"<span id="id_optin_error">{}</span>"#, FIELD_REQUIRED),
        )
    } else {
        (String::new(), String::new())
    };
    format!(
        r#"{banner}
  <form id="location" method="post" action="/register/location/">
    <select id="id_country" name="country">
      <option value="">---</option>
      <option value="us">United States</option>
      <option value="gr">Greece</option>
      <option value="de">Germany</option>
    </select>
    <input id="id_region" name="region">
    <input id="id_city" name="city">
    <input id="id_optin" name="optin" type="checkbox" value="on">
    {privacy_error}
    <button id="create-profile" type="submit">Create Profile</button>
  </form>"#
    )
}

async fn location_page(State(site): State<Shared>) -> Html<String> {
    let site = site.lock().unwrap();
    layout(&site, "Location", &location_body(false))
}

#[derive(Deserialize)]
struct LocationForm {
    country: String,
    region: String,
    city: String,
    optin: Option<String>,
}

async fn location_submit(
    State(site): State<Shared>,
    Form(form): Form<LocationForm>,
) -> Response {
    let mut site = site.lock().unwrap();
    if form.optin.is_none() {
        return layout(&site, "Location", &location_body(true)).into_response();
    }

    let Some(email) = site.signed_in.clone() else {
        return Redirect::to("/login/").into_response();
    };
    let username = email.split('@').next().unwrap_or_default().to_string();
    let profile = SiteProfile {
        username: username.clone(),
        full_name: site.draft.full_name.clone(),
        email,
        bio: site.draft.bio.clone(),
        website: String::new(),
        skills: site.draft.skills.clone(),
        languages: site.draft.languages.clone(),
        country: form.country,
        region: form.region,
        city: form.city,
        vouched: false,
    };
    if let Some(account) = site.me_mut() {
        account.profile = Some(profile);
    }
    Redirect::to(&format!("/u/{}/?created=1", username)).into_response()
}

#[derive(Deserialize)]
struct ProfileQuery {
    created: Option<String>,
}

async fn profile_page(
    State(site): State<Shared>,
    Path(username): Path<String>,
    Query(query): Query<ProfileQuery>,
) -> Response {
    let site = site.lock().unwrap();
    let Some(p) = site.find_profile(&username) else {
        return not_found(&site);
    };

    let notices = if query.created.is_some() {
        r#"<div id="notice-created">Your personal email address has been added.</div>
  <div id="notice-pending">Your profile is pending approval.</div>"#
    } else {
        ""
    };
    let country = country_name(&p.country);
    let city_href = search_href(&[("country", p.country.as_str()), ("city", p.city.as_str())]);
    let region_href = search_href(&[("country", p.country.as_str()), ("region", p.region.as_str())]);
    let country_href = search_href(&[("country", p.country.as_str())]);

    let body = format!(
        r#"{notices}
  <div id="profile-info">
    <h2 id="profile-fullname">{}</h2>
    <p id="profile-email">{}</p>
    <p id="profile-bio">{}</p>
    <p id="profile-website">{}</p>
    <p id="profile-skills">{}</p>
    <p id="profile-languages">{}</p>
    <p id="profile-location"><a id="profile-city" href="{}">{}</a>, <a id="profile-region" href="{}">{}</a><br><a id="profile-country" href="{}">{}</a></p>
  </div>"#,
        escape(&p.full_name),
        escape(&p.email),
        escape(&p.bio),
        escape(&p.website),
        escape(&p.skills),
        escape(&p.languages),
        escape(&city_href),
        escape(&p.city),
        escape(&region_href),
        escape(&p.region),
        escape(&country_href),
        escape(country),
    );
    layout(&site, &p.full_name, &body).into_response()
}

#[derive(Deserialize)]
struct SearchQuery {
    country: String,
    region: Option<String>,
    city: Option<String>,
}

async fn search_page(State(site): State<Shared>, Query(query): Query<SearchQuery>) -> Html<String> {
    let site = site.lock().unwrap();
    let country = country_name(&query.country);
    let scope = match (&query.city, &query.region) {
        (Some(city), _) => format!("{}, {}", city, country),
        (None, Some(region)) => format!("{}, {}", region, country),
        (None, None) => country.to_string(),
    };

    let results: String = site
        .accounts
        .iter()
        .filter_map(|a| a.profile.as_ref())
        .filter(|p| p.vouched && p.country == query.country)
        .filter(|p| query.region.as_ref().is_none_or(|r| &p.region == r))
        .filter(|p| query.city.as_ref().is_none_or(|c| &p.city == c))
        .map(|p| {
            format!(
                r#"<li class="search-result"><a href="/u/{}/">{}</a></li>"#,
                p.username,
                escape(&p.full_name)
            )
        })
        .collect();

    let body = format!(
        r#"<div id="search-results">
    <h2 id="search-title">Mozillians in {}</h2>
    <ul>{}</ul>
  </div>"#,
        escape(&scope),
        results
    );
    layout(&site, "Search", &body)
}
