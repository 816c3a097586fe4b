//! Navbar auth region: swaps login/register links for the logged-in profile
//! links and wires the logout button.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::types::User;
use crate::state::auth::Session;

/// Id of the element the navbar is mounted into.
pub const MOUNT_ID: &str = "auth-links";

/// Landing page loaded after logout.
pub const LANDING_HREF: &str = "/index.html";

const PROFILE_EDIT_HREF: &str = "/profile_edit.html";
const LOGIN_HREF: &str = "/login.html";
const REGISTER_HREF: &str = "/register.html";

/// Greeting shown next to the profile link.
pub fn welcome_message(username: &str) -> String {
    format!("Welcome, {username}!")
}

/// What the auth region shows for one known auth state.
///
/// The render branches of [`Navbar`] are driven by this type, so the
/// link-set decision is testable without a DOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthLinks {
    /// Profile-edit link, welcome message, and a logout button.
    LoggedIn { welcome: String },
    /// Login and register links.
    LoggedOut,
}

impl AuthLinks {
    /// Resolve the `session` prop: the links to render directly, or `None`
    /// when the component must probe the backend itself.
    pub fn from_prop(session: Option<&Session>) -> Option<Self> {
        session.map(Self::for_session)
    }

    /// Links for a session the caller already confirmed.
    pub fn for_session(session: &Session) -> Self {
        Self::for_user(session.user())
    }

    /// Links for a collapsed probe result.
    pub fn for_user(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self::LoggedIn {
                welcome: welcome_message(&user.username),
            },
            None => Self::LoggedOut,
        }
    }

    /// Hrefs present in the rendered markup.
    pub fn hrefs(&self) -> &'static [&'static str] {
        match self {
            Self::LoggedIn { .. } => &[PROFILE_EDIT_HREF],
            Self::LoggedOut => &[LOGIN_HREF, REGISTER_HREF],
        }
    }

    /// Whether the rendered markup carries a logout control.
    pub fn has_logout(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }
}

/// Auth region of the navbar.
///
/// With no `session` prop the component probes `GET /api/auth/me` itself
/// (exactly one request) and renders from the collapsed result. A caller
/// that already knows the auth state passes `Some(session)` and no request
/// is made; `Some(Session::Anonymous)` is a confirmed logged-out render.
///
/// The region is fully replaced on each render, and the logout handler is
/// bound to the freshly created button instance, so repeated renders never
/// accumulate handlers.
#[component]
pub fn Navbar(#[prop(optional)] session: Option<Session>) -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let client = ApiClient::new(&config);

    match AuthLinks::from_prop(session.as_ref()) {
        Some(links) => auth_links(links, client),
        None => {
            let probe_client = client.clone();
            let probe = LocalResource::new(move || {
                let client = probe_client.clone();
                async move { client.probe_session().await.into_user() }
            });
            view! {
                <Suspense fallback=|| ()>
                    {move || {
                        probe
                            .get()
                            .map(|user| auth_links(AuthLinks::for_user(user.as_ref()), client.clone()))
                    }}
                </Suspense>
            }
            .into_any()
        }
    }
}

/// Render one [`AuthLinks`] decision into markup.
fn auth_links(links: AuthLinks, client: ApiClient) -> AnyView {
    match links {
        AuthLinks::LoggedIn { welcome } => {
            let on_logout = move |_| {
                #[cfg(feature = "hydrate")]
                {
                    use crate::util::cookie;

                    let client = client.clone();
                    leptos::task::spawn_local(async move {
                        // Response unexamined: the navigation below happens
                        // whether or not the backend saw the logout.
                        client.logout().await;
                        cookie::expire(cookie::SESSION_COOKIE);
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().set_href(LANDING_HREF);
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = &client;
                }
            };

            view! {
                <a href=PROFILE_EDIT_HREF class="nav-link">"Edit Profile"</a>
                <span class="navbar-text">{welcome}</span>
                <button id="logout-btn" class="btn" on:click=on_logout>
                    "Logout"
                </button>
            }
            .into_any()
        }
        AuthLinks::LoggedOut => view! {
            <a href=LOGIN_HREF class="nav-link">"Log In"</a>
            <a href=REGISTER_HREF class="nav-link">"Register"</a>
        }
        .into_any(),
    }
}
