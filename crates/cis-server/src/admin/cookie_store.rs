//! Cookie-backed toggle state store

use cis_domain::error::Result;
use cis_domain::ports::ToggleStateStore;
use rocket::http::{Cookie, CookieJar, SameSite};

/// Keeps the serialized expand/collapse map in one cookie
///
/// Reads see the cookie sent with the request, writes replace it in the
/// response.
pub struct CookieToggleStore<'a, 'r> {
    jar: &'a CookieJar<'r>,
    name: &'a str,
}

impl<'a, 'r> CookieToggleStore<'a, 'r> {
    /// Store under cookie `name`
    pub fn new(jar: &'a CookieJar<'r>, name: &'a str) -> Self {
        Self { jar, name }
    }
}

impl ToggleStateStore for CookieToggleStore<'_, '_> {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.jar.get(self.name).map(|cookie| cookie.value().to_string()))
    }

    fn save(&self, value: &str) -> Result<()> {
        let cookie = Cookie::build((self.name.to_string(), value.to_string()))
            .path("/")
            .same_site(SameSite::Lax);
        self.jar.add(cookie);
        Ok(())
    }
}
