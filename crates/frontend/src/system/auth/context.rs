use contracts::system::auth::{can_access_admin, decode_claims, TokenClaims};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub claims: Option<TokenClaims>,
}

impl AuthState {
    /// Whether the session currently grants the admin panel
    pub fn is_admin(&self) -> bool {
        can_access_admin(self.claims.as_ref(), now_secs())
    }
}

/// Unix time in seconds, from the browser clock
pub fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Session from the token saved by a previous visit; expired or unreadable
/// tokens are discarded
fn restore_session() -> AuthState {
    let Some(token) = storage::get_access_token() else {
        return AuthState::default();
    };

    match decode_claims(&token) {
        Ok(claims) if !claims.is_expired(now_secs()) => {
            log::info!("Restored admin session for '{}'", claims.username);
            AuthState {
                access_token: Some(token),
                claims: Some(claims),
            }
        }
        Ok(_) => {
            log::info!("Saved admin session expired");
            storage::clear_tokens();
            AuthState::default()
        }
        Err(e) => {
            log::warn!("Discarding saved admin session: {e}");
            storage::clear_tokens();
            AuthState::default()
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(restore_session());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Start a session from an operator-issued token
///
/// The token must decode and grant the admin panel; otherwise nothing is stored.
pub fn do_login(token: &str, set_auth_state: WriteSignal<AuthState>) -> Result<(), String> {
    let token = token.trim();
    if token.is_empty() {
        return Err("Access token is required".to_string());
    }

    let claims = decode_claims(token).map_err(|e| format!("Invalid token: {e}"))?;
    if claims.is_expired(now_secs()) {
        return Err("Token has expired".to_string());
    }
    if !can_access_admin(Some(&claims), now_secs()) {
        return Err("Token does not grant admin access".to_string());
    }

    storage::save_access_token(token);
    log::info!("Admin session started for '{}'", claims.username);
    set_auth_state.set(AuthState {
        access_token: Some(token.to_string()),
        claims: Some(claims),
    });
    Ok(())
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
    log::info!("Admin session ended");
}
