//! Login and registration.

use super::Landing;
use super::messages::{LOGIN_FAILED, REGISTER_FAILED, REGISTER_OK};
use crate::context::AppContext;
use hotelbook_core::HotelbookError;
use hotelbook_core::navigation::Route;
use hotelbook_core::notification::Notice;
use hotelbook_core::session::Session;
use hotelbook_core::user::{LoginRequest, RegisterRequest};
use hotelbook_core::validation::{validate_login, validate_registration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Auth form state, used by the login page and inline on the detail page.
pub struct AuthFlow {
    ctx: AppContext,
    pub mode: AuthMode,
    pub login: LoginRequest,
    pub register: RegisterRequest,
}

impl AuthFlow {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            mode: AuthMode::Login,
            login: LoginRequest::default(),
            register: RegisterRequest::default(),
        }
    }

    /// Opens the login page; an existing session is sent to its landing page.
    pub fn open(ctx: AppContext) -> Landing<Self> {
        match ctx.current_session() {
            Some(session) => Landing::Redirect(Route::for_role(session.role)),
            None => Landing::Page(Self::new(ctx)),
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
    }

    /// Logs in and persists the session.
    ///
    /// Returns `None` after notifying when validation, the call or the
    /// session write fails.
    pub async fn authenticate(&mut self) -> Option<Session> {
        if let Err(err) = validate_login(&self.login) {
            self.ctx.report("login", &HotelbookError::from(err), LOGIN_FAILED);
            return None;
        }

        let result = match self.ctx.booking.login(&self.login).await {
            Ok(auth) => self.ctx.session.begin(&auth),
            Err(err) => Err(err),
        };

        match result {
            Ok(session) => {
                self.login.password.clear();
                Some(session)
            }
            Err(err) => {
                self.ctx.report("login", &err, LOGIN_FAILED);
                None
            }
        }
    }

    /// Login page submit: admins land on `/admin`, everyone else on
    /// `/dashboard`.
    pub async fn login(&mut self) -> Option<Route> {
        let session = self.authenticate().await?;
        Some(Route::for_role(session.role))
    }

    /// Registers the account and switches back to login mode with the email
    /// prefilled. Does not log in.
    pub async fn register(&mut self) -> bool {
        if let Err(err) = validate_registration(&self.register) {
            self.ctx
                .report("register", &HotelbookError::from(err), REGISTER_FAILED);
            return false;
        }

        match self.ctx.booking.register(&self.register).await {
            Ok(user) => {
                tracing::info!(email = %user.email, "Registration completed");
                self.ctx.notify(Notice::success(REGISTER_OK));
                self.login = LoginRequest::new(self.register.email.trim(), "");
                self.register = RegisterRequest::default();
                self.mode = AuthMode::Login;
                true
            }
            Err(err) => {
                self.ctx.report("register", &err, REGISTER_FAILED);
                false
            }
        }
    }
}

/// Clears every session key; the user lands on `/`.
pub fn logout(ctx: &AppContext) -> Route {
    if let Err(err) = ctx.session.end() {
        tracing::error!(error = %err, "Failed to clear session");
    }
    Route::Home
}
