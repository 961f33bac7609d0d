//! Ties the login form to an authenticator.

use std::sync::Arc;

use formstate::{State, Subscription};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::auth::{AuthStatus, Authenticator};
use crate::form::LoginForm;

/// Owns a login form and drives the async authentication call.
///
/// Dropping the controller cancels any request still in flight, and a
/// cancelled request never writes its result back.
pub struct LoginController<A: Authenticator + 'static> {
    form: LoginForm,
    authenticator: Arc<A>,
    status: State<AuthStatus>,
    cancel: CancellationToken,
}

impl<A: Authenticator + 'static> LoginController<A> {
    pub fn new(authenticator: A) -> Self {
        Self {
            form: LoginForm::new(),
            authenticator: Arc::new(authenticator),
            status: State::new(AuthStatus::Idle),
            cancel: CancellationToken::new(),
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn status(&self) -> AuthStatus {
        self.status.get()
    }

    /// Observe status changes.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe_status<F>(&self, f: F) -> Subscription
    where
        F: Fn(&AuthStatus) + Send + Sync + 'static,
    {
        self.status.subscribe(f)
    }

    /// Validate the form and, if valid, start authenticating.
    ///
    /// Returns `None` when the form is invalid or a request is already in
    /// flight. Must be called from within a tokio runtime.
    pub fn submit(&self) -> Option<JoinHandle<()>> {
        if self.status.get().is_loading() {
            log::debug!("submit ignored: authentication already in flight");
            return None;
        }

        let credentials = self.form.submit()?;
        self.status.set(AuthStatus::Loading);

        let authenticator = Arc::clone(&self.authenticator);
        let status = self.status.clone();
        let cancel = self.cancel.child_token();

        Some(tokio::spawn(async move {
            let _guard = FailOnPanic {
                status: status.clone(),
                cancel: cancel.clone(),
            };
            tokio::select! {
                _ = cancel.cancelled() => {
                    log::debug!("authentication discarded: login form torn down");
                }
                result = authenticator.authenticate(&credentials) => {
                    if cancel.is_cancelled() {
                        return;
                    }
                    let next = match result {
                        Ok(true) => AuthStatus::Success,
                        Ok(false) => AuthStatus::Failure,
                        Err(e) => {
                            log::error!("authentication failed: {}", e);
                            AuthStatus::Failure
                        }
                    };
                    status.set(next);
                }
            }
        }))
    }
}

/// Moves the status out of `Loading` when the auth task panics, so a
/// panicking authenticator does not block every later submit.
struct FailOnPanic {
    status: State<AuthStatus>,
    cancel: CancellationToken,
}

impl Drop for FailOnPanic {
    fn drop(&mut self) {
        if std::thread::panicking() && !self.cancel.is_cancelled() {
            log::error!("authentication task panicked");
            self.status.set(AuthStatus::Failure);
        }
    }
}

impl<A: Authenticator + 'static> Drop for LoginController<A> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
