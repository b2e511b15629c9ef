//! Seams for the network calls the portal would make against a real backend.
//!
//! Only simulated implementations ship: they wait a fixed delay and succeed
//! unless the browser is offline.
//! Components reach them through the [`Services`] context so tests and
//! previews can swap in their own.

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;
use yew::prelude::*;

use crate::config;
use crate::state::inquiry::Inquiry;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Could not prepare the request: {0}")]
    Encode(String),
    #[error("The service is unavailable right now. Please try again.")]
    Unavailable,
}

/// The simulated services still refuse to run while the browser reports
/// itself offline. No window (tests, workers) counts as online.
fn check_connectivity(online: Option<bool>) -> Result<(), ServiceError> {
    match online {
        Some(false) => Err(ServiceError::Unavailable),
        _ => Ok(()),
    }
}

fn browser_online() -> Option<bool> {
    web_sys::window().map(|window| window.navigator().on_line())
}

pub trait SearchService {
    fn search(&self, query: String) -> LocalBoxFuture<'static, Result<(), ServiceError>>;
}

pub trait InquiryMailer {
    fn deliver(&self, inquiry: Inquiry) -> LocalBoxFuture<'static, Result<(), ServiceError>>;
}

pub struct SimulatedSearch {
    pub delay_ms: u32,
}

impl Default for SimulatedSearch {
    fn default() -> Self {
        Self { delay_ms: config::SEARCH_DELAY_MS }
    }
}

impl SearchService for SimulatedSearch {
    fn search(&self, query: String) -> LocalBoxFuture<'static, Result<(), ServiceError>> {
        let delay_ms = self.delay_ms;
        let reachable = check_connectivity(browser_online());
        async move {
            reachable?;
            TimeoutFuture::new(delay_ms).await;
            log::debug!("simulated search finished for {:?}", query);
            Ok(())
        }
        .boxed_local()
    }
}

pub struct SimulatedMailer {
    pub delay_ms: u32,
}

impl Default for SimulatedMailer {
    fn default() -> Self {
        Self { delay_ms: config::INQUIRY_DELAY_MS }
    }
}

impl InquiryMailer for SimulatedMailer {
    fn deliver(&self, inquiry: Inquiry) -> LocalBoxFuture<'static, Result<(), ServiceError>> {
        let delay_ms = self.delay_ms;
        let body = serde_json::to_string(&inquiry).map_err(|e| ServiceError::Encode(e.to_string()));
        let reachable = check_connectivity(browser_online());
        async move {
            reachable?;
            let body = body?;
            TimeoutFuture::new(delay_ms).await;
            log::info!("inquiry delivered: {}", body);
            Ok(())
        }
        .boxed_local()
    }
}

#[derive(Clone)]
pub struct Services {
    pub search: Rc<dyn SearchService>,
    pub mailer: Rc<dyn InquiryMailer>,
}

impl Services {
    pub fn simulated() -> Self {
        Self {
            search: Rc::new(SimulatedSearch::default()),
            mailer: Rc::new(SimulatedMailer::default()),
        }
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.search, &other.search) && Rc::ptr_eq(&self.mailer, &other.mailer)
    }
}

#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().unwrap_or_else(Services::simulated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_delays_match_the_configured_timings() {
        assert_eq!(config::SEARCH_DELAY_MS, 1_000);
        assert_eq!(config::INQUIRY_DELAY_MS, 1_500);
        assert_eq!(SimulatedSearch::default().delay_ms, config::SEARCH_DELAY_MS);
        assert_eq!(SimulatedMailer::default().delay_ms, config::INQUIRY_DELAY_MS);
    }

    #[test]
    fn offline_browser_makes_services_unavailable() {
        assert_eq!(check_connectivity(Some(false)), Err(ServiceError::Unavailable));
        assert_eq!(check_connectivity(Some(true)), Ok(()));
        assert_eq!(check_connectivity(None), Ok(()));
    }

    #[test]
    fn unavailable_message_invites_a_retry() {
        assert_eq!(
            ServiceError::Unavailable.to_string(),
            "The service is unavailable right now. Please try again."
        );
    }
}
