//! Redirect policy.
//!
//! Two modes exist. With `max_redirects == 0` every redirect is refused.
//! With any other value redirects are followed until the chain holds
//! `MAX_REDIRECT_HOPS` requests; the configured number itself is not used as
//! the limit.

use log::debug;
use reqwest::redirect::Policy;
use url::Url;

use crate::config::MAX_REDIRECT_HOPS;
use crate::error_handling::RedirectRejection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    /// Refuse every redirect.
    Disabled,
    /// Follow until the chain reaches `MAX_REDIRECT_HOPS` requests.
    Limited,
}

impl RedirectMode {
    pub fn from_max_redirects(max_redirects: usize) -> Self {
        if max_redirects == 0 {
            RedirectMode::Disabled
        } else {
            RedirectMode::Limited
        }
    }

    /// Decides whether to follow a redirect.
    ///
    /// # Arguments
    ///
    /// * `previous` - URLs already requested in this chain, oldest first
    ///   (the original request included)
    pub fn check(self, previous: &[Url]) -> Result<(), RedirectRejection> {
        match self {
            RedirectMode::Disabled => Err(RedirectRejection::NoRedirects),
            RedirectMode::Limited if previous.len() >= MAX_REDIRECT_HOPS => {
                Err(RedirectRejection::LimitExceeded(MAX_REDIRECT_HOPS))
            }
            RedirectMode::Limited => Ok(()),
        }
    }
}

/// Builds the client redirect policy for a request's `max_redirects` setting.
///
/// Rejections are returned to the client as errors and come back out of
/// `send` as `RequestError::NoRedirects` or `RequestError::RedirectLimitExceeded`.
pub fn redirect_policy(max_redirects: usize) -> Policy {
    let mode = RedirectMode::from_max_redirects(max_redirects);
    Policy::custom(move |attempt| {
        let verdict = mode.check(attempt.previous());
        match verdict {
            Ok(()) => {
                debug!(
                    "Following redirect ({}) to {}",
                    attempt.status(),
                    attempt.url()
                );
                attempt.follow()
            }
            Err(rejection) => attempt.error(rejection),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(len: usize) -> Vec<Url> {
        (0..len)
            .map(|i| Url::parse(&format!("http://example.com/r{i}")).unwrap())
            .collect()
    }

    #[test]
    fn test_zero_disables_redirects() {
        let mode = RedirectMode::from_max_redirects(0);
        assert_eq!(mode, RedirectMode::Disabled);
        assert_eq!(mode.check(&chain(1)), Err(RedirectRejection::NoRedirects));
        assert_eq!(mode.check(&[]), Err(RedirectRejection::NoRedirects));
    }

    #[test]
    fn test_any_nonzero_value_uses_fixed_ceiling() {
        for max in [1, 3, 10, 50, usize::MAX] {
            let mode = RedirectMode::from_max_redirects(max);
            assert_eq!(mode, RedirectMode::Limited);
            assert_eq!(mode.check(&chain(MAX_REDIRECT_HOPS - 1)), Ok(()));
            assert_eq!(
                mode.check(&chain(MAX_REDIRECT_HOPS)),
                Err(RedirectRejection::LimitExceeded(MAX_REDIRECT_HOPS))
            );
        }
    }

    #[test]
    fn test_limit_applies_beyond_ceiling() {
        let mode = RedirectMode::Limited;
        assert!(mode.check(&chain(MAX_REDIRECT_HOPS + 5)).is_err());
    }
}
