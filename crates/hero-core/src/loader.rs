//! Ordered fallback over candidate asset locations.

use std::fmt::Display;
use std::future::Future;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("no asset candidates configured")]
    NoCandidates,
    #[error("all {attempts} asset candidates failed")]
    Exhausted { attempts: usize },
}

/// The first candidate that loaded, with its position in the list.
#[derive(Debug)]
pub struct Loaded<T> {
    pub index: usize,
    pub location: String,
    pub value: T,
}

/// Try each location in order until `attempt` succeeds. Failures are logged
/// and fall through to the next candidate; there is no retry.
pub async fn load_first<T, E, F, Fut>(
    candidates: &[String],
    mut attempt: F,
) -> Result<Loaded<T>, LoadError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    if candidates.is_empty() {
        return Err(LoadError::NoCandidates);
    }
    for (index, location) in candidates.iter().enumerate() {
        match attempt(location.clone()).await {
            Ok(value) => {
                log::info!("[loader] loaded {} (candidate {})", location, index);
                return Ok(Loaded {
                    index,
                    location: location.clone(),
                    value,
                });
            }
            Err(e) => log::warn!("[loader] {} failed: {}", location, e),
        }
    }
    Err(LoadError::Exhausted {
        attempts: candidates.len(),
    })
}
