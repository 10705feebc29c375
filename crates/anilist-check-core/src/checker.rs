use crate::anilist::{AnilistClient, HttpTransport};
use crate::error::{CheckError, FetchError};
use crate::matching;
use crate::show_id::IntoShowId;
use crate::traits::Transport;
use anilist_check_config::Config;
use anilist_check_models::{ListCategory, ListCollection};
use tracing::{dispatcher, error, warn, Dispatch};

/// Answers "is this user tracking that show?" against AniList.
///
/// Each check performs exactly one fetch; nothing is cached between calls. All logging goes to
/// the dispatcher the checker was built with rather than the process-wide default.
pub struct WatchChecker<T = HttpTransport> {
    client: AnilistClient<T>,
    dispatch: Dispatch,
}

impl WatchChecker<HttpTransport> {
    /// Checker with the default configuration, logging to the current default subscriber
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_client(AnilistClient::from_config(config))
    }
}

impl Default for WatchChecker<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> WatchChecker<T> {
    pub fn with_client(client: AnilistClient<T>) -> Self {
        Self {
            client,
            dispatch: dispatcher::get_default(|current| current.clone()),
        }
    }

    /// Route this checker's diagnostics to `dispatch`
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn fetch_lists(&self, user: &str) -> Result<ListCollection, FetchError> {
        self.in_scope(|| self.client.fetch_lists(user))
    }

    /// List holding a record titled `show_name`, if any
    pub fn lookup_by_name(&self, user: &str, show_name: &str) -> Result<Option<ListCategory>, CheckError> {
        self.in_scope(|| {
            let lists = self.client.fetch_lists(user)?;
            Ok(matching::find_by_name(&lists, show_name).map(|hit| hit.category))
        })
    }

    /// List holding a record with the given media id, if any. Invalid ids fail before any fetch.
    pub fn lookup_by_id(&self, user: &str, show_id: impl IntoShowId) -> Result<Option<ListCategory>, CheckError> {
        self.in_scope(|| {
            let show_id = show_id.into_show_id()?;
            let lists = self.client.fetch_lists(user)?;
            Ok(matching::find_by_id(&lists, show_id).map(|hit| hit.category))
        })
    }

    /// Whether `user` is watching, has paused or plans to watch `show_name`.
    ///
    /// Fails open: if AniList can't be queried the answer is `true`.
    pub fn is_watching_by_name(&self, user: &str, show_name: &str) -> bool {
        let outcome = self.lookup_by_name(user, show_name);
        self.in_scope(|| resolve(outcome))
    }

    /// Whether `user` is watching, has paused or plans to watch the show with `show_id`.
    ///
    /// An id that isn't an integer yields `false` without a request. Fetch failures yield `true`.
    pub fn is_watching_by_id(&self, user: &str, show_id: impl IntoShowId) -> bool {
        let outcome = self.lookup_by_id(user, show_id);
        self.in_scope(|| resolve(outcome))
    }

    fn in_scope<R>(&self, f: impl FnOnce() -> R) -> R {
        dispatcher::with_default(&self.dispatch, f)
    }
}

/// Collapse a lookup into the public boolean
fn resolve(outcome: Result<Option<ListCategory>, CheckError>) -> bool {
    match outcome {
        Ok(found) => found.is_some(),
        Err(CheckError::Input(e)) => {
            error!(critical = true, "ID search requires an input that can be converted to an integer ({}). Returning FALSE", e);
            false
        }
        Err(CheckError::Fetch(e)) => {
            error!(critical = true, "Unable to properly contact AniList: {}", e);
            warn!("An error was encountered while contacting AniList. Defaulting to TRUE");
            true
        }
    }
}
