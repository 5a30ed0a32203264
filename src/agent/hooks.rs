use crate::error::Result;
use crate::metrics::EpisodeRecord;

pub type EpisodeHook<E> = Box<dyn FnMut(&mut E, usize) -> Result<()>>;
pub type ReplayHook = Box<dyn FnMut(&EpisodeRecord)>;

/// Extension points around each training episode.
///
/// The agent fires all four on every episode; an empty slot behaves as a no-op.
pub struct Hooks<E> {
    pre_episode: Option<EpisodeHook<E>>,
    post_episode: Option<EpisodeHook<E>>,
    before_replay: Option<ReplayHook>,
    after_replay: Option<ReplayHook>,
}

impl<E> Hooks<E> {
    pub fn new() -> Self {
        Hooks {
            pre_episode: None,
            post_episode: None,
            before_replay: None,
            after_replay: None,
        }
    }

    /// Runs before step 0 of every training episode.
    pub fn pre_episode<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut E, usize) -> Result<()> + 'static,
    {
        self.pre_episode = Some(Box::new(hook));
        self
    }

    /// Runs after the step loop of every training episode.
    pub fn post_episode<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut E, usize) -> Result<()> + 'static,
    {
        self.post_episode = Some(Box::new(hook));
        self
    }

    /// Runs after a terminal transition, before any replay.
    pub fn before_replay<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&EpisodeRecord) + 'static,
    {
        self.before_replay = Some(Box::new(hook));
        self
    }

    /// Runs after replay; the record carries the replay loss.
    pub fn after_replay<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&EpisodeRecord) + 'static,
    {
        self.after_replay = Some(Box::new(hook));
        self
    }

    pub(crate) fn fire_pre_episode(&mut self, env: &mut E, episode: usize) -> Result<()> {
        match self.pre_episode.as_mut() {
            Some(hook) => hook(env, episode),
            None => Ok(()),
        }
    }

    pub(crate) fn fire_post_episode(&mut self, env: &mut E, episode: usize) -> Result<()> {
        match self.post_episode.as_mut() {
            Some(hook) => hook(env, episode),
            None => Ok(()),
        }
    }

    pub(crate) fn fire_before_replay(&mut self, record: &EpisodeRecord) {
        if let Some(hook) = self.before_replay.as_mut() {
            hook(record);
        }
    }

    pub(crate) fn fire_after_replay(&mut self, record: &EpisodeRecord) {
        if let Some(hook) = self.after_replay.as_mut() {
            hook(record);
        }
    }
}

impl<E> Default for Hooks<E> {
    fn default() -> Self {
        Self::new()
    }
}
