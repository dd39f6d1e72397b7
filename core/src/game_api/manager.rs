use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::GameConfig;
use crate::session::GameSession;

#[derive(Default)]
struct SessionManager {
    next_handle: u32,
    sessions: HashMap<u32, GameSession>,
}

impl SessionManager {
    fn create_session(&mut self, config: GameConfig, events: &mut Vec<String>) -> u32 {
        self.next_handle = self.next_handle.saturating_add(1).max(1);
        let handle = self.next_handle;
        let session = GameSession::new(config);
        session.announce(events);
        ::log::debug!(
            "session {handle} created with {} caches",
            session.cache_count()
        );
        self.sessions.insert(handle, session);
        handle
    }

    fn destroy_session(&mut self, handle: u32) {
        self.sessions.remove(&handle);
    }
}

thread_local! {
    static MANAGER: RefCell<SessionManager> = RefCell::new(SessionManager::default());
}

pub(super) fn create_session(config: GameConfig, events: &mut Vec<String>) -> u32 {
    MANAGER.with(|manager| manager.borrow_mut().create_session(config, events))
}

pub(super) fn destroy_session(handle: u32) {
    MANAGER.with(|manager| manager.borrow_mut().destroy_session(handle));
}

pub(super) fn with_session_mut<T>(handle: u32, f: impl FnOnce(&mut GameSession) -> T) -> Option<T> {
    MANAGER.with(|manager| {
        let mut manager = manager.borrow_mut();
        manager.sessions.get_mut(&handle).map(f)
    })
}

pub(super) fn with_session<T>(handle: u32, f: impl FnOnce(&GameSession) -> T) -> Option<T> {
    MANAGER.with(|manager| {
        let manager = manager.borrow();
        manager.sessions.get(&handle).map(f)
    })
}
