//! Navigation targets produced by the thread list.

use std::fmt;

/// Where an activated link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Start a new conversation.
    NewThread,
    /// Open an existing conversation.
    Thread(String),
}

impl Route {
    pub fn new_thread() -> Self {
        Route::NewThread
    }

    pub fn thread(thread_id: &str) -> Self {
        Route::Thread(thread_id.to_string())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::NewThread => write!(f, "chat/new"),
            Route::Thread(id) => write!(f, "chat/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_display() {
        assert_eq!(Route::new_thread().to_string(), "chat/new");
        assert_eq!(Route::thread("abc").to_string(), "chat/abc");
    }
}
