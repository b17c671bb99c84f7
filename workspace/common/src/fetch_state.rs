/// UI fetch state: idle, loading, success or error.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// A new request may only start when nothing is in flight
    pub fn accepts_submission(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Resolve a finished request, replacing the error text with `message`
    pub fn settle<E>(result: Result<T, E>, message: &str) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(_) => Self::Error(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state: FetchState<u32> = FetchState::default();
        assert_eq!(state, FetchState::NotStarted);
        assert!(state.accepts_submission());
    }

    #[test]
    fn test_loading_blocks_submission() {
        let state: FetchState<u32> = FetchState::Loading;
        assert!(state.is_loading());
        assert!(!state.accepts_submission());
    }

    #[test]
    fn test_settle_hides_specific_failure() {
        let failed: FetchState<u32> =
            FetchState::settle(Err::<u32, _>("HTTP error: 500"), "Forecasting failed");
        assert_eq!(failed.error().map(String::as_str), Some("Forecasting failed"));
        assert!(failed.accepts_submission());

        let ok = FetchState::settle(Ok::<_, String>(7), "unused");
        assert_eq!(ok.data(), Some(&7));
        assert!(ok.is_success());
    }
}
