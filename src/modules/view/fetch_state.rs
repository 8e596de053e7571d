/// Per-resource lifecycle: `idle → loading → success | error`. Re-entry
/// (param change, remount) goes back through `loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Tracked state for one fetched resource. Transitions keep the invariants:
/// success implies an empty error message, and error implies the data equals
/// the pre-fetch default, never a partial payload.
#[derive(Debug, Clone)]
pub struct FetchState<T> {
    status: FetchStatus,
    data: T,
    error_message: String,
}

impl<T: Default> FetchState<T> {
    pub fn idle() -> Self {
        Self {
            status: FetchStatus::Idle,
            data: T::default(),
            error_message: String::new(),
        }
    }

    /// A new request is starting. Clears any previous outcome so the view
    /// shows the loading state, not leftovers from the last fetch.
    pub fn begin(&mut self) {
        self.status = FetchStatus::Loading;
        self.data = T::default();
        self.error_message.clear();
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = FetchStatus::Error;
        self.data = T::default();
        self.error_message = message.into();
    }
}

impl<T> FetchState<T> {
    pub fn succeed(&mut self, data: T) {
        self.status = FetchStatus::Success;
        self.data = data;
        self.error_message.clear();
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn is_error(&self) -> bool {
        self.status == FetchStatus::Error
    }
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self::idle()
    }
}
