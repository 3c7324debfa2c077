use dioxus::prelude::*;

/// Loading / error / success flags shared by every form page
#[derive(Clone, Copy)]
pub struct FormState {
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    pub success: Signal<Option<String>>,
}

impl FormState {
    /// Start a submission: clear previous messages and raise the loading flag
    pub fn begin(&mut self) {
        self.error.set(None);
        self.success.set(None);
        self.loading.set(true);
    }

    pub fn fail(&mut self, message: String) {
        self.error.set(Some(message));
    }

    pub fn succeed(&mut self, message: String) {
        self.success.set(Some(message));
    }

    /// End of the in-flight request, whatever its outcome
    pub fn finish(&mut self) {
        self.loading.set(false);
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }
}

/// Hook to manage a form's submission state
pub fn use_form_state() -> FormState {
    let loading = use_signal(|| false);
    let error = use_signal(|| None::<String>);
    let success = use_signal(|| None::<String>);

    FormState {
        loading,
        error,
        success,
    }
}
