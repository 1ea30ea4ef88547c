//! Form lookup on a page
//!
//! Controllers may be instantiated speculatively on pages that lack the
//! form; a missing form is a silent no-op rather than an error.

use std::sync::Arc;

use super::memory::InMemoryForm;
use super::traits::FormView;

/// A page exposing zero or more forms by identifier
pub trait FormPage: Send + Sync {
    /// Look up a form view; `None` when no form matches
    fn find_form(&self, form_id: &str) -> Option<Arc<dyn FormView>>;

    /// Identifiers of every form on the page, in document order
    fn form_ids(&self) -> Vec<String>;
}

/// A page assembled from in-memory forms
#[derive(Default)]
pub struct StaticPage {
    forms: Vec<Arc<InMemoryForm>>,
}

impl StaticPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(mut self, form: Arc<InMemoryForm>) -> Self {
        self.forms.push(form);
        self
    }
}

impl FormPage for StaticPage {
    fn find_form(&self, form_id: &str) -> Option<Arc<dyn FormView>> {
        self.forms
            .iter()
            .find(|f| f.form_id() == form_id)
            .map(|f| Arc::clone(f) as Arc<dyn FormView>)
    }

    fn form_ids(&self) -> Vec<String> {
        self.forms.iter().map(|f| f.form_id()).collect()
    }
}
