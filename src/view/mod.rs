//! Form view module: the structural collaborator the controller drives

mod memory;
mod page;
mod traits;

pub use memory::InMemoryForm;
pub use page::{FormPage, StaticPage};
pub use traits::{FormEvent, FormView};

#[cfg(test)]
pub use traits::MockFormView;
