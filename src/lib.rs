//! FormFlow - form validation and submission control
//!
//! A controller that binds to a form, validates its fields against
//! declared constraints, and drives a guarded asynchronous submission
//! lifecycle. The form view, notification sink, and submission gateway
//! are injected capabilities, so the same controller runs against any
//! front end and is fully testable with deterministic doubles.

pub mod config;
pub mod controller;
pub mod gateway;
pub mod notify;
pub mod state;
pub mod validate;
pub mod view;

pub use config::FormsConfig;
pub use controller::FormController;
pub use gateway::{
    FailurePlan, SimulatedGateway, SubmissionError, SubmissionGateway, SubmissionReceipt,
};
pub use notify::{ConsoleSink, NotificationSink, Severity};
pub use state::{
    Field, FieldConstraints, FieldKey, FieldKind, FieldRegistry, FieldStatus, FieldValue,
    FormSnapshot, SnapshotValue, SubmissionState,
};
pub use validate::ValidationError;
pub use view::{FormEvent, FormPage, FormView, InMemoryForm, StaticPage};
