//! FormFlow console front end
//!
//! Drives the contact and inquiry forms interactively: prompts for each
//! field, validates on blur, and submits through the simulated gateway.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use formflow::{
    ConsoleSink, FailurePlan, Field, FormController, FormView, FormsConfig, InMemoryForm,
    SimulatedGateway, StaticPage, SubmissionState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formflow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = FormsConfig::load().unwrap_or_else(|err| {
        tracing::warn!("could not load config, using defaults: {err}");
        FormsConfig::default()
    });

    let contact = contact_form();
    let inquiry = inquiry_form();
    let page = StaticPage::new()
        .with_form(contact.clone())
        .with_form(inquiry.clone());

    let gateway = Arc::new(SimulatedGateway::new(
        config.simulated_delay(),
        FailurePlan::EveryNth(10),
    ));
    let sink = Arc::new(ConsoleSink);

    // Speculative bind: this page carries no feedback form, so this is a
    // silent no-op
    let _feedback = FormController::bind(
        &page,
        "feedbackForm",
        gateway.clone(),
        sink.clone(),
        config.clone(),
    );

    let mut controllers = Vec::new();
    for (view, form_id) in [(&contact, "contactForm"), (&inquiry, "inquiryForm")] {
        if let Some(controller) = FormController::bind(
            &page,
            form_id,
            gateway.clone(),
            sink.clone(),
            config.clone(),
        ) {
            controllers.push((controller, Arc::clone(view)));
        }
    }

    for (mut controller, view) in controllers {
        if !run_form(&mut controller, &view).await? {
            break;
        }
    }

    Ok(())
}

fn contact_form() -> Arc<InMemoryForm> {
    Arc::new(InMemoryForm::new(
        "contactForm",
        vec![
            Field::text("name", "Full Name").required().min_length(2),
            Field::email("email", "Email Address").required(),
            Field::tel("phone", "Phone Number"),
            Field::text("subject", "Subject").required(),
            Field::textarea("message", "Message").required().min_length(10),
        ],
    ))
}

fn inquiry_form() -> Arc<InMemoryForm> {
    Arc::new(
        InMemoryForm::new(
            "inquiryForm",
            vec![
                Field::text("name", "Full Name").required().min_length(2),
                Field::email("email", "Email Address").required(),
                Field::tel("phone", "Phone Number").required(),
                Field::checkbox("services[]", "Internship Programs", "internship").required(),
                Field::checkbox("services[]", "Mentorship", "mentorship"),
                Field::checkbox("services[]", "Networking Events", "networking"),
                Field::checkbox("services[]", "Resume Support", "resume"),
                Field::checkbox("services[]", "Job Placement", "placement"),
                Field::checkbox("newsletter", "Subscribe to our newsletter", "yes"),
                Field::textarea("message", "How can we help?").required(),
            ],
        )
        .with_submit_label("Submit Inquiry"),
    )
}

/// Prompt for every field, then submit. Returns `Ok(false)` on EOF.
async fn run_form(controller: &mut FormController, form: &InMemoryForm) -> Result<bool> {
    println!("\n=== {} ===", controller.form_id());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        for field in form.fields() {
            let key = field.key();
            let event = if field.kind.is_checkable() {
                let Some(answer) = prompt(&mut lines, &format!("{} [y/N]: ", field.label))? else {
                    return Ok(false);
                };
                form.set_checked(&key, is_yes(&answer))
            } else {
                let Some(answer) = prompt(&mut lines, &format!("{}: ", field.label))? else {
                    return Ok(false);
                };
                form.enter_text(&key, answer.trim())
            };
            controller.handle_event(event).await;
            controller.handle_event(form.blur(&key)).await;
        }

        controller.handle_event(form.press_submit()).await;

        match controller.submission_state() {
            SubmissionState::Succeeded => return Ok(true),
            SubmissionState::Failed => loop {
                let Some(answer) = prompt(&mut lines, "Retry submission? [y/N]: ")? else {
                    return Ok(false);
                };
                if !is_yes(&answer) {
                    return Ok(true);
                }
                controller.handle_event(form.press_submit()).await;
                match controller.submission_state() {
                    SubmissionState::Succeeded => return Ok(true),
                    _ => continue,
                }
            },
            _ => {
                // Validation failed; show the inline messages and re-prompt
                for (key, message) in form.error_nodes() {
                    println!("  {key}: {message}");
                }
                println!("Please correct the highlighted fields.\n");
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y" | "yes" | "Yes")
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
