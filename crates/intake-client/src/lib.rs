//! intake-client library crate.
//!
//! Validates the astrology intake form and forwards it to a webhook as JSON,
//! reporting the outcome back on the form.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Host (terminal, page, test)
//!         ↕  FormHost / FormView
//! [intake-client]
//!   ├── domain/           IntakeConfig
//!   ├── application/      SubmissionController: validate → check endpoint → POST
//!   └── infrastructure/
//!         ├── console_form/   Terminal host
//!         ├── http_transport/ reqwest webhook POST
//!         ├── storage/        intake.toml loader
//!         └── mock/           Recording view, scripted transport
//!         ↕  HTTP POST, application/json
//! Webhook (n8n workflow)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O.
//! - `application` depends on `domain` and `intake-core` only, and reaches
//!   the outside world through traits.
//! - `infrastructure` implements those traits with `reqwest`, `std::io`,
//!   and `toml`.

/// Domain layer: runtime configuration.
pub mod domain;

/// Application layer: the validate-and-submit controller.
pub mod application;

/// Infrastructure layer: HTTP transport, terminal host, config file.
pub mod infrastructure;
