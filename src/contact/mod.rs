//! Contact form state machine and mail delivery boundary.

pub mod form;
pub mod mailer;
