//! Login modal of the Persa AI web application.
//!
//! The modal walks the user through one of two paths:
//!
//! - phone number, then a six digit one-time code, after which the modal closes;
//! - email address, then a confirmation asking the user to check their inbox.
//!
//! [`flow`] holds the view-state machine, [`steps`] the per-step forms that
//! validate input before it reaches the machine, and [`modal`] ties both to the
//! open/closed lifecycle of the dialog. No request is sent anywhere: completing
//! a path is only logged.

pub mod copy;
pub mod flow;
pub mod form;
pub mod modal;
pub mod screen;
pub mod steps;
pub mod validate;

pub use flow::{LoginFlowController, LoginFlowState, Msg, Signal, View};
pub use modal::{LoginModal, Message};
pub use screen::Screen;
