//! Browser chrome core: keeps the toolbar in sync with a hosted web view.
//!
//! - [`host`]: the capability contract of the hosted view and its typed events
//! - [`state`]: the navigation state store the toolbar renders from
//! - [`controller`]: user commands in, hosted-view calls out, events reconciled
//! - [`capture`]: page snapshot, JPEG encoding and save flow

pub mod address;
pub mod capture;
pub mod commands;
pub mod controller;
pub mod host;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use address::normalize_address;
pub use capture::{encode_jpeg, CaptureOutcome, CaptureSettings, CaptureTask};
pub use commands::ChromeCommand;
pub use controller::ChromeController;
pub use host::{HostedView, HostedViewEvent, Subscription, ViewEventBus};
pub use state::{AddressPhase, ChromeSnapshot, NavigationState, NavigationStore, PhaseKind};
