//! Pointer- und Tastatur-Routing: Host-Events → `AppIntent`.
//!
//! Zwei Listener-Ebenen:
//! - element-bezogen: Pointer-Down auf Canvas, Element oder Griff (mit [`HitTarget`])
//! - fensterweit: Pointer-Move, Pointer-Up, Key-Down (beim Host registriert)

mod keyboard;
mod listeners;
mod router;

pub use listeners::{CaptureKey, ListenerHost, ListenerKind};
pub use router::{EventRouter, HitTarget, Key, RawEvent};
