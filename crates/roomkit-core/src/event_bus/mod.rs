//! # Event Bus Module
//!
//! Synchronous publish/subscribe used by the placement store to tell its
//! observers (the 2D and 3D render adapters, list views, autosave) that the
//! layout changed. The store never knows who is listening.
//!
//! ## Usage
//!
//! ```rust
//! use roomkit_core::event_bus::{EventBus, EventCategory, EventFilter, LayoutEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Placement]),
//!     |event| println!("layout changed: {}", event.description()),
//! );
//!
//! bus.publish(LayoutEvent::PlacementsCleared);
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
