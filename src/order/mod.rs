//! Menu catalogue, cart pricing and the in-progress order draft.

pub mod cart;
pub mod draft;
pub mod menu;

pub use cart::{Cart, CartLine};
pub use draft::{DeliveryMode, OrderDraft};
pub use menu::{MenuItem, MENU};
