//! Storage Ports - The "Ports" of Hexagonal Architecture
//!
//! The overlay states what it needs from a record's attribute storage,
//! not how that storage works. That's the adapter's job.
//!
//! ```text
//! Domain Layer            │  Adapter Layer
//! ────────────────────────┼────────────────────────────
//! trait AttributeStore    │  InMemoryAttributeStore
//!   fn read_raw()         │  (an ORM's attribute bag)
//!   fn write_raw()        │
//! ```

pub mod attribute_store;
