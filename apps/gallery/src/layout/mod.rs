// Gallery layout: split measured slides into columns, then even out column heights.
// Everything except `handlers` is pure and never touches rendering state.

pub mod balancer;
pub mod gallery;
pub mod handlers;
pub mod partition;
pub mod viewport;

// Re-export the public API consumed by other modules and by callers of the library.
pub use balancer::BalanceReport;
pub use gallery::{arrange, balance_columns, ArrangedGallery, ColumnAssignment, Rearranger, Trigger};
pub use partition::Layout;
pub use viewport::{Breakpoints, ViewportColumns};
