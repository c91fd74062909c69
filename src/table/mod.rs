//! Pure presentation logic for the logs grid. Nothing here touches the
//! network or the UI runtime.

pub mod body;
pub mod clock;
pub mod columns;
pub mod pagination;

pub use body::{TableBody, TableRow};
pub use clock::to_twelve_hour;
pub use columns::{Column, PLACEHOLDER};
pub use pagination::{PAGE_SIZE, Pagination};
