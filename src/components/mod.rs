pub mod connection_check;
pub mod filter_panel;
pub mod logs_table;
pub mod logs_view;
pub mod pager;

pub use connection_check::ConnectionCheck;
pub use filter_panel::FilterPanel;
pub use logs_table::LogsTable;
pub use logs_view::LogsView;
pub use pager::Pager;
