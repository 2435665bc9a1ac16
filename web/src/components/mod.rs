pub mod notification_modal;
pub mod search_filter;
pub mod side_bar;
pub mod step_indicator;
pub mod work_item_detail_modal;
pub mod work_item_grid;

// Re-export commonly used types
pub use notification_modal::NotificationModal;
pub use search_filter::SearchFilter;
pub use side_bar::SideBar;
pub use step_indicator::StepIndicator;
pub use work_item_detail_modal::WorkItemDetailModal;
pub use work_item_grid::WorkItemGrid;
