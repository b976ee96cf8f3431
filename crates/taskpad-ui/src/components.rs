mod notice_banner;
mod task_card;
mod task_list;
mod task_modal;
mod top_bar;

pub use notice_banner::NoticeBanner;
pub use task_card::TaskCardView;
pub use task_list::TaskListView;
pub use task_modal::TaskModal;
pub use top_bar::TopBar;
