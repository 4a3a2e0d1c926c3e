pub mod confetti;
pub mod navbar;
pub mod page_header;
pub mod toast;

pub use confetti::Confetti;
pub use navbar::Navbar;
pub use page_header::PageHeader;
pub use toast::{use_toast, ToastMsg, ToastProvider};
