pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod protected_layout;
pub mod toast;
pub mod update_poller;

pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorPage, LoadingPage, Page};
pub use protected_layout::{ProtectedLayout, RequiresAdmin, RequiresLoggedIn};
pub use toast::ToastStack;
pub use update_poller::UpdatePoller;
