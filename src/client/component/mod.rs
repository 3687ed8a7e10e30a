pub mod error_toast;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod select;

pub use error_toast::ErrorToast;
pub use header::Header;
pub use layout::Layout;
pub use modal::Modal;
pub use page::Page;
pub use select::ReferenceSelect;
