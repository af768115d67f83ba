pub mod account_details;
pub mod account_form;
pub mod account_table;
pub mod auth;
pub mod document_list;
pub mod modal;
pub mod navbar;
pub mod page;
pub mod pdf_input;
pub mod ship_form;
pub mod table;
pub mod title;
pub mod toast;

pub use account_details::AccountDetailsModal;
pub use account_form::CreateAccountModal;
pub use account_table::AccountTable;
pub use document_list::DocumentGroups;
pub use modal::{ConfirmDialog, Modal};
pub use navbar::Navbar;
pub use page::{Page, PageHeader};
pub use pdf_input::{PdfInput, PickedPdf};
pub use ship_form::CreateShipModal;
pub use table::{Pager, SearchInput, StatusToggle};
pub use title::ShipGptTitle;
pub use toast::Toasts;
