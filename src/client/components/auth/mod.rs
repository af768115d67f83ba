pub mod guest;
pub mod layout;
pub mod sidebar;

pub use guest::GuestLayout;
pub use layout::AuthLayout;
pub use sidebar::Sidebar;
