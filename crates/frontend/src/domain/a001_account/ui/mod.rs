pub mod dialog;
pub mod list;
pub mod page;

pub use page::AccountsPage;
