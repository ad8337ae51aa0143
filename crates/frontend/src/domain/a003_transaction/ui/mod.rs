mod dialog;
mod list;
mod page;

pub use page::TransactionsPage;
