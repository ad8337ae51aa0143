mod dialogs;
mod entries;
mod page;

pub use page::InvestmentsPage;
