mod dialog;
mod list;

pub use dialog::CardDialog;
pub use list::CardList;
