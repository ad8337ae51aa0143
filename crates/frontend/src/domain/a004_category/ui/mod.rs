mod dialog;

pub use dialog::CategoryDialog;
