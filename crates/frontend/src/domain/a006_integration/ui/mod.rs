mod banks;
mod page;
mod whatsapp;

pub use page::IntegrationsPage;
