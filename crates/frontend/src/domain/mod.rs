pub mod a001_account;
pub mod a002_credit_card;
pub mod a003_transaction;
pub mod a004_category;
pub mod a005_investment;
pub mod a006_integration;
