pub mod d400_finance_overview;
pub mod d401_indicators;
