pub mod empty_state;
pub mod period_select;
pub mod stat_card;

pub use empty_state::{EmptyState, FormError, LoadingState};
pub use period_select::PeriodSelect;
pub use stat_card::StatCard;
