pub mod config;
pub mod constants;
pub mod record;
pub mod reject;

pub use config::TranslateConfig;
pub use record::{ChargeRow, RawCount, TypeMap, UsageRecord};
pub use reject::RejectReason;
