pub mod awaitable;
pub mod naming;

pub use awaitable::is_awaitable;
pub use naming::NamingRuleEngine;
