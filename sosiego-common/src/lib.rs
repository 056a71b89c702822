pub mod contact;
pub mod i18n;
pub mod model;
pub mod session;
pub mod snowflake;
