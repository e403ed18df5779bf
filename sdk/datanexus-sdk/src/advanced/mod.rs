pub mod accounts;
pub mod builders;
pub mod instructions;
