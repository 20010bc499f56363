pub mod dto;
pub mod factories;
pub mod use_cases;
