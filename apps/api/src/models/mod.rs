pub mod assignment;
pub mod curriculum;
