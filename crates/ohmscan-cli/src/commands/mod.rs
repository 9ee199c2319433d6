pub mod codes;
pub mod scan;
