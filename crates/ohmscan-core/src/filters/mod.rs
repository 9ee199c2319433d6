pub mod bilateral;
