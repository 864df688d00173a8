pub mod uber;
