pub mod handle_range;
