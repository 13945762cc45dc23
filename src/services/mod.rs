// Work order command parsing
pub mod work_order_parser;
