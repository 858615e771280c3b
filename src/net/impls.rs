pub mod ip_range;
