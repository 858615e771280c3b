pub mod blocklist;
