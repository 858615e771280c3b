pub mod bencode_value;
