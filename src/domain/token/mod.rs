//! Token domain - on-chain symbol handling

mod symbol_decoder;

pub use symbol_decoder::decode_symbol;
