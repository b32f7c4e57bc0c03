mod client;

pub use client::Wallet;
