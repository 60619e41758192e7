//! Infrastructure layer providing the connection to the Clouseau API.

pub mod clients;
