//! Parameters for the classical elliptic-curve schemes

pub mod secp256k1;
