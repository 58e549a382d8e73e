pub mod mixed;
pub mod modulo;
pub mod simple;
pub mod smooth;
