pub mod breadth;
pub mod candle;
pub mod rotation;
pub mod settings;
