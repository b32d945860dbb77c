mod identifier;
mod punct;
mod string;
mod whitespace;

pub use identifier::*;
pub use punct::*;
pub use string::*;
pub use whitespace::*;
