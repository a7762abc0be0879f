pub mod logging;
pub mod reference;
