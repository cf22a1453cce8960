pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod ico;
pub mod icon;
pub mod logo;
pub mod serve;
pub mod util;
