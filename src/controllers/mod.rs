pub mod install_controller;
pub mod ping;
