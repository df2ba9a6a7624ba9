/*
    * This module groups all data models, such as environment variables,
    * install payload definitions, and state structs.
*/

pub mod env_vars;
pub mod install;
pub mod state;
